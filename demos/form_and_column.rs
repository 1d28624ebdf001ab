use std::{collections::HashMap, error::Error};

use phonefields::{
    FieldDescriptor, Form, ModelField, PhoneColumn, PhoneConfig, PhoneFormField, USA,
};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // ────────────────────────────────────────────────────────────────
    // Form input – errors are reported next to the field
    // ────────────────────────────────────────────────────────────────
    let form = Form::new()
        .field("mobile", PhoneFormField::default())
        .field("office", PhoneFormField::optional(PhoneConfig::default()));

    let bound = form.bind(&HashMap::from([("mobile", " 8(916)-123-45-67 "), ("office", "")]));
    println!("valid: {} → {:?}", bound.is_valid(), bound.cleaned_data());
    // → valid: true → {"mobile": "+79161234567", "office": ""}

    let bound = form.bind(&HashMap::from([("mobile", "call me")]));
    println!("valid: {} → {:?}", bound.is_valid(), bound.errors());
    // → valid: false → {"mobile": ["Phone number contains an invalid character `c`."]}

    // ────────────────────────────────────────────────────────────────
    // Storage column – normalized before saving, described for migrations
    // ────────────────────────────────────────────────────────────────
    let column = PhoneColumn::new(PhoneConfig::for_country(USA)?).with_name("phone");
    println!("stored: {}", column.pre_save("(923) 111-2233".into())?);
    // → stored: +19231112233

    let json = column.deconstruct().to_json()?;
    println!("descriptor: {json}");

    let restored = PhoneColumn::from_descriptor(&FieldDescriptor::from_json(&json)?)?;
    assert_eq!(restored, column);

    Ok(())
}
