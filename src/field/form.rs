use crate::{
    config::PhoneConfig, error::ValidationError, input::RawInput, normalizer::PhoneNormalizer,
};
use std::collections::{BTreeMap, HashMap};

/// What a form layer calls on each of its fields.
pub trait FormField: Send + Sync {
    fn required(&self) -> bool;

    /// Validate one submitted value. `None` means the key was absent and is
    /// handled like an empty value.
    fn clean(&self, value: Option<RawInput<'_>>) -> Result<String, ValidationError>;
}

/// Form input that accepts loosely formatted phone numbers.
#[derive(Clone, Default)]
pub struct PhoneFormField {
    normalizer: PhoneNormalizer,
}

impl PhoneFormField {
    pub fn new(config: PhoneConfig) -> Self {
        Self {
            normalizer: PhoneNormalizer::new(config),
        }
    }

    /// Same field with empty input allowed.
    pub fn optional(config: PhoneConfig) -> Self {
        Self::new(config.with_required(false))
    }

    /// Use a normalizer carrying custom stages.
    pub fn with_normalizer(normalizer: PhoneNormalizer) -> Self {
        Self { normalizer }
    }

    pub fn config(&self) -> &PhoneConfig {
        self.normalizer.config()
    }
}

impl FormField for PhoneFormField {
    fn required(&self) -> bool {
        self.normalizer.config().required()
    }

    fn clean(&self, value: Option<RawInput<'_>>) -> Result<String, ValidationError> {
        let value = value.unwrap_or(RawInput::Text(""));
        self.normalizer.normalize(value).map(|c| c.into_owned())
    }
}

/// An ordered set of named fields.
#[derive(Default)]
pub struct Form {
    fields: Vec<(String, Box<dyn FormField>)>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, field: impl FormField + 'static) -> Self {
        self.fields.push((name.into(), Box::new(field)));
        self
    }

    /// Clean every field against submitted `data`, collecting errors per field.
    pub fn bind(&self, data: &HashMap<&str, &str>) -> BoundForm {
        let mut bound = BoundForm::default();
        for (name, field) in &self.fields {
            let value = data.get(name.as_str()).map(|v| RawInput::Text(*v));
            match field.clean(value) {
                Ok(cleaned) => {
                    bound.cleaned_data.insert(name.clone(), cleaned);
                }
                Err(e) => {
                    bound
                        .errors
                        .entry(name.clone())
                        .or_default()
                        .push(e.to_string());
                }
            }
        }
        bound
    }
}

/// Result of [`Form::bind`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BoundForm {
    cleaned_data: BTreeMap<String, String>,
    errors: BTreeMap<String, Vec<String>>,
}

impl BoundForm {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn cleaned_data(&self) -> &BTreeMap<String, String> {
        &self.cleaned_data
    }

    /// Error messages keyed by field name.
    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone_form(field: PhoneFormField) -> Form {
        Form::new().field("phone", field)
    }

    #[test]
    fn clean_normalizes() {
        let field = PhoneFormField::default();
        assert_eq!(field.clean(Some("89161234567".into())).unwrap(), "+79161234567");
        assert_eq!(field.clean(Some(b"9161234567".into())).unwrap(), "+79161234567");
    }

    #[test]
    fn blank_submission_is_invalid_when_required() {
        let form = phone_form(PhoneFormField::default());
        let bound = form.bind(&HashMap::from([("phone", "          ")]));
        assert!(!bound.is_valid());
        assert_eq!(bound.errors()["phone"], vec!["This field is required.".to_owned()]);
        assert!(bound.cleaned_data().is_empty());
    }

    #[test]
    fn loose_formats_are_valid() {
        let form = phone_form(PhoneFormField::default());
        for raw in ["8(923 999-22-33 ", "+7 999 233-11-22", "+79162255059"] {
            let bound = form.bind(&HashMap::from([("phone", raw)]));
            assert!(bound.is_valid(), "{raw}: {:?}", bound.errors());
        }
        let bound = form.bind(&HashMap::from([("phone", "8(923 999-22-33 ")]));
        assert_eq!(bound.cleaned_data()["phone"], "+79239992233");
    }

    #[test]
    fn optional_field() {
        for (required, should_be_valid) in [(true, false), (false, true)] {
            let config = PhoneConfig::default().with_required(required);
            let form = phone_form(PhoneFormField::new(config));
            assert_eq!(form.bind(&HashMap::from([("phone", "")])).is_valid(), should_be_valid);
            assert_eq!(form.bind(&HashMap::new()).is_valid(), should_be_valid);
        }

        let form = phone_form(PhoneFormField::optional(PhoneConfig::default()));
        let bound = form.bind(&HashMap::new());
        assert_eq!(bound.cleaned_data()["phone"], "");
    }

    #[test]
    fn errors_are_reported_per_field() {
        let form = Form::new()
            .field("home", PhoneFormField::default())
            .field("work", PhoneFormField::default());
        let bound = form.bind(&HashMap::from([("home", "8916 abc"), ("work", "89161234567")]));
        assert!(!bound.is_valid());
        assert_eq!(bound.errors().len(), 1);
        assert!(bound.errors()["home"][0].contains("invalid character `a`"));
        assert_eq!(bound.cleaned_data()["work"], "+79161234567");
    }
}
