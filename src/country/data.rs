use crate::country::{Country, CountryEntry};

use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates the constants and the lookup table from one list
/// ---------------------------------------------------------------------------
macro_rules! define_countries {
($(
        $ident:ident, $code_str:literal, $name:literal,
        calling_code: $calling:literal,
        national_prefix: $prefix:expr,
        national_number_length: $len:literal
    ),* $(,)?) => {
        $(
            pub const $ident: Country = Country { code: $code_str, name: $name };
        )*

        pub static COUNTRY_TABLE: Map<&'static str, CountryEntry> = phf_map! {
            $(
                $code_str => CountryEntry {
                    calling_code: $calling,
                    national_prefix: $prefix,
                    national_number_length: $len,
                },
            )*
        };

        pub(crate) static ALL_COUNTRIES: &[Country] = &[$($ident),*];
    };
}

define_countries! {
    RUS, "RU", "Russia",
        calling_code: "7", national_prefix: Some('8'), national_number_length: 10,
    KAZ, "KZ", "Kazakhstan",
        calling_code: "7", national_prefix: Some('8'), national_number_length: 10,
    USA, "US", "United States",
        calling_code: "1", national_prefix: Some('1'), national_number_length: 10,
    CAN, "CA", "Canada",
        calling_code: "1", national_prefix: Some('1'), national_number_length: 10,
    GBR, "GB", "United Kingdom",
        calling_code: "44", national_prefix: Some('0'), national_number_length: 10,
    FRA, "FR", "France",
        calling_code: "33", national_prefix: Some('0'), national_number_length: 9,
    ARM, "AM", "Armenia",
        calling_code: "374", national_prefix: Some('0'), national_number_length: 8,
    UKR, "UA", "Ukraine",
        calling_code: "380", national_prefix: Some('0'), national_number_length: 9,
    ARE, "AE", "United Arab Emirates",
        calling_code: "971", national_prefix: Some('0'), national_number_length: 9,
}
