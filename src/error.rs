use thiserror::Error;

/// Why a raw value was rejected.
///
/// The `Display` text is what form adapters show next to the field, so every
/// message is a complete, user-facing sentence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required.")]
    Required,

    #[error("Phone number is not valid UTF-8: {0}")]
    Encoding(String),

    #[error("Phone number contains an invalid character `{0}`.")]
    InvalidCharacter(char),

    #[error("`+` is only allowed at the start of a phone number.")]
    MisplacedPlus,

    #[error("Phone number must contain at least one digit.")]
    NoDigits,

    #[error("Cannot determine the country code of `{0}`.")]
    AmbiguousCountryCode(String),

    #[error("Phone number has {digits} digits, at least {min} are required.")]
    TooShort { digits: usize, min: usize },

    #[error("Phone number `{number}` is longer than {max} characters.")]
    TooLong { number: String, max: usize },
}
