//! Raw values as they arrive from a form submission or a model assignment.

use crate::error::ValidationError;
#[cfg(feature = "simd")]
use simdutf8::basic::from_utf8;

/// Untrusted input, either text or bytes that still need decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> RawInput<'a> {
    /// Borrow the input as `&str`, decoding bytes as UTF-8.
    pub fn decode(self) -> Result<&'a str, ValidationError> {
        match self {
            RawInput::Text(text) => Ok(text),
            RawInput::Bytes(bytes) => decode_utf8(bytes),
        }
    }
}

#[cfg(feature = "simd")]
fn decode_utf8(bytes: &[u8]) -> Result<&str, ValidationError> {
    from_utf8(bytes).map_err(|e| ValidationError::Encoding(e.to_string()))
}

#[cfg(not(feature = "simd"))]
fn decode_utf8(bytes: &[u8]) -> Result<&str, ValidationError> {
    std::str::from_utf8(bytes).map_err(|e| ValidationError::Encoding(e.to_string()))
}

impl<'a> From<&'a str> for RawInput<'a> {
    fn from(text: &'a str) -> Self {
        RawInput::Text(text)
    }
}

impl<'a> From<&'a String> for RawInput<'a> {
    fn from(text: &'a String) -> Self {
        RawInput::Text(text.as_str())
    }
}

impl<'a> From<&'a [u8]> for RawInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        RawInput::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for RawInput<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        RawInput::Bytes(bytes.as_slice())
    }
}

impl<'a> From<&'a Vec<u8>> for RawInput<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        RawInput::Bytes(bytes.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_borrowed_as_is() {
        let text = "8 (916) 123";
        let decoded = RawInput::from(text).decode().unwrap();
        assert_eq!(decoded.as_ptr(), text.as_ptr());
    }

    #[test]
    fn bytes_are_decoded() {
        assert_eq!(RawInput::from(b"9161234567").decode().unwrap(), "9161234567");
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = RawInput::from(b"916\xFF1234567").decode().unwrap_err();
        assert!(matches!(err, ValidationError::Encoding(_)));
    }
}
