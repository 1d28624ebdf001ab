use crate::{context::Context, error::ValidationError, stage::Stage};
use std::borrow::Cow;

/// Accepts only an optional leading `+` followed by ASCII digits.
///
/// Runs after separators are stripped, so anything else left over is a
/// character the user should not have typed.
pub struct CheckCharacters;

impl Stage for CheckCharacters {
    fn name(&self) -> &'static str {
        "check_characters"
    }

    fn needs_apply(&self, _: &str, _: &Context<'_>) -> Result<bool, ValidationError> {
        Ok(true)
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        _: &Context<'_>,
    ) -> Result<Cow<'a, str>, ValidationError> {
        let digits = text.strip_prefix('+').unwrap_or(&text);
        if let Some(c) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(match c {
                '+' => ValidationError::MisplacedPlus,
                other => ValidationError::InvalidCharacter(other),
            });
        }
        if digits.is_empty() {
            return Err(ValidationError::NoDigits);
        }
        Ok(text)
    }
}
