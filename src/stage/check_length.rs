use crate::{context::Context, error::ValidationError, stage::Stage};
use std::borrow::Cow;

/// Enforces `min_digits` and `max_length` on the canonical string.
pub struct CheckLength;

impl Stage for CheckLength {
    fn name(&self) -> &'static str {
        "check_length"
    }

    fn needs_apply(&self, _: &str, _: &Context<'_>) -> Result<bool, ValidationError> {
        Ok(true)
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, ValidationError> {
        let config = ctx.config;
        let digits = text.strip_prefix('+').unwrap_or(&text).len();
        if digits < config.min_digits() {
            return Err(ValidationError::TooShort {
                digits,
                min: config.min_digits(),
            });
        }
        if text.len() > config.max_length() {
            return Err(ValidationError::TooLong {
                number: text.into_owned(),
                max: config.max_length(),
            });
        }
        Ok(text)
    }
}
