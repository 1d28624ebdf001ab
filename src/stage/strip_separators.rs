use crate::{
    context::Context, error::ValidationError, stage::Stage, unicode::is_separator,
};
use memchr::{memchr, memchr3};
use std::borrow::Cow;

/// Removes the formatting users put between digit groups: parentheses,
/// dashes and whitespace. `+` and digits are left for the next stages.
pub struct StripSeparators;

impl Stage for StripSeparators {
    fn name(&self) -> &'static str {
        "strip_separators"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context<'_>) -> Result<bool, ValidationError> {
        let bytes = text.as_bytes();
        if memchr3(b'(', b')', b'-', bytes).is_some() || memchr(b' ', bytes).is_some() {
            return Ok(true);
        }
        Ok(text.chars().any(char::is_whitespace))
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        _ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, ValidationError> {
        let mut out = String::with_capacity(text.len());
        out.extend(text.chars().filter(|&c| !is_separator(c)));
        Ok(Cow::Owned(out))
    }
}
