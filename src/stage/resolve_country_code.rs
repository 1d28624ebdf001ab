use crate::{context::Context, error::ValidationError, stage::Stage};
use std::borrow::Cow;
use tracing::trace;

/// Turns a digit string into `+<country code><number>`.
///
/// Expects the output of [`CheckCharacters`](super::CheckCharacters):
///
/// | input                                                  | result                         |
/// |--------------------------------------------------------|--------------------------------|
/// | starts with `+`                                        | unchanged                      |
/// | exactly `national_number_length` digits                | calling code prepended         |
/// | one digit longer and starting with the national prefix | prefix replaced by calling code |
/// | shorter than `national_number_length`                  | rejected as ambiguous          |
/// | anything longer                                        | already carries a country code |
///
/// A leading `+` always wins: `+8…` is never treated as a national number.
pub struct ResolveCountryCode;

impl Stage for ResolveCountryCode {
    fn name(&self) -> &'static str {
        "resolve_country_code"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context<'_>) -> Result<bool, ValidationError> {
        Ok(!text.starts_with('+'))
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, ValidationError> {
        if text.starts_with('+') {
            return Ok(text);
        }
        let config = ctx.config;
        let code = config.default_country_code();
        let national_len = config.national_number_length();
        let len = text.len();

        let mut out = String::with_capacity(1 + code.len() + len);
        out.push('+');
        if len == national_len {
            trace!(code, "local number, prepending country code");
            out.push_str(code);
            out.push_str(&text);
        } else if len == national_len + 1
            && config
                .national_prefix()
                .is_some_and(|prefix| text.starts_with(prefix))
        {
            trace!(code, "national prefix replaced by country code");
            out.push_str(code);
            out.push_str(&text[1..]);
        } else if len < national_len {
            return Err(ValidationError::AmbiguousCountryCode(text.into_owned()));
        } else {
            out.push_str(&text);
        }
        Ok(Cow::Owned(out))
    }
}
