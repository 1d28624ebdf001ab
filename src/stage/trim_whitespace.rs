use crate::{context::Context, error::ValidationError, stage::Stage};
use std::borrow::Cow;

/// Drops leading and trailing whitespace, ASCII and Unicode alike.
pub struct TrimWhitespace;

impl Stage for TrimWhitespace {
    fn name(&self) -> &'static str {
        "trim_ws"
    }

    fn needs_apply(&self, text: &str, _: &Context<'_>) -> Result<bool, ValidationError> {
        // Fast path for ASCII
        let b = text.as_bytes();
        if b.first().is_some_and(u8::is_ascii_whitespace)
            || b.last().is_some_and(u8::is_ascii_whitespace)
        {
            return Ok(true);
        }

        // Fallback for Unicode whitespace
        Ok(text.chars().next().is_some_and(char::is_whitespace)
            || text.chars().next_back().is_some_and(char::is_whitespace))
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        _: &Context<'_>,
    ) -> Result<Cow<'a, str>, ValidationError> {
        Ok(match text {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
            Cow::Owned(s) => {
                let trimmed = s.trim();
                if trimmed.len() == s.len() {
                    Cow::Owned(s)
                } else {
                    Cow::Owned(trimmed.to_owned())
                }
            }
        })
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, country::Country, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for TrimWhitespace {
        fn samples(_: Country) -> &'static [&'static str] {
            &[" 8 (916) 123-45-67 ", "\t+79161234567\n", "　89161234567", "   ", ""]
        }

        fn should_transform(_: Country) -> &'static [(&'static str, &'static str)] {
            &[
                (" 8(916)-123-45-67 ", "8(916)-123-45-67"),
                ("\u{a0}+7 999 233-11-22\r\n", "+7 999 233-11-22"),
                ("          ", ""),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(TrimWhitespace);
    }
}
