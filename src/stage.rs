//! Core normalization stage abstraction.
//!
//! A phone number goes through a short, fixed chain of stages. Each stage
//! gets a cheap `needs_apply` pre-check so that input which is already clean
//! (most importantly, an already canonical `+<digits>` string) travels the
//! whole chain as `Cow::Borrowed` and is returned without allocating.
//!
//! Validation stages never change the text: they answer `needs_apply` with
//! `true` and either return the input untouched or fail.

pub mod check_characters;
pub mod check_length;
pub mod resolve_country_code;
pub mod strip_separators;
pub mod trim_whitespace;
pub mod unify_width;

use crate::{context::Context, error::ValidationError};
use std::borrow::Cow;

pub use check_characters::CheckCharacters;
pub use check_length::CheckLength;
pub use resolve_country_code::ResolveCountryCode;
pub use strip_separators::StripSeparators;
pub use trim_whitespace::TrimWhitespace;
pub use unify_width::UnifyWidth;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for tracing and test diagnostics.
    fn name(&self) -> &'static str;

    /// Fast pre-check.  Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context<'_>) -> Result<bool, ValidationError>;

    /// Allocation-aware transformation.  Must always be correct.
    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, ValidationError>;
}
