use crate::{
    context::Context,
    error::ValidationError,
    stage::Stage,
    unicode::{fullwidth_to_halfwidth, is_fullwidth},
};
use std::borrow::Cow;

/// Converts full-width (wide) ASCII forms to half-width (narrow) equivalents.
///
/// CJK input methods commonly produce `＋７（９１６）１２３－４５－６７`;
/// after this stage the rest of the chain only has to deal with ASCII:
///
/// - `０−９` → `0−9`
/// - `＋`, `（`, `）`, `－` → `+`, `(`, `)`, `-`
/// - `　` (U+3000) → ` ` (U+0020)
///
/// Pure 1:1 mapping → zero-copy when no full-width characters present.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnifyWidth;

impl Stage for UnifyWidth {
    fn name(&self) -> &'static str {
        "unify_width"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context<'_>) -> Result<bool, ValidationError> {
        // ASCII never needs it, and ASCII is what nearly everyone types
        if text.is_ascii() {
            return Ok(false);
        }
        Ok(text.chars().any(is_fullwidth))
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        _ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, ValidationError> {
        Ok(Cow::Owned(text.chars().map(fullwidth_to_halfwidth).collect()))
    }
}
