use crate::{
    config::PhoneConfig,
    context::Context,
    country::{Country, all_countries},
    stage::Stage,
};
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// Country presets the samples below are written for.
    fn countries() -> &'static [Country] {
        all_countries()
    }

    /// General test samples (may or may not trigger changes)
    fn samples(_country: Country) -> &'static [&'static str] {
        &["+79161234567", " 8 (916) 123-45-67 ", "9161234567", ""]
    }

    /// Samples that must come back unchanged and still borrowed.
    fn should_pass_through(_country: Country) -> &'static [&'static str] {
        &["+79161234567", "+37412345678", "+4915002000684"]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform(_country: Country) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Inputs the stage must reject.
    fn should_reject(_country: Country) -> &'static [&'static str] {
        &[]
    }
}

/// Assert that a stage satisfies the universal stage contracts.
///
/// 1. `zero_copy_when_no_changes` → pass-through samples stay borrowed
/// 2. `stage_is_idempotent` → applying twice yields same result as once
/// 3. `needs_apply_is_sound` → a skipped stage would not have changed the text
/// 4. `transforms_and_rejects` → expected outputs and expected failures
/// 5. `no_panic_on_mixed_scripts` → survives arbitrary user input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes(&$stage);
        $crate::testing::stage_contract::stage_is_idempotent(&$stage);
        $crate::testing::stage_contract::needs_apply_is_sound(&$stage);
        $crate::testing::stage_contract::transforms_and_rejects(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
    };
}

fn run<'a, S: Stage>(stage: &S, text: Cow<'a, str>, ctx: &Context<'_>) -> Cow<'a, str> {
    if stage.needs_apply(&text, ctx).expect("needs_apply errored") {
        stage.apply(text, ctx).expect("apply errored")
    } else {
        text
    }
}

fn configs<S: StageTestConfig>() -> Vec<(Country, PhoneConfig)> {
    S::countries()
        .iter()
        .map(|&c| (c, PhoneConfig::for_country(c).expect("preset must build")))
        .collect()
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    for (country, config) in configs::<S>() {
        let ctx = Context::new(&config);
        for &input in S::should_pass_through(country) {
            let out = run(stage, Cow::Borrowed(input), &ctx);
            assert_eq!(out.as_ref(), input);
            assert!(
                matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)),
                "zero-copy violated for stage `{}` ({}, input: `{input}`)",
                stage.name(),
                country.code
            );
        }
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    for (country, config) in configs::<S>() {
        let ctx = Context::new(&config);
        for &input in S::samples(country) {
            let Ok(once) = stage.apply(Cow::Borrowed(input), &ctx) else {
                continue;
            };
            let twice = stage
                .apply(Cow::Owned(once.to_string()), &ctx)
                .expect("second pass rejected what the first pass produced");
            assert_eq!(
                once,
                twice,
                "apply() not idempotent for stage `{}` ({}) on `{input}`",
                stage.name(),
                country.code
            );
        }
    }
}

pub fn needs_apply_is_sound<S: StageTestConfig>(stage: &S) {
    for (country, config) in configs::<S>() {
        let ctx = Context::new(&config);
        for &input in S::samples(country).iter().chain(S::should_pass_through(country)) {
            if stage.needs_apply(input, &ctx).expect("needs_apply errored") {
                continue;
            }
            let out = stage.apply(Cow::Owned(input.to_owned()), &ctx);
            assert_eq!(
                out.as_deref(),
                Ok(input),
                "stage `{}` skipped `{input}` ({}) but apply() changes it",
                stage.name(),
                country.code
            );
        }
    }
}

pub fn transforms_and_rejects<S: StageTestConfig>(stage: &S) {
    for (country, config) in configs::<S>() {
        let ctx = Context::new(&config);
        for &(input, expected) in S::should_transform(country) {
            let out = run(stage, Cow::Borrowed(input), &ctx);
            assert_eq!(out.as_ref(), expected, "stage `{}` ({})", stage.name(), country.code);
        }
        for &input in S::should_reject(country) {
            let rejected = stage
                .needs_apply(input, &ctx)
                .and_then(|_| stage.apply(Cow::Borrowed(input), &ctx));
            assert!(
                rejected.is_err(),
                "stage `{}` ({}) accepted `{input}`",
                stage.name(),
                country.code
            );
        }
    }
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    let config = PhoneConfig::default();
    let ctx = Context::new(&config);
    for input in ["Тел: 8 (916) 123", "電話 ０９０ー１２３４", "٠١٢٣٤٥", "++--()", "\u{0}"] {
        let _ = stage.apply(Cow::Borrowed(input), &ctx);
    }
}
