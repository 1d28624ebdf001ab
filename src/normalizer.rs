use crate::{
    config::PhoneConfig,
    context::Context,
    error::ValidationError,
    input::RawInput,
    process::{DynamicProcess, EmptyProcess, Process},
    stage::{
        CheckCharacters, CheckLength, ResolveCountryCode, Stage, StripSeparators, TrimWhitespace,
        UnifyWidth,
    },
};
use std::borrow::Cow;
use tracing::debug;

/// Normalize `input` into a canonical `+<digits>` string.
///
/// Empty or whitespace-only input yields `""` when the config is optional and
/// [`ValidationError::Required`] otherwise. Input that is already canonical
/// comes back borrowed.
///
/// ```
/// use phonefields::{PhoneConfig, normalize};
///
/// let config = PhoneConfig::default();
/// assert_eq!(normalize(" 8(916)-123-45-67 ", &config).unwrap(), "+79161234567");
/// assert_eq!(normalize("+37412345678", &config).unwrap(), "+37412345678");
/// ```
pub fn normalize<'a>(
    input: impl Into<RawInput<'a>>,
    config: &PhoneConfig,
) -> Result<Cow<'a, str>, ValidationError> {
    run(input.into(), config, &EmptyProcess)
}

fn run<'a, P: Process>(
    input: RawInput<'a>,
    config: &PhoneConfig,
    custom: &P,
) -> Result<Cow<'a, str>, ValidationError> {
    let ctx = Context::new(config);
    let result = input.decode().and_then(|text| {
        let cleaned = EmptyProcess
            .then(UnifyWidth)
            .then(TrimWhitespace)
            .process(Cow::Borrowed(text), &ctx)?;
        if cleaned.is_empty() {
            return if config.required() {
                Err(ValidationError::Required)
            } else {
                Ok(cleaned)
            };
        }
        let cleaned = custom.process(cleaned, &ctx)?;
        EmptyProcess
            .then(StripSeparators)
            .then(CheckCharacters)
            .then(ResolveCountryCode)
            .then(CheckLength)
            .process(cleaned, &ctx)
    });
    if let Err(e) = &result {
        debug!(error = %e, "phone number rejected");
    }
    result
}

/// A [`PhoneConfig`] plus optional caller stages.
///
/// Caller stages run after trimming and before separators are stripped, so
/// they see the number roughly as the user typed it.
#[derive(Clone, Default)]
pub struct PhoneNormalizer {
    config: PhoneConfig,
    custom: DynamicProcess,
}

impl PhoneNormalizer {
    pub fn new(config: PhoneConfig) -> Self {
        Self {
            config,
            custom: DynamicProcess::new(),
        }
    }

    pub fn builder() -> PhoneNormalizerBuilder {
        PhoneNormalizerBuilder::default()
    }

    #[inline(always)]
    pub fn config(&self) -> &PhoneConfig {
        &self.config
    }

    pub fn normalize<'a>(
        &self,
        input: impl Into<RawInput<'a>>,
    ) -> Result<Cow<'a, str>, ValidationError> {
        run(input.into(), &self.config, &self.custom)
    }
}

#[derive(Default)]
pub struct PhoneNormalizerBuilder {
    config: PhoneConfig,
    custom: DynamicProcess,
}

impl PhoneNormalizerBuilder {
    pub fn config(mut self, config: PhoneConfig) -> Self {
        self.config = config;
        self
    }

    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.custom = self.custom.push(stage);
        self
    }

    pub fn build(self) -> PhoneNormalizer {
        PhoneNormalizer {
            config: self.config,
            custom: self.custom,
        }
    }
}
