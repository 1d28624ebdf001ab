//! Field configuration.
//!
//! A [`PhoneConfig`] is fixed when a field is defined and never changes
//! afterwards. It is built through [`PhoneConfigBuilder`], which checks that
//! the options can actually produce canonical numbers.

use crate::country::{Country, CountryEntry, DEFAULT_COUNTRY, country_by_code};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// Minimum digits of a canonical number.
pub const DEFAULT_MIN_DIGITS: usize = 10;
/// `+` and the 15 digits allowed by E.164.
pub const DEFAULT_MAX_LENGTH: usize = 16;

pub(crate) const OPT_DEFAULT_COUNTRY_CODE: &str = "default_country_code";
pub(crate) const OPT_NATIONAL_PREFIX: &str = "national_prefix";
pub(crate) const OPT_NATIONAL_NUMBER_LENGTH: &str = "national_number_length";
pub(crate) const OPT_MIN_DIGITS: &str = "min_digits";
pub(crate) const OPT_MAX_LENGTH: &str = "max_length";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid country calling code `{0}`: expected 1 to 3 digits not starting with 0")]
    InvalidCountryCode(String),

    #[error("invalid national prefix `{0}`: expected a single digit")]
    InvalidNationalPrefix(char),

    #[error(
        "invalid length bounds: min_digits={min_digits}, max_length={max_length}, \
         national_number_length={national_number_length}"
    )]
    InvalidBounds {
        min_digits: usize,
        max_length: usize,
        national_number_length: usize,
    },

    #[error("unknown country `{0}`")]
    UnknownCountry(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("invalid value for option `{key}`: {reason}")]
    InvalidOption { key: String, reason: String },

    #[error("unexpected positional arguments: got {0}, expected none")]
    UnexpectedArguments(usize),

    #[error("descriptor path `{found}` does not match `{expected}`")]
    PathMismatch { expected: &'static str, found: String },

    #[error("descriptor serialization failed: {0}")]
    Descriptor(#[from] serde_json::Error),
}

/// Immutable normalization options of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneConfig {
    default_country_code: String,
    national_prefix: Option<char>,
    national_number_length: usize,
    min_digits: usize,
    max_length: usize,
    required: bool,
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self::from_entry(DEFAULT_COUNTRY.entry().unwrap_or(FALLBACK_ENTRY))
    }
}

const FALLBACK_ENTRY: CountryEntry = CountryEntry {
    calling_code: "7",
    national_prefix: Some('8'),
    national_number_length: 10,
};

impl PhoneConfig {
    pub fn builder() -> PhoneConfigBuilder {
        PhoneConfigBuilder::default()
    }

    /// Preset for a country from the static table, with default bounds.
    pub fn for_country(country: Country) -> Result<Self, ConfigError> {
        PhoneConfigBuilder::default().country(country)?.build()
    }

    /// Same as [`PhoneConfig::for_country`], keyed by ISO alpha-2 code.
    pub fn for_country_code(code: &str) -> Result<Self, ConfigError> {
        let country =
            country_by_code(code).ok_or_else(|| ConfigError::UnknownCountry(code.to_owned()))?;
        Self::for_country(country)
    }

    fn from_entry(entry: CountryEntry) -> Self {
        Self {
            default_country_code: entry.calling_code.to_owned(),
            national_prefix: entry.national_prefix,
            national_number_length: entry.national_number_length,
            min_digits: DEFAULT_MIN_DIGITS,
            max_length: DEFAULT_MAX_LENGTH,
            required: true,
        }
    }

    #[inline(always)]
    pub fn default_country_code(&self) -> &str {
        &self.default_country_code
    }
    #[inline(always)]
    pub fn national_prefix(&self) -> Option<char> {
        self.national_prefix
    }
    #[inline(always)]
    pub fn national_number_length(&self) -> usize {
        self.national_number_length
    }
    #[inline(always)]
    pub fn min_digits(&self) -> usize {
        self.min_digits
    }
    #[inline(always)]
    pub fn max_length(&self) -> usize {
        self.max_length
    }
    #[inline(always)]
    pub fn required(&self) -> bool {
        self.required
    }

    /// Copy of this config with a different `required` flag.
    pub fn with_required(&self, required: bool) -> Self {
        Self {
            required,
            ..self.clone()
        }
    }

    /// Options that differ from [`PhoneConfig::default`], keyed by option name.
    /// `required` is left to the adapters, which name it differently.
    pub(crate) fn changed_options(&self) -> BTreeMap<String, Value> {
        let default = Self::default();
        let mut out = BTreeMap::new();
        if self.default_country_code != default.default_country_code {
            out.insert(
                OPT_DEFAULT_COUNTRY_CODE.to_owned(),
                Value::from(self.default_country_code.clone()),
            );
        }
        if self.national_prefix != default.national_prefix {
            let value = match self.national_prefix {
                Some(p) => Value::from(p.to_string()),
                None => Value::Null,
            };
            out.insert(OPT_NATIONAL_PREFIX.to_owned(), value);
        }
        if self.national_number_length != default.national_number_length {
            out.insert(
                OPT_NATIONAL_NUMBER_LENGTH.to_owned(),
                Value::from(self.national_number_length),
            );
        }
        if self.min_digits != default.min_digits {
            out.insert(OPT_MIN_DIGITS.to_owned(), Value::from(self.min_digits));
        }
        if self.max_length != default.max_length {
            out.insert(OPT_MAX_LENGTH.to_owned(), Value::from(self.max_length));
        }
        out
    }
}

#[derive(Debug, Clone)]
pub struct PhoneConfigBuilder {
    default_country_code: String,
    national_prefix: Option<char>,
    national_number_length: usize,
    min_digits: usize,
    max_length: usize,
    required: bool,
}

impl Default for PhoneConfigBuilder {
    fn default() -> Self {
        let config = PhoneConfig::default();
        Self {
            default_country_code: config.default_country_code,
            national_prefix: config.national_prefix,
            national_number_length: config.national_number_length,
            min_digits: config.min_digits,
            max_length: config.max_length,
            required: config.required,
        }
    }
}

impl PhoneConfigBuilder {
    /// Take calling code, national prefix and national length from the preset table.
    pub fn country(mut self, country: Country) -> Result<Self, ConfigError> {
        let entry = country
            .entry()
            .ok_or_else(|| ConfigError::UnknownCountry(country.code.to_owned()))?;
        self.default_country_code = entry.calling_code.to_owned();
        self.national_prefix = entry.national_prefix;
        self.national_number_length = entry.national_number_length;
        Ok(self)
    }

    pub fn default_country_code(mut self, code: impl Into<String>) -> Self {
        self.default_country_code = code.into();
        self
    }

    pub fn national_prefix(mut self, prefix: Option<char>) -> Self {
        self.national_prefix = prefix;
        self
    }

    pub fn national_number_length(mut self, len: usize) -> Self {
        self.national_number_length = len;
        self
    }

    pub fn min_digits(mut self, min: usize) -> Self {
        self.min_digits = min;
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = max;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set one option from its serialized form, as found in field descriptors.
    pub(crate) fn set_option(mut self, key: &str, value: &Value) -> Result<Self, ConfigError> {
        match key {
            OPT_DEFAULT_COUNTRY_CODE => {
                let code = value
                    .as_str()
                    .ok_or_else(|| invalid_option(key, "expected a string of digits"))?;
                self.default_country_code = code.to_owned();
            }
            OPT_NATIONAL_PREFIX => {
                self.national_prefix = match value {
                    Value::Null => None,
                    Value::String(s) => {
                        let mut chars = s.chars();
                        match (chars.next(), chars.next()) {
                            (Some(c), None) => Some(c),
                            _ => return Err(invalid_option(key, "expected a single digit")),
                        }
                    }
                    _ => return Err(invalid_option(key, "expected a string or null")),
                };
            }
            OPT_NATIONAL_NUMBER_LENGTH => self.national_number_length = as_usize(key, value)?,
            OPT_MIN_DIGITS => self.min_digits = as_usize(key, value)?,
            OPT_MAX_LENGTH => self.max_length = as_usize(key, value)?,
            other => return Err(ConfigError::UnknownOption(other.to_owned())),
        }
        Ok(self)
    }

    pub fn build(self) -> Result<PhoneConfig, ConfigError> {
        self.validate().inspect_err(|e| debug!(error = %e, "rejected phone config"))?;
        Ok(PhoneConfig {
            default_country_code: self.default_country_code,
            national_prefix: self.national_prefix,
            national_number_length: self.national_number_length,
            min_digits: self.min_digits,
            max_length: self.max_length,
            required: self.required,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let code = &self.default_country_code;
        if code.is_empty()
            || code.len() > 3
            || code.starts_with('0')
            || !code.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ConfigError::InvalidCountryCode(code.clone()));
        }
        if let Some(prefix) = self.national_prefix.filter(|p| !p.is_ascii_digit()) {
            return Err(ConfigError::InvalidNationalPrefix(prefix));
        }
        // A local number gets the calling code prepended; it must still fit.
        let local_len = 1 + code.len() + self.national_number_length;
        if self.national_number_length == 0
            || self.min_digits == 0
            || self.min_digits >= self.max_length
            || local_len > self.max_length
        {
            return Err(ConfigError::InvalidBounds {
                min_digits: self.min_digits,
                max_length: self.max_length,
                national_number_length: self.national_number_length,
            });
        }
        Ok(())
    }
}

fn invalid_option(key: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidOption {
        key: key.to_owned(),
        reason: reason.to_owned(),
    }
}

fn as_usize(key: &str, value: &Value) -> Result<usize, ConfigError> {
    value
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| invalid_option(key, "expected a non-negative integer"))
}
