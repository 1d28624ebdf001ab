use crate::{
    config::{ConfigError, PhoneConfig},
    error::ValidationError,
    input::RawInput,
    normalizer::normalize,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Import path recorded in descriptors of [`PhoneColumn`].
pub const PHONE_COLUMN_PATH: &str = "phonefields::field::PhoneColumn";

const OPT_BLANK: &str = "blank";

/// What a model layer calls on a storage column.
pub trait ModelField {
    /// Value to store for `value`.
    fn pre_save(&self, value: RawInput<'_>) -> Result<String, ValidationError>;

    /// Width of the text column.
    fn max_length(&self) -> usize;

    /// Everything schema tooling needs to rebuild an identical field.
    fn deconstruct(&self) -> FieldDescriptor;
}

/// `(name, path, args, kwargs)` as written into migration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: Option<String>,
    pub path: String,
    #[serde(default)]
    pub args: Vec<Value>,
    #[serde(default)]
    pub kwargs: BTreeMap<String, Value>,
}

impl FieldDescriptor {
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Text column that stores canonical phone numbers.
///
/// `blank` is the inverse of [`PhoneConfig::required`]: a blank column stores
/// `""` for empty input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneColumn {
    name: Option<String>,
    config: PhoneConfig,
}

impl PhoneColumn {
    pub fn new(config: PhoneConfig) -> Self {
        Self { name: None, config }
    }

    /// Attribute name on the owning model.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn config(&self) -> &PhoneConfig {
        &self.config
    }

    pub fn blank(&self) -> bool {
        !self.config.required()
    }

    /// Rebuild a column from [`ModelField::deconstruct`] output.
    pub fn from_descriptor(descriptor: &FieldDescriptor) -> Result<Self, ConfigError> {
        if descriptor.path != PHONE_COLUMN_PATH {
            return Err(ConfigError::PathMismatch {
                expected: PHONE_COLUMN_PATH,
                found: descriptor.path.clone(),
            });
        }
        if !descriptor.args.is_empty() {
            return Err(ConfigError::UnexpectedArguments(descriptor.args.len()));
        }
        let mut builder = PhoneConfig::builder();
        for (key, value) in &descriptor.kwargs {
            builder = if key == OPT_BLANK {
                let blank = value.as_bool().ok_or_else(|| ConfigError::InvalidOption {
                    key: key.clone(),
                    reason: "expected a boolean".to_owned(),
                })?;
                builder.required(!blank)
            } else {
                builder.set_option(key, value)?
            };
        }
        let column = Self {
            name: descriptor.name.clone(),
            config: builder.build()?,
        };
        debug!(name = ?column.name, "rebuilt phone column from descriptor");
        Ok(column)
    }
}

impl ModelField for PhoneColumn {
    fn pre_save(&self, value: RawInput<'_>) -> Result<String, ValidationError> {
        normalize(value, &self.config).map(|c| c.into_owned())
    }

    fn max_length(&self) -> usize {
        self.config.max_length()
    }

    fn deconstruct(&self) -> FieldDescriptor {
        let mut kwargs = self.config.changed_options();
        if self.blank() {
            kwargs.insert(OPT_BLANK.to_owned(), Value::Bool(true));
        }
        FieldDescriptor {
            name: self.name.clone(),
            path: PHONE_COLUMN_PATH.to_owned(),
            args: Vec::new(),
            kwargs,
        }
    }
}
