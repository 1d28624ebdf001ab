pub mod config;
pub mod context;
pub mod country;
pub mod error;
pub mod field;
pub mod input;
pub mod normalizer;
pub mod process;
pub mod stage;
pub mod unicode;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ConfigError, PhoneConfig, PhoneConfigBuilder};
pub use country::Country;
pub use country::data::{ARE, ARM, CAN, FRA, GBR, KAZ, RUS, UKR, USA};
pub use error::ValidationError;
pub use field::{
    BoundForm, FieldDescriptor, Form, FormField, ModelField, PhoneColumn, PhoneFormField,
};
pub use input::RawInput;
pub use normalizer::{PhoneNormalizer, normalize};
