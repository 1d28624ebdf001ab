//! Adapters binding the normalizer to a host framework.
//!
//! Both adapters hold their configuration and delegate to
//! [`normalize`](crate::normalize); the traits below are the whole surface a
//! form layer or a model layer needs to call.

pub mod column;
pub mod form;

pub use column::{FieldDescriptor, ModelField, PhoneColumn};
pub use form::{BoundForm, Form, FormField, PhoneFormField};
