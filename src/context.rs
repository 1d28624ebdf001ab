// src/context.rs
// Passed by reference to every stage; borrows the field's configuration.

use crate::config::PhoneConfig;

/// Runtime context passed to every normalization stage.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub config: &'a PhoneConfig,
}

impl<'a> Context<'a> {
    #[inline(always)]
    pub fn new(config: &'a PhoneConfig) -> Self {
        Self { config }
    }
}
