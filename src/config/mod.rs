//! Configuration module
//!
//! This module handles the configuration record and its construction
//! from command-line arguments and environment variables.

mod defaults;
mod loading;
mod types;
mod validation;

use crate::types::ValidationError;
use thiserror::Error;

pub use loading::load_config;
pub use types::{Config, Mode};

/// Fatal configuration errors, detected before any listener is started
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Mode was neither `count` nor `log`
    #[error("Invalid mode specified. Valid modes are 'count' and 'log'.")]
    InvalidMode(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
