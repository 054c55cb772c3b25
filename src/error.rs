//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The `Display` text of [`BookError`] is exactly what the command boundary prints.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while running a contact book operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field failed validation; shown with the validator's own message
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record exists for the given name
    #[error("Contact not found.")]
    ContactNotFound,

    /// The record has no phone equal to the one given
    #[error("Phone not found.")]
    PhoneNotFound,

    /// The operation was given the wrong number of arguments
    #[error("Not enough arguments.")]
    NotEnoughArguments,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
