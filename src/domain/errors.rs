//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    #[error("Contact name cannot be empty.")]
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    #[error("Phone number must contain 10 digits.")]
    InvalidPhone(String),

    /// The provided birthday is not a real date in `DD.MM.YYYY` form.
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthday(String),
}
