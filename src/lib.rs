//! Contact Book - an in-memory contact directory with validated fields.
//!
//! Contacts carry a name, any number of ten-digit phone numbers and an
//! optional birthday. The address book answers which birthdays fall in the
//! coming week, moving weekend dates to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The contact record
//! - **directory**: The address book and the upcoming birthday query
//! - **commands**: Named operations and the error-to-text boundary
//! - **shell**: Line-oriented command loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod shell;

pub use commands::{execute, Command};
pub use config::Config;
pub use directory::{AddressBook, Clock, FixedClock, SystemClock, UpcomingBirthday};
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::Record;
pub use shell::{Reply, Shell};
