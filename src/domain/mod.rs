//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the validated fields of a
//! contact: its name, phone numbers and birthday. Each value object is
//! validated once at construction and is immutable afterwards.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{format_date, Birthday, DATE_FORMAT};
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
