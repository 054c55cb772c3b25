//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name, its phone numbers in insertion order, and an
/// optional birthday.
///
/// The name is fixed at creation. Phones may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.push_phone(phone);
        Ok(())
    }

    /// Append an already validated phone.
    pub fn push_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// The lookup happens before validation, so an unknown `old` reports
    /// `PhoneNotFound` even when `new` is malformed.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if no phone matches `old` exactly
    /// - `BookError::Validation` if `new` is not a valid phone
    pub fn change_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or(BookError::PhoneNotFound)?;

        let replacement = PhoneNumber::new(new)?;
        self.phones[index] = replacement;
        Ok(())
    }

    /// Validate `raw` and set it as the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, raw: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Phones joined by `"; "`.
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let birthday = self.birthday.as_ref().map_or("Not set", Birthday::as_str);
        write!(
            f,
            "{}: phones: {}; birthday: {}",
            self.name,
            self.phones_joined(),
            birthday
        )
    }
}
