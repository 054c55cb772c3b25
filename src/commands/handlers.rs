//! Handlers for each address book command.
//!
//! Every handler takes the already split argument list and returns either
//! the text to print or a [`BookError`]. Errors are turned into text by
//! [`super::execute`], never here.

use crate::directory::{AddressBook, Clock};
use crate::domain::ContactName;
use crate::error::{BookError, BookResult};
use crate::models::Record;

/// Borrow exactly `N` arguments, or fail with `NotEnoughArguments`.
fn exact_args<const N: usize>(args: &[String]) -> BookResult<&[String; N]> {
    <&[String; N]>::try_from(args).map_err(|_| BookError::NotEnoughArguments)
}

fn find_record<'a>(book: &'a AddressBook, name: &str) -> BookResult<&'a Record> {
    book.find(name).ok_or(BookError::ContactNotFound)
}

fn find_record_mut<'a>(book: &'a mut AddressBook, name: &str) -> BookResult<&'a mut Record> {
    book.find_mut(name).ok_or(BookError::ContactNotFound)
}

/// `add <name> <phone>`: create the contact if needed, then append the phone.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, phone] = exact_args::<2>(args)?;

    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_record(Record::new(ContactName::new(name.as_str())?));
        "Contact added."
    };

    // The record stays even when the phone is rejected.
    find_record_mut(book, name)?.add_phone(phone)?;
    tracing::debug!(name = %name, "Phone appended");
    Ok(message.to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, old_phone, new_phone] = exact_args::<3>(args)?;

    find_record_mut(book, name)?.change_phone(old_phone, new_phone)?;
    tracing::debug!(name = %name, "Phone changed");
    Ok("Phone changed.".to_string())
}

/// `phone <name>`
pub fn show_phone(args: &[String], book: &AddressBook) -> BookResult<String> {
    let [name] = exact_args::<1>(args)?;

    Ok(find_record(book, name)?.phones_joined())
}

/// `all`: every record, one per line, in insertion order.
pub fn show_all(book: &AddressBook) -> BookResult<String> {
    if book.is_empty() {
        return Ok("No contacts saved.".to_string());
    }

    Ok(book
        .iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, birthday] = exact_args::<2>(args)?;

    find_record_mut(book, name)?.add_birthday(birthday)?;
    tracing::debug!(name = %name, "Birthday set");
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> BookResult<String> {
    let [name] = exact_args::<1>(args)?;

    Ok(find_record(book, name)?
        .birthday()
        .map_or_else(|| "Birthday not set.".to_string(), |b| b.as_str().to_string()))
}

/// `birthdays`: `name - date` lines for the coming week.
pub fn upcoming_birthdays(book: &AddressBook, clock: &dyn Clock) -> BookResult<String> {
    let upcoming = book.upcoming_birthdays(clock.today());

    if upcoming.is_empty() {
        return Ok("No birthdays in the next 7 days.".to_string());
    }

    Ok(upcoming
        .iter()
        .map(|u| format!("{} - {}", u.name, u.formatted_date()))
        .collect::<Vec<_>>()
        .join("\n"))
}
