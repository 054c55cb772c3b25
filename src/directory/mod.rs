//! The address book: records keyed by name, plus the upcoming birthday query.
//!
//! Iteration order is insertion order of names. Overwriting a record keeps
//! the name's original position.

mod clock;

pub use clock::{Clock, FixedClock, SystemClock};

use crate::domain::format_date;
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashMap;

/// How many days ahead (inclusive) the upcoming birthday query looks.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// A birthday that falls within the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// The day to congratulate on; weekend birthdays move to Monday
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `DD.MM.YYYY`.
    pub fn formatted_date(&self) -> String {
        format_date(self.congratulation_date)
    }
}

/// In-memory collection of records, one per name.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-match lookup by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Insert `record` under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if !self.records.contains_key(&key) {
            self.order.push(key.clone());
        }
        tracing::debug!(name = %key, "Record stored");
        self.records.insert(key, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Birthdays falling within [`UPCOMING_WINDOW_DAYS`] days of `today`,
    /// inclusive of today, in insertion order.
    ///
    /// Each birthday is projected onto this year, or next year if it has
    /// already passed. A projection landing on Saturday or Sunday is
    /// congratulated on the following Monday.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let upcoming: Vec<UpcomingBirthday> = self
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;

                let mut next = birthday.anniversary_in(today.year())?;
                if next < today {
                    next = birthday.anniversary_in(today.year() + 1)?;
                }

                let delta = (next - today).num_days();
                if !(0..=UPCOMING_WINDOW_DAYS).contains(&delta) {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    congratulation_date: shift_off_weekend(next),
                })
            })
            .collect();

        tracing::debug!(
            today = %today,
            result_count = upcoming.len(),
            "Upcoming birthdays computed"
        );

        upcoming
    }
}

/// Saturday and Sunday move to the following Monday.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactName;

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(name: &str, birthday: Option<&str>) -> Record {
        let mut r = Record::new(ContactName::new(name).unwrap());
        r.add_phone("1234567890").unwrap();
        if let Some(b) = birthday {
            r.add_birthday(b).unwrap();
        }
        r
    }

    #[test]
    fn test_find_is_exact() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", None));
        assert!(book.find("Alice").is_some());
        assert!(book.find("alice").is_none());
        assert!(book.find("Alice ").is_none());
    }

    #[test]
    fn test_add_record_overwrites_and_keeps_position() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", None));
        book.add_record(record("Bob", None));
        book.add_record(record("Alice", Some("01.01.1990")));

        assert_eq!(book.len(), 2);
        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert!(book.find("Alice").unwrap().birthday().is_some());
    }

    #[test]
    fn test_shift_off_weekend() {
        // 15.06.2024 is a Saturday
        assert_eq!(shift_off_weekend(date(15, 6, 2024)), date(17, 6, 2024));
        assert_eq!(shift_off_weekend(date(16, 6, 2024)), date(17, 6, 2024));
        assert_eq!(shift_off_weekend(date(14, 6, 2024)), date(14, 6, 2024));
    }

    #[test]
    fn test_upcoming_weekday_not_shifted() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", Some("12.06.1990")));

        let upcoming = book.upcoming_birthdays(date(10, 6, 2024));
        assert_eq!(
            upcoming,
            vec![UpcomingBirthday {
                name: "Alice".to_string(),
                congratulation_date: date(12, 6, 2024),
            }]
        );
        assert_eq!(upcoming[0].formatted_date(), "12.06.2024");
    }

    #[test]
    fn test_upcoming_window_bounds() {
        let mut book = AddressBook::new();
        book.add_record(record("Today", Some("10.06.1980")));
        book.add_record(record("Seven", Some("17.06.1980")));
        book.add_record(record("Eight", Some("18.06.1980")));
        book.add_record(record("Yesterday", Some("09.06.1980")));
        book.add_record(record("NoBirthday", None));

        let names: Vec<String> = book
            .upcoming_birthdays(date(10, 6, 2024))
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["Today", "Seven"]);
    }

    #[test]
    fn test_upcoming_rolls_into_next_year() {
        let mut book = AddressBook::new();
        // 02.01.2025 is a Thursday
        book.add_record(record("NewYear", Some("02.01.2000")));

        let upcoming = book.upcoming_birthdays(date(28, 12, 2024));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].congratulation_date, date(2, 1, 2025));
    }

    #[test]
    fn test_upcoming_leap_day_in_common_year() {
        let mut book = AddressBook::new();
        book.add_record(record("Leap", Some("29.02.2000")));

        // 01.03.2023 is a Wednesday
        let upcoming = book.upcoming_birthdays(date(27, 2, 2023));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].congratulation_date, date(1, 3, 2023));
    }

    #[test]
    fn test_upcoming_empty_book() {
        let book = AddressBook::new();
        assert!(book.upcoming_birthdays(date(1, 1, 2024)).is_empty());
    }
}
