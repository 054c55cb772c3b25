//! Integration tests for the upcoming birthday query.
//!
//! Calendar anchors used below (2024):
//! - 10.06 Monday, 13.06 Thursday, 15.06 Saturday, 16.06 Sunday, 17.06 Monday

use chrono::NaiveDate;
use contact_book::{AddressBook, ContactName, Record, UpcomingBirthday};

fn date(d: u32, m: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn book_with(birthdays: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in birthdays {
        let mut record = Record::new(ContactName::new(*name).unwrap());
        record.add_phone("1234567890").unwrap();
        record.add_birthday(birthday).unwrap();
        book.add_record(record);
    }
    book
}

fn congratulation_dates(book: &AddressBook, today: NaiveDate) -> Vec<(String, String)> {
    book.upcoming_birthdays(today)
        .iter()
        .map(|u| (u.name.clone(), u.formatted_date()))
        .collect()
}

#[test]
fn test_weekday_birthday_not_shifted() {
    let book = book_with(&[("Alice", "12.06.1990")]);
    assert_eq!(
        book.upcoming_birthdays(date(10, 6, 2024)),
        vec![UpcomingBirthday {
            name: "Alice".to_string(),
            congratulation_date: date(12, 6, 2024),
        }]
    );
}

#[test]
fn test_saturday_shifts_two_days() {
    let book = book_with(&[("Sat", "15.06.1990")]);
    assert_eq!(
        congratulation_dates(&book, date(13, 6, 2024)),
        vec![("Sat".to_string(), "17.06.2024".to_string())]
    );
}

#[test]
fn test_sunday_shifts_one_day() {
    let book = book_with(&[("Sun", "16.06.1990")]);
    assert_eq!(
        congratulation_dates(&book, date(13, 6, 2024)),
        vec![("Sun".to_string(), "17.06.2024".to_string())]
    );
}

#[test]
fn test_birthday_today_on_weekend_is_reported_monday() {
    let book = book_with(&[("Today", "15.06.2001")]);
    assert_eq!(
        congratulation_dates(&book, date(15, 6, 2024)),
        vec![("Today".to_string(), "17.06.2024".to_string())]
    );
}

#[test]
fn test_seven_day_window_is_inclusive() {
    let book = book_with(&[
        ("InSeven", "17.06.1990"),
        ("InEight", "18.06.1990"),
        ("Passed", "09.06.1990"),
    ]);
    assert_eq!(
        congratulation_dates(&book, date(10, 6, 2024)),
        vec![("InSeven".to_string(), "17.06.2024".to_string())]
    );
}

#[test]
fn test_passed_birthday_rolls_to_next_year() {
    // 03.01.2026 is a Saturday
    let book = book_with(&[("Jan", "03.01.1999")]);
    assert_eq!(
        congratulation_dates(&book, date(30, 12, 2025)),
        vec![("Jan".to_string(), "05.01.2026".to_string())]
    );
}

#[test]
fn test_weekend_shift_crosses_year_boundary() {
    // 31.12.2022 is a Saturday, 01.01.2023 a Sunday
    let book = book_with(&[("Eve", "31.12.1990"), ("Newt", "01.01.1991")]);
    assert_eq!(
        congratulation_dates(&book, date(28, 12, 2022)),
        vec![
            ("Eve".to_string(), "02.01.2023".to_string()),
            ("Newt".to_string(), "02.01.2023".to_string()),
        ]
    );
}

#[test]
fn test_leap_day_birthday_in_common_year() {
    let book = book_with(&[("Leap", "29.02.1996")]);

    // 01.03.2025 is a Saturday
    assert_eq!(
        congratulation_dates(&book, date(25, 2, 2025)),
        vec![("Leap".to_string(), "03.03.2025".to_string())]
    );

    // 29.02.2024 is a Thursday
    assert_eq!(
        congratulation_dates(&book, date(26, 2, 2024)),
        vec![("Leap".to_string(), "29.02.2024".to_string())]
    );
}

#[test]
fn test_results_follow_insertion_order() {
    let book = book_with(&[
        ("Zoe", "14.06.1990"),
        ("Adam", "11.06.1990"),
        ("Mia", "12.06.1990"),
    ]);
    let names: Vec<String> = congratulation_dates(&book, date(10, 6, 2024))
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec!["Zoe", "Adam", "Mia"]);
}
