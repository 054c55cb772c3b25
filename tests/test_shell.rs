//! End-to-end tests for the command loop using in-memory input and output.

use chrono::NaiveDate;
use contact_book::{FixedClock, Shell};
use std::io::Cursor;

fn run_script(script: &str) -> String {
    let mut shell = Shell::new(
        FixedClock(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()),
        "> ",
    );
    let mut output = Vec::new();
    shell.run(Cursor::new(script), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_full_session() {
    let output = run_script(
        "hello\n\
         add Alice 1234567890\n\
         add-birthday Alice 12.06.1990\n\
         birthdays\n\
         nonsense\n\
         exit\n\
         add Bob 1111111111\n",
    );

    assert_eq!(
        output,
        "Welcome to the assistant bot!\n\
         > How can I help you?\n\
         > Contact added.\n\
         > Birthday added.\n\
         > Alice - 12.06.2024\n\
         > Invalid command.\n\
         > Good bye!\n"
    );
}

#[test]
fn test_blank_lines_are_skipped() {
    let output = run_script("\n   \nclose\n");
    assert_eq!(output, "Welcome to the assistant bot!\n> > > Good bye!\n");
}

#[test]
fn test_end_of_input_says_goodbye() {
    let output = run_script("all\n");
    assert_eq!(
        output,
        "Welcome to the assistant bot!\n> No contacts saved.\n> Good bye!\n"
    );
}

#[test]
fn test_command_word_is_case_insensitive() {
    let output = run_script("ADD Alice 1234567890\nPhone Alice\nEXIT\n");
    assert!(output.contains("Contact added."));
    assert!(output.contains("1234567890"));
}
