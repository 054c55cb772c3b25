//! Named operations on the address book.
//!
//! [`execute`] is the single point where a [`crate::error::BookError`] is
//! turned into the text shown to the user.

pub mod handlers;

use crate::directory::{AddressBook, Clock};
use crate::error::BookResult;
use std::fmt;

/// The operations the address book understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::All,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
    ];

    /// Look up a command by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
        }
    }

    /// Whether the command changes the address book.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Command::Add | Command::Change | Command::AddBirthday)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run `command` and return the text to print.
///
/// `All` and `Birthdays` ignore their arguments.
pub fn execute(
    command: Command,
    args: &[String],
    book: &mut AddressBook,
    clock: &dyn Clock,
) -> String {
    let result: BookResult<String> = match command {
        Command::Add => handlers::add_contact(args, book),
        Command::Change => handlers::change_contact(args, book),
        Command::Phone => handlers::show_phone(args, book),
        Command::All => handlers::show_all(book),
        Command::AddBirthday => handlers::add_birthday(args, book),
        Command::ShowBirthday => handlers::show_birthday(args, book),
        Command::Birthdays => handlers::upcoming_birthdays(book, clock),
    };

    match result {
        Ok(output) => output,
        Err(e) => {
            tracing::warn!(command = %command, error = ?e, "Command rejected");
            e.to_string()
        }
    }
}
