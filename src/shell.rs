//! Line-oriented command loop around the address book.
//!
//! Reads one command per line, dispatches it through [`commands::execute`]
//! and writes the reply. Generic over reader and writer so it runs the same
//! against stdin/stdout and in-memory buffers.

use crate::commands::{self, Command};
use crate::directory::{AddressBook, Clock};
use std::io::{self, BufRead, Write};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const HELLO_REPLY: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next line
    Continue(String),
    /// Print the text and stop
    Exit(String),
    /// Nothing to print
    Empty,
}

/// Split a raw line into a lowercased command word and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}

/// An address book together with the clock its queries use.
pub struct Shell<C: Clock> {
    book: AddressBook,
    clock: C,
    prompt: String,
}

impl<C: Clock> Shell<C> {
    pub fn new(clock: C, prompt: impl Into<String>) -> Self {
        Self {
            book: AddressBook::new(),
            clock,
            prompt: prompt.into(),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle a single input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let Some((word, args)) = parse_input(line) else {
            return Reply::Empty;
        };

        match word.as_str() {
            "close" | "exit" => Reply::Exit(FAREWELL.to_string()),
            "hello" => Reply::Continue(HELLO_REPLY.to_string()),
            other => match Command::from_name(other) {
                Some(command) => {
                    let output = commands::execute(command, &args, &mut self.book, &self.clock);
                    if command.is_mutating() {
                        tracing::debug!(
                            command = %command,
                            contacts = self.book.len(),
                            "Address book updated"
                        );
                    }
                    Reply::Continue(output)
                }
                None => {
                    tracing::warn!(command = %other, "Unknown command");
                    Reply::Continue(INVALID_COMMAND.to_string())
                }
            },
        }
    }

    /// Run until `exit`/`close` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", GREETING)?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                tracing::info!("End of input reached");
                writeln!(output, "{}", FAREWELL)?;
                break;
            };

            match self.handle_line(&line?) {
                Reply::Continue(text) => writeln!(output, "{}", text)?,
                Reply::Exit(text) => {
                    writeln!(output, "{}", text)?;
                    break;
                }
                Reply::Empty => {}
            }
        }

        output.flush()
    }
}
