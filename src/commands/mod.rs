//! The assistant's command surface.
//!
//! [`Assistant`] owns the address book for a session. Each input line is
//! tokenized by [`parse_input`], dispatched to a handler and rendered into
//! the reply text. Persisting the book is left to the caller, which should
//! save it when [`Reply::Exit`] comes back.

pub mod handlers;
pub mod parser;

pub use handlers::render;
pub use parser::{parse_input, Command, UnknownCommand};

use crate::clock::{Clock, SystemClock};
use crate::models::AddressBook;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

/// Greeting printed when a session starts.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Prompt printed before every input line.
pub const PROMPT: &str = "Enter a command: ";

/// Farewell printed after the book has been saved.
pub const GOODBYE: &str = "Good bye!";

/// Outcome of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and wait for the next line.
    Message(String),
    /// Blank input; print nothing.
    Nothing,
    /// Save the book and end the session.
    Exit,
}

/// An interactive session over one address book.
pub struct Assistant<C: Clock = SystemClock> {
    book: AddressBook,
    clock: C,
}

impl Assistant<SystemClock> {
    /// Start a session using the system clock.
    pub fn new(book: AddressBook) -> Self {
        Self::with_clock(book, SystemClock)
    }
}

impl<C: Clock> Assistant<C> {
    /// Start a session that reads the date from `clock`.
    pub fn with_clock(book: AddressBook, clock: C) -> Self {
        Self { book, clock }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Run the prompt loop over `input`, writing replies to `output`.
    ///
    /// The loop ends on `exit`/`close`, at end of input, or when reading or
    /// writing fails; the book is handed back in every case so the caller can
    /// save it. Bytes that are not valid UTF-8 are replaced, never fatal.
    pub fn run_session<R: BufRead, W: Write>(
        mut self,
        mut input: R,
        mut output: W,
    ) -> AddressBook {
        if let Err(e) = self.converse(&mut input, &mut output) {
            warn!(error = %e, "Session I/O failed, ending session");
        }
        self.into_book()
    }

    fn converse<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> io::Result<()> {
        writeln!(output, "{}", WELCOME)?;
        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                info!("Input closed, exiting");
                writeln!(output)?;
                return Ok(());
            }

            let line = String::from_utf8_lossy(&buf);
            match self.handle_line(&line) {
                Reply::Message(text) => writeln!(output, "{}", text)?,
                Reply::Nothing => {}
                Reply::Exit => return Ok(()),
            }
        }
    }

    /// Tokenize and handle one line of input.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match parse_input(line) {
            Some((command, args)) => self.dispatch(&command, &args),
            None => Reply::Nothing,
        }
    }

    /// Handle an already tokenized command.
    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> Reply {
        let command = match command.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!(command = %e.0, "Unknown command");
                return Reply::Message(e.to_string());
            }
        };
        debug!(?command, args = args.len(), "Dispatching command");

        let book = &mut self.book;
        let result = match command {
            Command::Exit => return Reply::Exit,
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add => handlers::add_contact(args, book),
            Command::Change => handlers::change_contact(args, book),
            Command::Phone => handlers::show_phone(args, book),
            Command::All => handlers::show_all(book),
            Command::AddBirthday => handlers::add_birthday(args, book, self.clock.now()),
            Command::ShowBirthday => handlers::show_birthday(args, book),
            Command::Birthdays => handlers::upcoming_birthdays(book, self.clock.today()),
            Command::Delete => handlers::delete_contact(args, book),
        };

        if let Err(ref e) = result {
            debug!(?command, error = %e, "Command failed");
        }
        Reply::Message(render(result))
    }
}
