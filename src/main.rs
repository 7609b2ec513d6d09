//! Contact Book - Main entry point
//!
//! Loads the address book, runs the interactive command loop on stdin/stdout
//! and saves the book when the user exits.

use anyhow::{Context, Result};
use contact_book::commands::GOODBYE;
use contact_book::{Assistant, BookRepository, Config, FileBookRepository};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr; stdout is the conversation with the user.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let repo = FileBookRepository::new(&config.book_path);
    let book = repo.load_or_recover(config.strict_load).with_context(|| {
        format!("Failed to load address book from {}", repo.path().display())
    })?;
    info!(
        path = %repo.path().display(),
        contacts = book.len(),
        "Contact book ready"
    );

    let book = Assistant::new(book).run_session(io::stdin().lock(), io::stdout());

    if let Err(e) = repo.save(&book) {
        error!(path = %repo.path().display(), error = %e, "Failed to save address book");
        println!("Failed to save contacts: {}", e);
        std::process::exit(1);
    }
    println!("{}", GOODBYE);
    Ok(())
}
