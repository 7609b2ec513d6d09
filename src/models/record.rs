//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, CommandResult};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact: a name, its phone numbers in the order they were added, and
/// an optional birthday.
///
/// The name is fixed at creation. Phone numbers may repeat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new contact with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> CommandResult<Self> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: &str) -> CommandResult<()> {
        let phone = PhoneNumber::new(phone)?;
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`. Unknown numbers are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        if let Some(index) = self.phones.iter().position(|p| p == phone) {
            debug!(contact = %self.name, phone, "Removing phone");
            self.phones.remove(index);
        }
    }

    /// Replace every phone equal to `old` with `new`.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if the contact has no phone equal to `old`
    /// - `BookError::InvalidFormat` if `new` is not a valid phone number
    ///
    /// The phone list is left untouched on error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> CommandResult<()> {
        if self.find_phone(old).is_none() {
            return Err(BookError::PhoneNotFound(old.to_string()));
        }
        let replacement = PhoneNumber::new(new)?;

        debug!(contact = %self.name, old, new, "Editing phone");
        for phone in self.phones.iter_mut().filter(|p| *p == old) {
            *phone = replacement.clone();
        }
        Ok(())
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| *p == phone)
    }

    /// Set the birthday, rejecting dates that are not in the past.
    pub fn add_birthday(&mut self, birthday: &str) -> CommandResult<()> {
        self.add_birthday_at(birthday, Local::now().naive_local())
    }

    /// Set the birthday, rejecting dates that are not strictly before `now`.
    ///
    /// An existing birthday is overwritten. On error it is left unchanged.
    pub fn add_birthday_at(&mut self, birthday: &str, now: NaiveDateTime) -> CommandResult<()> {
        let birthday = Birthday::new(birthday)?;
        if !birthday.is_valid_at(now) {
            return Err(BookError::FutureDate(birthday.into_inner()));
        }

        debug!(contact = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self.birthday.as_ref().map_or("No birthday", Birthday::as_str);
        write!(
            f,
            "Contact name: {}, phones: {}, Birthday: {}",
            self.name, phones, birthday
        )
    }
}
