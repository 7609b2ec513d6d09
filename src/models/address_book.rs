//! The address book: every contact, keyed by name.

use super::record::Record;
use crate::domain::BIRTHDAY_FORMAT;
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use indexmap::IndexMap;
use std::fmt;
use tracing::debug;

/// How many days after today still count as "upcoming" (today included).
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// A birthday that falls inside the upcoming window.
///
/// `date` is the day to congratulate on, already moved off the weekend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, upcoming birthday: {}",
            self.name,
            self.date.format(BIRTHDAY_FORMAT)
        )
    }
}

/// All contacts, keyed by name and kept in insertion order.
///
/// The key of every entry is always the name of the record stored under it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record with that name.
    ///
    /// A replaced record keeps its position in the iteration order but none
    /// of its data.
    pub fn add_record(&mut self, record: Record) {
        debug!(contact = record.name(), "Storing record");
        self.records.insert(record.name().to_string(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record filed under `name`, preserving the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Record> {
        self.records.shift_remove(name)
    }

    /// Remove the record filed under `name` and describe the outcome.
    pub fn delete(&mut self, name: &str) -> String {
        match self.remove(name) {
            Some(_) => {
                debug!(contact = name, "Deleted record");
                format!("Contact {} deleted", name)
            }
            None => format!("Contact {} not found", name),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Upcoming birthdays relative to the local current date.
    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.get_upcoming_birthdays_from(Local::now().date_naive())
    }

    /// Birthdays falling between `today` and seven days later, inclusive.
    ///
    /// Each birthday is moved into the current year (29 February becomes
    /// 1 March in non-leap years). One that lands on a weekend is reported on
    /// the following Monday, even if that Monday is past the window. Results
    /// follow the book's order.
    pub fn get_upcoming_birthdays_from(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.records()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let this_year = birthday.occurrence_in(today.year())?;

                let delta = (this_year - today).num_days();
                if !(0..=UPCOMING_WINDOW_DAYS).contains(&delta) {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    date: next_weekday(this_year),
                })
            })
            .collect()
    }
}

/// `date` itself if it is Monday to Friday, otherwise the following Monday.
fn next_weekday(date: NaiveDate) -> NaiveDate {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(shift)).unwrap_or(date)
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.records().map(Record::to_string).collect::<Vec<_>>();
        write!(f, "{}", lines.join("\n"))
    }
}
