//! Command handlers.
//!
//! Each handler takes the command's arguments and the address book, performs
//! one operation and returns the text to show on success. Expected failures
//! come back as a [`BookError`]; [`render`] turns either outcome into the
//! line printed to the user.

use crate::error::{BookError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

/// Text printed when a command fails or succeeds.
pub fn render(result: CommandResult<String>) -> String {
    match result {
        Ok(message) => message,
        Err(e) => e.to_string(),
    }
}

fn contact<'a>(book: &'a AddressBook, name: &str) -> CommandResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

fn contact_mut<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

/// `add <name> <phone>`: create the contact if needed, then append the phone.
///
/// The phone is validated before anything is created, so a rejected number
/// never leaves an empty contact behind.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone, ..] = args else {
        return Err(BookError::MissingArguments(
            "Not enough arguments. Please provide both name and phone.",
        ));
    };

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(*name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    debug!(contact = name, "Created contact");
    Ok("Contact added.".to_string())
}

/// `change <name> <old_phone> <new_phone>`
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone, ..] = args else {
        return Err(BookError::MissingArguments(
            "Not enough arguments. Please provide name, old phone, and new phone.",
        ));
    };

    contact_mut(book, name)?.edit_phone(old_phone, new_phone)?;
    Ok(format!(
        "Phone number {} changed to {} for {}.",
        old_phone, new_phone, name
    ))
}

/// `phone <name>`: the contact's phones joined by `"; "`.
pub fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(BookError::MissingArguments(
            "Name is missing. Please provide a name.",
        ));
    };

    let phones = contact(book, name)?
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Ok(phones)
}

/// `all`: every contact, one per line.
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    Ok(book.to_string())
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(
    args: &[&str],
    book: &mut AddressBook,
    now: NaiveDateTime,
) -> CommandResult<String> {
    let [name, birthday, ..] = args else {
        return Err(BookError::MissingArguments(
            "Not enough arguments. Please provide name and birthday.",
        ));
    };

    contact_mut(book, name)?.add_birthday_at(birthday, now)?;
    Ok(format!("Birthday added for {}.", name))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(BookError::MissingArguments(
            "Name is missing. Please provide a name.",
        ));
    };

    match book.find(name).and_then(Record::birthday) {
        Some(birthday) => Ok(format!("Birthday for {} is {}", name, birthday)),
        None => Ok(format!("Birthday for {} not found.", name)),
    }
}

/// `birthdays`: who to congratulate during the next week.
pub fn upcoming_birthdays(book: &AddressBook, today: NaiveDate) -> CommandResult<String> {
    let upcoming = book.get_upcoming_birthdays_from(today);
    if upcoming.is_empty() {
        return Ok("There are no upcoming birthdays.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `delete <name>`
pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(BookError::MissingArguments(
            "Name is missing. Please provide a name.",
        ));
    };

    Ok(book.delete(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PhoneNumber, ValidationError};

    fn june_10_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn noon() -> NaiveDateTime {
        june_10_2024().and_hms_opt(12, 0, 0).unwrap()
    }

    fn phones(book: &AddressBook, name: &str) -> Vec<String> {
        book.find(name)
            .unwrap()
            .phones()
            .iter()
            .map(PhoneNumber::to_string)
            .collect()
    }

    #[test]
    fn test_add_contact_creates_then_updates() {
        let mut book = AddressBook::new();

        let result = add_contact(&["John", "1234567890"], &mut book);
        assert_eq!(result, Ok("Contact added.".to_string()));

        let result = add_contact(&["John", "5555555555"], &mut book);
        assert_eq!(result, Ok("Contact updated.".to_string()));

        assert_eq!(book.len(), 1);
        assert_eq!(phones(&book, "John"), ["1234567890", "5555555555"]);
    }

    #[test]
    fn test_add_contact_keeps_existing_birthday() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1234567890"], &mut book).unwrap();
        add_birthday(&["John", "12.06.1990"], &mut book, noon()).unwrap();

        add_contact(&["John", "5555555555"], &mut book).unwrap();
        assert!(book.find("John").unwrap().birthday().is_some());
    }

    #[test]
    fn test_add_contact_missing_arguments() {
        let mut book = AddressBook::new();
        let result = add_contact(&["John"], &mut book);
        assert_eq!(
            render(result),
            "Not enough arguments. Please provide both name and phone."
        );
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_contact_invalid_phone_creates_nothing() {
        let mut book = AddressBook::new();
        let result = add_contact(&["John", "12345"], &mut book);
        assert_eq!(
            result,
            Err(BookError::InvalidFormat(ValidationError::InvalidPhoneLength(
                "12345".to_string()
            )))
        );
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_contact_ignores_extra_arguments() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1234567890", "extra"], &mut book).unwrap();
        assert_eq!(phones(&book, "John"), ["1234567890"]);
    }

    #[test]
    fn test_change_contact() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1234567890"], &mut book).unwrap();

        let result = change_contact(&["John", "1234567890", "0987654321"], &mut book);
        assert_eq!(
            render(result),
            "Phone number 1234567890 changed to 0987654321 for John."
        );
        assert_eq!(phones(&book, "John"), ["0987654321"]);
    }

    #[test]
    fn test_change_contact_errors() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1234567890"], &mut book).unwrap();

        assert_eq!(
            render(change_contact(&["John", "1234567890"], &mut book)),
            "Not enough arguments. Please provide name, old phone, and new phone."
        );
        assert_eq!(
            render(change_contact(&["Jane", "1234567890", "0987654321"], &mut book)),
            "Contact Jane not found."
        );
        assert_eq!(
            render(change_contact(&["John", "1111111111", "0987654321"], &mut book)),
            "This number: 1111111111 does not exist"
        );
        assert_eq!(
            render(change_contact(&["John", "1234567890", "0987"], &mut book)),
            "Phone number must be exactly 10 digits"
        );
        assert_eq!(phones(&book, "John"), ["1234567890"]);
    }

    #[test]
    fn test_show_phone() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1234567890"], &mut book).unwrap();
        add_contact(&["John", "5555555555"], &mut book).unwrap();

        assert_eq!(
            show_phone(&["John"], &book),
            Ok("1234567890; 5555555555".to_string())
        );
        assert_eq!(render(show_phone(&["Jane"], &book)), "Contact Jane not found.");
        assert_eq!(
            render(show_phone(&[], &book)),
            "Name is missing. Please provide a name."
        );
    }

    #[test]
    fn test_show_all() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1234567890"], &mut book).unwrap();
        add_contact(&["Jane", "5555555555"], &mut book).unwrap();

        assert_eq!(
            render(show_all(&book)),
            "Contact name: John, phones: 1234567890, Birthday: No birthday\n\
             Contact name: Jane, phones: 5555555555, Birthday: No birthday"
        );
    }

    #[test]
    fn test_add_and_show_birthday() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1234567890"], &mut book).unwrap();

        assert_eq!(
            render(show_birthday(&["John"], &book)),
            "Birthday for John not found."
        );
        assert_eq!(
            render(add_birthday(&["John", "12.06.1990"], &mut book, noon())),
            "Birthday added for John."
        );
        assert_eq!(
            render(show_birthday(&["John"], &book)),
            "Birthday for John is 12.06.1990"
        );
        assert_eq!(
            render(show_birthday(&["Jane"], &book)),
            "Birthday for Jane not found."
        );
    }

    #[test]
    fn test_add_birthday_errors() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1234567890"], &mut book).unwrap();

        assert_eq!(
            render(add_birthday(&["John"], &mut book, noon())),
            "Not enough arguments. Please provide name and birthday."
        );
        assert_eq!(
            render(add_birthday(&["Jane", "12.06.1990"], &mut book, noon())),
            "Contact Jane not found."
        );
        assert_eq!(
            render(add_birthday(&["John", "1990.06.12"], &mut book, noon())),
            "Invalid date format. Use DD.MM.YYYY"
        );
        assert_eq!(
            render(add_birthday(&["John", "12.06.2025"], &mut book, noon())),
            "Birthday cannot be in the future!"
        );
        assert!(book.find("John").unwrap().birthday().is_none());
    }

    #[test]
    fn test_upcoming_birthdays() {
        let mut book = AddressBook::new();
        assert_eq!(
            render(upcoming_birthdays(&book, june_10_2024())),
            "There are no upcoming birthdays."
        );

        add_contact(&["John", "1234567890"], &mut book).unwrap();
        add_contact(&["Jane", "5555555555"], &mut book).unwrap();
        add_contact(&["Jim", "7777777777"], &mut book).unwrap();
        add_birthday(&["John", "12.06.1990"], &mut book, noon()).unwrap();
        add_birthday(&["Jane", "20.06.1990"], &mut book, noon()).unwrap();
        add_birthday(&["Jim", "15.06.1990"], &mut book, noon()).unwrap();

        assert_eq!(
            render(upcoming_birthdays(&book, june_10_2024())),
            "Name: John, upcoming birthday: 12.06.2024\n\
             Name: Jim, upcoming birthday: 17.06.2024"
        );
    }

    #[test]
    fn test_delete_contact() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1234567890"], &mut book).unwrap();

        assert_eq!(
            render(delete_contact(&["Jane"], &mut book)),
            "Contact Jane not found"
        );
        assert_eq!(book.len(), 1);
        assert_eq!(
            render(delete_contact(&["John"], &mut book)),
            "Contact John deleted"
        );
        assert!(book.is_empty());
        assert_eq!(
            render(delete_contact(&[], &mut book)),
            "Name is missing. Please provide a name."
        );
    }
}
