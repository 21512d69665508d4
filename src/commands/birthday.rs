/// Handlers for birthday commands
/// 
/// Implements add-birthday, show-birthday and birthdays.

use chrono::{Local, NaiveDate};

use crate::commands::{positional, CommandError};
use crate::domain::{AddressBook, BIRTHDAY_NOT_SET, WINDOW_DAYS};

pub const ADD_BIRTHDAY_USAGE: &str = "add-birthday [name] [DD.MM.YYYY]";
pub const SHOW_BIRTHDAY_USAGE: &str = "show-birthday [name]";

/// add-birthday [name] [DD.MM.YYYY]
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
    let [name, birthday] = positional::<2>(ADD_BIRTHDAY_USAGE, args)?;
    book.find_mut(name)?.set_birthday(birthday)?;
    Ok(format!("Birthday of {} set to {}.", name, birthday))
}

/// show-birthday [name]
pub fn show_birthday(args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
    let [name] = positional::<1>(SHOW_BIRTHDAY_USAGE, args)?;
    let birthday = book.find(name)?.display_birthday();
    
    if birthday == BIRTHDAY_NOT_SET {
        return Ok(format!("{} has no birthday set.", name));
    }
    Ok(format!("{}'s birthday: {}", name, birthday))
}

/// birthdays
pub fn show_upcoming_birthdays(
    _args: &[&str],
    book: &mut AddressBook,
) -> Result<String, CommandError> {
    Ok(upcoming_birthdays_report(book, Local::now().date_naive()))
}

/// Render the upcoming birthdays as seen from `today`
pub fn upcoming_birthdays_report(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays(today);
    
    if upcoming.is_empty() {
        return format!("No birthdays in the next {} days.", WINDOW_DAYS);
    }
    
    let mut lines = vec![format!("Birthdays to celebrate in the next {} days:", WINDOW_DAYS)];
    lines.extend(
        upcoming
            .iter()
            .map(|entry| format!("{} => {}", entry.name, entry.formatted_date())),
    );
    lines.join("\n")
}
