/// Upcoming birthday scheduling
/// 
/// Given "today", finds the contacts whose birthday falls within the next
/// seven days (today included) and works out when to congratulate them.
/// Birthdays on a weekend are congratulated on the following Monday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

use crate::domain::{Birthday, Record};

/// Number of days in the look-ahead window, counting today
pub const WINDOW_DAYS: i64 = 7;

/// Display format for congratulation dates
pub const CONGRATULATION_FORMAT: &str = "%Y.%m.%d";

/// A contact to congratulate and the date to do it on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Congratulation date as YYYY.MM.DD
    pub fn formatted_date(&self) -> String {
        self.congratulation_date.format(CONGRATULATION_FORMAT).to_string()
    }
}

/// Compute upcoming birthdays for `records`, in iteration order
/// 
/// For each record with a birthday:
/// 1. project the birthday onto today's year, or next year if it has passed
/// 2. keep it if it is 0 to 6 days ahead
/// 3. move Saturday and Sunday dates to the following Monday
pub fn upcoming_birthdays<'a, I>(records: I, today: NaiveDate) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let projected = next_occurrence(birthday.in_year(today.year())?, birthday, today)?;
            let days_ahead = (projected - today).num_days();
            
            if (0..WINDOW_DAYS).contains(&days_ahead) {
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: congratulation_date(projected),
                })
            } else {
                None
            }
        })
        .collect()
}

/// Roll a projected birthday into next year if it is already behind us
fn next_occurrence(
    this_year: NaiveDate,
    birthday: &Birthday,
    today: NaiveDate,
) -> Option<NaiveDate> {
    if this_year < today {
        birthday.in_year(today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Shift a weekend date to the following Monday
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
