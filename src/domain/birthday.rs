/// Birthday value type
/// 
/// Birthdays are plain calendar dates entered and displayed as DD.MM.YYYY.
/// There is no time zone attached; a birthday is the same day everywhere.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// Input and display format for birthdays
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A validated birthday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from a DD.MM.YYYY string
    /// 
    /// The shape is checked strictly (two-digit day and month, four-digit
    /// year, dots as separators) before the calendar check, so "1.6.1990" or
    /// "31.04.2024" are both rejected.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidBirthday { value: value.to_string() };
        
        if !Self::has_strict_shape(value) {
            return Err(invalid());
        }
        
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }
    
    fn has_strict_shape(value: &str) -> bool {
        let bytes = value.as_bytes();
        bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                2 | 5 => *b == b'.',
                _ => b.is_ascii_digit(),
            })
    }
    
    /// The underlying calendar date
    pub fn date(&self) -> NaiveDate {
        self.0
    }
    
    /// Month of the birthday (1-12)
    pub fn month(&self) -> u32 {
        self.0.month()
    }
    
    /// Day of month of the birthday
    pub fn day(&self) -> u32 {
        self.0.day()
    }
    
    /// Project this birthday's month and day onto another year
    /// 
    /// A 29 February birthday falls on 1 March in years without that day.
    /// Returns None only when the year is outside chrono's supported range.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }
}

impl FromStr for Birthday {
    type Err = DomainError;
    
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}
