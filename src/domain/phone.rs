/// Phone number value type
/// 
/// A phone number in this book is exactly ten ASCII digits with no sign,
/// separators or letters. Validation happens once, at construction.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// Number of digits every phone number must have
pub const PHONE_DIGITS: usize = 10;

/// A validated ten-digit phone number
/// 
/// Equality is by digit string, which is what the Record uses to keep its
/// phone list free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new phone number, validating the format
    /// 
    /// # Errors
    /// 
    /// Returns `DomainError::InvalidPhone` unless the input is exactly ten
    /// ASCII digits.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        
        if !Self::is_valid(&value) {
            return Err(DomainError::InvalidPhone { value });
        }
        
        Ok(Self(value))
    }
    
    fn is_valid(value: &str) -> bool {
        value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
    }
    
    /// Get the phone number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
    
    /// Check whether this number matches a raw (unvalidated) digit string
    pub fn matches(&self, raw: &str) -> bool {
        self.0 == raw
    }
}

impl FromStr for PhoneNumber {
    type Err = DomainError;
    
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Stored as the plain digit string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Re-validated on load so a hand-edited file cannot smuggle in bad numbers
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}
