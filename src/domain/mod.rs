/// Domain module containing the contact model and its validation rules
/// 
/// This module defines the value types (PhoneNumber, Birthday), the Record
/// entity and the AddressBook collection, plus the upcoming-birthday scheduler.
/// Nothing in here prints or logs; callers decide how to present failures.

pub mod phone;
pub mod birthday;
pub mod record;
pub mod book;
pub mod schedule;

// Re-export public types for easy access
pub use phone::*;
pub use birthday::*;
pub use record::*;
pub use book::*;
pub use schedule::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("phone number must consist of exactly 10 digits (got '{value}')")]
    InvalidPhone { value: String },
    
    #[error("date must be in DD.MM.YYYY format and be a valid calendar date (got '{value}')")]
    InvalidBirthday { value: String },
    
    #[error("contact name cannot be empty")]
    InvalidName,
    
    #[error("contact '{name}' not found")]
    ContactNotFound { name: String },
    
    #[error("contact '{name}' lists phone {phone} more than once")]
    DuplicatePhone { name: String, phone: String },
    
    #[error("record stored under '{key}' is named '{name}'")]
    KeyMismatch { key: String, name: String },
}

impl DomainError {
    /// True for malformed user input, as opposed to a missing contact
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidPhone { .. }
                | DomainError::InvalidBirthday { .. }
                | DomainError::InvalidName
        )
    }
}
