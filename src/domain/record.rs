/// Record entity for a single contact
/// 
/// A record owns a name, an ordered list of unique phone numbers and an
/// optional birthday. The name never changes after creation because it is
/// the record's key inside an AddressBook.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{Birthday, DomainError, PhoneNumber};

/// Text shown by `display_birthday` when no birthday is stored
pub const BIRTHDAY_NOT_SET: &str = "not set";

/// One contact in the address book
/// 
/// Deserialization goes through `RecordData`, so a loaded record has a
/// non-blank name and no repeated phone numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordData")]
pub struct Record {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

/// Stored shape of a record before its invariants are checked
#[derive(Debug, Deserialize)]
struct RecordData {
    name: String,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl TryFrom<RecordData> for Record {
    type Error = DomainError;
    
    fn try_from(data: RecordData) -> Result<Self, Self::Error> {
        let mut record = Record::new(data.name)?;
        
        for phone in data.phones {
            if record.phones.contains(&phone) {
                return Err(DomainError::DuplicatePhone {
                    name: record.name,
                    phone: phone.to_string(),
                });
            }
            record.phones.push(phone);
        }
        
        record.birthday = data.birthday;
        Ok(record)
    }
}

impl Record {
    /// Create a record with a name and nothing else
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        
        if name.trim().is_empty() {
            return Err(DomainError::InvalidName);
        }
        
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
        })
    }
    
    pub fn name(&self) -> &str {
        &self.name
    }
    
    /// Phone numbers in the order they were added
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }
    
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }
    
    /// Add a phone number
    /// 
    /// Adding a number the record already has is a no-op.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), DomainError> {
        let phone = PhoneNumber::new(phone)?;
        
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
        
        Ok(())
    }
    
    /// Remove a phone number if present; returns whether one was removed
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.position_of(phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }
    
    /// Replace `old` with `new` in place
    /// 
    /// The new number is validated first, so an invalid replacement is an
    /// error even if `old` is absent. Returns `Ok(false)` when `old` is not
    /// one of this record's numbers; the phone list is then left untouched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, DomainError> {
        let new_phone = PhoneNumber::new(new)?;
        
        match self.position_of(old) {
            Some(index) => {
                self.phones[index] = new_phone;
                Ok(true)
            }
            None => Ok(false),
        }
    }
    
    /// Find a phone number by its digit string
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.matches(phone))
    }
    
    /// Set (or replace) the birthday from a DD.MM.YYYY string
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), DomainError> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }
    
    /// Formatted birthday, or `BIRTHDAY_NOT_SET`
    pub fn display_birthday(&self) -> String {
        match &self.birthday {
            Some(birthday) => birthday.to_string(),
            None => BIRTHDAY_NOT_SET.to_string(),
        }
    }
    
    /// Comma-separated phone list
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
    
    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.matches(phone))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phones_display())?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
