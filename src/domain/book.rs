/// AddressBook collection
/// 
/// The book maps each contact name to the Record it owns. Records are kept in
/// an ordered map, so listing and birthday queries walk contacts by name.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{upcoming_birthdays, DomainError, Record, UpcomingBirthday};

/// The full set of contacts
/// 
/// Invariant: every record is stored under its own name. Deserialization
/// re-checks this, so a loaded book upholds it too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Record>",
    into = "BTreeMap<String, Record>"
)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Insert a record under its name
    /// 
    /// An existing record with the same name is replaced, not merged.
    /// Returns the replaced record, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name().to_string(), record)
    }
    
    /// Look up a contact by name
    pub fn find(&self, name: &str) -> Result<&Record, DomainError> {
        self.records
            .get(name)
            .ok_or_else(|| DomainError::ContactNotFound { name: name.to_string() })
    }
    
    /// Look up a contact by name for modification
    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record, DomainError> {
        self.records
            .get_mut(name)
            .ok_or_else(|| DomainError::ContactNotFound { name: name.to_string() })
    }
    
    /// Remove a contact; returns whether it existed
    pub fn delete(&mut self, name: &str) -> bool {
        self.records.remove(name).is_some()
    }
    
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }
    
    /// Iterate over all records, ordered by name
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.values()
    }
    
    pub fn len(&self) -> usize {
        self.records.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    
    /// Contacts to congratulate within the week starting at `today`
    /// 
    /// See [`upcoming_birthdays`] for the projection and weekend rules.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(self.records(), today)
    }
}

impl TryFrom<BTreeMap<String, Record>> for AddressBook {
    type Error = DomainError;
    
    fn try_from(records: BTreeMap<String, Record>) -> Result<Self, Self::Error> {
        for (key, record) in &records {
            if key != record.name() {
                return Err(DomainError::KeyMismatch {
                    key: key.clone(),
                    name: record.name().to_string(),
                });
            }
        }
        Ok(Self { records })
    }
}

impl From<AddressBook> for BTreeMap<String, Record> {
    fn from(book: AddressBook) -> Self {
        book.records
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::collections::btree_map::Values<'a, String, Record>;
    
    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
