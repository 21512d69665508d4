/// Handlers for contact and phone commands
/// 
/// Implements add, change, phone, remove-phone, delete and all.

use crate::commands::{positional, CommandError};
use crate::domain::{AddressBook, Record};

pub const ADD_USAGE: &str = "add [name] [phone]";
pub const CHANGE_USAGE: &str = "change [name] [old_phone] [new_phone]";
pub const PHONE_USAGE: &str = "phone [name]";
pub const REMOVE_PHONE_USAGE: &str = "remove-phone [name] [phone]";
pub const DELETE_USAGE: &str = "delete [name]";

/// add [name] [phone]
/// 
/// Adds the phone to an existing contact, or creates the contact. The phone
/// is validated before anything is inserted, so a bad number never leaves an
/// empty contact behind.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
    let [name, phone] = positional::<2>(ADD_USAGE, args)?;
    
    if let Ok(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(format!("Added phone {} to contact {}.", phone, name));
    }
    
    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok(format!("Created new contact {} with phone {}.", name, phone))
}

/// change [name] [old_phone] [new_phone]
pub fn change_phone(args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
    let [name, old_phone, new_phone] = positional::<3>(CHANGE_USAGE, args)?;
    let record = book.find_mut(name)?;
    
    if record.edit_phone(old_phone, new_phone)? {
        Ok(format!("Changed {}'s phone {} to {}.", name, old_phone, new_phone))
    } else {
        Ok(format!("Contact {} has no phone {}.", name, old_phone))
    }
}

/// phone [name]
pub fn show_phones(args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
    let [name] = positional::<1>(PHONE_USAGE, args)?;
    let record = book.find(name)?;
    
    if record.phones().is_empty() {
        return Ok(format!("{} has no phone numbers.", name));
    }
    Ok(format!("Contact {}, phones: {}", name, record.phones_display()))
}

/// remove-phone [name] [phone]
pub fn remove_phone(args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
    let [name, phone] = positional::<2>(REMOVE_PHONE_USAGE, args)?;
    let record = book.find_mut(name)?;
    
    if record.remove_phone(phone) {
        Ok(format!("Removed phone {} from contact {}.", phone, name))
    } else {
        Ok(format!("Contact {} has no phone {}.", name, phone))
    }
}

/// delete [name]
pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
    let [name] = positional::<1>(DELETE_USAGE, args)?;
    
    if book.delete(name) {
        Ok(format!("Deleted contact {}.", name))
    } else {
        Ok(format!("There is no contact named {}.", name))
    }
}

/// all
pub fn show_all(_args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
    if book.is_empty() {
        return Ok("The address book is empty.".to_string());
    }
    
    let lines: Vec<String> = book.records().map(Record::to_string).collect();
    Ok(lines.join("\n"))
}
