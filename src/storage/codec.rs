/// Byte codec for the address book
/// 
/// The format is pretty-printed JSON: a map from contact name to record.
/// Phones and birthdays are stored as their display strings and validated
/// again while decoding.

use crate::domain::AddressBook;
use crate::storage::StorageError;

/// Serialize the full address book
pub fn encode(book: &AddressBook) -> Result<Vec<u8>, StorageError> {
    serde_json::to_vec_pretty(book).map_err(StorageError::Encode)
}

/// Deserialize an address book
/// 
/// Fails with `StorageError::Decode` on malformed JSON, invalid phones or
/// birthdays, or a record stored under a name other than its own.
pub fn decode(bytes: &[u8]) -> Result<AddressBook, StorageError> {
    serde_json::from_slice(bytes).map_err(StorageError::Decode)
}
