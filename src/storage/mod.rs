/// Storage layer for persisting the address book
/// 
/// The whole book is serialized into a single byte stream and written to one
/// file. `codec` turns a book into bytes and back; `file` moves those bytes
/// to and from disk.

pub mod codec;
pub mod file;

// Re-export the main storage types
pub use codec::*;
pub use file::*;

use thiserror::Error;
use crate::domain::AddressBook;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("Failed to encode address book: {0}")]
    Encode(#[source] serde_json::Error),
    
    #[error("Stored address book is malformed: {0}")]
    Decode(#[source] serde_json::Error),
}

impl StorageError {
    /// True when the stored bytes exist but cannot be turned into a book
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, StorageError::Decode(_))
    }
}

/// Trait defining where a book is loaded from and saved to
/// 
/// Loading from a location that has never been written yields an empty
/// book rather than an error.
pub trait BookStorage {
    /// Load the stored book, or an empty one if nothing is stored yet
    fn load(&self) -> Result<AddressBook, StorageError>;
    
    /// Replace the stored book with `book`
    fn save(&self, book: &AddressBook) -> Result<(), StorageError>;
}
