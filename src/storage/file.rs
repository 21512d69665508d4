/// File-backed implementation of the book storage interface
/// 
/// The encoded book is written to a single file. A missing file means
/// nothing has been saved yet.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::AddressBook;
use crate::storage::{decode, encode, BookStorage, StorageError};

/// Default file name for the persisted book
pub const DEFAULT_FILE_NAME: &str = "addressbook.json";

/// Stores the address book in one file on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
    
    pub fn path(&self) -> &Path {
        &self.path
    }
    
    /// Path the stored file is moved to by `back_up`
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".bak");
        PathBuf::from(name)
    }
    
    /// Move the stored file aside so the next save cannot overwrite it
    /// 
    /// Replaces any earlier backup. Returns the backup path.
    pub fn back_up(&self) -> Result<PathBuf, StorageError> {
        let backup = self.backup_path();
        std::fs::rename(&self.path, &backup)?;
        tracing::warn!("Moved {:?} to {:?}", self.path, backup);
        Ok(backup)
    }
}

impl BookStorage for FileStorage {
    fn load(&self) -> Result<AddressBook, StorageError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No address book at {:?}, starting empty", self.path);
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };
        
        let book = decode(&bytes)?;
        tracing::info!("Loaded {} contacts from {:?}", book.len(), self.path);
        Ok(book)
    }
    
    fn save(&self, book: &AddressBook) -> Result<(), StorageError> {
        let bytes = encode(book)?;
        
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        
        std::fs::write(&self.path, bytes)?;
        tracing::debug!("Saved {} contacts to {:?}", book.len(), self.path);
        Ok(())
    }
}
