/// Public library interface for the address book assistant
/// 
/// This module exports the contact model, the persistence layer, the command
/// handlers and the interactive session, plus the application type that wires
/// them together for the binary.

use thiserror::Error;
use tokio::io::{AsyncWriteExt, BufReader};

// Internal modules
mod domain;
mod storage;
mod commands;
mod repl;
mod config;

// Re-export public modules and types
pub use domain::*;
pub use storage::{decode, encode, BookStorage, FileStorage, StorageError, DEFAULT_FILE_NAME};
pub use commands::{
    upcoming_birthdays_report, Command, CommandError, CommandRegistry, Handler,
};
pub use repl::{Session, Style, PROMPT};
pub use config::{default_data_file, AppConfig, DefaultDataFile, DEFAULT_LOG_FILE_NAME};

/// Errors that can stop the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),
    
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The address book application
/// 
/// Owns the session for one address book file. Constructing it loads the
/// stored book; a corrupt file is renamed to `<file>.bak` and replaced by an
/// empty book with a notice.
pub struct AddressBookApp {
    session: Session<FileStorage>,
    startup_notice: Option<String>,
}

impl AddressBookApp {
    /// Create the application for the given configuration
    /// 
    /// Fails only if the data file exists but cannot be read, or an
    /// unreadable file cannot be moved aside.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        tracing::info!("Initializing address book with data file: {:?}", config.data_file);
        
        let style = if config.color { Style::colored() } else { Style::plain() };
        let storage = FileStorage::new(config.data_file);
        let (book, notice) = Self::load_book(&storage, config.fresh)?;
        
        Ok(Self {
            session: Session::new(book, storage, style),
            startup_notice: notice.map(|text| style.notice(&text)),
        })
    }
    
    fn load_book(
        storage: &FileStorage,
        fresh: bool,
    ) -> Result<(AddressBook, Option<String>), AppError> {
        if fresh {
            return Ok((AddressBook::new(), Some("Started a new, empty address book.".to_string())));
        }
        
        if !storage.path().exists() {
            let notice = format!(
                "File {} not found. Created a new address book.",
                storage.path().display()
            );
            return Ok((AddressBook::new(), Some(notice)));
        }
        
        match storage.load() {
            Ok(book) => Ok((book, None)),
            Err(e) if e.is_corrupt_data() => {
                tracing::warn!("Ignoring unreadable address book {:?}: {}", storage.path(), e);
                let backup = storage.back_up()?;
                let notice = format!(
                    "Could not read {}, starting with an empty address book. The old file was kept as {}.",
                    storage.path().display(),
                    backup.display()
                );
                Ok((AddressBook::new(), Some(notice)))
            }
            Err(e) => Err(e.into()),
        }
    }
    
    /// Run the interactive loop over stdin/stdout
    /// 
    /// Blocks until the user exits or input ends; the book is saved on exit.
    pub async fn run(mut self) -> Result<(), AppError> {
        let reader = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        
        if let Some(notice) = &self.startup_notice {
            stdout.write_all(notice.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
        }
        
        self.session.run(reader, &mut stdout).await
    }
    
    /// The book as currently held in memory
    pub fn book(&self) -> &AddressBook {
        self.session.book()
    }
    
    /// Notice shown before the first prompt, if any
    pub fn startup_notice(&self) -> Option<&str> {
        self.startup_notice.as_deref()
    }
}
