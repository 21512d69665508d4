/// Runtime configuration for the address book application
/// 
/// Resolves where the book and the log file live. Command line parsing
/// happens in the binary; this module only holds the resolved values and
/// the default-location strategy.

use std::path::{Path, PathBuf};

use crate::storage::DEFAULT_FILE_NAME;

/// Default log file name, placed next to the data file
pub const DEFAULT_LOG_FILE_NAME: &str = "addressbook.log";

/// Resolved application settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// File the book is loaded from and saved to
    pub data_file: PathBuf,
    /// Start with an empty book instead of loading `data_file`
    pub fresh: bool,
    /// Decorate terminal output with ANSI colors
    pub color: bool,
}

impl AppConfig {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            fresh: false,
            color: true,
        }
    }
    
    /// Log file next to the data file
    pub fn default_log_file(&self) -> PathBuf {
        sibling_log_file(&self.data_file)
    }
}

fn sibling_log_file(data_file: &Path) -> PathBuf {
    match data_file.parent() {
        Some(parent) => parent.join(DEFAULT_LOG_FILE_NAME),
        None => PathBuf::from(DEFAULT_LOG_FILE_NAME),
    }
}

/// Where the book lives when no path is given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultDataFile {
    pub path: PathBuf,
    /// True when every preferred directory was unusable and the book ended
    /// up in the system temporary directory
    pub temporary: bool,
}

/// Get the default data file path with a fallback strategy
/// 
/// Tries the home directory, then the platform data and config directories,
/// then the current directory; the first writable one wins. Falls back to
/// the temporary directory. Nothing is logged here because this runs before
/// logging is set up; callers report `temporary` themselves.
pub fn default_data_file() -> std::io::Result<DefaultDataFile> {
    let potential_dirs = [
        dirs::home_dir().map(|p| p.join(".address_book")),
        dirs::data_dir().map(|p| p.join("address_book")),
        dirs::config_dir().map(|p| p.join("address_book")),
        std::env::current_dir().ok().map(|p| p.join(".address_book")),
    ];
    
    resolve_data_file(&potential_dirs, &std::env::temp_dir().join("address_book"))
}

fn resolve_data_file(
    potential_dirs: &[Option<PathBuf>],
    temp_dir: &Path,
) -> std::io::Result<DefaultDataFile> {
    for dir in potential_dirs.iter().flatten() {
        if is_writable_dir(dir) {
            return Ok(DefaultDataFile {
                path: dir.join(DEFAULT_FILE_NAME),
                temporary: false,
            });
        }
    }
    
    std::fs::create_dir_all(temp_dir)?;
    Ok(DefaultDataFile {
        path: temp_dir.join(DEFAULT_FILE_NAME),
        temporary: true,
    })
}

fn is_writable_dir(dir: &Path) -> bool {
    if std::fs::create_dir_all(dir).is_err() {
        return false;
    }
    let marker = dir.join(".write_test");
    if std::fs::write(&marker, b"test").is_ok() {
        let _ = std::fs::remove_file(&marker);
        return true;
    }
    false
}
