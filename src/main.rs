/// Main entry point for the address book assistant
///
/// This file sets up logging, parses command line arguments, and starts the
/// interactive session. Logs go to a file so they never mix with the
/// conversation on the terminal.

use clap::Parser;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use address_book::{default_data_file, AddressBookApp, AppConfig};

/// Command line arguments for the address book assistant
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the address book file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long, env = "ADDRESS_BOOK_FILE")]
    file: Option<PathBuf>,

    /// Path to the log file (defaults to addressbook.log next to the data file)
    #[arg(long, env = "ADDRESS_BOOK_LOG")]
    log_file: Option<PathBuf>,

    /// Start with an empty address book instead of loading the saved one
    #[arg(long)]
    fresh: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Determine the data file before logging so the log can sit next to it
    let (data_file, temporary) = match args.file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            (path, false)
        }
        None => {
            let default = default_data_file()?;
            (default.path, default.temporary)
        }
    };

    let mut config = AppConfig::new(data_file);
    config.fresh = args.fresh;
    config.color = !args.no_color;

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "error"
    };

    let log_path = args.log_file.unwrap_or_else(|| config.default_log_file());
    let writer = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(e) => {
            eprintln!("Cannot open log file {}: {}; logging to stderr", log_path.display(), e);
            BoxMakeWriter::new(std::io::stderr)
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("address_book={}", log_level))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    info!("Starting address book assistant");
    if temporary {
        warn!("Using temporary directory for the address book: {}", config.data_file.display());
    }
    info!("Using address book at: {}", config.data_file.display());

    let app = AddressBookApp::new(config)?;
    app.run().await?;

    info!("Address book assistant shutdown complete");
    Ok(())
}
