/// Interactive command loop
/// 
/// This module implements the session that:
/// 1. Reads one line of user input at a time
/// 2. Splits it into a command name and arguments and dispatches it
/// 3. Writes the handler's reply, or a friendly error, back to the user
/// 
/// Errors from handlers are logged here with the command name; the domain
/// and command layers never print or log on their own.

pub mod style;

pub use style::Style;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};

use crate::commands::{CommandError, CommandRegistry};
use crate::domain::{AddressBook, DomainError};
use crate::storage::{BookStorage, StorageError};
use crate::AppError;

/// Prompt printed before each line of input
pub const PROMPT: &str = ">>> ";

const WELCOME: &str = "Welcome to the address book assistant! Type 'help' to see the list of commands.";
const GOODBYE: &str = "Good bye! Saving the address book...";

/// What the loop should do after a line has been handled
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Reply(String),
    Silent,
    Exit,
}

/// An interactive session over one address book
pub struct Session<S: BookStorage> {
    book: AddressBook,
    storage: S,
    registry: CommandRegistry,
    style: Style,
}

impl<S: BookStorage> Session<S> {
    /// Create a session with the standard command set
    pub fn new(book: AddressBook, storage: S, style: Style) -> Self {
        Self {
            book,
            storage,
            registry: CommandRegistry::standard(),
            style,
        }
    }
    
    pub fn book(&self) -> &AddressBook {
        &self.book
    }
    
    pub fn storage(&self) -> &S {
        &self.storage
    }
    
    /// Run the loop until `exit`/`close` or end of input
    /// 
    /// The book is saved on the way out. A failed save on exit is reported to
    /// the user and returned as an error.
    pub async fn run<R, W>(&mut self, mut reader: R, writer: &mut W) -> Result<(), AppError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Starting session with {} contacts", self.book.len());
        write_line(writer, WELCOME).await?;
        
        let mut line = String::new();
        
        loop {
            writer.write_all(PROMPT.as_bytes()).await?;
            writer.flush().await?;
            line.clear();
            
            match reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("Input closed");
                    write_line(writer, "").await?;
                    break;
                }
                Ok(_) => match self.process_line(&line) {
                    Step::Reply(text) => write_line(writer, &text).await?,
                    Step::Silent => {}
                    Step::Exit => break,
                },
                Err(e) => {
                    error!("Failed to read input: {}", e);
                    return Err(e.into());
                }
            }
        }
        
        write_line(writer, GOODBYE).await?;
        if let Err(e) = self.save() {
            write_line(writer, &self.style.error(&format!("Failed to save the address book: {}", e))).await?;
            return Err(e.into());
        }
        
        info!("Session finished");
        Ok(())
    }
    
    /// Handle a single line of input
    fn process_line(&mut self, line: &str) -> Step {
        let mut parts = line.split_whitespace();
        let Some(first) = parts.next() else {
            return Step::Silent;
        };
        let command = first.to_lowercase();
        let args: Vec<&str> = parts.collect();
        
        match command.as_str() {
            "exit" | "close" => Step::Exit,
            "help" => Step::Reply(self.help_text()),
            "save" => Step::Reply(match self.save() {
                Ok(()) => self.style.notice("Address book saved."),
                Err(e) => self.style.error(&format!("Failed to save the address book: {}", e)),
            }),
            name => {
                debug!("Dispatching '{}' with {} argument(s)", name, args.len());
                match self.registry.dispatch(name, &args, &mut self.book) {
                    Ok(reply) => Step::Reply(reply),
                    Err(e) => Step::Reply(self.report(name, &e)),
                }
            }
        }
    }
    
    /// Log a handler failure and turn it into a user-facing message
    fn report(&self, command: &str, err: &CommandError) -> String {
        match err {
            CommandError::UnknownCommand(_) => {
                debug!("Unknown command '{}'", command);
                self.style.hint("Unknown command. Type 'help' to see the available commands.")
            }
            CommandError::MissingArguments { usage, .. } => {
                error!("Argument error in '{}': {}", command, err);
                self.style.error(&format!("Invalid command format. Usage: {}", usage))
            }
            CommandError::Domain(DomainError::ContactNotFound { name }) => {
                error!("Lookup error in '{}': {}", command, err);
                self.style.error(&format!("Contact {} not found.", name))
            }
            CommandError::Domain(e) if e.is_validation() => {
                error!("Validation error in '{}': {}", command, e);
                self.style.error(&capitalize(&e.to_string()))
            }
            CommandError::Domain(e) => {
                error!("Unexpected error in '{}': {:?}", command, e);
                self.style.error(&format!("An unexpected error occurred: {}", e))
            }
        }
    }
    
    fn save(&self) -> Result<(), StorageError> {
        self.storage.save(&self.book).map_err(|e| {
            warn!("Saving the address book failed: {}", e);
            e
        })
    }
    
    fn help_text(&self) -> String {
        let mut text = self.style.notice("Supported commands:");
        for usage in self.registry.usages() {
            text.push_str("\n  ");
            text.push_str(usage);
        }
        text.push_str("\n  save\n  close or exit (save and quit)");
        text
    }
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> std::io::Result<()> {
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
