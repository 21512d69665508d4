/// Command handlers for the interactive address book
/// 
/// Every command is a plain function taking the argument list and the book,
/// returning the text to show the user. The registry maps command names to
/// those functions so the input loop can dispatch on whatever the user typed.

pub mod contact;
pub mod birthday;

// Re-export handler functions for easy access
pub use contact::*;
pub use birthday::*;

use std::collections::HashMap;
use thiserror::Error;

use crate::domain::{AddressBook, DomainError};

/// Errors a command handler can report
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    
    #[error("'{command}' expects {expected} argument(s), got {got} (usage: {usage})")]
    MissingArguments {
        command: String,
        usage: &'static str,
        expected: usize,
        got: usize,
    },
    
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}

/// Uniform handler signature shared by all registered commands
pub type Handler = fn(&[&str], &mut AddressBook) -> Result<String, CommandError>;

/// A registered command: its name, usage line and handler
#[derive(Clone)]
pub struct Command {
    pub name: &'static str,
    pub usage: &'static str,
    pub arg_count: usize,
    pub handler: Handler,
}

impl Command {
    /// Check the argument count, then run the handler
    pub fn invoke(&self, args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
        if args.len() < self.arg_count {
            return Err(CommandError::MissingArguments {
                command: self.name.to_string(),
                usage: self.usage,
                expected: self.arg_count,
                got: args.len(),
            });
        }
        (self.handler)(args, book)
    }
}

/// Name-to-handler lookup table
pub struct CommandRegistry {
    commands: HashMap<&'static str, Command>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            order: Vec::new(),
        }
    }
    
    /// Registry with every built-in address book command
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("hello", "hello", 0, greet);
        registry.register("add", ADD_USAGE, 2, add_contact);
        registry.register("change", CHANGE_USAGE, 3, change_phone);
        registry.register("phone", PHONE_USAGE, 1, show_phones);
        registry.register("remove-phone", REMOVE_PHONE_USAGE, 2, remove_phone);
        registry.register("delete", DELETE_USAGE, 1, delete_contact);
        registry.register("all", "all", 0, show_all);
        registry.register("add-birthday", ADD_BIRTHDAY_USAGE, 2, add_birthday);
        registry.register("show-birthday", SHOW_BIRTHDAY_USAGE, 1, show_birthday);
        registry.register("birthdays", "birthdays", 0, show_upcoming_birthdays);
        registry
    }
    
    /// Register a command; a later registration under the same name wins
    pub fn register(
        &mut self,
        name: &'static str,
        usage: &'static str,
        arg_count: usize,
        handler: Handler,
    ) {
        let command = Command { name, usage, arg_count, handler };
        if self.commands.insert(name, command).is_none() {
            self.order.push(name);
        }
    }
    
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }
    
    /// Look up `name` and run it against the book
    pub fn dispatch(
        &self,
        name: &str,
        args: &[&str],
        book: &mut AddressBook,
    ) -> Result<String, CommandError> {
        let command = self
            .get(name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
        command.invoke(args, book)
    }
    
    /// Usage lines in registration order
    pub fn usages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .map(|command| command.usage)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Take the first `N` arguments, or report the command's usage
/// 
/// The command name is the first word of `usage`. Extra arguments are ignored.
pub(crate) fn positional<'a, const N: usize>(
    usage: &'static str,
    args: &[&'a str],
) -> Result<[&'a str; N], CommandError> {
    args.get(..N)
        .and_then(|head| <[&'a str; N]>::try_from(head).ok())
        .ok_or_else(|| CommandError::MissingArguments {
            command: usage.split_whitespace().next().unwrap_or(usage).to_string(),
            usage,
            expected: N,
            got: args.len(),
        })
}

/// hello
pub fn greet(_args: &[&str], _book: &mut AddressBook) -> Result<String, CommandError> {
    Ok("Hello! How can I help you?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_dispatch_hello() {
        let registry = CommandRegistry::standard();
        let mut book = AddressBook::new();
        let reply = registry.dispatch("hello", &[], &mut book).unwrap();
        assert_eq!(reply, "Hello! How can I help you?");
    }
    
    #[test]
    fn test_unknown_command() {
        let registry = CommandRegistry::standard();
        let mut book = AddressBook::new();
        let err = registry.dispatch("fly", &[], &mut book).unwrap_err();
        assert_eq!(err, CommandError::UnknownCommand("fly".to_string()));
    }
    
    #[test]
    fn test_argument_count_checked_before_handler() {
        let registry = CommandRegistry::standard();
        let mut book = AddressBook::new();
        
        let expectations = [
            ("add", 2),
            ("change", 3),
            ("phone", 1),
            ("add-birthday", 2),
            ("show-birthday", 1),
            ("delete", 1),
            ("remove-phone", 2),
        ];
        for (name, expected) in expectations {
            let err = registry.dispatch(name, &[], &mut book).unwrap_err();
            match err {
                CommandError::MissingArguments { expected: e, got, .. } => {
                    assert_eq!(e, expected, "{name}");
                    assert_eq!(got, 0);
                }
                other => panic!("unexpected error for {name}: {other:?}"),
            }
        }
        assert!(book.is_empty());
    }
    
    #[test]
    fn test_direct_handler_call_reports_missing_arguments() {
        let registry = CommandRegistry::standard();
        let mut book = AddressBook::new();
        
        let add = registry.get("add").unwrap();
        let err = (add.handler)(&[], &mut book).unwrap_err();
        assert_eq!(
            err,
            CommandError::MissingArguments {
                command: "add".to_string(),
                usage: ADD_USAGE,
                expected: 2,
                got: 0,
            }
        );
        
        let change = registry.get("change").unwrap();
        assert!((change.handler)(&["Alice"], &mut book).is_err());
        assert!(book.is_empty());
    }
    
    #[test]
    fn test_extra_arguments_ignored() {
        let registry = CommandRegistry::standard();
        let mut book = AddressBook::new();
        registry.dispatch("all", &["extra"], &mut book).unwrap();
    }
    
    #[test]
    fn test_usages_in_registration_order() {
        let registry = CommandRegistry::standard();
        let usages: Vec<&str> = registry.usages().collect();
        assert_eq!(usages.first(), Some(&"hello"));
        assert_eq!(usages.last(), Some(&"birthdays"));
        assert_eq!(usages.len(), 10);
    }
    
    #[test]
    fn test_register_replaces_handler() {
        fn shout(_: &[&str], _: &mut AddressBook) -> Result<String, CommandError> {
            Ok("HELLO".to_string())
        }
        
        let mut registry = CommandRegistry::standard();
        registry.register("hello", "hello", 0, shout);
        let mut book = AddressBook::new();
        assert_eq!(registry.dispatch("hello", &[], &mut book).unwrap(), "HELLO");
        assert_eq!(registry.usages().count(), 10);
    }
}
