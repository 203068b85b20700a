//! Line command parsing and dispatch
//!
//! A command line is `<command>:<argument>`:
//!
//! - `name:<author name>`
//! - `tag:<tag>`
//! - `tags:<tag-1>,<tag-2>,...,<tag-n>`
//!
//! The whole line is lower-cased and split on the first `:` only, so an
//! argument may itself contain `:`. Tags are split on `,` as-is; spaces
//! around a comma stay part of the tag.

use crate::error::Result;
use crate::manager::DataManager;
use std::collections::{HashMap, HashSet};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Inputs that end an interactive session (exact, case-sensitive)
pub const EXIT_COMMANDS: [&str; 5] = ["good bye", "close", "exit", "stop", "g"];

/// Usage banner printed when a session starts
pub const HELP: &str = "
    Supported commands:
    name: [author name] - prints quotes by author name
    tag:[tag] - prints quotes by a tag
    tags:[tag-1],[tag-2],...,[tag-n] - prints quotes by a tags
";

/// A parsed, validated command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Quotes by author name prefix
    ByAuthor(String),
    /// Quotes carrying any of the tags
    ByTags(Vec<String>),
}

/// Why a line could not be turned into a [`Command`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// The keyword before `:` is not a known command
    #[error("Unknown command")]
    UnknownCommand,

    /// A known keyword with no `:` separator
    #[error("Wrong command format")]
    MalformedCommand,
}

/// What a command produced, ready to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A single message, printed as-is
    Message(String),
    /// A list of quotes (or a sentinel), printed one per line
    Lines(Vec<String>),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Message(message) => f.write_str(message),
            Reply::Lines(lines) => f.write_str(&lines.join("\n")),
        }
    }
}

type Handler = fn(&str) -> Command;

fn by_author(argument: &str) -> Command {
    Command::ByAuthor(argument.to_string())
}

fn by_tags(argument: &str) -> Command {
    Command::ByTags(argument.split(',').map(str::to_string).collect())
}

/// Parses command lines and runs them against a [`DataManager`]
pub struct CommandManager {
    exit_commands: HashSet<&'static str>,
    commands: HashMap<&'static str, Handler>,
    data_manager: DataManager,
}

impl CommandManager {
    pub fn new(data_manager: DataManager) -> Self {
        let commands: HashMap<&'static str, Handler> = HashMap::from([
            ("name", by_author as Handler),
            ("tag", by_tags as Handler),
            ("tags", by_tags as Handler),
        ]);

        Self {
            exit_commands: EXIT_COMMANDS.into_iter().collect(),
            commands,
            data_manager,
        }
    }

    /// True if `input` is exactly one of [`EXIT_COMMANDS`]
    pub fn is_exit(&self, input: &str) -> bool {
        self.exit_commands.contains(input)
    }

    /// Turn a raw line into a [`Command`]
    ///
    /// The keyword is checked before the separator: `foo` is an unknown
    /// command, `name` is a malformed one.
    pub fn parse(&self, input: &str) -> std::result::Result<Command, CommandError> {
        let input = input.to_lowercase();
        let (name, argument) = match input.split_once(':') {
            Some((name, argument)) => (name, Some(argument)),
            None => (input.as_str(), None),
        };

        let handler = self
            .commands
            .get(name)
            .ok_or(CommandError::UnknownCommand)?;
        let argument = argument.ok_or(CommandError::MalformedCommand)?;

        Ok(handler(argument.trim()))
    }

    /// Run a parsed command
    pub async fn execute(&self, command: &Command) -> Result<Vec<String>> {
        debug!("Executing {:?}", command);
        match command {
            Command::ByAuthor(name) => self.data_manager.query_by_author(name).await,
            Command::ByTags(tags) => self.data_manager.query_by_tags(tags).await,
        }
    }

    /// Parse and run one line
    ///
    /// Bad input becomes a [`Reply::Message`]; only a failing data provider
    /// produces an `Err`.
    pub async fn handle_command(&self, input: &str) -> Result<Reply> {
        match self.parse(input) {
            Ok(command) => self.execute(&command).await.map(Reply::Lines),
            Err(e) => {
                debug!("Rejected input {:?}: {}", input, e);
                Ok(Reply::Message(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheConfig, MemoryCache};
    use crate::provider::InMemoryDataProvider;
    use std::sync::Arc;

    fn manager() -> CommandManager {
        let cache = Arc::new(MemoryCache::new(CacheConfig::default()));
        let provider = Arc::new(InMemoryDataProvider::new());
        CommandManager::new(DataManager::new(cache, provider))
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exit_keywords_are_exact() {
        let manager = manager();

        for keyword in EXIT_COMMANDS {
            assert!(manager.is_exit(keyword));
        }
        assert!(!manager.is_exit("Exit"));
        assert!(!manager.is_exit(" exit"));
        assert!(!manager.is_exit("goodbye"));
    }

    #[test]
    fn test_parse_name() {
        let manager = manager();

        assert_eq!(
            manager.parse("name: Steve Martin "),
            Ok(Command::ByAuthor("steve martin".to_string()))
        );
    }

    #[test]
    fn test_parse_tag_and_tags() {
        let manager = manager();

        assert_eq!(
            manager.parse("tag:Fun"),
            Ok(Command::ByTags(strings(&["fun"])))
        );
        assert_eq!(
            manager.parse("TAGS:life,love"),
            Ok(Command::ByTags(strings(&["life", "love"])))
        );
        // only the argument as a whole is trimmed
        assert_eq!(
            manager.parse("tags: life, love "),
            Ok(Command::ByTags(strings(&["life", " love"])))
        );
    }

    #[test]
    fn test_parse_keeps_later_colons_in_argument() {
        let manager = manager();

        assert_eq!(
            manager.parse("name:star wars: a new hope"),
            Ok(Command::ByAuthor("star wars: a new hope".to_string()))
        );
    }

    #[test]
    fn test_parse_errors() {
        let manager = manager();

        assert_eq!(manager.parse("foo:bar"), Err(CommandError::UnknownCommand));
        assert_eq!(manager.parse("foo"), Err(CommandError::UnknownCommand));
        assert_eq!(manager.parse(""), Err(CommandError::UnknownCommand));
        assert_eq!(manager.parse("name"), Err(CommandError::MalformedCommand));
        assert_eq!(manager.parse("tags"), Err(CommandError::MalformedCommand));
    }

    #[test]
    fn test_bad_input_becomes_a_message() {
        let manager = manager();

        let reply = tokio_test::block_on(manager.handle_command("foo:bar")).unwrap();
        assert_eq!(reply, Reply::Message("Unknown command".to_string()));

        let reply = tokio_test::block_on(manager.handle_command("name")).unwrap();
        assert_eq!(reply, Reply::Message("Wrong command format".to_string()));
    }

    #[test]
    fn test_reply_display() {
        assert_eq!(Reply::Message("Unknown command".to_string()).to_string(), "Unknown command");
        assert_eq!(Reply::Lines(strings(&["one", "two"])).to_string(), "one\ntwo");
        assert_eq!(Reply::Lines(vec![]).to_string(), "");
    }
}
