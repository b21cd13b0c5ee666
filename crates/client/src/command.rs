//! Parsing of shell input lines.
use alchemy_core::{ElementCatalog, ElementKind};

/// A parsed shell command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Select(ElementKind),
    Combine,
    Show,
    Reset,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty input")]
    Empty,

    #[error("unknown element '{0}'")]
    UnknownElement(String),

    #[error("'{0}' needs an element name")]
    MissingElement(&'static str),

    #[error("'{command}' takes no arguments")]
    UnexpectedArgument { command: &'static str },
}

impl Command {
    /// Parses one line of input.
    ///
    /// A line that is not a keyword is treated as an element name, so
    /// `water` is shorthand for `select water`.
    pub fn parse(line: &str, catalog: &ElementCatalog) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let bare = |command: &'static str, parsed: Command| {
            if rest.is_empty() {
                Ok(parsed)
            } else {
                Err(CommandError::UnexpectedArgument { command })
            }
        };

        match keyword.to_ascii_lowercase().as_str() {
            "select" | "s" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingElement("select"));
                }
                resolve(rest, catalog).map(Command::Select)
            }
            "combine" | "c" => bare("combine", Command::Combine),
            "show" | "ls" => bare("show", Command::Show),
            "reset" => bare("reset", Command::Reset),
            "help" | "?" => bare("help", Command::Help),
            "quit" | "exit" | "q" => bare("quit", Command::Quit),
            _ => resolve(line, catalog).map(Command::Select),
        }
    }
}

fn resolve(name: &str, catalog: &ElementCatalog) -> Result<ElementKind, CommandError> {
    catalog
        .find(name)
        .ok_or_else(|| CommandError::UnknownElement(name.to_owned()))
}

pub const HELP: &str = "\
Commands:
  select <element>   select or deselect an element (or just type its name)
  combine            combine the two selected elements
  show               redraw the menu
  reset              start over with the starting elements
  help               show this help
  quit               leave the game";
