//! Notices shown below the menu.
use std::collections::VecDeque;

use alchemy_core::{ErrorSeverity, GameError};

/// Severity level for notices.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

impl MessageLevel {
    /// Maps engine error severity to a notice level.
    pub fn from_error(error: &impl GameError) -> Self {
        match error.severity() {
            ErrorSeverity::Recoverable | ErrorSeverity::Validation => Self::Warning,
            ErrorSeverity::Internal | ErrorSeverity::Fatal => Self::Error,
        }
    }

    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Info => "",
            Self::Warning => "! ",
            Self::Error => "!! ",
        }
    }
}

/// A single notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }
}

/// Bounded queue of undismissed notices.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, MessageLevel::Info));
    }

    /// Removes and returns every pending notice, oldest first.
    pub fn dismiss(&mut self) -> Vec<MessageEntry> {
        self.entries.drain(..).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alchemy_core::{CombineError, ElementKind, SelectionError};

    #[test]
    fn drops_oldest_when_full() {
        let mut log = MessageLog::new(2);
        log.push_text("a");
        log.push_text("b");
        log.push_text("c");

        let texts: Vec<_> = log.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c"]);
    }

    #[test]
    fn dismiss_empties_log() {
        let mut log = MessageLog::new(4);
        log.push(MessageEntry::new("careful", MessageLevel::Warning));

        let dismissed = log.dismiss();
        assert_eq!(dismissed.len(), 1);
        assert_eq!(dismissed[0].level, MessageLevel::Warning);
        assert!(log.is_empty());
    }

    #[test]
    fn error_levels_follow_severity() {
        let no_rule = CombineError::NoCombination {
            first: ElementKind::Earth,
            second: ElementKind::Fire,
        };
        assert_eq!(MessageLevel::from_error(&no_rule), MessageLevel::Warning);

        let broken = SelectionError::SameElement {
            element: ElementKind::Mud,
        };
        assert_eq!(MessageLevel::from_error(&broken), MessageLevel::Error);
        assert_eq!(MessageLevel::Error.prefix(), "!! ");
    }
}
