//! A single play session: content, mutable state and pending notices.
use alchemy_content::Content;
use alchemy_core::{Combination, ElementKind, GameEngine, GameState};

use crate::config::UiConfig;
use crate::message::{MessageEntry, MessageLevel, MessageLog};
use crate::view_model::Frame;

pub struct Session {
    content: Content,
    state: GameState,
    messages: MessageLog,
    show_locked: bool,
}

impl Session {
    pub fn new(content: Content, ui: &UiConfig) -> Self {
        let state = content.new_state();
        Self {
            content,
            state,
            messages: MessageLog::new(ui.message_capacity),
            show_locked: ui.show_locked,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn frame(&self) -> Frame {
        Frame::from_state(&self.content.catalog, &self.state, self.show_locked)
    }

    /// Removes and returns pending notices.
    pub fn dismiss_messages(&mut self) -> Vec<MessageEntry> {
        self.messages.dismiss()
    }

    /// Selects an element if it is unlocked.
    ///
    /// Locked elements never reach the engine; a notice is queued instead and
    /// `false` is returned.
    pub fn select(&mut self, element: ElementKind) -> bool {
        if !self.state.is_unlocked(element) {
            tracing::warn!(%element, "Rejected selection of locked element");
            self.messages.push(MessageEntry::new(
                format!(
                    "{} has not been discovered yet",
                    self.content.catalog.name(element)
                ),
                MessageLevel::Warning,
            ));
            return false;
        }

        let selection = GameEngine::new(&mut self.state).select(element);
        tracing::debug!(
            %element,
            first = ?selection.first(),
            second = ?selection.second(),
            "Selection changed"
        );
        true
    }

    /// Combines the selected pair, queueing a notice either way.
    pub fn combine(&mut self) -> Option<Combination> {
        match GameEngine::new(&mut self.state).combine(&self.content.rules) {
            Ok(combination) => {
                let name = self.content.catalog.name(combination.result);
                if combination.newly_unlocked {
                    tracing::info!(
                        result = %combination.result,
                        unlocked = self.state.unlocked.len(),
                        "Discovered new element"
                    );
                    self.messages.push_text(format!("New element discovered: {name}!"));
                } else {
                    tracing::debug!(result = %combination.result, "Recreated known element");
                    self.messages.push_text(format!("You made {name} again."));
                }
                Some(combination)
            }
            Err(err) => {
                tracing::debug!(error = %err, "Combination failed");
                self.messages
                    .push(MessageEntry::new(err.to_string(), MessageLevel::from_error(&err)));
                None
            }
        }
    }

    /// Starts over from the configured starting elements.
    pub fn reset(&mut self) {
        tracing::info!("Session reset");
        self.state = self.content.new_state();
        self.messages.dismiss();
    }

    /// True once every catalog element has been unlocked.
    pub fn is_complete(&self) -> bool {
        self.state.unlocked.len() == ElementKind::all().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ElementKind::*;

    fn session() -> Session {
        Session::new(Content::builtin(), &UiConfig::default())
    }

    #[test]
    fn locked_element_is_rejected_with_notice() {
        let mut session = session();

        assert!(!session.select(Mud));
        assert_eq!(session.state().selection.first(), None);

        let notices = session.dismiss_messages();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, MessageLevel::Warning);
        assert!(notices[0].text.contains("Mud"));
    }

    #[test]
    fn successful_combination_queues_discovery() {
        let mut session = session();
        session.select(Earth);
        session.select(Water);

        let combination = session.combine().unwrap();
        assert_eq!(combination.result, Mud);

        let notices = session.dismiss_messages();
        assert_eq!(notices[0].text, "New element discovered: Mud!");
    }

    #[test]
    fn failed_combination_queues_warning() {
        let mut session = session();
        session.select(Earth);
        session.select(Fire);

        assert!(session.combine().is_none());
        let notices = session.dismiss_messages();
        assert_eq!(notices[0].level, MessageLevel::Warning);
        assert_eq!(notices[0].text, "earth and fire do not combine");
    }

    #[test]
    fn reset_restores_starting_state() {
        let mut session = session();
        session.select(Fire);
        session.select(Sand);
        session.combine();

        session.reset();

        assert_eq!(session.state(), &Content::builtin().new_state());
        assert!(session.dismiss_messages().is_empty());
    }
}
