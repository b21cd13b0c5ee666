use crate::engine::Action;
use crate::env::ElementKind;
use crate::state::GameState;

/// Minimal description of an executed action's impact on the session state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateDelta {
    /// The action that caused this state transition.
    pub action: Action,

    /// Whether either selection slot changed.
    pub selection_changed: bool,

    /// Elements added to the unlocked set, in catalog order.
    pub unlocked: Vec<ElementKind>,

    /// Whether the last result was set or cleared.
    pub last_result_changed: bool,
}

impl StateDelta {
    /// Creates a delta by comparing two game states.
    pub fn from_states(action: Action, before: &GameState, after: &GameState) -> Self {
        Self {
            action,
            selection_changed: before.selection != after.selection,
            unlocked: after.unlocked.newly_unlocked(&before.unlocked),
            last_result_changed: before.last_result != after.last_result,
        }
    }

    /// Returns true if no state changes occurred.
    pub fn is_empty(&self) -> bool {
        !self.selection_changed && self.unlocked.is_empty() && !self.last_result_changed
    }
}
