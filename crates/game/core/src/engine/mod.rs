//! Selection and combination pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! state mutation goes through [`GameEngine::select`] or
//! [`GameEngine::combine`], either directly or via [`GameEngine::execute`].

mod errors;

pub use errors::CombineError;

use crate::env::{ElementKind, RecipeOracle};
use crate::state::{GameState, LastResult, Recipe, SelectionState, StateDelta};

/// Discrete user input accepted by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Click on an unlocked element.
    Select(ElementKind),
    /// Combine the two selected elements.
    Combine,
}

/// Result of a successful combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combination {
    pub recipe: Recipe,
    pub result: ElementKind,
    /// False when the result had already been unlocked.
    pub newly_unlocked: bool,
}

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// State change metadata.
    pub delta: StateDelta,

    /// `None` for selections.
    pub combination: Option<Combination>,
}

/// Engine applying user actions to a borrowed [`GameState`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Routes an action to [`Self::select`] or [`Self::combine`] and records
    /// what changed.
    pub fn execute<R>(
        &mut self,
        recipes: &R,
        action: &Action,
    ) -> Result<ExecutionOutcome, CombineError>
    where
        R: RecipeOracle + ?Sized,
    {
        let before = self.state.clone();

        let combination = match *action {
            Action::Select(element) => {
                self.select(element);
                None
            }
            Action::Combine => Some(self.combine(recipes)?),
        };

        Ok(ExecutionOutcome {
            delta: StateDelta::from_states(*action, &before, self.state),
            combination,
        })
    }

    /// Applies a click on `element` to the selection slots.
    ///
    /// The caller must only offer unlocked elements. The last result is
    /// cleared unconditionally.
    pub fn select(&mut self, element: ElementKind) -> SelectionState {
        debug_assert!(
            self.state.is_unlocked(element),
            "selected locked element {element}"
        );

        self.state.selection = self.state.selection.toggle(element);
        self.state.last_result = None;
        self.state.selection
    }

    /// Combines the two selected elements.
    ///
    /// On success the result is unlocked, recorded as the last result and
    /// left alone in the first slot.
    ///
    /// # Errors
    ///
    /// - [`CombineError::InvalidState`] if either slot is empty
    /// - [`CombineError::NoCombination`] if no recipe matches the pair
    ///
    /// State is unchanged on error.
    pub fn combine<R>(&mut self, recipes: &R) -> Result<Combination, CombineError>
    where
        R: RecipeOracle + ?Sized,
    {
        let (first, second) =
            self.state
                .selection
                .pair()
                .ok_or(CombineError::InvalidState {
                    selection: self.state.selection,
                })?;

        let result = recipes
            .combine(first, second)
            .ok_or(CombineError::NoCombination { first, second })?;

        let recipe = Recipe::new(first, second);
        let newly_unlocked = self.state.unlocked.unlock(result);
        self.state.last_result = Some(LastResult { recipe, result });
        self.state.selection = SelectionState::with_result(result);

        Ok(Combination {
            recipe,
            result,
            newly_unlocked,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::RuleTable;
    use crate::error::{ErrorSeverity, GameError};
    use ElementKind::*;

    #[test]
    fn select_clears_last_result() {
        let mut state = GameState::default();
        let rules = RuleTable::standard();
        let mut engine = GameEngine::new(&mut state);

        engine.select(Earth);
        engine.select(Water);
        engine.combine(&rules).unwrap();
        assert!(engine.state().last_result.is_some());

        engine.select(Mud);
        assert_eq!(engine.state().last_result, None);
        assert_eq!(engine.state().selection, SelectionState::empty());
    }

    #[test]
    fn combine_with_single_slot_is_invalid() {
        let mut state = GameState::default();
        let rules = RuleTable::standard();
        let mut engine = GameEngine::new(&mut state);

        engine.select(Earth);
        let before = engine.state().clone();

        let err = engine.combine(&rules).unwrap_err();
        assert!(matches!(err, CombineError::InvalidState { .. }));
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "COMBINE_INVALID_STATE");
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn combine_on_empty_selection_is_invalid() {
        let mut state = GameState::default();
        let mut engine = GameEngine::new(&mut state);

        let err = engine.combine(&RuleTable::standard()).unwrap_err();
        assert_eq!(
            err,
            CombineError::InvalidState {
                selection: SelectionState::empty()
            }
        );
    }

    #[test]
    fn recombining_known_result_does_not_duplicate() {
        let mut state = GameState::default();
        let rules = RuleTable::standard();
        let mut engine = GameEngine::new(&mut state);

        engine.select(Earth);
        engine.select(Water);
        let first = engine.combine(&rules).unwrap();
        assert!(first.newly_unlocked);

        engine.select(Mud); // deselects mud
        engine.select(Water);
        engine.select(Earth);
        let second = engine.combine(&rules).unwrap();
        assert_eq!(second.result, Mud);
        assert_eq!(second.recipe, Recipe::new(Water, Earth));
        assert!(!second.newly_unlocked);
        assert_eq!(engine.state().unlocked.len(), 5);
    }

    #[test]
    fn execute_reports_delta() {
        let mut state = GameState::default();
        let rules = RuleTable::standard();
        let mut engine = GameEngine::new(&mut state);

        let outcome = engine.execute(&rules, &Action::Select(Fire)).unwrap();
        assert!(outcome.delta.selection_changed);
        assert!(outcome.delta.unlocked.is_empty());
        assert_eq!(outcome.combination, None);

        engine.execute(&rules, &Action::Select(Sand)).unwrap();
        let outcome = engine.execute(&rules, &Action::Combine).unwrap();
        assert_eq!(outcome.delta.action, Action::Combine);
        assert_eq!(outcome.delta.unlocked, vec![Glass]);
        assert!(outcome.delta.last_result_changed);
        assert_eq!(outcome.combination.map(|c| c.result), Some(Glass));
    }

    #[test]
    fn execute_propagates_combine_errors() {
        let mut state = GameState::default();
        let rules = RuleTable::standard();
        let mut engine = GameEngine::new(&mut state);

        engine.execute(&rules, &Action::Select(Earth)).unwrap();
        engine.execute(&rules, &Action::Select(Fire)).unwrap();
        let err = engine.execute(&rules, &Action::Combine).unwrap_err();

        assert_eq!(
            err,
            CombineError::NoCombination {
                first: Earth,
                second: Fire
            }
        );
        assert!(err.severity().is_recoverable());
    }

    #[test]
    fn engine_accepts_trait_objects() {
        let mut state = GameState::default();
        let rules = RuleTable::standard();
        let oracle: &dyn RecipeOracle = &rules;
        let mut engine = GameEngine::new(&mut state);

        engine.select(Fire);
        engine.select(Water);
        assert_eq!(engine.combine(oracle).unwrap().result, Steam);
    }
}
