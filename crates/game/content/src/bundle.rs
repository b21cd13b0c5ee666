use alchemy_core::{ElementCatalog, GameConfig, GameState, RuleTable};

/// Everything a session needs besides its mutable state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Content {
    pub config: GameConfig,
    pub catalog: ElementCatalog,
    pub rules: RuleTable,
}

impl Content {
    pub fn new(config: GameConfig, catalog: ElementCatalog, rules: RuleTable) -> Self {
        Self {
            config,
            catalog,
            rules,
        }
    }

    /// Built-in content compiled into the game.
    pub fn builtin() -> Self {
        Self::new(
            GameConfig::default(),
            ElementCatalog::standard(),
            RuleTable::standard(),
        )
    }

    /// Fresh session state for this content.
    pub fn new_state(&self) -> GameState {
        GameState::new(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alchemy_core::{ElementKind, SelectionPhase};

    #[test]
    fn builtin_state_starts_with_four_elements() {
        let state = Content::builtin().new_state();
        assert_eq!(
            state.unlocked.iter().collect::<Vec<_>>(),
            vec![
                ElementKind::Earth,
                ElementKind::Water,
                ElementKind::Fire,
                ElementKind::Sand
            ]
        );
        assert_eq!(state.selection.phase(), SelectionPhase::Empty);
        assert_eq!(state.last_result, None);
    }
}
