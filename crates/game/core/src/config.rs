use crate::env::ElementKind;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Elements available for selection when a session starts.
    #[cfg_attr(feature = "serde", serde(default = "GameConfig::default_initial_unlocked"))]
    pub initial_unlocked: Vec<ElementKind>,
}

impl GameConfig {
    pub const DEFAULT_INITIAL_UNLOCKED: [ElementKind; 4] = [
        ElementKind::Earth,
        ElementKind::Water,
        ElementKind::Fire,
        ElementKind::Sand,
    ];

    pub fn new() -> Self {
        Self {
            initial_unlocked: Self::default_initial_unlocked(),
        }
    }

    pub fn with_initial_unlocked(initial_unlocked: impl IntoIterator<Item = ElementKind>) -> Self {
        Self {
            initial_unlocked: initial_unlocked.into_iter().collect(),
        }
    }

    fn default_initial_unlocked() -> Vec<ElementKind> {
        Self::DEFAULT_INITIAL_UNLOCKED.to_vec()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
