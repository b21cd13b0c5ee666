use crate::env::ElementKind;

use super::error::SelectionError;

/// Coarse position in the selection state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionPhase {
    Empty,
    FirstOnly,
    BothFilled,
}

/// Two selection slots.
///
/// `second` is only ever occupied while `first` is, and the two slots never
/// hold the same element. Fields are private so both invariants hold for every
/// value reachable through [`SelectionState::toggle`]. Deserialized values
/// go through [`SelectionState::from_slots`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSelection"))]
pub struct SelectionState {
    first: Option<ElementKind>,
    second: Option<ElementKind>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSelection {
    first: Option<ElementKind>,
    second: Option<ElementKind>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSelection> for SelectionState {
    type Error = SelectionError;

    fn try_from(raw: RawSelection) -> Result<Self, Self::Error> {
        Self::from_slots(raw.first, raw.second)
    }
}

impl SelectionState {
    pub const fn empty() -> Self {
        Self {
            first: None,
            second: None,
        }
    }

    /// Rebuilds slots from stored values.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] when `second` is set without `first` or both
    /// slots hold the same element.
    pub fn from_slots(
        first: Option<ElementKind>,
        second: Option<ElementKind>,
    ) -> Result<Self, SelectionError> {
        match (first, second) {
            (None, Some(second)) => Err(SelectionError::SecondWithoutFirst { second }),
            (Some(first), Some(second)) if first == second => {
                Err(SelectionError::SameElement { element: first })
            }
            _ => Ok(Self { first, second }),
        }
    }

    pub const fn first(&self) -> Option<ElementKind> {
        self.first
    }

    pub const fn second(&self) -> Option<ElementKind> {
        self.second
    }

    /// Both slots, when filled.
    pub const fn pair(&self) -> Option<(ElementKind, ElementKind)> {
        match (self.first, self.second) {
            (Some(first), Some(second)) => Some((first, second)),
            _ => None,
        }
    }

    pub const fn phase(&self) -> SelectionPhase {
        match (self.first, self.second) {
            (None, _) => SelectionPhase::Empty,
            (Some(_), None) => SelectionPhase::FirstOnly,
            (Some(_), Some(_)) => SelectionPhase::BothFilled,
        }
    }

    pub fn contains(&self, element: ElementKind) -> bool {
        self.first == Some(element) || self.second == Some(element)
    }

    /// Applies a click on `element` and returns the resulting slots.
    ///
    /// - clicking `first` promotes `second` into `first`
    /// - clicking `second` clears it
    /// - otherwise the element fills the first empty slot
    /// - with both slots full, the element restarts the pair as `first`
    #[must_use]
    pub fn toggle(self, element: ElementKind) -> Self {
        match (self.first, self.second) {
            (Some(first), second) if first == element => Self {
                first: second,
                second: None,
            },
            (first, Some(second)) if second == element => Self {
                first,
                second: None,
            },
            (None, _) => Self {
                first: Some(element),
                second: None,
            },
            (Some(first), None) => Self {
                first: Some(first),
                second: Some(element),
            },
            (Some(_), Some(_)) => Self {
                first: Some(element),
                second: None,
            },
        }
    }

    /// Slots after a successful combination: the result alone in `first`.
    pub(crate) const fn with_result(result: ElementKind) -> Self {
        Self {
            first: Some(result),
            second: None,
        }
    }
}
