use std::collections::BTreeSet;

use crate::env::ElementKind;

/// Elements the player may select. Grows monotonically; there is no removal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnlockedSet(BTreeSet<ElementKind>);

impl UnlockedSet {
    pub fn contains(&self, element: ElementKind) -> bool {
        self.0.contains(&element)
    }

    /// Adds an element; returns `true` if it was not already unlocked.
    pub fn unlock(&mut self, element: ElementKind) -> bool {
        self.0.insert(element)
    }

    /// Unlocked elements in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = ElementKind> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_superset(&self, other: &UnlockedSet) -> bool {
        self.0.is_superset(&other.0)
    }

    /// Elements unlocked here but not in `earlier`, in catalog order.
    pub fn newly_unlocked(&self, earlier: &UnlockedSet) -> Vec<ElementKind> {
        self.0.difference(&earlier.0).copied().collect()
    }
}

impl FromIterator<ElementKind> for UnlockedSet {
    fn from_iter<I: IntoIterator<Item = ElementKind>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
