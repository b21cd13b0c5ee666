use super::elements::ElementKind;
use super::error::RuleTableError;

/// Oracle answering whether two elements combine.
///
/// Lookups are symmetric: `combine(a, b) == combine(b, a)`.
pub trait RecipeOracle: Send + Sync {
    fn combine(&self, a: ElementKind, b: ElementKind) -> Option<ElementKind>;
}

/// Unordered pair of ingredients mapped to a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombinationRule {
    pub a: ElementKind,
    pub b: ElementKind,
    pub result: ElementKind,
}

impl CombinationRule {
    pub const fn new(a: ElementKind, b: ElementKind, result: ElementKind) -> Self {
        Self { a, b, result }
    }

    /// True when the rule's ingredients are `{x, y}` in either order.
    pub fn matches(&self, x: ElementKind, y: ElementKind) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

/// Immutable list of combination rules with at most one rule per pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<CombinationRule>,
}

impl RuleTable {
    /// Builds a table, rejecting rules that would make lookups ambiguous.
    ///
    /// # Errors
    ///
    /// - [`RuleTableError::DuplicateRule`] when a pair is listed twice with the same result
    /// - [`RuleTableError::ConflictingRule`] when a pair is listed with two results
    /// - [`RuleTableError::SelfCombination`] when both ingredients are the same element
    pub fn new(rules: impl IntoIterator<Item = CombinationRule>) -> Result<Self, RuleTableError> {
        let mut accepted: Vec<CombinationRule> = Vec::new();

        for rule in rules {
            if rule.a == rule.b {
                return Err(RuleTableError::SelfCombination { element: rule.a });
            }

            if let Some(existing) = accepted.iter().find(|r| r.matches(rule.a, rule.b)) {
                return Err(if existing.result == rule.result {
                    RuleTableError::DuplicateRule {
                        a: rule.a,
                        b: rule.b,
                        result: rule.result,
                    }
                } else {
                    RuleTableError::ConflictingRule {
                        a: rule.a,
                        b: rule.b,
                        existing: existing.result,
                        conflicting: rule.result,
                    }
                });
            }

            accepted.push(rule);
        }

        Ok(Self { rules: accepted })
    }

    /// Built-in recipes shipped with the game.
    pub fn standard() -> Self {
        use ElementKind::*;

        Self {
            rules: vec![
                CombinationRule::new(Earth, Water, Mud),
                CombinationRule::new(Fire, Sand, Glass),
                CombinationRule::new(Fire, Water, Steam),
                CombinationRule::new(Fire, Mud, Stone),
                CombinationRule::new(Water, Mud, Plant),
                CombinationRule::new(Fire, Steam, Energy),
            ],
        }
    }

    /// First rule in table order whose ingredients are `{a, b}`.
    pub fn lookup(&self, a: ElementKind, b: ElementKind) -> Option<&CombinationRule> {
        self.rules.iter().find(|rule| rule.matches(a, b))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CombinationRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RecipeOracle for RuleTable {
    fn combine(&self, a: ElementKind, b: ElementKind) -> Option<ElementKind> {
        self.lookup(a, b).map(|rule| rule.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ElementKind::*;

    #[test]
    fn standard_table_passes_validation() {
        let rebuilt = RuleTable::new(RuleTable::standard().iter().copied()).unwrap();
        assert_eq!(rebuilt, RuleTable::standard());
    }

    #[test]
    fn lookup_is_symmetric() {
        let table = RuleTable::standard();
        for rule in table.iter() {
            assert_eq!(table.combine(rule.a, rule.b), Some(rule.result));
            assert_eq!(table.combine(rule.b, rule.a), Some(rule.result));
        }
    }

    #[test]
    fn earth_and_fire_do_not_combine() {
        assert_eq!(RuleTable::standard().combine(Earth, Fire), None);
    }

    #[test]
    fn rejects_reversed_duplicate() {
        let err = RuleTable::new([
            CombinationRule::new(Earth, Water, Mud),
            CombinationRule::new(Water, Earth, Mud),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            RuleTableError::DuplicateRule {
                a: Water,
                b: Earth,
                result: Mud
            }
        );
    }

    #[test]
    fn rejects_conflicting_results() {
        let err = RuleTable::new([
            CombinationRule::new(Fire, Water, Steam),
            CombinationRule::new(Fire, Water, Energy),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            RuleTableError::ConflictingRule {
                a: Fire,
                b: Water,
                existing: Steam,
                conflicting: Energy,
            }
        );
    }

    #[test]
    fn rejects_self_combination() {
        let err = RuleTable::new([CombinationRule::new(Fire, Fire, Energy)]).unwrap_err();
        assert_eq!(err, RuleTableError::SelfCombination { element: Fire });
    }

    #[test]
    fn empty_table_never_combines() {
        let table = RuleTable::new([]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.combine(Earth, Water), None);
    }
}
