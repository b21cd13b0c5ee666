//! View-model snapshots derived from [`alchemy_core::GameState`].
use std::fmt;

use alchemy_core::{ElementCatalog, ElementKind, GameState};

pub const PROMPT: &str = "Select two elements to combine";

/// Which slot, if any, an element occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotMarker {
    None,
    First,
    Second,
}

impl SlotMarker {
    pub const fn badge(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::First => "1st",
            Self::Second => "2nd",
        }
    }
}

/// One row of the element menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub kind: ElementKind,
    pub label: String,
    pub marker: SlotMarker,
    /// Locked entries are only listed when `show_locked` is set and cannot
    /// be selected.
    pub locked: bool,
}

/// A filled slot on the stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotView {
    pub kind: ElementKind,
    pub name: String,
    /// Resolved model asset, if the catalog names one.
    pub model: Option<String>,
    pub sound: Option<String>,
}

impl SlotView {
    fn new(catalog: &ElementCatalog, kind: ElementKind) -> Self {
        Self {
            kind,
            name: catalog.name(kind).to_owned(),
            model: catalog.model_asset(kind).map(str::to_owned),
            sound: catalog.sound_asset(kind).map(str::to_owned),
        }
    }
}

/// What the stage area shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageView {
    Prompt,
    Single(SlotView),
    Pair(SlotView, SlotView),
}

/// High-level snapshot of the session used by the shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub menu: Vec<MenuEntry>,
    pub stage: StageView,
    /// "Earth + Water = Mud" for the most recent combination.
    pub last_result: Option<String>,
    /// Combine cue, present alongside `last_result`.
    pub combine_sound: Option<String>,
}

impl Frame {
    pub fn from_state(catalog: &ElementCatalog, state: &GameState, show_locked: bool) -> Self {
        let selection = state.selection;

        let menu = catalog
            .iter()
            .filter_map(|def| {
                let locked = !state.is_unlocked(def.kind);
                if locked && !show_locked {
                    return None;
                }
                let marker = if selection.first() == Some(def.kind) {
                    SlotMarker::First
                } else if selection.second() == Some(def.kind) {
                    SlotMarker::Second
                } else {
                    SlotMarker::None
                };
                Some(MenuEntry {
                    kind: def.kind,
                    label: def.label(),
                    marker,
                    locked,
                })
            })
            .collect();

        let stage = match (selection.first(), selection.second()) {
            (Some(first), Some(second)) => StageView::Pair(
                SlotView::new(catalog, first),
                SlotView::new(catalog, second),
            ),
            (Some(first), None) => StageView::Single(SlotView::new(catalog, first)),
            (None, _) => StageView::Prompt,
        };

        let last_result = state.last_result.map(|last| {
            format!(
                "{} + {} = {}",
                catalog.name(last.recipe.first),
                catalog.name(last.recipe.second),
                catalog.name(last.result)
            )
        });

        let combine_sound = state
            .last_result
            .and(catalog.combine_sound())
            .map(str::to_owned);

        Self {
            menu,
            stage,
            last_result,
            combine_sound,
        }
    }
}

impl fmt::Display for SlotView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(model) = &self.model {
            write!(f, " [{model}]")?;
        }
        if let Some(sound) = &self.sound {
            write!(f, " ({sound})")?;
        }
        Ok(())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Elements")?;
        for entry in &self.menu {
            if entry.locked {
                writeln!(f, "  {:<16} locked", entry.label)?;
            } else {
                writeln!(f, "  {:<16} {}", entry.label, entry.marker.badge())?;
            }
        }

        match &self.stage {
            StageView::Prompt => writeln!(f, "{PROMPT}")?,
            StageView::Single(slot) => writeln!(f, "Selected: {slot}")?,
            StageView::Pair(first, second) => writeln!(f, "Selected: {first} + {second}")?,
        }

        if let Some(last) = &self.last_result {
            match &self.combine_sound {
                Some(sound) => writeln!(f, "Created: {last} ({sound})")?,
                None => writeln!(f, "Created: {last}")?,
            }
        }

        Ok(())
    }
}
