use strum::{EnumCount, IntoEnumIterator};

use super::error::CatalogError;

/// Closed set of element identifiers.
///
/// Variant order is catalog order: menus list elements in this order and
/// [`crate::UnlockedSet`] iterates in it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ElementKind {
    Earth,
    Water,
    Fire,
    Sand,
    Mud,
    Glass,
    Steam,
    Stone,
    Plant,
    Energy,
}

impl ElementKind {
    /// Position of this element in catalog order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Iterates every element in catalog order.
    pub fn all() -> impl Iterator<Item = ElementKind> {
        Self::iter()
    }
}

/// Display data for a single element.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementDef {
    pub kind: ElementKind,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub glyph: Option<String>,
    /// Model asset shown when the element occupies a slot.
    #[cfg_attr(feature = "serde", serde(default))]
    pub model: Option<String>,
    /// Sound cue played when the element is selected.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sound: Option<String>,
}

impl ElementDef {
    pub fn new(kind: ElementKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            glyph: None,
            model: None,
            sound: None,
        }
    }

    #[must_use]
    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = Some(glyph.into());
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    /// Glyph followed by the name, or just the name.
    pub fn label(&self) -> String {
        match &self.glyph {
            Some(glyph) => format!("{glyph} {}", self.name),
            None => self.name.clone(),
        }
    }
}

/// Immutable catalog holding exactly one [`ElementDef`] per [`ElementKind`].
///
/// Definitions are stored in catalog order so lookups never fail once the
/// catalog has been constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementCatalog {
    elements: Vec<ElementDef>,
    fallback_model: Option<String>,
    combine_sound: Option<String>,
}

impl ElementCatalog {
    /// Builds a catalog from definitions in any order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateElement`] when an element is defined
    /// twice, [`CatalogError::MissingElement`] when one is not defined and
    /// [`CatalogError::DuplicateName`] when two elements share a name.
    pub fn new(
        definitions: impl IntoIterator<Item = ElementDef>,
        fallback_model: Option<String>,
    ) -> Result<Self, CatalogError> {
        let mut slots: Vec<Option<ElementDef>> = vec![None; ElementKind::COUNT];

        for def in definitions {
            let slot = &mut slots[def.kind.index()];
            if slot.is_some() {
                return Err(CatalogError::DuplicateElement(def.kind));
            }
            *slot = Some(def);
        }

        let elements = slots
            .into_iter()
            .zip(ElementKind::iter())
            .map(|(slot, kind)| slot.ok_or(CatalogError::MissingElement(kind)))
            .collect::<Result<Vec<_>, _>>()?;

        // `find` resolves names, so they must be unique
        for (index, def) in elements.iter().enumerate() {
            if let Some(earlier) = elements[..index]
                .iter()
                .find(|other| other.name.eq_ignore_ascii_case(&def.name))
            {
                return Err(CatalogError::DuplicateName {
                    name: def.name.clone(),
                    first: earlier.kind,
                    second: def.kind,
                });
            }
        }

        Ok(Self {
            elements,
            fallback_model,
            combine_sound: None,
        })
    }

    /// Built-in catalog shipped with the game.
    pub fn standard() -> Self {
        use ElementKind::*;

        let elements = vec![
            ElementDef::new(Earth, "Earth")
                .with_glyph("🌍")
                .with_model("Earth.usdz")
                .with_sound("Earth_Sound.mp3"),
            ElementDef::new(Water, "Water")
                .with_glyph("💧")
                .with_sound("Water_Sound.mp3"),
            ElementDef::new(Fire, "Fire")
                .with_glyph("🔥")
                .with_model("fire.usdz")
                .with_sound("Fire_Sound.mp3"),
            ElementDef::new(Sand, "Sand")
                .with_glyph("🏖️")
                .with_sound("Sand__Sound.mp3"),
            ElementDef::new(Mud, "Mud")
                .with_glyph("🟤")
                .with_sound("Mud_Sound.mp3"),
            ElementDef::new(Glass, "Glass")
                .with_glyph("🪟")
                .with_sound("glass-shatter-7-95202.mp3"),
            ElementDef::new(Steam, "Steam").with_glyph("♨️"),
            ElementDef::new(Stone, "Stone").with_glyph("🪨"),
            ElementDef::new(Plant, "Plant").with_glyph("🌱"),
            ElementDef::new(Energy, "Energy").with_glyph("🔋"),
        ];

        Self {
            elements,
            fallback_model: Some("fire.usdz".to_owned()),
            combine_sound: Some("ACombine_Sound.mp3".to_owned()),
        }
    }

    /// Sets the cue played when a combination succeeds.
    #[must_use]
    pub fn with_combine_sound(mut self, sound: impl Into<String>) -> Self {
        self.combine_sound = Some(sound.into());
        self
    }

    pub fn get(&self, kind: ElementKind) -> &ElementDef {
        &self.elements[kind.index()]
    }

    pub fn name(&self, kind: ElementKind) -> &str {
        &self.get(kind).name
    }

    /// Definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ElementDef> {
        self.elements.iter()
    }

    /// Case-insensitive lookup by identifier or display name.
    pub fn find(&self, query: &str) -> Option<ElementKind> {
        let query = query.trim();
        query.parse::<ElementKind>().ok().or_else(|| {
            self.elements
                .iter()
                .find(|def| def.name.eq_ignore_ascii_case(query))
                .map(|def| def.kind)
        })
    }

    /// Model asset for an element, falling back to the catalog default.
    pub fn model_asset(&self, kind: ElementKind) -> Option<&str> {
        self.get(kind)
            .model
            .as_deref()
            .or(self.fallback_model.as_deref())
    }

    /// Sound cue for an element. Elements without one stay silent.
    pub fn sound_asset(&self, kind: ElementKind) -> Option<&str> {
        self.get(kind).sound.as_deref()
    }

    pub fn combine_sound(&self) -> Option<&str> {
        self.combine_sound.as_deref()
    }
}

impl Default for ElementCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
