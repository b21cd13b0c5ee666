//! Element catalog loader.

use std::path::Path;

use alchemy_core::{ElementCatalog, ElementDef};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Element catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementCatalogRon {
    /// Model asset used by elements that do not name their own.
    #[serde(default)]
    pub fallback_model: Option<String>,
    /// Cue played when a combination succeeds.
    #[serde(default)]
    pub combine_sound: Option<String>,
    pub elements: Vec<ElementDef>,
}

/// Loader for the element catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load the element catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ElementCatalogRon
    pub fn load(path: &Path) -> LoadResult<ElementCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<ElementCatalog> {
        let data: ElementCatalogRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse element catalog RON: {}", e))?;

        let catalog = ElementCatalog::new(data.elements, data.fallback_model)
            .map_err(|e| anyhow::anyhow!("Invalid element catalog: {}", e))?;

        Ok(match data.combine_sound {
            Some(sound) => catalog.with_combine_sound(sound),
            None => catalog,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alchemy_core::ElementKind;

    fn full_catalog_ron(extra: &str) -> String {
        let mut elements: Vec<String> = ElementKind::all()
            .map(|kind| format!("(kind: {kind}, name: \"{kind}\")"))
            .collect();
        if !extra.is_empty() {
            elements.push(extra.to_owned());
        }
        format!(
            "(fallback_model: Some(\"fire.usdz\"), elements: [{}])",
            elements.join(", ")
        )
    }

    #[test]
    fn parses_minimal_definitions() {
        let catalog = CatalogLoader::parse(&full_catalog_ron("")).unwrap();
        assert_eq!(catalog.name(ElementKind::Steam), "steam");
        assert_eq!(catalog.get(ElementKind::Steam).glyph, None);
        assert_eq!(catalog.model_asset(ElementKind::Steam), Some("fire.usdz"));
        assert_eq!(catalog.sound_asset(ElementKind::Steam), None);
        assert_eq!(catalog.combine_sound(), None);
    }

    #[test]
    fn parses_sound_cues() {
        let ron = "(combine_sound: Some(\"combine.mp3\"), elements: [".to_owned()
            + &ElementKind::all()
                .map(|kind| format!("(kind: {kind}, name: \"{kind}\", sound: Some(\"{kind}.mp3\"))"))
                .collect::<Vec<_>>()
                .join(", ")
            + "])";

        let catalog = CatalogLoader::parse(&ron).unwrap();
        assert_eq!(catalog.sound_asset(ElementKind::Sand), Some("sand.mp3"));
        assert_eq!(catalog.combine_sound(), Some("combine.mp3"));
    }

    #[test]
    fn rejects_shared_display_name() {
        let ron = full_catalog_ron("").replace("name: \"plant\"", "name: \"Mud\"");
        let err = CatalogLoader::parse(&ron).unwrap_err();
        assert!(err.to_string().contains("are both named 'Mud'"));
    }

    #[test]
    fn rejects_duplicate_element() {
        let err = CatalogLoader::parse(&full_catalog_ron("(kind: mud, name: \"Mud\")")).unwrap_err();
        assert!(err.to_string().contains("Invalid element catalog"));
    }

    #[test]
    fn rejects_incomplete_catalog() {
        let err = CatalogLoader::parse("(elements: [(kind: earth, name: \"Earth\")])").unwrap_err();
        assert!(err.to_string().contains("has no definition"));
    }
}
