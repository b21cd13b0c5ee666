use std::fs;
use std::path::PathBuf;

use alchemy_content::{Content, ContentFactory};
use alchemy_core::ElementKind;

fn shipped_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data")
}

#[test]
fn shipped_data_matches_builtin_content() {
    let content = ContentFactory::new(shipped_data_dir()).load_all().unwrap();
    assert_eq!(content, Content::builtin());
}

#[test]
fn shipped_catalog_names_sound_cues() {
    let content = ContentFactory::new(shipped_data_dir()).load_all().unwrap();
    let builtin = Content::builtin();

    for def in builtin.catalog.iter() {
        assert_eq!(
            content.catalog.sound_asset(def.kind),
            def.sound.as_deref(),
            "sound for {}",
            def.kind
        );
    }
    assert_eq!(content.catalog.combine_sound(), Some("ACombine_Sound.mp3"));
    assert_eq!(content.catalog.sound_asset(ElementKind::Energy), None);
}

#[test]
fn loads_custom_directory() {
    let dir = tempfile::tempdir().unwrap();
    let shipped = shipped_data_dir();

    fs::copy(shipped.join("elements.ron"), dir.path().join("elements.ron")).unwrap();
    fs::write(
        dir.path().join("config.toml"),
        r#"initial_unlocked = ["fire", "water"]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("recipes.ron"),
        "(recipes: [(a: water, b: fire, result: steam)])",
    )
    .unwrap();

    let content = ContentFactory::new(dir.path()).load_all().unwrap();
    let state = content.new_state();

    assert_eq!(state.unlocked.len(), 2);
    assert_eq!(content.rules.len(), 1);
}

#[test]
fn conflicting_recipe_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let shipped = shipped_data_dir();

    fs::copy(shipped.join("elements.ron"), dir.path().join("elements.ron")).unwrap();
    fs::copy(shipped.join("config.toml"), dir.path().join("config.toml")).unwrap();
    fs::write(
        dir.path().join("recipes.ron"),
        "(recipes: [
            (a: fire, b: water, result: steam),
            (a: water, b: fire, result: energy),
        ])",
    )
    .unwrap();

    let err = ContentFactory::new(dir.path()).load_all().unwrap_err();
    assert!(err.to_string().contains("Invalid recipe table"));
}
