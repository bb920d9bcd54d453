//! Integration tests for the pack generation pipeline.
//!
//! These tests exercise the complete flow over a real temporary pack root:
//! - template read → derived generation → external imports → post-process → write
//! - merge semantics across multiple import sources
//! - recoverable import failures and fatal write failures
//!
//! Run with: `cargo test --test generator_integration`

use std::fs::{self, File};
use std::io::Write as _;
use std::path::Path;

use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use packmill::generator::{GenerateStage, PackGenerator};
use packmill::io::read_pack_zip;
use packmill::postprocess::{SCOREBOARD_NUMBERS_JSON_PATH, SCOREBOARD_NUMBERS_VSH_PATH};
use packmill::registry::{Glyph, NoItemAssets, StaticGlyphRegistry};
use packmill::settings::PackSettings;
use packmill::ResourceKey;

// ============================================================================
// Helper Functions
// ============================================================================

fn key(s: &str) -> ResourceKey {
    s.parse().unwrap()
}

/// Initialize log capture once; later calls are no-ops.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Write a file below `root`, creating parent directories.
fn write_file(root: &Path, rel: &str, bytes: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, bytes).unwrap();
}

/// Build a zip pack at `path` from (entry name, bytes) pairs.
fn write_zip_pack(path: &Path, entries: &[(&str, &[u8])]) {
    let mut writer = ZipWriter::new(File::create(path).unwrap());
    for (name, bytes) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(bytes).unwrap();
    }
    writer.finish().unwrap();
}

/// A minimal valid template: metadata, one model with an override, one
/// language file, one texture, and one loose text file.
fn seed_template(root: &Path) {
    write_file(
        root,
        "pack.mcmeta",
        br#"{"pack":{"pack_format":34,"description":"packmill test"}}"#,
    );
    write_file(
        root,
        "assets/minecraft/models/item/sword.json",
        br#"{"parent":"item/handheld","overrides":[{"predicate":{"custom_model_data":1},"model":"base:o1"}]}"#,
    );
    write_file(
        root,
        "assets/minecraft/lang/en_us.json",
        br#"{"a":"1","only.base":"kept"}"#,
    );
    write_file(root, "assets/minecraft/textures/item/sword.png", &[1, 1, 1]);
    write_file(root, "credits.txt", b"template credits");
}

fn glyph_registry() -> StaticGlyphRegistry {
    StaticGlyphRegistry {
        glyphs: vec![Glyph {
            font: key("packmill:default"),
            chars: "\u{E001}".to_string(),
            texture: "packmill:font/coin.png".to_string(),
            height: 8,
            ascent: 8,
            shared_bitmap: None,
        }],
        glyph_bitmaps: Vec::new(),
    }
}

// ============================================================================
// Integration Tests
// ============================================================================

/// A full run over a template with a directory import, a zip import and a
/// stray file produces a coherent artifact.
#[test]
fn test_full_generation_run() {
    init_tracing();
    let temp = TempDir::new().unwrap();
    seed_template(temp.path());

    let settings = PackSettings::default()
        .with_hide_scoreboard_numbers(true)
        .with_excluded_file_extensions(vec![".txt".to_string()]);
    let mut generator = PackGenerator::new(temp.path(), settings).unwrap();

    // Directory import: adds an override to the template model and overrides
    // a shared translation id.
    let import_dir = temp.path().join("external_packs/a_mod");
    write_file(
        &import_dir,
        "assets/minecraft/models/item/sword.json",
        br#"{"overrides":[{"predicate":{"custom_model_data":2},"model":"a_mod:o2"}]}"#,
    );
    write_file(
        &import_dir,
        "assets/minecraft/lang/en_us.json",
        br#"{"a":"2","b":"3"}"#,
    );

    // Zip import: overwrites the template texture.
    write_zip_pack(
        &temp.path().join("external_packs/b_pack.zip"),
        &[("assets/minecraft/textures/item/sword.png", &[9, 9, 9])],
    );

    // Stray file: neither a directory nor a zip; skipped, not fatal.
    write_file(temp.path(), "external_packs/readme.md", b"not a pack");

    let result = generator.generate(&glyph_registry(), &NoItemAssets).unwrap();
    assert_eq!(generator.stage(), GenerateStage::Built);
    assert_eq!(result.imports_merged, 2);
    assert_eq!(result.imports_skipped, 1);

    // Inspect the artifact the way a client would receive it.
    let written = read_pack_zip(&temp.path().join("pack.zip")).unwrap();

    // Model: import override first, base override appended.
    let model = &written.models[&key("item/sword")];
    let override_models: Vec<_> = model.overrides.iter().map(|o| o.model.as_str()).collect();
    assert_eq!(override_models, ["a_mod:o2", "base:o1"]);

    // Language: import wins per id, base-only ids survive.
    let lang = &written.languages[&key("en_us")];
    assert_eq!(lang.translations["a"], serde_json::json!("2"));
    assert_eq!(lang.translations["b"], serde_json::json!("3"));
    assert_eq!(lang.translations["only.base"], serde_json::json!("kept"));

    // Texture: last writer wins.
    assert_eq!(written.textures[&key("item/sword.png")], vec![9, 9, 9]);

    // Derived font from the glyph registry.
    assert!(written.fonts.contains_key(&key("packmill:default")));

    // Cosmetic injection.
    assert!(written.unknown_files.contains_key(SCOREBOARD_NUMBERS_JSON_PATH));
    assert!(written.unknown_files.contains_key(SCOREBOARD_NUMBERS_VSH_PATH));

    // Staging exclusion: nothing under external_packs/ reaches the artifact.
    assert!(!written
        .unknown_files
        .keys()
        .any(|path| path.starts_with("external_packs/")));

    // Excluded extension: the loose .txt file is gone.
    assert!(!written.unknown_files.contains_key("credits.txt"));

    // The in-memory handle matches the on-disk artifact.
    let built = generator.built_pack().unwrap();
    assert_eq!(built.bytes(), fs::read(temp.path().join("pack.zip")).unwrap());
}

/// Imports are merged in lexicographic name order; later imports stack their
/// contributions over earlier ones.
#[test]
fn test_import_order_is_deterministic() {
    init_tracing();
    let temp = TempDir::new().unwrap();
    seed_template(temp.path());
    let mut generator = PackGenerator::new(temp.path(), PackSettings::default()).unwrap();

    for (dir, model) in [("01_first", "first:o"), ("02_second", "second:o")] {
        write_file(
            &temp.path().join("external_packs").join(dir),
            "assets/minecraft/models/item/sword.json",
            format!(
                r#"{{"overrides":[{{"predicate":{{"custom_model_data":9}},"model":"{}"}}]}}"#,
                model
            )
            .as_bytes(),
        );
    }

    generator
        .generate(&StaticGlyphRegistry::default(), &NoItemAssets)
        .unwrap();

    let written = read_pack_zip(&temp.path().join("pack.zip")).unwrap();
    let model = &written.models[&key("item/sword")];
    let override_models: Vec<_> = model.overrides.iter().map(|o| o.model.as_str()).collect();
    assert_eq!(override_models, ["second:o", "first:o", "base:o1"]);
}

/// An unreadable import is skipped with a warning; the run still succeeds.
#[test]
fn test_malformed_import_is_skipped() {
    init_tracing();
    let temp = TempDir::new().unwrap();
    seed_template(temp.path());
    let mut generator = PackGenerator::new(temp.path(), PackSettings::default()).unwrap();

    // A file with a .zip name that is not a zip archive.
    write_file(temp.path(), "external_packs/broken.zip", b"not really a zip");
    // A directory with a malformed structural file.
    write_file(
        &temp.path().join("external_packs/bad_dir"),
        "assets/minecraft/models/item/x.json",
        b"{ not json",
    );

    let result = generator
        .generate(&StaticGlyphRegistry::default(), &NoItemAssets)
        .unwrap();

    assert_eq!(generator.stage(), GenerateStage::Built);
    assert_eq!(result.imports_merged, 0);
    assert_eq!(result.imports_skipped, 2);
    assert!(temp.path().join("pack.zip").exists());
}

/// A failed write leaves the previous built pack available and reports
/// Failed; no partial artifact is accepted as success.
#[test]
fn test_failed_write_preserves_previous_build() {
    init_tracing();
    let temp = TempDir::new().unwrap();
    seed_template(temp.path());
    let mut generator = PackGenerator::new(temp.path(), PackSettings::default()).unwrap();
    let registry = StaticGlyphRegistry::default();

    generator.generate(&registry, &NoItemAssets).unwrap();
    let previous_hash = generator.built_pack().unwrap().hash().to_string();

    // Make the artifact path unwritable: a directory cannot be renamed over.
    fs::remove_file(temp.path().join("pack.zip")).unwrap();
    fs::create_dir(temp.path().join("pack.zip")).unwrap();

    let result = generator.generate(&registry, &NoItemAssets);
    assert!(result.is_err());
    assert_eq!(generator.stage(), GenerateStage::Failed);

    // The previous handle is untouched.
    assert_eq!(generator.built_pack().unwrap().hash(), previous_hash);
    // No temp file left behind.
    assert!(!temp.path().join("pack.zip.tmp").exists());
}

/// Two runs over unchanged inputs produce byte-identical artifacts.
#[test]
fn test_rebuild_is_reproducible() {
    init_tracing();
    let temp = TempDir::new().unwrap();
    seed_template(temp.path());
    let mut generator = PackGenerator::new(temp.path(), PackSettings::default()).unwrap();
    let registry = glyph_registry();

    generator.generate(&registry, &NoItemAssets).unwrap();
    let first = generator.built_pack().unwrap().bytes().to_vec();

    generator.generate(&registry, &NoItemAssets).unwrap();
    let second = generator.built_pack().unwrap().bytes().to_vec();

    assert_eq!(first, second);
}
