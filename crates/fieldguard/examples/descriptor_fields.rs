//! Validated fields on a plain struct.
//!
//! Run with `RUST_LOG=fieldguard=trace cargo run -p fieldguard --example descriptor_fields`
//! to see accepted and rejected writes logged.

use std::path::Path;
use std::sync::LazyLock;

use fieldguard::prelude::*;
use tracing_subscriber::EnvFilter;

static MATERIAL: LazyLock<FieldRule<OneOf>> =
    LazyLock::new(|| FieldRule::new("material", one_of(["wood", "metal", "plastic"])));

static LEVEL: LazyLock<FieldRule<NumberRange>> =
    LazyLock::new(|| FieldRule::new("level", number_range(-100, 100)));

static LABEL: LazyLock<FieldRule<StringShape>> = LazyLock::new(|| {
    FieldRule::new(
        "label",
        string_shape()
            .min_length(2)
            .max_length(10)
            .predicate_named("is_lowercase", |s: &str| !s.chars().any(char::is_uppercase)),
    )
});

static MANIFEST: LazyLock<FieldRule<PathShape>> = LazyLock::new(|| {
    FieldRule::new(
        "manifest",
        path_shape([".toml"]).predicate_named("is_file", Path::is_file),
    )
});

#[derive(Debug)]
struct Part {
    material: ValidatedField<OneOf>,
    level: ValidatedField<NumberRange>,
    label: ValidatedField<StringShape>,
    manifest: ValidatedField<PathShape>,
}

impl Part {
    fn new(
        material: impl Into<Value>,
        level: impl Into<Value>,
        label: impl Into<Value>,
        manifest: impl Into<Value>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let material = errors.record(MATERIAL.init(material));
        let level = errors.record(LEVEL.init(level));
        let label = errors.record(LABEL.init(label));
        let manifest = errors.record(MANIFEST.init(manifest));

        match (material, level, label, manifest) {
            (Some(material), Some(level), Some(label), Some(manifest)) => Ok(Self {
                material,
                level,
                label,
                manifest,
            }),
            _ => Err(errors),
        }
    }
}

fn show(what: &str, result: Result<(), ValidationError>) {
    match result {
        Ok(()) => println!("  {what}: ok"),
        Err(e) => println!("  {what}: {e}"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");

    println!("=== construction ===");
    let mut part = match Part::new("wood", 42, "bracket", manifest.as_path()) {
        Ok(part) => part,
        Err(errors) => {
            println!("{errors}");
            return;
        }
    };
    println!("{part:#?}");

    println!("\n=== rejected construction ===");
    if let Err(errors) = Part::new("paper", 500, "Bracket", "missing.toml") {
        for error in errors.errors() {
            println!("  {error}");
        }
    }

    println!("\n=== writes ===");
    show("material = metal", part.material.set("metal"));
    show("material = glass", part.material.set("glass"));
    show("level = -100", part.level.set(-100));
    show("level = 100.5", part.level.set(100.5));
    show("level = \"7\"", part.level.set("7"));
    show("label = x", part.label.set("x"));
    show("label = SHELF", part.label.set("SHELF"));
    show("manifest = src", part.manifest.set(Path::new(env!("CARGO_MANIFEST_DIR")).join("src")));

    println!("\n=== final values ===");
    println!("  material = {:?}", part.material.get());
    println!("  level    = {:?}", part.level.get());
    println!("  label    = {:?}", part.label.get());
    println!("  manifest = {:?}", part.manifest.get());

    #[cfg(feature = "serde")]
    {
        println!("\n=== json ===");
        if let Err(e) = part.level.set(1_000) {
            println!("  {}", e.to_json_value());
        }
    }
}
