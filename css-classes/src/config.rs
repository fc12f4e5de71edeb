//! Generator configuration.
//!
//! Can be read from a standalone toml file, or from the metadata section of
//! the project manifest:
//! ```toml
//! [package.metadata.css-classes]
//! output-path = "src/css_classes.rs"
//! strict = true
//! line-ending = "lf"
//! # appended after default replacements
//! extend-replace = [["\\+", "_plus_"], ["%", "_pct"]]
//! ```
//!
//! `replace` has the same format as `extend-replace`, but replaces the
//! default table completely. Pairs are applied in the written order.
//!
//! Replacement text can reference pattern groups with `$1` or `$name`.
//! An unbraced reference takes every following letter, digit and `_`,
//! so `$1_x` means group `1_x`. Write `${1}_x` instead, and `$$` for a literal `$`.
//! References to missing groups expand to nothing and are reported with `warn!`.

use std::path::{Path, PathBuf};

use css_classes_core::{LineEnding, ReplacementTable};

use crate::{Error, Result};

/// Name of the section in `[package.metadata]`.
pub const METADATA_KEY: &str = "css-classes";
pub const DEFAULT_OUTPUT_PATH: &str = "src/css_classes.rs";

const KNOWN_KEYS: &[&str] = &[
    "replace",
    "extend-replace",
    "output-path",
    "strict",
    "line-ending",
];

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub replace: ReplacementTable,
    /// Where the caller should save generated module.
    pub output_path: PathBuf,
    /// Fail on duplicate or invalid field names instead of leaving it to rustc.
    pub strict: bool,
    pub line_ending: LineEnding,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            replace: ReplacementTable::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            strict: false,
            line_ending: LineEnding::Native,
        }
    }
}

impl GeneratorConfig {
    /// Read config from standalone toml, keys are at the top level.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content)?;
        Self::from_table(&table, None)
    }

    /// Read config from `[package.metadata.css-classes]` of manifest content.
    /// Returns default config if section is missing.
    pub fn from_manifest_str(content: &str) -> Result<Self> {
        let manifest: toml::Table = toml::from_str(content)?;
        Self::from_manifest(&manifest, None)
    }

    /// Same as [`Self::from_manifest_str`], but `output-path` is resolved
    /// relative to the manifest directory.
    pub fn from_manifest_path(manifest_path: impl AsRef<Path>) -> Result<Self> {
        let manifest_path = manifest_path.as_ref();
        log::debug!("Reading manifest file: {}", manifest_path.display());
        let content = std::fs::read_to_string(manifest_path)?;
        let manifest: toml::Table = toml::from_str(&content)?;
        Self::from_manifest(&manifest, manifest_path.parent())
    }

    /// Read config from package `metadata`, as returned by `cargo metadata`.
    pub fn from_metadata(
        metadata: &serde_json::Value,
        manifest_root: impl AsRef<Path>,
    ) -> Result<Self> {
        let root = Some(manifest_root.as_ref());
        let Some(section) = metadata.get(METADATA_KEY) else {
            return Self::from_table(&toml::Table::new(), root);
        };
        let section: toml::Table = serde_json::from_value(section.clone())
            .map_err(|e| Error::InvalidConfig(format!("`{METADATA_KEY}` metadata: {e}")))?;
        Self::from_table(&section, root)
    }

    fn from_manifest(manifest: &toml::Table, root: Option<&Path>) -> Result<Self> {
        let section = manifest
            .get("package")
            .and_then(|p| p.get("metadata"))
            .and_then(|m| m.get(METADATA_KEY));
        match section {
            Some(toml::Value::Table(section)) => Self::from_table(section, root),
            Some(_) => Err(invalid(METADATA_KEY, "a table")),
            None => Self::from_table(&toml::Table::new(), root),
        }
    }

    fn from_table(table: &toml::Table, root: Option<&Path>) -> Result<Self> {
        for key in table.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                log::warn!("Unknown {METADATA_KEY} config key `{key}`");
            }
        }

        let mut config = Self::default();
        if let Some(replace) = table.get("replace") {
            config.replace = ReplacementTable::from_pairs(read_pairs(replace, "replace")?)?;
        }
        if let Some(extend) = table.get("extend-replace") {
            for (pattern, replacement) in read_pairs(extend, "extend-replace")? {
                config.replace.push(&pattern, replacement)?;
            }
        }
        if let Some(output_path) = table.get("output-path") {
            let output_path = output_path
                .as_str()
                .ok_or_else(|| invalid("output-path", "a string"))?;
            config.output_path = PathBuf::from(output_path);
        }
        if let Some(root) = root {
            config.output_path = root.join(&config.output_path);
        }
        if let Some(strict) = table.get("strict") {
            config.strict = strict.as_bool().ok_or_else(|| invalid("strict", "a boolean"))?;
        }
        if let Some(line_ending) = table.get("line-ending") {
            config.line_ending = line_ending
                .as_str()
                .ok_or_else(|| invalid("line-ending", "a string"))?
                .parse()?;
        }
        Ok(config)
    }
}

fn read_pairs(value: &toml::Value, key: &str) -> Result<Vec<(String, String)>> {
    const EXPECTED: &str = "an array of [pattern, replacement] pairs";
    let pairs = value.as_array().ok_or_else(|| invalid(key, EXPECTED))?;
    pairs
        .iter()
        .map(|pair| match pair.as_array().map(Vec::as_slice) {
            Some([toml::Value::String(pattern), toml::Value::String(replacement)]) => {
                Ok((pattern.clone(), replacement.clone()))
            }
            _ => Err(invalid(key, EXPECTED)),
        })
        .collect()
}

fn invalid(key: &str, expected: &str) -> Error {
    Error::InvalidConfig(format!("`{key}` should be {expected}"))
}
