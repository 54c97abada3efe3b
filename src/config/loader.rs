// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::model::OptionsFile;
use crate::config::validate::validate_options;

/// Load an options file from a given path and return the raw `OptionsFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (positive spacings, etc.). Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<OptionsFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading options file at {:?}", path))?;

    let options: OptionsFile = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML options from {:?}", path))?;

    Ok(options)
}

/// Load an options file from path and run basic validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - a known layout variant,
///   - positive geometry constants,
///   - in-range saturation/lightness.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<OptionsFile> {
    let options = load_from_path(&path)?;
    validate_options(&options)?;
    Ok(options)
}

/// Resolve options for a run: an explicit `--config` path must exist and
/// parse; with no explicit path, `Runlineage.toml` is used when present and
/// built-in defaults otherwise.
pub fn load_or_default(explicit: Option<&str>) -> Result<OptionsFile> {
    match explicit {
        Some(path) => load_and_validate(path),
        None => {
            let path = default_options_path();
            if path.is_file() {
                load_and_validate(&path)
            } else {
                debug!(?path, "no options file found; using defaults");
                Ok(OptionsFile::default())
            }
        }
    }
}

/// Helper to resolve the default options path.
///
/// Currently this just returns `Runlineage.toml` in the current working
/// directory, but this function exists so you can later:
///
/// - Respect an env var (e.g. `RUNLINEAGE_CONFIG`).
/// - Look for multiple default locations.
pub fn default_options_path() -> PathBuf {
    PathBuf::from("Runlineage.toml")
}
