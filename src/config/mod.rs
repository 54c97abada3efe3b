// src/config/mod.rs

//! Layout option loading and validation for runlineage.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load an options file from disk (`loader.rs`).
//! - Validate basic invariants like positive spacings (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_or_default};
pub use model::{LayoutSection, OptionsFile, PaletteSection};
pub use validate::validate_options;
