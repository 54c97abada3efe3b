// src/config/validate.rs

use anyhow::{Context, Result, anyhow};

use crate::config::model::OptionsFile;
use crate::layout::LayoutVariant;

/// Run basic semantic validation against loaded options.
///
/// This checks:
/// - `variant` is valid ("tree" or "boxes")
/// - geometry constants are positive and finite
/// - saturation/lightness are within 0..=100
/// - `label_attempts >= 1`
pub fn validate_options(options: &OptionsFile) -> Result<()> {
    validate_variant(options)?;
    validate_geometry(options)?;
    validate_palette(options)?;
    Ok(())
}

fn validate_variant(options: &OptionsFile) -> Result<()> {
    LayoutVariant::from_str(&options.layout.variant)
        .map_err(|e| anyhow!(e))
        .context("invalid [layout].variant")?;
    Ok(())
}

fn validate_geometry(options: &OptionsFile) -> Result<()> {
    let layout = &options.layout;
    let positive = [
        ("spacing_x", layout.spacing_x),
        ("spacing_y", layout.spacing_y),
        ("separation_y", layout.separation_y),
        ("pad_x", layout.pad_x),
        ("pad_y", layout.pad_y),
        ("label_threshold_x", layout.label_threshold_x),
        ("label_threshold_y", layout.label_threshold_y),
        ("label_shift_y", layout.label_shift_y),
    ];

    for (name, value) in positive {
        if !value.is_finite() || value <= 0.0 {
            return Err(anyhow!(
                "[layout].{} must be a positive number (got {})",
                name,
                value
            ));
        }
    }

    if layout.label_attempts == 0 {
        return Err(anyhow!("[layout].label_attempts must be >= 1 (got 0)"));
    }

    Ok(())
}

fn validate_palette(options: &OptionsFile) -> Result<()> {
    let palette = &options.palette;
    for (name, value) in [
        ("saturation", palette.saturation),
        ("lightness", palette.lightness),
    ] {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(anyhow!(
                "[palette].{} must be within 0..=100 (got {})",
                name,
                value
            ));
        }
    }
    Ok(())
}

// Add a small helper so we can use `LayoutVariant::from_str` without
// importing `std::str::FromStr` at the call sites.
trait FromStrExt: Sized {
    fn from_str(s: &str) -> Result<Self, String>;
}

impl FromStrExt for LayoutVariant {
    fn from_str(s: &str) -> Result<Self, String> {
        std::str::FromStr::from_str(s)
    }
}
