// src/config/model.rs

use serde::Deserialize;

/// Top-level layout options as read from a TOML file.
///
/// This maps files like:
///
/// ```toml
/// [layout]
/// variant = "boxes"
/// spacing_x = 3.0
///
/// [palette]
/// saturation = 65.0
/// ```
///
/// All sections are optional and have defaults matching the dashboard's
/// built-in rendering constants.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OptionsFile {
    /// Geometry and strategy options from `[layout]`.
    #[serde(default)]
    pub layout: LayoutSection,

    /// Color generation options from `[palette]`.
    #[serde(default)]
    pub palette: PaletteSection,
}

/// `[layout]` section.
///
/// The geometric constants only affect the box/grouping variant; the tree
/// variant is pure topology and ignores them.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutSection {
    /// `"tree"` or `"boxes"`.
    ///
    /// - `"tree"` (default): emit parent pointers only.
    /// - `"boxes"`: additionally emit column positions and per-task boxes.
    #[serde(default = "default_variant")]
    pub variant: String,

    /// Horizontal distance between adjacent columns.
    #[serde(default = "default_spacing_x")]
    pub spacing_x: f64,

    /// Vertical distance between adjacent nodes within a column.
    #[serde(default = "default_spacing_y")]
    pub spacing_y: f64,

    /// Vertical gap between stacked task components.
    #[serde(default = "default_separation_y")]
    pub separation_y: f64,

    /// Horizontal padding around each task's bounding box.
    #[serde(default = "default_pad_x")]
    pub pad_x: f64,

    /// Vertical padding around each task's bounding box.
    #[serde(default = "default_pad_y")]
    pub pad_y: f64,

    /// Two box labels conflict when both axis distances are below these
    /// thresholds.
    #[serde(default = "default_label_threshold_x")]
    pub label_threshold_x: f64,

    #[serde(default = "default_label_threshold_y")]
    pub label_threshold_y: f64,

    /// Downward shift applied to a label on each conflict.
    #[serde(default = "default_label_shift_y")]
    pub label_shift_y: f64,

    /// Maximum label nudge attempts before accepting an overlap.
    #[serde(default = "default_label_attempts")]
    pub label_attempts: usize,
}

fn default_variant() -> String {
    "tree".to_string()
}

fn default_spacing_x() -> f64 {
    3.0
}

fn default_spacing_y() -> f64 {
    1.5
}

fn default_separation_y() -> f64 {
    1.5
}

fn default_pad_x() -> f64 {
    0.7
}

fn default_pad_y() -> f64 {
    0.6
}

fn default_label_threshold_x() -> f64 {
    1.0
}

fn default_label_threshold_y() -> f64 {
    0.1
}

fn default_label_shift_y() -> f64 {
    0.35
}

fn default_label_attempts() -> usize {
    50
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            variant: default_variant(),
            spacing_x: default_spacing_x(),
            spacing_y: default_spacing_y(),
            separation_y: default_separation_y(),
            pad_x: default_pad_x(),
            pad_y: default_pad_y(),
            label_threshold_x: default_label_threshold_x(),
            label_threshold_y: default_label_threshold_y(),
            label_shift_y: default_label_shift_y(),
            label_attempts: default_label_attempts(),
        }
    }
}

/// `[palette]` section.
///
/// Hue spacing is fixed by the palette formula; only saturation and
/// lightness are tunable. Consumers recomputing colors must use the same
/// values to stay bit-for-bit compatible with the emitted palette.
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteSection {
    /// HSL saturation in percent (0..=100).
    #[serde(default = "default_saturation")]
    pub saturation: f64,

    /// HSL lightness in percent (0..=100).
    #[serde(default = "default_lightness")]
    pub lightness: f64,
}

fn default_saturation() -> f64 {
    65.0
}

fn default_lightness() -> f64 {
    50.0
}

impl Default for PaletteSection {
    fn default() -> Self {
        Self {
            saturation: default_saturation(),
            lightness: default_lightness(),
        }
    }
}
