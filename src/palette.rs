// src/palette.rs

//! Deterministic per-task color palette.
//!
//! One color per contributing task, hues spaced evenly around the wheel at
//! fixed saturation and lightness. The formula is part of the output
//! contract: a renderer recomputing colors instead of reading the emitted
//! palette must land on the same bytes, or task coloring drifts between
//! build and render.

/// Generate `count` hex colors.
///
/// Color `i` has hue `(i * 360 / count) mod 360` degrees; saturation and
/// lightness are percentages (0..=100).
pub fn generate(count: usize, saturation: f64, lightness: f64) -> Vec<String> {
    (0..count)
        .map(|i| {
            let hue = (i as f64 * 360.0 / count as f64) % 360.0;
            let (r, g, b) = hsl_to_rgb(hue, saturation / 100.0, lightness / 100.0);
            format!("#{r:02x}{g:02x}{b:02x}")
        })
        .collect()
}

/// Standard HSL to RGB transform.
///
/// `h` in degrees `[0, 360)`, `s` and `l` in `[0, 1]`.
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = l - c / 2.0;
    (channel(r1 + m), channel(g1 + m), channel(b1 + m))
}

fn channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
