//! Theme palettes and randomized hover styling for headline words.
//!
//! The hover color is cosmetic and intentionally non-deterministic in the
//! browser; `HoverPicker::seeded` gives tests a fixed sequence.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const LIGHT_PALETTE: [&str; 6] = ["#F87171", "#FBBF24", "#34D399", "#60A5FA", "#A78BFA", "#F472B6"];
pub const DARK_PALETTE: [&str; 6] = ["#FBBF24", "#34D399", "#60A5FA", "#A78BFA", "#F472B6", "#F87171"];

pub const DARK_TEXT: &str = "#FFFFFF";
pub const LIGHT_TEXT: &str = "#111827";

/// Maximum hover rotation per axis, in degrees.
pub const HOVER_TILT_DEG: f64 = 15.0;

/// Hover color pool for the current theme.
#[must_use]
pub fn palette(dark: bool) -> &'static [&'static str] {
    if dark { &DARK_PALETTE } else { &LIGHT_PALETTE }
}

/// Resting text color for the current theme.
#[must_use]
pub fn base_text_color(dark: bool) -> &'static str {
    if dark { DARK_TEXT } else { LIGHT_TEXT }
}

/// Split a headline into independently hoverable words.
#[must_use]
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// Style applied to a hovered word.
#[derive(Clone, Debug, PartialEq)]
pub struct WordHover {
    pub color: &'static str,
    pub rotate_x: f64,
    pub rotate_y: f64,
}

/// Random source for hover styling.
#[derive(Clone, Debug)]
pub struct HoverPicker {
    rng: SmallRng,
}

impl HoverPicker {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }

    /// Seeded from the page clock in the browser.
    #[must_use]
    pub fn from_clock() -> Self {
        #[cfg(feature = "csr")]
        {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let seed = js_sys::Date::now() as u64;
            Self::seeded(seed)
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::seeded(0)
        }
    }

    /// A color from the current theme's palette.
    pub fn color(&mut self, dark: bool) -> &'static str {
        let pool = palette(dark);
        pool[self.rng.random_range(0..pool.len())]
    }

    /// Full hover style: palette color plus a small random 3D rotation.
    pub fn hover(&mut self, dark: bool) -> WordHover {
        let color = self.color(dark);
        let rotate_x = self.rng.random_range(-HOVER_TILT_DEG..HOVER_TILT_DEG);
        let rotate_y = self.rng.random_range(-HOVER_TILT_DEG..HOVER_TILT_DEG);
        WordHover { color, rotate_x, rotate_y }
    }
}
