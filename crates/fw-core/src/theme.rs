//! Host theme colors
//!
//! The host platform hands the engine its theme palette; segment fills are
//! derived from the button color by parity (see fw-render).

use serde::{Deserialize, Serialize};

/// RGBA color in linear space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create color from hex string (e.g., "#3390ec" or "3390ec")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 && hex.len() != 8 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()? as f32 / 255.0;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()? as f32 / 255.0;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()? as f32 / 255.0;
        let a = if hex.len() == 8 {
            u8::from_str_radix(&hex[6..8], 16).ok()? as f32 / 255.0
        } else {
            1.0
        };

        Some(Self::new(r, g, b, a))
    }

    /// Blend with another color
    pub fn blend(self, other: Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Lighten the color
    pub fn lighten(self, amount: f32) -> Self {
        Self::new(
            (self.r + amount).min(1.0),
            (self.g + amount).min(1.0),
            (self.b + amount).min(1.0),
            self.a,
        )
    }

    /// Darken the color
    pub fn darken(self, amount: f32) -> Self {
        Self::new(
            (self.r - amount).max(0.0),
            (self.g - amount).max(0.0),
            (self.b - amount).max(0.0),
            self.a,
        )
    }
}

/// Theme palette supplied by the host platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub background: Color,
    pub text: Color,
    pub button: Color,
    pub button_text: Color,
}

impl Default for ThemeColors {
    /// Fallback palette used when the host provides no theme
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            text: Color::BLACK,
            // Host-blue accent (#3390ec)
            button: Color::new(0x33 as f32 / 255.0, 0x90 as f32 / 255.0, 0xec as f32 / 255.0, 1.0),
            button_text: Color::WHITE,
        }
    }
}
