//! Minimal RGBA color used by the formatter's color rendering hook.

use crate::numeric::format_magnitude;
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Color {
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Parse `#rgb` or `#rrggbb`.
    pub fn hex(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();

        match digits.len() {
            3 => {
                let mut expanded = String::with_capacity(6);
                for ch in digits.chars() {
                    expanded.push(ch);
                    expanded.push(ch);
                }
                Self::hex(&format!("#{}", expanded))
            }
            6 => Some(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => None,
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    pub fn to_rgb(&self) -> String {
        if self.is_opaque() {
            format!("rgb({},{},{})", self.red, self.green, self.blue)
        } else {
            format!(
                "rgba({},{},{},{})",
                self.red,
                self.green,
                self.blue,
                format_magnitude(self.alpha)
            )
        }
    }

    /// `#rrggbb`, or `#rrggbbaa` when translucent.
    pub fn to_hex(&self) -> String {
        let hex = format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue);
        if self.is_opaque() {
            hex
        } else {
            format!("{}{:02x}", hex, (self.alpha * 255.0).round() as u8)
        }
    }

    pub fn to_hsl(&self) -> String {
        let (hue, saturation, lightness) = self.hsl();

        if self.is_opaque() {
            format!("hsl({},{}%,{}%)", hue, saturation, lightness)
        } else {
            format!(
                "hsla({},{}%,{}%,{})",
                hue,
                saturation,
                lightness,
                format_magnitude(self.alpha)
            )
        }
    }

    /// Hue in degrees, saturation and lightness in percent, all rounded.
    pub fn hsl(&self) -> (i64, i64, i64) {
        let r = self.red as f64 / 255.0;
        let g = self.green as f64 / 255.0;
        let b = self.blue as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        if max == min {
            return (0, 0, (lightness * 100.0).round() as i64);
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        (
            (hue * 60.0).round() as i64 % 360,
            (saturation * 100.0).round() as i64,
            (lightness * 100.0).round() as i64,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hsl())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.red == other.red
            && self.green == other.green
            && self.blue == other.blue
            && self.alpha.to_bits() == other.alpha.to_bits()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.red, self.green, self.blue).hash(state);
        self.alpha.to_bits().hash(state);
    }
}
