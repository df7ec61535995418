//! Color brightness adjustment for theme settings.
//!
//! Theme colors arrive as free-form setting strings. Two shapes are understood,
//! `rgb(R, G, B)` and six-digit hex with an optional `#`. Anything else passes
//! through untouched so a bad setting never breaks stylesheet generation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
static RGB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\((\d+),\s*(\d+),\s*(\d+)\)$").expect("rgb pattern is valid")
});

#[allow(clippy::expect_used)]
static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#?([a-f0-9]{6})$").expect("hex pattern is valid"));

/// Textual form a color was written in. Adjusted colors keep their form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    Hex,
    Rgb,
}

/// A parsed color setting.
///
/// Channels hold the raw component values; `rgb()` input may exceed 255 and is
/// only clamped when the color is written out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub format: ColorFormat,
}

impl Color {
    /// Parse a color setting, returning `None` for unsupported shapes.
    pub fn parse(input: &str) -> Option<Self> {
        if let Some(caps) = RGB_PATTERN.captures(input) {
            let channel = |i: usize| -> Option<f64> { caps.get(i)?.as_str().parse().ok() };
            return Some(Self {
                red: channel(1)?,
                green: channel(2)?,
                blue: channel(3)?,
                format: ColorFormat::Rgb,
            });
        }

        let caps = HEX_PATTERN.captures(input)?;
        let hex = caps.get(1)?.as_str();
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).ok().map(f64::from)
        };
        Some(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
            format: ColorFormat::Hex,
        })
    }

    /// Scale every channel by `percent` (negative darkens).
    pub fn adjusted(self, percent: f64) -> Self {
        Self {
            red: scale_channel(self.red, percent),
            green: scale_channel(self.green, percent),
            blue: scale_channel(self.blue, percent),
            format: self.format,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = (to_byte(self.red), to_byte(self.green), to_byte(self.blue));
        match self.format {
            ColorFormat::Hex => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            ColorFormat::Rgb => write!(f, "rgb({r}, {g}, {b})"),
        }
    }
}

fn scale_channel(value: f64, percent: f64) -> f64 {
    value + value * percent / 100.0
}

/// Both output forms round to the nearest integer so hex and rgb agree.
fn to_byte(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Lighten or darken a color setting by `percent`.
///
/// Unrecognized input is returned unchanged.
pub fn adjust_brightness(color: &str, percent: f64) -> String {
    match Color::parse(color) {
        Some(parsed) => parsed.adjusted(percent).to_string(),
        None => color.to_string(),
    }
}
