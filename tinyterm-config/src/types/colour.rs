//! RGB colour value stored by colour options.

use std::fmt;

/// An 8-bit-per-channel RGB colour.
///
/// Persisted as a decimal `R,G,B` triplet (see [`Colour::parse`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `R,G,B` triplet.
    ///
    /// Exactly three comma-separated unsigned integers in `0..=255` are
    /// required; surrounding whitespace around each component is tolerated.
    /// Any other shape yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split(',');
        let r = parse_component(parts.next()?)?;
        let g = parse_component(parts.next()?)?;
        let b = parse_component(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::rgb(r, g, b))
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

fn parse_component(text: &str) -> Option<u8> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
