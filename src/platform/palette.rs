//! Host colour detection for legacy `UseSystemColours` rc files.
//!
//! Terminals in the rxvt/xterm family export `COLORFGBG` as `fg;bg` (or
//! `fg;default;bg`), where each field is an index into the 16-colour ANSI
//! palette. When the variable is missing or unusable the built-in colours
//! are used instead.

use tinyterm_config::defaults;
use tinyterm_config::{Colour, SystemPalette};

/// Environment variable holding the host's foreground/background indices.
pub const COLORFGBG: &str = "COLORFGBG";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostPalette {
    foreground: Colour,
    background: Colour,
}

impl Default for HostPalette {
    fn default() -> Self {
        Self {
            foreground: defaults::foreground_colour(),
            background: defaults::background_colour(),
        }
    }
}

impl HostPalette {
    /// Palette read from the current process environment.
    pub fn from_env() -> Self {
        match std::env::var(COLORFGBG) {
            Ok(value) => Self::from_colorfgbg(&value),
            Err(_) => Self::default(),
        }
    }

    /// Palette from a `COLORFGBG` value. Fields that are not valid ANSI
    /// indices fall back to the built-in colour.
    pub fn from_colorfgbg(value: &str) -> Self {
        let mut palette = Self::default();
        let fields: Vec<&str> = value.split(';').map(str::trim).collect();
        if fields.len() < 2 {
            log::debug!("Ignoring malformed {COLORFGBG} {value:?}");
            return palette;
        }

        if let Some(colour) = fields.first().and_then(|f| ansi_colour(f)) {
            palette.foreground = colour;
        }
        if let Some(colour) = fields.last().and_then(|f| ansi_colour(f)) {
            palette.background = colour;
        }
        log::debug!(
            "Host palette from {COLORFGBG}={value:?}: foreground {}, background {}",
            palette.foreground,
            palette.background
        );
        palette
    }
}

fn ansi_colour(index: &str) -> Option<Colour> {
    let index: usize = index.parse().ok()?;
    defaults::ansi_colours().get(index).copied()
}

impl SystemPalette for HostPalette {
    fn foreground(&self) -> Colour {
        self.foreground
    }

    fn background(&self) -> Colour {
        self.background
    }
}
