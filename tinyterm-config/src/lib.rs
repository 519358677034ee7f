//! Configuration system for the tinyterm terminal.
//!
//! This crate provides the typed option registry behind the rc file:
//!
//! - The option table mapping case-insensitive names to typed fields
//! - Per-type parsing and formatting of `Name=Value` lines
//! - The change ledger deciding which options get written back
//! - Loading, applying settings-dialog edits and saving
//! - Edit sessions used by the settings dialog

pub mod config;
pub mod defaults;
pub mod error;
pub mod options;
pub mod registry;
pub mod session;
mod types;

// Re-export main types for convenience
pub use config::{BuiltinPalette, Config, FontSpec, RC_FILE_NAME, SystemPalette};
pub use error::ConfigError;
pub use options::{ChangeLedger, OptionDef, OptionType, OptionValue};
pub use registry::Registry;
pub use session::{EditSession, PRINTER_NONE, TERM_CHOICES};

// Re-export value types
pub use types::{
    Colour, CursorType, FontQuality, ModifierKey, RightClickAction, ScrollbarPosition,
    Transparency, TriState,
};
