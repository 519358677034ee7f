//! Typed error variants for the tinyterm-config crate.
//!
//! Loading never fails: unknown lines, malformed values and a missing rc file
//! are all absorbed. The only I/O failure that reaches the caller is a failed
//! save. The remaining variants report values the name-addressed accessors
//! refuse to store.
//!
//! # Example
//!
//! ```rust,no_run
//! use tinyterm_config::{ConfigError, Registry};
//!
//! let mut registry = Registry::new();
//! registry.load("/home/me/.config/tinyterm/tinytermrc");
//! if let Err(ConfigError::Save { path, source }) = registry.save() {
//!     eprintln!("could not write {}: {source}", path.display());
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::options::OptionType;

/// Errors produced by the option registry.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The rc file could not be written. The in-memory configuration is
    /// unaffected.
    #[error("Could not save options to '{}':\n{source}.", .path.display())]
    Save {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// No option with this name exists in the option table.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// A string value holds a line break, which the rc file cannot store.
    #[error("value for option '{0}' must not contain line breaks")]
    MultiLineValue(String),

    /// A value of the wrong type was supplied for an option.
    #[error("type mismatch for option '{option}': expected {}, got {}", .expected.name(), .got.name())]
    TypeMismatch {
        option: String,
        expected: OptionType,
        got: OptionType,
    },
}
