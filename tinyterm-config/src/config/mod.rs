//! Terminal configuration snapshot and its persistence.
//!
//! # Sub-modules
//!
//! - [`config_struct`] — the [`Config`] snapshot and its `Default` impl
//! - [`persistence`] — `impl Registry` methods for rc file load/save and path resolution
//! - [`rules`] — normalization rules and the [`SystemPalette`] hook

pub mod config_struct;
pub mod persistence;
pub mod rules;

pub use config_struct::{Config, FontSpec};
pub use persistence::{RC_FILE_NAME, apply_line};
pub use rules::{BuiltinPalette, SystemPalette};
