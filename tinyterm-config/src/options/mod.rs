//! Option registry: descriptors, the option table, value codec and the
//! change ledger.
//!
//! # Sub-modules
//!
//! - [`def`] — [`OptionDef`], [`OptionType`] and the typed [`Field`] locator
//! - [`table`] — the static option table and case-insensitive lookup
//! - [`codec`] — per-type parse/format/compare/copy
//! - [`value`] — [`OptionValue`] and name-addressed access on `Config`
//! - [`ledger`] — [`ChangeLedger`]

pub mod codec;
pub mod def;
pub mod ledger;
pub mod table;
pub mod value;

pub use def::{Field, OptionDef, OptionType};
pub use ledger::ChangeLedger;
pub use table::{OPTIONS, find, lookup};
pub use value::OptionValue;
