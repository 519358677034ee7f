//! Platform abstraction layer for tinyterm.
//!
//! Host-specific lookups live behind this module so that the option registry
//! never has to know where it runs.
//!
//! # Contents
//!
//! | Item | Description |
//! |---|---|
//! | [`HostPalette`] | Default text colours reported by the host terminal environment |

mod palette;

pub use palette::HostPalette;
