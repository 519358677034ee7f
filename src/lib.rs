// Library exports for the binary and the integration tests.
//
// The option registry itself lives in the `tinyterm-config` crate; this crate
// adds the process-level pieces around it: the debug log sink and the host
// colour detection used when migrating legacy rc files.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
pub mod debug;

pub mod platform;

pub use tinyterm_config as config;
