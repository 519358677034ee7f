//! Shared integration test helpers for tinyterm.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{TestContext, write_rc};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a
//! subset of helpers is used per file.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tinyterm::config::{RC_FILE_NAME, Registry, SystemPalette};

/// A registry whose rc file lives in a private temp directory.
///
/// The `TempDir` is dropped with the context, so keep the context alive until
/// all rc file I/O has completed.
pub struct TestContext {
    pub registry: Registry,
    pub temp_dir: TempDir,
}

impl TestContext {
    /// Registry loaded from an rc file with the given contents.
    pub fn with_rc(contents: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = write_rc(temp_dir.path(), contents);
        let mut registry = Registry::new();
        registry.load(&path);
        Self { registry, temp_dir }
    }

    /// Like [`TestContext::with_rc`] with a custom platform palette.
    pub fn with_rc_and_palette(contents: &str, palette: Box<dyn SystemPalette>) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = write_rc(temp_dir.path(), contents);
        let mut registry = Registry::with_palette(palette);
        registry.load(&path);
        Self { registry, temp_dir }
    }

    /// Registry pointed at an rc file that does not exist yet.
    pub fn empty() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut registry = Registry::new();
        registry.load(temp_dir.path().join(RC_FILE_NAME));
        Self { registry, temp_dir }
    }

    pub fn rc_path(&self) -> PathBuf {
        self.temp_dir.path().join(RC_FILE_NAME)
    }

    /// Current rc file contents; empty if it was never written.
    pub fn saved(&self) -> String {
        fs::read_to_string(self.rc_path()).unwrap_or_default()
    }
}

/// Write an rc file into `dir` and return its path.
pub fn write_rc(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join(RC_FILE_NAME);
    fs::write(&path, contents).expect("Failed to write rc file");
    path
}
