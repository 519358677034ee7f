//! rc file load/save and path resolution for [`Registry`].
//!
//! The rc file holds one `Name=Value` pair per line. Loading is forgiving:
//! a missing file, unknown names, lines without `=` and malformed colours
//! are skipped without error. Saving writes exactly the options recorded in
//! the change ledger, in ledger order, skipping compatibility names.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::config_struct::Config;
use super::rules;
use crate::error::ConfigError;
use crate::options::{OPTIONS, codec, table};
use crate::registry::Registry;

/// File name of the rc file inside the config directory.
pub const RC_FILE_NAME: &str = "tinytermrc";

impl Registry {
    /// Load the rc file at `path` into the active configuration.
    ///
    /// Clears the change ledger, then records every option the file sets.
    /// The path is remembered for later saves even if the file does not
    /// exist yet.
    pub fn load(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.ledger.clear();
        self.rc_path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        log::info!("Config path: {:?}", self.rc_path);

        match fs::read(&self.rc_path) {
            Ok(bytes) => {
                for raw in bytes.split(|&b| b == b'\n') {
                    let line = String::from_utf8_lossy(raw);
                    let line = line.split('\r').next().unwrap_or_default();
                    match apply_line(&mut self.active, line) {
                        Some(index) => {
                            self.ledger.remember(index);
                        }
                        None if !line.is_empty() => log::trace!("Ignoring rc line {line:?}"),
                        None => {}
                    }
                }
                log::info!(
                    "Loaded {} option(s) from {:?}",
                    self.ledger.len(),
                    self.rc_path
                );
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Config file not found, using defaults");
            }
            Err(e) => {
                log::warn!("Failed to read config file {:?}: {}", self.rc_path, e);
            }
        }

        rules::normalize(&mut self.active, &mut self.ledger, self.palette.as_ref());
    }

    /// Write the recorded options to the rc file.
    pub fn save(&self) -> Result<(), ConfigError> {
        let contents = self.render();
        write_atomic(&self.rc_path, &contents).map_err(|source| {
            log::error!("Failed to save config to {:?}: {}", self.rc_path, source);
            ConfigError::Save {
                path: self.rc_path.clone(),
                source,
            }
        })?;
        log::debug!("Saved {} option(s) to {:?}", self.ledger.len(), self.rc_path);
        Ok(())
    }

    /// The rc file contents [`Registry::save`] would write.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for index in self.ledger.iter() {
            let def = &OPTIONS[index];
            if def.compat {
                continue;
            }
            out.push_str(def.name);
            out.push('=');
            out.push_str(&codec::format(&def.field, &self.active));
            out.push('\n');
        }
        out
    }

    /// Get the rc file path (using XDG convention)
    pub fn default_path() -> PathBuf {
        Self::config_dir().join(RC_FILE_NAME)
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("tinyterm")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("tinyterm")
            } else {
                PathBuf::from(".")
            }
        }
    }
}

/// Parse one `Name=Value` line into `config`.
///
/// Returns the option's table index if the line named a known option and its
/// value was accepted.
pub fn apply_line(config: &mut Config, line: &str) -> Option<usize> {
    let (name, value) = line.split_once('=')?;
    let index = table::lookup(name)?;
    codec::parse_into(&OPTIONS[index].field, config, value).then_some(index)
}

/// Atomic save: write to a sibling temp file then rename over the target.
fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let mut temp_path = path.as_os_str().to_owned();
    temp_path.push(".tmp");
    let temp_path = PathBuf::from(temp_path);

    fs::write(&temp_path, contents)?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use tempfile::TempDir;

    fn load_str(contents: &str) -> (Registry, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(RC_FILE_NAME);
        fs::write(&path, contents).expect("Failed to write rc file");
        let mut registry = Registry::new();
        registry.load(&path);
        (registry, temp_dir)
    }

    fn ledger_names(registry: &Registry) -> Vec<&'static str> {
        registry.ledger().iter().map(|i| OPTIONS[i].name).collect()
    }

    #[test]
    fn test_apply_line() {
        let mut config = Config::default();
        assert_eq!(apply_line(&mut config, "Rows=30"), table::lookup("Rows"));
        assert_eq!(config.rows, 30);
        assert_eq!(apply_line(&mut config, "Rows"), None);
        assert_eq!(apply_line(&mut config, "Nope=1"), None);
        assert_eq!(apply_line(&mut config, "ForegroundColour=1,2"), None);
    }

    #[test]
    fn test_load_records_file_order() {
        let (registry, _dir) = load_str("Rows=30\nTerm=vt220\nColumns=100\n");
        assert_eq!(ledger_names(&registry), ["Rows", "Term", "Columns"]);
        assert_eq!(registry.active().rows, 30);
        assert_eq!(registry.active().cols, 100);
        assert_eq!(registry.active().term, "vt220");
    }

    #[test]
    fn test_load_ignores_junk_lines() {
        let (registry, _dir) = load_str("# comment\n\nNoEquals\nUnknown=5\n Rows=30\nrows=31\n");
        assert_eq!(ledger_names(&registry), ["Rows"]);
        assert_eq!(registry.active().rows, 31);
    }

    #[test]
    fn test_load_handles_crlf() {
        let (registry, _dir) = load_str("Term=xterm-256color\r\nColumns=90\r\n");
        assert_eq!(registry.active().term, "xterm-256color");
        assert_eq!(registry.active().cols, 90);
    }

    #[test]
    fn test_load_missing_file_keeps_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing").join(RC_FILE_NAME);
        let mut registry = Registry::new();
        registry.load(&path);
        assert_eq!(registry.active(), &Config::default());
        assert!(registry.ledger().is_empty());
        assert!(registry.rc_path().ends_with(RC_FILE_NAME));
        assert!(registry.rc_path().is_absolute());
    }

    #[test]
    fn test_load_resets_ledger() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let first = temp_dir.path().join("first");
        let second = temp_dir.path().join("second");
        fs::write(&first, "Rows=30\n").unwrap();
        fs::write(&second, "Columns=100\n").unwrap();

        let mut registry = Registry::new();
        registry.load(&first);
        registry.load(&second);
        assert_eq!(ledger_names(&registry), ["Columns"]);
        // Values loaded earlier stay in the active configuration.
        assert_eq!(registry.active().rows, 30);
    }

    #[test]
    fn test_load_runs_normalization() {
        let (registry, _dir) = load_str("BoldAsColour=0\nBoldAsFont=-1\nCharset=UTF-8\n");
        assert!(registry.active().bold_as_font());
        assert!(registry.active().charset.is_empty());
        assert_eq!(ledger_names(&registry), ["BoldAsColour", "BoldAsFont", "Charset"]);
    }

    #[test]
    fn test_render_skips_compat_names() {
        let (registry, _dir) = load_str("BoldAsBright=0\nUseSystemColours=1\n");
        assert!(!registry.active().bold_as_colour);
        assert_eq!(
            registry.render(),
            "ForegroundColour=191,191,191\nBackgroundColour=0,0,0\nCursorColour=191,191,191\n"
        );
    }

    #[test]
    fn test_save_writes_ledger_in_order() {
        let (registry, dir) = load_str("Black=1,2,3\nBellSound=1\nFont=Consolas\n");
        registry.save().expect("save");
        let saved = fs::read_to_string(dir.path().join(RC_FILE_NAME)).unwrap();
        assert_eq!(saved, "Black=1,2,3\nBellSound=1\nFont=Consolas\n");
        assert_eq!(registry.active().ansi_colours[0], Colour::rgb(1, 2, 3));
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join("dir").join(RC_FILE_NAME);
        let mut registry = Registry::new();
        registry.load(&path);
        registry.save().expect("save");
        assert!(path.exists());
        assert!(!temp_dir.path().join("nested/dir/tinytermrc.tmp").exists());
    }

    #[test]
    fn test_save_failure_names_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join(RC_FILE_NAME);

        let mut registry = Registry::new();
        registry.load(&path);
        let err = registry.save().unwrap_err();
        assert!(matches!(err, ConfigError::Save { .. }));
        assert!(err.to_string().contains("Could not save options to"));
        assert!(err.to_string().contains("blocker"));
    }

    #[test]
    fn test_default_path() {
        let path = Registry::default_path();
        assert!(path.ends_with(RC_FILE_NAME));
        assert_eq!(path.parent(), Some(Registry::config_dir().as_path()));
    }
}
