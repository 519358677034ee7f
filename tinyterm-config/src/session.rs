//! Edit sessions: the scratch configuration a settings dialog works on.
//!
//! A session starts as a deep copy of the registry's active configuration.
//! Widgets read and write it through the accessors below; nothing reaches
//! the active configuration until the session is applied or committed via
//! [`crate::Registry`]. Dropping a session discards it.

use crate::config::Config;
use crate::error::ConfigError;
use crate::options::{OptionValue, codec, table};

/// Printer list entry that stands for "no printer".
pub const PRINTER_NONE: &str = "None (printing disabled)";

/// Charset chosen when a locale is picked without one.
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// Locale chosen when a charset is picked without one.
pub const FALLBACK_LOCALE: &str = "C";

/// Entries offered by the terminal type combo box.
pub const TERM_CHOICES: &[&str] = &["xterm", "xterm-256color", "xterm-vt220", "vt100", "vt220"];

/// Scratch configuration owned by an open settings dialog.
#[derive(Debug, Clone)]
pub struct EditSession {
    config: Config,
    has_changes: bool,
}

impl EditSession {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            config,
            has_changes: false,
        }
    }

    /// The configuration being edited.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Direct mutable access for widgets bound to typed fields.
    pub fn config_mut(&mut self) -> &mut Config {
        self.has_changes = true;
        &mut self.config
    }

    /// Whether anything was edited since the session started or was last applied.
    pub fn has_changes(&self) -> bool {
        self.has_changes
    }

    pub(crate) fn mark_applied(&mut self) {
        self.has_changes = false;
    }

    pub(crate) fn config_for_apply(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn get(&self, name: &str) -> Result<OptionValue, ConfigError> {
        self.config.get(name)
    }

    pub fn set(&mut self, name: &str, value: impl Into<OptionValue>) -> Result<(), ConfigError> {
        self.config.set(name, value)?;
        self.has_changes = true;
        Ok(())
    }

    /// Read an option by its stable table index.
    pub fn get_at(&self, index: usize) -> Option<OptionValue> {
        table::def(index).map(|def| self.config.value(def))
    }

    /// Write an option by its stable table index.
    pub fn set_at(&mut self, index: usize, value: impl Into<OptionValue>) -> Result<(), ConfigError> {
        let def = table::def(index).ok_or_else(|| ConfigError::UnknownOption(format!("#{index}")))?;
        self.config.set_value(def, value.into())?;
        self.has_changes = true;
        Ok(())
    }

    /// Restore one option to its built-in default.
    pub fn reset_to_default(&mut self, name: &str) -> Result<(), ConfigError> {
        let def = table::find(name).ok_or_else(|| ConfigError::UnknownOption(name.to_string()))?;
        codec::copy(&def.field, &mut self.config, &Config::default());
        self.has_changes = true;
        Ok(())
    }

    /// Store the text of a numeric edit box. Unparseable or negative input
    /// becomes `0`.
    pub fn set_int_field(&mut self, name: &str, text: &str) -> Result<(), ConfigError> {
        self.set(name, codec::parse_int(text).max(0))
    }

    /// Adopt the live terminal size as the default size.
    pub fn use_current_size(&mut self, cols: i32, rows: i32) {
        self.config.cols = cols;
        self.config.rows = rows;
        self.has_changes = true;
    }

    /// Handle a pick from the locale list.
    ///
    /// Entries starting with `(` stand for "no locale", which also clears
    /// the charset. Picking a real locale fills in a missing charset.
    pub fn select_locale(&mut self, entry: &str) {
        let locale = if entry.starts_with('(') { "" } else { entry };
        self.config.locale = locale.to_string();
        if locale.is_empty() {
            self.config.charset.clear();
        } else if self.config.charset.is_empty() {
            self.config.charset = DEFAULT_CHARSET.to_string();
        }
        self.has_changes = true;
    }

    /// Handle the locale box losing focus after free-text editing.
    pub fn finish_locale_edit(&mut self) {
        if self.config.locale.is_empty() && !self.config.charset.is_empty() {
            self.config.charset.clear();
            self.has_changes = true;
        }
    }

    /// Handle a pick from the charset list.
    ///
    /// List entries look like `ISO-8859-1 (Western European)`; only the text
    /// up to the first space is stored. Entries starting with `(` mean "no
    /// charset". A charset needs a locale, so an empty one becomes `C`.
    pub fn select_charset(&mut self, entry: &str) {
        if entry.starts_with('(') {
            self.config.charset.clear();
        } else {
            let charset = entry.split(' ').next().unwrap_or_default();
            self.config.charset = charset.to_string();
            self.ensure_locale();
        }
        self.has_changes = true;
    }

    /// Handle the charset box losing focus after free-text editing.
    pub fn finish_charset_edit(&mut self) {
        if !self.config.charset.is_empty() {
            self.ensure_locale();
        }
    }

    fn ensure_locale(&mut self) {
        if self.config.locale.is_empty() {
            self.config.locale = FALLBACK_LOCALE.to_string();
            self.has_changes = true;
        }
    }

    /// Handle a pick from the printer list.
    pub fn select_printer(&mut self, entry: &str) {
        self.config.printer = if entry == PRINTER_NONE {
            String::new()
        } else {
            entry.to_string()
        };
        self.has_changes = true;
    }

    /// Text to show in the printer box.
    pub fn printer_display(&self) -> &str {
        if self.config.printer.is_empty() {
            PRINTER_NONE
        } else {
            &self.config.printer
        }
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}
