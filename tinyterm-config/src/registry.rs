//! The option registry: active configuration, change ledger and rc path.
//!
//! Lifecycle:
//!
//! 1. [`Registry::new`] — active configuration set to built-in defaults
//! 2. [`Registry::load`] — rc file parsed into the active configuration
//! 3. [`Registry::start_session`] — settings dialog opens on a copy
//! 4. [`Registry::apply`] / [`Registry::commit`] — changes recorded, copied
//!    back and saved; or [`Registry::discard`]
//!
//! All operations take `&mut self`; the registry is meant to be owned by the
//! thread that runs the UI event loop.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::config::rules::{self, BuiltinPalette, SystemPalette};
use crate::error::ConfigError;
use crate::options::{ChangeLedger, OPTIONS, codec};
use crate::session::EditSession;

pub struct Registry {
    pub(crate) active: Config,
    pub(crate) ledger: ChangeLedger,
    pub(crate) rc_path: PathBuf,
    pub(crate) palette: Box<dyn SystemPalette>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("rc_path", &self.rc_path)
            .field("ledger", &self.ledger)
            .finish_non_exhaustive()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Registry holding the built-in defaults, saving to [`Registry::default_path`].
    pub fn new() -> Self {
        Self::with_palette(Box::new(BuiltinPalette))
    }

    /// Like [`Registry::new`] with a platform colour source for legacy
    /// `UseSystemColours` files.
    pub fn with_palette(palette: Box<dyn SystemPalette>) -> Self {
        Self {
            active: Config::default(),
            ledger: ChangeLedger::new(),
            rc_path: Self::default_path(),
            palette,
        }
    }

    /// The active configuration. Re-read it after a commit.
    pub fn active(&self) -> &Config {
        &self.active
    }

    /// Options that will be written on the next save, in write order.
    pub fn ledger(&self) -> &ChangeLedger {
        &self.ledger
    }

    /// Where [`Registry::save`] writes.
    pub fn rc_path(&self) -> &Path {
        &self.rc_path
    }

    /// Open a settings session on a copy of the active configuration.
    pub fn start_session(&self) -> EditSession {
        EditSession::new(self.active.clone())
    }

    /// Record what the session changed, make it active and save.
    ///
    /// The session stays open. A save failure is returned, but the new
    /// configuration is already active at that point.
    pub fn apply(&mut self, session: &mut EditSession) -> Result<(), ConfigError> {
        let edited = session.config_for_apply();
        for (index, def) in OPTIONS.iter().enumerate() {
            if def.compat {
                continue;
            }
            if !codec::equals(&def.field, &self.active, edited) && self.ledger.remember(index) {
                log::debug!("Option {} changed", def.name);
            }
        }
        rules::normalize(edited, &mut self.ledger, self.palette.as_ref());
        self.active = edited.clone();
        session.mark_applied();
        self.save()
    }

    /// Apply the session and close it.
    pub fn commit(&mut self, mut session: EditSession) -> Result<(), ConfigError> {
        self.apply(&mut session)
    }

    /// Close a session without touching the registry.
    pub fn discard(&self, session: EditSession) {
        if session.has_changes() {
            log::debug!("Discarding unapplied settings changes");
        }
    }
}
