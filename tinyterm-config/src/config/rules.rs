//! Derived values applied after a load and before a commit takes effect.
//!
//! Each rule is idempotent. A rule that derives a value the user never set
//! explicitly records the affected options in the change ledger so the
//! derived value is written out on the next save.

use crate::config::Config;
use crate::defaults;
use crate::options::{ChangeLedger, Field, OPTIONS, table};
use crate::types::{Colour, TriState};

/// Source of the platform's default text colours.
///
/// Implemented by the application for the host it runs on.
pub trait SystemPalette {
    /// Default text colour; also used for the cursor.
    fn foreground(&self) -> Colour;

    /// Default window background colour.
    fn background(&self) -> Colour;
}

/// Palette that answers with the built-in defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinPalette;

impl SystemPalette for BuiltinPalette {
    fn foreground(&self) -> Colour {
        defaults::foreground_colour()
    }

    fn background(&self) -> Colour {
        defaults::background_colour()
    }
}

/// Run every rule over `config`.
pub(crate) fn normalize(config: &mut Config, ledger: &mut ChangeLedger, palette: &dyn SystemPalette) {
    clear_charset_without_locale(config);
    apply_system_colours(config, ledger, palette);
    resolve_tri_states(config, ledger);
}

/// A charset means nothing without a locale.
fn clear_charset_without_locale(config: &mut Config) {
    if config.locale.is_empty() && !config.charset.is_empty() {
        log::debug!("Ignoring charset {:?} without a locale", config.charset);
        config.charset.clear();
    }
}

/// Translate the legacy `UseSystemColours` flag into explicit colours.
fn apply_system_colours(config: &mut Config, ledger: &mut ChangeLedger, palette: &dyn SystemPalette) {
    if !config.use_system_colours {
        return;
    }
    let fg = palette.foreground();
    config.fg_colour = fg;
    config.cursor_colour = fg;
    config.bg_colour = palette.background();
    config.use_system_colours = false;
    log::info!(
        "Using platform colours: foreground {}, background {}",
        config.fg_colour,
        config.bg_colour
    );
    for name in ["ForegroundColour", "BackgroundColour", "CursorColour"] {
        force_remember(ledger, name);
    }
}

/// Legacy booleans that are still unset take the value they stood for
/// (`BoldAsFont` used to be implied by `!BoldAsColour`).
fn resolve_tri_states(config: &mut Config, ledger: &mut ChangeLedger) {
    for (index, def) in OPTIONS.iter().enumerate() {
        let Field::TriState(get, get_mut, unset) = def.field else {
            continue;
        };
        if get(config).is_set() {
            continue;
        }
        let resolved = unset(config);
        *get_mut(config) = TriState::from(resolved);
        if ledger.remember(index) {
            log::debug!("Resolved unset {} to {}", def.name, u8::from(resolved));
        }
    }
}

fn force_remember(ledger: &mut ChangeLedger, name: &str) {
    match table::lookup(name) {
        Some(index) => {
            if ledger.remember(index) {
                log::debug!("Recording derived option {name}");
            }
        }
        None => log::error!("Derived option {name} missing from option table"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPalette;

    impl SystemPalette for FixedPalette {
        fn foreground(&self) -> Colour {
            Colour::rgb(1, 2, 3)
        }

        fn background(&self) -> Colour {
            Colour::rgb(250, 250, 250)
        }
    }

    fn names(ledger: &ChangeLedger) -> Vec<&'static str> {
        ledger.iter().map(|i| table::OPTIONS[i].name).collect()
    }

    #[test]
    fn test_defaults_are_already_normal() {
        let mut config = Config::default();
        let mut ledger = ChangeLedger::new();
        normalize(&mut config, &mut ledger, &FixedPalette);
        assert_eq!(config, Config::default());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_system_colours_are_applied_once() {
        let mut config = Config {
            use_system_colours: true,
            ..Config::default()
        };
        let mut ledger = ChangeLedger::new();
        normalize(&mut config, &mut ledger, &FixedPalette);

        assert_eq!(config.fg_colour, Colour::rgb(1, 2, 3));
        assert_eq!(config.cursor_colour, Colour::rgb(1, 2, 3));
        assert_eq!(config.bg_colour, Colour::rgb(250, 250, 250));
        assert!(!config.use_system_colours);
        assert_eq!(
            names(&ledger),
            ["ForegroundColour", "BackgroundColour", "CursorColour"]
        );

        config.fg_colour = Colour::rgb(255, 255, 255);
        normalize(&mut config, &mut ledger, &FixedPalette);
        assert_eq!(config.fg_colour, Colour::rgb(255, 255, 255));
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_unset_bold_as_font_is_resolved_and_recorded() {
        let mut config = Config {
            bold_as_font: TriState::Unset,
            bold_as_colour: false,
            ..Config::default()
        };
        let mut ledger = ChangeLedger::new();
        normalize(&mut config, &mut ledger, &BuiltinPalette);
        assert_eq!(config.bold_as_font, TriState::On);
        assert_eq!(names(&ledger), ["BoldAsFont"]);

        normalize(&mut config, &mut ledger, &BuiltinPalette);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_unset_tri_states_take_their_effective_value() {
        for bold_as_colour in [false, true] {
            let mut config = Config {
                bold_as_colour,
                ..Config::default()
            };
            for def in OPTIONS {
                if let Field::TriState(_, get_mut, _) = def.field {
                    *get_mut(&mut config) = TriState::Unset;
                }
            }
            let before = config.clone();
            let mut ledger = ChangeLedger::new();
            normalize(&mut config, &mut ledger, &BuiltinPalette);

            for (index, def) in OPTIONS.iter().enumerate() {
                if let Field::TriState(get, ..) = def.field {
                    assert_eq!(
                        get(&config).as_bool(),
                        before.value(def).as_bool(),
                        "{} resolved differently from how it read while unset",
                        def.name
                    );
                    assert!(ledger.contains(index));
                }
            }
        }
    }

    #[test]
    fn test_charset_cleared_without_locale() {
        let mut config = Config {
            charset: "UTF-8".to_string(),
            ..Config::default()
        };
        let mut ledger = ChangeLedger::new();
        normalize(&mut config, &mut ledger, &BuiltinPalette);
        assert!(config.charset.is_empty());
        assert!(ledger.is_empty());

        config.locale = "de_DE".to_string();
        config.charset = "ISO-8859-1".to_string();
        normalize(&mut config, &mut ledger, &BuiltinPalette);
        assert_eq!(config.charset, "ISO-8859-1");
    }
}
