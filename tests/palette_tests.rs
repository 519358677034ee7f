//! Host palette detection feeding legacy `UseSystemColours` migration.

mod common;

use common::TestContext;
use tinyterm::config::{Colour, Registry, defaults};
use tinyterm::platform::HostPalette;

#[test]
fn test_system_colours_are_migrated_to_explicit_options() {
    let palette = HostPalette::from_colorfgbg("0;15");
    let ctx = TestContext::with_rc_and_palette("UseSystemColours=1\n", Box::new(palette));
    let ansi = defaults::ansi_colours();

    let active = ctx.registry.active();
    assert!(!active.use_system_colours);
    assert_eq!(active.fg_colour, ansi[0]);
    assert_eq!(active.cursor_colour, ansi[0]);
    assert_eq!(active.bg_colour, ansi[15]);

    ctx.registry.save().expect("save");
    let saved = ctx.saved();
    assert!(!saved.contains("UseSystemColours"));
    assert!(saved.contains(&format!("ForegroundColour={}\n", ansi[0])));
    assert!(saved.contains(&format!("BackgroundColour={}\n", ansi[15])));
    assert!(saved.contains(&format!("CursorColour={}\n", ansi[0])));
}

#[test]
fn test_migration_happens_once() {
    let palette = HostPalette::from_colorfgbg("7;0");
    let ctx = TestContext::with_rc_and_palette("UseSystemColours=1\n", Box::new(palette));
    ctx.registry.save().expect("save");

    // Reloading with a different host palette keeps the migrated colours.
    let mut reloaded = Registry::with_palette(Box::new(HostPalette::from_colorfgbg("1;2")));
    reloaded.load(ctx.rc_path());
    assert_eq!(reloaded.active().fg_colour, ctx.registry.active().fg_colour);
    assert_eq!(reloaded.active().bg_colour, ctx.registry.active().bg_colour);
}

#[test]
fn test_palette_unused_without_legacy_flag() {
    let palette = HostPalette::from_colorfgbg("1;2");
    let ctx = TestContext::with_rc_and_palette("Rows=30\n", Box::new(palette));
    assert_eq!(ctx.registry.active().fg_colour, Colour::rgb(191, 191, 191));
    assert_eq!(ctx.registry.render(), "Rows=30\n");
}
