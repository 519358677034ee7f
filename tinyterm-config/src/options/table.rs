//! The option table: every setting the rc file knows about.
//!
//! Table order matters. It is the order in which changed options are added
//! to the change ledger on commit, and it breaks ties if a name is ever
//! registered twice (the first entry wins).

use std::collections::HashMap;
use std::sync::OnceLock;

use super::def::{Field, OptionDef};

/// Build a [`Field`] from a field path on `Config`.
macro_rules! field {
    (TriState, $path:ident, unset = $unset:expr) => {
        Field::TriState(|c| &c.$path, |c| &mut c.$path, $unset)
    };
    ($kind:ident, $($path:tt)+) => {
        Field::$kind(|c| &c.$($path)+, |c| &mut c.$($path)+)
    };
}

pub static OPTIONS: &[OptionDef] = &[
    // Looks
    OptionDef::new("ForegroundColour", field!(Colour, fg_colour)),
    OptionDef::new("BackgroundColour", field!(Colour, bg_colour)),
    OptionDef::new("CursorColour", field!(Colour, cursor_colour)),
    OptionDef::new("Transparency", field!(Int, transparency)),
    OptionDef::new("OpaqueWhenFocused", field!(Bool, opaque_when_focused)),
    OptionDef::new("CursorType", field!(Int, cursor_type)),
    OptionDef::new("CursorBlinks", field!(Bool, cursor_blinks)),
    // Text
    OptionDef::new("Font", field!(String, font.name)),
    OptionDef::new("FontIsBold", field!(Bool, font.is_bold)),
    OptionDef::new("FontHeight", field!(Int, font.size)),
    OptionDef::new("FontQuality", field!(Int, font_quality)),
    OptionDef::new("BoldAsFont", field!(TriState, bold_as_font, unset = |c| !c.bold_as_colour)),
    OptionDef::new("BoldAsColour", field!(Bool, bold_as_colour)),
    OptionDef::new("AllowBlinking", field!(Bool, allow_blinking)),
    OptionDef::new("Locale", field!(String, locale)),
    OptionDef::new("Charset", field!(String, charset)),
    // Keys
    OptionDef::new("BackspaceSendsBS", field!(Bool, backspace_sends_bs)),
    OptionDef::new("CtrlAltIsAltGr", field!(Bool, ctrl_alt_is_altgr)),
    OptionDef::new("ClipShortcuts", field!(Bool, clip_shortcuts)),
    OptionDef::new("WindowShortcuts", field!(Bool, window_shortcuts)),
    OptionDef::new("SwitchShortcuts", field!(Bool, switch_shortcuts)),
    OptionDef::new("ZoomShortcuts", field!(Bool, zoom_shortcuts)),
    OptionDef::new("AltFnShortcuts", field!(Bool, alt_fn_shortcuts)),
    OptionDef::new("CtrlShiftShortcuts", field!(Bool, ctrl_shift_shortcuts)),
    // Mouse
    OptionDef::new("CopyOnSelect", field!(Bool, copy_on_select)),
    OptionDef::new("CopyAsRTF", field!(Bool, copy_as_rtf)),
    OptionDef::new("ClicksPlaceCursor", field!(Bool, clicks_place_cursor)),
    OptionDef::new("RightClickAction", field!(Int, right_click_action)),
    OptionDef::new("ClicksTargetApp", field!(Int, clicks_target_app)),
    OptionDef::new("ClickTargetMod", field!(Int, click_target_mod)),
    // Window
    OptionDef::new("Columns", field!(Int, cols)),
    OptionDef::new("Rows", field!(Int, rows)),
    OptionDef::new("Scrollbar", field!(Int, scrollbar)),
    OptionDef::new("ScrollbackLines", field!(Int, scrollback_lines)),
    OptionDef::new("ScrollMod", field!(Int, scroll_mod)),
    OptionDef::new("PgUpDnScroll", field!(Bool, pgupdn_scroll)),
    // Terminal
    OptionDef::new("Term", field!(String, term)),
    OptionDef::new("Answerback", field!(String, answerback)),
    OptionDef::new("BellSound", field!(Bool, bell_sound)),
    OptionDef::new("BellFlash", field!(Bool, bell_flash)),
    OptionDef::new("BellTaskbar", field!(Bool, bell_taskbar)),
    OptionDef::new("Printer", field!(String, printer)),
    OptionDef::new("ConfirmExit", field!(Bool, confirm_exit)),
    // Hidden: character spacing
    OptionDef::new("ColSpacing", field!(Int, col_spacing)),
    OptionDef::new("RowSpacing", field!(Int, row_spacing)),
    // Hidden: word selection characters
    OptionDef::new("WordChars", field!(String, word_chars)),
    // Hidden: IME cursor colour
    OptionDef::new("IMECursorColour", field!(Colour, ime_cursor_colour)),
    // Hidden: ANSI colours
    OptionDef::new("Black", field!(Colour, ansi_colours[0])),
    OptionDef::new("Red", field!(Colour, ansi_colours[1])),
    OptionDef::new("Green", field!(Colour, ansi_colours[2])),
    OptionDef::new("Yellow", field!(Colour, ansi_colours[3])),
    OptionDef::new("Blue", field!(Colour, ansi_colours[4])),
    OptionDef::new("Magenta", field!(Colour, ansi_colours[5])),
    OptionDef::new("Cyan", field!(Colour, ansi_colours[6])),
    OptionDef::new("White", field!(Colour, ansi_colours[7])),
    OptionDef::new("BoldBlack", field!(Colour, ansi_colours[8])),
    OptionDef::new("BoldRed", field!(Colour, ansi_colours[9])),
    OptionDef::new("BoldGreen", field!(Colour, ansi_colours[10])),
    OptionDef::new("BoldYellow", field!(Colour, ansi_colours[11])),
    OptionDef::new("BoldBlue", field!(Colour, ansi_colours[12])),
    OptionDef::new("BoldMagenta", field!(Colour, ansi_colours[13])),
    OptionDef::new("BoldCyan", field!(Colour, ansi_colours[14])),
    OptionDef::new("BoldWhite", field!(Colour, ansi_colours[15])),
    // Backward compatibility
    OptionDef::compat("UseSystemColours", field!(Bool, use_system_colours)),
    OptionDef::compat("BoldAsBright", field!(Bool, bold_as_colour)),
];

fn name_index() -> &'static HashMap<String, usize> {
    static INDEX: OnceLock<HashMap<String, usize>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index = HashMap::with_capacity(OPTIONS.len());
        for (i, def) in OPTIONS.iter().enumerate() {
            index.entry(def.name.to_ascii_lowercase()).or_insert(i);
        }
        index
    })
}

/// Find the table index of an option by name (case-insensitive).
pub fn lookup(name: &str) -> Option<usize> {
    name_index().get(&name.to_ascii_lowercase()).copied()
}

/// Descriptor at a table index.
pub fn def(index: usize) -> Option<&'static OptionDef> {
    OPTIONS.get(index)
}

/// Find a descriptor by name (case-insensitive).
pub fn find(name: &str) -> Option<&'static OptionDef> {
    lookup(name).map(|i| &OPTIONS[i])
}
