//! Core `Config` struct definition.
//!
//! A `Config` is one complete configuration snapshot. The registry keeps the
//! active snapshot; an edit session owns a second one while the settings
//! dialog is open. Cloning deep-copies every string, so the two never alias.
//!
//! Integer fields that encode enumerations stay `i32` here; see the typed
//! accessors at the bottom of this file.

use crate::defaults;
use crate::types::{
    Colour, CursorType, FontQuality, ModifierKey, RightClickAction, ScrollbarPosition,
    Transparency, TriState,
};

/// Font selection as stored by the `Font`, `FontIsBold` and `FontHeight` options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    pub name: String,
    pub is_bold: bool,
    /// Point size
    pub size: i32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            name: defaults::font_name(),
            is_bold: false,
            size: defaults::font_size(),
        }
    }
}

/// Configuration for the terminal
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // ========================================================================
    // Looks
    // ========================================================================
    pub fg_colour: Colour,
    pub bg_colour: Colour,
    pub cursor_colour: Colour,
    /// See [`Transparency`]
    pub transparency: i32,
    pub opaque_when_focused: bool,
    /// See [`CursorType`]
    pub cursor_type: i32,
    pub cursor_blinks: bool,

    // ========================================================================
    // Text
    // ========================================================================
    pub font: FontSpec,
    /// See [`FontQuality`]
    pub font_quality: i32,
    /// Render bold text with a bold font. `Unset` means "the opposite of
    /// `bold_as_colour`" and is resolved by the normalization pass.
    pub bold_as_font: TriState,
    pub bold_as_colour: bool,
    pub allow_blinking: bool,
    pub locale: String,
    pub charset: String,

    // ========================================================================
    // Keys
    // ========================================================================
    pub backspace_sends_bs: bool,
    pub ctrl_alt_is_altgr: bool,
    pub clip_shortcuts: bool,
    pub window_shortcuts: bool,
    pub switch_shortcuts: bool,
    pub zoom_shortcuts: bool,
    pub alt_fn_shortcuts: bool,
    pub ctrl_shift_shortcuts: bool,

    // ========================================================================
    // Mouse
    // ========================================================================
    pub copy_on_select: bool,
    pub copy_as_rtf: bool,
    pub clicks_place_cursor: bool,
    /// See [`RightClickAction`]
    pub right_click_action: i32,
    /// Non-zero: clicks go to the application when it has mouse mode enabled
    pub clicks_target_app: i32,
    /// See [`ModifierKey`]
    pub click_target_mod: i32,

    // ========================================================================
    // Window
    // ========================================================================
    pub cols: i32,
    pub rows: i32,
    /// See [`ScrollbarPosition`]
    pub scrollbar: i32,
    pub scrollback_lines: i32,
    /// See [`ModifierKey`]
    pub scroll_mod: i32,
    pub pgupdn_scroll: bool,

    // ========================================================================
    // Terminal
    // ========================================================================
    /// Value of `TERM` for child processes
    pub term: String,
    pub answerback: String,
    pub bell_sound: bool,
    pub bell_flash: bool,
    pub bell_taskbar: bool,
    /// Printer name; empty disables printing
    pub printer: String,
    pub confirm_exit: bool,

    // ========================================================================
    // Hidden (rc file only)
    // ========================================================================
    pub col_spacing: i32,
    pub row_spacing: i32,
    pub word_chars: String,
    pub ime_cursor_colour: Colour,
    /// Normal colours 0..8, bold colours 8..16
    pub ansi_colours: [Colour; 16],

    // ========================================================================
    // Legacy
    // ========================================================================
    /// One-shot request to take fg/bg/cursor colours from the platform.
    /// Only ever set by loading `UseSystemColours=1`.
    pub use_system_colours: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fg_colour: defaults::foreground_colour(),
            bg_colour: defaults::background_colour(),
            cursor_colour: defaults::cursor_colour(),
            transparency: Transparency::Off.as_int(),
            opaque_when_focused: false,
            cursor_type: CursorType::Line.as_int(),
            cursor_blinks: true,
            font: FontSpec::default(),
            font_quality: FontQuality::Default.as_int(),
            bold_as_font: TriState::Off,
            bold_as_colour: true,
            allow_blinking: false,
            locale: String::new(),
            charset: String::new(),
            backspace_sends_bs: false,
            ctrl_alt_is_altgr: false,
            clip_shortcuts: true,
            window_shortcuts: true,
            switch_shortcuts: true,
            zoom_shortcuts: true,
            alt_fn_shortcuts: true,
            ctrl_shift_shortcuts: false,
            copy_on_select: true,
            copy_as_rtf: true,
            clicks_place_cursor: false,
            right_click_action: RightClickAction::ShowMenu.as_int(),
            clicks_target_app: 1,
            click_target_mod: ModifierKey::Shift.as_int(),
            cols: defaults::cols(),
            rows: defaults::rows(),
            scrollbar: ScrollbarPosition::Right.as_int(),
            scrollback_lines: defaults::scrollback_lines(),
            scroll_mod: ModifierKey::Shift.as_int(),
            pgupdn_scroll: false,
            term: defaults::term(),
            answerback: defaults::answerback(),
            bell_sound: false,
            bell_flash: false,
            bell_taskbar: true,
            printer: String::new(),
            confirm_exit: true,
            col_spacing: 0,
            row_spacing: 0,
            word_chars: defaults::word_chars(),
            ime_cursor_colour: defaults::ime_cursor_colour(),
            ansi_colours: defaults::ansi_colours(),
            use_system_colours: false,
        }
    }
}

impl Config {
    /// Create a new configuration with built-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor_type(&self) -> CursorType {
        CursorType::from_int(self.cursor_type)
    }

    pub fn font_quality(&self) -> FontQuality {
        FontQuality::from_int(self.font_quality)
    }

    pub fn transparency(&self) -> Transparency {
        Transparency::from_int(self.transparency)
    }

    pub fn right_click_action(&self) -> RightClickAction {
        RightClickAction::from_int(self.right_click_action)
    }

    pub fn scrollbar(&self) -> ScrollbarPosition {
        ScrollbarPosition::from_int(self.scrollbar)
    }

    pub fn click_target_mod(&self) -> ModifierKey {
        ModifierKey::from_int(self.click_target_mod)
    }

    pub fn scroll_mod(&self) -> ModifierKey {
        ModifierKey::from_int(self.scroll_mod)
    }

    /// Effective "bold as font" flag, deriving it from `bold_as_colour`
    /// while the legacy value is still unset.
    pub fn bold_as_font(&self) -> bool {
        self.bold_as_font
            .as_bool()
            .unwrap_or(!self.bold_as_colour)
    }
}
