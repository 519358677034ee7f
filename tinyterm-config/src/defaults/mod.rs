//! Built-in default values.
//!
//! `Config::default()` is assembled from these functions. They are grouped
//! the same way the settings dialog groups its panels.

mod colors;
mod terminal;

// ── Colors ─────────────────────────────────────────────────────────────────
pub use colors::{ansi_colours, background_colour, cursor_colour, foreground_colour, ime_cursor_colour};

// ── Text, window & terminal behaviour ──────────────────────────────────────
pub use terminal::{
    answerback, cols, font_name, font_size, rows, scrollback_lines, term, word_chars,
};
