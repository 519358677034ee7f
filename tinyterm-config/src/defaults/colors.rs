//! Default values for colour settings.

use crate::types::Colour;

pub fn foreground_colour() -> Colour {
    Colour::rgb(0xBF, 0xBF, 0xBF) // Light gray
}

pub fn background_colour() -> Colour {
    Colour::BLACK
}

pub fn cursor_colour() -> Colour {
    foreground_colour()
}

pub fn ime_cursor_colour() -> Colour {
    cursor_colour()
}

/// The 16-entry ANSI palette: 8 normal colours followed by their bold variants.
pub fn ansi_colours() -> [Colour; 16] {
    [
        Colour::rgb(0x00, 0x00, 0x00), // Black
        Colour::rgb(0xBF, 0x00, 0x00), // Red
        Colour::rgb(0x00, 0xBF, 0x00), // Green
        Colour::rgb(0xBF, 0xBF, 0x00), // Yellow
        Colour::rgb(0x00, 0x00, 0xBF), // Blue
        Colour::rgb(0xBF, 0x00, 0xBF), // Magenta
        Colour::rgb(0x00, 0xBF, 0xBF), // Cyan
        Colour::rgb(0xBF, 0xBF, 0xBF), // White
        Colour::rgb(0x40, 0x40, 0x40), // Bold black
        Colour::rgb(0xFF, 0x40, 0x40), // Bold red
        Colour::rgb(0x40, 0xFF, 0x40), // Bold green
        Colour::rgb(0xFF, 0xFF, 0x40), // Bold yellow
        Colour::rgb(0x40, 0x40, 0xFF), // Bold blue
        Colour::rgb(0xFF, 0x40, 0xFF), // Bold magenta
        Colour::rgb(0x40, 0xFF, 0xFF), // Bold cyan
        Colour::rgb(0xFF, 0xFF, 0xFF), // Bold white
    ]
}
