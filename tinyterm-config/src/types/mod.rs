//! Value types stored in the configuration snapshot.

mod colour;
mod terminal;

pub use colour::Colour;
pub use terminal::{
    CursorType, FontQuality, ModifierKey, RightClickAction, ScrollbarPosition, Transparency,
    TriState,
};
