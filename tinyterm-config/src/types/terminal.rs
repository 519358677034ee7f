//! Typed views over integer-valued options.
//!
//! The rc file stores these settings as plain integers and the snapshot keeps
//! them as `i32` so that values written by newer versions survive a round
//! trip. These enums give UI collaborators and the rest of the application a
//! typed way to read and write them.

/// Cursor shape (`CursorType`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorType {
    Block,
    Underscore,
    /// Vertical bar at the cell start
    #[default]
    Line,
}

impl CursorType {
    pub fn from_int(value: i32) -> Self {
        match value {
            0 => CursorType::Block,
            1 => CursorType::Underscore,
            2 => CursorType::Line,
            _ => CursorType::default(),
        }
    }

    pub fn as_int(self) -> i32 {
        match self {
            CursorType::Block => 0,
            CursorType::Underscore => 1,
            CursorType::Line => 2,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            CursorType::Block => "Block",
            CursorType::Underscore => "Underscore",
            CursorType::Line => "Line",
        }
    }

    /// All available shapes for UI iteration
    pub fn all() -> &'static [CursorType] {
        &[CursorType::Line, CursorType::Block, CursorType::Underscore]
    }
}

/// Font smoothing mode (`FontQuality`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontQuality {
    /// Let the platform decide
    #[default]
    Default,
    None,
    Partial,
    Full,
}

impl FontQuality {
    pub fn from_int(value: i32) -> Self {
        match value {
            1 => FontQuality::None,
            2 => FontQuality::Partial,
            3 => FontQuality::Full,
            _ => FontQuality::Default,
        }
    }

    pub fn as_int(self) -> i32 {
        match self {
            FontQuality::Default => 0,
            FontQuality::None => 1,
            FontQuality::Partial => 2,
            FontQuality::Full => 3,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FontQuality::Default => "Default",
            FontQuality::None => "None",
            FontQuality::Partial => "Partial",
            FontQuality::Full => "Full",
        }
    }

    pub fn all() -> &'static [FontQuality] {
        &[
            FontQuality::Default,
            FontQuality::None,
            FontQuality::Partial,
            FontQuality::Full,
        ]
    }
}

/// Window transparency level (`Transparency`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transparency {
    /// Blurred glass effect where the compositor supports it
    Glass,
    #[default]
    Off,
    Low,
    Medium,
    High,
}

impl Transparency {
    pub fn from_int(value: i32) -> Self {
        match value {
            -1 => Transparency::Glass,
            1 => Transparency::Low,
            2 => Transparency::Medium,
            3 => Transparency::High,
            _ => Transparency::Off,
        }
    }

    pub fn as_int(self) -> i32 {
        match self {
            Transparency::Glass => -1,
            Transparency::Off => 0,
            Transparency::Low => 1,
            Transparency::Medium => 2,
            Transparency::High => 3,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Transparency::Glass => "Glass",
            Transparency::Off => "Off",
            Transparency::Low => "Low",
            Transparency::Medium => "Medium",
            Transparency::High => "High",
        }
    }

    /// Levels offered in the UI. `Glass` is only listed when available.
    pub fn all(with_glass: bool) -> &'static [Transparency] {
        const ALL: &[Transparency] = &[
            Transparency::Off,
            Transparency::Low,
            Transparency::Medium,
            Transparency::High,
            Transparency::Glass,
        ];
        if with_glass { ALL } else { &ALL[..4] }
    }
}

/// Right mouse button behaviour (`RightClickAction`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RightClickAction {
    Paste,
    /// Extend the current selection
    Extend,
    #[default]
    ShowMenu,
}

impl RightClickAction {
    pub fn from_int(value: i32) -> Self {
        match value {
            0 => RightClickAction::Paste,
            1 => RightClickAction::Extend,
            _ => RightClickAction::ShowMenu,
        }
    }

    pub fn as_int(self) -> i32 {
        match self {
            RightClickAction::Paste => 0,
            RightClickAction::Extend => 1,
            RightClickAction::ShowMenu => 2,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RightClickAction::Paste => "Paste",
            RightClickAction::Extend => "Extend",
            RightClickAction::ShowMenu => "Show menu",
        }
    }

    pub fn all() -> &'static [RightClickAction] {
        &[
            RightClickAction::Paste,
            RightClickAction::Extend,
            RightClickAction::ShowMenu,
        ]
    }
}

/// Scrollbar placement (`Scrollbar`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollbarPosition {
    Left,
    Hidden,
    #[default]
    Right,
}

impl ScrollbarPosition {
    pub fn from_int(value: i32) -> Self {
        match value.signum() {
            -1 => ScrollbarPosition::Left,
            0 => ScrollbarPosition::Hidden,
            _ => ScrollbarPosition::Right,
        }
    }

    pub fn as_int(self) -> i32 {
        match self {
            ScrollbarPosition::Left => -1,
            ScrollbarPosition::Hidden => 0,
            ScrollbarPosition::Right => 1,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ScrollbarPosition::Left => "Left",
            ScrollbarPosition::Hidden => "None",
            ScrollbarPosition::Right => "Right",
        }
    }

    pub fn all() -> &'static [ScrollbarPosition] {
        &[
            ScrollbarPosition::Left,
            ScrollbarPosition::Hidden,
            ScrollbarPosition::Right,
        ]
    }
}

/// Modifier key used by `ClickTargetMod` and `ScrollMod`.
///
/// Stored as a bit value so that the input layer can test it against its
/// modifier mask directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModifierKey {
    Off,
    #[default]
    Shift,
    Alt,
    Ctrl,
}

impl ModifierKey {
    pub fn from_int(value: i32) -> Self {
        match value {
            0 => ModifierKey::Off,
            2 => ModifierKey::Alt,
            4 => ModifierKey::Ctrl,
            _ => ModifierKey::Shift,
        }
    }

    pub fn as_int(self) -> i32 {
        match self {
            ModifierKey::Off => 0,
            ModifierKey::Shift => 1,
            ModifierKey::Alt => 2,
            ModifierKey::Ctrl => 4,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModifierKey::Off => "Off",
            ModifierKey::Shift => "Shift",
            ModifierKey::Alt => "Alt",
            ModifierKey::Ctrl => "Ctrl",
        }
    }

    pub fn all() -> &'static [ModifierKey] {
        &[
            ModifierKey::Shift,
            ModifierKey::Ctrl,
            ModifierKey::Alt,
            ModifierKey::Off,
        ]
    }
}

/// Boolean with a legacy "not yet decided" state.
///
/// `BoldAsFont` used to be implied by `!BoldAsColour`; a stored `-1` keeps
/// that meaning until the value is resolved by the normalization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriState {
    #[default]
    Unset,
    Off,
    On,
}

impl TriState {
    pub fn from_int(value: i32) -> Self {
        match value {
            -1 => TriState::Unset,
            0 => TriState::Off,
            _ => TriState::On,
        }
    }

    pub fn as_int(self) -> i32 {
        match self {
            TriState::Unset => -1,
            TriState::Off => 0,
            TriState::On => 1,
        }
    }

    pub fn is_set(self) -> bool {
        self != TriState::Unset
    }

    /// The resolved value, or `None` while still unset.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            TriState::Unset => None,
            TriState::Off => Some(false),
            TriState::On => Some(true),
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value { TriState::On } else { TriState::Off }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_ints_fall_back_to_default() {
        assert_eq!(CursorType::from_int(42), CursorType::Line);
        assert_eq!(FontQuality::from_int(-7), FontQuality::Default);
        assert_eq!(RightClickAction::from_int(9), RightClickAction::ShowMenu);
        assert_eq!(ModifierKey::from_int(3), ModifierKey::Shift);
    }

    #[test]
    fn test_scrollbar_uses_sign() {
        assert_eq!(ScrollbarPosition::from_int(-5), ScrollbarPosition::Left);
        assert_eq!(ScrollbarPosition::from_int(0), ScrollbarPosition::Hidden);
        assert_eq!(ScrollbarPosition::from_int(7), ScrollbarPosition::Right);
    }

    #[test]
    fn test_glass_listed_only_when_available() {
        assert!(!Transparency::all(false).contains(&Transparency::Glass));
        assert!(Transparency::all(true).contains(&Transparency::Glass));
    }

    #[test]
    fn test_tri_state_ints() {
        assert_eq!(TriState::from_int(-1), TriState::Unset);
        assert_eq!(TriState::from_int(0), TriState::Off);
        assert_eq!(TriState::from_int(5), TriState::On);
        assert_eq!(TriState::On.as_int(), 1);
        assert_eq!(TriState::Unset.as_bool(), None);
        assert_eq!(TriState::from(false), TriState::Off);
    }
}
