//! Symbolic key-name resolution.
//!
//! Key combinations arrive from the driver as sequences of symbolic names
//! ("cmd", "shift", "enter", "a"). Resolution is pure and case-insensitive;
//! a name nothing maps to is an explicit error rather than a silent no-op,
//! so a mistyped combo never half-fires.

use crate::error::{AutomationError, Result};

/// Physical keys the automation core can synthesize.
///
/// Crate-owned so the synthesis backend stays swappable; conversion to the
/// OS-level key type happens at the input-synthesis edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    // Modifiers
    Control,
    Shift,
    Alt,
    Meta, // Windows key / Command key

    // Editing
    Enter,
    Tab,
    Escape,
    Space,
    Delete,
    Backspace,

    // Navigation
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,

    // Function keys
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,

    /// A plain character key ('a', '[', '1', ...).
    Char(char),
}

impl KeyCode {
    /// Resolve a symbolic key name.
    ///
    /// Named keys are matched case-insensitively; any other single-character
    /// name becomes a character key, which keeps combos like `cmd+a` working.
    pub fn parse(name: &str) -> Result<Self> {
        let key = match name.to_lowercase().as_str() {
            "ctrl" | "control" => KeyCode::Control,
            "shift" => KeyCode::Shift,
            "alt" | "option" => KeyCode::Alt,
            "meta" | "cmd" | "command" => KeyCode::Meta,
            "enter" | "return" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "escape" | "esc" => KeyCode::Escape,
            "space" => KeyCode::Space,
            "delete" => KeyCode::Delete,
            "backspace" => KeyCode::Backspace,
            "pageup" => KeyCode::PageUp,
            "pagedown" => KeyCode::PageDown,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "f1" => KeyCode::F1,
            "f2" => KeyCode::F2,
            "f3" => KeyCode::F3,
            "f4" => KeyCode::F4,
            "f5" => KeyCode::F5,
            "f6" => KeyCode::F6,
            "f7" => KeyCode::F7,
            "f8" => KeyCode::F8,
            "f9" => KeyCode::F9,
            "f10" => KeyCode::F10,
            "f11" => KeyCode::F11,
            "f12" => KeyCode::F12,
            lower => {
                let mut chars = lower.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return Err(AutomationError::UnmappedKey(name.to_string())),
                }
            }
        };
        Ok(key)
    }

    /// Resolve a whole combination up front, so nothing is synthesized if any
    /// name fails to resolve.
    pub fn parse_combination(names: &[String]) -> Result<Vec<Self>> {
        names.iter().map(|n| Self::parse(n)).collect()
    }
}
