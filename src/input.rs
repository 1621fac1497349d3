//! Input-event synthesis.
//!
//! `InputSynth` is the seam between the backend's action sequencing and the
//! OS: pointer moves, button transitions, wheel deltas, and key transitions.
//! The production implementation wraps enigo; tests substitute a recorder.
//!
//! Wheel deltas follow the driver-facing convention: vertical `+` scrolls
//! content up, horizontal `+` scrolls content left.

use enigo::{Axis, Button, Coordinate, Direction, Enigo, Key, Keyboard, Mouse, Settings};

use crate::keymap::KeyCode;

/// Mouse button types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    fn to_enigo(self) -> Button {
        match self {
            MouseButton::Left => Button::Left,
            MouseButton::Right => Button::Right,
            MouseButton::Middle => Button::Middle,
        }
    }
}

/// Raw input-event synthesis against the host.
pub trait InputSynth {
    /// Move the pointer to absolute screen coordinates.
    fn move_mouse(&mut self, x: i32, y: i32) -> anyhow::Result<()>;

    /// Press and hold a mouse button at the current pointer position.
    fn button_down(&mut self, button: MouseButton) -> anyhow::Result<()>;

    /// Release a mouse button.
    fn button_up(&mut self, button: MouseButton) -> anyhow::Result<()>;

    /// Synthesize one wheel event with the given pixel deltas.
    fn wheel(&mut self, horizontal: i32, vertical: i32) -> anyhow::Result<()>;

    /// Hold down a key.
    fn key_down(&mut self, key: KeyCode) -> anyhow::Result<()>;

    /// Release a key.
    fn key_up(&mut self, key: KeyCode) -> anyhow::Result<()>;
}

/// Production input synthesis via enigo.
pub struct EnigoInput {
    enigo: Enigo,
}

impl EnigoInput {
    pub fn new() -> anyhow::Result<Self> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| anyhow::anyhow!("Failed to create input controller: {:?}", e))?;
        Ok(Self { enigo })
    }
}

impl InputSynth for EnigoInput {
    fn move_mouse(&mut self, x: i32, y: i32) -> anyhow::Result<()> {
        self.enigo
            .move_mouse(x, y, Coordinate::Abs)
            .map_err(|e| anyhow::anyhow!("Failed to move mouse: {:?}", e))
    }

    fn button_down(&mut self, button: MouseButton) -> anyhow::Result<()> {
        self.enigo
            .button(button.to_enigo(), Direction::Press)
            .map_err(|e| anyhow::anyhow!("Failed to press mouse button: {:?}", e))
    }

    fn button_up(&mut self, button: MouseButton) -> anyhow::Result<()> {
        self.enigo
            .button(button.to_enigo(), Direction::Release)
            .map_err(|e| anyhow::anyhow!("Failed to release mouse button: {:?}", e))
    }

    fn wheel(&mut self, horizontal: i32, vertical: i32) -> anyhow::Result<()> {
        // enigo's positive directions are down/right, the inverse of ours.
        if horizontal != 0 {
            self.enigo
                .scroll(-horizontal, Axis::Horizontal)
                .map_err(|e| anyhow::anyhow!("Failed to scroll horizontal: {:?}", e))?;
        }
        if vertical != 0 {
            self.enigo
                .scroll(-vertical, Axis::Vertical)
                .map_err(|e| anyhow::anyhow!("Failed to scroll vertical: {:?}", e))?;
        }
        Ok(())
    }

    fn key_down(&mut self, key: KeyCode) -> anyhow::Result<()> {
        self.enigo
            .key(to_enigo(key), Direction::Press)
            .map_err(|e| anyhow::anyhow!("Failed to press key down: {:?}", e))
    }

    fn key_up(&mut self, key: KeyCode) -> anyhow::Result<()> {
        self.enigo
            .key(to_enigo(key), Direction::Release)
            .map_err(|e| anyhow::anyhow!("Failed to release key: {:?}", e))
    }
}

fn to_enigo(key: KeyCode) -> Key {
    match key {
        KeyCode::Control => Key::Control,
        KeyCode::Shift => Key::Shift,
        KeyCode::Alt => Key::Alt,
        KeyCode::Meta => Key::Meta,
        KeyCode::Enter => Key::Return,
        KeyCode::Tab => Key::Tab,
        KeyCode::Escape => Key::Escape,
        KeyCode::Space => Key::Space,
        KeyCode::Delete => Key::Delete,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Up => Key::UpArrow,
        KeyCode::Down => Key::DownArrow,
        KeyCode::Left => Key::LeftArrow,
        KeyCode::Right => Key::RightArrow,
        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,
        KeyCode::F5 => Key::F5,
        KeyCode::F6 => Key::F6,
        KeyCode::F7 => Key::F7,
        KeyCode::F8 => Key::F8,
        KeyCode::F9 => Key::F9,
        KeyCode::F10 => Key::F10,
        KeyCode::F11 => Key::F11,
        KeyCode::F12 => Key::F12,
        KeyCode::Char(c) => Key::Unicode(c),
    }
}
