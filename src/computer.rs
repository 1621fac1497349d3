use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AutomationError, Result};
use crate::observation::Observation;

/// Scroll direction for document and targeted scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

impl FromStr for ScrollDirection {
    type Err = AutomationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "up" => Ok(ScrollDirection::Up),
            "down" => Ok(ScrollDirection::Down),
            "left" => Ok(ScrollDirection::Left),
            "right" => Ok(ScrollDirection::Right),
            other => Err(AutomationError::Input(format!(
                "unknown scroll direction: {other}"
            ))),
        }
    }
}

/// The capability contract every backend implements.
///
/// One session is exclusively owned by one driver for its whole lifetime;
/// sessions are not shared or pooled, and every call blocks the calling
/// thread for its full settle-and-work duration. Each state-changing
/// operation returns a fresh [`Observation`] taken after the action's settle
/// delay.
///
/// Coordinates are absolute screen pixels bounded by what [`Computer::screen_size`]
/// reports. Correctness additionally assumes no other process injects input
/// concurrently; that is a deployment precondition, not something the core
/// enforces.
pub trait Computer {
    /// Addressable pixel dimensions of the target surface. Pure query, no
    /// observation side effect.
    fn screen_size(&self) -> Result<(u32, u32)>;

    /// Move the pointer to (x, y) and left-click there.
    fn click_at(&mut self, x: i32, y: i32) -> Result<Observation>;

    /// Move the pointer to (x, y) without pressing anything.
    fn hover_at(&mut self, x: i32, y: i32) -> Result<Observation>;

    /// Click (x, y) to focus, optionally clear the field, then type `text`
    /// one character at a time, optionally pressing enter afterwards.
    fn type_text_at(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        press_enter: bool,
        clear_before_typing: bool,
    ) -> Result<Observation>;

    /// Scroll the document from the surface's center point.
    fn scroll_document(&mut self, direction: ScrollDirection) -> Result<Observation>;

    /// Scroll at (x, y) by `magnitude` pixel units in `direction`.
    fn scroll_at(
        &mut self,
        x: i32,
        y: i32,
        direction: ScrollDirection,
        magnitude: i32,
    ) -> Result<Observation>;

    /// Do nothing for the configured explicit wait (5s by default), then
    /// observe. For when the driver expects slow external state changes.
    fn wait_five_seconds(&mut self) -> Result<Observation>;

    /// Platform back shortcut.
    fn go_back(&mut self) -> Result<Observation>;

    /// Platform forward shortcut.
    fn go_forward(&mut self) -> Result<Observation>;

    /// Navigate to the default search engine.
    fn search(&mut self) -> Result<Observation>;

    /// Open `url` with the host's default handler and track it as the
    /// session's location. Schemeless URLs get `https://` prepended.
    fn navigate(&mut self, url: &str) -> Result<Observation>;

    /// Press the named keys in order and release them in reverse order.
    fn key_combination(&mut self, keys: &[String]) -> Result<Observation>;

    /// Press at (x, y), drag to (dest_x, dest_y), release.
    fn drag_and_drop(
        &mut self,
        x: i32,
        y: i32,
        dest_x: i32,
        dest_y: i32,
    ) -> Result<Observation>;

    /// Capture the current screen and pair it with the tracked location,
    /// without acting first.
    fn current_state(&mut self) -> Result<Observation>;

    /// Release backend resources. Safe to call repeatedly.
    fn close(&mut self) -> Result<()>;
}
