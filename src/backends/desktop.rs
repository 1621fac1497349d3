//! Native desktop backend.
//!
//! Implements the capability contract against the local desktop: pointer and
//! keyboard events are synthesized at the OS level, the primary display is
//! read back after each action, and navigation is handed to the host's
//! default URL handler.
//!
//! The backend is generic over its three seams (input synthesis, screen
//! capture, URL opening) so the action sequencing is testable without a
//! display server; `NativeComputer` wires in the production implementations.

use std::thread;

use crate::computer::{Computer, ScrollDirection};
use crate::config::{Delays, SessionConfig};
use crate::error::{AutomationError, Result};
use crate::input::{EnigoInput, InputSynth, MouseButton};
use crate::keymap::KeyCode;
use crate::launch::{normalize_url, SystemOpener, UrlOpener};
use crate::observation::Observation;
use crate::screenshot::{ScreenCapture, XcapCapture};

/// Where `search` lands.
pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com";

/// Scroll magnitude used by document-level scrolling.
const DOCUMENT_SCROLL_MAGNITUDE: i32 = 600;

/// Desktop automation session.
///
/// Exclusively owned by one driver for its whole lifetime. `close` is
/// idempotent and also runs on drop, so release happens on all exit paths.
pub struct DesktopComputer<I, C, U> {
    input: I,
    capture: C,
    opener: U,
    location: String,
    delays: Delays,
    closed: bool,
}

/// The production desktop backend: enigo input, xcap capture, host URL-open.
pub type NativeComputer = DesktopComputer<EnigoInput, XcapCapture, SystemOpener>;

impl NativeComputer {
    pub fn native(config: &SessionConfig) -> Result<Self> {
        let input = EnigoInput::new().map_err(|e| AutomationError::Input(e.to_string()))?;
        let capture = XcapCapture::new(config.delays.capture_timeout);

        tracing::info!(
            initial_location = %config.initial_location,
            highlight_mouse = config.highlight_mouse,
            "created native desktop session"
        );
        if config.highlight_mouse {
            tracing::warn!("mouse highlighting is not implemented on the native backend");
        }

        Ok(Self::with_parts(input, capture, SystemOpener, config))
    }
}

impl<I: InputSynth, C: ScreenCapture, U: UrlOpener> DesktopComputer<I, C, U> {
    /// Assemble a session from explicit seams. Production code goes through
    /// [`NativeComputer::native`]; tests substitute recorders here.
    pub fn with_parts(input: I, capture: C, opener: U, config: &SessionConfig) -> Self {
        Self {
            input,
            capture,
            opener,
            location: config.initial_location.clone(),
            delays: config.delays.clone(),
            closed: false,
        }
    }

    fn settle(&self) {
        thread::sleep(self.delays.settle);
    }

    /// Capture the display and pair it with the tracked location.
    fn observe(&self) -> Result<Observation> {
        let png = self
            .capture
            .capture_png()
            .map_err(|e| AutomationError::Capture(e.to_string()))?;
        Ok(Observation::new(png, self.location.clone()))
    }

    fn input_err(e: anyhow::Error) -> AutomationError {
        AutomationError::Input(e.to_string())
    }

    fn move_mouse(&mut self, x: i32, y: i32) -> Result<()> {
        self.input.move_mouse(x, y).map_err(Self::input_err)
    }

    fn left_click(&mut self) -> Result<()> {
        self.input
            .button_down(MouseButton::Left)
            .map_err(Self::input_err)?;
        self.input
            .button_up(MouseButton::Left)
            .map_err(Self::input_err)
    }

    /// Key-downs in the given order, key-ups in reverse, so modifiers wrap
    /// the main key the way a physical combo does.
    fn press_keys(&mut self, keys: &[KeyCode]) -> Result<()> {
        for key in keys {
            self.input.key_down(*key).map_err(Self::input_err)?;
        }
        for key in keys.iter().rev() {
            self.input.key_up(*key).map_err(Self::input_err)?;
        }
        Ok(())
    }

    fn tap_char(&mut self, c: char) -> Result<()> {
        self.input
            .key_down(KeyCode::Char(c))
            .map_err(Self::input_err)?;
        self.input
            .key_up(KeyCode::Char(c))
            .map_err(Self::input_err)
    }
}

/// The select-all / shortcut modifier on this platform.
fn primary_modifier() -> KeyCode {
    if cfg!(target_os = "macos") {
        KeyCode::Meta
    } else {
        KeyCode::Control
    }
}

fn back_shortcut() -> [KeyCode; 2] {
    if cfg!(target_os = "macos") {
        [KeyCode::Meta, KeyCode::Char('[')]
    } else {
        [KeyCode::Alt, KeyCode::Left]
    }
}

fn forward_shortcut() -> [KeyCode; 2] {
    if cfg!(target_os = "macos") {
        [KeyCode::Meta, KeyCode::Char(']')]
    } else {
        [KeyCode::Alt, KeyCode::Right]
    }
}

/// Wheel deltas for one scroll event: positive vertical scrolls content up,
/// positive horizontal scrolls content left.
fn wheel_deltas(direction: ScrollDirection, magnitude: i32) -> (i32, i32) {
    match direction {
        ScrollDirection::Up => (0, magnitude),
        ScrollDirection::Down => (0, -magnitude),
        ScrollDirection::Left => (magnitude, 0),
        ScrollDirection::Right => (-magnitude, 0),
    }
}

impl<I: InputSynth, C: ScreenCapture, U: UrlOpener> Computer for DesktopComputer<I, C, U> {
    fn screen_size(&self) -> Result<(u32, u32)> {
        self.capture
            .screen_size()
            .map_err(|e| AutomationError::Capture(e.to_string()))
    }

    fn click_at(&mut self, x: i32, y: i32) -> Result<Observation> {
        tracing::debug!(x, y, "click");
        self.move_mouse(x, y)?;
        self.left_click()?;
        self.settle();
        self.observe()
    }

    fn hover_at(&mut self, x: i32, y: i32) -> Result<Observation> {
        tracing::debug!(x, y, "hover");
        self.move_mouse(x, y)?;
        self.settle();
        self.observe()
    }

    fn type_text_at(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        press_enter: bool,
        clear_before_typing: bool,
    ) -> Result<Observation> {
        tracing::debug!(x, y, chars = text.chars().count(), press_enter, "type text");
        self.move_mouse(x, y)?;
        self.left_click()?;
        self.settle();

        if clear_before_typing {
            self.press_keys(&[primary_modifier(), KeyCode::Char('a')])?;
            self.press_keys(&[KeyCode::Delete])?;
            self.settle();
        }

        for c in text.chars() {
            self.tap_char(c)?;
            thread::sleep(self.delays.inter_char);
        }

        if press_enter {
            self.press_keys(&[KeyCode::Enter])?;
            self.settle();
        }

        self.observe()
    }

    fn scroll_document(&mut self, direction: ScrollDirection) -> Result<Observation> {
        let (width, height) = self.screen_size()?;
        self.scroll_at(
            width as i32 / 2,
            height as i32 / 2,
            direction,
            DOCUMENT_SCROLL_MAGNITUDE,
        )
    }

    fn scroll_at(
        &mut self,
        x: i32,
        y: i32,
        direction: ScrollDirection,
        magnitude: i32,
    ) -> Result<Observation> {
        tracing::debug!(x, y, ?direction, magnitude, "scroll");
        self.move_mouse(x, y)?;
        let (horizontal, vertical) = wheel_deltas(direction, magnitude);
        self.input
            .wheel(horizontal, vertical)
            .map_err(Self::input_err)?;
        self.settle();
        self.observe()
    }

    fn wait_five_seconds(&mut self) -> Result<Observation> {
        tracing::debug!(wait = ?self.delays.explicit_wait, "explicit wait");
        thread::sleep(self.delays.explicit_wait);
        self.observe()
    }

    fn go_back(&mut self) -> Result<Observation> {
        tracing::debug!("go back");
        self.press_keys(&back_shortcut())?;
        self.settle();
        self.observe()
    }

    fn go_forward(&mut self) -> Result<Observation> {
        tracing::debug!("go forward");
        self.press_keys(&forward_shortcut())?;
        self.settle();
        self.observe()
    }

    fn search(&mut self) -> Result<Observation> {
        self.navigate(DEFAULT_SEARCH_URL)
    }

    fn navigate(&mut self, url: &str) -> Result<Observation> {
        let url = normalize_url(url);
        tracing::info!(%url, "navigate");

        self.opener
            .open(&url)
            .map_err(|source| AutomationError::Launch {
                url: url.clone(),
                source,
            })?;

        self.location = url;
        thread::sleep(self.delays.post_navigate);
        self.observe()
    }

    fn key_combination(&mut self, keys: &[String]) -> Result<Observation> {
        // Resolve everything first so a bad name never emits a partial combo.
        let resolved = KeyCode::parse_combination(keys)?;
        tracing::debug!(?resolved, "key combination");
        self.press_keys(&resolved)?;
        self.settle();
        self.observe()
    }

    fn drag_and_drop(
        &mut self,
        x: i32,
        y: i32,
        dest_x: i32,
        dest_y: i32,
    ) -> Result<Observation> {
        tracing::debug!(x, y, dest_x, dest_y, "drag and drop");
        self.move_mouse(x, y)?;
        self.input
            .button_down(MouseButton::Left)
            .map_err(Self::input_err)?;
        self.settle();
        self.move_mouse(dest_x, dest_y)?;
        self.input
            .button_up(MouseButton::Left)
            .map_err(Self::input_err)?;
        self.settle();
        self.observe()
    }

    fn current_state(&mut self) -> Result<Observation> {
        self.observe()
    }

    fn close(&mut self) -> Result<()> {
        if !self.closed {
            self.closed = true;
            tracing::debug!("desktop session closed");
        }
        Ok(())
    }
}

impl<I, C, U> Drop for DesktopComputer<I, C, U> {
    fn drop(&mut self) {
        if !self.closed {
            self.closed = true;
            tracing::debug!("desktop session closed on drop");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::config::Environment;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Move(i32, i32),
        ButtonDown(MouseButton),
        ButtonUp(MouseButton),
        Wheel(i32, i32),
        KeyDown(KeyCode),
        KeyUp(KeyCode),
        Open(String),
    }

    type EventLog = Rc<RefCell<Vec<Event>>>;

    struct RecordingInput(EventLog);

    impl InputSynth for RecordingInput {
        fn move_mouse(&mut self, x: i32, y: i32) -> anyhow::Result<()> {
            self.0.borrow_mut().push(Event::Move(x, y));
            Ok(())
        }
        fn button_down(&mut self, button: MouseButton) -> anyhow::Result<()> {
            self.0.borrow_mut().push(Event::ButtonDown(button));
            Ok(())
        }
        fn button_up(&mut self, button: MouseButton) -> anyhow::Result<()> {
            self.0.borrow_mut().push(Event::ButtonUp(button));
            Ok(())
        }
        fn wheel(&mut self, horizontal: i32, vertical: i32) -> anyhow::Result<()> {
            self.0.borrow_mut().push(Event::Wheel(horizontal, vertical));
            Ok(())
        }
        fn key_down(&mut self, key: KeyCode) -> anyhow::Result<()> {
            self.0.borrow_mut().push(Event::KeyDown(key));
            Ok(())
        }
        fn key_up(&mut self, key: KeyCode) -> anyhow::Result<()> {
            self.0.borrow_mut().push(Event::KeyUp(key));
            Ok(())
        }
    }

    struct FakeCapture;

    impl ScreenCapture for FakeCapture {
        fn screen_size(&self) -> anyhow::Result<(u32, u32)> {
            Ok((1920, 1080))
        }
        fn capture_png(&self) -> anyhow::Result<Vec<u8>> {
            Ok(vec![0x89, 0x50, 0x4e, 0x47])
        }
    }

    struct FailingCapture;

    impl ScreenCapture for FailingCapture {
        fn screen_size(&self) -> anyhow::Result<(u32, u32)> {
            Err(anyhow::anyhow!("no display"))
        }
        fn capture_png(&self) -> anyhow::Result<Vec<u8>> {
            Err(anyhow::anyhow!("no display"))
        }
    }

    struct RecordingOpener(EventLog);

    impl UrlOpener for RecordingOpener {
        fn open(&self, url: &str) -> std::io::Result<()> {
            self.0.borrow_mut().push(Event::Open(url.to_string()));
            Ok(())
        }
    }

    struct FailingOpener;

    impl UrlOpener for FailingOpener {
        fn open(&self, _url: &str) -> std::io::Result<()> {
            Err(std::io::Error::other("no URL handler registered"))
        }
    }

    fn test_config() -> SessionConfig {
        let mut config = SessionConfig::new(Environment::Native, "desktop://local");
        config.delays = Delays::none();
        config
    }

    fn session() -> (
        DesktopComputer<RecordingInput, FakeCapture, RecordingOpener>,
        EventLog,
    ) {
        let log: EventLog = Rc::new(RefCell::new(Vec::new()));
        let computer = DesktopComputer::with_parts(
            RecordingInput(Rc::clone(&log)),
            FakeCapture,
            RecordingOpener(Rc::clone(&log)),
            &test_config(),
        );
        (computer, log)
    }

    #[test]
    fn test_click_sequences_move_press_release() {
        let (mut computer, log) = session();
        let obs = computer.click_at(10, 20).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                Event::Move(10, 20),
                Event::ButtonDown(MouseButton::Left),
                Event::ButtonUp(MouseButton::Left),
            ]
        );
        assert_eq!(obs.location, "desktop://local");
        assert!(!obs.screenshot.is_empty());
    }

    #[test]
    fn test_hover_moves_without_pressing() {
        let (mut computer, log) = session();
        computer.hover_at(5, 6).unwrap();
        assert_eq!(*log.borrow(), vec![Event::Move(5, 6)]);
    }

    #[test]
    fn test_non_navigating_actions_keep_location() {
        let (mut computer, _log) = session();
        let before = "desktop://local".to_string();

        assert_eq!(computer.click_at(1, 1).unwrap().location, before);
        assert_eq!(computer.hover_at(2, 2).unwrap().location, before);
        assert_eq!(
            computer.scroll_at(3, 3, ScrollDirection::Down, 100).unwrap().location,
            before
        );
        assert_eq!(computer.drag_and_drop(0, 0, 9, 9).unwrap().location, before);
        assert_eq!(computer.wait_five_seconds().unwrap().location, before);
        assert_eq!(
            computer
                .key_combination(&["ctrl".to_string(), "c".to_string()])
                .unwrap()
                .location,
            before
        );
        assert_eq!(computer.current_state().unwrap().location, before);
    }

    #[test]
    fn test_key_combination_presses_in_order_releases_reversed() {
        let (mut computer, log) = session();
        computer
            .key_combination(&["cmd".to_string(), "a".to_string()])
            .unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                Event::KeyDown(KeyCode::Meta),
                Event::KeyDown(KeyCode::Char('a')),
                Event::KeyUp(KeyCode::Char('a')),
                Event::KeyUp(KeyCode::Meta),
            ]
        );
    }

    #[test]
    fn test_key_combination_rejects_unmapped_names_before_synthesis() {
        let (mut computer, log) = session();
        let err = computer
            .key_combination(&["cmd".to_string(), "bogus".to_string()])
            .unwrap_err();

        assert!(matches!(err, AutomationError::UnmappedKey(_)));
        assert!(log.borrow().is_empty(), "no events before resolution fails");
    }

    #[test]
    fn test_scroll_down_is_negative_vertical() {
        let (mut computer, log) = session();
        computer.scroll_at(40, 50, ScrollDirection::Down, 600).unwrap();
        assert_eq!(
            *log.borrow(),
            vec![Event::Move(40, 50), Event::Wheel(0, -600)]
        );
    }

    #[test]
    fn test_scroll_left_is_positive_horizontal() {
        let (mut computer, log) = session();
        computer.scroll_at(40, 50, ScrollDirection::Left, 600).unwrap();
        assert_eq!(
            *log.borrow(),
            vec![Event::Move(40, 50), Event::Wheel(600, 0)]
        );
    }

    #[test]
    fn test_scroll_document_targets_screen_center() {
        let (mut computer, log) = session();
        computer.scroll_document(ScrollDirection::Up).unwrap();
        assert_eq!(
            *log.borrow(),
            vec![Event::Move(960, 540), Event::Wheel(0, 600)]
        );
    }

    #[test]
    fn test_type_text_clears_before_typing() {
        let (mut computer, log) = session();
        computer.type_text_at(7, 8, "hi", false, true).unwrap();

        let modifier = primary_modifier();
        assert_eq!(
            *log.borrow(),
            vec![
                Event::Move(7, 8),
                Event::ButtonDown(MouseButton::Left),
                Event::ButtonUp(MouseButton::Left),
                // select-all, then delete, before any text characters
                Event::KeyDown(modifier),
                Event::KeyDown(KeyCode::Char('a')),
                Event::KeyUp(KeyCode::Char('a')),
                Event::KeyUp(modifier),
                Event::KeyDown(KeyCode::Delete),
                Event::KeyUp(KeyCode::Delete),
                Event::KeyDown(KeyCode::Char('h')),
                Event::KeyUp(KeyCode::Char('h')),
                Event::KeyDown(KeyCode::Char('i')),
                Event::KeyUp(KeyCode::Char('i')),
            ]
        );
    }

    #[test]
    fn test_type_text_press_enter_appends_enter_combo() {
        let (mut computer, log) = session();
        computer.type_text_at(0, 0, "x", true, false).unwrap();

        let events = log.borrow();
        let tail = &events[events.len() - 2..];
        assert_eq!(
            tail,
            &[Event::KeyDown(KeyCode::Enter), Event::KeyUp(KeyCode::Enter)]
        );
    }

    #[test]
    fn test_drag_and_drop_sequence() {
        let (mut computer, log) = session();
        computer.drag_and_drop(1, 2, 30, 40).unwrap();
        assert_eq!(
            *log.borrow(),
            vec![
                Event::Move(1, 2),
                Event::ButtonDown(MouseButton::Left),
                Event::Move(30, 40),
                Event::ButtonUp(MouseButton::Left),
            ]
        );
    }

    #[test]
    fn test_navigate_normalizes_and_tracks_location() {
        let (mut computer, log) = session();
        let obs = computer.navigate("example.com").unwrap();

        assert_eq!(obs.location, "https://example.com");
        assert_eq!(
            *log.borrow(),
            vec![Event::Open("https://example.com".to_string())]
        );
    }

    #[test]
    fn test_navigate_keeps_explicit_scheme() {
        let (mut computer, _log) = session();
        let obs = computer.navigate("http://x.com").unwrap();
        assert_eq!(obs.location, "http://x.com");
    }

    #[test]
    fn test_search_navigates_to_default_engine() {
        let (mut computer, log) = session();
        let obs = computer.search().unwrap();
        assert_eq!(obs.location, DEFAULT_SEARCH_URL);
        assert_eq!(
            *log.borrow(),
            vec![Event::Open(DEFAULT_SEARCH_URL.to_string())]
        );
    }

    #[test]
    fn test_launch_failure_surfaces_and_location_unchanged() {
        let mut computer = DesktopComputer::with_parts(
            RecordingInput(Rc::new(RefCell::new(Vec::new()))),
            FakeCapture,
            FailingOpener,
            &test_config(),
        );

        let err = computer.navigate("example.com").unwrap_err();
        assert!(matches!(err, AutomationError::Launch { ref url, .. } if url == "https://example.com"));
        assert_eq!(computer.current_state().unwrap().location, "desktop://local");
    }

    #[test]
    fn test_capture_failure_is_typed() {
        let mut computer = DesktopComputer::with_parts(
            RecordingInput(Rc::new(RefCell::new(Vec::new()))),
            FailingCapture,
            FailingOpener,
            &test_config(),
        );

        assert!(matches!(
            computer.current_state().unwrap_err(),
            AutomationError::Capture(_)
        ));
        assert!(matches!(
            computer.screen_size().unwrap_err(),
            AutomationError::Capture(_)
        ));
    }

    #[test]
    fn test_close_is_idempotent() {
        let (mut computer, _log) = session();
        computer.close().unwrap();
        computer.close().unwrap();
    }
}
