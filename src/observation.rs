use base64::Engine;

/// What the driver sees after every action: the screen as it looks once the
/// action has been given its settle delay, plus the session's tracked
/// location (a URL or pseudo-URI such as `desktop://local`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// PNG-encoded image of the primary display.
    pub screenshot: Vec<u8>,
    /// Current page/URL/pseudo-URI of the session.
    pub location: String,
}

impl Observation {
    pub fn new(screenshot: Vec<u8>, location: impl Into<String>) -> Self {
        Self {
            screenshot,
            location: location.into(),
        }
    }

    /// Screenshot as base64 PNG, the transport form model providers expect.
    pub fn screenshot_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.screenshot)
    }
}
