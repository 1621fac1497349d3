use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AutomationError;

/// Which automation surface a session targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Environment {
    /// Local desktop via OS-level input synthesis and framebuffer capture.
    Native,
    /// Remote browser driven over a devtools-style protocol. Declared, stub.
    RemoteBrowser,
    /// Hosted browser session provider. Declared, stub.
    RemoteSession,
}

impl FromStr for Environment {
    type Err = AutomationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" | "desktop" => Ok(Environment::Native),
            "remote-browser" | "cdp" => Ok(Environment::RemoteBrowser),
            "remote-session" | "hosted" => Ok(Environment::RemoteSession),
            other => Err(AutomationError::UnknownEnvironment(other.to_string())),
        }
    }
}

/// Settle and pacing delays applied around synthesized input.
///
/// These are observable timing behavior, so they are configuration rather
/// than constants buried in the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delays {
    /// Generic settle after a state-changing action, before capture.
    pub settle: Duration,
    /// Pause between individual typed characters.
    pub inter_char: Duration,
    /// Wait after handing a URL to the host, to let the page load.
    pub post_navigate: Duration,
    /// Duration of the explicit wait action.
    pub explicit_wait: Duration,
    /// Upper bound on a single screen capture.
    pub capture_timeout: Duration,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(500),
            inter_char: Duration::from_millis(10),
            post_navigate: Duration::from_secs(2),
            explicit_wait: Duration::from_secs(5),
            capture_timeout: Duration::from_secs(10),
        }
    }
}

impl Delays {
    /// All-zero delays, for tests that assert sequencing rather than timing.
    pub fn none() -> Self {
        Self {
            settle: Duration::ZERO,
            inter_char: Duration::ZERO,
            post_navigate: Duration::ZERO,
            explicit_wait: Duration::ZERO,
            capture_timeout: Duration::from_secs(10),
        }
    }
}

/// Everything a driver supplies when it creates a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub environment: Environment,
    /// Location the session reports until the first navigation.
    pub initial_location: String,
    /// Highlight the pointer while acting. Accepted for wire compatibility;
    /// the native backend currently ignores it.
    pub highlight_mouse: bool,
    /// Model identifier, passed through for the driver's bookkeeping.
    pub model: Option<String>,
    pub delays: Delays,
}

impl SessionConfig {
    pub fn new(environment: Environment, initial_location: impl Into<String>) -> Self {
        Self {
            environment,
            initial_location: initial_location.into(),
            highlight_mouse: false,
            model: None,
            delays: Delays::default(),
        }
    }
}
