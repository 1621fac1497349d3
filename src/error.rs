use thiserror::Error;

/// Errors surfaced by the automation core.
///
/// The core performs no retries; every failure is returned to the driving
/// loop, which decides whether to retry the action, abort the run, or report
/// to the user.
#[derive(Error, Debug)]
pub enum AutomationError {
    /// Operation invoked on a backend that declares but does not implement it.
    #[error("operation '{operation}' is not supported by the {backend} backend")]
    Unsupported {
        backend: &'static str,
        operation: &'static str,
    },

    /// The display image could not be obtained.
    #[error("screen capture failed: {0}")]
    Capture(String),

    /// A symbolic key name did not resolve to a physical key code.
    #[error("unmapped key name: '{0}'")]
    UnmappedKey(String),

    /// The host's default URL handler refused the hand-off.
    #[error("failed to open '{url}': {source}")]
    Launch {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// Input-event synthesis failed at the OS boundary.
    #[error("input synthesis error: {0}")]
    Input(String),

    /// Session creation was asked for an environment nobody registered.
    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),
}

pub type Result<T> = std::result::Result<T, AutomationError>;
