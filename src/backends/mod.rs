//! Backend variants.
//!
//! One concrete [`Computer`] implementation per automation surface, selected
//! by the environment identifier at session-creation time.

pub mod cdp;
pub mod desktop;
pub mod hosted;

pub use cdp::CdpComputer;
pub use desktop::{DesktopComputer, NativeComputer, DEFAULT_SEARCH_URL};
pub use hosted::HostedSessionComputer;

use crate::computer::Computer;
use crate::config::{Environment, SessionConfig};
use crate::error::Result;

/// Create the backend the configuration asks for.
pub fn create(config: SessionConfig) -> Result<Box<dyn Computer>> {
    match config.environment {
        Environment::Native => Ok(Box::new(NativeComputer::native(&config)?)),
        Environment::RemoteBrowser => Ok(Box::new(CdpComputer::new(config))),
        Environment::RemoteSession => Ok(Box::new(HostedSessionComputer::new(config))),
    }
}
