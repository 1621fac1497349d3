//! deskdriver - cross-backend device automation for computer-use agents.
//!
//! Exposes a small set of abstract pointer, keyboard, scrolling, and
//! navigation intents, executes them by synthesizing native input events, and
//! returns a post-action observation (PNG screenshot + current location).
//!
//! ## Architecture
//!
//! - [`Computer`] - the capability contract consumed by the driving loop
//! - [`backends`] - interchangeable implementations: native desktop (enigo
//!   input + xcap capture, complete), remote-browser protocol and hosted
//!   remote session (declared stubs that fail fast with typed errors)
//! - [`keymap`] - symbolic key-name resolution
//! - [`input`] / [`screenshot`] / [`launch`] - the native backend's seams to
//!   the host
//!
//! Execution is synchronous and blocking: every capability call holds the
//! calling thread for its full settle-and-work duration, so action ordering
//! is exactly the driver's call order.
//!
//! ## Example
//!
//! ```rust,ignore
//! use deskdriver::{backends, Environment, SessionConfig};
//!
//! let config = SessionConfig::new(Environment::Native, "https://www.google.com");
//! let mut computer = backends::create(config)?;
//!
//! let obs = computer.navigate("example.com")?;
//! let obs = computer.click_at(640, 400)?;
//! println!("{} ({} bytes)", obs.location, obs.screenshot.len());
//!
//! computer.close()?;
//! ```

pub mod backends;
pub mod computer;
pub mod config;
pub mod error;
pub mod input;
pub mod keymap;
pub mod launch;
pub mod observation;
pub mod screenshot;

pub use backends::create;
pub use computer::{Computer, ScrollDirection};
pub use config::{Delays, Environment, SessionConfig};
pub use error::{AutomationError, Result};
pub use keymap::KeyCode;
pub use observation::Observation;
