//! Manual demo driver: stands in for the model-driven control loop.
//!
//! Run with: cargo run --example drive
//!
//! Creates a native desktop session, navigates to a page, scrolls, and prints
//! what the driving loop would see after each action. Requires a display and
//! input-synthesis permissions.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deskdriver::{backends, Environment, ScrollDirection, SessionConfig};

fn main() -> deskdriver::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = SessionConfig::new(Environment::Native, "desktop://local");
    let mut computer = backends::create(config)?;

    let (width, height) = computer.screen_size()?;
    println!("screen: {width}x{height}");

    let obs = computer.navigate("example.com")?;
    println!("{} ({} bytes of PNG)", obs.location, obs.screenshot.len());

    let obs = computer.scroll_document(ScrollDirection::Down)?;
    println!("{} ({} bytes of PNG)", obs.location, obs.screenshot.len());

    let obs = computer.current_state()?;
    println!("{} ({} bytes of PNG)", obs.location, obs.screenshot.len());

    computer.close()
}
