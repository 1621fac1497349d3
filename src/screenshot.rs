//! Screen capture.
//!
//! `ScreenCapture` is the seam between the backend and the display: it
//! reports the addressable size of the primary monitor and produces a PNG of
//! its contents. The production implementation uses xcap and bounds each
//! capture with a timeout, since a wedged compositor otherwise blocks the
//! whole session forever.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use image::RgbaImage;
use xcap::Monitor;

/// Primary-display capture.
pub trait ScreenCapture {
    /// Addressable pixel dimensions of the primary display.
    fn screen_size(&self) -> anyhow::Result<(u32, u32)>;

    /// Capture the primary display and encode it as PNG.
    fn capture_png(&self) -> anyhow::Result<Vec<u8>>;
}

/// Production capture via xcap.
pub struct XcapCapture {
    capture_timeout: Duration,
}

impl XcapCapture {
    pub fn new(capture_timeout: Duration) -> Self {
        Self { capture_timeout }
    }
}

impl ScreenCapture for XcapCapture {
    fn screen_size(&self) -> anyhow::Result<(u32, u32)> {
        let primary = primary_monitor()?;
        Ok((primary.width(), primary.height()))
    }

    fn capture_png(&self) -> anyhow::Result<Vec<u8>> {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(capture_primary());
        });

        let image = rx
            .recv_timeout(self.capture_timeout)
            .map_err(|_| {
                anyhow::anyhow!(
                    "Screen capture did not complete within {:?}",
                    self.capture_timeout
                )
            })??;

        encode_png(&image)
    }
}

fn primary_monitor() -> anyhow::Result<Monitor> {
    let monitors = Monitor::all().map_err(|e| anyhow::anyhow!("Failed to get monitors: {}", e))?;

    monitors
        .into_iter()
        .find(|m| m.is_primary())
        .ok_or_else(|| anyhow::anyhow!("No primary monitor found"))
}

fn capture_primary() -> anyhow::Result<RgbaImage> {
    primary_monitor()?
        .capture_image()
        .map_err(|e| anyhow::anyhow!("Failed to capture screen: {}", e))
}

fn encode_png(image: &RgbaImage) -> anyhow::Result<Vec<u8>> {
    use image::ImageEncoder;
    use std::io::Cursor;

    let mut buffer = Cursor::new(Vec::new());
    let encoder = image::codecs::png::PngEncoder::new(&mut buffer);
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| anyhow::anyhow!("Failed to encode PNG: {}", e))?;

    Ok(buffer.into_inner())
}
