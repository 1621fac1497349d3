//! Hand-off to the host's default URL handler.
//!
//! Navigation never fetches anything itself; it asks the host to open the URL
//! in whatever is registered for it (usually the default browser).

/// Host default-URL-handler seam.
pub trait UrlOpener {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

/// Opens URLs with the host's default handler.
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> std::io::Result<()> {
        open::that(url)
    }
}

/// Prepend `https://` to schemeless URLs; leave explicit schemes untouched.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}
