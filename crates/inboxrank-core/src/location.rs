//! The address the app was reached through.

use tracing::warn;
use url::Url;

/// Current location of the client.
///
/// Starts as the launch URL (if any) and is later replaced by redirect URLs
/// the listener captures. Replacing never keeps the previous value around:
/// there is no history to navigate back into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    url: Option<Url>,
}

impl Location {
    /// Location with no address.
    #[must_use]
    pub const fn empty() -> Self {
        Self { url: None }
    }

    /// Location at `url`.
    #[must_use]
    pub const fn new(url: Url) -> Self {
        Self { url: Some(url) }
    }

    /// Parses a launch argument; an unparsable one is logged and ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) => Self::new(url),
            Err(e) => {
                warn!("Ignoring unparsable launch location {raw:?}: {e}");
                Self::empty()
            }
        }
    }

    /// Current address.
    #[must_use]
    pub const fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Replaces the address in place.
    pub fn replace(&mut self, url: Url) {
        self.url = Some(url);
    }
}
