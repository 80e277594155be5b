//! User-visible notices.

use std::fmt;

/// A blocking notice shown to the user until dismissed.
///
/// Notices carry no error detail; the cause is logged instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Fetch was requested while signed out.
    LoginRequired,
    /// The backend could not start a sign-in.
    LoginFailed,
    /// Fetch succeeded but there was nothing unread.
    NoUnread,
    /// Fetch failed.
    FetchFailed,
    /// Prioritize was requested with no messages loaded.
    NothingToPrioritize,
    /// Prioritize was requested while one is already running.
    AlreadyPrioritizing,
    /// Prioritize failed.
    PrioritizeFailed,
}

impl Notice {
    /// Text shown to the user.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::LoginRequired => "Please login first",
            Self::LoginFailed => "Failed to initiate login",
            Self::NoUnread => "No unread emails found",
            Self::FetchFailed => "Failed to fetch emails. Please try logging in again.",
            Self::NothingToPrioritize => "Please fetch emails first",
            Self::AlreadyPrioritizing => "Prioritization is already in progress",
            Self::PrioritizeFailed => "Failed to prioritize emails",
        }
    }

    /// Returns true if the notice reports a failed backend call.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::LoginFailed | Self::FetchFailed | Self::PrioritizeFailed
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
