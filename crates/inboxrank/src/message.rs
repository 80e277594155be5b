//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.
//! Backend results carry the [`RequestToken`] of the call that produced
//! them so the view state can drop results that were overtaken.

use std::sync::Arc;

use inboxrank_api::{Email, HealthStatus, Prioritized, RedirectListener};
use inboxrank_core::RequestToken;
use url::Url;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Session
    /// Sign in with Google.
    Login,
    /// Authorization URL received from the backend.
    LoginUrlReceived(RequestToken, Result<String, String>),
    /// Forget the signed-in user.
    Logout,
    /// Redirect listener bound (or failed to).
    ListenerBound(Result<Arc<RedirectListener>, String>),
    /// Browser landed on the redirect listener.
    RedirectReceived(Result<Url, String>),

    // Messages
    /// Fetch unread messages.
    FetchEmails,
    /// Fetch completed.
    EmailsFetched(RequestToken, Result<Vec<Email>, String>),
    /// Send the collection for prioritization.
    Prioritize,
    /// Prioritization completed.
    Prioritized(RequestToken, Result<Prioritized, String>),

    // Notices
    /// Dismiss the current notice.
    DismissNotice,
    /// Desktop notification shown (or failed to).
    NotificationShown(Result<(), String>),

    // Settings
    /// Switch between light and dark mode.
    ToggleTheme,
    /// Turn urgent-mail notifications on or off.
    ToggleNotifyUrgent,
    /// Settings saved.
    SettingsSaved(Result<(), String>),

    // Backend
    /// Re-run the health check.
    CheckHealth,
    /// Health check completed.
    HealthChecked(Result<HealthStatus, String>),

    // Keyboard
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
    /// Event with nothing to do.
    Ignored,
}

/// Keyboard shortcut actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// F5: fetch unread messages.
    Fetch,
    /// Ctrl+P: prioritize.
    Prioritize,
    /// Escape or Enter: dismiss the notice.
    Dismiss,
    /// Ctrl+T: toggle theme.
    ToggleTheme,
}
