//! Data models for the desktop client.

mod display;
mod settings;
mod status;

pub use display::{format_date_local, initials, truncate, urgency_marker};
pub use settings::{AppSettings, Overrides, load_settings, save_settings};
pub use status::BackendStatus;
