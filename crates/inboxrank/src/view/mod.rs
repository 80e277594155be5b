//! View components for the application.

mod header;
mod message_list;
mod notice;
mod status;
mod summary;

pub use header::{HeaderOptions, view_header};
pub use message_list::view_message_list;
pub use notice::view_notice;
pub use status::view_status_bar;
pub use summary::view_summary;
