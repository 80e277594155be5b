//! # inboxrank-core
//!
//! UI state for the InboxRank client, independent of any GUI toolkit.
//!
//! This crate provides:
//! - **View-state controller** - [`ViewState`] owns the session, the message
//!   list, the busy flag, the summary tally and the current notice; every
//!   mutation goes through one of its operations
//! - **Backend seam** - the [`Backend`] trait the controller drives, implemented
//!   for [`inboxrank_api::ApiClient`]
//! - **Location** - the address the app was reached through, from which a
//!   signed-in session is resumed
//!
//! # Example
//!
//! ```ignore
//! use inboxrank_core::{Location, ViewState};
//!
//! let mut state = ViewState::new();
//! let mut location = Location::parse(launch_url);
//! state.resume_session(&mut location);
//!
//! state.fetch_messages(&client).await;
//! state.prioritize_messages(&client).await;
//! if let Some(tally) = state.summary() {
//!     println!("{} urgent", tally.red);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod backend;
pub mod controller;
mod location;

pub use backend::Backend;
pub use controller::{
    FetchRequest, Notice, Operation, PrioritizeRequest, RequestToken, ViewState, failure_reason,
};
pub use location::Location;

pub use inboxrank_api::{Email, Prioritized, Session, SummaryTally, Urgency};
