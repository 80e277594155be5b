//! # inboxrank-api
//!
//! Client side of the InboxRank prioritization backend.
//!
//! ## Features
//!
//! - **Wire model**: [`Session`], [`Email`], [`Urgency`] and [`SummaryTally`]
//!   exactly as the backend sends them, with unknown fields preserved
//! - **HTTP client**: [`ApiClient`] for the login, fetch, prioritize, chat
//!   and health endpoints
//! - **Session hand-off**: decoding the `user` query parameter the backend
//!   appends when it redirects back after sign-in, and a local
//!   [`RedirectListener`] that receives that redirect
//!
//! ## Quick Start
//!
//! ```ignore
//! use inboxrank_api::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new("http://localhost:8000")?;
//!
//!     // Open this in a browser to sign in
//!     let login = client.login_url().await?;
//!     println!("Visit: {}", login.authorization_url);
//!
//!     // After the redirect hands back a session
//!     let emails = client.fetch_emails(&session.sub).await?;
//!     let ranked = client.prioritize_emails(&emails).await?;
//!     println!("{} urgent", ranked.summary.unwrap_or_default().red);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
mod error;
pub mod model;
pub mod redirect;
pub mod session;

pub use client::ApiClient;
pub use error::{Error, Result};
pub use model::{
    ChatReply, Email, HealthStatus, LoginResponse, Prioritized, Session, SummaryTally, Urgency,
};
pub use redirect::RedirectListener;
pub use session::{SESSION_PARAM, decode_session, session_from_url, strip_session_param};
