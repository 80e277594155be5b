//! Tokens and payloads for in-flight backend calls.

use inboxrank_api::Email;

/// Backend operation a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// login-initiate
    Login,
    /// fetch-emails
    Fetch,
    /// prioritize-emails
    Prioritize,
}

/// Identifies one begun backend call.
///
/// Only the most recently begun request of each [`Operation`] is current,
/// and beginning a fetch or changing session retires the others too.
/// Results for a token that is no longer current are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken {
    operation: Operation,
    generation: u64,
}

impl RequestToken {
    pub(crate) const fn new(operation: Operation, generation: u64) -> Self {
        Self {
            operation,
            generation,
        }
    }

    /// Operation this token was issued for.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }
}

/// A fetch the caller should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Token to hand back with the result.
    pub token: RequestToken,
    /// Subject identifier of the signed-in user.
    pub user_id: String,
}

/// A prioritization the caller should run.
#[derive(Debug, Clone, PartialEq)]
pub struct PrioritizeRequest {
    /// Token to hand back with the result.
    pub token: RequestToken,
    /// Snapshot of the message collection to send.
    pub emails: Vec<Email>,
}
