//! The seam between the controller and the prioritization backend.

use std::future::Future;

use inboxrank_api::{ApiClient, Email, Prioritized, Result};

/// Calls the controller makes on the outside world.
///
/// Implemented for [`ApiClient`]; tests substitute a recording fake.
pub trait Backend {
    /// Starts a sign-in and returns the authorization URL to open.
    fn login_url(&self) -> impl Future<Output = Result<String>> + Send;

    /// Fetches unread messages for the given subject identifier.
    fn fetch_emails(&self, user_id: &str) -> impl Future<Output = Result<Vec<Email>>> + Send;

    /// Classifies and summarizes the given messages.
    fn prioritize_emails(&self, emails: &[Email])
    -> impl Future<Output = Result<Prioritized>> + Send;
}

impl Backend for ApiClient {
    fn login_url(&self) -> impl Future<Output = Result<String>> + Send {
        async move {
            let response = ApiClient::login_url(self).await?;
            Ok(response.authorization_url)
        }
    }

    fn fetch_emails(&self, user_id: &str) -> impl Future<Output = Result<Vec<Email>>> + Send {
        ApiClient::fetch_emails(self, user_id)
    }

    fn prioritize_emails(
        &self,
        emails: &[Email],
    ) -> impl Future<Output = Result<Prioritized>> + Send {
        ApiClient::prioritize_emails(self, emails)
    }
}
