//! HTTP client for the prioritization backend.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::model::{
    ChatReply, ChatRequest, ChatResponse, Email, ErrorBody, FetchEmailsRequest,
    FetchEmailsResponse, HealthStatus, LoginResponse, Prioritized, PrioritizeRequest,
    PrioritizeResponse,
};

/// Client for the backend's HTTP endpoints.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http_client: Client,
}

impl ApiClient {
    /// Address the backend listens on by default.
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";

    /// Default per-request timeout. Prioritization makes two model calls per
    /// message, so this is generous.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

    /// Creates a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Self::DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::InvalidConfig(format!(
                "backend URL must be http(s): {base_url}"
            )));
        }
        // Relative joins replace the last path segment unless it ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Asks the backend to start an OAuth flow.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn login_url(&self) -> Result<LoginResponse> {
        let url = self.endpoint("login")?;
        debug!("GET {url}");
        let response = self.http_client.get(url).send().await?;
        read_json(response).await
    }

    /// Fetches the signed-in user's unread messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend reports failure,
    /// or the response is malformed.
    pub async fn fetch_emails(&self, user_id: &str) -> Result<Vec<Email>> {
        let url = self.endpoint("api/fetch-emails")?;
        debug!("POST {url}");
        let response = self
            .http_client
            .post(url)
            .json(&FetchEmailsRequest { user_id })
            .send()
            .await?;

        let body: FetchEmailsResponse = read_json(response).await?;
        if !body.success {
            return Err(Error::Rejected(
                body.message
                    .unwrap_or_else(|| "fetch-emails reported failure".to_string()),
            ));
        }
        debug!("Fetched {} emails", body.emails.len());
        Ok(body.emails)
    }

    /// Sends messages for classification and summarization.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend reports failure,
    /// or the response is malformed.
    pub async fn prioritize_emails(&self, emails: &[Email]) -> Result<Prioritized> {
        let url = self.endpoint("api/prioritize-emails")?;
        debug!("POST {url} ({} emails)", emails.len());
        let response = self
            .http_client
            .post(url)
            .json(&PrioritizeRequest { emails })
            .send()
            .await?;

        let body: PrioritizeResponse = read_json(response).await?;
        if !body.success {
            return Err(Error::Rejected(
                "prioritize-emails reported failure".to_string(),
            ));
        }
        Ok(Prioritized {
            emails: body.emails,
            summary: body.summary,
        })
    }

    /// Asks the backend's general-purpose assistant a question.
    ///
    /// # Errors
    ///
    /// Returns an error if `message` is blank, the request fails, the backend
    /// reports failure, or the response is malformed.
    pub async fn chat(&self, message: &str) -> Result<ChatReply> {
        if message.trim().is_empty() {
            return Err(Error::InvalidConfig("chat message is empty".to_string()));
        }

        let url = self.endpoint("api/chat")?;
        debug!("POST {url}");
        let response = self
            .http_client
            .post(url)
            .json(&ChatRequest { message })
            .send()
            .await?;

        let body: ChatResponse = read_json(response).await?;
        match body.reply {
            Some(reply) if body.success => Ok(ChatReply {
                reply,
                model: body.model,
            }),
            _ => Err(Error::Rejected("chat reported failure".to_string())),
        }
    }

    /// Reads the backend's health report.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint("health")?;
        let response = self.http_client.get(url).send().await?;
        read_json(response).await
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}

/// Decodes a JSON body, turning non-2xx responses into [`Error::Status`].
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        let detail = serde_json::from_str::<ErrorBody>(&text).map_or_else(
            |_| text.trim().to_string(),
            |body| match body.detail {
                Value::String(s) => s,
                other => other.to_string(),
            },
        );
        return Err(Error::status(status.as_u16(), detail));
    }

    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new(ApiClient::DEFAULT_BASE_URL).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_endpoints_keep_base_path() {
        let client = ApiClient::new("https://example.com/triage").unwrap();
        assert_eq!(
            client.endpoint("api/fetch-emails").unwrap().as_str(),
            "https://example.com/triage/api/fetch-emails"
        );
        assert_eq!(
            client.endpoint("login").unwrap().as_str(),
            "https://example.com/triage/login"
        );
    }

    #[test]
    fn test_rejects_non_http_base() {
        assert!(matches!(
            ApiClient::new("mailto:someone@example.com"),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(ApiClient::new("not a url"), Err(Error::Url(_))));
    }
}
