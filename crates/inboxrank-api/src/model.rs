//! Wire model shared with the prioritization backend.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Identity of the signed-in user, as handed back after the OAuth callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Subject identifier; the backend keys its credential store on it.
    pub sub: String,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Email address.
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl Session {
    /// Name to show in the header, falling back to the address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Urgency classification attached by the prioritization service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Needs attention now.
    Red,
    /// Should be looked at soon.
    Yellow,
    /// Informational.
    Green,
}

impl Urgency {
    /// All classifications, most urgent first.
    pub const ALL: [Self; 3] = [Self::Red, Self::Yellow, Self::Green];

    /// Parses either wire spelling (`red` or `RED`).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "red" => Some(Self::Red),
            "yellow" => Some(Self::Yellow),
            "green" => Some(Self::Green),
            _ => None,
        }
    }

    /// Lower-case wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }

    /// Badge label for a single message.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Red => "URGENT",
            Self::Yellow => "LESS URGENT",
            Self::Green => "NON-URGENT",
        }
    }

    /// Heading used in the summary tally.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Red => "Urgent",
            Self::Yellow => "Less Urgent",
            Self::Green => "Non-Urgent",
        }
    }
}

impl<'de> Deserialize<'de> for Urgency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| {
            serde::de::Error::unknown_variant(&s, &["red", "yellow", "green"])
        })
    }
}

/// One retrieved mail item.
///
/// Fields the client does not model are kept in `extra` so the collection
/// can be posted back to the prioritize endpoint unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Email {
    /// Provider message id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Subject line.
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,
    /// Sender, usually `Name <address>`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub from: String,
    /// Date header as sent.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    /// Short preview.
    #[serde(default, deserialize_with = "null_as_default")]
    pub snippet: String,
    /// Body text the backend feeds the model (truncated server side).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_content: Option<String>,
    /// Upper-case label (`RED`, ...) as produced by the classifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
    /// Classification used for display.
    #[serde(
        default,
        deserialize_with = "lenient_urgency",
        skip_serializing_if = "Option::is_none"
    )]
    pub urgency_color: Option<Urgency>,
    /// AI-generated summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Anything else the backend attached.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Email {
    /// Classification of this message, if it has been prioritized.
    #[must_use]
    pub fn classification(&self) -> Option<Urgency> {
        self.urgency_color
            .or_else(|| self.urgency.as_deref().and_then(Urgency::parse))
    }

    /// Text to show under the headers: the summary when present, else the snippet.
    #[must_use]
    pub fn preview(&self) -> &str {
        self.summary
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.snippet)
    }
}

/// Per-classification message counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummaryTally {
    /// Urgent messages.
    #[serde(default)]
    pub red: u32,
    /// Less urgent messages.
    #[serde(default)]
    pub yellow: u32,
    /// Non-urgent messages.
    #[serde(default)]
    pub green: u32,
}

impl SummaryTally {
    /// Count for one classification.
    #[must_use]
    pub const fn count(&self, urgency: Urgency) -> u32 {
        match urgency {
            Urgency::Red => self.red,
            Urgency::Yellow => self.yellow,
            Urgency::Green => self.green,
        }
    }

    /// Number of classified messages.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.red + self.yellow + self.green
    }
}

/// Response of the login-initiation endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Provider consent page to open in a browser.
    pub authorization_url: String,
    /// CSRF state the backend generated.
    #[serde(default)]
    pub state: Option<String>,
}

/// Result of a successful prioritization.
#[derive(Debug, Clone, PartialEq)]
pub struct Prioritized {
    /// Annotated messages, most urgent first.
    pub emails: Vec<Email>,
    /// Counts per classification.
    pub summary: Option<SummaryTally>,
}

/// Reply from the free-form assistant endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// Assistant's answer.
    pub reply: String,
    /// Model that produced it, when the backend says.
    pub model: Option<String>,
}

/// Backend health report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct HealthStatus {
    /// Overall status, `healthy` when up.
    #[serde(default)]
    pub status: String,
    /// Whether OAuth client credentials are configured.
    #[serde(default)]
    pub google_oauth: String,
    /// Whether the model API key is configured.
    #[serde(default)]
    pub openai: String,
}

impl HealthStatus {
    /// Returns true when the backend is up and both integrations are configured.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.status == "healthy" && self.google_oauth == "configured" && self.openai == "configured"
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct FetchEmailsRequest<'a> {
    pub user_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FetchEmailsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub emails: Vec<Email>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PrioritizeRequest<'a> {
    pub emails: &'a [Email],
}

#[derive(Debug, Deserialize)]
pub(crate) struct PrioritizeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub emails: Vec<Email>,
    #[serde(default)]
    pub summary: Option<SummaryTally>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

/// FastAPI error body.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: Value,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Unknown classifications are treated as unclassified rather than failing the whole list.
fn lenient_urgency<'de, D>(deserializer: D) -> Result<Option<Urgency>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Urgency::parse))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_urgency_parse_both_spellings() {
        for urgency in Urgency::ALL {
            assert_eq!(Urgency::parse(urgency.as_str()), Some(urgency));
            assert_eq!(
                Urgency::parse(&urgency.as_str().to_uppercase()),
                Some(urgency)
            );
        }
        assert_eq!(Urgency::parse("blue"), None);
    }

    #[test]
    fn test_urgency_order_is_most_urgent_first() {
        assert!(Urgency::Red < Urgency::Yellow);
        assert!(Urgency::Yellow < Urgency::Green);
    }

    #[test]
    fn test_session_tolerates_null_identity_fields() {
        let session: Session = serde_json::from_value(json!({
            "sub": "1234",
            "name": null,
            "email": "a@example.com",
            "picture": null
        }))
        .unwrap();

        assert_eq!(session.sub, "1234");
        assert_eq!(session.name, "");
        assert_eq!(session.display_name(), "a@example.com");
        assert!(session.picture.is_none());
    }

    #[test]
    fn test_session_requires_subject() {
        let result: Result<Session, _> = serde_json::from_value(json!({ "name": "Ann" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_email_from_fetch_payload() {
        let email: Email = serde_json::from_value(json!({
            "id": "18c",
            "subject": "Invoice overdue",
            "from": "Billing <billing@example.com>",
            "date": "Thu, 15 Jan 2026 19:31:43 +0000",
            "snippet": "Your invoice",
            "full_content": "Your invoice is overdue."
        }))
        .unwrap();

        assert_eq!(email.id.as_deref(), Some("18c"));
        assert_eq!(email.classification(), None);
        assert_eq!(email.preview(), "Your invoice");
        assert!(email.extra.is_empty());
    }

    #[test]
    fn test_email_from_prioritize_payload() {
        let email: Email = serde_json::from_value(json!({
            "subject": "Weekly digest",
            "from": "news@example.com",
            "date": "Mon",
            "snippet": "This week",
            "urgency": "GREEN",
            "urgency_color": "green",
            "summary": "A newsletter."
        }))
        .unwrap();

        assert_eq!(email.classification(), Some(Urgency::Green));
        assert_eq!(email.preview(), "A newsletter.");
    }

    #[test]
    fn test_email_classification_falls_back_to_label() {
        let email = Email {
            urgency: Some("RED".into()),
            ..Email::default()
        };
        assert_eq!(email.classification(), Some(Urgency::Red));
    }

    #[test]
    fn test_email_unknown_color_is_unclassified() {
        let email: Email =
            serde_json::from_value(json!({ "subject": "x", "urgency_color": "purple" })).unwrap();
        assert_eq!(email.urgency_color, None);
    }

    #[test]
    fn test_email_preserves_unknown_fields() {
        let original = json!({
            "subject": "Hello",
            "from": "a@example.com",
            "date": "today",
            "snippet": "hi",
            "thread_id": "t-9",
            "labels": ["INBOX", "UNREAD"]
        });
        let email: Email = serde_json::from_value(original.clone()).unwrap();
        assert_eq!(email.extra.get("thread_id"), Some(&json!("t-9")));

        let back = serde_json::to_value(&email).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_summary_tally_totals() {
        let tally = SummaryTally {
            red: 2,
            yellow: 1,
            green: 4,
        };
        assert_eq!(tally.total(), 7);
        assert_eq!(tally.count(Urgency::Red), 2);
        assert_eq!(tally.count(Urgency::Green), 4);
    }

    #[test]
    fn test_health_readiness() {
        let health: HealthStatus = serde_json::from_value(json!({
            "status": "healthy",
            "google_oauth": "configured",
            "openai": "not configured"
        }))
        .unwrap();
        assert!(!health.is_ready());
    }
}
