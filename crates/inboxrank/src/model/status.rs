//! Backend reachability shown in the status bar.

use inboxrank_api::HealthStatus;

/// What the last health check found.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackendStatus {
    /// No check has completed yet.
    #[default]
    Checking,
    /// Up with both integrations configured.
    Ready,
    /// Up, but something it depends on is not configured.
    Degraded(String),
    /// Could not be reached.
    Unreachable(String),
}

impl BackendStatus {
    /// Classifies a health check result.
    #[must_use]
    pub fn from_health(result: Result<HealthStatus, String>) -> Self {
        match result {
            Ok(health) if health.is_ready() => Self::Ready,
            Ok(health) => {
                let mut missing = Vec::new();
                if health.google_oauth != "configured" {
                    missing.push("Google OAuth");
                }
                if health.openai != "configured" {
                    missing.push("OpenAI");
                }
                if missing.is_empty() {
                    Self::Degraded(format!("status {}", health.status))
                } else {
                    Self::Degraded(format!("{} not configured", missing.join(" and ")))
                }
            }
            Err(e) => Self::Unreachable(e),
        }
    }

    /// One-line description.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Checking => "Checking backend...".to_string(),
            Self::Ready => "Backend ready".to_string(),
            Self::Degraded(reason) => format!("Backend degraded: {reason}"),
            Self::Unreachable(reason) => format!("Backend unreachable: {reason}"),
        }
    }
}
