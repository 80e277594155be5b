//! Settings model.

use std::path::PathBuf;
use std::time::Duration;

use inboxrank_api::{ApiClient, RedirectListener};

use crate::style::widgets::ThemeMode;

/// Application settings that persist across sessions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Current theme mode (serialized as string).
    #[serde(with = "theme_mode_serde")]
    pub theme_mode: ThemeMode,
    /// Base URL of the prioritization backend.
    pub backend_url: String,
    /// Address the post-login redirect listener binds.
    pub redirect_listen: String,
    /// Per-request timeout for backend calls.
    pub request_timeout_secs: u64,
    /// Raise a desktop notification when a prioritization finds urgent mail.
    pub notify_urgent: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Dark,
            backend_url: ApiClient::DEFAULT_BASE_URL.to_string(),
            redirect_listen: RedirectListener::DEFAULT_ADDR.to_string(),
            request_timeout_secs: ApiClient::DEFAULT_TIMEOUT.as_secs(),
            notify_urgent: true,
        }
    }
}

/// Values given on the command line or in the environment.
///
/// These win over the settings file but are never written back to it.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Backend base URL.
    pub backend_url: Option<String>,
    /// Redirect listener address.
    pub redirect_listen: Option<String>,
}

impl AppSettings {
    /// Settings with `overrides` applied on top.
    #[must_use]
    pub fn resolved(&self, overrides: &Overrides) -> Self {
        let mut resolved = self.clone();
        if let Some(url) = &overrides.backend_url {
            resolved.backend_url.clone_from(url);
        }
        if let Some(addr) = &overrides.redirect_listen {
            resolved.redirect_listen.clone_from(addr);
        }
        resolved
    }

    /// Request timeout as a duration. Zero falls back to the default.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        if self.request_timeout_secs == 0 {
            ApiClient::DEFAULT_TIMEOUT
        } else {
            Duration::from_secs(self.request_timeout_secs)
        }
    }
}

/// Serde helpers for `ThemeMode` (since it doesn't derive `Serialize`/`Deserialize`).
mod theme_mode_serde {
    use super::ThemeMode;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde with= signature
    pub fn serialize<S>(mode: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        serializer.serialize_str(s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "light" => Ok(ThemeMode::Light),
            _ => Ok(ThemeMode::Dark),
        }
    }
}

fn settings_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("inboxrank")
}

/// Load application settings from file. A missing file yields defaults.
pub async fn load_settings() -> Result<AppSettings, String> {
    let settings_path = settings_dir().join("settings.json");

    if !settings_path.exists() {
        return Ok(AppSettings::default());
    }

    let contents = tokio::fs::read_to_string(&settings_path)
        .await
        .map_err(|e| e.to_string())?;

    serde_json::from_str(&contents).map_err(|e| e.to_string())
}

/// Save application settings to file.
pub async fn save_settings(settings: AppSettings) -> Result<(), String> {
    let config_dir = settings_dir();

    tokio::fs::create_dir_all(&config_dir)
        .await
        .map_err(|e| e.to_string())?;

    let settings_path = config_dir.join("settings.json");
    let contents = serde_json::to_string_pretty(&settings).map_err(|e| e.to_string())?;

    tokio::fs::write(&settings_path, contents)
        .await
        .map_err(|e| e.to_string())?;

    tracing::info!("Settings saved to {:?}", settings_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        assert_eq!(settings.backend_url, "http://localhost:8000");
        assert_eq!(settings.redirect_listen, "127.0.0.1:5173");
        assert_eq!(settings.request_timeout(), Duration::from_secs(120));
        assert!(settings.notify_urgent);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{ "theme_mode": "light", "notify_urgent": false }"#).unwrap();
        assert_eq!(settings.theme_mode, ThemeMode::Light);
        assert!(!settings.notify_urgent);
        assert_eq!(settings.backend_url, "http://localhost:8000");
    }

    #[test]
    fn test_unknown_theme_is_dark() {
        let settings: AppSettings = serde_json::from_str(r#"{ "theme_mode": "sepia" }"#).unwrap();
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn test_theme_serializes_as_string() {
        let settings = AppSettings {
            theme_mode: ThemeMode::Light,
            ..AppSettings::default()
        };
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["theme_mode"], "light");
    }

    #[test]
    fn test_overrides_win_over_file() {
        let stored = AppSettings {
            backend_url: "http://triage.lan:8000".to_string(),
            ..AppSettings::default()
        };

        let untouched = stored.resolved(&Overrides::default());
        assert_eq!(untouched, stored);

        let overrides = Overrides {
            backend_url: Some("http://127.0.0.1:9000".to_string()),
            redirect_listen: Some("127.0.0.1:0".to_string()),
        };
        let resolved = stored.resolved(&overrides);
        assert_eq!(resolved.backend_url, "http://127.0.0.1:9000");
        assert_eq!(resolved.redirect_listen, "127.0.0.1:0");
        // Stored copy is left alone so it can be saved without the overrides.
        assert_eq!(stored.backend_url, "http://triage.lan:8000");
    }

    #[test]
    fn test_zero_timeout_falls_back() {
        let settings = AppSettings {
            request_timeout_secs: 0,
            ..AppSettings::default()
        };
        assert_eq!(settings.request_timeout(), ApiClient::DEFAULT_TIMEOUT);
    }
}
