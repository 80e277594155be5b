//! Session hand-off from the backend's OAuth callback.
//!
//! After a successful sign-in the backend redirects the browser to the
//! client with the user's identity serialized as JSON in a single query
//! parameter:
//!
//! ```text
//! http://localhost:5173/?user=%7B%22sub%22%3A%20%221234%22%2C%20...%7D
//! ```
//!
//! The payload is consumed once and then removed from the location.

use url::Url;

use crate::error::{Error, Result};
use crate::model::Session;

/// Query parameter that carries the serialized session.
pub const SESSION_PARAM: &str = "user";

/// Reads the session carried by `url`, if any.
///
/// Returns `Ok(None)` when the parameter is absent.
///
/// # Errors
///
/// Returns [`Error::MalformedSession`] if the parameter is present but does
/// not decode to a session.
pub fn session_from_url(url: &Url) -> Result<Option<Session>> {
    let Some(payload) = url
        .query_pairs()
        .find(|(key, _)| key == SESSION_PARAM)
        .map(|(_, value)| value.into_owned())
    else {
        return Ok(None);
    };

    decode_session(&payload).map(Some)
}

/// Decodes an already percent-decoded session payload.
///
/// # Errors
///
/// Returns [`Error::MalformedSession`] if the payload is not a JSON session
/// object with a non-empty subject identifier.
pub fn decode_session(payload: &str) -> Result<Session> {
    let session: Session = serde_json::from_str(payload.trim())
        .map_err(|e| Error::MalformedSession(e.to_string()))?;

    if session.sub.trim().is_empty() {
        return Err(Error::MalformedSession(
            "missing subject identifier".to_string(),
        ));
    }

    Ok(session)
}

/// Returns `url` with the session payload erased.
///
/// The location is reset to the site root, dropping every query parameter
/// and the fragment, so the payload cannot be picked up a second time.
#[must_use]
pub fn strip_session_param(url: &Url) -> Url {
    let mut stripped = url.clone();
    stripped.set_path("/");
    stripped.set_query(None);
    stripped.set_fragment(None);
    stripped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CALLBACK: &str = "http://localhost:5173/?user=%7B%22email%22%3A%20%22ann%40example.com%22%2C%20%22name%22%3A%20%22Ann%20Lee%22%2C%20%22picture%22%3A%20null%2C%20%22sub%22%3A%20%22108%22%7D";

    #[test]
    fn test_session_from_callback_url() {
        let url = Url::parse(CALLBACK).unwrap();
        let session = session_from_url(&url).unwrap().unwrap();

        assert_eq!(session.sub, "108");
        assert_eq!(session.name, "Ann Lee");
        assert_eq!(session.email, "ann@example.com");
        assert!(session.picture.is_none());
    }

    #[test]
    fn test_no_param_is_not_an_error() {
        let url = Url::parse("http://localhost:5173/?tab=inbox").unwrap();
        assert!(session_from_url(&url).unwrap().is_none());
    }

    #[test]
    fn test_malformed_payloads() {
        for payload in ["", "{", "null", "[]", "\"sub\"", "{\"sub\":\"\"}", "{\"sub\":42}"] {
            assert!(
                matches!(decode_session(payload), Err(Error::MalformedSession(_))),
                "accepted {payload:?}"
            );
        }
    }

    #[test]
    fn test_strip_session_param() {
        let url = Url::parse(CALLBACK).unwrap();
        let stripped = strip_session_param(&url);

        assert_eq!(stripped.as_str(), "http://localhost:5173/");
        assert!(session_from_url(&stripped).unwrap().is_none());
    }

    proptest! {
        #[test]
        fn prop_arbitrary_payload_never_panics(payload in ".*") {
            let mut url = Url::parse("http://localhost:5173/").unwrap();
            url.query_pairs_mut().append_pair(SESSION_PARAM, &payload);

            // Either a valid session or a MalformedSession error, never a panic.
            match session_from_url(&url) {
                Ok(Some(session)) => prop_assert!(!session.sub.trim().is_empty()),
                Ok(None) => prop_assert!(false, "parameter was present"),
                Err(e) => prop_assert!(matches!(e, Error::MalformedSession(_))),
            }
        }
    }
}
