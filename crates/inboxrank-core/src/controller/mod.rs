//! View-state controller.
//!
//! [`ViewState`] is the single owner of what the client shows: the signed-in
//! session, the message collection, the busy flag for prioritization, the
//! summary tally and the current notice. Fields are private; every change
//! goes through one of the operations below, which keeps these invariants:
//!
//! - prioritization is never attempted with an empty collection
//! - fetching is never attempted without a session
//! - the busy flag is set only while a prioritize call is in flight and is
//!   cleared as soon as that call settles, whatever the outcome
//! - the collection and tally are replaced wholesale, never merged
//! - a result only lands if nothing has since superseded it: a newer call
//!   of the same kind, a newer fetch (which replaces the collection a
//!   prioritization was working on), or a change of session
//!
//! Backend calls are split into a `begin_*` step, which checks
//! preconditions and hands out the request to run, and a `finish_*` step,
//! which applies the settled result. An event loop runs the call in between;
//! the `async` helpers ([`ViewState::fetch_messages`] and friends) do all
//! three in one go. Failures reach the `finish_*` steps as strings: the
//! user only ever sees a [`Notice`], the reason goes to the log.

mod notice;
mod request;

pub use notice::Notice;
pub use request::{FetchRequest, Operation, PrioritizeRequest, RequestToken};

use inboxrank_api::{Email, Error, Prioritized, Session, SummaryTally, session};
use tracing::{debug, info, warn};

use crate::backend::Backend;
use crate::location::Location;

/// UI state of the client.
#[derive(Debug, Default)]
pub struct ViewState {
    session: Option<Session>,
    emails: Vec<Email>,
    is_prioritizing: bool,
    summary: Option<SummaryTally>,
    notice: Option<Notice>,
    /// Source of request generations.
    generation: u64,
    current_login: Option<RequestToken>,
    current_fetch: Option<RequestToken>,
    current_prioritize: Option<RequestToken>,
}

impl ViewState {
    /// Creates an empty, signed-out state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signed-in user, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Current message collection.
    #[must_use]
    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    /// Whether a prioritize call is in flight.
    #[must_use]
    pub const fn is_prioritizing(&self) -> bool {
        self.is_prioritizing
    }

    /// Tally from the last successful prioritization.
    #[must_use]
    pub const fn summary(&self) -> Option<&SummaryTally> {
        self.summary.as_ref()
    }

    /// Notice awaiting dismissal.
    #[must_use]
    pub const fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Dismisses the current notice.
    pub const fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // === Session ===

    /// Picks up a session handed over in the location's query string.
    ///
    /// On success the payload is erased from the location in place. A
    /// malformed payload is logged and otherwise ignored. Returns true if a
    /// session was installed.
    pub fn resume_session(&mut self, location: &mut Location) -> bool {
        let Some(url) = location.url() else {
            return false;
        };

        match session::session_from_url(url) {
            Ok(Some(restored)) => {
                info!("Signed in as {}", restored.display_name());
                let stripped = session::strip_session_param(url);
                location.replace(stripped);
                self.abandon_in_flight();
                self.session = Some(restored);
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!("Error parsing user data: {e}");
                false
            }
        }
    }

    /// Signs out locally. The backend keeps its copy of the credentials until
    /// it restarts.
    ///
    /// Fetches and prioritizations still in flight are abandoned.
    pub fn end_session(&mut self) {
        self.abandon_in_flight();
        if let Some(session) = self.session.take() {
            info!("Signed out {}", session.display_name());
        }
    }

    // === Login ===

    /// Begins a sign-in. Always allowed.
    pub const fn begin_login(&mut self) -> RequestToken {
        let token = self.issue(Operation::Login);
        self.current_login = Some(token);
        token
    }

    /// Applies the login-initiate result.
    ///
    /// Returns the authorization URL the caller should open in a browser.
    pub fn finish_login(
        &mut self,
        token: RequestToken,
        result: Result<String, String>,
    ) -> Option<String> {
        if !Self::take_if_current(&mut self.current_login, token) {
            debug!("Discarding stale login response");
            return None;
        }

        match result {
            Ok(url) => Some(url),
            Err(e) => {
                warn!("Login error: {e}");
                self.notice = Some(Notice::LoginFailed);
                None
            }
        }
    }

    // === Fetch ===

    /// Begins a fetch of unread messages.
    ///
    /// Returns `None` (and raises [`Notice::LoginRequired`]) when signed out.
    /// A prioritization still in flight is abandoned and the busy flag
    /// cleared, since its result would describe the collection being
    /// replaced.
    pub fn begin_fetch(&mut self) -> Option<FetchRequest> {
        let Some(user_id) = self.session.as_ref().map(|s| s.sub.clone()) else {
            self.notice = Some(Notice::LoginRequired);
            return None;
        };

        if self.current_prioritize.take().is_some() {
            debug!("Abandoning prioritization superseded by a fetch");
        }
        self.is_prioritizing = false;

        let token = self.issue(Operation::Fetch);
        self.current_fetch = Some(token);
        Some(FetchRequest { token, user_id })
    }

    /// Applies a fetch result.
    ///
    /// On success the collection is replaced, even with an empty list. On
    /// failure it is left as it was.
    pub fn finish_fetch(&mut self, token: RequestToken, result: Result<Vec<Email>, String>) {
        if !Self::take_if_current(&mut self.current_fetch, token) {
            debug!("Discarding stale fetch response");
            return;
        }

        match result {
            Ok(emails) => {
                info!("Fetched {} unread emails", emails.len());
                if emails.is_empty() {
                    self.notice = Some(Notice::NoUnread);
                }
                self.emails = emails;
            }
            Err(e) => {
                warn!("Error fetching emails: {e}");
                self.notice = Some(Notice::FetchFailed);
            }
        }
    }

    // === Prioritize ===

    /// Begins a prioritization of the current collection and sets the busy flag.
    ///
    /// Returns `None` (with a notice) when there is nothing to prioritize or
    /// a prioritization is already in flight.
    pub fn begin_prioritize(&mut self) -> Option<PrioritizeRequest> {
        if self.emails.is_empty() {
            self.notice = Some(Notice::NothingToPrioritize);
            return None;
        }
        if self.is_prioritizing {
            self.notice = Some(Notice::AlreadyPrioritizing);
            return None;
        }

        let token = self.issue(Operation::Prioritize);
        self.current_prioritize = Some(token);
        self.is_prioritizing = true;
        Some(PrioritizeRequest {
            token,
            emails: self.emails.clone(),
        })
    }

    /// Applies a prioritize result and clears the busy flag.
    ///
    /// Returns the new tally when the result was applied.
    pub fn finish_prioritize(
        &mut self,
        token: RequestToken,
        result: Result<Prioritized, String>,
    ) -> Option<SummaryTally> {
        if !Self::take_if_current(&mut self.current_prioritize, token) {
            debug!("Discarding stale prioritize response");
            return None;
        }
        self.is_prioritizing = false;

        match result {
            Ok(prioritized) => {
                info!("Prioritized {} emails", prioritized.emails.len());
                self.emails = prioritized.emails;
                self.summary = prioritized.summary;
                self.summary
            }
            Err(e) => {
                warn!("Error prioritizing emails: {e}");
                self.notice = Some(Notice::PrioritizeFailed);
                None
            }
        }
    }

    // === Async helpers ===

    /// Runs a complete sign-in request against `backend`.
    ///
    /// Returns the authorization URL to open.
    pub async fn login<B: Backend>(&mut self, backend: &B) -> Option<String> {
        let token = self.begin_login();
        let result = backend.login_url().await.map_err(|e| failure_reason(&e));
        self.finish_login(token, result)
    }

    /// Runs a complete fetch against `backend`. No call is made when signed out.
    pub async fn fetch_messages<B: Backend>(&mut self, backend: &B) {
        let Some(request) = self.begin_fetch() else {
            return;
        };
        let result = backend
            .fetch_emails(&request.user_id)
            .await
            .map_err(|e| failure_reason(&e));
        self.finish_fetch(request.token, result);
    }

    /// Runs a complete prioritization against `backend`. No call is made
    /// when the collection is empty or one is already running.
    pub async fn prioritize_messages<B: Backend>(&mut self, backend: &B) {
        let Some(request) = self.begin_prioritize() else {
            return;
        };
        let result = backend
            .prioritize_emails(&request.emails)
            .await
            .map_err(|e| failure_reason(&e));
        self.finish_prioritize(request.token, result);
    }

    /// Drops every fetch and prioritization in flight and clears the busy flag.
    fn abandon_in_flight(&mut self) {
        let fetch = self.current_fetch.take();
        let prioritize = self.current_prioritize.take();
        if fetch.is_some() || prioritize.is_some() {
            debug!("Abandoning requests for the previous session");
        }
        self.is_prioritizing = false;
    }

    const fn issue(&mut self, operation: Operation) -> RequestToken {
        self.generation += 1;
        RequestToken::new(operation, self.generation)
    }

    /// Clears `slot` and returns true if `token` is the one it holds.
    fn take_if_current(slot: &mut Option<RequestToken>, token: RequestToken) -> bool {
        if *slot == Some(token) {
            *slot = None;
            true
        } else {
            false
        }
    }
}

/// Log line for a failed backend call.
///
/// Calls out the case where the backend has lost the user's credentials,
/// which it does on every restart.
#[must_use]
pub fn failure_reason(error: &Error) -> String {
    if error.is_unauthorized() {
        format!("{error} (backend has no credentials for this user, sign in again)")
    } else {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use inboxrank_api::{Result, Urgency};
    use proptest::prelude::*;
    use serde_json::json;
    use url::Url;

    use super::*;

    /// Backend that replays canned results and records every call.
    #[derive(Default)]
    struct FakeBackend {
        logins: Mutex<VecDeque<Result<String>>>,
        fetches: Mutex<VecDeque<Result<Vec<Email>>>>,
        prioritizations: Mutex<VecDeque<Result<Prioritized>>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeBackend {
        fn with_fetch(self, result: Result<Vec<Email>>) -> Self {
            self.fetches.lock().unwrap().push_back(result);
            self
        }

        fn with_prioritize(self, result: Result<Prioritized>) -> Self {
            self.prioritizations.lock().unwrap().push_back(result);
            self
        }

        fn with_login(self, result: Result<String>) -> Self {
            self.logins.lock().unwrap().push_back(result);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Backend for FakeBackend {
        async fn login_url(&self) -> Result<String> {
            self.calls.lock().unwrap().push("login".into());
            self.logins.lock().unwrap().pop_front().unwrap()
        }

        async fn fetch_emails(&self, user_id: &str) -> Result<Vec<Email>> {
            self.calls.lock().unwrap().push(format!("fetch:{user_id}"));
            self.fetches.lock().unwrap().pop_front().unwrap()
        }

        async fn prioritize_emails(&self, emails: &[Email]) -> Result<Prioritized> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("prioritize:{}", emails.len()));
            self.prioritizations.lock().unwrap().pop_front().unwrap()
        }
    }

    fn email(subject: &str) -> Email {
        Email {
            subject: subject.into(),
            from: "sender@example.com".into(),
            date: "Thu, 15 Jan 2026 19:31:43 +0000".into(),
            snippet: format!("{subject} snippet"),
            ..Email::default()
        }
    }

    fn ranked(subject: &str, urgency: Urgency) -> Email {
        Email {
            urgency: Some(urgency.as_str().to_uppercase()),
            urgency_color: Some(urgency),
            summary: Some(format!("{subject} summary")),
            ..email(subject)
        }
    }

    fn three_emails() -> Vec<Email> {
        vec![email("Lunch?"), email("ASAP: outage"), email("Digest")]
    }

    fn signed_in() -> ViewState {
        let mut state = ViewState::new();
        let mut location = Location::parse(
            "http://localhost:5173/?user=%7B%22sub%22%3A%22108%22%2C%22name%22%3A%22Ann%22%2C%22email%22%3A%22ann%40example.com%22%7D",
        );
        assert!(state.resume_session(&mut location));
        state
    }

    async fn loaded(emails: Vec<Email>) -> ViewState {
        let mut state = signed_in();
        let backend = FakeBackend::default().with_fetch(Ok(emails));
        state.fetch_messages(&backend).await;
        state
    }

    // --- session ---

    #[test]
    fn test_resume_session_strips_payload() {
        let mut state = ViewState::new();
        let mut location = Location::parse(
            "http://localhost:5173/?user=%7B%22sub%22%3A%22108%22%2C%22name%22%3A%22Ann%22%2C%22email%22%3A%22ann%40example.com%22%2C%22picture%22%3A%22https%3A%2F%2Fexample.com%2Fa.png%22%7D",
        );

        assert!(state.resume_session(&mut location));

        let session = state.session().unwrap();
        assert_eq!(session.sub, "108");
        assert_eq!(session.name, "Ann");
        assert_eq!(session.picture.as_deref(), Some("https://example.com/a.png"));
        assert_eq!(
            location.url().map(Url::as_str),
            Some("http://localhost:5173/")
        );
    }

    #[test]
    fn test_resume_session_without_payload() {
        let mut state = ViewState::new();
        let mut location = Location::parse("http://localhost:5173/");
        assert!(!state.resume_session(&mut location));
        assert!(state.session().is_none());

        let mut empty = Location::empty();
        assert!(!state.resume_session(&mut empty));
    }

    #[test]
    fn test_resume_session_malformed_leaves_location() {
        let mut state = ViewState::new();
        let mut location = Location::parse("http://localhost:5173/?user=%7Bnot-json");

        assert!(!state.resume_session(&mut location));
        assert!(state.session().is_none());
        assert!(state.notice().is_none());
        assert_eq!(
            location.url().map(Url::as_str),
            Some("http://localhost:5173/?user=%7Bnot-json")
        );
    }

    proptest! {
        #[test]
        fn prop_malformed_payload_leaves_session_absent(payload in "[^{]*") {
            // Anything not starting an object can never be a session.
            let mut url = Url::parse("http://localhost:5173/").unwrap();
            url.query_pairs_mut().append_pair("user", &payload);

            let mut state = ViewState::new();
            let mut location = Location::new(url);
            prop_assert!(!state.resume_session(&mut location));
            prop_assert!(state.session().is_none());
        }
    }

    #[test]
    fn test_end_session_is_local() {
        let mut state = signed_in();
        state.end_session();
        assert!(state.session().is_none());
    }

    #[test]
    fn test_end_session_drops_fetch_in_flight() {
        let mut state = signed_in();
        let request = state.begin_fetch().unwrap();

        state.end_session();
        state.finish_fetch(request.token, Ok(vec![email("for the old user")]));

        assert!(state.session().is_none());
        assert!(state.emails().is_empty());
        assert!(state.notice().is_none());
    }

    #[tokio::test]
    async fn test_end_session_clears_busy_flag() {
        let mut state = loaded(three_emails()).await;
        let request = state.begin_prioritize().unwrap();

        state.end_session();
        assert!(!state.is_prioritizing());

        state.finish_prioritize(
            request.token,
            Ok(Prioritized {
                emails: vec![ranked("stale", Urgency::Red)],
                summary: None,
            }),
        );
        assert_eq!(state.emails(), three_emails().as_slice());
    }

    #[test]
    fn test_new_session_drops_previous_users_fetch() {
        let mut state = signed_in();
        let request = state.begin_fetch().unwrap();
        assert_eq!(request.user_id, "108");

        let mut location = Location::parse(
            "http://localhost:5173/?user=%7B%22sub%22%3A%22209%22%2C%22name%22%3A%22Bo%22%2C%22email%22%3A%22bo%40example.com%22%7D",
        );
        assert!(state.resume_session(&mut location));
        state.finish_fetch(request.token, Ok(vec![email("Ann's mail")]));

        assert_eq!(state.session().unwrap().sub, "209");
        assert!(state.emails().is_empty());
    }

    // --- login ---

    #[tokio::test]
    async fn test_login_returns_authorization_url() {
        let mut state = ViewState::new();
        let backend =
            FakeBackend::default().with_login(Ok("https://accounts.example.com/auth".into()));

        let url = state.login(&backend).await;
        assert_eq!(url.as_deref(), Some("https://accounts.example.com/auth"));
        assert!(state.notice().is_none());
    }

    #[tokio::test]
    async fn test_login_failure_raises_notice() {
        let mut state = ViewState::new();
        let backend = FakeBackend::default().with_login(Err(Error::status(500, "boom")));

        assert!(state.login(&backend).await.is_none());
        assert_eq!(state.notice(), Some(Notice::LoginFailed));
        assert!(state.session().is_none());
    }

    // --- fetch ---

    #[tokio::test]
    async fn test_fetch_without_session_makes_no_call() {
        let mut state = ViewState::new();
        let backend = FakeBackend::default();

        state.fetch_messages(&backend).await;

        assert!(backend.calls().is_empty());
        assert_eq!(state.notice(), Some(Notice::LoginRequired));
        assert_eq!(state.notice().unwrap().message(), "Please login first");
        assert!(state.emails().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_sends_subject_identifier() {
        let mut state = signed_in();
        let backend = FakeBackend::default().with_fetch(Ok(three_emails()));

        state.fetch_messages(&backend).await;

        assert_eq!(backend.calls(), vec!["fetch:108"]);
        assert_eq!(state.emails(), three_emails().as_slice());
        assert!(state.notice().is_none());
    }

    #[tokio::test]
    async fn test_fetch_empty_replaces_stale_messages() {
        let mut state = loaded(three_emails()).await;
        let backend = FakeBackend::default().with_fetch(Ok(Vec::new()));

        state.fetch_messages(&backend).await;

        assert!(state.emails().is_empty());
        assert_eq!(state.notice(), Some(Notice::NoUnread));
        assert_eq!(state.notice().unwrap().message(), "No unread emails found");
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_messages() {
        let mut state = loaded(three_emails()).await;
        let backend = FakeBackend::default().with_fetch(Err(Error::status(
            500,
            "Error fetching emails: 401: User not authenticated",
        )));

        state.fetch_messages(&backend).await;

        assert_eq!(state.emails(), three_emails().as_slice());
        assert_eq!(state.notice(), Some(Notice::FetchFailed));
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut state = signed_in();
        let first = state.begin_fetch().unwrap();
        let second = state.begin_fetch().unwrap();

        state.finish_fetch(second.token, Ok(vec![email("new")]));
        state.finish_fetch(first.token, Ok(vec![email("old"), email("older")]));

        assert_eq!(state.emails().len(), 1);
        assert_eq!(state.emails()[0].subject, "new");
    }

    #[test]
    fn test_token_from_other_operation_is_discarded() {
        let mut state = signed_in();
        let login = state.begin_login();
        let _fetch = state.begin_fetch().unwrap();

        state.finish_fetch(login, Ok(vec![email("x")]));
        assert!(state.emails().is_empty());
    }

    // --- prioritize ---

    #[tokio::test]
    async fn test_prioritize_empty_makes_no_call() {
        let mut state = signed_in();
        let backend = FakeBackend::default();

        state.prioritize_messages(&backend).await;

        assert!(backend.calls().is_empty());
        assert_eq!(state.notice(), Some(Notice::NothingToPrioritize));
        assert!(!state.is_prioritizing());
    }

    #[tokio::test]
    async fn test_prioritize_replaces_messages_and_tally() {
        let mut state = loaded(three_emails()).await;
        let reordered = vec![
            ranked("ASAP: outage", Urgency::Red),
            ranked("Lunch?", Urgency::Yellow),
            ranked("Digest", Urgency::Green),
        ];
        let backend = FakeBackend::default().with_prioritize(Ok(Prioritized {
            emails: reordered.clone(),
            summary: Some(SummaryTally {
                red: 1,
                yellow: 1,
                green: 1,
            }),
        }));

        state.prioritize_messages(&backend).await;

        assert_eq!(backend.calls(), vec!["prioritize:3"]);
        assert_eq!(state.emails(), reordered.as_slice());
        let tally = state.summary().unwrap();
        assert_eq!((tally.red, tally.yellow, tally.green), (1, 1, 1));
        assert!(!state.is_prioritizing());
        assert!(state.notice().is_none());
    }

    #[tokio::test]
    async fn test_prioritize_failure_keeps_state_and_clears_busy() {
        let mut state = loaded(three_emails()).await;
        let backend = FakeBackend::default()
            .with_prioritize(Err(Error::status(500, "Error prioritizing emails")));

        state.prioritize_messages(&backend).await;

        assert_eq!(state.emails(), three_emails().as_slice());
        assert!(state.summary().is_none());
        assert!(!state.is_prioritizing());
        assert_eq!(state.notice(), Some(Notice::PrioritizeFailed));
    }

    #[tokio::test]
    async fn test_prioritize_failure_keeps_previous_tally() {
        let mut state = loaded(three_emails()).await;
        let tally = SummaryTally {
            red: 0,
            yellow: 2,
            green: 1,
        };
        let backend = FakeBackend::default()
            .with_prioritize(Ok(Prioritized {
                emails: three_emails(),
                summary: Some(tally),
            }))
            .with_prioritize(Err(Error::Rejected("nope".into())));

        state.prioritize_messages(&backend).await;
        state.prioritize_messages(&backend).await;

        assert_eq!(state.summary(), Some(&tally));
        assert!(!state.is_prioritizing());
    }

    #[tokio::test]
    async fn test_busy_flag_spans_only_the_call() {
        let mut state = loaded(three_emails()).await;

        let request = state.begin_prioritize().unwrap();
        assert!(state.is_prioritizing());
        assert_eq!(request.emails.len(), 3);
        assert_eq!(request.token.operation(), Operation::Prioritize);

        state.finish_prioritize(request.token, Err("backend went away".to_string()));
        assert!(!state.is_prioritizing());
    }

    #[tokio::test]
    async fn test_second_prioritize_while_busy_is_refused() {
        let mut state = loaded(three_emails()).await;

        let first = state.begin_prioritize().unwrap();
        assert!(state.begin_prioritize().is_none());
        assert_eq!(state.notice(), Some(Notice::AlreadyPrioritizing));
        assert!(state.is_prioritizing());

        state.finish_prioritize(
            first.token,
            Ok(Prioritized {
                emails: three_emails(),
                summary: None,
            }),
        );
        assert!(!state.is_prioritizing());
    }

    #[tokio::test]
    async fn test_fetch_supersedes_prioritization_in_flight() {
        let mut state = loaded(vec![email("old")]).await;

        let prioritize = state.begin_prioritize().unwrap();
        let fetch = state.begin_fetch().unwrap();
        assert!(!state.is_prioritizing());

        state.finish_fetch(fetch.token, Ok(vec![email("new1"), email("new2")]));
        let tally = state.finish_prioritize(
            prioritize.token,
            Ok(Prioritized {
                emails: vec![ranked("old", Urgency::Red)],
                summary: Some(SummaryTally {
                    red: 1,
                    yellow: 0,
                    green: 0,
                }),
            }),
        );

        assert!(tally.is_none());
        let subjects: Vec<_> = state.emails().iter().map(|e| e.subject.as_str()).collect();
        assert_eq!(subjects, vec!["new1", "new2"]);
        assert!(state.summary().is_none());
        assert!(!state.is_prioritizing());
    }

    #[tokio::test]
    async fn test_prioritize_allowed_again_after_fetch_supersedes_it() {
        let mut state = loaded(three_emails()).await;
        let _abandoned = state.begin_prioritize().unwrap();
        let fetch = state.begin_fetch().unwrap();
        state.finish_fetch(fetch.token, Ok(three_emails()));

        assert!(state.begin_prioritize().is_some());
        assert!(state.notice().is_none());
    }

    #[tokio::test]
    async fn test_prioritize_sends_current_collection() {
        let emails = vec![Email {
            extra: json!({ "thread_id": "t-1" }).as_object().unwrap().clone(),
            ..email("with extras")
        }];
        let mut state = loaded(emails.clone()).await;

        let request = state.begin_prioritize().unwrap();
        assert_eq!(request.emails, emails);
    }

    // --- notices ---

    #[test]
    fn test_dismiss_notice() {
        let mut state = ViewState::new();
        assert!(state.begin_fetch().is_none());
        assert!(state.notice().is_some());

        state.dismiss_notice();
        assert!(state.notice().is_none());
    }

    #[test]
    fn test_failure_reason_flags_lost_credentials() {
        let lost = Error::status(500, "Error fetching emails: 401: User not authenticated");
        assert!(failure_reason(&lost).contains("sign in again"));

        let other = Error::status(500, "Error fetching emails: quota");
        assert_eq!(failure_reason(&other), other.to_string());
    }

    #[test]
    fn test_notice_failures() {
        assert!(Notice::FetchFailed.is_failure());
        assert!(Notice::PrioritizeFailed.is_failure());
        assert!(!Notice::NoUnread.is_failure());
        assert_eq!(
            Notice::FetchFailed.to_string(),
            "Failed to fetch emails. Please try logging in again."
        );
    }
}
