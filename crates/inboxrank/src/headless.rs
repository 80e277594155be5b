//! One-shot commands from the command line.
//!
//! [`run`] drives the same view-state operations as the window does, then
//! prints the ranked collection. It signs in through the browser first when
//! the launch location carries no session. [`ask`] puts a single question to
//! the backend's assistant.

use std::fmt::Write as _;
use std::process::ExitCode;

use inboxrank_api::{ApiClient, RedirectListener};
use inboxrank_core::{Backend, Location, Notice, ViewState};
use tracing::{info, warn};

use crate::model::{format_date_local, urgency_marker};

/// Runs a full fetch and prioritize, printing the report to stdout.
///
/// Exits non-zero when the run ends on a notice that stopped it.
///
/// # Errors
///
/// Returns an error if the redirect listener is needed but cannot be bound.
pub async fn run(
    client: &ApiClient,
    mut location: Location,
    listen_addr: &str,
) -> anyhow::Result<ExitCode> {
    let mut state = ViewState::new();

    if !state.resume_session(&mut location) {
        sign_in(&mut state, client, listen_addr).await?;
    }

    rank(&mut state, client).await;

    if state.session().is_some() {
        print!("{}", render_report(&state));
    }

    Ok(match state.notice() {
        Some(notice) if stops_run(notice) => {
            eprintln!("{notice}");
            ExitCode::FAILURE
        }
        _ => ExitCode::SUCCESS,
    })
}

/// Sends one question to the backend's assistant and prints the answer.
///
/// # Errors
///
/// Returns an error if the question is blank or the backend call fails.
pub async fn ask(client: &ApiClient, question: &str) -> anyhow::Result<ExitCode> {
    let answer = client.chat(question).await?;
    if let Some(model) = &answer.model {
        info!("Answered by {model}");
    }
    println!("{}", answer.reply);
    Ok(ExitCode::SUCCESS)
}

/// Fetches, then prioritizes, stopping at the first notice.
///
/// A notice left by sign-in (the backend refused to start one) stops the run
/// before any fetch, so it is what gets reported.
async fn rank<B: Backend>(state: &mut ViewState, backend: &B) {
    if state.notice().is_some() {
        return;
    }

    state.fetch_messages(backend).await;
    if state.notice().is_none() {
        state.prioritize_messages(backend).await;
    }
}

/// Opens the consent page and waits for the backend's redirect.
///
/// Returns early, leaving [`Notice::LoginFailed`] in place, when the backend
/// cannot start a sign-in.
async fn sign_in(
    state: &mut ViewState,
    client: &ApiClient,
    listen_addr: &str,
) -> anyhow::Result<()> {
    let listener = RedirectListener::bind(listen_addr).await?;

    let Some(url) = state.login(client).await else {
        warn!("Backend did not start a sign-in");
        return Ok(());
    };

    eprintln!("Sign in at: {url}");
    if let Err(e) = opener::open(&url) {
        warn!("Failed to open browser: {e}");
    }

    loop {
        let mut redirect = Location::new(listener.next_redirect().await?);
        if state.resume_session(&mut redirect) {
            return Ok(());
        }
        info!("Redirect carried no session, still waiting");
    }
}

/// Notices that mean the run did not do its job.
const fn stops_run(notice: Notice) -> bool {
    notice.is_failure() || matches!(notice, Notice::LoginRequired)
}

/// Plain-text report of the current collection, in display order.
pub fn render_report(state: &ViewState) -> String {
    let mut out = String::new();

    if let Some(session) = state.session() {
        let _ = writeln!(out, "Signed in as {} <{}>", session.display_name(), session.email);
    }

    if let Some(tally) = state.summary() {
        let _ = writeln!(
            out,
            "Priority Summary: Urgent: {}  Less Urgent: {}  Non-Urgent: {}",
            tally.red, tally.yellow, tally.green
        );
    }

    let emails = state.emails();
    let _ = writeln!(out, "Emails ({}):", emails.len());
    if emails.is_empty() {
        let _ = writeln!(out, "No emails to display.");
    }

    for email in emails {
        let _ = writeln!(out);
        match email.classification() {
            Some(urgency) => {
                let _ = writeln!(
                    out,
                    "{} [{}] {}",
                    urgency_marker(urgency),
                    urgency.label(),
                    email.subject
                );
            }
            None => {
                let _ = writeln!(out, "{}", email.subject);
            }
        }
        let _ = writeln!(out, "    From: {}", email.from);
        let _ = writeln!(out, "    Date: {}", format_date_local(&email.date));
        let _ = writeln!(out, "    {}", email.preview());
    }

    out
}
