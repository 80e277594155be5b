//! `InboxRank` - desktop client that ranks unread Gmail messages by urgency.
//!
//! Built with iced. Sign-in, Gmail access and classification all happen on
//! the prioritization backend; this client drives it and shows the results.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod headless;
mod message;
mod model;
mod style;
mod view;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{column, container, stack};
use iced::{Element, Length, Subscription, Task};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use inboxrank_api::{ApiClient, RedirectListener, Urgency};
use inboxrank_core::{
    Backend, FetchRequest, Location, PrioritizeRequest, ViewState, failure_reason,
};

use message::{KeyboardAction, Message};
use model::{AppSettings, BackendStatus, Overrides};
use style::widgets::{ThemeMode, app_background_style};
use view::HeaderOptions;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "inboxrank", version, about = "Rank unread Gmail messages by urgency")]
struct Cli {
    /// Address to resume a session from, e.g. the backend's post-login redirect.
    location: Option<String>,

    /// Base URL of the prioritization backend.
    #[arg(long, env = "INBOXRANK_BACKEND_URL")]
    backend: Option<String>,

    /// Address to receive the post-login redirect on.
    #[arg(long)]
    listen: Option<String>,

    /// Fetch and prioritize once, print a report and exit.
    #[arg(long)]
    headless: bool,

    /// Ask the backend's assistant a question, print the answer and exit.
    #[arg(long, value_name = "QUESTION", conflicts_with = "headless")]
    ask: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "inboxrank=debug,inboxrank_core=debug,inboxrank_api=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    info!("Starting InboxRank");

    let runtime = tokio::runtime::Runtime::new()?;
    let stored = runtime
        .block_on(model::load_settings())
        .unwrap_or_else(|e| {
            warn!("Failed to load settings, using defaults: {e}");
            AppSettings::default()
        });

    let overrides = Overrides {
        backend_url: cli.backend,
        redirect_listen: cli.listen,
    };
    let effective = stored.resolved(&overrides);
    let client = ApiClient::with_timeout(&effective.backend_url, effective.request_timeout())?;
    let location = cli
        .location
        .as_deref()
        .map_or_else(Location::empty, Location::parse);

    if let Some(question) = cli.ask.as_deref() {
        return runtime.block_on(headless::ask(&client, question));
    }
    if cli.headless {
        return runtime.block_on(headless::run(&client, location, &effective.redirect_listen));
    }
    // iced brings its own runtime.
    drop(runtime);

    let launch = Launch {
        settings: stored,
        client,
        location,
        listen_addr: effective.redirect_listen,
    };

    iced::application(
        move || InboxRank::new(launch.clone()),
        InboxRank::update,
        InboxRank::view,
    )
    .title("InboxRank")
    .theme(InboxRank::theme)
    .subscription(InboxRank::subscription)
    .run()
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    Ok(ExitCode::SUCCESS)
}

/// Everything resolved before the window opens.
#[derive(Debug, Clone)]
struct Launch {
    /// Settings as stored on disk, without command-line overrides.
    settings: AppSettings,
    client: ApiClient,
    location: Location,
    listen_addr: String,
}

/// Main application state.
struct InboxRank {
    /// Session, messages, busy flag, tally and notice.
    state: ViewState,
    /// Address the app was last reached through.
    location: Location,
    /// Backend client.
    client: ApiClient,
    /// Persisted settings.
    settings: AppSettings,
    /// Where the redirect listener binds.
    listen_addr: String,
    /// Redirect listener, once bound.
    listener: Option<Arc<RedirectListener>>,
    /// Result of the last health check.
    backend_status: BackendStatus,
}

impl InboxRank {
    /// Create new application instance.
    fn new(launch: Launch) -> (Self, Task<Message>) {
        let mut app = Self {
            state: ViewState::new(),
            location: launch.location,
            client: launch.client,
            settings: launch.settings,
            listen_addr: launch.listen_addr,
            listener: None,
            backend_status: BackendStatus::Checking,
        };
        app.apply_theme();
        app.state.resume_session(&mut app.location);

        let bind_task = Task::perform(
            bind_listener(app.listen_addr.clone()),
            Message::ListenerBound,
        );
        let health_task = app.check_health();
        (app, Task::batch([bind_task, health_task]))
    }

    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        style::widgets::palette::set_theme(self.settings.theme_mode);
    }

    fn theme(&self) -> iced::Theme {
        match self.settings.theme_mode {
            ThemeMode::Light => iced::Theme::Light,
            ThemeMode::Dark => iced::Theme::Dark,
        }
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    #[allow(clippy::too_many_lines)] // Large match is idiomatic for Elm architecture
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Login => {
                let token = self.state.begin_login();
                let client = self.client.clone();
                return Task::perform(
                    async move {
                        Backend::login_url(&client)
                            .await
                            .map_err(|e| failure_reason(&e))
                    },
                    move |result| Message::LoginUrlReceived(token, result),
                );
            }
            Message::LoginUrlReceived(token, result) => {
                if let Some(url) = self.state.finish_login(token, result) {
                    info!("Opening sign-in page");
                    if let Err(e) = opener::open(&url) {
                        warn!("Failed to open browser ({e}), visit {url}");
                    }
                }
            }
            Message::Logout => {
                self.state.end_session();
            }
            Message::ListenerBound(Ok(listener)) => {
                info!("Waiting for sign-in redirects on {}", self.listen_addr);
                self.listener = Some(Arc::clone(&listener));
                return Task::perform(next_redirect(listener), Message::RedirectReceived);
            }
            Message::ListenerBound(Err(e)) => {
                warn!(
                    "Sign-in redirect listener unavailable on {}: {e}",
                    self.listen_addr
                );
            }
            Message::RedirectReceived(Ok(url)) => {
                let mut location = Location::new(url);
                if self.state.resume_session(&mut location) {
                    self.location = location;
                }
                if let Some(listener) = &self.listener {
                    return Task::perform(
                        next_redirect(Arc::clone(listener)),
                        Message::RedirectReceived,
                    );
                }
            }
            Message::RedirectReceived(Err(e)) => {
                warn!("Redirect listener stopped: {e}");
                self.listener = None;
            }
            Message::FetchEmails => {
                if let Some(FetchRequest { token, user_id }) = self.state.begin_fetch() {
                    let client = self.client.clone();
                    return Task::perform(
                        async move {
                            client
                                .fetch_emails(&user_id)
                                .await
                                .map_err(|e| failure_reason(&e))
                        },
                        move |result| Message::EmailsFetched(token, result),
                    );
                }
            }
            Message::EmailsFetched(token, result) => {
                self.state.finish_fetch(token, result);
            }
            Message::Prioritize => {
                if let Some(PrioritizeRequest { token, emails }) = self.state.begin_prioritize() {
                    let client = self.client.clone();
                    return Task::perform(
                        async move {
                            client
                                .prioritize_emails(&emails)
                                .await
                                .map_err(|e| failure_reason(&e))
                        },
                        move |result| Message::Prioritized(token, result),
                    );
                }
            }
            Message::Prioritized(token, result) => {
                if let Some(tally) = self.state.finish_prioritize(token, result)
                    && tally.red > 0
                    && self.settings.notify_urgent
                {
                    let top_subject = self
                        .state
                        .emails()
                        .iter()
                        .find(|email| email.classification() == Some(Urgency::Red))
                        .map(|email| model::truncate(&email.subject, 60));
                    return Task::perform(
                        notify_urgent(tally.red, top_subject),
                        Message::NotificationShown,
                    );
                }
            }
            Message::DismissNotice => {
                self.state.dismiss_notice();
            }
            Message::NotificationShown(result) => {
                if let Err(e) = result {
                    warn!("Failed to show notification: {e}");
                }
            }
            Message::ToggleTheme => {
                self.settings.theme_mode = self.settings.theme_mode.toggled();
                self.apply_theme();
                return self.save_settings();
            }
            Message::ToggleNotifyUrgent => {
                self.settings.notify_urgent = !self.settings.notify_urgent;
                return self.save_settings();
            }
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    warn!("Failed to save settings: {e}");
                }
            }
            Message::CheckHealth => {
                self.backend_status = BackendStatus::Checking;
                return self.check_health();
            }
            Message::HealthChecked(result) => {
                self.backend_status = BackendStatus::from_health(result);
                debug!("{}", self.backend_status.describe());
            }
            Message::KeyPressed(action) => {
                return self.handle_keyboard_action(action);
            }
            Message::Ignored => {}
        }
        Task::none()
    }

    /// Handle keyboard shortcuts. Only dismissing and theming work while a
    /// notice is up.
    fn handle_keyboard_action(&mut self, action: KeyboardAction) -> Task<Message> {
        let notice_shown = self.state.notice().is_some();
        match action {
            KeyboardAction::Dismiss if notice_shown => self.update(Message::DismissNotice),
            KeyboardAction::ToggleTheme => self.update(Message::ToggleTheme),
            KeyboardAction::Fetch if !notice_shown => self.update(Message::FetchEmails),
            KeyboardAction::Prioritize if !notice_shown => self.update(Message::Prioritize),
            _ => Task::none(),
        }
    }

    fn check_health(&self) -> Task<Message> {
        let client = self.client.clone();
        Task::perform(
            async move { client.health().await.map_err(|e| e.to_string()) },
            Message::HealthChecked,
        )
    }

    fn save_settings(&self) -> Task<Message> {
        Task::perform(
            model::save_settings(self.settings.clone()),
            Message::SettingsSaved,
        )
    }

    fn view(&self) -> Element<'_, Message> {
        let header = view::view_header(
            &self.state,
            HeaderOptions {
                theme_mode: self.settings.theme_mode,
                notify_urgent: self.settings.notify_urgent,
            },
        );

        let mut body = column![].spacing(20).padding(20).height(Length::Fill);
        if let Some(tally) = self.state.summary() {
            body = body.push(view::view_summary(*tally));
        }
        body = body.push(view::view_message_list(self.state.emails()));

        let listening_on = self
            .listener
            .as_ref()
            .map(|listener| listener.local_addr().to_string());
        let status = view::view_status_bar(
            &self.backend_status,
            self.client.base_url().as_str(),
            listening_on,
        );

        let screen = container(column![header, body, status])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(app_background_style);

        match self.state.notice() {
            Some(notice) => stack![screen, view::view_notice(notice)].into(),
            None => screen.into(),
        }
    }

    /// Subscribe to keyboard events for shortcuts.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
                handle_key_press(key, modifiers).unwrap_or(Message::Ignored)
            } else {
                Message::Ignored
            }
        })
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<Message> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS

    match key {
        Key::Named(keyboard::key::Named::F5) => Some(Message::KeyPressed(KeyboardAction::Fetch)),
        Key::Character(c) if ctrl && c.as_str() == "p" => {
            Some(Message::KeyPressed(KeyboardAction::Prioritize))
        }
        Key::Character(c) if ctrl && c.as_str() == "t" => {
            Some(Message::KeyPressed(KeyboardAction::ToggleTheme))
        }
        Key::Named(keyboard::key::Named::Escape | keyboard::key::Named::Enter) => {
            Some(Message::KeyPressed(KeyboardAction::Dismiss))
        }
        _ => None,
    }
}

/// Bind the sign-in redirect listener.
async fn bind_listener(addr: String) -> Result<Arc<RedirectListener>, String> {
    RedirectListener::bind(&addr)
        .await
        .map(Arc::new)
        .map_err(|e| e.to_string())
}

/// Wait for the next browser redirect.
async fn next_redirect(listener: Arc<RedirectListener>) -> Result<Url, String> {
    listener.next_redirect().await.map_err(|e| e.to_string())
}

/// Show a desktop notification about urgent mail.
async fn notify_urgent(count: u32, top_subject: Option<String>) -> Result<(), String> {
    let noun = if count == 1 { "email needs" } else { "emails need" };
    let mut body = format!("{count} urgent {noun} attention");
    if let Some(subject) = top_subject {
        body.push('\n');
        body.push_str(&subject);
    }

    tokio::task::spawn_blocking(move || {
        notify_rust::Notification::new()
            .summary("InboxRank")
            .body(&body)
            .show()
            .map(|_| ())
            .map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| e.to_string())?
}
