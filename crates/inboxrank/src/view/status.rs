//! Status bar with backend health and the sign-in listener.

use iced::widget::{button, container, row, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::model::BackendStatus;
use crate::style::widgets::{palette, secondary_button_style, status_bar_style};

/// Renders the status bar.
pub fn view_status_bar(
    status: &BackendStatus,
    backend_url: &str,
    listening_on: Option<String>,
) -> Element<'static, Message> {
    let dot_color = {
        let p = palette::current();
        match status {
            BackendStatus::Checking => p.text_muted,
            BackendStatus::Ready => p.accent_green,
            BackendStatus::Degraded(_) => p.accent_yellow,
            BackendStatus::Unreachable(_) => p.accent_red,
        }
    };
    let dot = text("\u{25CF}").size(12).color(dot_color);

    let muted = |_theme: &iced::Theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_muted),
        }
    };

    let listener = listening_on.map_or_else(
        || "Sign-in redirect not available".to_string(),
        |addr| format!("Sign-in redirect on {addr}"),
    );

    let recheck = button(text("Recheck").size(12))
        .padding([2, 8])
        .style(secondary_button_style)
        .on_press(Message::CheckHealth);

    container(
        row![
            dot,
            text(status.describe()).size(12),
            text(backend_url.to_string()).size(12).style(muted),
            recheck,
            iced::widget::Space::new().width(Length::Fill),
            text(listener).size(12).style(muted),
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center),
    )
    .padding([6, 20])
    .width(Length::Fill)
    .style(status_bar_style)
    .into()
}
