//! Header with identity, actions and toggles.

use iced::widget::{Row, button, column, container, row, text};
use iced::{Element, Length};

use inboxrank_api::Session;
use inboxrank_core::ViewState;

use crate::message::Message;
use crate::model::initials;
use crate::style::widgets::{
    ThemeMode, avatar_style, header_style, palette, primary_button_style, secondary_button_style,
    toolbar_button_style,
};

/// What the header needs besides the view state.
#[derive(Debug, Clone, Copy)]
pub struct HeaderOptions {
    /// Current theme, for the toggle icon.
    pub theme_mode: ThemeMode,
    /// Whether urgent-mail notifications are on.
    pub notify_urgent: bool,
}

/// Renders the application header.
///
/// Every action is disabled while a notice is waiting to be dismissed.
pub fn view_header(state: &ViewState, options: HeaderOptions) -> Element<'static, Message> {
    let actions_enabled = state.notice().is_none();
    let enabled = |message: Message| actions_enabled.then_some(message);

    let title = text("\u{1F4E7} InboxRank")
        .size(22)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.primary),
            }
        });

    let identity: Element<'static, Message> = match state.session() {
        Some(session) => view_identity(session, enabled(Message::Logout)),
        None => button(text("Sign in with Google"))
            .padding([8, 16])
            .style(primary_button_style)
            .on_press_maybe(enabled(Message::Login))
            .into(),
    };

    let theme_icon = match options.theme_mode {
        ThemeMode::Light => "\u{263E}",
        ThemeMode::Dark => "\u{2600}",
    };
    let theme_btn = icon_button(theme_icon, Message::ToggleTheme);

    let bell_icon = if options.notify_urgent {
        "\u{1F514}"
    } else {
        "\u{1F515}"
    };
    let notify_btn = icon_button(bell_icon, Message::ToggleNotifyUrgent);

    let top_row: Row<'_, Message> = row![
        title,
        iced::widget::Space::new().width(Length::Fill),
        identity,
        notify_btn,
        theme_btn,
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    let fetch_btn = button(text("Fetch Emails"))
        .padding([8, 16])
        .style(toolbar_button_style)
        .on_press_maybe(enabled(Message::FetchEmails));

    let prioritize_label = if state.is_prioritizing() {
        "Analyzing..."
    } else {
        "Prioritize with AI"
    };
    let prioritize_btn = button(text(prioritize_label))
        .padding([8, 16])
        .style(primary_button_style)
        .on_press_maybe(
            (actions_enabled && !state.is_prioritizing()).then_some(Message::Prioritize),
        );

    let actions = row![fetch_btn, prioritize_btn].spacing(8);

    container(column![top_row, actions].spacing(12))
        .padding([12, 20])
        .width(Length::Fill)
        .style(header_style)
        .into()
}

/// Avatar, name, address and the Logout button.
fn view_identity(session: &Session, on_logout: Option<Message>) -> Element<'static, Message> {
    let avatar = container(
        text(initials(session.display_name()))
            .size(14)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            }),
    )
    .width(Length::Fixed(36.0))
    .height(Length::Fixed(36.0))
    .align_x(iced::alignment::Horizontal::Center)
    .align_y(iced::alignment::Vertical::Center)
    .style(avatar_style);

    let name = text(session.display_name().to_string()).font(iced::Font {
        weight: iced::font::Weight::Semibold,
        ..Default::default()
    });
    let email = text(session.email.clone()).size(12).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    });

    let logout = button(text("Logout"))
        .padding([6, 12])
        .style(toolbar_button_style)
        .on_press_maybe(on_logout);

    row![avatar, column![name, email].spacing(2), logout]
        .spacing(10)
        .align_y(iced::Alignment::Center)
        .into()
}

fn icon_button(icon: &'static str, message: Message) -> Element<'static, Message> {
    button(text(icon).size(18).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    }))
    .padding([8, 12])
    .style(secondary_button_style)
    .on_press(message)
    .into()
}
