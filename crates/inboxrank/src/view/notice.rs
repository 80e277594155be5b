//! Blocking notice overlay.

use iced::widget::{button, column, container, opaque, text};
use iced::{Element, Length};

use inboxrank_core::Notice;

use crate::message::Message;
use crate::style::widgets::{
    notice_backdrop_style, notice_card_style, palette, primary_button_style,
};

/// Renders `notice` as a dialog over a dimmed, click-blocking backdrop.
pub fn view_notice(notice: Notice) -> Element<'static, Message> {
    let title = if notice.is_failure() {
        "Something went wrong"
    } else {
        "Heads up"
    };

    let heading = text(title)
        .size(18)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(move |_theme| {
            let p = palette::current();
            text::Style {
                color: Some(if notice.is_failure() {
                    p.accent_red
                } else {
                    p.text_primary
                }),
            }
        });

    let dismiss = button(text("Dismiss"))
        .padding([8, 20])
        .style(primary_button_style)
        .on_press(Message::DismissNotice);

    let card = container(
        column![heading, text(notice.message()), dismiss]
            .spacing(16)
            .align_x(iced::Alignment::Center),
    )
    .padding(24)
    .max_width(420)
    .style(notice_card_style);

    opaque(
        container(card)
            .center(Length::Fill)
            .style(notice_backdrop_style),
    )
}
