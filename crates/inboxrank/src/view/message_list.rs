//! Message list with urgency styling.

use iced::widget::{Column, column, container, row, scrollable, text};
use iced::{Element, Length};

use inboxrank_api::Email;

use crate::message::Message;
use crate::model::{format_date_local, urgency_marker};
use crate::style::widgets::{badge_style, email_card_style, palette};

/// Renders the heading and one card per message, in the order given.
pub fn view_message_list(emails: &[Email]) -> Element<'static, Message> {
    let heading = text(format!("Emails ({})", emails.len()))
        .size(16)
        .font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..Default::default()
        });

    if emails.is_empty() {
        let empty = text("No emails to display. Click \"Fetch Emails\" to load unread messages.")
            .style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.text_secondary),
                }
            });
        return column![heading, empty].spacing(12).into();
    }

    let cards = emails
        .iter()
        .fold(Column::new().spacing(15), |cards, email| {
            cards.push(view_email_card(email))
        });

    column![
        heading,
        scrollable(cards.padding([0, 12])).height(Length::Fill)
    ]
    .spacing(12)
    .height(Length::Fill)
    .into()
}

fn view_email_card(email: &Email) -> Element<'static, Message> {
    let urgency = email.classification();
    let mut card = Column::new().spacing(4);

    if let Some(urgency) = urgency {
        let color = palette::current().urgency(urgency);
        let badge = container(
            text(format!("{} {}", urgency_marker(urgency), urgency.label()))
                .size(12)
                .font(iced::Font {
                    weight: iced::font::Weight::Bold,
                    ..Default::default()
                }),
        )
        .padding([2, 10])
        .style(badge_style(color));
        card = card.push(badge);
    }

    let subject = text(email.subject.clone()).size(16).font(iced::Font {
        weight: iced::font::Weight::Bold,
        ..Default::default()
    });
    card = card.push(subject);

    let muted = |_theme: &iced::Theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    };
    card = card
        .push(text(format!("From: {}", email.from)).size(12).style(muted))
        .push(
            text(format!("Date: {}", format_date_local(&email.date)))
                .size(12)
                .style(muted),
        );

    // The AI summary replaces the snippet once it exists.
    let body: Element<'static, Message> = match &email.summary {
        Some(summary) => column![
            text("AI SUMMARY").size(11).font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            }),
            text(summary.clone()).size(14),
        ]
        .spacing(4)
        .into(),
        None => text(email.snippet.clone()).size(14).style(muted).into(),
    };
    card = card.push(row![body].padding([6, 0]));

    container(card)
        .padding(15)
        .width(Length::Fill)
        .style(email_card_style(urgency))
        .into()
}
