//! Priority summary panel.

use iced::widget::{column, container, row, text};
use iced::{Element, Length};

use inboxrank_api::{SummaryTally, Urgency};

use crate::message::Message;
use crate::model::urgency_marker;
use crate::style::widgets::{palette, summary_panel_style};

/// Renders the per-classification counts from the last prioritization.
pub fn view_summary(tally: SummaryTally) -> Element<'static, Message> {
    let counts = Urgency::ALL.iter().fold(row![].spacing(24), |counts, &urgency| {
        counts.push(
            text(format!(
                "{} {}: {}",
                urgency_marker(urgency),
                urgency.display_name(),
                tally.count(urgency)
            ))
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            })
            .style(move |_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.urgency(urgency)),
                }
            }),
        )
    });

    let heading = text("Priority Summary").size(16).font(iced::Font {
        weight: iced::font::Weight::Semibold,
        ..Default::default()
    });

    container(column![heading, counts].spacing(10))
        .padding(15)
        .width(Length::Fill)
        .style(summary_panel_style)
        .into()
}
