//! Container style functions with theme support.

use iced::widget::container;
use iced::{Background, Border, Color};

use inboxrank_api::Urgency;

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Window background behind every panel.
pub fn app_background_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        text_color: Some(p.text_primary),
        ..Default::default()
    }
}

/// Header bar with a bottom border.
pub fn header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        shadow: shadows::none(),
        ..Default::default()
    }
}

/// Status bar at the bottom of the window.
pub fn status_bar_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Priority summary panel.
pub fn summary_panel_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_elevated)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::subtle(),
        ..Default::default()
    }
}

/// Card for one message, tinted and bordered by its classification.
pub fn email_card_style(urgency: Option<Urgency>) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let p = palette::current();
        let (background, border) = urgency.map_or((p.surface, p.border_medium), |u| {
            (p.urgency_tint(u), p.urgency(u))
        });

        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: border,
                width: 2.0,
                radius: radius::MEDIUM.into(),
            },
            ..Default::default()
        }
    }
}

/// Pill behind a short label.
pub fn badge_style(color: Color) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(Color::from_rgba(
            color.r, color.g, color.b, 0.15,
        ))),
        text_color: Some(color),
        border: Border {
            color,
            width: 1.0,
            radius: radius::PILL.into(),
        },
        ..Default::default()
    }
}

/// Circle behind the signed-in user's initials.
pub fn avatar_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.primary)),
        text_color: Some(p.text_on_primary),
        border: Border {
            radius: radius::PILL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed layer behind a notice.
pub fn notice_backdrop_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.scrim)),
        ..Default::default()
    }
}

/// Notice dialog.
pub fn notice_card_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_elevated)),
        text_color: Some(p.text_primary),
        border: Border {
            color: p.border_medium,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::large(),
        ..Default::default()
    }
}
