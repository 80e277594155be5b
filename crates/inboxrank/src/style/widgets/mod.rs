//! Widget styles shared by the views.

mod buttons;
mod containers;
pub mod palette;
mod shadows;

pub use buttons::{primary_button_style, secondary_button_style, toolbar_button_style};
pub use containers::{
    app_background_style, avatar_style, badge_style, email_card_style, header_style,
    notice_backdrop_style, notice_card_style, status_bar_style, summary_panel_style,
};
pub use palette::ThemeMode;
