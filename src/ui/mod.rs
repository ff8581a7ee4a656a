/// Views for the three pages and the feedback overlay
///
/// - `home.rs` - upload, predict and result screen
/// - `feedback.rs` - "what was the actual spice level?" modal
/// - `legal.rs` - terms of use and privacy policy
/// - `icons.rs` - fire icons and the spice indicator row

pub mod feedback;
pub mod home;
pub mod icons;
pub mod legal;

use iced::widget::{button, row, text};
use iced::{Alignment, Element};

use crate::Message;

/// Pages reachable from the footer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Terms,
    Privacy,
}

/// Footer links shown under the main screen
pub fn footer<'a>() -> Element<'a, Message> {
    row![
        button(text("Terms of Use").size(14))
            .style(button::text)
            .on_press(Message::Navigate(Route::Terms)),
        button(text("Privacy Policy").size(14))
            .style(button::text)
            .on_press(Message::Navigate(Route::Privacy)),
    ]
    .spacing(15)
    .align_y(Alignment::Center)
    .into()
}
