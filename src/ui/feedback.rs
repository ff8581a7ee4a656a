/// Feedback modal drawn over the main screen
use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, stack, text,
};
use iced::{Alignment, Color, Element, Length};

use super::icons;
use crate::state::data::SpiceLevel;
use crate::state::{Overlay, Session};
use crate::Message;

const PICKER_ICON_SIZE: f32 = 54.0;

/// Wrap `base` with the feedback modal when it is open
pub fn overlay<'a>(base: Element<'a, Message>, session: &'a Session) -> Element<'a, Message> {
    let content = match session.overlay() {
        None => return base,
        Some(Overlay::FeedbackSubmitted) => column![text("Thank you for your feedback!")
            .size(20)
            .style(text::success)]
        .align_x(Alignment::Center),
        Some(Overlay::FeedbackOpen) => picker(session),
    };

    let close = button(text("×").size(20))
        .style(button::text)
        .on_press(Message::CloseFeedback);

    let card = container(
        column![
            row![horizontal_space(), close],
            content
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .width(Length::Fixed(420.0))
    .padding(20)
    .style(container::rounded_box);

    modal(base, card.into(), Message::CloseFeedback)
}

/// Level picker and submit button
fn picker(session: &Session) -> iced::widget::Column<'_, Message> {
    let feedback = session.feedback();
    let choice = feedback.choice();

    let levels = SpiceLevel::FEEDBACK_CHOICES
        .iter()
        .fold(row![].spacing(6), |levels, level| {
            levels.push(
                mouse_area(icons::fire(choice.lights(*level), PICKER_ICON_SIZE))
                    .on_press(Message::ChooseLevel(*level)),
            )
        });

    let label = if feedback.is_in_flight() {
        "Submitting..."
    } else {
        "Submit"
    };
    let submit = button(text(label))
        .padding(10)
        .on_press_maybe(feedback.can_submit().then_some(Message::SubmitFeedback));

    let mut content = column![
        text("What was the actual spice level?").size(20),
        levels,
        submit
    ]
    .spacing(18)
    .align_x(Alignment::Center);

    if let Some(error) = feedback.error() {
        content = content.push(text(error).style(text::danger));
    }

    content
}

/// Dim `base` and float `content` over it; clicking the backdrop sends `on_blur`
fn modal<'a>(
    base: Element<'a, Message>,
    content: Element<'a, Message>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}
