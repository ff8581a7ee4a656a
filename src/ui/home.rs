/// Main screen: upload box, predict/reset control, result line and errors
use iced::widget::{button, column, container, image, mouse_area, row, text};
use iced::{Alignment, ContentFit, Element, Length};

use super::{footer, icons};
use crate::state::data::{Preview, SpiceLevel};
use crate::state::Session;
use crate::Message;

/// The control under the upload box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    Predict { enabled: bool, busy: bool },
    PredictAnother,
}

/// Everything the main screen shows, derived from the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView<'a> {
    pub has_preview: bool,
    pub primary: PrimaryAction,
    pub result: Option<SpiceLevel>,
    pub error: Option<&'a str>,
}

impl<'a> HomeView<'a> {
    pub fn from_session(session: &'a Session) -> Self {
        let result = session.spice_level();
        let primary = match result {
            Some(_) => PrimaryAction::PredictAnother,
            None => PrimaryAction::Predict {
                enabled: session.can_predict(),
                busy: session.is_loading(),
            },
        };

        Self {
            has_preview: session.preview().is_some(),
            primary,
            result,
            error: session.error(),
        }
    }

    pub fn primary_label(&self) -> &'static str {
        match self.primary {
            PrimaryAction::Predict { busy: true, .. } => "Predicting...",
            PrimaryAction::Predict { busy: false, .. } => "Predict Spiciness",
            PrimaryAction::PredictAnother => "Predict Another Picture",
        }
    }

    pub fn result_label(&self) -> Option<String> {
        self.result.map(|level| format!("Spice Level: {level}"))
    }

    /// "Not Quite?" is only offered next to a result
    pub fn offers_feedback(&self) -> bool {
        self.result.is_some()
    }
}

pub fn view(session: &Session) -> Element<'_, Message> {
    let model = HomeView::from_session(session);

    let title = row![text("How Hot?").size(48), icons::fire(true, 40.0)]
        .spacing(8)
        .align_y(Alignment::Center);

    let primary = match model.primary {
        PrimaryAction::Predict { enabled, .. } => button(text(model.primary_label()))
            .padding(10)
            .on_press_maybe(enabled.then_some(Message::Predict)),
        PrimaryAction::PredictAnother => button(text(model.primary_label()))
            .padding(10)
            .on_press(Message::Reset),
    };

    let mut controls = column![primary].spacing(12).align_x(Alignment::Center);

    if let (Some(level), Some(label)) = (model.result, model.result_label()) {
        controls = controls.push(
            row![text(label).size(24), icons::spice_row(level)]
                .spacing(10)
                .align_y(Alignment::Center),
        );
    }

    if model.offers_feedback() {
        controls = controls.push(
            button(text("Not Quite?").size(14))
                .style(button::text)
                .on_press(Message::OpenFeedback),
        );
    }

    if let Some(error) = model.error {
        controls = controls.push(text(error).style(text::danger));
    }

    let content = column![title, upload_box(session.preview()), controls, footer()]
        .spacing(24)
        .padding(40)
        .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Clickable box showing the preview, or the upload prompt when empty
fn upload_box(preview: Option<&Preview>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match preview {
        Some(preview) => image(preview.handle().clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => column![
            row![
                text("Click to upload your spicy dish").size(18),
                icons::fire(true, 24.0)
            ]
            .spacing(8)
            .align_y(Alignment::Center),
            button("Choose File").padding(10).on_press(Message::ChooseFile),
        ]
        .spacing(16)
        .align_x(Alignment::Center)
        .into(),
    };

    mouse_area(
        container(content)
            .padding(12)
            .center_x(Length::Fixed(360.0))
            .center_y(Length::Fixed(300.0))
            .style(container::bordered_box),
    )
    .on_press(Message::ChooseFile)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::state::data::{SelectedImage, Upload};
    use iced::widget::image::Handle;

    fn upload() -> Upload {
        let image = SelectedImage::new("jjigae.jpg", vec![0xFF, 0xD8, 0xFF, 0xDB]);
        let preview = Preview::undecoded(Handle::from_bytes(image.bytes.to_vec()));
        Upload::new(image, preview)
    }

    #[test]
    fn test_idle_screen() {
        let session = Session::new();
        let model = HomeView::from_session(&session);
        assert!(!model.has_preview);
        assert_eq!(
            model.primary,
            PrimaryAction::Predict {
                enabled: false,
                busy: false
            }
        );
        assert_eq!(model.primary_label(), "Predict Spiciness");
        assert_eq!(model.result_label(), None);
        assert!(!model.offers_feedback());
    }

    #[test]
    fn test_predicting_screen() {
        let mut session = Session::new();
        session.select_image(upload());
        session.begin_predict().unwrap();

        let model = HomeView::from_session(&session);
        assert!(model.has_preview);
        assert_eq!(
            model.primary,
            PrimaryAction::Predict {
                enabled: false,
                busy: true
            }
        );
        assert_eq!(model.primary_label(), "Predicting...");
    }

    #[test]
    fn test_error_keeps_predict_available() {
        let mut session = Session::new();
        session.select_image(upload());
        let ticket = session.begin_predict().unwrap();
        session.finish_predict(ticket.generation, Err(ApiError::UnsupportedMediaType));

        let model = HomeView::from_session(&session);
        assert_eq!(
            model.error,
            Some("Please upload a valid image file (JPEG, PNG, HEIC).")
        );
        assert_eq!(
            model.primary,
            PrimaryAction::Predict {
                enabled: true,
                busy: false
            }
        );
        assert!(!model.offers_feedback());
    }

    #[test]
    fn test_result_screen() {
        let mut session = Session::new();
        session.select_image(upload());
        let ticket = session.begin_predict().unwrap();
        session.finish_predict(ticket.generation, Ok(SpiceLevel::new(3).unwrap()));

        let model = HomeView::from_session(&session);
        assert_eq!(model.result_label().as_deref(), Some("Spice Level: 3"));
        assert_eq!(model.primary_label(), "Predict Another Picture");
        assert!(model.offers_feedback());
        assert_eq!(model.error, None);
    }
}
