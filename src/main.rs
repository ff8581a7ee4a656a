use clap::Parser;
use iced::{Element, Task, Theme};

mod api;
mod config;
mod error;
mod media;
mod state;
mod ui;

use api::SpiceClient;
use config::{Cli, Config};
use error::{ApiError, MediaError};
use state::data::{SpiceLevel, Upload};
use state::Session;
use ui::legal::LegalPage;
use ui::Route;

/// Main application state
struct HowHot {
    /// Everything the main screen shows
    session: Session,
    /// Client for the prediction service
    client: SpiceClient,
    /// Page currently on screen
    route: Route,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the upload box or "Choose File"
    ChooseFile,
    /// File dialog closed; None when cancelled
    FileChosen(Option<Result<Upload, MediaError>>),
    /// User clicked "Predict Spiciness"
    Predict,
    /// Prediction request finished for the given upload generation
    PredictionFinished(u64, Result<SpiceLevel, ApiError>),
    /// User clicked "Predict Another Picture"
    Reset,
    /// User clicked "Not Quite?"
    OpenFeedback,
    /// Backdrop click or the close control
    CloseFeedback,
    /// Fire icon clicked in the feedback modal
    ChooseLevel(SpiceLevel),
    SubmitFeedback,
    FeedbackFinished(u64, Result<(), ApiError>),
    Navigate(Route),
}

impl HowHot {
    fn new(client: SpiceClient) -> (Self, Task<Message>) {
        tracing::info!(api = %client.base_url(), "How Hot? client started");

        (
            HowHot {
                session: Session::new(),
                client,
                route: Route::Home,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ChooseFile => Task::perform(media::picker::choose_image(), Message::FileChosen),
            Message::FileChosen(None) => Task::none(),
            Message::FileChosen(Some(Ok(upload))) => {
                tracing::debug!(preview = ?upload.preview.dimensions(), "Image selected");
                self.session.select_image(upload);
                Task::none()
            }
            Message::FileChosen(Some(Err(err))) => {
                tracing::warn!(error = %err, "Could not load the selected file");
                Task::none()
            }
            Message::Predict => {
                let Some(ticket) = self.session.begin_predict() else {
                    return Task::none();
                };
                let client = self.client.clone();
                let generation = ticket.generation;

                Task::perform(
                    async move { client.predict(&ticket.image).await },
                    move |outcome| Message::PredictionFinished(generation, outcome),
                )
            }
            Message::PredictionFinished(generation, outcome) => {
                if !self.session.finish_predict(generation, outcome) {
                    tracing::debug!(generation, "Dropped prediction for a replaced upload");
                }
                tracing::debug!(phase = ?self.session.phase(), "Prediction finished");
                Task::none()
            }
            Message::Reset => {
                self.session.reset();
                Task::none()
            }
            Message::OpenFeedback => {
                self.session.open_feedback();
                Task::none()
            }
            Message::CloseFeedback => {
                self.session.close_feedback();
                Task::none()
            }
            Message::ChooseLevel(level) => {
                self.session.choose_level(level);
                Task::none()
            }
            Message::SubmitFeedback => {
                let Some(ticket) = self.session.begin_feedback() else {
                    return Task::none();
                };
                let client = self.client.clone();
                let generation = ticket.generation;

                Task::perform(
                    async move { client.submit_feedback(&ticket.request).await },
                    move |outcome| Message::FeedbackFinished(generation, outcome),
                )
            }
            Message::FeedbackFinished(generation, outcome) => {
                if let Err(err) = &outcome {
                    tracing::error!(error = %err, "Feedback submission failed");
                }
                self.session.finish_feedback(generation, outcome);
                Task::none()
            }
            Message::Navigate(route) => {
                self.route = route;
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match LegalPage::for_route(self.route) {
            Some(page) => ui::legal::view(page),
            None => ui::feedback::overlay(ui::home::view(&self.session), &self.session),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("how_hot=info")),
        )
        .init();
}

fn main() -> iced::Result {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load(&cli).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Ignoring config file");
        Config::from_cli(&cli)
    });

    // The app cannot do anything without an HTTP client
    let client = SpiceClient::new(&config.api_url, config.request_timeout)
        .expect("Failed to build HTTP client");

    iced::application("How Hot?", HowHot::update, HowHot::view)
        .theme(HowHot::theme)
        .centered()
        .run_with(move || HowHot::new(client))
}
