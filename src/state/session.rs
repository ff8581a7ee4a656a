/// Session state for one upload cycle
///
/// `Session` is the single owner of everything the main screen shows. Each
/// user action maps to one method; methods that start remote work return the
/// request to send instead of sending it, so the state machine stays pure and
/// the app decides how to run the I/O.
use super::data::{Preview, SelectedImage, SpiceLevel, Upload};
use crate::api::FeedbackRequest;
use crate::error::ApiError;

/// Mutually exclusive phases of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No image selected
    Idle,
    /// Image selected, nothing predicted yet
    Previewing,
    /// Prediction request in flight
    Predicting,
    /// A result or an error is on screen
    ResultShown,
}

/// The feedback modal, drawn on top of `ResultShown`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    FeedbackOpen,
    FeedbackSubmitted,
}

/// What the user has picked in the feedback modal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LevelChoice {
    /// Modal just opened, all icons dark
    #[default]
    Unchosen,
    Chosen(SpiceLevel),
    /// User deselected their pick
    Cleared,
}

impl LevelChoice {
    /// Picking the level that is already chosen clears it
    pub fn toggle(self, level: SpiceLevel) -> Self {
        match self {
            LevelChoice::Chosen(current) if current == level => LevelChoice::Cleared,
            _ => LevelChoice::Chosen(level),
        }
    }

    pub fn level(self) -> Option<SpiceLevel> {
        match self {
            LevelChoice::Chosen(level) => Some(level),
            _ => None,
        }
    }

    /// Whether the icon for `slot` is lit
    pub fn lights(self, slot: SpiceLevel) -> bool {
        self.level().is_some_and(|level| slot <= level)
    }
}

/// Feedback modal state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackState {
    open: bool,
    choice: LevelChoice,
    in_flight: bool,
    submitted: bool,
    error: Option<String>,
}

impl FeedbackState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn choice(&self) -> LevelChoice {
        self.choice
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        self.open && !self.in_flight && !self.submitted && self.choice.level().is_some()
    }
}

/// A prediction the app should send, tagged with the upload it belongs to
#[derive(Debug, Clone)]
pub struct PredictTicket {
    pub generation: u64,
    pub image: SelectedImage,
}

/// A feedback submission the app should send
#[derive(Debug, Clone)]
pub struct FeedbackTicket {
    pub generation: u64,
    pub request: FeedbackRequest,
}

/// All state behind the main screen
#[derive(Debug, Default)]
pub struct Session {
    upload: Option<Upload>,
    spice_level: Option<SpiceLevel>,
    error: Option<String>,
    loading: bool,
    /// Bumped on every selection and reset; completions from older
    /// generations are dropped
    generation: u64,
    feedback: FeedbackState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Queries ==========

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Predicting
        } else if self.spice_level.is_some() || self.error.is_some() {
            Phase::ResultShown
        } else if self.upload.is_some() {
            Phase::Previewing
        } else {
            Phase::Idle
        }
    }

    pub fn overlay(&self) -> Option<Overlay> {
        if !self.feedback.is_open() {
            None
        } else if self.feedback.is_submitted() {
            Some(Overlay::FeedbackSubmitted)
        } else {
            Some(Overlay::FeedbackOpen)
        }
    }

    pub fn image(&self) -> Option<&SelectedImage> {
        self.upload.as_ref().map(|upload| &upload.image)
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.upload.as_ref().map(|upload| &upload.preview)
    }

    pub fn spice_level(&self) -> Option<SpiceLevel> {
        self.spice_level
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_predict(&self) -> bool {
        self.upload.is_some() && !self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn feedback(&self) -> &FeedbackState {
        &self.feedback
    }

    // ========== Upload & preview ==========

    /// Replace the current image; any prior result, error or feedback goes away
    pub fn select_image(&mut self, upload: Upload) {
        self.generation += 1;
        self.upload = Some(upload);
        self.spice_level = None;
        self.error = None;
        self.loading = false;
        self.feedback = FeedbackState::default();
    }

    /// Back to the initial screen
    pub fn reset(&mut self) {
        self.generation += 1;
        self.upload = None;
        self.spice_level = None;
        self.error = None;
        self.loading = false;
        self.feedback = FeedbackState::default();
    }

    // ========== Prediction ==========

    /// Start a prediction. Returns None (and changes nothing) without an
    /// image or while a prediction is already running.
    pub fn begin_predict(&mut self) -> Option<PredictTicket> {
        if !self.can_predict() {
            return None;
        }
        let image = self.image()?.clone();

        self.loading = true;
        self.spice_level = None;
        self.error = None;

        Some(PredictTicket {
            generation: self.generation,
            image,
        })
    }

    /// Apply a prediction outcome. Returns false when the outcome belongs to
    /// an upload that has since been replaced or reset.
    pub fn finish_predict(&mut self, generation: u64, outcome: Result<SpiceLevel, ApiError>) -> bool {
        if generation != self.generation || !self.loading {
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(level) => {
                self.spice_level = Some(level);
                self.error = None;
            }
            Err(err) => {
                self.spice_level = None;
                self.error = Some(err.user_message());
            }
        }
        true
    }

    // ========== Feedback ==========

    /// "Not quite?" - only offered while a result is on screen
    pub fn open_feedback(&mut self) -> bool {
        if self.spice_level.is_none() || self.loading {
            return false;
        }
        self.feedback.open = true;
        self.feedback.choice = LevelChoice::Unchosen;
        self.feedback.error = None;
        true
    }

    /// Backdrop click or the close control. Keeps the submitted flag.
    pub fn close_feedback(&mut self) {
        self.feedback.open = false;
    }

    pub fn choose_level(&mut self, level: SpiceLevel) {
        if !self.feedback.open || self.feedback.submitted || level.get() == 0 {
            return;
        }
        self.feedback.choice = self.feedback.choice.toggle(level);
    }

    /// Start a feedback submission. Requires an open modal, a chosen level,
    /// an image and a prediction to correct; at most one submission runs at
    /// a time.
    pub fn begin_feedback(&mut self) -> Option<FeedbackTicket> {
        if !self.feedback.can_submit() {
            return None;
        }
        let actual = self.feedback.choice.level()?;
        let predicted = self.spice_level?;
        let image = self.image()?.clone();

        self.feedback.in_flight = true;
        self.feedback.error = None;

        Some(FeedbackTicket {
            generation: self.generation,
            request: FeedbackRequest {
                image,
                actual,
                predicted: Some(predicted),
            },
        })
    }

    pub fn finish_feedback(&mut self, generation: u64, outcome: Result<(), ApiError>) -> bool {
        if generation != self.generation || !self.feedback.in_flight {
            return false;
        }

        self.feedback.in_flight = false;
        match outcome {
            Ok(()) => self.feedback.submitted = true,
            Err(err) => self.feedback.error = Some(err.feedback_message()),
        }
        true
    }
}
