/// State management module
///
/// This module handles all application state:
/// - Shared data structures (data.rs)
/// - The upload/predict/feedback state machine (session.rs)

pub mod data;
pub mod session;

pub use session::{Overlay, Phase, Session};
