/// Local image handling
///
/// This module handles:
/// - The native file picker
/// - Reading the chosen file off the UI thread
/// - Building a downscaled preview for display

pub mod picker;
pub mod preview;
