/// Client for the remote spice prediction service
///
/// - `client.rs` - reqwest client for `/predict` and `/feedback`
/// - `types.rs` - wire payloads
pub mod client;
pub mod types;

pub use client::SpiceClient;
pub use types::FeedbackRequest;
