/// Wire payloads exchanged with the prediction service
use serde::Deserialize;

use crate::state::data::{SelectedImage, SpiceLevel};

/// Body of a successful `/predict` response
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    pub spice_level: i64,
}

/// Body of an error response. `detail` is usually a string, but validation
/// errors from the service put a list here, so it stays untyped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Non-empty string detail, if any
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(|detail| detail.as_str())
            .filter(|detail| !detail.is_empty())
    }
}

/// Body of a successful `/feedback` response (informational only)
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackReceipt {
    pub status: Option<String>,
    pub image_url: Option<String>,
    pub actual_spice_level: Option<i64>,
}

/// A user correction ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRequest {
    pub image: SelectedImage,
    pub actual: SpiceLevel,
    /// None when no prediction exists; encoded as "0" on the wire
    pub predicted: Option<SpiceLevel>,
}

impl FeedbackRequest {
    pub fn actual_field(&self) -> String {
        self.actual.to_string()
    }

    pub fn predicted_field(&self) -> String {
        self.predicted
            .map(|level| level.to_string())
            .unwrap_or_else(|| "0".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"file too large"}"#).unwrap();
        assert_eq!(body.message(), Some("file too large"));

        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":[{"loc":["body","file"],"msg":"field required"}]}"#)
                .unwrap();
        assert_eq!(body.message(), None);

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message(), None);
    }

    #[test]
    fn test_feedback_fields() {
        let request = FeedbackRequest {
            image: SelectedImage::new("curry.jpg", vec![1, 2, 3]),
            actual: SpiceLevel::new(4).unwrap(),
            predicted: None,
        };
        assert_eq!(request.actual_field(), "4");
        assert_eq!(request.predicted_field(), "0");

        let request = FeedbackRequest {
            predicted: SpiceLevel::new(2),
            ..request
        };
        assert_eq!(request.predicted_field(), "2");
    }
}
