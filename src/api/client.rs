//! HTTP client for the spice prediction service
//!
//! Both endpoints take a multipart body with the image under `file`. The
//! service owns validation; this side only classifies what comes back.

use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use std::time::Duration;

use super::types::{ErrorBody, FeedbackReceipt, FeedbackRequest, PredictResponse};
use crate::error::ApiError;
use crate::state::data::{SelectedImage, SpiceLevel};

pub const PREDICT_PATH: &str = "/predict";
pub const FEEDBACK_PATH: &str = "/feedback";

const FILE_FIELD: &str = "file";
const ACTUAL_LEVEL_FIELD: &str = "actual_spice_level";
const PREDICTED_LEVEL_FIELD: &str = "predicted_spice_level";
const USER_AGENT: &str = concat!("how-hot/", env!("CARGO_PKG_VERSION"));

/// Client for `/predict` and `/feedback`.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct SpiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl SpiceClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Unexpected(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Ask the service for the spice level of `image`
    pub async fn predict(&self, image: &SelectedImage) -> Result<SpiceLevel, ApiError> {
        let form = Form::new().part(FILE_FIELD, file_part(image)?);

        tracing::info!(
            file = %image.file_name,
            content_type = %image.content_type,
            bytes = image.len(),
            "Submitting image for prediction"
        );

        let response = self
            .http
            .post(self.endpoint(PREDICT_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;

        let response = check_status(response).await?;

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Unexpected(e.to_string()))?;

        match SpiceLevel::from_wire(body.spice_level) {
            Some(level) => {
                tracing::info!(spice_level = level.get(), "Prediction received");
                Ok(level)
            }
            None => {
                tracing::warn!(
                    spice_level = body.spice_level,
                    "Prediction service returned a level outside 0..=5"
                );
                Err(ApiError::InvalidSpiceLevel(body.spice_level))
            }
        }
    }

    /// Send a user correction for a previous prediction
    pub async fn submit_feedback(&self, request: &FeedbackRequest) -> Result<(), ApiError> {
        let form = Form::new()
            .part(FILE_FIELD, file_part(&request.image)?)
            .text(ACTUAL_LEVEL_FIELD, request.actual_field())
            .text(PREDICTED_LEVEL_FIELD, request.predicted_field());

        tracing::info!(
            file = %request.image.file_name,
            actual = request.actual.get(),
            predicted = ?request.predicted.map(SpiceLevel::get),
            "Submitting feedback"
        );

        let response = self
            .http
            .post(self.endpoint(FEEDBACK_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;

        let response = check_status(response).await?;

        // The receipt is informational; an unreadable body still counts as accepted.
        let text = response.text().await.unwrap_or_default();
        match serde_json::from_str::<FeedbackReceipt>(&text) {
            Ok(receipt) => tracing::debug!(
                status = ?receipt.status,
                image_url = ?receipt.image_url,
                actual = ?receipt.actual_spice_level,
                "Feedback accepted"
            ),
            Err(_) => tracing::debug!("Feedback accepted without a readable receipt"),
        }

        Ok(())
    }
}

fn file_part(image: &SelectedImage) -> Result<Part, ApiError> {
    Part::bytes(image.bytes.to_vec())
        .file_name(image.file_name.clone())
        .mime_str(&image.content_type)
        .map_err(|e| ApiError::Unexpected(e.to_string()))
}

fn transport_error(err: reqwest::Error) -> ApiError {
    if err.is_builder() {
        // Malformed base URL and the like; not something a retry fixes
        ApiError::Unexpected(err.to_string())
    } else {
        tracing::warn!(error = %err, "Request to prediction service failed");
        ApiError::Request(err.to_string())
    }
}

/// Pass successful responses through, classify the rest
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    tracing::warn!(status = status.as_u16(), url = %response.url(), "Service returned an error status");

    if status == StatusCode::UNSUPPORTED_MEDIA_TYPE {
        return Err(ApiError::UnsupportedMediaType);
    }

    let text = response.text().await.unwrap_or_default();
    let body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();

    match body.message() {
        Some(detail) => Err(ApiError::ServerDetail {
            status: status.as_u16(),
            detail: detail.to_string(),
        }),
        None => Err(ApiError::Request(format!("HTTP {}", status.as_u16()))),
    }
}
