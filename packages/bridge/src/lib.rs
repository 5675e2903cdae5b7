#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Client for the external 3D-model-generation bridge.
//!
//! The bridge is a separate service that turns a building footprint,
//! height, and vacancy fraction into a downloadable GLB model. This
//! crate only speaks its wire contract; the bridge being down is an
//! expected condition and maps to a distinct error variant so the API
//! layer can answer 503 instead of 500.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timeout for bridge calls. Model generation is expected to be quick;
/// a hung bridge should fail the request, not the caller's worker.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Request payload for `POST {base_url}/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateModelRequest {
    /// Building id the model is generated for.
    pub building_id: String,
    /// Footprint ring as `[lon, lat]` positions.
    pub footprint_lonlat: Vec<Vec<f64>>,
    /// Building height in meters.
    pub height_m: f64,
    /// Story count, when known.
    pub stories: Option<u32>,
    /// Resolved vacancy fraction, when known.
    pub vacancy_pct: Option<f64>,
    /// Request timestamp (RFC 3339, UTC).
    pub timestamp: String,
}

impl GenerateModelRequest {
    /// Stamps the request with the current UTC time.
    #[must_use]
    pub fn timestamped(
        building_id: String,
        footprint_lonlat: Vec<Vec<f64>>,
        height_m: f64,
        stories: Option<u32>,
        vacancy_pct: Option<f64>,
    ) -> Self {
        Self {
            building_id,
            footprint_lonlat,
            height_m,
            stories,
            vacancy_pct,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Response payload from the bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateModelResponse {
    /// Whether generation succeeded.
    pub ok: bool,
    /// Echoed building id.
    pub building_id: String,
    /// URL of the generated model, relative to the bridge.
    pub model_url: String,
    /// When the model was generated.
    pub generated_at: String,
    /// Free-form notes from the bridge.
    pub notes: String,
}

/// Errors from a bridge call.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The bridge could not be reached (connection refused, timeout).
    #[error("bridge unavailable: {0}")]
    Unavailable(#[source] reqwest::Error),
    /// The bridge answered with a non-success status.
    #[error("bridge error (status {status})")]
    Status {
        /// HTTP status code returned by the bridge.
        status: u16,
    },
    /// The bridge answered 2xx but the body was not the expected JSON.
    #[error("bridge response was not valid JSON: {0}")]
    Parse(#[source] reqwest::Error),
}

/// Thin client around the bridge's single generation endpoint.
#[derive(Debug, Clone)]
pub struct BridgeClient {
    client: reqwest::Client,
    base_url: String,
}

impl BridgeClient {
    /// Creates a client for the bridge at `base_url` (no trailing
    /// slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The bridge base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits a generation request to the bridge.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Unavailable`] when the bridge cannot be
    /// reached, [`BridgeError::Status`] on a non-2xx answer, and
    /// [`BridgeError::Parse`] when the response body is not the
    /// expected JSON shape.
    pub async fn generate(
        &self,
        request: &GenerateModelRequest,
    ) -> Result<GenerateModelResponse, BridgeError> {
        let url = format!("{}/generate", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(BridgeError::Unavailable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BridgeError::Status {
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(BridgeError::Parse)
    }
}
