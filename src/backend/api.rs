//! Wire format and HTTP calls for the catalog and prediction endpoints.

use serde::{Deserialize, Serialize};

use crate::http_client;
use crate::prediction::PredictionResult;

const MAX_CATALOG_RESPONSE_BYTES: usize = 256 * 1024;
const MAX_PREDICT_RESPONSE_BYTES: usize = 64 * 1024;

/// Symptom identifiers as delivered by the catalog endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Catalog {
    /// The response carried a `symptoms` list (possibly empty).
    Symptoms(Vec<String>),
    /// The response had no `symptoms` field.
    Missing,
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The backend was unreachable or the connection failed.
    #[error("HTTP error: {0}")]
    Transport(String),
    /// The body could not be read.
    #[error("Failed to read response: {0}")]
    Body(String),
    /// The body was not the JSON shape we expect.
    #[error("Malformed response: {0}")]
    Json(String),
    /// The backend answered with `success: false`.
    #[error("Prediction rejected: {}", .message.as_deref().unwrap_or("no reason given"))]
    Rejected { message: Option<String> },
}

impl BackendError {
    /// Server-provided rejection text, if this is a domain failure that has one.
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

#[derive(Clone, Debug, Serialize)]
struct PredictRequest<'a> {
    symptoms: &'a [String],
}

#[derive(Clone, Debug, Deserialize)]
struct CatalogWire {
    #[serde(default)]
    symptoms: Option<Vec<String>>,
}

#[derive(Clone, Debug, Deserialize)]
struct PredictResponseWire {
    #[serde(default)]
    success: bool,
    prediction: Option<String>,
    confidence: Option<f64>,
    diabetes_probability: Option<f64>,
    not_diabetes_probability: Option<f64>,
    symptoms_count: Option<u64>,
    message: Option<String>,
    error: Option<String>,
}

/// GET the catalog. The body is interpreted whatever the HTTP status.
pub(crate) fn fetch_catalog(agent: &ureq::Agent, url: &str) -> Result<Catalog, BackendError> {
    let response = match agent.get(url).set("Accept", "application/json").call() {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            tracing::warn!("Symptom catalog returned HTTP {code}");
            response
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(BackendError::Transport(err.to_string()));
        }
    };
    let body = read_body_limited(response, MAX_CATALOG_RESPONSE_BYTES)?;
    parse_catalog(&body)
}

/// POST the selection and interpret the single response.
pub(crate) fn request_prediction(
    agent: &ureq::Agent,
    url: &str,
    symptoms: &[String],
) -> Result<PredictionResult, BackendError> {
    let request = agent
        .post(url)
        .set("Accept", "application/json")
        .set("Content-Type", "application/json");
    let response = match request.send_json(PredictRequest { symptoms }) {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            tracing::warn!("Prediction endpoint returned HTTP {code}");
            response
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(BackendError::Transport(err.to_string()));
        }
    };
    let body = read_body_limited(response, MAX_PREDICT_RESPONSE_BYTES)?;
    parse_prediction(&body)
}

fn parse_catalog(body: &str) -> Result<Catalog, BackendError> {
    let parsed: CatalogWire = serde_json::from_str(body.trim())
        .map_err(|err| BackendError::Json(format!("{err}: {}", snippet(body))))?;
    Ok(match parsed.symptoms {
        Some(symptoms) => Catalog::Symptoms(symptoms),
        None => Catalog::Missing,
    })
}

fn parse_prediction(body: &str) -> Result<PredictionResult, BackendError> {
    let parsed: PredictResponseWire = serde_json::from_str(body.trim())
        .map_err(|err| BackendError::Json(format!("{err}: {}", snippet(body))))?;
    if !parsed.success {
        return Err(BackendError::Rejected {
            message: parsed.error.filter(|message| !message.trim().is_empty()),
        });
    }
    Ok(PredictionResult {
        label: required(parsed.prediction, "prediction")?,
        confidence: required(parsed.confidence, "confidence")?,
        diabetes_probability: required(parsed.diabetes_probability, "diabetes_probability")?,
        healthy_probability: required(
            parsed.not_diabetes_probability,
            "not_diabetes_probability",
        )?,
        symptoms_count: required(parsed.symptoms_count, "symptoms_count")?,
        message: required(parsed.message, "message")?,
    })
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, BackendError> {
    value.ok_or_else(|| BackendError::Json(format!("Missing {field} in successful response")))
}

fn snippet(body: &str) -> String {
    const MAX_CHARS: usize = 120;
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_CHARS {
        return trimmed.to_string();
    }
    let head: String = trimmed.chars().take(MAX_CHARS).collect();
    format!("{head}...")
}

fn read_body_limited(response: ureq::Response, max_bytes: usize) -> Result<String, BackendError> {
    let bytes = http_client::read_response_bytes(response, max_bytes)
        .map_err(|err| BackendError::Body(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| BackendError::Body(err.to_string()))
}
