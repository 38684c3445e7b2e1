//! Access to the external symptom catalog and prediction service.

pub mod api;

use crate::config::{BackendSettings, ConfigError};
use crate::prediction::PredictionResult;
use url::Url;

pub use api::{BackendError, Catalog};

/// The two calls the prediction form needs from a backend.
///
/// Implementations are shared with the worker threads that run each request.
pub trait PredictionBackend: Send + Sync {
    /// Fetch the symptom catalog.
    fn fetch_catalog(&self) -> Result<Catalog, BackendError>;

    /// Request a prediction for a non-empty set of symptom identifiers.
    fn predict(&self, symptoms: &[String]) -> Result<PredictionResult, BackendError>;
}

/// Backend reached over HTTP with JSON bodies.
pub struct HttpBackend {
    agent: ureq::Agent,
    symptoms_url: Url,
    predict_url: Url,
}

impl HttpBackend {
    /// Resolve endpoint URLs and build an agent from backend settings.
    pub fn new(settings: &BackendSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            agent: crate::http_client::agent(settings),
            symptoms_url: settings.symptoms_url()?,
            predict_url: settings.predict_url()?,
        })
    }

    pub fn symptoms_url(&self) -> &Url {
        &self.symptoms_url
    }

    pub fn predict_url(&self) -> &Url {
        &self.predict_url
    }
}

impl PredictionBackend for HttpBackend {
    fn fetch_catalog(&self) -> Result<Catalog, BackendError> {
        api::fetch_catalog(&self.agent, self.symptoms_url.as_str())
    }

    fn predict(&self, symptoms: &[String]) -> Result<PredictionResult, BackendError> {
        api::request_prediction(&self.agent, self.predict_url.as_str(), symptoms)
    }
}
