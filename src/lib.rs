//! Library exports for the desktop app, the CLI and integration tests.
/// Per-user application directories.
pub mod app_dirs;
/// Symptom catalog and prediction backends.
pub mod backend;
/// Persisted configuration.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
pub(crate) mod http_client;
/// Tracing setup.
pub mod logging;
/// Prediction value types and formatting.
pub mod prediction;
