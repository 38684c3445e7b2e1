use super::*;
use crate::backend::{BackendError, Catalog};
use crate::prediction::PredictionResult;
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
    mpsc::{self, Receiver, Sender},
};
use std::time::{Duration, Instant};

const POLL_TIMEOUT: Duration = Duration::from_secs(5);

/// Canned outcome a stub call produces.
#[derive(Clone, Debug)]
pub(super) enum Scripted<T> {
    Ok(T),
    Rejected(Option<String>),
    Transport,
    Panic,
}

impl<T: Clone> Scripted<T> {
    fn build(&self) -> Result<T, BackendError> {
        match self {
            Scripted::Ok(value) => Ok(value.clone()),
            Scripted::Rejected(message) => Err(BackendError::Rejected {
                message: message.clone(),
            }),
            Scripted::Transport => Err(BackendError::Transport("connection refused".into())),
            Scripted::Panic => panic!("stub backend panicked"),
        }
    }
}

/// In-process backend that counts calls and records prediction payloads.
pub(super) struct StubBackend {
    catalog: Scripted<Catalog>,
    prediction: Scripted<PredictionResult>,
    gate: Option<Mutex<Receiver<()>>>,
    pub(super) catalog_calls: AtomicUsize,
    pub(super) predict_calls: AtomicUsize,
    pub(super) payloads: Mutex<Vec<Vec<String>>>,
}

impl StubBackend {
    pub(super) fn new(catalog: Scripted<Catalog>, prediction: Scripted<PredictionResult>) -> Self {
        Self {
            catalog,
            prediction,
            gate: None,
            catalog_calls: AtomicUsize::new(0),
            predict_calls: AtomicUsize::new(0),
            payloads: Mutex::new(Vec::new()),
        }
    }

    /// Predictions block until the returned sender releases them, one per send.
    pub(super) fn gated(mut self) -> (Self, Sender<()>) {
        let (tx, rx) = mpsc::channel();
        self.gate = Some(Mutex::new(rx));
        (self, tx)
    }

    pub(super) fn predict_calls(&self) -> usize {
        self.predict_calls.load(Ordering::SeqCst)
    }

    pub(super) fn payloads(&self) -> Vec<Vec<String>> {
        self.payloads.lock().unwrap().clone()
    }
}

impl PredictionBackend for StubBackend {
    fn fetch_catalog(&self) -> Result<Catalog, BackendError> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        self.catalog.build()
    }

    fn predict(&self, symptoms: &[String]) -> Result<PredictionResult, BackendError> {
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        self.payloads.lock().unwrap().push(symptoms.to_vec());
        if let Some(gate) = &self.gate {
            let _ = gate.lock().unwrap().recv_timeout(POLL_TIMEOUT);
        }
        self.prediction.build().map(|mut result| {
            result.symptoms_count = symptoms.len() as u64;
            result
        })
    }
}

pub(super) fn catalog(ids: &[&str]) -> Scripted<Catalog> {
    Scripted::Ok(Catalog::Symptoms(ids.iter().map(|id| id.to_string()).collect()))
}

pub(super) fn diabetes_result() -> PredictionResult {
    PredictionResult {
        label: "Diabetes".into(),
        diabetes_probability: 82.3,
        healthy_probability: 17.7,
        confidence: 82.3,
        symptoms_count: 0,
        message: "Consult a doctor".into(),
    }
}

pub(super) fn healthy_result() -> PredictionResult {
    PredictionResult {
        label: "Not Diabetes".into(),
        diabetes_probability: 12.0,
        healthy_probability: 88.0,
        confidence: 88.0,
        symptoms_count: 0,
        message: "Low risk".into(),
    }
}

pub(super) fn controller_with(backend: &Arc<StubBackend>) -> EguiController {
    let backend: Arc<dyn PredictionBackend> = backend.clone();
    EguiController::new(backend, PredictionSettings::default())
}

/// Build a controller and wait for the catalog load to settle.
pub(super) fn loaded_controller(backend: &Arc<StubBackend>) -> EguiController {
    let mut controller = controller_with(backend);
    controller.load_catalog();
    wait_until(&mut controller, |c| {
        !matches!(
            c.ui.symptoms.catalog,
            CatalogStatus::NotRequested | CatalogStatus::Loading
        )
    });
    controller
}

/// Poll background jobs until `done` holds, panicking after a timeout.
pub(super) fn wait_until(
    controller: &mut EguiController,
    mut done: impl FnMut(&EguiController) -> bool,
) {
    let deadline = Instant::now() + POLL_TIMEOUT;
    loop {
        controller.poll_background_jobs();
        if done(controller) {
            return;
        }
        assert!(Instant::now() < deadline, "timed out waiting for controller");
        std::thread::sleep(Duration::from_millis(5));
    }
}

pub(super) fn wait_for_idle(controller: &mut EguiController) {
    wait_until(controller, |c| !c.has_pending_jobs());
}
