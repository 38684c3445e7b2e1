use crate::backend::{BackendError, Catalog, PredictionBackend};
use crate::prediction::PredictionResult;
use std::{
    sync::{
        Arc,
        mpsc::{Receiver, Sender},
    },
    thread,
};

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    CatalogLoaded(CatalogLoadResult),
    PredictionFinished(PredictionJobResult),
}

#[derive(Debug)]
pub(crate) struct CatalogLoadResult {
    pub(crate) result: Result<Catalog, BackendError>,
}

#[derive(Debug)]
pub(crate) struct PredictionJobResult {
    pub(crate) request_id: u64,
    pub(crate) result: Result<PredictionResult, BackendError>,
}

/// Background request bookkeeping. Each request runs on its own thread and
/// reports back exactly once through the shared message channel.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    catalog_in_progress: bool,
    pending_prediction: Option<u64>,
    next_request_id: u64,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            catalog_in_progress: false,
            pending_prediction: None,
            next_request_id: 1,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn catalog_in_progress(&self) -> bool {
        self.catalog_in_progress
    }

    pub(super) fn begin_catalog_load(&mut self, backend: Arc<dyn PredictionBackend>) {
        if self.catalog_in_progress {
            return;
        }
        self.catalog_in_progress = true;
        let reply = ReplyOnExit::new(self.message_tx.clone(), |result| {
            JobMessage::CatalogLoaded(CatalogLoadResult { result })
        });
        thread::spawn(move || {
            let result = backend.fetch_catalog();
            reply.send(result);
        });
    }

    pub(super) fn clear_catalog_load(&mut self) {
        self.catalog_in_progress = false;
    }

    pub(super) fn prediction_in_progress(&self) -> bool {
        self.pending_prediction.is_some()
    }

    pub(super) fn pending_prediction(&self) -> Option<u64> {
        self.pending_prediction
    }

    /// Start a prediction request and return its id, or `None` if one is already outstanding.
    pub(super) fn begin_prediction(
        &mut self,
        backend: Arc<dyn PredictionBackend>,
        symptoms: Vec<String>,
    ) -> Option<u64> {
        if self.pending_prediction.is_some() {
            return None;
        }
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.pending_prediction = Some(request_id);
        let reply = ReplyOnExit::new(self.message_tx.clone(), move |result| {
            JobMessage::PredictionFinished(PredictionJobResult { request_id, result })
        });
        thread::spawn(move || {
            let result = backend.predict(&symptoms);
            reply.send(result);
        });
        Some(request_id)
    }

    pub(super) fn clear_prediction(&mut self) {
        self.pending_prediction = None;
    }
}

/// Sends the worker's result, or a transport error if the worker unwinds first.
struct ReplyOnExit<T, F>
where
    F: FnOnce(Result<T, BackendError>) -> JobMessage,
{
    tx: Sender<JobMessage>,
    wrap: Option<F>,
    _result: std::marker::PhantomData<fn(T)>,
}

impl<T, F> ReplyOnExit<T, F>
where
    F: FnOnce(Result<T, BackendError>) -> JobMessage,
{
    fn new(tx: Sender<JobMessage>, wrap: F) -> Self {
        Self {
            tx,
            wrap: Some(wrap),
            _result: std::marker::PhantomData,
        }
    }

    fn send(mut self, result: Result<T, BackendError>) {
        if let Some(wrap) = self.wrap.take() {
            let _ = self.tx.send(wrap(result));
        }
    }
}

impl<T, F> Drop for ReplyOnExit<T, F>
where
    F: FnOnce(Result<T, BackendError>) -> JobMessage,
{
    fn drop(&mut self) {
        if let Some(wrap) = self.wrap.take() {
            tracing::error!("Background request ended without a response");
            let _ = self.tx.send(wrap(Err(BackendError::Transport(
                "background request ended without a response".into(),
            ))));
        }
    }
}
