use super::jobs::JobMessage;
use super::*;

impl EguiController {
    /// Drain finished background requests and apply their results.
    ///
    /// Called once per frame from the UI thread; all state changes happen here.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => {
                    break;
                }
            };

            match message {
                JobMessage::CatalogLoaded(message) => {
                    self.jobs.clear_catalog_load();
                    match message.result {
                        Ok(catalog) => self.apply_catalog(catalog),
                        Err(err) => self.handle_catalog_error(err),
                    }
                }
                JobMessage::PredictionFinished(message) => {
                    if self.jobs.pending_prediction() != Some(message.request_id) {
                        tracing::debug!(
                            "Ignoring stale prediction response {}",
                            message.request_id
                        );
                        continue;
                    }
                    self.jobs.clear_prediction();
                    self.clear_busy();
                    match message.result {
                        Ok(result) => self.apply_prediction(result),
                        Err(err) => self.handle_prediction_error(err),
                    }
                }
            }
        }
    }
}
