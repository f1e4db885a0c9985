use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use futures_util::FutureExt;
use storefront_logging::{storefront_error, storefront_warn};

use crate::fetch::{CatalogueSettings, CatalogueSource, ReqwestCatalogue};
use crate::{EngineEvent, FailureKind, FetchError};

enum EngineCommand {
    LoadCatalogue { delay: Duration },
}

/// Runs catalogue fetches on a tokio runtime owned by a worker thread.
///
/// Every command produces exactly one event; there is no cancellation.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Mutex<mpsc::Receiver<EngineEvent>>,
}

impl EngineHandle {
    pub fn new(settings: CatalogueSettings) -> Self {
        Self::with_source(Arc::new(ReqwestCatalogue::new(settings)))
    }

    pub fn with_source(source: Arc<dyn CatalogueSource>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    storefront_error!("Failed to start engine runtime: {}", err);
                    reject_all(cmd_rx, event_tx, err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(source.as_ref(), command, event_tx).await;
                });
            }
            // Let in-flight fetches finish before the runtime goes away.
            runtime.shutdown_timeout(Duration::from_secs(30));
        });

        Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        }
    }

    /// Wait `delay`, then fetch the catalogue.
    pub fn load_catalogue(&self, delay: Duration) {
        let _ = self.cmd_tx.send(EngineCommand::LoadCatalogue { delay });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    /// Blocks until the next event. `None` once the engine has shut down.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv().ok()
    }
}

async fn handle_command(
    source: &dyn CatalogueSource,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::LoadCatalogue { delay } => {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let result = match AssertUnwindSafe(source.fetch_products())
                .catch_unwind()
                .await
            {
                Ok(result) => result,
                Err(payload) => Err(FetchError::new(
                    FailureKind::SourcePanicked,
                    panic_message(payload.as_ref()),
                )),
            };
            if let Err(err) = &result {
                storefront_warn!("Catalogue fetch failed: {}", err);
            }
            let _ = event_tx.send(EngineEvent::CatalogueLoaded { result });
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn reject_all(
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    reason: String,
) {
    while let Ok(EngineCommand::LoadCatalogue { .. }) = cmd_rx.recv() {
        let error = FetchError::new(FailureKind::Network, reason.clone());
        let _ = event_tx.send(EngineEvent::CatalogueLoaded { result: Err(error) });
    }
}
