use std::sync::Arc;
use std::thread;
use std::time::Duration;

use storefront_core::{
    fetch_completed, hash_path, perform_navigation, Effect, Msg, NavigationPort, Product, Reviews,
};
use storefront_engine::{EngineEvent, EngineHandle, FetchError, ProductRecord};
use storefront_logging::{storefront_info, storefront_warn};

use super::app::Dispatcher;

/// Executes effects returned by `update`.
///
/// Fetches run on the engine and come back through the dispatcher as exactly one
/// message each; navigation runs synchronously against the port.
pub struct EffectRunner<N: NavigationPort> {
    engine: Arc<EngineHandle>,
    navigator: N,
    startup_delay: Duration,
}

impl<N: NavigationPort> EffectRunner<N> {
    pub fn new(
        engine: EngineHandle,
        navigator: N,
        startup_delay: Duration,
        dispatcher: Dispatcher,
    ) -> Self {
        let runner = Self {
            engine: Arc::new(engine),
            navigator,
            startup_delay,
        };
        runner.spawn_event_pump(dispatcher);
        runner
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchCatalogue => {
                    storefront_info!(
                        "FetchCatalogue delay_ms={}",
                        self.startup_delay.as_millis()
                    );
                    self.engine.load_catalogue(self.startup_delay);
                }
                Effect::Navigate { segments } => {
                    storefront_info!("Navigate to {}", hash_path(&segments));
                    perform_navigation(&mut self.navigator, &segments);
                }
            }
        }
    }

    fn spawn_event_pump(&self, dispatcher: Dispatcher) {
        let engine = self.engine.clone();
        thread::spawn(move || {
            while let Some(event) = engine.recv() {
                match event {
                    EngineEvent::CatalogueLoaded { result } => {
                        if !dispatcher.dispatch(catalogue_message(result)) {
                            break;
                        }
                    }
                }
            }
        });
    }
}

/// Message settling the catalogue fetch. Transport failures become error payloads.
pub fn catalogue_message(result: Result<Vec<ProductRecord>, FetchError>) -> Msg {
    let fetched = match result {
        Ok(records) => Ok(records.into_iter().map(map_product).collect()),
        Err(err) => {
            storefront_warn!("Catalogue unavailable: {}", err);
            Err(format!("Failed to load the catalogue: {err}"))
        }
    };
    fetch_completed(fetched)
}

fn map_product(record: ProductRecord) -> Product {
    Product {
        id: record.id,
        name: record.name,
        price: record.price,
        image: record.image,
        reviews: Reviews {
            average: record.reviews.average,
            count: record.reviews.count,
        },
    }
}
