//! Storefront engine: remote catalogue access and asynchronous effect execution.
mod engine;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use fetch::{CatalogueSettings, CatalogueSource, ReqwestCatalogue};
pub use types::{EngineEvent, FailureKind, FetchError, ProductRecord, ReviewRecord};
