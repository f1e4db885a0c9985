//! Storefront core: pure state machine, URL synchronizer and view-model helpers.
mod delayed;
mod effect;
mod msg;
mod navigation;
mod product;
mod state;
mod update;
mod view_model;

pub use delayed::{AsyncTransaction, DelayedResult};
pub use effect::Effect;
pub use msg::Msg;
pub use navigation::{
    derive_path, hash_path, navigate, perform_navigation, segments_from_hash, segments_from_href,
    NavigationCall, NavigationEvent, NavigationPort, RecordingNavigator, NAVIGATION_EVENT,
    NOT_FOUND_SEGMENT, PRODUCTS_SEGMENT,
};
pub use product::{CatalogueResult, ErrorMessage, Product, ProductList, Reviews};
pub use state::{AppState, Page};
pub use update::{fetch_completed, update, EMPTY_CATALOGUE_ERROR};
pub use view_model::{AppViewModel, CatalogueView, PageView, ProductCard};
