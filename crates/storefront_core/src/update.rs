use crate::navigation::navigate;
use crate::{AppState, AsyncTransaction, CatalogueResult, Effect, Msg, Page};

/// Error reported when the catalogue fetch succeeds but returns no products.
pub const EMPTY_CATALOGUE_ERROR: &str = "No products were loaded from the catalogue";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FetchProducts(AsyncTransaction::Begin) => {
            if state.begin_catalogue_fetch() {
                vec![Effect::FetchCatalogue]
            } else {
                Vec::new()
            }
        }
        Msg::FetchProducts(AsyncTransaction::Completed(result)) => {
            state.complete_catalogue_fetch(result);
            Vec::new()
        }
        Msg::UrlChanged(segments) => {
            // Only the path moves; resolving it back into a page is left to the host.
            state.set_url_path(segments);
            Vec::new()
        }
        Msg::LoadProductPage(product) => {
            state.set_page(Page::ProductDetail(product));
            vec![navigate(state.url_path().to_vec())]
        }
        Msg::ProductPageLoaded => Vec::new(),
    };

    (state, effects)
}

/// Message that settles a catalogue fetch. An empty catalogue counts as a failure.
pub fn fetch_completed(fetched: CatalogueResult) -> Msg {
    let outcome = match fetched {
        Ok(products) if products.is_empty() => Err(EMPTY_CATALOGUE_ERROR.to_string()),
        other => other,
    };
    Msg::FetchProducts(AsyncTransaction::Completed(outcome))
}
