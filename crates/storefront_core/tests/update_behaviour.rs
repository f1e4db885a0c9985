use std::sync::Once;

use pretty_assertions::assert_eq;
use storefront_core::{
    derive_path, fetch_completed, update, AppState, AsyncTransaction, DelayedResult, Effect, Msg,
    Page, Product, Reviews, EMPTY_CATALOGUE_ERROR,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(storefront_logging::initialize_for_tests);
}

fn product(id: &str) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        price: 9.5,
        image: format!("/img/{id}.png"),
        reviews: Reviews {
            average: 4.0,
            count: 3,
        },
    }
}

fn segments(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

fn loaded(products: Vec<Product>) -> AppState {
    let (state, _) = update(AppState::new(), Msg::FetchProducts(AsyncTransaction::Begin));
    let (state, _) = update(state, fetch_completed(Ok(products)));
    state
}

#[test]
fn initial_state_is_idle_landing() {
    let state = AppState::new();
    assert_eq!(state.page(), &Page::Landing(DelayedResult::NotStarted));
    assert!(state.url_path().is_empty());
}

#[test]
fn begin_marks_fetch_in_progress_and_schedules_fetch() {
    init_logging();
    let (mut next, effects) = update(AppState::new(), Msg::FetchProducts(AsyncTransaction::Begin));

    assert_eq!(next.page(), &Page::Landing(DelayedResult::InProgress));
    assert!(next.url_path().is_empty());
    assert_eq!(effects, vec![Effect::FetchCatalogue]);
    assert!(next.consume_dirty());
}

#[test]
fn begin_while_in_flight_does_not_fetch_twice() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::FetchProducts(AsyncTransaction::Begin));
    let (next, effects) = update(state.clone(), Msg::FetchProducts(AsyncTransaction::Begin));

    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn begin_after_failed_fetch_retries() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::FetchProducts(AsyncTransaction::Begin));
    let (state, _) = update(state, fetch_completed(Ok(Vec::new())));
    assert_eq!(
        state.page(),
        &Page::Landing(DelayedResult::Finished(Err(EMPTY_CATALOGUE_ERROR.to_string())))
    );

    let (next, effects) = update(state, Msg::FetchProducts(AsyncTransaction::Begin));
    assert_eq!(next.page(), &Page::Landing(DelayedResult::InProgress));
    assert_eq!(effects, vec![Effect::FetchCatalogue]);

    let (next, _) = update(next, fetch_completed(Ok(vec![product("1")])));
    assert_eq!(
        next.page(),
        &Page::Landing(DelayedResult::Finished(Ok(vec![product("1")])))
    );
}

#[test]
fn begin_after_successful_fetch_reloads_catalogue() {
    init_logging();
    let (next, effects) = update(
        loaded(vec![product("1")]),
        Msg::FetchProducts(AsyncTransaction::Begin),
    );

    assert_eq!(next.page(), &Page::Landing(DelayedResult::InProgress));
    assert_eq!(effects, vec![Effect::FetchCatalogue]);
}

#[test]
fn begin_from_product_page_starts_fresh_fetch() {
    init_logging();
    let p = product("1");
    let (state, _) = update(loaded(vec![p.clone()]), Msg::LoadProductPage(p));
    let (next, effects) = update(state, Msg::FetchProducts(AsyncTransaction::Begin));

    assert_eq!(next.page(), &Page::Landing(DelayedResult::InProgress));
    assert!(next.url_path().is_empty());
    assert_eq!(effects, vec![Effect::FetchCatalogue]);
}

#[test]
fn non_empty_fetch_settles_landing_with_products() {
    init_logging();
    let p1 = product("1");
    let p2 = product("2");

    let msg = fetch_completed(Ok(vec![p1.clone(), p2.clone()]));
    assert_eq!(
        msg,
        Msg::FetchProducts(AsyncTransaction::Completed(Ok(vec![p1.clone(), p2.clone()])))
    );

    let (state, _) = update(AppState::new(), Msg::FetchProducts(AsyncTransaction::Begin));
    let (next, effects) = update(state, msg);
    assert_eq!(
        next.page(),
        &Page::Landing(DelayedResult::Finished(Ok(vec![p1, p2])))
    );
    assert_eq!(next.url_path(), derive_path(next.page()).as_slice());
    assert!(effects.is_empty());
}

#[test]
fn empty_fetch_is_reported_as_error() {
    init_logging();
    let msg = fetch_completed(Ok(Vec::new()));
    assert_eq!(
        msg,
        Msg::FetchProducts(AsyncTransaction::Completed(Err(
            "No products were loaded from the catalogue".to_string()
        )))
    );

    let (state, _) = update(AppState::new(), Msg::FetchProducts(AsyncTransaction::Begin));
    let (next, _) = update(state, msg);
    assert_eq!(
        next.page(),
        &Page::Landing(DelayedResult::Finished(Err(EMPTY_CATALOGUE_ERROR.to_string())))
    );
}

#[test]
fn completion_without_begin_is_dropped() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = update(state.clone(), fetch_completed(Ok(vec![product("1")])));

    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn completion_realigns_url_path() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::FetchProducts(AsyncTransaction::Begin));
    let (state, _) = update(state, Msg::UrlChanged(segments(&["somewhere"])));
    assert_eq!(state.url_path(), segments(&["somewhere"]).as_slice());

    let (next, _) = update(state, fetch_completed(Ok(vec![product("1")])));
    assert!(next.url_path().is_empty());
}

#[test]
fn load_product_page_switches_page_and_navigates() {
    init_logging();
    let p = product("42");
    let state = loaded(vec![p.clone()]);

    let (next, effects) = update(state, Msg::LoadProductPage(p.clone()));

    assert_eq!(next.page(), &Page::ProductDetail(p));
    assert_eq!(next.url_path(), segments(&["products", "42"]).as_slice());
    assert_eq!(
        effects,
        vec![Effect::Navigate {
            segments: segments(&["products", "42"]),
        }]
    );
}

#[test]
fn url_changed_updates_path_only() {
    init_logging();
    let p = product("5");
    let states = vec![
        AppState::new(),
        loaded(vec![p.clone()]),
        update(loaded(vec![p.clone()]), Msg::LoadProductPage(p)).0,
    ];

    for state in states {
        let page_before = state.page().clone();
        let (next, effects) = update(state, Msg::UrlChanged(segments(&["x", "y"])));
        assert_eq!(next.url_path(), segments(&["x", "y"]).as_slice());
        assert_eq!(next.page(), &page_before);
        assert!(effects.is_empty());
    }
}

#[test]
fn url_changed_to_same_path_is_not_dirty() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::UrlChanged(segments(&["a"])));
    assert!(state.consume_dirty());

    let (mut next, _) = update(state, Msg::UrlChanged(segments(&["a"])));
    assert!(!next.consume_dirty());
}

#[test]
fn find_product_searches_loaded_catalogue() {
    let p = product("7");
    let state = loaded(vec![product("1"), p.clone()]);

    assert_eq!(state.find_product("7"), Some(&p));
    assert_eq!(state.find_product("8"), None);
    assert_eq!(AppState::new().find_product("7"), None);
}
