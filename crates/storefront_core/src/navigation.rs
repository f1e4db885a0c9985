//! Mapping between pages and hash URLs, and the port through which
//! navigation side effects reach the browser.

use crate::{Effect, Page};

/// Name of the same-document event raised after every history push.
pub const NAVIGATION_EVENT: &str = "NavigationEvent";
pub const PRODUCTS_SEGMENT: &str = "products";
/// Sentinel path for `Page::NotFound`.
pub const NOT_FOUND_SEGMENT: &str = "not-found";

/// Canonical path segments for `page`.
pub fn derive_path(page: &Page) -> Vec<String> {
    match page {
        Page::Landing(_) => Vec::new(),
        Page::ProductDetail(product) => vec![PRODUCTS_SEGMENT.to_string(), product.id.clone()],
        Page::NotFound => vec![NOT_FOUND_SEGMENT.to_string()],
    }
}

/// `["products", "42"]` becomes `#/products/42`; no segments become `#/`.
pub fn hash_path(segments: &[String]) -> String {
    format!("#/{}", segments.join("/"))
}

/// Inverse of [`hash_path`]. Accepts the hash with or without the leading `#`.
pub fn segments_from_hash(hash: &str) -> Vec<String> {
    hash.trim_start_matches('#')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Segments encoded in the fragment of a full location href.
pub fn segments_from_href(href: &str) -> Result<Vec<String>, url::ParseError> {
    let parsed = url::Url::parse(href)?;
    Ok(parsed.fragment().map(segments_from_hash).unwrap_or_default())
}

/// Effect that moves the browser to `segments`.
pub fn navigate(segments: Vec<String>) -> Effect {
    Effect::Navigate { segments }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    pub name: &'static str,
    pub bubbles: bool,
    pub cancelable: bool,
}

impl Default for NavigationEvent {
    fn default() -> Self {
        Self {
            name: NAVIGATION_EVENT,
            bubbles: true,
            cancelable: true,
        }
    }
}

/// Browser history and event dispatch, as seen by the effect runner.
pub trait NavigationPort {
    /// Push a new history entry without reloading the document.
    fn push_history(&mut self, hash: &str);
    fn dispatch_event(&mut self, event: NavigationEvent);
}

/// Push the entry for `segments`, then notify listeners in the same document.
pub fn perform_navigation(port: &mut dyn NavigationPort, segments: &[String]) {
    port.push_history(&hash_path(segments));
    port.dispatch_event(NavigationEvent::default());
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCall {
    PushHistory(String),
    DispatchEvent(NavigationEvent),
}

/// Port that only records what it was asked to do.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    pub calls: Vec<NavigationCall>,
}

impl NavigationPort for RecordingNavigator {
    fn push_history(&mut self, hash: &str) {
        self.calls.push(NavigationCall::PushHistory(hash.to_string()));
    }

    fn dispatch_event(&mut self, event: NavigationEvent) {
        self.calls.push(NavigationCall::DispatchEvent(event));
    }
}
