use crate::navigation::derive_path;
use crate::view_model::AppViewModel;
use crate::{CatalogueResult, DelayedResult, Product};

/// The screen currently shown. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Landing(DelayedResult<CatalogueResult>),
    ProductDetail(Product),
    NotFound,
}

impl Default for Page {
    fn default() -> Self {
        Page::Landing(DelayedResult::NotStarted)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    page: Page,
    url_path: Vec<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn url_path(&self) -> &[String] {
        &self.url_path
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_state(self)
    }

    /// Look up a product in the loaded catalogue.
    pub fn find_product(&self, id: &str) -> Option<&Product> {
        match &self.page {
            Page::Landing(DelayedResult::Finished(Ok(products))) => {
                products.iter().find(|product| product.id == id)
            }
            Page::ProductDetail(product) if product.id == id => Some(product),
            _ => None,
        }
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Switch pages; the URL path follows the page.
    pub(crate) fn set_page(&mut self, page: Page) {
        self.page = page;
        self.url_path = derive_path(&self.page);
        self.dirty = true;
    }

    pub(crate) fn set_url_path(&mut self, segments: Vec<String>) {
        if self.url_path != segments {
            self.url_path = segments;
            self.dirty = true;
        }
    }

    /// Returns `true` when a new fetch should be scheduled.
    ///
    /// A settled catalogue is replaced by a fresh lifecycle; only an in-flight
    /// fetch is left alone.
    pub(crate) fn begin_catalogue_fetch(&mut self) -> bool {
        if matches!(self.page, Page::Landing(DelayedResult::InProgress)) {
            return false;
        }
        self.set_page(Page::Landing(DelayedResult::InProgress));
        true
    }

    /// Settles an in-flight fetch. Results arriving for any other page are dropped,
    /// but the URL path is re-derived either way.
    pub(crate) fn complete_catalogue_fetch(&mut self, result: CatalogueResult) -> bool {
        let settled = match &mut self.page {
            Page::Landing(catalogue) => catalogue.complete(result),
            Page::ProductDetail(_) | Page::NotFound => false,
        };
        if settled {
            self.dirty = true;
        }
        self.set_url_path(derive_path(&self.page));
        settled
    }
}
