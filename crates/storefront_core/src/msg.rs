use crate::{AsyncTransaction, CatalogueResult, Product};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Catalogue fetch started or settled.
    FetchProducts(AsyncTransaction<CatalogueResult>),
    /// Browser location changed (back/forward, manual edit).
    UrlChanged(Vec<String>),
    /// User picked a product from the catalogue.
    LoadProductPage(Product),
    /// Product detail page has mounted.
    ProductPageLoaded,
}
