use crate::navigation::hash_path;
use crate::{AppState, CatalogueResult, DelayedResult, Page, Product};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub page: PageView,
    /// Hash form of the model's URL path, e.g. `#/products/42`.
    pub location: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Landing(CatalogueView),
    ProductDetail(ProductCard),
    NotFound,
}

impl Default for PageView {
    fn default() -> Self {
        PageView::Landing(CatalogueView::Idle)
    }
}

/// One view per `DelayedResult` state, with the settled state split by outcome.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogueView {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Products(Vec<ProductCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
    pub rating: String,
}

impl AppViewModel {
    pub(crate) fn from_state(state: &AppState) -> Self {
        let page = match state.page() {
            Page::Landing(catalogue) => PageView::Landing(catalogue_view(catalogue)),
            Page::ProductDetail(product) => PageView::ProductDetail(ProductCard::from(product)),
            Page::NotFound => PageView::NotFound,
        };
        Self {
            page,
            location: hash_path(state.url_path()),
        }
    }
}

fn catalogue_view(catalogue: &DelayedResult<CatalogueResult>) -> CatalogueView {
    match catalogue {
        DelayedResult::NotStarted => CatalogueView::Idle,
        DelayedResult::InProgress => CatalogueView::Loading,
        DelayedResult::Finished(Err(message)) => CatalogueView::Failed(message.clone()),
        DelayedResult::Finished(Ok(products)) => {
            CatalogueView::Products(products.iter().map(ProductCard::from).collect())
        }
    }
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        let rating = match product.reviews.count {
            0 => "No reviews yet".to_string(),
            1 => format!("{:.1} (1 review)", product.reviews.average),
            n => format!("{:.1} ({n} reviews)", product.reviews.average),
        };
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: format!("${:.2}", product.price),
            image: product.image.clone(),
            rating,
        }
    }
}
