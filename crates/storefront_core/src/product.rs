pub type ErrorMessage = String;
pub type ProductList = Vec<Product>;
pub type CatalogueResult = Result<ProductList, ErrorMessage>;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique within the catalogue; also the last URL segment of the detail page.
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub reviews: Reviews,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Reviews {
    pub average: f64,
    pub count: u32,
}
