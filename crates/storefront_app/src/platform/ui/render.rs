use storefront_core::{AppViewModel, CatalogueView, PageView, ProductCard};

pub const HELP_LINES: &[&str] = &[
    "Commands:",
    "  open <id>     show a product from the catalogue",
    "  back          go back in history",
    "  forward       go forward in history",
    "  url <where>   type a location (#/path or full URL) into the address bar",
    "  home          return to the catalogue",
    "  quit          leave the storefront",
];

/// Text rendition of the current page, one entry per line.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![format!("[ Storefront ]  {}", view.location)];

    match &view.page {
        PageView::Landing(catalogue) => render_catalogue(catalogue, &mut lines),
        PageView::ProductDetail(card) => render_detail(card, &mut lines),
        PageView::NotFound => lines.push("Page not found.".to_string()),
    }

    lines
}

fn render_catalogue(catalogue: &CatalogueView, lines: &mut Vec<String>) {
    match catalogue {
        CatalogueView::Idle => {}
        CatalogueView::Loading => lines.push("Loading products...".to_string()),
        CatalogueView::Failed(message) => lines.push(format!("Error: {message}")),
        CatalogueView::Products(cards) => {
            lines.push(format!("{} products:", cards.len()));
            lines.extend(cards.iter().map(format_card_row));
        }
    }
}

fn render_detail(card: &ProductCard, lines: &mut Vec<String>) {
    lines.push(card.name.clone());
    lines.push(format!("  Price:   {}", card.price));
    lines.push(format!("  Rating:  {}", card.rating));
    if !card.image.is_empty() {
        lines.push(format!("  Image:   {}", card.image));
    }
}

fn format_card_row(card: &ProductCard) -> String {
    format!(
        "  [{id}] {name} - {price} - {rating}",
        id = card.id,
        name = card.name,
        price = card.price,
        rating = card.rating
    )
}
