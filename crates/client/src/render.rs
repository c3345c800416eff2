//! Pure rendering: a product sequence in, a view description out.
//!
//! Nothing here reads or writes store state; callers re-render the whole
//! view whenever the store's revision changes.

use serde::Serialize;

use tillfront_core::ProductId;
use tillfront_products::Product;

pub const EMPTY_MESSAGE: &str = "No products found";
pub const THUMBNAIL_PLACEHOLDER: &str = "https://placehold.co/64x64?text=No+Image";
pub const MISSING_TEXT: &str = "-";
/// Stock below this (and above zero) is flagged as low.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockBadge {
    OutOfStock,
    Low,
    InStock,
}

impl StockBadge {
    pub fn for_stock(stock: i64) -> Self {
        if stock <= 0 {
            StockBadge::OutOfStock
        } else if stock < LOW_STOCK_THRESHOLD {
            StockBadge::Low
        } else {
            StockBadge::InStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockBadge::OutOfStock => "Out of stock",
            StockBadge::Low => "Low stock",
            StockBadge::InStock => "In stock",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub price: String,
    pub stock: i64,
    pub stock_badge: StockBadge,
    pub thumbnail: String,
    pub description: String,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            title: p.title.clone(),
            category: non_blank(&p.category),
            price: format_price(p.price),
            stock: p.stock,
            stock_badge: StockBadge::for_stock(p.stock),
            thumbnail: p
                .thumbnail
                .as_deref()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or(THUMBNAIL_PLACEHOLDER)
                .to_string(),
            description: p
                .description
                .as_deref()
                .map(non_blank)
                .unwrap_or_else(|| MISSING_TEXT.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogView {
    Empty { message: String },
    Table { rows: Vec<ProductRow> },
}

impl CatalogView {
    pub fn is_empty(&self) -> bool {
        matches!(self, CatalogView::Empty { .. })
    }

    pub fn rows(&self) -> &[ProductRow] {
        match self {
            CatalogView::Empty { .. } => &[],
            CatalogView::Table { rows } => rows,
        }
    }

    /// Row ids in display order.
    pub fn ids(&self) -> Vec<ProductId> {
        self.rows().iter().map(|r| r.id).collect()
    }
}

/// Render `products` in order; an empty slice yields the empty state.
pub fn catalog(products: &[Product]) -> CatalogView {
    if products.is_empty() {
        return CatalogView::Empty {
            message: EMPTY_MESSAGE.to_string(),
        };
    }

    CatalogView::Table {
        rows: products.iter().map(ProductRow::from).collect(),
    }
}

pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

fn non_blank(s: &str) -> String {
    if s.trim().is_empty() {
        MISSING_TEXT.to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_renders_empty_state() {
        let view = catalog(&[]);
        assert!(view.is_empty());
        assert_eq!(
            view,
            CatalogView::Empty {
                message: EMPTY_MESSAGE.to_string()
            }
        );
        assert!(view.rows().is_empty());
    }

    #[test]
    fn rows_follow_sequence_order() {
        let products = vec![
            Product::new(ProductId::new(4), "Pen", 1.5).with_stock(10),
            Product::new(ProductId::new(1), "Mug", 4.0),
            Product::new(ProductId::new(2), "Lamp", 20.0).with_stock(3),
        ];
        let view = catalog(&products);
        assert_eq!(
            view.ids(),
            vec![ProductId::new(4), ProductId::new(1), ProductId::new(2)]
        );
    }

    #[test]
    fn row_formats_fields_and_fallbacks() {
        let p = Product::new(ProductId::new(1), "Pen", 1.5).with_stock(3);
        let row = ProductRow::from(&p);

        assert_eq!(row.price, "$1.50");
        assert_eq!(row.stock_badge, StockBadge::Low);
        assert_eq!(row.thumbnail, THUMBNAIL_PLACEHOLDER);
        assert_eq!(row.description, MISSING_TEXT);
        assert_eq!(row.category, MISSING_TEXT);

        let p = p
            .with_thumbnail("pen.png")
            .with_description("Blue ink")
            .with_category("stationery");
        let row = ProductRow::from(&p);
        assert_eq!(row.thumbnail, "pen.png");
        assert_eq!(row.description, "Blue ink");
        assert_eq!(row.category, "stationery");
    }

    #[test]
    fn stock_badges() {
        assert_eq!(StockBadge::for_stock(0), StockBadge::OutOfStock);
        assert_eq!(StockBadge::for_stock(9), StockBadge::Low);
        assert_eq!(StockBadge::for_stock(10), StockBadge::InStock);
        assert_eq!(StockBadge::OutOfStock.label(), "Out of stock");
    }
}
