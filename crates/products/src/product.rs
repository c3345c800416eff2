use serde::{Deserialize, Serialize};

use tillfront_core::{Entity, ProductId};

use crate::payload::ProductUpdate;

/// One catalog item, as last reported by the remote product service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Absent (or `null`) on the wire means zero.
    #[serde(default, deserialize_with = "stock_or_zero")]
    pub stock: i64,
}

impl Product {
    pub fn new(id: ProductId, title: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            category: String::new(),
            description: None,
            thumbnail: None,
            stock: 0,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock <= 0
    }

    /// Merge a server echo into this product.
    ///
    /// Fields present in `update` overwrite; absent fields keep their prior
    /// value. A present but blank description or thumbnail clears it. The
    /// identifier never changes, even if the echo carries one.
    pub fn merge(&mut self, update: ProductUpdate) {
        let ProductUpdate {
            id: _,
            title,
            price,
            category,
            description,
            thumbnail,
            stock,
        } = update;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(description) = description {
            self.description = non_blank(description);
        }
        if let Some(thumbnail) = thumbnail {
            self.thumbnail = non_blank(thumbnail);
        }
        if let Some(stock) = stock {
            self.stock = stock;
        }
    }

    /// Non-consuming variant of [`Product::merge`].
    pub fn merged(&self, update: ProductUpdate) -> Self {
        let mut next = self.clone();
        next.merge(update);
        next
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

fn non_blank(s: String) -> Option<String> {
    (!s.trim().is_empty()).then_some(s)
}

fn stock_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}
