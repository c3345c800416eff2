//! Payloads exchanged with the remote product service.

use serde::{Deserialize, Serialize};

use tillfront_core::{DomainResult, ProductId};

use crate::product::Product;
use crate::validation::{validate_price, validate_stock, validate_title};

/// A product submitted for creation (no id yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub stock: i64,
}

impl ProductDraft {
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
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

    /// Title non-empty, price and stock non-negative.
    pub fn validate(&self) -> DomainResult<()> {
        validate_title(&self.title)?;
        validate_price(self.price)?;
        validate_stock(self.stock)?;
        Ok(())
    }

    /// Materialize the draft under a server-assigned id.
    pub fn assign(self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title,
            price: self.price,
            category: self.category,
            description: self.description,
            thumbnail: self.thumbnail,
            stock: self.stock,
        }
    }
}

/// A partial product submitted for update, keyed by an existing id.
///
/// Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
}

impl ProductPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Same preconditions as [`ProductDraft::validate`], applied to the fields
    /// that are present.
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(stock) = self.stock {
            validate_stock(stock)?;
        }
        Ok(())
    }
}

impl From<ProductPatch> for ProductUpdate {
    fn from(patch: ProductPatch) -> Self {
        Self {
            id: None,
            title: patch.title,
            price: patch.price,
            category: patch.category,
            description: patch.description,
            thumbnail: patch.thumbnail,
            stock: patch.stock,
        }
    }
}

/// The service's reply to an update: possibly only a subset of fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(default)]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub stock: Option<i64>,
}

/// One page of the product collection.
///
/// The demo service names the list `products`; `items` is accepted too. A
/// body without either key is an empty page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    #[serde(rename = "products", alias = "items", default)]
    pub products: Vec<Product>,
}

impl ProductPage {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}
