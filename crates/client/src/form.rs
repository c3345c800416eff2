//! Add/edit form state.
//!
//! Replaces a global "editing" flag with an explicit [`FormMode`] carried by
//! the form itself.

use tillfront_core::ProductId;
use tillfront_events::{EventBus, StoreEvent};
use tillfront_products::{Product, ProductDraft, ProductPatch};

use crate::api::ProductApi;
use crate::error::StoreError;
use crate::store::ProductStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    Edit(ProductId),
}

/// What a successful submit did.
#[derive(Debug, Clone, PartialEq)]
pub enum Submitted {
    Created(Product),
    /// `None` when the edited product is no longer listed locally.
    Updated(Option<Product>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductForm {
    pub mode: FormMode,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    pub thumbnail: String,
    pub stock: i64,
}

impl ProductForm {
    /// Blank form in add mode.
    pub fn for_add() -> Self {
        Self::default()
    }

    /// Form pre-populated from `product`, in edit mode.
    pub fn for_edit(product: &Product) -> Self {
        Self {
            mode: FormMode::Edit(product.id),
            title: product.title.clone(),
            price: product.price,
            category: product.category.clone(),
            description: product.description.clone().unwrap_or_default(),
            thumbnail: product.thumbnail.clone().unwrap_or_default(),
            stock: product.stock,
        }
    }

    /// Fetch `id` from the service and open it for editing.
    pub async fn open_edit<A, B>(
        store: &ProductStore<A, B>,
        id: ProductId,
    ) -> Result<Self, StoreError>
    where
        A: ProductApi,
        B: EventBus<StoreEvent>,
    {
        let product = store.fetch_one(id).await?;
        Ok(Self::for_edit(&product))
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            title: self.title.trim().to_string(),
            price: self.price,
            category: self.category.trim().to_string(),
            description: optional(&self.description),
            thumbnail: optional(&self.thumbnail),
            stock: self.stock,
        }
    }

    /// Every field the form holds, as a patch. A blank description or
    /// thumbnail is sent as an empty string so the service clears it.
    pub fn to_patch(&self) -> ProductPatch {
        ProductPatch {
            title: Some(self.title.trim().to_string()),
            price: Some(self.price),
            category: Some(self.category.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            thumbnail: Some(self.thumbnail.trim().to_string()),
            stock: Some(self.stock),
        }
    }

    /// Create or update depending on the mode. On success the form resets to
    /// a blank add form; on failure it is left as typed.
    pub async fn submit<A, B>(&mut self, store: &mut ProductStore<A, B>) -> Result<Submitted, StoreError>
    where
        A: ProductApi,
        B: EventBus<StoreEvent>,
    {
        let submitted = match self.mode {
            FormMode::Add => Submitted::Created(store.create(self.to_draft()).await?),
            FormMode::Edit(id) => Submitted::Updated(store.update(id, self.to_patch()).await?),
        };
        *self = Self::for_add();
        Ok(submitted)
    }
}

fn optional(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
