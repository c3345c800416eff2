//! Seam between the product store and the remote product service.

use std::sync::Arc;

use tillfront_core::ProductId;
use tillfront_products::{Product, ProductDraft, ProductPatch, ProductUpdate};

use crate::error::ApiError;

/// Remote product collection.
///
/// Implementations report any non-success status as
/// [`ApiError::Status`], except `delete`, which hands the raw status back so
/// the caller can apply its own acceptance rule.
#[allow(async_fn_in_trait)]
pub trait ProductApi {
    /// `GET /products?limit=N`; the page size belongs to the implementation.
    async fn list(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /products/{id}`
    async fn get(&self, id: ProductId) -> Result<Product, ApiError>;

    /// `POST /products/add`
    async fn create(&self, draft: &ProductDraft) -> Result<Product, ApiError>;

    /// `PUT /products/{id}`
    async fn update(&self, id: ProductId, patch: &ProductPatch) -> Result<ProductUpdate, ApiError>;

    /// `DELETE /products/{id}`; returns the HTTP status code.
    async fn delete(&self, id: ProductId) -> Result<u16, ApiError>;
}

impl<A> ProductApi for Arc<A>
where
    A: ProductApi + ?Sized,
{
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        (**self).list().await
    }

    async fn get(&self, id: ProductId) -> Result<Product, ApiError> {
        (**self).get(id).await
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        (**self).create(draft).await
    }

    async fn update(&self, id: ProductId, patch: &ProductPatch) -> Result<ProductUpdate, ApiError> {
        (**self).update(id, patch).await
    }

    async fn delete(&self, id: ProductId) -> Result<u16, ApiError> {
        (**self).delete(id).await
    }
}
