//! `reqwest`-backed [`ProductApi`].

use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use tillfront_core::ProductId;
use tillfront_products::{Product, ProductDraft, ProductPage, ProductPatch, ProductUpdate};

use crate::api::ProductApi;
use crate::config::ClientConfig;
use crate::error::ApiError;

/// HTTP client for the remote product service.
///
/// No timeout is configured here; transport failures surface as
/// [`ApiError::Network`].
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    config: ClientConfig,
    client: reqwest::Client,
}

impl HttpProductApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Reuse an existing `reqwest::Client` (connection pool, proxies, ...).
    pub fn with_client(config: ClientConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn product_url(&self, id: ProductId) -> String {
        self.config.url(&format!("/products/{id}"))
    }
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "product service returned an error status");
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }

    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

impl ProductApi for HttpProductApi {
    #[instrument(skip(self), fields(limit = self.config.page_limit()))]
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let url = self
            .config
            .url(&format!("/products?limit={}", self.config.page_limit()));
        debug!(%url, "Sending request");
        let resp = self.client.get(&url).send().await?;
        let page: ProductPage = decode(resp).await?;
        Ok(page.into_products())
    }

    #[instrument(skip(self))]
    async fn get(&self, id: ProductId) -> Result<Product, ApiError> {
        debug!("Sending request");
        let resp = self.client.get(self.product_url(id)).send().await?;
        decode(resp).await
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    async fn create(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        debug!("Sending request");
        let resp = self
            .client
            .post(self.config.url("/products/add"))
            .json(draft)
            .send()
            .await?;
        decode(resp).await
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: ProductId, patch: &ProductPatch) -> Result<ProductUpdate, ApiError> {
        debug!("Sending request");
        let resp = self
            .client
            .put(self.product_url(id))
            .json(patch)
            .send()
            .await?;
        decode(resp).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ProductId) -> Result<u16, ApiError> {
        debug!("Sending request");
        let resp = self.client.delete(self.product_url(id)).send().await?;
        let status = resp.status().as_u16();
        // Body is not inspected beyond the status code.
        let _ = resp.bytes().await;
        Ok(status)
    }
}
