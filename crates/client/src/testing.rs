//! In-memory stand-in for the remote product service.

use std::sync::Mutex;

use tillfront_core::ProductId;
use tillfront_products::{Product, ProductDraft, ProductPatch, ProductUpdate};

use crate::api::ProductApi;
use crate::config::DEFAULT_PAGE_LIMIT;
use crate::error::ApiError;
use crate::loading::LoadingState;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Get(ProductId),
    Create(ProductDraft),
    Update(ProductId, ProductPatch),
    Delete(ProductId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Echo {
    /// Reply to updates with the whole stored product.
    Full,
    /// Reply with only the id and the patched fields.
    PatchOnly,
}

#[derive(Debug)]
struct FakeState {
    products: Vec<Product>,
    page_limit: u32,
    next_id: u64,
    calls: Vec<Call>,
    fail_next: Option<ApiError>,
    delete_status: u16,
    echo: Echo,
    loading_watch: Option<LoadingState>,
    loading_seen: Vec<bool>,
}

#[derive(Debug)]
pub struct FakeProductApi {
    state: Mutex<FakeState>,
}

impl FakeProductApi {
    pub fn new(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id.get()).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(FakeState {
                products,
                page_limit: DEFAULT_PAGE_LIMIT,
                next_id,
                calls: Vec::new(),
                fail_next: None,
                delete_status: 200,
                echo: Echo::Full,
                loading_watch: None,
                loading_seen: Vec::new(),
            }),
        }
    }

    pub fn set_page_limit(&self, limit: u32) {
        self.state.lock().unwrap().page_limit = limit;
    }

    pub fn fail_next(&self, err: ApiError) {
        self.state.lock().unwrap().fail_next = Some(err);
    }

    pub fn set_delete_status(&self, status: u16) {
        self.state.lock().unwrap().delete_status = status;
    }

    pub fn set_echo(&self, echo: Echo) {
        self.state.lock().unwrap().echo = echo;
    }

    pub fn set_next_id(&self, id: u64) {
        self.state.lock().unwrap().next_id = id;
    }

    /// Record `loading.is_loading()` at the moment each request arrives.
    pub fn watch_loading(&self, loading: LoadingState) {
        self.state.lock().unwrap().loading_watch = Some(loading);
    }

    pub fn loading_seen(&self) -> Vec<bool> {
        self.state.lock().unwrap().loading_seen.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn server_ids(&self) -> Vec<ProductId> {
        self.state.lock().unwrap().products.iter().map(|p| p.id).collect()
    }

    fn enter(&self, call: Call) -> Result<std::sync::MutexGuard<'_, FakeState>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if let Some(watch) = state.loading_watch.clone() {
            state.loading_seen.push(watch.is_loading());
        }
        match state.fail_next.take() {
            Some(err) => Err(err),
            None => Ok(state),
        }
    }
}

fn not_found(id: ProductId) -> ApiError {
    ApiError::Status {
        status: 404,
        body: format!("Product with id '{id}' not found"),
    }
}

impl ProductApi for FakeProductApi {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let state = self.enter(Call::List)?;
        let limit = state.page_limit as usize;
        Ok(state.products.iter().take(limit).cloned().collect())
    }

    async fn get(&self, id: ProductId) -> Result<Product, ApiError> {
        let state = self.enter(Call::Get(id))?;
        state
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        let mut state = self.enter(Call::Create(draft.clone()))?;
        let id = ProductId::new(state.next_id);
        state.next_id += 1;
        let product = draft.clone().assign(id);
        state.products.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: ProductId, patch: &ProductPatch) -> Result<ProductUpdate, ApiError> {
        let mut state = self.enter(Call::Update(id, patch.clone()))?;
        let echo = state.echo;
        let stored = state.products.iter_mut().find(|p| p.id == id).map(|p| {
            p.merge(patch.clone().into());
            p.clone()
        });

        Ok(match (echo, stored) {
            (Echo::Full, Some(p)) => ProductUpdate {
                id: Some(p.id),
                title: Some(p.title),
                price: Some(p.price),
                category: Some(p.category),
                description: Some(p.description.unwrap_or_default()),
                thumbnail: Some(p.thumbnail.unwrap_or_default()),
                stock: Some(p.stock),
            },
            _ => ProductUpdate {
                id: Some(id),
                ..patch.clone().into()
            },
        })
    }

    async fn delete(&self, id: ProductId) -> Result<u16, ApiError> {
        let mut state = self.enter(Call::Delete(id))?;
        let status = state.delete_status;
        if status == 200 {
            state.products.retain(|p| p.id != id);
        }
        Ok(status)
    }
}

/// Products 1, 2, 3 as the service would list them.
pub fn three_products() -> Vec<Product> {
    vec![
        Product::new(ProductId::new(1), "Notebook", 3.25)
            .with_category("stationery")
            .with_stock(40),
        Product::new(ProductId::new(2), "Mug", 7.0)
            .with_category("kitchen")
            .with_stock(12)
            .with_description("Ceramic, 350ml")
            .with_thumbnail("https://cdn.example/mug.png"),
        Product::new(ProductId::new(3), "Lamp", 24.99)
            .with_category("home")
            .with_stock(5),
    ]
}
