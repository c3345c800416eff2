//! Local product list kept in step with the remote product service.

use std::collections::HashSet;

use tracing::{debug, info, instrument, warn};

use tillfront_core::{Entity, OperationId, ProductId};
use tillfront_events::{Event, EventBus, StoreEvent, StoreOperation};
use tillfront_products::{Product, ProductDraft, ProductPatch};

use crate::api::ProductApi;
use crate::error::{ApiError, StoreError};
use crate::gate::ConfirmGate;
use crate::loading::LoadingState;
use crate::render::{self, CatalogView};

/// The only status accepted as a successful delete.
pub const DELETE_SUCCESS_STATUS: u16 = 200;

/// Result of a confirmed-or-declined delete.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The confirmation gate said no; nothing was sent.
    Declined,
    /// The service acknowledged the delete. `removed` is the local entry, if
    /// one matched.
    Deleted { removed: Option<Product> },
}

/// In-memory product list plus the calls that keep it consistent with the
/// remote service.
///
/// The list is a cache of last-known-good state in display order; the
/// service is authoritative. Mutating methods take `&mut self`, so one store
/// handle has at most one request outstanding.
#[derive(Debug)]
pub struct ProductStore<A, B> {
    api: A,
    bus: B,
    products: Vec<Product>,
    loading: LoadingState,
    revision: u64,
}

impl<A, B> ProductStore<A, B>
where
    A: ProductApi,
    B: EventBus<StoreEvent>,
{
    pub fn new(api: A, bus: B) -> Self {
        Self {
            api,
            bus,
            products: Vec::new(),
            loading: LoadingState::new(),
            revision: 0,
        }
    }

    /// Current sequence, in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.position_of(id).map(|idx| &self.products[idx])
    }

    fn position_of(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Bumped every time the sequence changes; renderers redraw when it moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Handle onto the in-flight counter.
    pub fn loading(&self) -> LoadingState {
        self.loading.clone()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Full view of the current sequence.
    pub fn view(&self) -> CatalogView {
        render::catalog(&self.products)
    }

    /// Replace the sequence with the first page of the remote collection
    /// (page size is the transport's, see [`ClientConfig`](crate::ClientConfig)).
    /// Ids stay unique: when the page repeats an id only its first entry is
    /// kept.
    ///
    /// On failure the sequence is left as it was; callers should present it
    /// as stale (typically the empty state).
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<&[Product], StoreError> {
        let op = StoreOperation::Load;
        let op_id = self.begin(op);

        let result = {
            let _guard = self.loading.begin();
            self.api.list().await
        };

        match result {
            Ok(products) => {
                let products = first_per_id(products);
                info!(count = products.len(), "Products loaded");
                self.products = products;
                self.touch();
                self.succeed(op_id, op, format!("Loaded {} products", self.products.len()));
                Ok(&self.products)
            }
            Err(e) => {
                let err = StoreError::Fetch(e.to_string());
                self.fail(op_id, op, &err);
                Err(err)
            }
        }
    }

    /// Create a product remotely and prepend the server's copy.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create(&mut self, draft: ProductDraft) -> Result<Product, StoreError> {
        let op = StoreOperation::Create;
        if let Err(e) = draft.validate() {
            return Err(self.reject(op, e.into()));
        }

        let op_id = self.begin(op);
        let result = {
            let _guard = self.loading.begin();
            self.api.create(&draft).await
        };

        let created = match result {
            Ok(created) => created,
            Err(e) => {
                let err = StoreError::sync(op, e.to_string());
                self.fail(op_id, op, &err);
                return Err(err);
            }
        };

        if self.get(created.id).is_some() {
            let err = StoreError::sync(
                op,
                format!(
                    "service reported success but assigned id {} which is already listed locally",
                    created.id
                ),
            );
            self.fail(op_id, op, &err);
            return Err(err);
        }

        info!(product_id = %created.id, "Product created");
        self.products.insert(0, created.clone());
        self.touch();
        self.succeed(op_id, op, format!("Product \"{}\" added", created.title));
        Ok(created)
    }

    /// Read one product for pre-populating an edit form. Never touches the
    /// local sequence.
    #[instrument(skip(self))]
    pub async fn fetch_one(&self, id: ProductId) -> Result<Product, StoreError> {
        let op = StoreOperation::FetchOne(id);
        let op_id = self.begin(op);

        let result = {
            let _guard = self.loading.begin();
            self.api.get(id).await
        };

        match result {
            Ok(product) => {
                self.succeed(op_id, op, format!("Product {id} fetched"));
                Ok(product)
            }
            Err(e) if e.is_not_found() => {
                let err = StoreError::NotFound(id);
                self.fail(op_id, op, &err);
                Err(err)
            }
            Err(e) => {
                let err = StoreError::sync(op, e.to_string());
                self.fail(op_id, op, &err);
                Err(err)
            }
        }
    }

    /// Send `patch` for `id` and merge the echo into the local entry.
    ///
    /// Returns the merged entry, or `None` when `id` is not listed locally
    /// (the echo is discarded, never inserted).
    #[instrument(skip(self, patch))]
    pub async fn update(
        &mut self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, StoreError> {
        let op = StoreOperation::Update(id);
        if let Err(e) = patch.validate() {
            return Err(self.reject(op, e.into()));
        }

        let op_id = self.begin(op);
        let result = {
            let _guard = self.loading.begin();
            self.api.update(id, &patch).await
        };

        let echo = match result {
            Ok(echo) => echo,
            Err(e) => {
                let err = StoreError::sync(op, e.to_string());
                self.fail(op_id, op, &err);
                return Err(err);
            }
        };

        if echo.id.is_some_and(|echoed| echoed != id) {
            warn!(echoed = ?echo.id, "update echo carries a different id; keeping the local one");
        }

        let merged = match self.position_of(id) {
            Some(idx) => {
                let entry = &mut self.products[idx];
                entry.merge(echo);
                Some(entry.clone())
            }
            None => {
                debug!("no local entry for updated product; discarding echo");
                None
            }
        };

        if merged.is_some() {
            self.touch();
        }
        info!(product_id = %id, "Product updated");
        self.succeed(op_id, op, format!("Product {id} updated"));
        Ok(merged)
    }

    /// Delete `id` after asking `gate`.
    ///
    /// Declining is a no-op (no request, no notification). Only
    /// [`DELETE_SUCCESS_STATUS`] counts as success; any other status leaves
    /// the sequence untouched.
    #[instrument(skip(self, gate))]
    pub async fn delete<G>(&mut self, id: ProductId, gate: &mut G) -> Result<DeleteOutcome, StoreError>
    where
        G: ConfirmGate + ?Sized,
    {
        let label = self
            .get(id)
            .map(|p| format!("\"{}\"", p.title))
            .unwrap_or_else(|| format!("product {id}"));
        if !gate.confirm(&format!("Delete {label}?")) {
            debug!("delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        let op = StoreOperation::Delete(id);
        let op_id = self.begin(op);
        let result = {
            let _guard = self.loading.begin();
            self.api.delete(id).await
        };

        let status = match result {
            Ok(status) => status,
            Err(e) => {
                let err = StoreError::sync(op, e.to_string());
                self.fail(op_id, op, &err);
                return Err(err);
            }
        };

        if status != DELETE_SUCCESS_STATUS {
            let err = StoreError::sync(
                op,
                ApiError::Status {
                    status,
                    body: format!("expected status {DELETE_SUCCESS_STATUS}"),
                }
                .to_string(),
            );
            self.fail(op_id, op, &err);
            return Err(err);
        }

        let removed = self.position_of(id).map(|idx| self.products.remove(idx));
        if removed.is_some() {
            self.touch();
        }

        info!(product_id = %id, "Product deleted");
        self.succeed(op_id, op, format!("Product {id} deleted"));
        Ok(DeleteOutcome::Deleted { removed })
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn begin(&self, op: StoreOperation) -> OperationId {
        let op_id = OperationId::new();
        self.publish(StoreEvent::started(op_id, op));
        op_id
    }

    fn succeed(&self, op_id: OperationId, op: StoreOperation, message: String) {
        self.publish(StoreEvent::succeeded(op_id, op, message));
    }

    fn fail(&self, op_id: OperationId, op: StoreOperation, err: &StoreError) {
        warn!(op = op.as_str(), error = %err, "store operation failed");
        self.publish(StoreEvent::failed(op_id, op, err.to_string()));
    }

    /// Validation failure: report it without a preceding `Started`.
    fn reject(&self, op: StoreOperation, err: StoreError) -> StoreError {
        self.fail(OperationId::new(), op, &err);
        err
    }

    fn publish(&self, event: StoreEvent) {
        let kind = event.event_type();
        match self.bus.publish(event) {
            Ok(delivered) => debug!(event = kind, delivered, "store event published"),
            Err(e) => warn!(event = kind, error = ?e, "failed to publish store event"),
        }
    }
}

/// Drop repeated ids, keeping the first entry for each.
fn first_per_id(mut products: Vec<Product>) -> Vec<Product> {
    let mut seen = HashSet::with_capacity(products.len());
    products.retain(|p| {
        let first = seen.insert(p.id);
        if !first {
            warn!(product_id = %p.id, title = %p.title, "page repeats a product id; dropping the later entry");
        }
        first
    });
    products
}
