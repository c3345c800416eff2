//! `tillfront-client`
//!
//! **Responsibility:** the point-of-sale catalog client.
//!
//! This crate provides:
//! - [`ProductStore`]: the local product list, reconciled with the remote
//!   product service after every call
//! - [`HttpProductApi`]: the `reqwest` transport behind the [`ProductApi`] seam
//! - [`ProductForm`]: add/edit form state
//! - [`render`]: a pure view of the product list
//!
//! The remote service is the authority; the store is a best-effort cache of
//! its last reply.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod gate;
pub mod http;
pub mod loading;
pub mod render;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use api::ProductApi;
pub use config::ClientConfig;
pub use error::{ApiError, StoreError};
pub use form::{FormMode, ProductForm, Submitted};
pub use gate::{Answer, ConfirmGate};
pub use http::HttpProductApi;
pub use loading::LoadingState;
pub use render::CatalogView;
pub use store::{DELETE_SUCCESS_STATUS, DeleteOutcome, ProductStore};

pub use tillfront_events::{InMemoryEventBus, StoreEvent, StoreOperation};
pub use tillfront_products::{Product, ProductDraft, ProductPatch};
