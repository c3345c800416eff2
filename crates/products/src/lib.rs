//! Catalog domain module.
//!
//! This crate contains the product model, the payloads submitted to the remote
//! product service, local validation and the update merge rule, implemented
//! purely as deterministic logic (no IO, no HTTP, no storage).

pub mod payload;
pub mod product;
pub mod validation;

pub use payload::{ProductDraft, ProductPage, ProductPatch, ProductUpdate};
pub use product::Product;
pub use validation::{validate_price, validate_stock, validate_title};
