//! `tillfront-core` — building blocks shared by the catalog front end.
//!
//! This crate contains **pure** primitives (no IO, no HTTP).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{OperationId, ProductId};
