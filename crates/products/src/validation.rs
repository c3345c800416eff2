//! Local precondition checks, applied before any write request is sent.

use tillfront_core::{DomainError, DomainResult};

pub fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::validation("title cannot be empty"));
    }
    Ok(())
}

/// Price must be a finite, non-negative amount.
pub fn validate_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() {
        return Err(DomainError::validation("price must be a finite number"));
    }
    if price < 0.0 {
        return Err(DomainError::validation(format!(
            "price cannot be negative (got {price})"
        )));
    }
    Ok(())
}

pub fn validate_stock(stock: i64) -> DomainResult<()> {
    if stock < 0 {
        return Err(DomainError::validation(format!(
            "stock cannot be negative (got {stock})"
        )));
    }
    Ok(())
}
