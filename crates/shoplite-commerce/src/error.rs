//! Storefront error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// Checkout may not start with an empty cart.
    #[error("Cannot check out with an empty cart")]
    EmptyCart,

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    /// A form failed validation; the messages are user-facing.
    #[error("Validation failed: {}", .0.join(", "))]
    ValidationFailed(Vec<String>),

    /// Promo code is not recognized. Non-fatal; any prior discount stands.
    #[error("Invalid promo code: {0}")]
    InvalidPromoCode(String),

    /// Quantity must be a positive integer.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in quantity calculation")]
    Overflow,
}
