//! Order types.

use crate::cart::CartLine;
use crate::checkout::forms::ShippingAddress;
use crate::checkout::shipping::ShippingMethod;
use crate::checkout::summary::OrderSummary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque order identifier, e.g. `ORD3F8K2M1QZ`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    /// Create an order ID from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new order ID: `ORD` followed by nine random
    /// uppercase base-36 characters.
    pub fn generate() -> Self {
        use rand::Rng;

        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
        let mut rng = rand::thread_rng();
        let suffix: String = (0..9)
            .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
            .collect();
        Self(format!("ORD{suffix}"))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order being prepared.
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// A placed order: a frozen copy of the cart and checkout state at the
/// moment of placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Generated order identifier.
    pub id: OrderId,
    /// Line items at time of placement.
    pub lines: Vec<CartLine>,
    /// Shipping address.
    pub shipping_address: ShippingAddress,
    /// Chosen shipping method.
    pub shipping_method: ShippingMethod,
    /// Payment method label (e.g., "card ending 4242").
    pub payment_method: String,
    /// Monetary breakdown at time of placement.
    pub summary: OrderSummary,
    /// Order status.
    pub status: OrderStatus,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Order {
    /// Total item count.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// Get current Unix timestamp.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_format() {
        let id = OrderId::generate();
        assert!(id.as_str().starts_with("ORD"));
        assert_eq!(id.as_str().len(), 12);
        assert!(id
            .as_str()
            .chars()
            .skip(3)
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_order_ids_differ() {
        assert_ne!(OrderId::generate(), OrderId::generate());
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(OrderStatus::Pending.as_str(), "pending");
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }
}
