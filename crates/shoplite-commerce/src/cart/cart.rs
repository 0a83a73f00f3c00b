//! Cart and line item types.

use crate::catalog::{Product, ProductId};
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A line in the cart: one product with a positive quantity.
///
/// Invariant: a cart holds at most one line per product ID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The product being purchased.
    pub product: Product,
    /// Quantity (always positive).
    pub quantity: u32,
}

impl CartLine {
    /// Line total: unit price times quantity, un-rounded.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

/// A shopping cart. Created empty at session start; cleared on order
/// placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create a new empty cart.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a product to the cart.
    ///
    /// If a line for the product already exists its quantity is
    /// incremented; otherwise a new line is appended.
    pub fn add(&mut self, product: Product, quantity: u32) -> Result<(), CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }

        if let Some(existing) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            return Ok(());
        }

        self.lines.push(CartLine { product, quantity });
        Ok(())
    }

    /// Add a single unit of a product.
    pub fn add_one(&mut self, product: Product) -> Result<(), CommerceError> {
        self.add(product, 1)
    }

    /// Set the quantity of a line.
    ///
    /// A quantity of zero removes the line. No-op if the product is not
    /// in the cart.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Remove the line for a product. No-op if absent.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The cart lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total item count (sum of line quantities).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of unit price times quantity over all lines, un-rounded.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the line for a product, if present.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, price: f64) -> Product {
        Product::new(id, format!("Product {id}"), price)
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.subtotal().is_zero());
    }

    #[test]
    fn test_add_appends_line() {
        let mut cart = Cart::new();
        cart.add(product(1, 10.0), 2).unwrap();
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = Cart::new();
        cart.add(product(1, 10.0), 1).unwrap();
        cart.add(product(1, 10.0), 2).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_add_zero_quantity_rejected() {
        let mut cart = Cart::new();
        let result = cart.add(product(1, 10.0), 0);
        assert_eq!(result, Err(CommerceError::InvalidQuantity(0)));
    }

    #[test]
    fn test_add_quantity_overflow_rejected() {
        let mut cart = Cart::new();
        cart.add(product(1, 10.0), u32::MAX).unwrap();
        let result = cart.add(product(1, 10.0), 1);
        assert_eq!(result, Err(CommerceError::Overflow));
        assert_eq!(cart.item_count(), u32::MAX);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Cart::new();
        cart.add(product(1, 10.0), 1).unwrap();
        cart.update_quantity(ProductId::new(1), 5);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add(product(1, 10.0), 3).unwrap();
        cart.update_quantity(ProductId::new(1), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(product(1, 10.0), 1).unwrap();
        cart.update_quantity(ProductId::new(99), 4);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(product(1, 10.0), 1).unwrap();
        cart.remove(ProductId::new(99));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(product(1, 10.0), 1).unwrap();
        cart.add(product(2, 20.0), 2).unwrap();
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::new();
        cart.add(product(1, 79.99), 2).unwrap();
        cart.add(product(2, 49.99), 1).unwrap();
        assert!(cart.subtotal().approx_eq(Money::new(209.97), 1e-9));
    }

    #[test]
    fn test_subtotal_order_independent() {
        let mut forward = Cart::new();
        forward.add(product(1, 12.34), 3).unwrap();
        forward.add(product(2, 56.78), 1).unwrap();

        let mut reverse = Cart::new();
        reverse.add(product(2, 56.78), 1).unwrap();
        reverse.add(product(1, 12.34), 3).unwrap();

        assert!(forward.subtotal().approx_eq(reverse.subtotal(), 1e-9));
    }

    #[test]
    fn test_uniqueness_invariant_under_op_sequence() {
        let mut cart = Cart::new();
        cart.add(product(1, 10.0), 1).unwrap();
        cart.add(product(2, 20.0), 2).unwrap();
        cart.add(product(1, 10.0), 4).unwrap();
        cart.update_quantity(ProductId::new(2), 7);
        cart.remove(ProductId::new(1));
        cart.add(product(1, 10.0), 1).unwrap();

        let mut ids: Vec<u32> = cart.lines().iter().map(|l| l.product.id.value()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cart.lines().len());
    }
}
