//! Store session context.
//!
//! One explicit object owns the per-visit mutable state (cart, login)
//! instead of leaving it implicit at the top of a UI tree. Created at
//! session start, reset at session end; the cart is cleared when an
//! order completes.

use crate::cart::Cart;
use crate::catalog::{Catalog, Product, ProductId};
use crate::checkout::{CheckoutSession, Order, OrderId};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Mutable per-visit state shared by the listing, cart, and checkout
/// views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StoreSession {
    cart: Cart,
    user_email: Option<String>,
    last_order_id: Option<OrderId>,
}

impl StoreSession {
    /// Create a fresh session: empty cart, logged out.
    pub fn new() -> Self {
        Self::default()
    }

    /// The session cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Mutable access for the cart-page interactions.
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Add a product from a listing page.
    pub fn add_to_cart(&mut self, product: Product, quantity: u32) -> Result<(), CommerceError> {
        self.cart.add(product, quantity)
    }

    /// Add a catalog product by ID, as the product detail route does.
    pub fn add_from_catalog(
        &mut self,
        catalog: &Catalog,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), CommerceError> {
        let product = catalog.require_product(product_id)?.clone();
        self.cart.add(product, quantity)
    }

    /// Update a cart line from the cart page.
    pub fn update_cart_quantity(&mut self, product_id: ProductId, quantity: u32) {
        self.cart.update_quantity(product_id, quantity);
    }

    /// Log in. Only the email is tracked; there is no real auth here.
    pub fn login(&mut self, email: impl Into<String>) {
        self.user_email = Some(email.into());
    }

    /// Log out. The cart survives logout; only user state resets.
    pub fn logout(&mut self) {
        self.user_email = None;
    }

    /// Check if a user is logged in.
    pub fn is_logged_in(&self) -> bool {
        self.user_email.is_some()
    }

    /// The logged-in user's email, if any.
    pub fn user_email(&self) -> Option<&str> {
        self.user_email.as_deref()
    }

    /// Enter checkout. Fails with `EmptyCart` when there is nothing to
    /// buy; the caller redirects to the cart view.
    pub fn start_checkout(&self) -> Result<CheckoutSession, CommerceError> {
        CheckoutSession::begin(&self.cart)
    }

    /// Handle the order-completed event: clear the cart and remember
    /// the order id for the confirmation view.
    pub fn complete_order(&mut self, order: &Order) {
        self.cart.clear();
        self.last_order_id = Some(order.id.clone());
    }

    /// The most recently placed order id, for the confirmation view.
    pub fn last_order_id(&self) -> Option<&OrderId> {
        self.last_order_id.as_ref()
    }

    /// Reset everything to the session-start state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::{PaymentDetails, ShippingAddress, Stage};

    fn seeded_session() -> StoreSession {
        let mut session = StoreSession::new();
        session
            .add_to_cart(Product::new(1, "Test Product", 25.0), 2)
            .unwrap();
        session
    }

    #[test]
    fn test_new_session_state() {
        let session = StoreSession::new();
        assert!(session.cart().is_empty());
        assert!(!session.is_logged_in());
        assert!(session.last_order_id().is_none());
    }

    #[test]
    fn test_login_logout_keeps_cart() {
        let mut session = seeded_session();
        session.login("testuser@example.com");
        assert_eq!(session.user_email(), Some("testuser@example.com"));

        session.logout();
        assert!(!session.is_logged_in());
        assert_eq!(session.cart().item_count(), 2);
    }

    #[test]
    fn test_add_from_catalog() {
        let catalog = crate::catalog::demo_catalog();
        let mut session = StoreSession::new();

        session
            .add_from_catalog(&catalog, ProductId::new(1), 2)
            .unwrap();
        assert_eq!(session.cart().item_count(), 2);

        let result = session.add_from_catalog(&catalog, ProductId::new(999), 1);
        assert_eq!(result, Err(CommerceError::ProductNotFound(999)));
        assert_eq!(session.cart().item_count(), 2);
    }

    #[test]
    fn test_checkout_guard_on_empty_cart() {
        let session = StoreSession::new();
        assert_eq!(
            session.start_checkout().unwrap_err(),
            CommerceError::EmptyCart
        );
    }

    #[test]
    fn test_order_completion_clears_cart() {
        let mut session = seeded_session();

        let mut checkout = session.start_checkout().unwrap();
        checkout.set_shipping_address(ShippingAddress {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: "testuser@example.com".to_string(),
            address: "123 Main Street".to_string(),
            city: "New York".to_string(),
            zip_code: "10001".to_string(),
            ..Default::default()
        });
        checkout.continue_to_payment().unwrap();
        checkout.set_payment_details(PaymentDetails {
            card_number: "4242424242424242".to_string(),
            card_name: "Test User".to_string(),
            expiry_date: "12/25".to_string(),
            cvv: "123".to_string(),
            billing_zip: "10001".to_string(),
        });

        let order = checkout.place_order().unwrap();
        assert_eq!(checkout.stage(), Stage::Placed);

        session.complete_order(&order);
        assert!(session.cart().is_empty());
        assert_eq!(session.last_order_id(), Some(&order.id));
    }

    #[test]
    fn test_reset() {
        let mut session = seeded_session();
        session.login("testuser@example.com");
        session.reset();
        assert_eq!(session, StoreSession::new());
    }
}
