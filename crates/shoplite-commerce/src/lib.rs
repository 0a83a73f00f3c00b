//! Storefront domain types and logic for Shoplite.
//!
//! This crate provides the state behind a small demo storefront:
//!
//! - **Catalog**: immutable product reference data with a built-in demo set
//! - **Cart**: line items merged by product, quantities, subtotal
//! - **Checkout**: a two-stage wizard (shipping then payment) with form
//!   validation, shipping methods, promo codes, pricing, and orders
//! - **Session**: per-visit context owning the cart and login state
//!
//! # Example
//!
//! ```rust
//! use shoplite_commerce::prelude::*;
//!
//! let catalog = demo_catalog();
//! let mut session = StoreSession::new();
//!
//! let headphones = catalog.product_by_id(ProductId::new(1)).unwrap().clone();
//! session.add_to_cart(headphones, 2).unwrap();
//!
//! let checkout = session.start_checkout().unwrap();
//! assert_eq!(checkout.stage(), Stage::Shipping);
//! println!("Total: {}", checkout.summary().total);
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod session;

pub use error::CommerceError;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{demo_catalog, Catalog, Product, ProductId};

    // Cart
    pub use crate::cart::{AppliedPromo, Cart, CartLine, PromoCode};

    // Checkout
    pub use crate::checkout::{
        CheckoutSession, Order, OrderId, OrderStatus, OrderSummary, PaymentDetails,
        ShippingAddress, ShippingMethod, Stage,
    };

    // Session
    pub use crate::session::StoreSession;
}
