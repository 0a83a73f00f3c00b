//! Shopping cart module.
//!
//! Contains the cart, its line items, and promo code handling.

mod cart;
mod promo;

pub use cart::{Cart, CartLine};
pub use promo::{AppliedPromo, PromoCode};
