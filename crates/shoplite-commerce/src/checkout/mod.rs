//! Checkout module.
//!
//! Contains the two-stage checkout state machine, form types,
//! validation, shipping methods, pricing summary, and orders.

mod flow;
mod forms;
mod order;
mod shipping;
mod summary;
mod validation;

pub use flow::{CheckoutSession, Stage};
pub use forms::{PaymentDetails, ShippingAddress};
pub use order::{Order, OrderId, OrderStatus};
pub use shipping::ShippingMethod;
pub use summary::OrderSummary;
pub use validation::{validate_payment, validate_shipping};
