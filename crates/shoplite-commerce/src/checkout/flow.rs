//! Checkout flow state machine.
//!
//! A two-stage wizard: shipping, then payment, then a terminal placed
//! state. Forward transitions are guarded by form validation; the back
//! transition is always allowed. Checkout never starts on an empty cart.

use crate::cart::{AppliedPromo, Cart, CartLine, PromoCode};
use crate::checkout::forms::{PaymentDetails, ShippingAddress};
use crate::checkout::order::{current_timestamp, Order, OrderId, OrderStatus};
use crate::checkout::shipping::ShippingMethod;
use crate::checkout::summary::OrderSummary;
use crate::checkout::validation::{validate_payment, validate_shipping};
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Stages of the checkout wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Shipping address and method.
    Shipping,
    /// Payment details.
    Payment,
    /// Order placed (terminal).
    Placed,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Shipping => "shipping",
            Stage::Payment => "payment",
            Stage::Placed => "placed",
        }
    }
}

/// State for one walk through the checkout wizard.
///
/// Created from a non-empty cart, destroyed when the order is placed or
/// the checkout is abandoned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSession {
    lines: Vec<CartLine>,
    stage: Stage,
    shipping_address: ShippingAddress,
    payment_details: PaymentDetails,
    shipping_method: ShippingMethod,
    promo: Option<AppliedPromo>,
    errors: Vec<String>,
    order: Option<Order>,
}

impl CheckoutSession {
    /// Start checkout from the current cart.
    ///
    /// Returns `EmptyCart` when the cart has no lines; the presentation
    /// layer redirects to the cart view instead of entering the wizard.
    pub fn begin(cart: &Cart) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        Ok(Self {
            lines: cart.lines().to_vec(),
            stage: Stage::Shipping,
            shipping_address: ShippingAddress::default(),
            payment_details: PaymentDetails::default(),
            shipping_method: ShippingMethod::default(),
            promo: None,
            errors: Vec::new(),
            order: None,
        })
    }

    /// The current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Validation errors from the most recent attempt.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Read-only view of the lines being checked out.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Subtotal over the checkout lines, un-rounded.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Fill in the shipping form.
    pub fn set_shipping_address(&mut self, address: ShippingAddress) {
        self.shipping_address = address;
    }

    /// Fill in the payment form.
    pub fn set_payment_details(&mut self, payment: PaymentDetails) {
        self.payment_details = payment;
    }

    /// Choose a shipping method.
    pub fn set_shipping_method(&mut self, method: ShippingMethod) {
        self.shipping_method = method;
    }

    /// The chosen shipping method.
    pub fn shipping_method(&self) -> ShippingMethod {
        self.shipping_method
    }

    /// Apply a promo code. Side action, not state-changing; available
    /// while in shipping or payment.
    ///
    /// A valid code recomputes the discount from the subtotal, so
    /// re-applying never stacks. An unknown code returns
    /// `InvalidPromoCode` and leaves any prior discount standing.
    pub fn apply_promo(&mut self, code: &str) -> Result<Money, CommerceError> {
        if self.stage == Stage::Placed {
            return Err(CommerceError::InvalidTransition {
                from: Stage::Placed.as_str(),
                to: "promo",
            });
        }

        let code = PromoCode::parse(code)?;
        let promo = AppliedPromo::apply(code, self.subtotal());
        let amount = promo.amount;
        self.promo = Some(promo);
        Ok(amount)
    }

    /// The currently applied promo, if any.
    pub fn promo(&self) -> Option<&AppliedPromo> {
        self.promo.as_ref()
    }

    /// Advance from shipping to payment, guarded by shipping validation.
    ///
    /// On failure the stage stays at shipping and the rebuilt error list
    /// is both returned and exposed via `errors()`.
    pub fn continue_to_payment(&mut self) -> Result<(), CommerceError> {
        if self.stage != Stage::Shipping {
            return Err(CommerceError::InvalidTransition {
                from: self.stage.as_str(),
                to: Stage::Payment.as_str(),
            });
        }

        self.errors = validate_shipping(&self.shipping_address);
        if !self.errors.is_empty() {
            return Err(CommerceError::ValidationFailed(self.errors.clone()));
        }

        self.stage = Stage::Payment;
        Ok(())
    }

    /// Go back from payment to shipping. Always allowed, no validation.
    pub fn back_to_shipping(&mut self) -> Result<(), CommerceError> {
        if self.stage != Stage::Payment {
            return Err(CommerceError::InvalidTransition {
                from: self.stage.as_str(),
                to: Stage::Shipping.as_str(),
            });
        }

        self.stage = Stage::Shipping;
        Ok(())
    }

    /// Place the order, guarded by payment validation.
    ///
    /// On success the session transitions to the terminal placed stage
    /// and the frozen order is returned; the caller emits the
    /// order-completed event that clears the cart.
    pub fn place_order(&mut self) -> Result<Order, CommerceError> {
        if self.stage != Stage::Payment {
            return Err(CommerceError::InvalidTransition {
                from: self.stage.as_str(),
                to: Stage::Placed.as_str(),
            });
        }

        self.errors = validate_payment(&self.payment_details);
        if !self.errors.is_empty() {
            return Err(CommerceError::ValidationFailed(self.errors.clone()));
        }

        let order = Order {
            id: OrderId::generate(),
            lines: self.lines.clone(),
            shipping_address: self.shipping_address.clone(),
            shipping_method: self.shipping_method,
            payment_method: self.payment_details.method_label(),
            summary: self.summary(),
            status: OrderStatus::Pending,
            created_at: current_timestamp(),
        };

        self.stage = Stage::Placed;
        self.order = Some(order.clone());
        Ok(order)
    }

    /// Current monetary breakdown for the summary panel.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::compute(self.subtotal(), self.shipping_method, self.promo.as_ref())
    }

    /// The identifier of the placed order, once placed.
    pub fn order_id(&self) -> Option<&OrderId> {
        self.order.as_ref().map(|o| &o.id)
    }
}
