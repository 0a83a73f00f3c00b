//! Order pricing summary.

use crate::cart::AppliedPromo;
use crate::checkout::shipping::ShippingMethod;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Sales tax rate applied to the subtotal (not to subtotal + shipping).
pub const TAX_RATE_PERCENT: f64 = 8.0;

/// Monetary breakdown shown in the summary and confirmation views.
///
/// All figures are un-rounded accumulators; rounding happens only when
/// the amounts are displayed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Sum of unit price times quantity over the cart lines.
    pub subtotal: Money,
    /// Fixed cost of the chosen shipping method.
    pub shipping: Money,
    /// 8% of the subtotal.
    pub tax: Money,
    /// Promo discount (zero when no valid code is applied).
    pub discount: Money,
    /// subtotal + shipping + tax - discount.
    pub total: Money,
}

impl OrderSummary {
    /// Compute the summary for a subtotal, shipping method, and optional
    /// applied promo.
    pub fn compute(subtotal: Money, method: ShippingMethod, promo: Option<&AppliedPromo>) -> Self {
        let shipping = method.cost();
        let tax = subtotal.percentage(TAX_RATE_PERCENT);
        let discount = promo.map_or(Money::zero(), |p| p.amount);
        let total = subtotal + shipping + tax - discount;

        Self {
            subtotal,
            shipping,
            tax,
            discount,
            total,
        }
    }

    /// Check if a discount is applied.
    pub fn has_discount(&self) -> bool {
        self.discount.is_positive()
    }
}
