//! Promo code types.

use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A recognized promo code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromoCode {
    /// `SAVE10`: 10% of subtotal.
    Save10,
    /// `SAVE20`: 20% of subtotal.
    Save20,
}

impl PromoCode {
    /// Parse a user-entered code. Codes are case-sensitive, as the
    /// storefront treats them.
    pub fn parse(code: &str) -> Result<Self, CommerceError> {
        match code {
            "SAVE10" => Ok(PromoCode::Save10),
            "SAVE20" => Ok(PromoCode::Save20),
            other => Err(CommerceError::InvalidPromoCode(other.to_string())),
        }
    }

    /// The code string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PromoCode::Save10 => "SAVE10",
            PromoCode::Save20 => "SAVE20",
        }
    }

    /// Discount as a percentage of subtotal.
    pub fn percent(&self) -> f64 {
        match self {
            PromoCode::Save10 => 10.0,
            PromoCode::Save20 => 20.0,
        }
    }
}

/// A promo code applied against a subtotal.
///
/// Re-applying a code recomputes the amount from the current subtotal;
/// the discount never stacks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AppliedPromo {
    /// The code.
    pub code: PromoCode,
    /// The resulting discount amount, un-rounded.
    pub amount: Money,
}

impl AppliedPromo {
    /// Apply a code to a subtotal.
    pub fn apply(code: PromoCode, subtotal: Money) -> Self {
        Self {
            code,
            amount: subtotal.percentage(code.percent()),
        }
    }

    /// Recompute the amount against a (possibly changed) subtotal.
    pub fn recompute(&mut self, subtotal: Money) {
        self.amount = subtotal.percentage(self.code.percent());
    }
}
