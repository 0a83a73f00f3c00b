//! Shipping method types.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A shipping method with a fixed cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShippingMethod {
    /// Standard (5-7 days), free.
    #[default]
    Standard,
    /// Express (2-3 days), $15.
    Express,
    /// Overnight, $25.
    Overnight,
}

impl ShippingMethod {
    /// The fixed cost of this method.
    pub fn cost(&self) -> Money {
        match self {
            ShippingMethod::Standard => Money::zero(),
            ShippingMethod::Express => Money::new(15.0),
            ShippingMethod::Overnight => Money::new(25.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "standard",
            ShippingMethod::Express => "express",
            ShippingMethod::Overnight => "overnight",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "Standard",
            ShippingMethod::Express => "Express",
            ShippingMethod::Overnight => "Overnight",
        }
    }

    /// Delivery estimate shown next to the method. Overnight carries
    /// none; its name is the estimate.
    pub fn delivery_estimate(&self) -> Option<&'static str> {
        match self {
            ShippingMethod::Standard => Some("5-7 days"),
            ShippingMethod::Express => Some("2-3 days"),
            ShippingMethod::Overnight => None,
        }
    }

    /// Parse a method name as the form radio values spell it.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "standard" => Some(ShippingMethod::Standard),
            "express" => Some(ShippingMethod::Express),
            "overnight" => Some(ShippingMethod::Overnight),
            _ => None,
        }
    }

    /// Check if this method is free.
    pub fn is_free(&self) -> bool {
        self.cost().is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_costs() {
        assert!(ShippingMethod::Standard.cost().is_zero());
        assert!(ShippingMethod::Express
            .cost()
            .approx_eq(Money::new(15.0), 1e-9));
        assert!(ShippingMethod::Overnight
            .cost()
            .approx_eq(Money::new(25.0), 1e-9));
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(ShippingMethod::default(), ShippingMethod::Standard);
        assert!(ShippingMethod::default().is_free());
    }

    #[test]
    fn test_delivery_estimates() {
        assert_eq!(ShippingMethod::Standard.delivery_estimate(), Some("5-7 days"));
        assert_eq!(ShippingMethod::Express.delivery_estimate(), Some("2-3 days"));
        assert_eq!(ShippingMethod::Overnight.delivery_estimate(), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            ShippingMethod::from_str("express"),
            Some(ShippingMethod::Express)
        );
        assert_eq!(ShippingMethod::from_str("drone"), None);
    }
}
