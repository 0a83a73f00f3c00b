//! Checkout form types.

use serde::{Deserialize, Serialize};

/// Shipping address form data. All fields are plain strings; the
/// required subset is enforced by `validate_shipping`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingAddress {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Phone number (optional in practice).
    pub phone: String,
    /// Street address line.
    pub address: String,
    /// City.
    pub city: String,
    /// State/province code (UI default, not independently validated).
    pub state: String,
    /// Postal/ZIP code.
    pub zip_code: String,
    /// Country (UI default, not independently validated).
    pub country: String,
}

impl ShippingAddress {
    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Format as a single line for the confirmation view.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.address.clone(), self.city.clone()];
        if !self.state.is_empty() {
            parts.push(self.state.clone());
        }
        parts.push(self.zip_code.clone());
        parts.push(self.country.clone());
        parts.join(", ")
    }
}

impl Default for ShippingAddress {
    fn default() -> Self {
        // The checkout form starts blank except for the country selector.
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: "USA".to_string(),
        }
    }
}

/// Payment details form data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PaymentDetails {
    /// Card number.
    pub card_number: String,
    /// Cardholder name.
    pub card_name: String,
    /// Expiry as an `MM/YY` string.
    pub expiry_date: String,
    /// Card verification value.
    pub cvv: String,
    /// Billing ZIP code.
    pub billing_zip: String,
}

impl PaymentDetails {
    /// Label for the order record, e.g. "card ending 3456".
    pub fn method_label(&self) -> String {
        let digits: String = self
            .card_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        if digits.len() >= 4 {
            format!("card ending {}", &digits[digits.len() - 4..])
        } else {
            "card".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_defaults_to_usa() {
        let address = ShippingAddress::default();
        assert_eq!(address.country, "USA");
        assert!(address.first_name.is_empty());
    }

    #[test]
    fn test_full_name() {
        let address = ShippingAddress {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            ..Default::default()
        };
        assert_eq!(address.full_name(), "John Doe");
    }

    #[test]
    fn test_one_line_skips_empty_state() {
        let address = ShippingAddress {
            address: "123 Main Street".to_string(),
            city: "New York".to_string(),
            zip_code: "10001".to_string(),
            ..Default::default()
        };
        assert_eq!(address.one_line(), "123 Main Street, New York, 10001, USA");
    }

    #[test]
    fn test_payment_method_label() {
        let payment = PaymentDetails {
            card_number: "4242424242424242".to_string(),
            ..Default::default()
        };
        assert_eq!(payment.method_label(), "card ending 4242");
    }

    #[test]
    fn test_payment_method_label_short_number() {
        let payment = PaymentDetails {
            card_number: "42".to_string(),
            ..Default::default()
        };
        assert_eq!(payment.method_label(), "card");
    }
}
