//! Checkout form validation.
//!
//! Each validator rebuilds the message list from scratch on every
//! attempt; messages are never accumulated across attempts. Payment
//! rules stop at presence/length checks: no Luhn, no calendar
//! comparison of the expiry date.

use crate::checkout::forms::{PaymentDetails, ShippingAddress};

/// Validate the shipping stage. Returns the full list of user-facing
/// messages; empty means the form passes.
pub fn validate_shipping(address: &ShippingAddress) -> Vec<String> {
    let mut errors = Vec::new();

    if address.first_name.is_empty() {
        errors.push("First name is required".to_string());
    }
    if address.last_name.is_empty() {
        errors.push("Last name is required".to_string());
    }
    if address.email.is_empty() {
        errors.push("Email is required".to_string());
    } else if !address.email.contains('@') {
        errors.push("Email must be valid".to_string());
    }
    if address.address.is_empty() {
        errors.push("Address is required".to_string());
    }
    if address.city.is_empty() {
        errors.push("City is required".to_string());
    }
    if address.zip_code.is_empty() {
        errors.push("ZIP code is required".to_string());
    }

    errors
}

/// Validate the payment stage.
pub fn validate_payment(payment: &PaymentDetails) -> Vec<String> {
    let mut errors = Vec::new();

    if payment.card_number.is_empty() || payment.card_number.len() < 16 {
        errors.push("Valid card number is required".to_string());
    }
    if payment.card_name.is_empty() {
        errors.push("Cardholder name is required".to_string());
    }
    if payment.expiry_date.is_empty() {
        errors.push("Expiry date is required".to_string());
    }
    if payment.cvv.is_empty() || payment.cvv.len() != 3 {
        errors.push("Valid CVV is required".to_string());
    }

    errors
}
