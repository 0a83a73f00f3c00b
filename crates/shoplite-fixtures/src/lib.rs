//! Deterministic test-data builders for Shoplite.
//!
//! Fluent builders over the domain types in `shoplite-commerce`, each
//! starting from a fully sampled draft and finalized with `build()`.
//! All randomness flows through an explicit, seedable [`Fake`] sampler.
//!
//! # Example
//!
//! ```rust
//! use shoplite_fixtures::{AddressBuilder, Fake, PaymentBuilder};
//!
//! let mut fake = Fake::seeded(42);
//! let address = AddressBuilder::new(&mut fake)
//!     .in_city("New York")
//!     .with_zip_code("10001")
//!     .build();
//! let payment = PaymentBuilder::new(&mut fake).build();
//! assert_eq!(address.city, "New York");
//! assert_eq!(payment.cvv, "123");
//! ```

mod builders;
mod fake;

pub use builders::{
    AddressBuilder, OrderBuilder, PaymentBuilder, ProductBuilder, TestUser, TestUserRole,
    UserBuilder,
};
pub use fake::Fake;

/// Canned fixture values shared across test suites.
pub mod canned {
    use shoplite_commerce::checkout::{PaymentDetails, ShippingAddress};

    /// The standard valid US shipping address.
    pub fn valid_address() -> ShippingAddress {
        ShippingAddress {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "+1-555-123-4567".to_string(),
            address: "123 Main Street, Apt 4B".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip_code: "10001".to_string(),
            country: "USA".to_string(),
        }
    }

    /// The standard valid test card.
    pub fn valid_card() -> PaymentDetails {
        PaymentDetails {
            card_number: "4242424242424242".to_string(),
            card_name: "John Doe".to_string(),
            expiry_date: "12/25".to_string(),
            cvv: "123".to_string(),
            billing_zip: "10001".to_string(),
        }
    }
}
