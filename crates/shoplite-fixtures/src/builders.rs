//! Fluent builders for test fixture data.
//!
//! Each builder starts from a fully populated draft (sampled from an
//! injected [`Fake`]) and exposes chainable setters; `build()` returns
//! the immutable value.

use crate::fake::Fake;
use serde::{Deserialize, Serialize};
use shoplite_commerce::cart::CartLine;
use shoplite_commerce::catalog::Product;
use shoplite_commerce::checkout::{
    Order, OrderId, OrderStatus, OrderSummary, PaymentDetails, ShippingAddress, ShippingMethod,
};
use shoplite_commerce::Money;

/// Role assigned to a test user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TestUserRole {
    #[default]
    Customer,
    Admin,
}

/// A test account for login scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub premium: bool,
    pub role: TestUserRole,
}

/// Builder for [`TestUser`].
#[derive(Debug, Clone)]
pub struct UserBuilder {
    user: TestUser,
}

impl UserBuilder {
    pub fn new(fake: &mut Fake) -> Self {
        Self {
            user: TestUser {
                email: fake.email(),
                password: "Test@123456".to_string(),
                first_name: fake.first_name(),
                last_name: fake.last_name(),
                phone: fake.phone(),
                premium: false,
                role: TestUserRole::Customer,
            },
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.user.email = email.into();
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.user.password = password.into();
        self
    }

    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.user.first_name = first.into();
        self.user.last_name = last.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.user.phone = phone.into();
        self
    }

    pub fn as_premium(mut self) -> Self {
        self.user.premium = true;
        self
    }

    pub fn as_admin(mut self) -> Self {
        self.user.role = TestUserRole::Admin;
        self
    }

    pub fn build(self) -> TestUser {
        self.user
    }
}

/// Builder for [`ShippingAddress`].
#[derive(Debug, Clone)]
pub struct AddressBuilder {
    address: ShippingAddress,
}

impl AddressBuilder {
    pub fn new(fake: &mut Fake) -> Self {
        Self {
            address: ShippingAddress {
                first_name: fake.first_name(),
                last_name: fake.last_name(),
                email: fake.email(),
                phone: fake.phone(),
                address: fake.street_address(),
                city: fake.city(),
                state: fake.state_abbr(),
                zip_code: fake.zip_code(),
                country: "USA".to_string(),
            },
        }
    }

    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.address.first_name = first.into();
        self.address.last_name = last.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.address.email = email.into();
        self
    }

    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.address.address = street.into();
        self
    }

    pub fn in_city(mut self, city: impl Into<String>) -> Self {
        self.address.city = city.into();
        self
    }

    pub fn in_state(mut self, state: impl Into<String>) -> Self {
        self.address.state = state.into();
        self
    }

    pub fn with_zip_code(mut self, zip: impl Into<String>) -> Self {
        self.address.zip_code = zip.into();
        self
    }

    pub fn in_country(mut self, country: impl Into<String>) -> Self {
        self.address.country = country.into();
        self
    }

    /// Re-sample location fields as a US address.
    pub fn as_us_address(mut self, fake: &mut Fake) -> Self {
        self.address.country = "USA".to_string();
        self.address.state = fake.state_abbr();
        self.address.zip_code = fake.zip_code();
        self
    }

    /// Re-sample location fields as a UK address.
    pub fn as_uk_address(mut self, fake: &mut Fake) -> Self {
        self.address.country = "UK".to_string();
        self.address.state = fake.uk_county();
        self.address.zip_code = fake.uk_postcode();
        self
    }

    pub fn build(self) -> ShippingAddress {
        self.address
    }
}

/// Builder for [`Product`].
#[derive(Debug, Clone)]
pub struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    pub fn new(fake: &mut Fake) -> Self {
        let mut product = Product::new(fake.product_id(), fake.product_name(), fake.price());
        product.category = fake.category();
        product.rating = 4.0;
        product.review_count = 10;
        Self { product }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.product.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.product.name = name.into();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.product.price = Money::new(price);
        self
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.product.category = category.into();
        self
    }

    pub fn out_of_stock(mut self) -> Self {
        self.product.in_stock = false;
        self
    }

    pub fn with_rating(mut self, rating: f32, review_count: u32) -> Self {
        self.product.rating = rating;
        self.product.review_count = review_count;
        self
    }

    pub fn build(self) -> Product {
        self.product
    }
}

/// Builder for [`PaymentDetails`]. Defaults to the standard test card.
#[derive(Debug, Clone)]
pub struct PaymentBuilder {
    payment: PaymentDetails,
}

impl PaymentBuilder {
    pub fn new(fake: &mut Fake) -> Self {
        Self {
            payment: PaymentDetails {
                card_number: "4242424242424242".to_string(),
                card_name: fake.full_name(),
                expiry_date: "12/25".to_string(),
                cvv: "123".to_string(),
                billing_zip: fake.zip_code(),
            },
        }
    }

    pub fn with_card_number(mut self, number: impl Into<String>) -> Self {
        self.payment.card_number = number.into();
        self
    }

    pub fn with_card_name(mut self, name: impl Into<String>) -> Self {
        self.payment.card_name = name.into();
        self
    }

    pub fn with_expiry(mut self, month: &str, year: &str) -> Self {
        self.payment.expiry_date = format!("{month}/{year}");
        self
    }

    pub fn with_cvv(mut self, cvv: impl Into<String>) -> Self {
        self.payment.cvv = cvv.into();
        self
    }

    /// An expiry in the past. The checkout does not calendar-check
    /// expiry dates, so this still validates.
    pub fn as_expired(mut self) -> Self {
        self.payment.expiry_date = "12/20".to_string();
        self
    }

    /// A card number that is well-formed but not a real test card.
    pub fn as_invalid(mut self) -> Self {
        self.payment.card_number = "1234567890123456".to_string();
        self
    }

    pub fn build(self) -> PaymentDetails {
        self.payment
    }
}

/// Builder for [`Order`] records.
///
/// The summary is derived from the accumulated lines and shipping
/// method when `build()` runs.
#[derive(Debug, Clone)]
pub struct OrderBuilder {
    id: OrderId,
    lines: Vec<CartLine>,
    shipping_address: ShippingAddress,
    shipping_method: ShippingMethod,
    payment_method: String,
    status: OrderStatus,
    created_at: i64,
}

impl OrderBuilder {
    pub fn new(fake: &mut Fake) -> Self {
        Self {
            id: OrderId::new(format!("ORD{}", fake.order_ref())),
            lines: Vec::new(),
            shipping_address: AddressBuilder::new(fake).build(),
            shipping_method: ShippingMethod::Standard,
            payment_method: "card ending 4242".to_string(),
            status: OrderStatus::Pending,
            created_at: 0,
        }
    }

    pub fn with_order_id(mut self, id: impl Into<String>) -> Self {
        self.id = OrderId::new(id);
        self
    }

    pub fn add_item(mut self, product: Product, quantity: u32) -> Self {
        self.lines.push(CartLine { product, quantity });
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_shipping_address(mut self, address: ShippingAddress) -> Self {
        self.shipping_address = address;
        self
    }

    pub fn with_shipping_method(mut self, method: ShippingMethod) -> Self {
        self.shipping_method = method;
        self
    }

    pub fn with_payment_method(mut self, label: impl Into<String>) -> Self {
        self.payment_method = label.into();
        self
    }

    pub fn created_at(mut self, timestamp: i64) -> Self {
        self.created_at = timestamp;
        self
    }

    pub fn build(self) -> Order {
        let subtotal: Money = self.lines.iter().map(CartLine::line_total).sum();
        let summary = OrderSummary::compute(subtotal, self.shipping_method, None);

        Order {
            id: self.id,
            lines: self.lines,
            shipping_address: self.shipping_address,
            shipping_method: self.shipping_method,
            payment_method: self.payment_method,
            summary,
            status: self.status,
            created_at: self.created_at,
        }
    }
}
