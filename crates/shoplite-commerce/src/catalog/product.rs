//! Product types and the built-in demo catalog.

use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ProductId(u32);

impl ProductId {
    /// Create a new product ID.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw numeric ID.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A product in the catalog. Immutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description for the product page.
    pub description: String,
    /// Unit price (non-negative).
    pub price: Money,
    /// Category label (e.g., "electronics").
    pub category: String,
    /// Image reference.
    pub image: String,
    /// Whether the product can currently be purchased.
    pub in_stock: bool,
    /// Average review rating.
    pub rating: f32,
    /// Number of reviews.
    pub review_count: u32,
}

impl Product {
    /// Create a product with listing defaults (in stock, unrated).
    pub fn new(id: u32, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            description: String::new(),
            price: Money::new(price),
            category: String::new(),
            image: String::new(),
            in_stock: true,
            rating: 0.0,
            review_count: 0,
        }
    }
}

/// The built-in demo catalog used by the storefront listing pages.
pub fn demo_catalog() -> Catalog {
    Catalog::new(seed_products())
}

/// A read-only set of products with the lookups the listing pages use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, in listing order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    pub fn product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by ID, failing if it is not in the catalog.
    pub fn require_product(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.product_by_id(id)
            .ok_or(CommerceError::ProductNotFound(id.value()))
    }

    /// All products in a category.
    pub fn products_by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }
}

fn seed_products() -> Vec<Product> {
    let rows: [(u32, &str, &str, f64, &str, &str, bool, f32, u32); 12] = [
        (
            1,
            "Wireless Headphones",
            "Premium noise-cancelling wireless headphones with 30-hour battery life",
            79.99,
            "electronics",
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500",
            true,
            4.5,
            128,
        ),
        (
            2,
            "Bluetooth Speaker",
            "Portable waterproof speaker with 360\u{00b0} sound",
            49.99,
            "electronics",
            "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=500",
            true,
            4.3,
            89,
        ),
        (
            3,
            "Smart Watch",
            "Fitness tracker with heart rate monitor and GPS",
            199.99,
            "electronics",
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=500",
            true,
            4.7,
            256,
        ),
        (
            4,
            "Laptop Backpack",
            "Water-resistant backpack with USB charging port",
            39.99,
            "accessories",
            "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=500",
            true,
            4.4,
            67,
        ),
        (
            5,
            "Mechanical Keyboard",
            "RGB gaming keyboard with Cherry MX switches",
            129.99,
            "electronics",
            "https://images.unsplash.com/photo-1595225476474-87563907a212?w=500",
            true,
            4.8,
            342,
        ),
        (
            6,
            "Wireless Mouse",
            "Ergonomic wireless mouse with precision tracking",
            29.99,
            "electronics",
            "https://images.unsplash.com/photo-1527814050087-3793815479db?w=500",
            true,
            4.2,
            156,
        ),
        (
            7,
            "USB-C Hub",
            "7-in-1 USB-C adapter with HDMI, USB 3.0, and SD card reader",
            34.99,
            "accessories",
            "https://images.unsplash.com/photo-1625948515291-69613efd103f?w=500",
            true,
            4.6,
            94,
        ),
        (
            8,
            "Webcam 1080p",
            "Full HD webcam with auto-focus and dual microphones",
            59.99,
            "electronics",
            "https://images.unsplash.com/photo-1593642632823-8f785ba67e45?w=500",
            false,
            4.5,
            178,
        ),
        (
            9,
            "Phone Stand",
            "Adjustable aluminum phone holder for desk",
            19.99,
            "accessories",
            "https://images.unsplash.com/photo-1556656793-08538906a9f8?w=500",
            true,
            4.1,
            45,
        ),
        (
            10,
            "Laptop Sleeve",
            "Padded 15.6\" laptop case with extra pocket",
            24.99,
            "accessories",
            "https://images.unsplash.com/photo-1588872657578-7efd1f1555ed?w=500",
            true,
            4.3,
            83,
        ),
        (
            11,
            "Wireless Charger",
            "Fast charging wireless pad for smartphones",
            22.99,
            "electronics",
            "https://images.unsplash.com/photo-1591290619762-c588aaf1171e?w=500",
            true,
            4.4,
            112,
        ),
        (
            12,
            "Cable Organizer",
            "Set of 5 cable clips for desk management",
            9.99,
            "accessories",
            "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=500",
            true,
            4.0,
            34,
        ),
    ];

    rows.iter()
        .map(
            |&(id, name, description, price, category, image, in_stock, rating, review_count)| {
                Product {
                    id: ProductId::new(id),
                    name: name.to_string(),
                    description: description.to_string(),
                    price: Money::new(price),
                    category: category.to_string(),
                    image: image.to_string(),
                    in_stock,
                    rating,
                    review_count,
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_size() {
        let catalog = demo_catalog();
        assert_eq!(catalog.products().len(), 12);
    }

    #[test]
    fn test_product_lookup() {
        let catalog = demo_catalog();
        let product = catalog.product_by_id(ProductId::new(1)).unwrap();
        assert_eq!(product.name, "Wireless Headphones");
        assert!(product.price.approx_eq(Money::new(79.99), 1e-9));
    }

    #[test]
    fn test_missing_product() {
        let catalog = demo_catalog();
        assert!(catalog.product_by_id(ProductId::new(999)).is_none());
        assert_eq!(
            catalog.require_product(ProductId::new(999)),
            Err(CommerceError::ProductNotFound(999))
        );
    }

    #[test]
    fn test_category_filter() {
        let catalog = demo_catalog();
        let accessories = catalog.products_by_category("accessories");
        assert_eq!(accessories.len(), 5);
        assert!(accessories.iter().all(|p| p.category == "accessories"));
    }

    #[test]
    fn test_out_of_stock_product() {
        let catalog = demo_catalog();
        let webcam = catalog.product_by_id(ProductId::new(8)).unwrap();
        assert!(!webcam.in_stock);
    }
}
