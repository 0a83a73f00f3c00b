//! Deterministic fake-data generation.
//!
//! A seedable sampler over small word pools. Builders take the sampler
//! explicitly, so fixture data is reproducible from a seed instead of
//! depending on an implicit global generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas",
];

const STREETS: &[&str] = &[
    "Main Street", "Oak Avenue", "Maple Drive", "Cedar Lane", "Elm Street", "Park Avenue",
    "Washington Boulevard", "Lake Road", "Hill Street", "Baker Street",
];

const CITIES: &[&str] = &[
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "Austin",
];

const STATES: &[&str] = &[
    "NY", "CA", "IL", "TX", "AZ", "PA", "FL", "OH", "GA", "WA",
];

const COUNTIES: &[&str] = &[
    "Greater London",
    "West Midlands",
    "Merseyside",
    "South Yorkshire",
    "Kent",
];

const PRODUCT_ADJECTIVES: &[&str] = &[
    "Sleek", "Rustic", "Ergonomic", "Compact", "Handmade", "Refined", "Durable", "Modern",
];

const PRODUCT_NOUNS: &[&str] = &[
    "Chair", "Lamp", "Keyboard", "Speaker", "Backpack", "Mug", "Notebook", "Charger",
];

const CATEGORIES: &[&str] = &["electronics", "accessories", "home", "office"];

/// A seedable fake-data sampler.
#[derive(Debug, Clone)]
pub struct Fake {
    rng: StdRng,
}

impl Fake {
    /// Create a sampler with a fixed seed; the same seed always
    /// produces the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a sampler from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    fn pick<'a>(&mut self, pool: &[&'a str]) -> &'a str {
        pool[self.rng.gen_range(0..pool.len())]
    }

    pub fn first_name(&mut self) -> String {
        self.pick(FIRST_NAMES).to_string()
    }

    pub fn last_name(&mut self) -> String {
        self.pick(LAST_NAMES).to_string()
    }

    pub fn full_name(&mut self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }

    /// An email derived from a fresh name and a numeric suffix.
    pub fn email(&mut self) -> String {
        let first = self.first_name().to_lowercase();
        let last = self.last_name().to_lowercase();
        let n: u32 = self.rng.gen_range(1..1000);
        format!("{first}.{last}{n}@example.com")
    }

    pub fn phone(&mut self) -> String {
        format!(
            "+1-555-{:03}-{:04}",
            self.rng.gen_range(100..1000),
            self.rng.gen_range(0..10000)
        )
    }

    pub fn street_address(&mut self) -> String {
        format!("{} {}", self.rng.gen_range(1..2000), self.pick(STREETS))
    }

    pub fn city(&mut self) -> String {
        self.pick(CITIES).to_string()
    }

    pub fn state_abbr(&mut self) -> String {
        self.pick(STATES).to_string()
    }

    pub fn uk_county(&mut self) -> String {
        self.pick(COUNTIES).to_string()
    }

    /// A five-digit US ZIP code.
    pub fn zip_code(&mut self) -> String {
        format!("{:05}", self.rng.gen_range(0..100000u32))
    }

    /// A UK-style postcode, e.g. "NW1 6XE".
    pub fn uk_postcode(&mut self) -> String {
        let letter = |rng: &mut StdRng| (b'A' + rng.gen_range(0..26u8)) as char;
        format!(
            "{}{}{} {}{}{}",
            letter(&mut self.rng),
            letter(&mut self.rng),
            self.rng.gen_range(1..10),
            self.rng.gen_range(1..10),
            letter(&mut self.rng),
            letter(&mut self.rng),
        )
    }

    pub fn product_name(&mut self) -> String {
        format!("{} {}", self.pick(PRODUCT_ADJECTIVES), self.pick(PRODUCT_NOUNS))
    }

    pub fn category(&mut self) -> String {
        self.pick(CATEGORIES).to_string()
    }

    /// A price between 1.00 and 500.00 with cent precision.
    pub fn price(&mut self) -> f64 {
        f64::from(self.rng.gen_range(100..50000u32)) / 100.0
    }

    /// A product ID outside the demo catalog range.
    pub fn product_id(&mut self) -> u32 {
        self.rng.gen_range(1000..100000)
    }

    /// An order-id-shaped string: 10 uppercase alphanumeric characters.
    pub fn order_ref(&mut self) -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
        (0..10)
            .map(|_| CHARSET[self.rng.gen_range(0..CHARSET.len())] as char)
            .collect()
    }
}

impl Default for Fake {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = Fake::seeded(42);
        let mut b = Fake::seeded(42);
        assert_eq!(a.first_name(), b.first_name());
        assert_eq!(a.email(), b.email());
        assert_eq!(a.zip_code(), b.zip_code());
    }

    #[test]
    fn test_email_shape() {
        let mut fake = Fake::seeded(7);
        let email = fake.email();
        assert!(email.contains('@'));
        assert!(email.ends_with("@example.com"));
    }

    #[test]
    fn test_zip_is_five_digits() {
        let mut fake = Fake::seeded(7);
        for _ in 0..20 {
            let zip = fake.zip_code();
            assert_eq!(zip.len(), 5);
            assert!(zip.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_price_bounds() {
        let mut fake = Fake::seeded(7);
        for _ in 0..50 {
            let price = fake.price();
            assert!((1.0..500.0).contains(&price));
        }
    }
}
