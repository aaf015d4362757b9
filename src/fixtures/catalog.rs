// fixtures/catalog.rs - The shop's bundled sample catalog

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use rust_decimal::Decimal;

use crate::shop::model::Product;

// 2024-01-01 as days since the epoch
const CATALOG_EPOCH_DAYS: i64 = 19_723;

fn listed_on(day: i64) -> NaiveDateTime {
    DateTime::<Utc>::UNIX_EPOCH.naive_utc() + Duration::days(CATALOG_EPOCH_DAYS + day)
}

struct Sample {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: i64,
    original_price: Option<i64>,
    image: &'static str,
    category: &'static str,
    vendor: &'static str,
    rating_tenths: i64,
    reviews: i32,
    in_stock: bool,
    featured: bool,
    listed_day: i64,
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: "1",
        name: "Sacred Rudraksha Mala",
        description: "Authentic 108 bead Rudraksha mala for meditation and spiritual practice",
        price: 1299,
        original_price: Some(1599),
        image: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400",
        category: "Devotional Items",
        vendor: "Divine Beads Co.",
        rating_tenths: 48,
        reviews: 124,
        in_stock: true,
        featured: false,
        listed_day: 10,
    },
    Sample {
        id: "2",
        name: "Tirupati Laddu (Box of 12)",
        description: "Fresh and authentic Tirupati laddus directly from TTD kitchen",
        price: 450,
        original_price: None,
        image: "https://images.unsplash.com/photo-1606313564200-e75d5e30476c?w=400",
        category: "Prasadam",
        vendor: "TTD Official Store",
        rating_tenths: 50,
        reviews: 89,
        in_stock: true,
        featured: true,
        listed_day: 3,
    },
    Sample {
        id: "3",
        name: "Brass Temple Bell",
        description: "Handcrafted brass temple bell with beautiful engravings",
        price: 899,
        original_price: Some(1200),
        image: "https://images.unsplash.com/photo-1609845205347-67c1b9e9d3e7?w=400",
        category: "Handicrafts",
        vendor: "Traditional Crafts",
        rating_tenths: 45,
        reviews: 67,
        in_stock: true,
        featured: false,
        listed_day: 25,
    },
    Sample {
        id: "4",
        name: "Silk Dhoti with Gold Border",
        description: "Premium silk dhoti with traditional gold border work",
        price: 2499,
        original_price: None,
        image: "https://images.unsplash.com/photo-1583391733956-3750e0ff4e8b?w=400",
        category: "Clothing",
        vendor: "Silk Heritage",
        rating_tenths: 47,
        reviews: 43,
        in_stock: false,
        featured: false,
        listed_day: 7,
    },
    Sample {
        id: "5",
        name: "Miniature Venkateswara Idol",
        description: "Beautiful miniature idol of Lord Venkateswara in brass",
        price: 1599,
        original_price: None,
        image: "https://images.unsplash.com/photo-1597131922203-9e9e8f6fbf3e?w=400",
        category: "Souvenirs",
        vendor: "Divine Idols",
        rating_tenths: 49,
        reviews: 156,
        in_stock: true,
        featured: true,
        listed_day: 18,
    },
    Sample {
        id: "6",
        name: "Sandalwood Incense Sticks",
        description: "Pure sandalwood incense sticks for prayer and meditation",
        price: 299,
        original_price: Some(399),
        image: "https://images.unsplash.com/photo-1571580402230-8ab4f8c1bbab?w=400",
        category: "Devotional Items",
        vendor: "Mysore Sandalwood",
        rating_tenths: 46,
        reviews: 201,
        in_stock: true,
        featured: false,
        listed_day: 30,
    },
];

/// The six products the shop page ships with, in display order
pub fn sample_products() -> Vec<Product> {
    SAMPLES
        .iter()
        .map(|s| Product {
            id: s.id.to_string(),
            name: s.name.to_string(),
            description: s.description.to_string(),
            price: Decimal::from(s.price),
            original_price: s.original_price.map(Decimal::from),
            category: s.category.to_string(),
            vendor: s.vendor.to_string(),
            rating: Decimal::new(s.rating_tenths, 1),
            review_count: s.reviews,
            in_stock: s.in_stock,
            is_authentic: true,
            featured: s.featured,
            image_url: Some(s.image.to_string()),
            created_at: listed_on(s.listed_day),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::model::KNOWN_CATEGORIES;

    #[test]
    fn test_sample_catalog_shape() {
        let products = sample_products();
        assert_eq!(products.len(), 6);
        assert!(products.iter().all(|p| KNOWN_CATEGORIES.contains(&p.category.as_str())));
        assert_eq!(products.iter().filter(|p| !p.in_stock).count(), 1);
    }

    #[test]
    fn test_sample_original_prices_are_not_below_price() {
        for product in sample_products() {
            if let Some(original) = product.original_price {
                assert!(original >= product.price, "{}", product.name);
            }
        }
    }

    #[test]
    fn test_listing_dates_start_in_2024() {
        let first = listed_on(0);
        assert_eq!(first.format("%Y-%m-%d").to_string(), "2024-01-01");
    }
}
