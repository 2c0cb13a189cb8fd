//! Synthetic catalog generation.
//!
//! Names, categories and prices are drawn from a caller-supplied
//! [`RandomSource`]; image URLs rotate deterministically through a fixed
//! list so every card points at a known-good picture.

use super::aggregate::{Product, ProductId};
use crate::enums::category::Category;
use crate::shared::random::RandomSource;

pub const ADJECTIVES: [&str; 10] = [
    "Velvet",
    "Midnight",
    "Urban",
    "Classic",
    "Silk",
    "Distressed",
    "Oversized",
    "Tech",
    "Vintage",
    "Modern",
];

pub const NOUNS: [&str; 10] = [
    "Blazer", "Tee", "Trousers", "Scarf", "Bomber", "Denim", "Hoodie", "Coat", "Vest", "Sneakers",
];

pub const PRICE_MIN: u32 = 2_000;
pub const PRICE_MAX: u32 = 200_000;

/// Curated fashion photo identifiers on the image CDN
pub const IMAGE_IDS: [&str; 20] = [
    "1515886657613-9f3515b0c78f",
    "1529139574466-a3023fb6f384",
    "1539109136881-3be4116ac17b",
    "1504194959174-82fa012546e3",
    "1529374255404-311a2a4f1bc9",
    "1506634572416-48cdfe530110",
    "1487222477894-8943e31ef7b2",
    "1595950653106-6c9ebd614d3a",
    "1483985988355-763728e1935b",
    "1550614000-4b9519e68374",
    "1485968579580-c6d095142762",
    "1552374196-1ab2a1c593e8",
    "1509631179647-b8fe0095cbff",
    "1554412933-514a83d2f3c8",
    "1496747611176-843222e1e57c",
    "1617137968427-85924c800a22",
    "1512353087810-25dfcd100962",
    "1611317540266-9ab1c3d69a66",
    "1534030347209-7147fd9e5b7a",
    "1551488852-0801464c5029",
];

/// Image URL for the product generated at `index` (zero-based).
pub fn image_url(index: usize) -> String {
    format!(
        "https://images.unsplash.com/photo-{}?auto=format&fit=crop&w=500&q=80",
        IMAGE_IDS[index % IMAGE_IDS.len()]
    )
}

/// Generates `count` products. Ids run from 1 to `count` in generation order.
///
/// Each product consumes four draws: category, adjective, noun, price.
pub fn generate<R: RandomSource + ?Sized>(count: usize, rng: &mut R) -> Vec<Product> {
    let categories = Category::all();

    (0..count)
        .map(|i| {
            let category = categories[rng.pick_index(categories.len())];
            let adjective = ADJECTIVES[rng.pick_index(ADJECTIVES.len())];
            let noun = NOUNS[rng.pick_index(NOUNS.len())];
            let price = rng.int_inclusive(PRICE_MIN, PRICE_MAX);

            Product {
                id: ProductId::new(i as u32 + 1),
                name: format!("{} {}", adjective, noun),
                category,
                price,
                image_url: image_url(i),
            }
        })
        .collect()
}
