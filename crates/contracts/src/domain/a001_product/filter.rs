//! Category and price filtering over the full catalog.

use super::aggregate::Product;
use super::generator::PRICE_MAX;
use crate::enums::category::Category;
use std::collections::BTreeSet;

/// Current filter selection.
///
/// An empty category set means "all categories". Categories combine with OR,
/// the price bound with AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    pub categories: BTreeSet<Category>,
    pub max_price: u32,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            categories: BTreeSet::new(),
            max_price: PRICE_MAX,
        }
    }
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok =
            self.categories.is_empty() || self.categories.contains(&product.category);
        category_ok && product.price <= self.max_price
    }

    /// Filters `all` preserving order. Always pass the full catalog, never a
    /// previously filtered view.
    pub fn apply(&self, all: &[Product]) -> Vec<Product> {
        all.iter().filter(|p| self.matches(p)).cloned().collect()
    }

    pub fn set_category(&mut self, category: Category, checked: bool) {
        if checked {
            self.categories.insert(category);
        } else {
            self.categories.remove(&category);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::ProductId;
    use crate::domain::a001_product::generator::{generate, image_url};
    use crate::shared::random::RandomSource;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    struct Seeded(StdRng);

    impl RandomSource for Seeded {
        fn next_unit(&mut self) -> f64 {
            self.0.gen::<f64>()
        }
    }

    /// Replays a fixed list of draws in order
    struct Scripted {
        draws: Vec<f64>,
        pos: usize,
    }

    impl RandomSource for Scripted {
        fn next_unit(&mut self) -> f64 {
            let v = self.draws[self.pos];
            self.pos += 1;
            v
        }
    }

    fn product(id: u32, category: Category, price: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Item {}", id),
            category,
            price,
            image_url: image_url(id as usize - 1),
        }
    }

    fn catalog() -> Vec<Product> {
        generate(120, &mut Seeded(StdRng::seed_from_u64(2024)))
    }

    #[test]
    fn test_default_filter_is_identity() {
        let all = catalog();
        assert_eq!(ProductFilter::default().apply(&all), all);
    }

    #[test]
    fn test_lower_price_never_grows_result() {
        let all = catalog();
        let mut filter = ProductFilter::default();
        filter.set_category(Category::Pants, true);
        let mut previous = usize::MAX;
        for max_price in (0..=PRICE_MAX).rev().step_by(5_000) {
            filter.max_price = max_price;
            let len = filter.apply(&all).len();
            assert!(len <= previous);
            previous = len;
        }
    }

    #[test]
    fn test_categories_are_a_union() {
        let all = catalog();
        let single = |c: Category| {
            let mut f = ProductFilter::default();
            f.set_category(c, true);
            f.apply(&all)
        };

        let mut both = ProductFilter::default();
        both.set_category(Category::Shirts, true);
        both.set_category(Category::Pants, true);
        let result = both.apply(&all);

        assert_eq!(
            result.len(),
            single(Category::Shirts).len() + single(Category::Pants).len()
        );
        assert!(result
            .iter()
            .all(|p| p.category == Category::Shirts || p.category == Category::Pants));
        // Order follows the catalog
        assert!(result.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_hoodies_under_fifty_thousand() {
        let all = vec![
            product(1, Category::Shirts, 10_000),
            product(2, Category::Hoodies, 45_000),
            product(3, Category::Pants, 20_000),
            product(4, Category::Hoodies, 50_000),
            product(5, Category::Hoodies, 50_001),
        ];
        let mut filter = ProductFilter::default();
        filter.set_category(Category::Hoodies, true);
        filter.max_price = 50_000;

        let ids: Vec<u32> = filter.apply(&all).iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_generated_hoodies_under_fifty_thousand() {
        // Per product: category, adjective, noun, price
        let mut rng = Scripted {
            draws: vec![
                0.25, 0.1, 0.45, 0.2, // hoodies, Midnight Bomber, 41_600
                0.25, 0.0, 0.0, 0.5, // hoodies, Velvet Blazer, 101_000
                0.0, 0.3, 0.3, 0.0, // shirts, Classic Scarf, 2_000
            ],
            pos: 0,
        };
        let all = generate(3, &mut rng);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].price, 41_600);
        assert_eq!(all[1].price, 101_000);
        assert_eq!(all[2].category, Category::Shirts);

        let mut filter = ProductFilter::default();
        filter.set_category(Category::Hoodies, true);
        filter.max_price = 50_000;
        let result = filter.apply(&all);

        assert!(result
            .iter()
            .all(|p| p.category == Category::Hoodies && p.price <= 50_000));
        let ids: Vec<u32> = result.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(result[0].name, "Midnight Bomber");
    }

    #[test]
    fn test_unchecking_restores_all_categories() {
        let all = catalog();
        let mut filter = ProductFilter::default();
        filter.set_category(Category::Accessories, true);
        filter.set_category(Category::Accessories, false);
        assert!(filter.categories.is_empty());
        assert_eq!(filter.apply(&all).len(), all.len());
    }
}
