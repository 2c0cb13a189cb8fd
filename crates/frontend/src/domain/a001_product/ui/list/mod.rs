pub mod card;
pub mod state;

use self::card::ProductCard;
use contracts::domain::a001_product::aggregate::{Product, ProductId};
use leptos::prelude::*;

/// Position of `id` in the rendered list.
pub fn grid_position(products: &[Product], id: ProductId) -> Option<usize> {
    products.iter().position(|p| p.id == id)
}

/// `#product-grid`: one card per product, in input order.
///
/// Cards are keyed by id so a card that survives a filter change keeps its
/// node; its stagger index is re-derived from the current list.
#[component]
pub fn ProductGrid(#[prop(into)] products: Signal<Vec<Product>>) -> impl IntoView {
    view! {
        <div id="product-grid" class="product-grid">
            <For
                each=move || products.get()
                key=|product| product.id
                children=move |product| {
                    let id = product.id;
                    let index = Memo::new(move |_| {
                        products.with(|all| grid_position(all, id)).unwrap_or(0)
                    });
                    view! { <ProductCard product=product index=index /> }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::filter::ProductFilter;
    use contracts::domain::a001_product::generator::image_url;
    use contracts::enums::category::Category;

    fn product(id: u32, category: Category) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Item {}", id),
            category,
            price: 10_000,
            image_url: image_url(id as usize),
        }
    }

    #[test]
    fn test_position_follows_filtered_list() {
        let all = vec![
            product(1, Category::Shirts),
            product(2, Category::Pants),
            product(3, Category::Shirts),
            product(4, Category::Pants),
        ];
        assert_eq!(grid_position(&all, ProductId::new(4)), Some(3));

        let mut filter = ProductFilter::default();
        filter.set_category(Category::Pants, true);
        let visible = filter.apply(&all);

        // Card 4 stays mounted but is now second in the grid
        assert_eq!(grid_position(&visible, ProductId::new(4)), Some(1));
        assert_eq!(grid_position(&visible, ProductId::new(2)), Some(0));
        assert_eq!(grid_position(&visible, ProductId::new(3)), None);
    }
}
