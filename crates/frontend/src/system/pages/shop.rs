use crate::domain::a001_product::ui::filters::FilterPanel;
use crate::domain::a001_product::ui::list::state::create_state;
use crate::domain::a001_product::ui::list::ProductGrid;
use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

/// Catalog with filters. The visible list is always recomputed from the full
/// catalog.
#[component]
pub fn ShopPage() -> impl IntoView {
    let ctx = use_global_context();
    let filter = create_state();

    let visible = Memo::new(move |_| {
        let filter = filter.get();
        let products = ctx.catalog.with_value(|all| filter.apply(all));
        log::debug!(
            "filter {:?} <= {}: {} products",
            filter.categories,
            filter.max_price,
            products.len()
        );
        products
    });

    view! {
        <section class="shop">
            <FilterPanel filter=filter />
            <ProductGrid products=visible />
        </section>
    }
}
