use crate::domain::a001_product::ui::list::card::ProductCard;
use crate::layout::global_context::use_global_context;
use crate::shared::config::StoreConfig;
use crate::shared::parallax::install_parallax;
use crate::shared::reveal::Reveal;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::generator::image_url;
use contracts::enums::category::Category;
use leptos::prelude::*;
use leptos_router::components::A;

pub const FEATURED_COUNT: usize = 4;

/// Highest-priced items of the catalog, most expensive first. Ties keep
/// catalog order.
pub fn featured_products(catalog: &[Product], count: usize) -> Vec<Product> {
    let mut picks: Vec<&Product> = catalog.iter().collect();
    picks.sort_by(|a, b| b.price.cmp(&a.price).then(a.id.cmp(&b.id)));
    picks.into_iter().take(count).cloned().collect()
}

/// Landing page: hero with parallax background, the collection grid and a
/// featured selection from the catalog.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_context::<StoreConfig>().expect("StoreConfig not found");
    let ctx = use_global_context();
    install_parallax(config.effects.parallax_factor);

    let featured = ctx
        .catalog
        .with_value(|all| featured_products(all, FEATURED_COUNT));

    view! {
        <section class="hero">
            <div class="hero-bg"></div>
            <Reveal class="hero-content">
                <h1>{config.store.name.clone()}</h1>
                <p>"Premium fashion, delivered."</p>
                <A href="/shop" attr:class="btn btn-primary">"Shop Now"</A>
            </Reveal>
        </section>

        <section class="collections">
            <Reveal class="section-header">
                <h2>"Collections"</h2>
            </Reveal>
            <div class="collection-grid">
                {Category::all()
                    .into_iter()
                    .enumerate()
                    .map(|(i, category)| {
                        view! {
                            <Reveal class="collection-card">
                                <img src=image_url(i) alt=category.display_name() loading="lazy" />
                                <h3>{category.display_name()}</h3>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="featured">
            <Reveal class="section-header">
                <h2>"Featured"</h2>
            </Reveal>
            <div class="featured-grid">
                {featured
                    .into_iter()
                    .enumerate()
                    .map(|(i, product)| view! { <ProductCard product=product index=Signal::stored(i) /> })
                    .collect_view()}
            </div>
            <Reveal class="section-footer">
                <A href="/shop" attr:class="btn btn-secondary">"View All"</A>
            </Reveal>
        </section>
    }
}
