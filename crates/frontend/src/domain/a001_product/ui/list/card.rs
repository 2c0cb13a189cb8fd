use crate::shared::config::StoreConfig;
use crate::shared::reveal::{stagger_delay, Reveal};
use crate::usecases::u501_contact_seller::contact_seller;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::common::AggregateId;
use contracts::shared::money::format_price;
use leptos::prelude::*;

#[component]
pub fn ProductCard(
    product: Product,
    /// Current position in the grid
    #[prop(into)]
    index: Signal<usize>,
) -> impl IntoView {
    let config = use_context::<StoreConfig>().expect("StoreConfig not found");
    let cycle = config.effects.stagger_cycle;
    let step = config.effects.stagger_step_secs;
    let delay = Signal::derive(move || stagger_delay(index.get(), cycle, step));
    let price_text = format_price(&config.store.currency_symbol, product.price);

    let name = product.name.clone();
    let price = product.price;
    let order = move |_| {
        if let Err(e) = contact_seller(&config, &name, price) {
            log::warn!("could not open chat for {}: {}", name, e);
        }
    };

    view! {
        <Reveal class="product-card" delay_secs=delay>
            <div class="product-image-container" data-product-id=product.id.as_string()>
                <img
                    src=product.image_url.clone()
                    alt=product.name.clone()
                    loading="lazy"
                    class="product-image"
                />
            </div>
            <div class="product-details">
                <h3 class="product-name">{product.name.clone()}</h3>
                <p class="product-price">{price_text}</p>
                <button class="product-action" on:click=order>
                    "Order on WhatsApp " <i class="fab fa-whatsapp"></i>
                </button>
            </div>
        </Reveal>
    }
}
