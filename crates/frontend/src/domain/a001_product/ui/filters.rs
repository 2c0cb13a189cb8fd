use super::list::state::{category_from_checkbox, parse_slider_value, price_label};
use crate::shared::config::StoreConfig;
use contracts::domain::a001_product::filter::ProductFilter;
use contracts::domain::a001_product::generator::{PRICE_MAX, PRICE_MIN};
use contracts::enums::category::Category;
use leptos::prelude::*;

const PRICE_STEP: u32 = 1_000;

/// Category checkboxes (`name="category"`) and the `#price-range` slider.
#[component]
pub fn FilterPanel(filter: RwSignal<ProductFilter>) -> impl IntoView {
    let config = use_context::<StoreConfig>().expect("StoreConfig not found");
    let currency = config.store.currency_symbol;

    let on_price_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        match parse_slider_value(&raw) {
            Some(max_price) => filter.update(|f| f.max_price = max_price),
            None => log::warn!("ignoring price slider value {:?}", raw),
        }
    };

    view! {
        <aside class="shop-filters">
            <div class="filter-group">
                <h3>"Categories"</h3>
                {Category::all()
                    .into_iter()
                    .map(|category| {
                        view! {
                            <label class="filter-option">
                                <input
                                    type="checkbox"
                                    name="category"
                                    value=category.code()
                                    prop:checked=move || filter.with(|f| f.categories.contains(&category))
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        let value = event_target_value(&ev);
                                        match category_from_checkbox(&value) {
                                            Some(category) => {
                                                filter.update(|f| f.set_category(category, checked))
                                            }
                                            None => log::warn!("unknown category checkbox value {:?}", value),
                                        }
                                    }
                                />
                                {category.display_name()}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="filter-group">
                <h3>"Price"</h3>
                <input
                    type="range"
                    id="price-range"
                    min=PRICE_MIN.to_string()
                    max=PRICE_MAX.to_string()
                    step=PRICE_STEP.to_string()
                    prop:value=move || filter.with(|f| f.max_price.to_string())
                    on:input=on_price_input
                />
                <p id="price-display">
                    {move || filter.with(|f| price_label(&currency, f.max_price))}
                </p>
            </div>
        </aside>
    }
}
