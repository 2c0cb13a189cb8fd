use crate::shared::random::BrowserRandom;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::generator::generate;
use leptos::prelude::*;

/// App-wide state shared by the layout and pages.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Mobile navigation panel visibility
    pub nav_open: RwSignal<bool>,
    /// Full catalog, generated once per page load
    pub catalog: StoredValue<Vec<Product>>,
}

impl AppGlobalContext {
    pub fn new(catalog_size: usize) -> Self {
        let catalog = generate(catalog_size, &mut BrowserRandom);
        log::info!("catalog generated: {} products", catalog.len());

        Self {
            nav_open: RwSignal::new(false),
            catalog: StoredValue::new(catalog),
        }
    }

    pub fn toggle_nav(&self) {
        self.nav_open.update(|val| *val = !*val);
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
