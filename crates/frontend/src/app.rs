use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::StoreConfig;
use crate::shared::preferences::{BrowserPreference, MemoryPreference, PreferenceStore};
use crate::shared::reveal::RevealProvider;
use crate::shared::theme::{ThemeProvider, THEME_STORAGE_KEY};
use leptos::prelude::*;

fn theme_store() -> Box<dyn PreferenceStore> {
    if BrowserPreference::is_available() {
        Box::new(BrowserPreference::new(THEME_STORAGE_KEY))
    } else {
        log::warn!("localStorage unavailable, theme will not persist across loads");
        Box::new(MemoryPreference::default())
    }
}

#[component]
pub fn App(config: StoreConfig) -> impl IntoView {
    // Catalog is generated here, once per page load.
    provide_context(AppGlobalContext::new(config.catalog.size));
    let reveal_threshold = config.effects.reveal_threshold;
    provide_context(config);

    view! {
        <ThemeProvider store=theme_store()>
            <RevealProvider threshold=reveal_threshold>
                <AppRoutes />
            </RevealProvider>
        </ThemeProvider>
    }
}
