use crate::shared::config::StoreConfig;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_context::<StoreConfig>().expect("StoreConfig not found");

    view! {
        <footer class="footer">
            <p>{format!("© {} - Premium Fashion", config.store.name)}</p>
        </footer>
    }
}
