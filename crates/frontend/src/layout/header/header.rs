use crate::layout::global_context::use_global_context;
use crate::shared::config::StoreConfig;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_global_context();
    let config = use_context::<StoreConfig>().expect("StoreConfig not found");

    view! {
        <header class="header">
            <nav class="navbar">
                <A href="/" attr:class="logo">{config.store.name}</A>

                <ul class="nav-links" class:active=move || ctx.nav_open.get()>
                    <li><A href="/">"Home"</A></li>
                    <li><A href="/shop">"Shop"</A></li>
                </ul>

                <div class="nav-actions">
                    <ThemeToggle />
                    <button
                        class="mobile-menu-btn"
                        aria-label="Toggle navigation"
                        on:click=move |_| ctx.toggle_nav()
                    >
                        <i class="fas fa-bars"></i>
                    </button>
                </div>
            </nav>
        </header>
    }
}
