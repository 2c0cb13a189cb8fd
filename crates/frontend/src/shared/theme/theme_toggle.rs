use super::use_theme;
use leptos::prelude::*;

/// Header button flipping between light and dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle theme"
            on:click=move |_| ctx.toggle()
        >
            <i class=move || ctx.theme.get().icon_class()></i>
        </button>
    }
}
