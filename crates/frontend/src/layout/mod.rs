pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Storefront shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (logo, nav, theme, menu button)  |
/// +------------------------------------------+
/// |                 Page                     |
/// +------------------------------------------+
/// |                Footer                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <header::Header />
        <main class="main-content">
            {children()}
        </main>
        <footer::Footer />
    }
}
