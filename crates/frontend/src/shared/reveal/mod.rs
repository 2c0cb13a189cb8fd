//! Scroll-triggered fade-in.
//!
//! Wrap content in [`Reveal`]; it renders a `.fade-in-up` element and
//! registers it with the shared [`RevealObserver`]. Once 10% (configurable)
//! of the element is in the viewport it gains `visible` permanently.

pub mod observer;
pub mod registry;

use crate::shared::dom;
use leptos::html::Div;
use leptos::prelude::*;
use observer::{RevealObserver, VISIBLE_CLASS};
use web_sys::Element;

#[derive(Clone, Copy)]
pub struct RevealContext {
    observer: StoredValue<Option<RevealObserver>, LocalStorage>,
}

impl RevealContext {
    pub fn observe(&self, element: &Element) {
        self.observer.with_value(|observer| match observer {
            Some(observer) => observer.observe(element),
            // Without an observer nothing would ever reveal the element.
            None => {
                let _ = element.class_list().add_1(VISIBLE_CLASS);
            }
        });
    }
}

#[component]
pub fn RevealProvider(threshold: f64, children: Children) -> impl IntoView {
    let observer = dom::activate("reveal", || RevealObserver::new(threshold));
    provide_context(RevealContext {
        observer: StoredValue::new_local(observer),
    });

    children()
}

pub fn use_reveal() -> RevealContext {
    use_context::<RevealContext>().expect("RevealContext not found. Wrap your app with RevealProvider.")
}

/// `.fade-in-up` wrapper registered with the reveal observer on mount.
#[component]
pub fn Reveal(
    /// Additional CSS classes placed before `fade-in-up`.
    #[prop(optional)]
    class: &'static str,
    /// Staggered `animation-delay`, seconds; follows the signal
    #[prop(optional, into)]
    delay_secs: Option<Signal<f64>>,
    children: Children,
) -> impl IntoView {
    let reveal = use_reveal();
    let node_ref = NodeRef::<Div>::new();

    Effect::new(move |_| {
        if let Some(el) = node_ref.get() {
            reveal.observe(&el);
        }
    });

    let full_class = if class.is_empty() {
        "fade-in-up".to_string()
    } else {
        format!("{class} fade-in-up")
    };
    let style = move || delay_secs.map(|d| format!("animation-delay: {}s", d.get()));

    view! {
        <div node_ref=node_ref class=full_class style=style>
            {children()}
        </div>
    }
}

/// Stagger delay for the item at `index`: `(index mod cycle) * step`.
pub fn stagger_delay(index: usize, cycle: usize, step_secs: f64) -> f64 {
    if cycle == 0 {
        return 0.0;
    }
    (index % cycle) as f64 * step_secs
}
