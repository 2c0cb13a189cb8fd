//! Scroll-linked drift of the hero background.

use crate::shared::dom::{self, DomError};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub const HERO_BG_SELECTOR: &str = ".hero-bg";

/// Vertical offset of the background layer for a given scroll position.
pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    scroll_y * factor
}

pub fn translate_y(offset: f64) -> String {
    format!("translateY({}px)", offset)
}

fn shift_layer(factor: f64) -> Result<(), DomError> {
    let scrolled = dom::window()?.scroll_y()?;
    // The layer is optional; pages without a hero simply have nothing to move.
    let Some(layer) = dom::query(HERO_BG_SELECTOR)? else {
        return Ok(());
    };
    let layer = layer
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| DomError::Missing(HERO_BG_SELECTOR.to_string()))?;
    layer
        .style()
        .set_property("transform", &translate_y(parallax_offset(scrolled, factor)))?;
    Ok(())
}

/// Moves `.hero-bg` on every scroll event for as long as the calling
/// component is mounted. Each event writes the style synchronously.
pub fn install_parallax(factor: f64) {
    let installed = dom::activate("parallax", || {
        dom::window()?;
        Ok(window_event_listener(leptos::ev::scroll, move |_| {
            if let Err(e) = shift_layer(factor) {
                log::debug!("parallax frame skipped: {}", e);
            }
        }))
    });

    if let Some(handle) = installed {
        on_cleanup(move || handle.remove());
    }
}
