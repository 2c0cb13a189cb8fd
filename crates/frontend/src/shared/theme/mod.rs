//! Theme management module for the storefront.
//!
//! Provides a context-based light/dark theme. The preference is persisted
//! through an injected [`PreferenceStore`] and applied as `data-theme` on the
//! root `<html>` element.

pub mod theme_toggle;

pub use theme_toggle::ThemeToggle;

use crate::shared::dom::{self, DomError};
use crate::shared::preferences::PreferenceStore;
use leptos::prelude::*;

/// Available themes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Returns the theme name as stored and as written to `data-theme`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse theme from string. Anything unrecognised falls back to dark.
    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon classes for the toggle: the sun is shown while dark mode is on.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }
}

pub const THEME_STORAGE_KEY: &str = "theme";

/// Resolve the saved theme, defaulting to dark.
pub fn load_theme(store: &dyn PreferenceStore) -> Theme {
    store
        .get()
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default()
}

/// Flip `current` and apply it; the new theme is persisted only once
/// `apply` succeeded, so storage never runs ahead of the document.
pub fn toggle_theme<E>(
    current: Theme,
    store: &dyn PreferenceStore,
    apply: impl FnOnce(Theme) -> Result<(), E>,
) -> Result<Theme, E> {
    let next = current.toggled();
    apply(next)?;
    store.set(next.as_str());
    Ok(next)
}

fn apply_theme(theme: Theme) -> Result<(), DomError> {
    dom::root_element()?.set_attribute("data-theme", theme.as_str())?;
    Ok(())
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
    store: StoredValue<Box<dyn PreferenceStore>, LocalStorage>,
}

impl ThemeContext {
    /// Flip the theme, apply it to the document and persist it.
    /// On failure the current theme stays in place everywhere.
    pub fn toggle(&self) {
        let current = self.theme.get_untracked();
        let switched = self.store.with_value(|store| {
            dom::activate("theme", || toggle_theme(current, store.as_ref(), apply_theme))
        });
        if let Some(next) = switched {
            self.theme.set(next);
            log::debug!("theme switched to {}", next.as_str());
        }
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(store: Box<dyn PreferenceStore>, children: Children) -> impl IntoView {
    // Load theme from storage on initial render
    let initial_theme = load_theme(store.as_ref());
    dom::activate("theme", || apply_theme(initial_theme));

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
        store: StoredValue::new_local(store),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}
