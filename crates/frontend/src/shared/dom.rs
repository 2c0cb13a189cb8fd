//! Browser dependency lookup for feature initialisers.
//!
//! Every feature resolves the window, document and elements it needs through
//! these helpers and runs inside [`activate`], so a missing dependency disables
//! that one feature with a warning instead of aborting it halfway.

use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("required element `{0}` not found")]
    Missing(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// The `<html>` element.
pub fn root_element() -> Result<Element, DomError> {
    document()?
        .document_element()
        .ok_or_else(|| DomError::Missing("html".to_string()))
}

/// First element matching `selector`, if any.
pub fn query(selector: &str) -> Result<Option<Element>, DomError> {
    Ok(document()?.query_selector(selector)?)
}

/// Runs a feature initialiser, logging and skipping the feature on error.
///
/// Returns the initialiser's value when the feature came up.
pub fn activate<T>(feature: &str, init: impl FnOnce() -> Result<T, DomError>) -> Option<T> {
    match init() {
        Ok(value) => {
            log::debug!("feature `{}` active", feature);
            Some(value)
        }
        Err(e) => {
            log::warn!("feature `{}` skipped: {}", feature, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(DomError::NoWindow.to_string(), "window is not available");
        assert_eq!(
            DomError::Missing(".hero-bg".to_string()).to_string(),
            "required element `.hero-bg` not found"
        );
    }

    #[test]
    fn test_activate_passes_value_through() {
        assert_eq!(activate("answer", || Ok::<_, DomError>(42)), Some(42));
    }

    #[test]
    fn test_activate_skips_on_error() {
        let result = activate("parallax", || {
            Err::<(), _>(DomError::Missing(".hero-bg".to_string()))
        });
        assert!(result.is_none());
    }
}
