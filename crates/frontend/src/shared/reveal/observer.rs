use super::registry::RevealRegistry;
use crate::shared::dom::DomError;
use js_sys::Array;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Class that marks an element as revealed. Never removed once added.
pub const VISIBLE_CLASS: &str = "visible";

/// One shared `IntersectionObserver` for every `.fade-in-up` element.
///
/// Elements are unobserved as soon as they are revealed, and detached
/// elements are pruned on each registration, so the number of observed
/// nodes stays bounded by what is on the page.
pub struct RevealObserver {
    observer: IntersectionObserver,
    registry: Rc<RefCell<RevealRegistry<Element>>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn new(threshold: f64) -> Result<Self, DomError> {
        let registry = Rc::new(RefCell::new(RevealRegistry::default()));

        let callback_registry = Rc::clone(&registry);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                    callback_registry.borrow_mut().release(&target);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            registry,
            _callback: callback,
        })
    }

    /// Start watching `element`. Already revealed or already watched
    /// elements are left alone.
    pub fn observe(&self, element: &Element) {
        if element.class_list().contains(VISIBLE_CLASS) {
            return;
        }

        let mut registry = self.registry.borrow_mut();
        for detached in registry.prune(|e| e.is_connected()) {
            self.observer.unobserve(&detached);
        }
        if registry.admit(element.clone()) {
            self.observer.observe(element);
        }
        log::trace!("reveal observer tracking {} elements", registry.len());
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
