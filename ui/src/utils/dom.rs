//! DOM helpers for the browser side of the player bootstrap.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlIFrameElement};

static FRAME_COUNTER: AtomicUsize = AtomicUsize::new(0);

static ATTRIBUTE_NAMES: Lazy<Mutex<HashSet<&'static str>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Generate a document-unique id for a component's iframe.
pub fn next_frame_dom_id() -> String {
    let n = FRAME_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("lazy-video-frame-{n}")
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Look up a mounted iframe by its DOM id.
pub fn find_iframe(dom_id: &str) -> Option<HtmlIFrameElement> {
    document()
        .and_then(|d| d.get_element_by_id(dom_id))
        .and_then(|el| el.dyn_into::<HtmlIFrameElement>().ok())
}

/// Dioxus attributes are keyed by `&'static str`. Each distinct
/// consumer-supplied name is leaked once and reused afterwards.
pub fn intern_attribute_name(name: &str) -> &'static str {
    let mut names = ATTRIBUTE_NAMES.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(existing) = names.get(name) {
        return existing;
    }
    let leaked: &'static str = Box::leak(name.to_owned().into_boxed_str());
    names.insert(leaked);
    leaked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_ids_are_unique() {
        let a = next_frame_dom_id();
        let b = next_frame_dom_id();
        assert_ne!(a, b);
        assert!(a.starts_with("lazy-video-frame-"));
    }

    #[test]
    fn test_attribute_names_are_interned() {
        let a = intern_attribute_name("data-testid");
        let b = intern_attribute_name(&String::from("data-testid"));
        assert_eq!(a, "data-testid");
        assert!(std::ptr::eq(a, b));
    }
}
