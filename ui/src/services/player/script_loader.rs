use std::cell::RefCell;
use std::rc::Rc;

use tokio::sync::oneshot;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::console_debug;
use crate::services::errors::{LazyVideoError, LazyVideoResult};
use crate::utils::document;

/// Append `<script src>` to `<head>` and wait for its load (or error) event.
pub async fn inject_script(src: &str) -> LazyVideoResult<()> {
    let fail = |reason: &str| LazyVideoError::ScriptInjection {
        src: src.to_string(),
        reason: reason.to_string(),
    };

    let document = document().ok_or_else(|| fail("no document"))?;
    let head = document.head().ok_or_else(|| fail("document has no <head>"))?;
    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(|e| fail(&format!("{e:?}")))?
        .dyn_into()
        .map_err(|_| fail("created element is not a script"))?;
    script.set_src(src);

    let (tx, rx) = oneshot::channel::<Result<(), String>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    // Only one of the two callbacks fires; the sender is taken by whichever runs.
    let on_load = {
        let tx = tx.clone();
        Closure::once_into_js(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Ok(()));
            }
        })
    };
    let on_error = Closure::once_into_js(move || {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(Err("script failed to load".to_string()));
        }
    });
    script.set_onload(Some(on_load.unchecked_ref()));
    script.set_onerror(Some(on_error.unchecked_ref()));

    head.append_child(&script).map_err(|e| fail(&format!("{e:?}")))?;
    console_debug!("Injected player script {}", src);

    rx.await
        .map_err(|_| fail("load callback dropped"))?
        .map_err(|reason| fail(&reason))
}
