//! DOM access for the counter page.
//!
//! The counter element is looked up by id, fresh for every event, because
//! the page is free to add or remove it at any time. A missing element is
//! a normal outcome, not an error: callers skip their work silently.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentReadyState, HtmlElement};

/// Non-owning handle to the counter display element.
pub struct CountLabel {
    element: HtmlElement,
}

impl CountLabel {
    /// Look up the display element by id.
    ///
    /// Returns `None` when the element is missing or is not an HTML
    /// element.
    pub fn find(document: &Document, id: &str) -> Option<Self> {
        let element = document.get_element_by_id(id)?;
        match element.dyn_into::<HtmlElement>() {
            Ok(element) => Some(Self { element }),
            Err(_) => {
                log::warn!("Element #{} is not an HTML element", id);
                None
            }
        }
    }

    /// Replace the element's text content.
    pub fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    /// Set the element's inline transform, e.g. `scale(1.2)`.
    pub fn set_scale(&self, scale: &str) {
        if let Err(e) = self.element.style().set_property("transform", scale) {
            log::warn!("Failed to set transform: {:?}", e);
        }
    }

    /// Set the element's transition timing.
    pub fn set_transition(&self, transition: &str) {
        if let Err(e) = self.element.style().set_property("transition", transition) {
            log::warn!("Failed to set transition: {:?}", e);
        }
    }

    /// Attach a click listener that lives for the page lifetime.
    pub fn on_click(&self, mut f: impl FnMut() + 'static) {
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            f();
        }) as Box<dyn FnMut(web_sys::Event)>);

        if let Err(e) = self
            .element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to attach click listener: {:?}", e);
            return;
        }
        closure.forget(); // Leak the closure to keep it alive
    }
}

/// Current document, if the page has one.
pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Current page address.
pub fn page_url() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

/// Run `f` once the document's structural content is loaded.
///
/// WASM modules usually execute after `DOMContentLoaded` has already
/// fired, so the ready state is checked first: `f` runs immediately
/// unless the document is still loading.
pub fn on_document_ready(f: impl FnOnce() + 'static) {
    let Some(document) = document() else {
        log::warn!("No document object");
        return;
    };

    if document.ready_state() != DocumentReadyState::Loading {
        f();
        return;
    }

    let closure = Closure::once(Box::new(move |_event: web_sys::Event| {
        f();
    }));
    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
    {
        log::warn!("Failed to attach DOMContentLoaded listener: {:?}", e);
        return;
    }
    closure.forget(); // Leak the closure to keep it alive
}
