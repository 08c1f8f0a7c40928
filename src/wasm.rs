//! WASM entry point and event wiring for the counter page.
//!
//! `start` runs when the module is instantiated: it prints the startup
//! diagnostics, builds the controller, and hooks the page events up.
//! Events flow one way: DOM event -> `Message` -> controller ->
//! `DisplayUpdate` -> DOM mutation.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::app::ShelfApp;
use crate::config::AppConfig;
use crate::constants::PAGE_LOAD_BANNER;
use crate::dom::{self, CountLabel};
use crate::message::{DisplayUpdate, Message};
use crate::schedule::Timeout;

thread_local! {
    /// Controller for the current page, filled in by `start`.
    static APP: RefCell<Option<Rc<RefCell<ShelfApp>>>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    web_sys::console::log_1(&PAGE_LOAD_BANNER.into());
    if let Some(href) = dom::page_url() {
        web_sys::console::log_1(&format!("Current URL: {}", href).into());
    }

    let config = AppConfig::load_from_local_storage().unwrap_or_default();
    let app = Rc::new(RefCell::new(ShelfApp::with_config(config)));
    APP.with(|slot| *slot.borrow_mut() = Some(app.clone()));

    let ready_app = app.clone();
    dom::on_document_ready(move || page_ready(&ready_app));
}

/// Manual click hook for host pages that wire their own trigger.
///
/// Does nothing until `start` has run.
#[wasm_bindgen(js_name = handleClick)]
pub fn handle_click() {
    let app = APP.with(|slot| slot.borrow().clone());
    match app {
        Some(app) => dispatch(&app, Message::CountClicked),
        None => log::warn!("handleClick called before startup"),
    }
}

/// Page-ready initializer. Installs the transition and wires the counter
/// element for clicks; a repeat call is a full no-op.
fn page_ready(app: &Rc<RefCell<ShelfApp>>) {
    let update = app.borrow_mut().update(Message::PageReady);
    let Some(update) = update else {
        return;
    };
    apply(app, update);

    let display_id = app.borrow().config().display_id.clone();
    let Some(document) = dom::document() else {
        return;
    };
    let Some(label) = CountLabel::find(&document, &display_id) else {
        log::debug!("No #{} element, clicks not wired", display_id);
        return;
    };

    let click_app = app.clone();
    label.on_click(move || dispatch(&click_app, Message::CountClicked));
}

/// Feed a message to the controller and carry out the resulting update.
fn dispatch(app: &Rc<RefCell<ShelfApp>>, message: Message) {
    let update = app.borrow_mut().update(message);
    if let Some(update) = update {
        apply(app, update);
    }
}

/// Carry out a display update against the live DOM.
///
/// The counter element is resolved fresh per update; when it is absent
/// the whole update is skipped, deferred reset included.
fn apply(app: &Rc<RefCell<ShelfApp>>, update: DisplayUpdate) {
    let display_id = app.borrow().config().display_id.clone();
    let Some(document) = dom::document() else {
        return;
    };
    let Some(label) = CountLabel::find(&document, &display_id) else {
        log::trace!("No #{} element, skipping update", display_id);
        return;
    };

    match update {
        DisplayUpdate::CountChanged {
            text,
            scale,
            reset_delay_ms,
        } => {
            label.set_text(&text);
            label.set_scale(&scale);

            // One reset per click; overlapping resets stay independent
            let reset_app = app.clone();
            if let Some(timeout) = Timeout::once(reset_delay_ms, move || {
                dispatch(&reset_app, Message::ScaleResetDue);
            }) {
                timeout.forget();
            }
        }
        DisplayUpdate::ScaleRested { scale } => label.set_scale(&scale),
        DisplayUpdate::TransitionReady { transition } => label.set_transition(&transition),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::HtmlElement;

    async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            web_sys::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .unwrap();
        });
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }

    fn install_counter_element() -> HtmlElement {
        let document = dom::document().unwrap();
        let element: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
        element.set_id("click-count");
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    fn new_app() -> Rc<RefCell<ShelfApp>> {
        Rc::new(RefCell::new(ShelfApp::new()))
    }

    #[wasm_bindgen_test]
    async fn test_single_click_pops_then_rests() {
        let element = install_counter_element();
        let app = new_app();
        page_ready(&app);

        element.click();
        assert_eq!(element.text_content().unwrap(), "Clicks: 1");
        assert_eq!(
            element.style().get_property_value("transform").unwrap(),
            "scale(1.2)"
        );

        sleep(300).await;
        assert_eq!(
            element.style().get_property_value("transform").unwrap(),
            "scale(1)"
        );
        element.remove();
    }

    #[wasm_bindgen_test]
    async fn test_three_rapid_clicks_settle_once() {
        let element = install_counter_element();
        let app = new_app();
        page_ready(&app);

        element.click();
        element.click();
        element.click();
        assert_eq!(element.text_content().unwrap(), "Clicks: 3");
        assert_eq!(app.borrow().clicks(), 3);

        // All three resets land independently on the same final scale
        sleep(300).await;
        assert_eq!(
            element.style().get_property_value("transform").unwrap(),
            "scale(1)"
        );
        element.remove();
    }

    #[wasm_bindgen_test]
    fn test_page_ready_sets_transition() {
        let element = install_counter_element();
        let app = new_app();
        page_ready(&app);

        assert!(
            element
                .style()
                .get_property_value("transition")
                .unwrap()
                .contains("transform")
        );
        element.remove();
    }

    #[wasm_bindgen_test]
    async fn test_repeat_page_ready_does_not_double_clicks() {
        let element = install_counter_element();
        let app = new_app();
        page_ready(&app);
        page_ready(&app);

        // A second listener would make one click count twice
        element.click();
        assert_eq!(element.text_content().unwrap(), "Clicks: 1");
        assert_eq!(app.borrow().clicks(), 1);

        sleep(300).await;
        element.remove();
    }

    #[wasm_bindgen_test]
    fn test_clicks_without_element_never_throw() {
        let app = new_app();
        page_ready(&app);

        // No #click-count element exists: the handler still counts but
        // touches nothing
        dispatch(&app, Message::CountClicked);
        dispatch(&app, Message::CountClicked);
        assert_eq!(app.borrow().clicks(), 2);
    }

    #[wasm_bindgen_test]
    fn test_exported_handle_click_is_silent_without_element() {
        // Whether or not startup ran in this harness, the exported hook
        // must never throw when the element is absent
        handle_click();
        handle_click();
    }

    #[wasm_bindgen_test]
    async fn test_element_added_after_ready_still_updates() {
        let app = new_app();
        page_ready(&app);

        // Element appears late; per-event lookup picks it up
        let element = install_counter_element();
        dispatch(&app, Message::CountClicked);
        assert_eq!(element.text_content().unwrap(), "Clicks: 1");

        sleep(300).await;
        assert_eq!(
            element.style().get_property_value("transform").unwrap(),
            "scale(1)"
        );
        element.remove();
    }
}
