//! One-shot deferred tasks on the browser event loop.
//!
//! Wraps `setTimeout` in a handle that clears the timer when dropped, so
//! a pending task can be cancelled by letting its handle go. `forget()`
//! detaches the handle for fire-and-forget scheduling.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// A pending one-shot task scheduled on the browser event loop.
///
/// Dropping the handle cancels the task; call [`Timeout::forget`] to let
/// the task outlive it.
pub struct Timeout {
    id: Option<i32>,
    closure: Option<Closure<dyn FnMut()>>,
}

impl Timeout {
    /// Schedule `f` to run once after `delay_ms` milliseconds.
    ///
    /// Returns `None` when the timer cannot be scheduled (no window, or
    /// the browser rejected the callback).
    pub fn once(delay_ms: u32, f: impl FnOnce() + 'static) -> Option<Self> {
        let window = match web_sys::window() {
            Some(w) => w,
            None => {
                log::warn!("No window object, timeout not scheduled");
                return None;
            }
        };

        let closure = Closure::once(f);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms as i32,
        ) {
            Ok(id) => Some(Self {
                id: Some(id),
                closure: Some(closure),
            }),
            Err(e) => {
                log::warn!("Failed to schedule timeout: {:?}", e);
                None
            }
        }
    }

    /// Cancel the pending task.
    pub fn cancel(mut self) {
        self.clear();
    }

    /// Detach the handle so the task fires on its own.
    ///
    /// The callback is handed to the JS garbage collector and reclaimed
    /// after it runs.
    pub fn forget(mut self) {
        self.id.take();
        if let Some(closure) = self.closure.take() {
            let _ = closure.into_js_value();
        }
    }

    fn clear(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
        }
        self.closure = None;
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.clear();
    }
}
