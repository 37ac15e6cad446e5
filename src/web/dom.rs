//! Small wrappers over the remaining browser APIs the app touches.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Update the browser tab title.
pub fn set_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// Native blocking confirmation dialog. Anything that prevents the prompt
/// from showing counts as a "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Vertical scroll offset of the window, in CSS pixels.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Window scroll subscription that unregisters itself when dropped.
///
/// Views hold one of these for their lifetime and release it in `on_cleanup`,
/// so a disposed view can never run its scroll callback.
pub struct ScrollListener {
    closure: Closure<dyn Fn()>,
}

impl ScrollListener {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        let closure = Closure::<dyn Fn()>::new(callback);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }

        Self { closure }
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
