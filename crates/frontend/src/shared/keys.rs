use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Run `on_escape` whenever the Escape key is pressed anywhere in the window.
/// The handler decides whether it applies (e.g. only while a panel is open);
/// the listener is detached when the owning scope is disposed.
pub fn use_escape_key(on_escape: impl Fn() + 'static) {
    if let Some(window) = web_sys::window() {
        let listener =
            Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |event: web_sys::KeyboardEvent| {
                if event.key() == "Escape" {
                    on_escape();
                }
            });
        let _ = window
            .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());

        let listener = send_wrapper::SendWrapper::new(listener);
        on_cleanup(move || {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "keydown",
                    (*listener).as_ref().unchecked_ref(),
                );
            }
        });
    }
}
