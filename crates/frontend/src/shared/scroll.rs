use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// True once the window has scrolled past `threshold_px`. The listener is
/// detached when the owning scope is disposed.
pub fn use_scroll_threshold(threshold_px: f64) -> ReadSignal<bool> {
    let (passed, set_passed) = signal(false);

    if let Some(window) = web_sys::window() {
        let listener = Closure::<dyn FnMut()>::new({
            let window = window.clone();
            move || {
                let crossed = window.scroll_y().unwrap_or(0.0) > threshold_px;
                if passed.get_untracked() != crossed {
                    set_passed.set(crossed);
                }
            }
        });
        let _ = window
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());

        // The closure must stay alive as long as the subscription does.
        let listener = send_wrapper::SendWrapper::new(listener);
        on_cleanup(move || {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    (*listener).as_ref().unchecked_ref(),
                );
            }
        });
    }

    passed
}

/// Scroll the element with this id into view. Returns false when the element
/// is not on the current page.
pub fn scroll_to_section(id: &str) -> bool {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    match element {
        Some(element) => {
            element.scroll_into_view();
            true
        }
        None => false,
    }
}
