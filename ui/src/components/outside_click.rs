//! Pointer-down outside an element

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Run `on_outside` for every window `mousedown` whose target is not inside
/// `target`. The listener is removed when the owning component is disposed.
pub fn use_pointer_down_outside(target: NodeRef<html::Div>, on_outside: impl Fn() + 'static) {
    let handle = window_event_listener(ev::mousedown, move |event| {
        // Nothing mounted yet, so nothing to be outside of.
        let Some(region) = target.get_untracked() else {
            return;
        };

        let inside = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .map(|node| region.contains(Some(&node)))
            .unwrap_or(false);

        if !inside {
            on_outside();
        }
    });

    on_cleanup(move || handle.remove());
}
