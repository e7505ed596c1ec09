//! Browser viewport glue: window width tracking and visibility observation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing widgets react to viewport width and scroll visibility. Listeners and
//! observers installed here are released when the owning component is
//! dropped. SSR paths render the small-screen, not-yet-visible state.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use leptos::prelude::*;

/// Fraction of a card that must be visible before it counts as in view.
pub const VISIBILITY_THRESHOLD: f64 = 0.4;

/// Observers report ratios slightly under the crossed threshold.
const RATIO_TOLERANCE: f64 = 0.001;

/// Current `window.innerWidth`, or 0 outside the browser.
pub fn window_width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Reactive window width, refreshed on mount and on every `resize`.
///
/// Starts at 0 so server and client agree during hydration.
pub fn use_window_width() -> ReadSignal<f64> {
    let (width, set_width) = signal(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || set_width.set(window_width()));
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            set_width.set(window_width());
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = set_width;
    }

    width
}

/// Whether an observed intersection ratio meets `threshold`.
pub fn meets_threshold(ratio: f64, threshold: f64) -> bool {
    ratio + RATIO_TOLERANCE >= threshold
}

/// Keep `in_view` in sync with whether `threshold` of `target` is visible.
pub fn observe_visibility(target: NodeRef<leptos::html::Div>, threshold: f64, in_view: RwSignal<bool>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::closure::Closure;

        type Observation = (web_sys::IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>);
        let active = StoredValue::new_local(None::<Observation>);

        Effect::new(move || {
            let Some(element) = target.get() else {
                return;
            };
            let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    in_view.set(meets_threshold(entry.intersection_ratio(), threshold));
                }
            });
            let init = web_sys::IntersectionObserverInit::new();
            init.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
            let Ok(observer) =
                web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            else {
                return;
            };
            observer.observe(&element);
            active.update_value(|slot| {
                if let Some((previous, _)) = slot.take() {
                    previous.disconnect();
                }
                *slot = Some((observer, callback));
            });
        });

        on_cleanup(move || {
            let _ = active.try_update_value(|slot| {
                if let Some((observer, _)) = slot.take() {
                    observer.disconnect();
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, threshold, in_view);
    }
}
