//! One-shot reveal of elements as they scroll into view.
//!
//! Uses an `IntersectionObserver` that disconnects after the first hit, so
//! items animate in once and stay visible. Natively everything starts revealed.

use leptos::prelude::*;

/// Fraction of the element that must be visible to trigger the reveal.
#[cfg(feature = "csr")]
const REVEAL_THRESHOLD: f64 = 0.1;

/// Becomes `true` the first time `target` enters the viewport.
pub fn use_reveal_once(target: NodeRef<leptos::html::Div>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(!cfg!(feature = "csr"));

    #[cfg(feature = "csr")]
    {
        Effect::new(move || {
            let Some(el) = target.get() else {
                return;
            };
            if revealed.get_untracked() {
                return;
            }
            observe_once(&el, move || set_revealed.set(true));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (target, set_revealed);
    }

    revealed
}

#[cfg(feature = "csr")]
fn observe_once<F>(el: &web_sys::Element, on_visible: F)
where
    F: Fn() + 'static,
{
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let visible = entries
                .iter()
                .any(|entry| entry.unchecked_into::<web_sys::IntersectionObserverEntry>().is_intersecting());
            if visible {
                on_visible();
                observer.disconnect();
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(el);
            callback.forget();
        }
        Err(err) => {
            log::warn!("IntersectionObserver unavailable: {err:?}");
        }
    }
}
