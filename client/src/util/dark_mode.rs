//! Theme flag application and toggle.
//!
//! Applies the `dark` class to the `<html>` element so stylesheet dark
//! variants take effect. The flag itself lives in the root component and is
//! not persisted. Requires a browser environment; native builds no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Theme used on first paint.
pub const DEFAULT_DARK: bool = true;

#[cfg(feature = "csr")]
const DARK_CLASS: &str = "dark";

/// Add or remove the `dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                let _ = if enabled { class_list.add_1(DARK_CLASS) } else { class_list.remove_1(DARK_CLASS) };
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme and apply it to the document.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    next
}
