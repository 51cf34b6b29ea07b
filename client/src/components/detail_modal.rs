//! Enlarged-item overlay shared by the projects and certifications sections.

#[cfg(test)]
#[path = "detail_modal_test.rs"]
mod detail_modal_test;

use leptos::prelude::*;

use crate::net::types::Showcase;
use crate::state::selection::{ImageClick, Selection};
use crate::util::navigate::{normalize_link, open_external};

/// Render-ready snapshot of the selected item.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub image: String,
    pub description: Option<String>,
    /// Shown under the title only when the item links somewhere.
    pub link_hint: Option<&'static str>,
}

impl DetailView {
    pub fn from_item<T: Showcase>(item: &T, hint: Option<&'static str>) -> Self {
        Self {
            title: item.title().to_owned(),
            image: item.image().to_owned(),
            description: item.description().map(str::to_owned),
            link_hint: hint.filter(|_| normalize_link(item.link()).is_some()),
        }
    }
}

/// Modal overlay: backdrop or close button dismisses, image click activates.
#[component]
pub fn DetailModal(detail: DetailView, on_close: Callback<()>, on_image: Callback<()>) -> impl IntoView {
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });
    let DetailView { title, image, description, link_hint } = detail;

    // Focus on open so Escape works without a click first.
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        #[cfg(feature = "csr")]
        if let Some(el) = dialog_ref.get() {
            let _ = el.focus();
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--detail"
                node_ref=dialog_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <button class="dialog__close" aria-label="Close" on:click=move |_| on_close.run(())>
                    "×"
                </button>
                <img class="dialog__image" src=image alt=title.clone() on:click=move |_| on_image.run(())/>
                <h3 class="dialog__title">{title}</h3>
                {description.map(|d| view! { <p class="dialog__description">{d}</p> })}
                {link_hint.map(|h| view! { <p class="dialog__hint">{h}</p> })}
            </div>
        </div>
    }
}

/// Reactive modal slot for a section's selection. `hint` is shown for linked
/// items; `image_click` decides whether an image click without a link closes.
pub fn showcase_modal<T>(
    selection: RwSignal<Selection<T>>,
    hint: Option<&'static str>,
    image_click: ImageClick,
) -> impl Fn() -> Option<AnyView> + Send + Sync + 'static
where
    T: Showcase + Clone + Send + Sync + 'static,
{
    move || {
        let detail = selection.with(|s| s.current().map(|item| DetailView::from_item(item, hint)))?;
        let on_close = Callback::new(move |()| selection.update(Selection::clear));
        let on_image = Callback::new(move |()| {
            if let Some(link) = selection.try_update(|s| s.click_image(image_click)).flatten() {
                open_external(&link);
            }
        });
        Some(view! { <DetailModal detail=detail on_close=on_close on_image=on_image/> }.into_any())
    }
}
