//! Shared plumbing for remote-content sections.
//!
//! ARCHITECTURE
//! ============
//! Every section calls `use_section_content` once on mount to obtain a
//! `LoadStatus` signal backed by a single store read, then renders through
//! `SectionShell` and `list_slots` so placeholder and settled layouts match
//! across sections.

#[cfg(test)]
#[path = "content_section_test.rs"]
mod content_section_test;

use leptos::prelude::*;

use crate::net::store::{SectionPath, StoreError};
use crate::net::types::{ListContent, SectionContent};
use crate::state::section::{LoadStatus, PLACEHOLDER_SLOTS, SlotPlan, slot_plan};
use crate::util::motion::{PLACEHOLDER_FADE, SPINNER_SPIN, animation_css};

/// Extra fade-in delay per placeholder slot.
pub const PLACEHOLDER_STAGGER_SECS: f64 = 0.2;

/// Fade-in delay for placeholder slot `index`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn placeholder_delay(index: usize) -> f64 {
    index as f64 * PLACEHOLDER_STAGGER_SECS
}

/// Content to resolve a read with. Failures are logged and read as absent,
/// so the section settles empty instead of loading forever.
pub fn settle<T>(path: SectionPath, result: Result<Option<T>, StoreError>) -> Option<T> {
    match result {
        Ok(content) => content,
        Err(err) => {
            log::warn!("section {} failed to load: {err}", path.key());
            None
        }
    }
}

/// Issue the section's store read and expose its load status.
///
/// The read is issued once per mount. Failures are logged and settle the
/// section as empty.
pub fn use_section_content<C: SectionContent>() -> RwSignal<LoadStatus<C>> {
    let mut initial = LoadStatus::<C>::default();
    let issue = initial.begin();
    let status = RwSignal::new(initial);

    #[cfg(feature = "csr")]
    if issue {
        leptos::task::spawn_local(async move {
            let content = settle(C::PATH, crate::net::store::fetch_subtree::<C>(C::PATH).await);
            let _ = status.try_update(|s| s.resolve(content));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = issue;
    }

    status
}

/// Section wrapper with anchor id and heading.
#[component]
pub fn SectionShell(
    id: &'static str,
    #[prop(into)] title: Signal<String>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=format!("section {class}")>
            <div class="section__container">
                <h2 class="section__title">{move || title.get()}</h2>
                {children()}
            </div>
        </section>
    }
}

/// Rotating loading indicator.
#[component]
pub fn Spinner() -> impl IntoView {
    let style = format!("animation: {};", animation_css("spin", SPINNER_SPIN, true));
    view! { <div class="spinner" style=style role="status" aria-label="Loading"></div> }
}

/// Fixed row of fading-in placeholder slots.
#[component]
pub fn LoadingSlots(count: usize, #[prop(optional)] class: &'static str) -> impl IntoView {
    (0..count)
        .map(|i| {
            let fade = PLACEHOLDER_FADE.with_delay(placeholder_delay(i));
            let style = format!("animation: {};", animation_css("placeholder-fade", fade, false));
            view! {
                <div class=format!("placeholder {class}") style=style>
                    <Spinner/>
                </div>
            }
        })
        .collect_view()
}

/// Item area of a list section: placeholders until settled, then one view per item.
pub fn list_slots<C, F, V>(
    status: RwSignal<LoadStatus<C>>,
    placeholder_class: &'static str,
    render_item: F,
) -> impl Fn() -> AnyView + Send + Sync + 'static
where
    C: ListContent,
    F: Fn(usize, C::Item) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || match status.with(|s| slot_plan(s, PLACEHOLDER_SLOTS)) {
        SlotPlan::Placeholders(count) => view! { <LoadingSlots count=count class=placeholder_class/> }.into_any(),
        SlotPlan::Items(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| render_item(i, item))
            .collect_view()
            .into_any(),
    }
}
