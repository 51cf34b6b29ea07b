//! Text split into independently hoverable words.
//!
//! Each hovered word pops with a random palette color and 3D tilt, and
//! returns to the theme's base text color when the pointer leaves.

#[cfg(test)]
#[path = "hover_words_test.rs"]
mod hover_words_test;

use leptos::prelude::*;

use crate::util::motion::{Transition, WORD_HOVER_SCALE, WORD_SPRING, transition_css};
use crate::util::palette::{HoverPicker, WordHover, base_text_color, split_words};

/// Inline style for one word, hovered or at rest.
#[must_use]
pub fn word_style(hover: Option<&WordHover>, dark: bool) -> String {
    let transition = transition_css("transform", Transition::from_spring(WORD_SPRING));
    match hover {
        Some(h) => format!(
            "color: {}; transform: scale({WORD_HOVER_SCALE}) rotateX({:.1}deg) rotateY({:.1}deg); transition: {transition};",
            h.color, h.rotate_x, h.rotate_y
        ),
        None => format!("color: {}; transform: none; transition: {transition};", base_text_color(dark)),
    }
}

#[component]
pub fn HoverWords(#[prop(into)] text: Signal<String>, #[prop(into)] dark: Signal<bool>) -> impl IntoView {
    let picker = StoredValue::new(HoverPicker::from_clock());

    move || {
        split_words(&text.get())
            .into_iter()
            .map(|word| {
                let hover = RwSignal::new(None::<WordHover>);
                let style = move || word_style(hover.get().as_ref(), dark.get());
                let on_enter = move |_| {
                    let picked = picker.try_update_value(|p| p.hover(dark.get_untracked()));
                    hover.set(picked);
                };
                view! {
                    <span
                        class="hover-word"
                        style=style
                        on:mouseenter=on_enter
                        on:mouseleave=move |_| hover.set(None)
                    >
                        {word}
                    </span>
                    " "
                }
            })
            .collect_view()
    }
}
