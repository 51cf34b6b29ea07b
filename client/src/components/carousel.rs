//! Horizontal carousel with arrow buttons and drag-to-scroll.
//!
//! Arrow buttons scroll smoothly by one container width. Dragging moves the
//! scroll offset directly (amplified) and stops dead on release; there is no
//! momentum.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::state::carousel::CarouselModel;
use crate::state::carousel::{DragState, ScrollDirection};
use crate::util::motion::{ARROW_LEFT_HOVER, ARROW_RIGHT_HOVER, hover_style};

/// Current geometry of the track element.
#[cfg(feature = "csr")]
fn measure(el: &web_sys::HtmlElement) -> CarouselModel {
    CarouselModel {
        offset: f64::from(el.scroll_left()),
        client_width: f64::from(el.client_width()),
        scroll_width: f64::from(el.scroll_width()),
    }
}

/// Scrollable track wrapping `children`.
#[component]
pub fn Carousel(children: Children) -> impl IntoView {
    let track_ref = NodeRef::<leptos::html::Div>::new();
    let drag = RwSignal::new(DragState::default());

    let scroll_by = move |direction: ScrollDirection| {
        #[cfg(feature = "csr")]
        {
            let Some(el) = track_ref.get_untracked() else {
                return;
            };
            let target = measure(&el).scroll(direction);
            let options = web_sys::ScrollToOptions::new();
            options.set_left(target);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_to_with_scroll_to_options(&options);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = direction;
        }
    };

    let on_mouse_down = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(el) = track_ref.get_untracked() else {
                return;
            };
            let x = f64::from(ev.page_x());
            let scroll = f64::from(el.scroll_left());
            drag.update(|d| d.press(x, scroll));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_mouse_move = move |ev: leptos::ev::MouseEvent| {
        if !drag.with_untracked(|d| d.dragging) {
            return;
        }
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            let Some(el) = track_ref.get_untracked() else {
                return;
            };
            let mut model = measure(&el);
            drag.with_untracked(|d| model.drag(d, f64::from(ev.page_x())));
            #[allow(clippy::cast_possible_truncation)]
            el.set_scroll_left(model.offset.round() as i32);
        }
    };

    let end_drag = move |_: leptos::ev::MouseEvent| drag.update(DragState::release);
    let cursor_style = move || format!("cursor: {};", drag.with(DragState::cursor));

    view! {
        <div class="carousel">
            <button
                class="carousel__arrow carousel__arrow--left"
                style=hover_style(ARROW_LEFT_HOVER)
                aria-label="Scroll left"
                on:click=move |_| scroll_by(ScrollDirection::Left)
            >
                "←"
            </button>
            <div
                class="carousel__track"
                node_ref=track_ref
                style=cursor_style
                on:mousedown=on_mouse_down
                on:mousemove=on_mouse_move
                on:mouseup=end_drag
                on:mouseleave=end_drag
            >
                {children()}
            </div>
            <button
                class="carousel__arrow carousel__arrow--right"
                style=hover_style(ARROW_RIGHT_HOVER)
                aria-label="Scroll right"
                on:click=move |_| scroll_by(ScrollDirection::Right)
            >
                "→"
            </button>
        </div>
    }
}
