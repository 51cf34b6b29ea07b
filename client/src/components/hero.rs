//! Hero banner: portrait, name, subtitle, and pointer-driven motion.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pointer moves update spring targets on `PointerMotion`; a frame loop
//! advances the springs and the ambient background loop, and the rendered
//! styles read the smoothed values. The loop stops when the hero unmounts.

use leptos::prelude::*;

use crate::components::content_section::{Spinner, use_section_content};
use crate::components::hover_words::HoverWords;
use crate::net::store::SectionPath;
use crate::net::types::HeroContent;
use crate::state::pointer::PointerMotion;
use crate::state::section::LoadStatus;
use crate::util::frame_loop::start_frame_loop;
use crate::util::motion::{PORTRAIT_ENTRANCE, animation_css};

/// Viewport size used to normalize pointer positions.
fn viewport_size() -> (f64, f64) {
    #[cfg(feature = "csr")]
    if let Some(window) = web_sys::window() {
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        return (width, height);
    }
    (0.0, 0.0)
}

#[component]
pub fn Hero(#[prop(into)] dark: Signal<bool>) -> impl IntoView {
    let status = use_section_content::<HeroContent>();
    let motion = RwSignal::new(PointerMotion::default());

    let frames = start_frame_loop(move |dt, t_secs| {
        let _ = motion.try_update(|m| m.advance(dt, t_secs));
    });
    on_cleanup(move || frames.stop());

    let on_mouse_move = move |ev: leptos::ev::MouseEvent| {
        let (width, height) = viewport_size();
        let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        motion.update(|m| m.on_move(x, y, width, height));
    };
    let on_mouse_leave = move |_| motion.update(PointerMotion::on_leave);

    let field = move |pick: fn(&HeroContent) -> String| {
        Signal::derive(move || status.with(|s| s.content().map(pick).unwrap_or_default()))
    };
    let name = field(|h| h.name.clone());
    let subtitle = field(|h| h.subtitle.clone());

    let background_style = move || {
        let image = status
            .with(|s| s.content().and_then(|h| h.background_image.clone()))
            .map(|url| format!("background-image: url('{url}');"))
            .unwrap_or_default();
        motion.with(|m| {
            format!(
                "{image} background-position: {}; transform: scale({:.4});",
                m.background_position_css(),
                m.ambient().scale
            )
        })
    };
    let tilt_style = move || format!("transform: {}; transform-style: preserve-3d;", motion.with(PointerMotion::tilt_css));
    let overlay_class = move || if dark.get() { "hero__overlay hero__overlay--dark" } else { "hero__overlay" };

    let portrait = move || match status.with(|s| s.content().map(|h| h.image.clone())) {
        Some(Some(src)) => {
            let style = format!("animation: {};", animation_css("portrait-entrance", PORTRAIT_ENTRANCE, false));
            view! {
                <div class="hero__frame">
                    <img class="hero__portrait" src=src alt="Hero" style=style/>
                </div>
            }
            .into_any()
        }
        _ => view! { <div class="hero__frame hero__frame--missing">"Image not found"</div> }.into_any(),
    };

    let body = move || {
        if !status.with(LoadStatus::is_settled) {
            return view! { <div class="hero__loading"><Spinner/></div> }.into_any();
        }
        view! {
            <div class="hero__content">
                <div class="hero__portrait-slot" style=tilt_style>{portrait}</div>
                <div class="hero__text">
                    <Show when=move || !name.get().is_empty()>
                        <h1 class="hero__name" style=tilt_style>
                            <HoverWords text=name dark=dark/>
                        </h1>
                    </Show>
                    <Show when=move || !subtitle.get().is_empty()>
                        <p class="hero__subtitle" style=tilt_style>
                            <HoverWords text=subtitle dark=dark/>
                        </p>
                    </Show>
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <section
            id=SectionPath::Hero.anchor_id()
            class="section hero"
            on:mousemove=on_mouse_move
            on:mouseleave=on_mouse_leave
        >
            <div class="hero__backdrop" style=background_style></div>
            <div class=overlay_class></div>
            {body}
        </section>
    }
}
