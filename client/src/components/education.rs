//! Degrees and schooling.

use leptos::prelude::*;

use crate::components::content_section::{SectionShell, list_slots, use_section_content};
use crate::net::store::SectionPath;
use crate::net::types::{Degree, EducationContent};
use crate::state::section::section_title;
use crate::util::motion::{PANEL_HOVER, hover_style};

#[component]
pub fn Education() -> impl IntoView {
    let status = use_section_content::<EducationContent>();
    let title = Signal::derive(move || status.with(section_title));

    let items = list_slots(status, "education__placeholder", |_, degree: Degree| {
        view! {
            <article class="education__card hoverable" style=hover_style(PANEL_HOVER)>
                {degree.logo.map(|src| view! { <img class="education__logo" src=src alt="" loading="lazy"/> })}
                <h3 class="education__degree">{degree.degree}</h3>
                <p class="education__school">{degree.school}</p>
                {degree.period.map(|p| view! { <p class="education__period">{p}</p> })}
                {degree.details.map(|d| view! { <p class="education__details">{d}</p> })}
            </article>
        }
    });

    view! {
        <SectionShell id=SectionPath::Education.anchor_id() title=title>
            <div class="education__grid">{items}</div>
        </SectionShell>
    }
}
