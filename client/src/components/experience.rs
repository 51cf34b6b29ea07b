//! Work history timeline.

use leptos::prelude::*;

use crate::components::content_section::{SectionShell, list_slots, use_section_content};
use crate::net::store::SectionPath;
use crate::net::types::{ExperienceContent, Role};
use crate::state::section::section_title;

#[component]
pub fn Experience() -> impl IntoView {
    let status = use_section_content::<ExperienceContent>();
    let title = Signal::derive(move || status.with(section_title));

    let items = list_slots(status, "timeline__placeholder", |_, role: Role| {
        view! {
            <article class="timeline__item">
                {role.logo.map(|src| view! { <img class="timeline__logo" src=src alt="" loading="lazy"/> })}
                <div class="timeline__body">
                    <h3 class="timeline__heading">{role.role}</h3>
                    <p class="timeline__org">{role.company}</p>
                    <p class="timeline__meta">
                        {role.period.map(|p| view! { <span class="timeline__period">{p}</span> })}
                        {role.location.map(|l| view! { <span class="timeline__location">{l}</span> })}
                    </p>
                    {role.description.map(|d| view! { <p class="timeline__description">{d}</p> })}
                </div>
            </article>
        }
    });

    view! {
        <SectionShell id=SectionPath::Experience.anchor_id() title=title>
            <div class="timeline">{items}</div>
        </SectionShell>
    }
}
