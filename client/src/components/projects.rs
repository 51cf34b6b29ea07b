//! Project showcase: staggered image/text panel pairs with a detail modal.

use leptos::prelude::*;

use crate::components::content_section::{SectionShell, list_slots, use_section_content};
use crate::components::detail_modal::showcase_modal;
use crate::net::store::SectionPath;
use crate::net::types::{Project, ProjectsContent};
use crate::state::section::section_title;
use crate::state::selection::{ImageClick, Selection};
use crate::util::motion::{PANEL_HOVER, REVEAL, animation_css, hover_style};
use crate::util::navigate::normalize_link;
use crate::util::reveal::use_reveal_once;

/// One project row; either panel opens the detail modal.
#[component]
fn ProjectRow(project: Project, selection: RwSignal<Selection<Project>>) -> impl IntoView {
    let row_ref = NodeRef::<leptos::html::Div>::new();
    let revealed = use_reveal_once(row_ref);
    let row_class = move || if revealed.get() { "project-row project-row--revealed" } else { "project-row" };
    let row_style = move || {
        if revealed.get() { format!("animation: {};", animation_css("reveal", REVEAL, false)) } else { String::new() }
    };

    let open = {
        let project = project.clone();
        move |_| selection.update(|s| s.select(project.clone()))
    };
    let link = normalize_link(project.link.as_deref()).map(str::to_owned);
    let Project { title, description, img, .. } = project;

    view! {
        <div class=row_class style=row_style node_ref=row_ref>
            <div class="project-row__image hoverable" style=hover_style(PANEL_HOVER) on:click=open.clone()>
                <img src=img alt=title.clone() loading="lazy"/>
            </div>
            <div class="project-row__text hoverable" style=hover_style(PANEL_HOVER) on:click=open>
                <h3 class="project-row__title">{title}</h3>
                {description.map(|d| view! { <p class="project-row__description">{d}</p> })}
                {link.map(|href| {
                    view! {
                        <a
                            class="project-row__link"
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            on:click=move |ev| ev.stop_propagation()
                        >
                            "View Project →"
                        </a>
                    }
                })}
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let status = use_section_content::<ProjectsContent>();
    let selection = RwSignal::new(Selection::<Project>::default());
    let title = Signal::derive(move || status.with(section_title));

    let rows = list_slots(status, "project-row project-row--placeholder", move |_, project: Project| {
        view! { <ProjectRow project=project selection=selection/> }
    });

    view! {
        <SectionShell id=SectionPath::Projects.anchor_id() title=title>
            <div class="projects">{rows}</div>
            {showcase_modal(selection, None, ImageClick::FollowLinkAndClose)}
        </SectionShell>
    }
}
