//! Skill chips, grouped by category when the content provides one.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use leptos::prelude::*;

use crate::components::content_section::{LoadingSlots, SectionShell, use_section_content};
use crate::net::store::SectionPath;
use crate::net::types::{Skill, SkillsContent};
use crate::state::section::{PLACEHOLDER_SLOTS, SlotPlan, section_title, slot_plan};
use crate::util::motion::{CARD_HOVER, hover_style};

/// Skills grouped by category in first-seen order. Uncategorized skills share
/// one unnamed group.
#[must_use]
pub fn group_by_category(skills: Vec<Skill>) -> Vec<(Option<String>, Vec<Skill>)> {
    let mut groups: Vec<(Option<String>, Vec<Skill>)> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|(category, _)| *category == skill.category) {
            Some((_, members)) => members.push(skill),
            None => groups.push((skill.category.clone(), vec![skill])),
        }
    }
    groups
}

fn skill_chip(skill: Skill) -> impl IntoView {
    view! {
        <li class="skills__chip hoverable" style=hover_style(CARD_HOVER)>
            {skill.icon.map(|src| view! { <img class="skills__icon" src=src alt="" loading="lazy"/> })}
            <span class="skills__name">{skill.name}</span>
        </li>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let status = use_section_content::<SkillsContent>();
    let title = Signal::derive(move || status.with(section_title));

    let groups = move || match status.with(|s| slot_plan(s, PLACEHOLDER_SLOTS)) {
        SlotPlan::Placeholders(count) => {
            view! { <LoadingSlots count=count class="skills__placeholder"/> }.into_any()
        }
        SlotPlan::Items(skills) => group_by_category(skills)
            .into_iter()
            .map(|(category, members)| {
                view! {
                    <div class="skills__group">
                        {category.map(|c| view! { <h3 class="skills__category">{c}</h3> })}
                        <ul class="skills__list">{members.into_iter().map(skill_chip).collect_view()}</ul>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <SectionShell id=SectionPath::Skills.anchor_id() title=title>
            <div class="skills">{groups}</div>
        </SectionShell>
    }
}
