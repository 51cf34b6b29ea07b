//! The portfolio page: every content section in fixed order.

use leptos::prelude::*;

use crate::components::certifications::Certifications;
use crate::components::contact::Contact;
use crate::components::education::Education;
use crate::components::experience::Experience;
use crate::components::hero::Hero;
use crate::components::projects::Projects;
use crate::components::skills::Skills;

/// Sections load independently; none waits on another.
#[component]
pub fn HomePage(#[prop(into)] dark: Signal<bool>) -> impl IntoView {
    view! {
        <main class="page">
            <Hero dark=dark/>
            <Experience/>
            <Education/>
            <Skills/>
            <Projects/>
            <Certifications/>
            <Contact/>
        </main>
    }
}
