//! Contact details and outbound profile links.

use leptos::prelude::*;

use crate::components::content_section::{SectionShell, Spinner, use_section_content};
use crate::net::store::SectionPath;
use crate::net::types::{ContactContent, ContactLink};
use crate::state::section::{LoadStatus, section_title};
use crate::util::navigate::normalize_link;

fn contact_link(link: ContactLink) -> Option<impl IntoView> {
    let href = normalize_link(Some(&link.url))?.to_owned();
    let label = if link.label.trim().is_empty() { href.clone() } else { link.label };
    Some(view! {
        <li>
            <a class="contact__link" href=href target="_blank" rel="noopener noreferrer">{label}</a>
        </li>
    })
}

#[component]
pub fn Contact() -> impl IntoView {
    let status = use_section_content::<ContactContent>();
    let title = Signal::derive(move || status.with(section_title));

    let body = move || {
        if !status.with(LoadStatus::is_settled) {
            return view! { <Spinner/> }.into_any();
        }
        let ContactContent { message, email, phone, location, links, .. } =
            status.with(|s| s.content().cloned()).unwrap_or_default();
        view! {
            <div class="contact">
                {message.map(|m| view! { <p class="contact__message">{m}</p> })}
                <ul class="contact__details">
                    {email.map(|e| view! { <li><a href=format!("mailto:{e}")>{e.clone()}</a></li> })}
                    {phone.map(|p| view! { <li><a href=format!("tel:{p}")>{p.clone()}</a></li> })}
                    {location.map(|l| view! { <li class="contact__location">{l}</li> })}
                </ul>
                <ul class="contact__links">{links.into_iter().filter_map(contact_link).collect_view()}</ul>
            </div>
        }
        .into_any()
    };

    view! {
        <SectionShell id=SectionPath::Contact.anchor_id() title=title>
            {body}
        </SectionShell>
    }
}
