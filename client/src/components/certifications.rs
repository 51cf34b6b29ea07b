//! Certificate cards in a drag-scrollable carousel with a detail modal.

use leptos::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::content_section::{SectionShell, list_slots, use_section_content};
use crate::components::detail_modal::showcase_modal;
use crate::net::store::SectionPath;
use crate::net::types::{Certificate, CertificationsContent};
use crate::state::section::section_title;
use crate::state::selection::{ImageClick, Selection};
use crate::util::motion::{CARD_HOVER, hover_style};

/// Hint shown in the modal when the certificate links somewhere.
pub const CERTIFICATE_LINK_HINT: &str = "Tap image to open certificate";

#[component]
pub fn Certifications() -> impl IntoView {
    let status = use_section_content::<CertificationsContent>();
    let selection = RwSignal::new(Selection::<Certificate>::default());
    let title = Signal::derive(move || status.with(section_title));

    let cards = list_slots(status, "cert-card cert-card--placeholder", move |_, cert: Certificate| {
        let Certificate { title, img, .. } = cert.clone();
        view! {
            <div
                class="cert-card hoverable"
                style=hover_style(CARD_HOVER)
                on:click=move |_| selection.update(|s| s.select(cert.clone()))
            >
                <img class="cert-card__image" src=img alt=title.clone() loading="lazy" draggable="false"/>
                <div class="cert-card__caption">
                    <h3>{title}</h3>
                </div>
            </div>
        }
    });

    view! {
        <SectionShell id=SectionPath::Certifications.anchor_id() title=title>
            <Carousel>{cards}</Carousel>
            {showcase_modal(selection, Some(CERTIFICATE_LINK_HINT), ImageClick::FollowLink)}
        </SectionShell>
    }
}
