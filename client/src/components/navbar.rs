//! Fixed top navigation with section anchors, mobile menu, and theme toggle.

use leptos::prelude::*;

use crate::net::store::SectionPath;
use crate::util::dark_mode;

#[component]
pub fn Navbar(dark: RwSignal<bool>) -> impl IntoView {
    let menu_open = RwSignal::new(false);

    let on_theme = move |_| dark.update(|d| *d = dark_mode::toggle(*d));
    let on_menu = move |_| menu_open.update(|open| *open = !*open);
    let links_class = move || if menu_open.get() { "navbar__links navbar__links--open" } else { "navbar__links" };
    let theme_label = move || if dark.get() { "☀" } else { "☾" };
    let theme_title = move || if dark.get() { "Switch to light theme" } else { "Switch to dark theme" };

    let links = SectionPath::ALL
        .iter()
        .map(|path| {
            view! {
                <li>
                    <a
                        class="navbar__link"
                        href=format!("#{}", path.anchor_id())
                        on:click=move |_| menu_open.set(false)
                    >
                        {path.nav_label()}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="navbar">
            <nav class="navbar__inner">
                <a class="navbar__brand" href="#home">"Portfolio"</a>
                <button
                    class="navbar__menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=on_menu
                >
                    "☰"
                </button>
                <ul class=links_class>{links}</ul>
                <button class="navbar__theme" title=theme_title on:click=on_theme>
                    {theme_label}
                </button>
            </nav>
        </header>
    }
}
