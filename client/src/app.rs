//! Root application component owning the theme flag.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::home::HomePage;
use crate::util::dark_mode::{self, DEFAULT_DARK};

/// Root application component.
///
/// The theme flag lives here and is passed down to the navbar (which toggles
/// it) and to sections with palette-dependent behavior.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let dark = RwSignal::new(DEFAULT_DARK);
    dark_mode::apply(dark.get_untracked());

    view! {
        <Title text="Portfolio"/>
        <div class="app">
            <Navbar dark=dark/>
            <HomePage dark=dark/>
            <Footer/>
        </div>
    }
}
