//! Page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"Built with Rust and Leptos"</p>
            <a class="footer__top" href="#home">"Back to top ↑"</a>
        </footer>
    }
}
