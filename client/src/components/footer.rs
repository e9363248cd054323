//! Storefront footer with legal links.

use leptos::prelude::*;

use crate::config::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span class="site-footer__brand">{APP_NAME}</span>
            <nav class="site-footer__links">
                <a href="/privacy">"Privacy Policy"</a>
                <a href="/terms">"Terms of Service"</a>
            </nav>
        </footer>
    }
}
