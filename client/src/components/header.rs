//! Storefront header with navigation and session controls.

use leptos::prelude::*;

use crate::config::APP_NAME;
use crate::net::auth_service::SignOut;
use crate::state::auth::AuthSession;

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let sign_out = expect_context::<SignOut>();

    let signed_in = {
        let session = session.clone();
        move || session.current_user().is_some()
    };
    let label = move || {
        session
            .current_user()
            .map(|user| user.label().to_owned())
            .unwrap_or_default()
    };

    let on_sign_out = move |_| sign_out.run();

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">{APP_NAME}</a>
            <nav class="site-header__nav">
                <a href="/menu">"Menu"</a>
                <a href="/vendor-portal">"Vendors"</a>
            </nav>
            <span class="site-header__spacer"></span>
            <Show
                when=signed_in
                fallback=|| view! { <a href="/login" class="btn site-header__sign-in">"Sign in"</a> }
            >
                <a href="/account" class="site-header__account">{label.clone()}</a>
                <button class="btn site-header__sign-out" on:click=on_sign_out.clone()>
                    "Sign out"
                </button>
            </Show>
        </header>
    }
}
