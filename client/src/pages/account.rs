//! Customer account pages.

use leptos::prelude::*;

use crate::components::require_session::RequireSession;
use crate::state::auth::AuthSession;

#[component]
pub fn AccountPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let label = move || {
        session
            .current_user()
            .map(|user| user.label().to_owned())
            .unwrap_or_default()
    };

    view! {
        <RequireSession>
            <section class="account-page">
                <h1>"Your account"</h1>
                <p class="account-page__who">"Signed in as " {label.clone()}</p>
                <nav class="account-page__nav">
                    <a href="/account">"Profile"</a>
                    <a href="/account/orders">"Orders"</a>
                    <a href="/">"Back to the storefront"</a>
                </nav>
            </section>
        </RequireSession>
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    view! {
        <RequireSession>
            <section class="account-page">
                <h1>"Your orders"</h1>
                <p class="account-page__empty">"No orders yet."</p>
                <a href="/menu">"Browse the menu"</a>
            </section>
        </RequireSession>
    }
}
