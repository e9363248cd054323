//! Sign-in page. The sign-in flow itself belongs to the auth backend.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::{APP_NAME, AUTH_SIGN_IN_URL};
use crate::state::auth::AuthSession;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let navigate = use_navigate();

    // Already signed in: go straight to the account page.
    let state = session.state();
    Effect::new(move || {
        if state.with(|s| !s.loading && s.user.is_some()) {
            navigate("/account", NavigateOptions::default());
        }
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{APP_NAME}</h1>
                <p class="login-card__subtitle">"Sign in to order, track pickups and manage your account."</p>
                <a
                    href=AUTH_SIGN_IN_URL
                    class="login-button"
                    rel="external"
                >
                    "Continue to sign in"
                </a>
                <a href="/" class="login-card__back">"Back to the storefront"</a>
            </div>
        </div>
    }
}
