//! Route guard for portal pages.
//!
//! Improves UX only: the backend must still validate the session on every
//! request.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthSession;
use crate::util::auth::install_unauth_redirect;

/// Render `children` for signed-in users; send everyone else to `/login`.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AuthSession>();
    install_unauth_redirect(session.clone(), use_navigate());

    view! {
        <Show
            when=move || session.current_user().is_some()
            fallback=|| view! { <p class="portal-redirect">"Redirecting to sign in..."</p> }
        >
            {children()}
        </Show>
    }
}
