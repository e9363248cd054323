//! Root application component, shell and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup order: the auth adapter connects once, the `AuthSession` holder
//! subscribes to it, and no page renders until the first auth callback
//! lands; until then every route shows the single loading placeholder.
//!
//! The route table itself is always mounted so server-side route listing
//! sees every path. The gate lives in the parent route's frame.

#[cfg(all(test, feature = "ssr"))]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::components::fault_boundary::FaultBoundary;
use crate::components::layout::AppLayout;
use crate::config::APP_NAME;
use crate::net::auth_service::{SessionEndpoint, SignOut};
use crate::pages::account::{AccountPage, OrdersPage};
use crate::pages::admin::AdminPage;
use crate::pages::home::HomePage;
use crate::pages::legal::{PrivacyPage, TermsPage};
use crate::pages::login::LoginPage;
use crate::pages::menu::MenuPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::pos::PosPage;
use crate::pages::vendor_portal::VendorPortalPage;
use crate::state::auth::AuthSession;

/// HTML document shell used for server rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Production entry: wires the real auth adapter into the shell.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let endpoint = SessionEndpoint::connect();
    let session = AuthSession::start(&endpoint);
    let sign_out = endpoint.sign_out_action();

    view! { <AppShell session=session sign_out=sign_out /> }
}

/// App shell around an explicitly supplied session holder and the matching
/// sign-out action. Both are re-exposed to descendants through context.
#[component]
pub fn AppShell(session: AuthSession, sign_out: SignOut) -> impl IntoView {
    provide_context(session.clone());
    provide_context(sign_out);
    on_cleanup(move || session.release());

    view! {
        <Title text=APP_NAME />
        <Router>
            <FaultBoundary>
                <Routes fallback=|| view! { <SessionGate><NotFoundPage /></SessionGate> }>
                    <ParentRoute path=path!("") view=SessionFrame>
                        <Route path=path!("") view=HomePage />
                        <Route path=path!("/menu") view=MenuPage />
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/account") view=AccountPage />
                        <Route path=path!("/account/orders") view=OrdersPage />
                        <Route path=path!("/admin") view=AdminPage />
                        <Route path=path!("/pos") view=PosPage />
                        <Route path=path!("/vendor-portal") view=VendorPortalPage />
                        <Route path=path!("/privacy") view=PrivacyPage />
                        <Route path=path!("/terms") view=TermsPage />
                    </ParentRoute>
                </Routes>
            </FaultBoundary>
        </Router>
    }
}

/// Parent route frame for every page.
#[component]
fn SessionFrame() -> impl IntoView {
    view! {
        <SessionGate>
            <Outlet />
        </SessionGate>
    }
}

/// Loading placeholder until the first auth callback, then the layout
/// frame around `children`.
#[component]
fn SessionGate(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AuthSession>();

    view! {
        <Show when=move || !session.is_loading() fallback=LoadingScreen>
            {
                let children = children.clone();
                view! { <AppLayout>{children()}</AppLayout> }
            }
        </Show>
    }
}

/// Single placeholder shown until the first auth callback.
#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="app-loading" aria-busy="true">
            <p>"Loading..."</p>
        </div>
    }
}
