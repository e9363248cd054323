//! Route-driven page frame.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sits inside the router so it can read the current location. The routed
//! content is always mounted; only the surrounding chrome toggles.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::util::layout::{LayoutMode, layout_for_path};

/// Frame `children` with storefront chrome unless the route is a portal.
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let pathname = use_location().pathname;
    let mode = Memo::new(move |_| layout_for_path(&pathname.get()));

    view! {
        <Show when=move || mode.get().shows_chrome()>
            <Header />
        </Show>
        <main class=move || format!("app-main app-main--{}", mode.get().as_str())>
            {children()}
        </main>
        <Show when=move || mode.get().shows_chrome()>
            <Footer />
        </Show>
        {debug_overlay(mode, pathname)}
    }
}

#[cfg(feature = "layout-debug")]
fn debug_overlay(mode: Memo<LayoutMode>, pathname: Memo<String>) -> Option<AnyView> {
    Some(
        view! {
            <div class="layout-debug">
                {move || format!("path={} layout={}", pathname.get(), mode.get().as_str())}
            </div>
        }
        .into_any(),
    )
}

#[cfg(not(feature = "layout-debug"))]
fn debug_overlay(_mode: Memo<LayoutMode>, _pathname: Memo<String>) -> Option<AnyView> {
    None
}
