//! Storefront landing page.

use leptos::prelude::*;

use crate::config::APP_NAME;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-hero">
            <h1>{APP_NAME}</h1>
            <p class="home-hero__tagline">"Salads and grain bowls, built fresh every morning."</p>
            <a href="/menu" class="btn home-hero__cta">"See the menu"</a>
        </section>
    }
}
