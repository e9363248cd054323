//! Public menu listing.

use leptos::prelude::*;

use crate::state::menu::{MENU, format_price};

#[component]
pub fn MenuPage() -> impl IntoView {
    view! {
        <section class="menu-page">
            <h1>"Menu"</h1>
            <ul class="menu-page__items">
                {MENU
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="menu-item">
                                <h2 class="menu-item__name">{item.name}</h2>
                                <p class="menu-item__ingredients">{item.ingredient_list()}</p>
                                <span class="menu-item__price">{format_price(item.price_cents)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
