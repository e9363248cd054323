//! In-store point-of-sale screen.

use leptos::prelude::*;

use crate::components::require_session::RequireSession;
use crate::state::menu::{MENU, format_price};

#[component]
pub fn PosPage() -> impl IntoView {
    let ticket = RwSignal::new(Vec::<&'static str>::new());
    let total = move || {
        ticket.with(|slugs| {
            slugs
                .iter()
                .filter_map(|slug| crate::state::menu::find_item(slug))
                .map(|item| item.price_cents)
                .sum::<u32>()
        })
    };

    view! {
        <RequireSession>
            <section class="pos-page">
                <h1>"Point of sale"</h1>
                <div class="pos-page__grid">
                    {MENU
                        .iter()
                        .map(|item| {
                            let slug = item.slug;
                            view! {
                                <button class="btn pos-page__item" on:click=move |_| ticket.update(|t| t.push(slug))>
                                    {item.name}
                                    " "
                                    {format_price(item.price_cents)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="pos-page__total">
                    {move || format!("{} items, {}", ticket.with(Vec::len), format_price(total()))}
                </p>
                <button class="btn pos-page__clear" on:click=move |_| ticket.set(Vec::new())>
                    "Clear ticket"
                </button>
            </section>
        </RequireSession>
    }
}
