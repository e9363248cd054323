//! Admin back office: menu copy drafting.
//!
//! SYSTEM CONTEXT
//! ==============
//! Staff pick or type a product and ask the server for a short marketing
//! blurb. The server degrades to canned copy on its own; this page only
//! flags which kind of text came back.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::require_session::RequireSession;
use crate::net::types::{DegradedReason, DescribeResponse};
use crate::state::menu::{MENU, find_item};

/// Status line shown under a drafted description.
pub(crate) fn draft_status(resp: &DescribeResponse) -> &'static str {
    match (resp.degraded_reason, resp.generated) {
        (_, true) => "Drafted by the copy assistant. Review before publishing.",
        (Some(DegradedReason::MissingCredential | DegradedReason::Misconfigured), false) => {
            "Copy assistant is not configured; showing house copy."
        }
        (_, false) => "Copy assistant unavailable; showing house copy.",
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let ingredients = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let draft = RwSignal::new(None::<DescribeResponse>);
    let info = RwSignal::new(String::new());

    let on_pick = move |ev: leptos::ev::Event| {
        if let Some(item) = find_item(&event_target_value(&ev)) {
            name.set(item.name.to_owned());
            ingredients.set(item.ingredient_list());
        }
    };

    let on_generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set("Drafting...".to_owned());
        let name_value = name.get();
        let ingredients_value = ingredients.get();
        leptos::task::spawn_local(async move {
            match crate::net::api::generate_description(&name_value, &ingredients_value).await {
                Ok(resp) => {
                    info.set(draft_status(&resp).to_owned());
                    draft.set(Some(resp));
                }
                Err(e) => {
                    log::warn!("description request failed: {e}");
                    info.set(e);
                }
            }
            busy.set(false);
        });
    };

    view! {
        <RequireSession>
            <section class="admin-page">
                <h1>"Menu copy"</h1>
                <form class="admin-form" on:submit=on_generate>
                    <select class="admin-form__pick" on:change=on_pick>
                        <option value="">"Pick a menu item..."</option>
                        {MENU
                            .iter()
                            .map(|item| view! { <option value=item.slug>{item.name}</option> })
                            .collect_view()}
                    </select>
                    <input
                        class="admin-form__input"
                        type="text"
                        placeholder="Product name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="admin-form__input"
                        type="text"
                        placeholder="Ingredients, comma separated"
                        prop:value=move || ingredients.get()
                        on:input=move |ev| ingredients.set(event_target_value(&ev))
                    />
                    <button class="btn admin-form__submit" type="submit" disabled=move || busy.get()>
                        "Draft description"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="admin-page__info">{move || info.get()}</p>
                </Show>
                <Show when=move || draft.with(Option::is_some)>
                    <blockquote class="admin-page__draft">
                        {move || draft.get().map(|d| d.text).unwrap_or_default()}
                    </blockquote>
                </Show>
            </section>
        </RequireSession>
    }
}
