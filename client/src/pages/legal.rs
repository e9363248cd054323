//! Legal pages.

use leptos::prelude::*;

use crate::config::APP_NAME;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <article class="legal-page">
            <h1>"Privacy Policy"</h1>
            <p>
                {APP_NAME}
                " collects the information needed to take and fulfil your orders: your name, contact \
                details and order history. Payment details are handled by our payment processor and \
                never stored by us."
            </p>
            <p>"You can ask us to export or delete your account data at any time."</p>
        </article>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <article class="legal-page">
            <h1>"Terms of Service"</h1>
            <p>
                "Orders are prepared fresh for the pickup time you choose. Prices and availability may \
                change without notice. Allergen information is provided in good faith; ask staff \
                before ordering if you have a severe allergy."
            </p>
        </article>
    }
}
