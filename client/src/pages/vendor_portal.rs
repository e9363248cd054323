//! Supplier-facing portal.

use leptos::prelude::*;

use crate::components::require_session::RequireSession;

#[component]
pub fn VendorPortalPage() -> impl IntoView {
    view! {
        <RequireSession>
            <section class="vendor-portal">
                <h1>"Vendor portal"</h1>
                <p>"Delivery schedules and invoices are shared here once your account is approved."</p>
                <a href="/">"Back to the storefront"</a>
            </section>
        </RequireSession>
    }
}
