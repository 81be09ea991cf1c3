//! Newsletter analysis page component.

use super::use_service_id;
use leptos::prelude::*;

/// Privacy analysis of one service's newsletter, routed at `/service/:id`.
#[component]
pub fn NewsletterPage() -> impl IntoView {
    let id = use_service_id();

    view! {
        <div class="newsletter-page">
            <h1>{move || id.get()}</h1>
            <p>"Tracking and third-party analysis for this newsletter."</p>
        </div>
    }
}
