//! Not-found page component.

use super::use_service_id;
use leptos::prelude::*;

/// Shown when no analysis exists for a service, routed at `/404/:id`.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let id = use_service_id();

    view! {
        <div class="not-found-page">
            <h1>"No analysis yet"</h1>
            <p>"We have not analyzed a newsletter from " <strong>{move || id.get()}</strong> " so far."</p>
            <a href="/" class="cta-button">"Back to the start page"</a>
        </div>
    }
}
