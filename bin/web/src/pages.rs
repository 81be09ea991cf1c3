//! Page components for the application.
//!
//! Each page is a Leptos component rendered for one route in
//! [`App`](crate::app::App).

pub mod home;
pub mod newsletter;
pub mod not_found;

// Re-export all page components for convenient access
pub use home::HomePage;
pub use newsletter::NewsletterPage;
pub use not_found::NotFoundPage;

use leptos::prelude::*;
use leptos_router::{hooks::use_params, params::Params};
use privacymail_core::decode_service_id;

/// URL params for the per-service pages.
#[derive(Params, PartialEq, Clone, Debug)]
struct ServiceParams {
    id: Option<String>,
}

/// Service name from the `:id` segment of the current route.
fn use_service_id() -> Signal<String> {
    let params = use_params::<ServiceParams>();
    Signal::derive(move || {
        params
            .get()
            .ok()
            .and_then(|p| p.id)
            .map(|id| decode_service_id(&id))
            .unwrap_or_default()
    })
}
