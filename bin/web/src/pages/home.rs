//! Home page component.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use privacymail_core::service_path;

/// The landing page with the service lookup form.
#[component]
pub fn HomePage() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (invalid, set_invalid) = signal(false);
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match service_path(&query.get()) {
            Some(path) => {
                set_invalid.set(false);
                navigate(&path, Default::default());
            }
            None => set_invalid.set(true),
        }
    };

    view! {
        <div class="home-page">
            <h1>"PrivacyMail"</h1>
            <p>"How much does a newsletter know about its readers?"</p>
            <form class="service-lookup" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Service domain, e.g. example.com"
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit" class="cta-button">"Analyze"</button>
            </form>
            <Show when=move || invalid.get()>
                <p class="error">"Enter a service name without slashes or percent signs."</p>
            </Show>
        </div>
    }
}
