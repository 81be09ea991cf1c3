//! Main Leptos application component and routing.

use crate::components::{Footer, Header};
use crate::dom::adjust_browser_viewport;
use crate::pages::{HomePage, NewsletterPage, NotFoundPage};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use privacymail_core::MountHook;

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Effects only run in the browser, after hydration.
    let mut pin_viewport = MountHook::new(|| {
        adjust_browser_viewport();
    });
    Effect::new(move || {
        pin_viewport.fire();
    });

    view! {
        <Title text="PrivacyMail"/>
        <Router>
            <Header/>
            <main class="content">
                // Keep `/` last.
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/service/:id") view=NewsletterPage/>
                    <Route path=path!("/404/:id") view=NotFoundPage/>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
