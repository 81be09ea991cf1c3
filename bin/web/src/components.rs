//! Page chrome shared by every route.

use leptos::prelude::*;

/// Site header with the logo linking home.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-left">
                <a href="/" class="logo">"PrivacyMail"</a>
            </div>
            <nav class="header-right">
                <a href="/">"Analyze a newsletter"</a>
            </nav>
        </header>
    }
}

/// Site footer.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span>"PrivacyMail"</span>
            <a href="https://github.com/privacymail/privacymail" rel="external">"Source"</a>
        </footer>
    }
}
