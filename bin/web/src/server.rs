//! axum host for the web shell.
//!
//! Routes declared in [`App`] are registered through `leptos_axum` and
//! server-rendered; the compiled bundle is served under `/pkg`; anything else
//! goes to Leptos' file-and-error handler, which serves static files from the
//! site root or renders the shell with a 404.

use crate::app::App;
use crate::config::ServerConfig;
use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use leptos_meta::MetaTags;
use tower_http::services::ServeDir;

/// Builds the application router.
pub fn router(leptos_options: LeptosOptions, config: &ServerConfig) -> Router {
    let routes = generate_route_list(App);
    tracing::debug!(count = routes.len(), "registering app routes");

    Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .fallback(leptos_axum::file_and_error_handler::<LeptosOptions, _>(
            shell,
        ))
        .with_state(leptos_options)
}

/// The HTML document wrapping the app.
///
/// The viewport meta element here is the one the app pins on mount.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
