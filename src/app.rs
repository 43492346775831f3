//! Root application component with routing and the shared API client.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::config::ApiConfig;
use crate::net::client::{HttpClient, SharedClient};
use crate::pages::dashboard::DashboardPage;

/// HTML shell rendered on the server for SSR + hydration.
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

/// Build the process-wide client from build-time config, falling back to defaults.
pub fn build_client() -> SharedClient {
    let config = ApiConfig::from_build_env().unwrap_or_else(|e| {
        log::warn!("{e}; using default API config");
        ApiConfig::default()
    });
    HttpClient::new(config).shared()
}

/// Root application component.
///
/// Owns the single `SharedClient` and hands it to pages explicitly.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let client = build_client();

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Stock Portal"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment("")
                        view={
                            let client = client.clone();
                            move || view! { <DashboardPage client=client.clone()/> }
                        }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=move || view! { <DashboardPage client=client.clone()/> }
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
