use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::config::{CLIENT_CONFIG_ELEMENT_ID, ClientConfig};
use crate::ui::auth::provide_auth_context;
use crate::ui::pages::{AuthPage, DashboardPage, NotFoundPage, SettingsPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let client_config = client_config().to_script_json();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script id=CLIENT_CONFIG_ELEMENT_ID type="application/json" inner_html=client_config></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Configuration for the browser side of the app.
///
/// The server gets it from the request context, the hydrated client from the
/// tag embedded by [`shell`].
fn client_config() -> ClientConfig {
    #[cfg(feature = "hydrate")]
    {
        ClientConfig::from_document()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use_context::<ClientConfig>().unwrap_or_default()
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_auth_context(client_config());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/authdeck.css"/>
        <Title text="Authdeck"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=DashboardPage />
                <Route path=path!("/auth") view=AuthPage />
                <Route path=path!("/settings") view=SettingsPage />
            </Routes>
        </Router>
    }
}
