//! Auth context for the component tree
//!
//! This module provides:
//! - The shared [`HttpAuthClient`] and the browser-side [`ClientConfig`]
//! - [`use_session`], a reactive view of the process-wide session
//!
//! The session is loaded once after hydration. During SSR it stays pending so
//! the server render matches the first client render.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::auth::{AuthClient, HttpAuthClient, SessionStore, SessionView};
use crate::core::config::ClientConfig;
use crate::core::forms::LoginMode;
use crate::core::view::Route;

/// Auth context providing the client and its configuration
#[derive(Clone, Copy)]
pub struct AuthContext {
    client: StoredValue<HttpAuthClient>,
    config: StoredValue<ClientConfig>,
}

impl AuthContext {
    /// Handle to the auth client, for use across an `.await`
    pub fn client(&self) -> HttpAuthClient {
        self.client.get_value()
    }

    pub fn store(&self) -> SessionStore {
        self.client.with_value(|client| client.session().clone())
    }

    pub fn login_mode(&self) -> LoginMode {
        self.config.with_value(|config| config.login_mode)
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context(config: ClientConfig) -> AuthContext {
    let client = HttpAuthClient::new(config.auth_base_url.clone());
    let ctx = AuthContext {
        client: StoredValue::new(client),
        config: StoredValue::new(config),
    };

    #[cfg(feature = "hydrate")]
    {
        let client = ctx.client();
        leptos::task::spawn_local(async move {
            crate::core::auth::refresh_session(&client).await;
        });
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Subscribe the calling component to the session.
///
/// The subscription is dropped when the component's owner is cleaned up.
pub fn use_session() -> ReadSignal<SessionView> {
    let store = use_auth_context().store();
    let (session, set_session) = signal(store.current());

    let id = store.subscribe(move |view| {
        set_session.try_set(view.clone());
    });
    on_cleanup(move || store.unsubscribe(id));

    session
}

/// Programmatic navigation to a named [`Route`]
pub fn use_navigate_to() -> Callback<Route> {
    let navigate = use_navigate();
    Callback::new(move |route: Route| navigate(route.path(), Default::default()))
}
