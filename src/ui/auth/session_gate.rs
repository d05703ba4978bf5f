//! Session-gated content
//!
//! Renders exactly one of: a loading placeholder while the session is
//! pending, a sign-in prompt when it is absent, or the gated content.

use leptos::prelude::*;
use leptos_router::components::A;

use super::context::use_session;
use crate::core::Route;
use crate::core::auth::{Session, SessionGate};
use crate::ui::common::LoadingSpinner;

#[component]
pub fn RequireSession<F, V>(
    /// Title of the sign-in prompt
    denied_title: &'static str,
    /// Text of the sign-in prompt
    denied_description: &'static str,
    /// Gated content for the signed-in session
    render: F,
) -> impl IntoView
where
    F: Fn(Session) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let session = use_session();

    move || match session.with(|view| view.gate()) {
        SessionGate::Pending => view! { <LoadingSpinner message="Loading..." /> }.into_any(),
        SessionGate::Absent => view! {
            <div class="min-h-screen flex items-center justify-center bg-theme-secondary p-4">
                <div class="w-full max-w-md bg-theme-primary rounded-xl shadow-lg p-6 border border-theme space-y-4">
                    <div>
                        <h2 class="text-2xl font-bold text-theme-primary">{denied_title}</h2>
                        <p class="mt-2 text-sm text-theme-secondary">{denied_description}</p>
                    </div>
                    <A href=Route::Auth.path() attr:class="btn-primary w-full block text-center">
                        "Sign In"
                    </A>
                </div>
            </div>
        }
        .into_any(),
        SessionGate::Present(session) => render(session).into_any(),
    }
}
