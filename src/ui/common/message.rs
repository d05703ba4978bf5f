//! Reusable message components for form errors

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error banner shown above a form
/// Hidden while the message is None
#[component]
pub fn ErrorBanner(
    /// Banner title (e.g. "Login Failed")
    title: &'static str,
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <div class="error-message" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <div>
                    <p class="font-medium">{title}</p>
                    <p class="text-sm">{move || error.get().unwrap_or_default()}</p>
                </div>
            </div>
        </Show>
    }
}
