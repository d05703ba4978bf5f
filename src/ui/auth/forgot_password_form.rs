//! Forgot-password form component
//!
//! After a successful request the form is replaced by a confirmation panel;
//! `on_success` runs once the panel has been visible for the redirect delay.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_auth_context;
use crate::core::auth::AuthClient;
use crate::core::forms::{ForgotPasswordController, ForgotPasswordField, schedule_reset_redirect};
use crate::core::timer::BrowserTimer;
use crate::ui::common::{ErrorBanner, FormField, InlineSpinner, bind_field};
use crate::ui::icon::{Icon, icons};

/// Forgot-password form component
#[component]
pub fn ForgotPasswordForm(
    /// Callback run after the confirmation delay
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
    /// Callback to go back to the login form
    #[prop(optional, into)]
    on_back_to_login: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();
    let controller = RwSignal::new(ForgotPasswordController::new());

    let email = bind_field(controller, ForgotPasswordField::Email);

    let error = Signal::derive(move || controller.with(|c| c.error().map(str::to_string)));
    let success = move || controller.with(ForgotPasswordController::success);
    let submitting = move || controller.with(|c| c.form.is_submitting());
    let disabled = move || controller.with(|c| !c.form.can_submit() || c.form.is_submitting());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(request) = controller.try_update(|c| c.begin_submit().ok()).flatten() else {
            return;
        };

        let client = auth.client();
        spawn_local(async move {
            let result = client.forget_password(&request).await;
            let succeeded = controller
                .try_update(|c| c.finish_submit(result))
                .is_some_and(|outcome| outcome.is_success());
            if let Some(callback) = on_success.filter(|_| succeeded) {
                schedule_reset_redirect(&BrowserTimer, move || {
                    // The form may have been left while the timer was pending
                    if !controller.is_disposed() {
                        callback.run(());
                    }
                });
            }
        });
    };

    let back_to_login = move |_| {
        if let Some(callback) = on_back_to_login {
            callback.run(());
        }
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
            <Show
                when=success
                fallback=move || view! {
                    <form on:submit=on_submit class="space-y-6" id="forgot-password-form" novalidate=true>
                        <div class="text-center">
                            <h2 class="text-2xl font-bold text-theme-primary">"Reset your password"</h2>
                            <p class="mt-2 text-sm text-theme-secondary">
                                "Enter your email address and we'll send you a link to reset your password."
                            </p>
                        </div>

                        <ErrorBanner title="Reset Failed" error=error />

                        <FormField
                            label="Email"
                            binding=email
                            input_type="email"
                            placeholder="Enter your email"
                            autocomplete="email"
                        />

                        <button type="submit" class="btn-primary w-full" disabled=disabled>
                            {move || {
                                if submitting() {
                                    view! {
                                        <span class="flex items-center justify-center">
                                            <InlineSpinner />
                                            "Sending reset link..."
                                        </span>
                                    }
                                    .into_any()
                                } else {
                                    view! { <span class="block">"Send reset link"</span> }.into_any()
                                }
                            }}
                        </button>

                        {on_back_to_login.is_some().then(|| view! {
                            <button type="button" class="btn-link w-full" on:click=back_to_login>
                                "Back to login"
                            </button>
                        })}
                    </form>
                }
            >
                <div class="text-center space-y-4">
                    <div class="mx-auto w-12 h-12 rounded-full bg-green-100 flex items-center justify-center">
                        <Icon name=icons::MAIL class="w-6 h-6" />
                    </div>
                    <h2 class="text-2xl font-bold text-theme-primary">"Check your email"</h2>
                    <p class="text-sm text-theme-secondary">
                        "We've sent a password reset link to your email address."
                    </p>
                    <button type="button" class="btn-outline w-full" on:click=back_to_login>
                        "Back to login"
                    </button>
                </div>
            </Show>
        </div>
    }
}
