//! Signup form component

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_auth_context;
use crate::core::auth::AuthClient;
use crate::core::forms::{SignupController, SignupField};
use crate::ui::common::{ErrorBanner, FormField, InlineSpinner, bind_field};

/// Signup form component
#[component]
pub fn SignupForm(
    /// Callback when the account has been created
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
    /// Callback to switch to the login form
    #[prop(optional, into)]
    on_switch_to_login: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();
    let controller = RwSignal::new(SignupController::new());

    let name = bind_field(controller, SignupField::Name);
    let username = bind_field(controller, SignupField::Username);
    let email = bind_field(controller, SignupField::Email);
    let password = bind_field(controller, SignupField::Password);
    let confirm_password = bind_field(controller, SignupField::ConfirmPassword);

    let error = Signal::derive(move || controller.with(|c| c.error().map(str::to_string)));
    let submitting = move || controller.with(|c| c.form.is_submitting());
    let disabled = move || controller.with(|c| !c.form.can_submit() || c.form.is_submitting());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(request) = controller.try_update(|c| c.begin_submit().ok()).flatten() else {
            return;
        };

        let client = auth.client();
        spawn_local(async move {
            let result = client.sign_up_email(&request).await;
            let succeeded = controller
                .try_update(|c| c.finish_submit(result))
                .is_some_and(|outcome| outcome.is_success());
            if let Some(callback) = on_success.filter(|_| succeeded) {
                callback.run(());
            }
        });
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
            <form on:submit=on_submit class="space-y-6" id="signup-form" novalidate=true>
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-theme-primary">"Create your account"</h2>
                    <p class="mt-2 text-sm text-theme-secondary">
                        "Enter your information to create a new account"
                    </p>
                </div>

                <ErrorBanner title="Signup Failed" error=error />

                <FormField
                    label="Full Name"
                    binding=name
                    placeholder="Enter your full name"
                    autocomplete="name"
                />
                <FormField
                    label="Username"
                    binding=username
                    placeholder="Choose a username"
                    autocomplete="username"
                />
                <FormField
                    label="Email"
                    binding=email
                    input_type="email"
                    placeholder="Enter your email"
                    autocomplete="email"
                />
                <FormField
                    label="Password"
                    binding=password
                    input_type="password"
                    placeholder="Create a password"
                    autocomplete="new-password"
                />
                <FormField
                    label="Confirm Password"
                    binding=confirm_password
                    input_type="password"
                    placeholder="Confirm your password"
                    autocomplete="new-password"
                />

                <button type="submit" class="btn-primary w-full" disabled=disabled>
                    {move || {
                        if submitting() {
                            view! {
                                <span class="flex items-center justify-center">
                                    <InlineSpinner />
                                    "Creating account..."
                                </span>
                            }
                            .into_any()
                        } else {
                            view! { <span class="block">"Create Account"</span> }.into_any()
                        }
                    }}
                </button>

                {on_switch_to_login.map(|callback| view! {
                    <div class="text-center text-sm text-theme-secondary">
                        "Already have an account? "
                        <button
                            type="button"
                            class="text-accent-primary hover:text-accent-primary-hover font-medium"
                            on:click=move |_| callback.run(())
                        >
                            "Sign in"
                        </button>
                    </div>
                })}
            </form>
        </div>
    }
}
