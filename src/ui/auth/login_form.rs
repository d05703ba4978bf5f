//! Login form component
//!
//! Signs in with an email or a username depending on the configured
//! [`LoginMode`].

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_auth_context;
use crate::core::forms::{LoginController, LoginField, LoginMode};
use crate::ui::common::{ErrorBanner, FormField, InlineSpinner, bind_field};

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback when login is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
    /// Callback to switch to the signup form
    #[prop(optional, into)]
    on_switch_to_signup: Option<Callback<()>>,
    /// Callback to switch to the forgot-password form
    #[prop(optional, into)]
    on_forgot_password: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();
    let mode = auth.login_mode();
    let controller = RwSignal::new(LoginController::new(mode));

    let identifier = bind_field(controller, controller.with_untracked(LoginController::identifier_field));
    let password = bind_field(controller, LoginField::Password);

    let error = Signal::derive(move || controller.with(|c| c.error().map(str::to_string)));
    let submitting = move || controller.with(|c| c.form.is_submitting());
    let disabled = move || controller.with(|c| !c.form.can_submit() || c.form.is_submitting());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Touches every field; a rejected submit only reveals the errors
        let Some(request) = controller.try_update(|c| c.begin_submit().ok()).flatten() else {
            return;
        };

        let client = auth.client();
        spawn_local(async move {
            let result = request.send(&client).await;
            let succeeded = controller
                .try_update(|c| c.finish_submit(result))
                .is_some_and(|outcome| outcome.is_success());
            if let Some(callback) = on_success.filter(|_| succeeded) {
                callback.run(());
            }
        });
    };

    let (identifier_label, identifier_type, identifier_placeholder, subtitle) = match mode {
        LoginMode::EmailOrUsername => (
            "Email or Username",
            "text",
            "Enter your email or username",
            "Enter your email or username and password to sign in",
        ),
        LoginMode::EmailOnly => (
            "Email",
            "email",
            "Enter your email",
            "Enter your email and password to sign in",
        ),
    };

    let forgot_password_link = on_forgot_password.map(|callback| {
        view! {
            <button
                type="button"
                class="text-sm text-theme-secondary hover:underline"
                on:click=move |_| callback.run(())
            >
                "Forgot your password?"
            </button>
        }
        .into_any()
    });

    view! {
        <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
            <form on:submit=on_submit class="space-y-6" id="login-form" novalidate=true>
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-theme-primary">"Welcome back"</h2>
                    <p class="mt-2 text-sm text-theme-secondary">{subtitle}</p>
                </div>

                <ErrorBanner title="Login Failed" error=error />

                <FormField
                    label=identifier_label
                    binding=identifier
                    input_type=identifier_type
                    placeholder=identifier_placeholder
                    autocomplete="username"
                />
                <FormField
                    label="Password"
                    binding=password
                    input_type="password"
                    placeholder="Enter your password"
                    autocomplete="current-password"
                    label_action=forgot_password_link
                />

                <button type="submit" class="btn-primary w-full" disabled=disabled>
                    {move || {
                        if submitting() {
                            view! {
                                <span class="flex items-center justify-center">
                                    <InlineSpinner />
                                    "Signing in..."
                                </span>
                            }
                            .into_any()
                        } else {
                            view! { <span class="block">"Sign In"</span> }.into_any()
                        }
                    }}
                </button>

                {on_switch_to_signup.map(|callback| view! {
                    <div class="text-center text-sm text-theme-secondary">
                        "Don't have an account? "
                        <button
                            type="button"
                            class="text-accent-primary hover:text-accent-primary-hover font-medium"
                            on:click=move |_| callback.run(())
                        >
                            "Sign up"
                        </button>
                    </div>
                })}
            </form>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::config::ClientConfig;
    use crate::ui::auth::provide_auth_context;

    fn render_form(login_mode: LoginMode) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_auth_context(ClientConfig {
                auth_base_url: String::new(),
                login_mode,
            });
            view! { <LoginForm /> }.to_html()
        })
    }

    #[test]
    fn test_email_only_mode_asks_for_email() {
        let html = render_form(LoginMode::EmailOnly);
        assert!(html.contains("Enter your email and password to sign in"));
        assert!(!html.contains("email or username"));
    }

    #[test]
    fn test_username_mode_mentions_username() {
        let html = render_form(LoginMode::EmailOrUsername);
        assert!(html.contains("Enter your email or username and password to sign in"));
    }
}
