//! Auth page component
//!
//! Switches between the login, signup and forgot-password forms. The initial
//! form comes from the `view` query parameter; every form sends the user
//! home on success.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::core::{AuthView, Route};
use crate::ui::auth::{ForgotPasswordForm, LoginForm, SignupForm, use_navigate_to};
use crate::ui::icon::{Icon, icons};

/// Auth page component
#[component]
pub fn AuthPage() -> impl IntoView {
    let query = use_query_map();
    let navigate_to = use_navigate_to();

    // Unknown `view` values select no form
    let current = RwSignal::new(query.with_untracked(|params| {
        AuthView::from_query(params.get("view").as_deref())
    }));

    let on_success = Callback::new(move |_: ()| navigate_to.run(Route::Home));
    let show = move |view: AuthView| Callback::new(move |_: ()| current.set(Some(view)));

    view! {
        <div class="min-h-screen bg-theme-secondary flex flex-col items-center justify-center gap-6 p-6 md:p-10">
            <div class="flex w-full max-w-sm flex-col gap-6">
                <div class="flex items-center gap-2 self-center font-medium text-theme-primary">
                    <div class="w-6 h-6 bg-accent-primary rounded-md flex items-center justify-center">
                        <Icon name=icons::GALLERY class="w-4 h-4" />
                    </div>
                    "Authdeck"
                </div>

                {move || match current.get() {
                    Some(AuthView::Login) => view! {
                        <LoginForm
                            on_success=on_success
                            on_switch_to_signup=show(AuthView::Signup)
                            on_forgot_password=show(AuthView::ForgotPassword)
                        />
                    }
                    .into_any(),
                    Some(AuthView::Signup) => view! {
                        <SignupForm
                            on_success=on_success
                            on_switch_to_login=show(AuthView::Login)
                        />
                    }
                    .into_any(),
                    Some(AuthView::ForgotPassword) => view! {
                        <ForgotPasswordForm
                            on_success=on_success
                            on_back_to_login=show(AuthView::Login)
                        />
                    }
                    .into_any(),
                    None => ().into_any(),
                }}
            </div>
        </div>
    }
}
