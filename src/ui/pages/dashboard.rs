//! Dashboard page component
//!
//! Home page for a signed-in user: profile, session status and quick actions.

use leptos::prelude::*;
use leptos_router::components::A;

use super::layout::AppHeader;
use crate::core::Route;
use crate::core::auth::Session;
use crate::ui::auth::RequireSession;

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireSession
            denied_title="Welcome"
            denied_description="Please sign in to access your dashboard"
            render=|session: Session| view! { <Dashboard session=session /> }
        />
    }
}

#[component]
fn Dashboard(session: Session) -> impl IntoView {
    let user = session.user;

    view! {
        <div class="min-h-screen bg-theme-secondary">
            <AppHeader />
            <main class="max-w-4xl mx-auto p-8">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold text-theme-primary">
                        "Welcome back, " {user.name.clone()} "!"
                    </h1>
                    <p class="text-theme-secondary mt-2">"You're successfully authenticated"</p>
                </div>

                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    <section class="card">
                        <h2 class="card-title">"User Profile"</h2>
                        <div class="space-y-2">
                            <p><strong>"Name: "</strong>{user.name.clone()}</p>
                            <p><strong>"Email: "</strong>{user.email.clone()}</p>
                            {user.email_verified.then(|| view! {
                                <p><strong>"Email: "</strong>"Verified ✓"</p>
                            })}
                        </div>
                    </section>

                    <section class="card">
                        <h2 class="card-title">"Authentication Status"</h2>
                        <div class="space-y-2">
                            <p><strong>"Status: "</strong>"Authenticated"</p>
                            <p><strong>"Session ID: "</strong>{session.session.id.clone()}</p>
                        </div>
                    </section>

                    <section class="card">
                        <h2 class="card-title">"Quick Actions"</h2>
                        <A href=Route::Settings.path() attr:class="btn-primary w-full block text-center">
                            "Settings"
                        </A>
                    </section>
                </div>
            </main>
        </div>
    }
}
