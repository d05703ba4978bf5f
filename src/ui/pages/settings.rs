//! Settings page component

use leptos::prelude::*;

use super::layout::AppHeader;
use crate::core::auth::Session;
use crate::ui::auth::RequireSession;

/// Settings page component
#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <RequireSession
            denied_title="Access Denied"
            denied_description="Please sign in to access settings"
            render=|session: Session| view! { <Settings session=session /> }
        />
    }
}

#[component]
fn Settings(session: Session) -> impl IntoView {
    let user = session.user;
    let verified = if user.email_verified { "Yes ✓" } else { "No" };

    view! {
        <div class="min-h-screen bg-theme-secondary">
            <AppHeader />
            <main class="max-w-4xl mx-auto p-8">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold text-theme-primary">"Settings"</h1>
                    <p class="text-theme-secondary mt-2">"Manage your account settings and preferences"</p>
                </div>

                <div class="grid gap-6 md:grid-cols-2">
                    <section class="card">
                        <h2 class="card-title">"Profile Information"</h2>
                        <p class="card-description">"Update your personal information"</p>
                        <dl class="space-y-4">
                            <SettingRow label="Name" value=user.name.clone() />
                            {user.username.clone().map(|username| view! {
                                <SettingRow label="Username" value=format!("@{username}") />
                            })}
                            <SettingRow label="Email" value=user.email.clone() />
                            <SettingRow label="Email Verified" value=verified />
                        </dl>
                    </section>

                    <section class="card">
                        <h2 class="card-title">"Account Security"</h2>
                        <p class="card-description">"Manage your account security settings"</p>
                        <dl class="space-y-4">
                            <SettingRow label="Account Status" value="Active" />
                            <SettingRow label="Member Since" value=user.member_since() />
                        </dl>
                    </section>
                </div>
            </main>
        </div>
    }
}

#[component]
fn SettingRow(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div>
            <dt class="text-sm font-medium text-theme-secondary">{label}</dt>
            <dd class="mt-1 text-sm text-theme-primary">{value}</dd>
        </div>
    }
}
