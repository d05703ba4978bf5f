//! User menu component
//!
//! A dropdown in the header showing the signed-in user and account actions.
//! Shows a placeholder while the session is loading and nothing when signed out.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::context::{use_auth_context, use_navigate_to, use_session};
use crate::core::Route;
use crate::core::auth::{SessionGate, User, sign_out_and_leave};
use crate::ui::icon::{Icon, icons};

/// User menu component for the header
#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = use_auth_context();
    let session = use_session();
    let navigate_to = use_navigate_to();

    // Dropdown open state
    let menu_open = RwSignal::new(false);
    let signing_out = RwSignal::new(false);

    // Navigation waits for the sign-out call to resolve
    let handle_logout = move |_| {
        menu_open.set(false);
        signing_out.set(true);
        let client = auth.client();
        spawn_local(async move {
            sign_out_and_leave(&client, |route| navigate_to.run(route)).await;
            signing_out.try_set(false);
        });
    };

    move || match session.with(|view| view.gate()) {
        SessionGate::Pending => view! {
            <div class="w-8 h-8 rounded-full bg-theme-secondary animate-pulse"></div>
        }
        .into_any(),
        SessionGate::Absent => ().into_any(),
        SessionGate::Present(session) => {
            let user = session.user;

            view! {
                <div class="relative">
                    <button
                        class="flex items-center gap-2 p-1 rounded-lg hover:bg-theme-secondary transition-colors"
                        on:click=move |_| menu_open.update(|v| *v = !*v)
                    >
                        <UserAvatar user=user.clone() size=32 />
                        <span class="hidden sm:block text-sm font-medium text-theme-primary max-w-[120px] truncate">
                            {user.name.clone()}
                        </span>
                        <div class="flex items-center justify-center h-4 w-4 text-theme-tertiary transition-transform duration-200" class=("rotate-180", move || menu_open.get())>
                            <Icon name=icons::CHEVRON_DOWN class="h-4 w-4" />
                        </div>
                    </button>

                    <Show when=move || menu_open.get()>
                        <div class="absolute right-0 mt-2 w-56 bg-theme-primary rounded-lg shadow-lg border border-theme py-1 z-50">
                            <div class="px-4 py-3 border-b border-theme">
                                <p class="text-sm font-medium text-theme-primary truncate">{user.name.clone()}</p>
                                <p class="text-xs text-theme-tertiary truncate">{user.handle()}</p>
                            </div>

                            <div class="py-1">
                                <A
                                    href=Route::Settings.path()
                                    attr:class="w-full px-4 py-2 text-sm text-left text-theme-primary hover:bg-theme-secondary transition-colors flex items-center gap-2"
                                >
                                    <Icon name=icons::SETTINGS class="h-4 w-4" />
                                    "Settings"
                                </A>
                                <A
                                    href=Route::Profile.path()
                                    attr:class="w-full px-4 py-2 text-sm text-left text-theme-primary hover:bg-theme-secondary transition-colors flex items-center gap-2"
                                >
                                    <Icon name=icons::USER class="h-4 w-4" />
                                    "Profile"
                                </A>
                            </div>

                            <div class="border-t border-theme my-1"></div>

                            <div class="py-1">
                                <button
                                    class="w-full px-4 py-2 text-sm text-left text-red-500 hover:bg-red-50 dark:hover:bg-red-900/20 transition-colors flex items-center gap-2"
                                    disabled=move || signing_out.get()
                                    on:click=handle_logout
                                >
                                    <Icon name=icons::LOGOUT class="h-4 w-4" />
                                    "Log out"
                                </button>
                            </div>
                        </div>
                    </Show>
                </div>
            }
            .into_any()
        }
    }
}

/// User avatar component
#[component]
pub fn UserAvatar(
    /// User data
    user: User,
    /// Avatar size in pixels
    #[prop(default = 32)]
    size: u32,
) -> impl IntoView {
    let size_style = format!(
        "width: {}px; height: {}px; min-width: {}px; min-height: {}px;",
        size, size, size, size
    );
    let font_size = if size >= 40 { "text-lg" } else { "text-sm" };

    if let Some(image) = &user.image {
        view! {
            <img
                src=image.clone()
                alt=user.name.clone()
                class="rounded-full object-cover"
                style=size_style
            />
        }
        .into_any()
    } else {
        // Generate a consistent color from the name
        let hash = user
            .name
            .bytes()
            .fold(0u32, |acc, b| acc.wrapping_add(b as u32));
        let colors = [
            "bg-blue-500",
            "bg-green-500",
            "bg-yellow-500",
            "bg-red-500",
            "bg-purple-500",
            "bg-pink-500",
            "bg-indigo-500",
            "bg-teal-500",
        ];
        let color = colors[(hash as usize) % colors.len()];

        view! {
            <div
                class=format!("{} rounded-full flex items-center justify-center text-white font-medium {}", color, font_size)
                style=size_style
            >
                {user.initial()}
            </div>
        }
        .into_any()
    }
}
