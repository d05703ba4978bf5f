//! Shared page chrome

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::Route;
use crate::ui::auth::UserMenu;
use crate::ui::icon::{Icon, icons};

/// Header with the brand link and the user menu
#[component]
pub fn AppHeader() -> impl IntoView {
    view! {
        <header class="border-b border-theme bg-theme-primary">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href=Route::Home.path() attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                            <Icon name=icons::GALLERY class="w-5 h-5" />
                        </div>
                        <span class="text-xl font-bold text-theme-primary">"Authdeck"</span>
                    </A>
                    <UserMenu />
                </div>
            </div>
        </header>
    }
}
