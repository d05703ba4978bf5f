use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon file name (without the .svg extension)
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icon names shipped in `public/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const GALLERY: &str = "gallery-vertical-end";
    pub const LOGOUT: &str = "logout";
    pub const MAIL: &str = "mail";
    pub const SETTINGS: &str = "settings";
    pub const USER: &str = "user";
}
