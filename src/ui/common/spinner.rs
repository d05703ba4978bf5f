use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner-sm",
            SpinnerSize::Medium => "spinner-md",
            SpinnerSize::Large => "spinner-lg",
        }
    }
}

/// Loading spinner component
#[component]
pub fn Spinner(
    /// Spinner size
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    /// Optional label text
    #[prop(default = "")]
    label: &'static str,
) -> impl IntoView {
    let classes = format!("spinner spinner-circle {} {}", size.class(), class);

    view! {
        <div class="spinner-container">
            <div class=classes role="status" aria-live="polite">
                <div class="spinner-circle-inner"></div>
                <span class="sr-only">"Loading..."</span>
            </div>
            {(!label.is_empty()).then(|| view! {
                <div class="spinner-label">{label}</div>
            })}
        </div>
    }
}

/// Centered spinner used while the session loads
#[component]
pub fn LoadingSpinner(
    /// Optional loading message
    #[prop(default = "")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <Spinner size=SpinnerSize::Large label=message />
        </div>
    }
}

/// Inline spinner for buttons
#[component]
pub fn InlineSpinner() -> impl IntoView {
    view! { <Spinner size=SpinnerSize::Small class="spinner-inline" /> }
}
