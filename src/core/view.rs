//! Auth page views and application routes

use std::time::Duration;

use derive_more::Display;

/// How long the password-reset confirmation stays visible before redirecting
pub const RESET_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Form shown on the auth page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum AuthView {
    #[default]
    #[display("login")]
    Login,
    #[display("signup")]
    Signup,
    #[display("forgot-password")]
    ForgotPassword,
}

impl AuthView {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "login" => Some(AuthView::Login),
            "signup" => Some(AuthView::Signup),
            "forgot-password" => Some(AuthView::ForgotPassword),
            _ => None,
        }
    }

    /// View selected by the `view` query parameter.
    ///
    /// A missing parameter selects the login form; an unknown value selects
    /// nothing and the auth page renders no form.
    pub fn from_query(value: Option<&str>) -> Option<Self> {
        match value {
            None | Some("") => Some(AuthView::default()),
            Some(value) => Self::parse(value),
        }
    }

    /// Delay between a successful submission and the redirect home
    pub fn success_delay(self) -> Duration {
        match self {
            AuthView::Login | AuthView::Signup => Duration::ZERO,
            AuthView::ForgotPassword => RESET_REDIRECT_DELAY,
        }
    }
}

/// Named application routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Route {
    #[display("/")]
    Home,
    #[display("/auth")]
    Auth,
    #[display("/settings")]
    Settings,
    /// Linked from the user menu; no page is registered for it, so it
    /// renders the not-found page
    #[display("/profile")]
    Profile,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Auth => "/auth",
            Route::Settings => "/settings",
            Route::Profile => "/profile",
        }
    }
}
