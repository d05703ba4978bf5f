//! Authentication UI module
//!
//! Auth forms, the user menu and the context sharing the auth client with
//! them.

mod context;
mod forgot_password_form;
mod login_form;
mod session_gate;
mod signup_form;
mod user_menu;

pub use context::{AuthContext, provide_auth_context, use_auth_context, use_navigate_to, use_session};
pub use forgot_password_form::ForgotPasswordForm;
pub use login_form::LoginForm;
pub use session_gate::RequireSession;
pub use signup_form::SignupForm;
pub use user_menu::{UserAvatar, UserMenu};
