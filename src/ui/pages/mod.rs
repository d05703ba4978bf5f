//! Application pages module
//!
//! - Auth page (login / signup / forgot password)
//! - Dashboard (home)
//! - Settings
//! - Not found

mod auth;
mod dashboard;
mod layout;
mod not_found;
mod settings;

pub use auth::AuthPage;
pub use dashboard::DashboardPage;
pub use not_found::NotFoundPage;
pub use settings::SettingsPage;
