//! Core client logic: validation, form controllers, auth client and session

pub mod auth;
pub mod config;
pub mod form;
pub mod forms;
pub mod timer;
pub mod validation;
pub mod view;

pub use view::{AuthView, Route};
