//! Authentication module
//!
//! This module provides the client side of authentication:
//! - The `AuthClient` abstraction over the external auth service
//! - The HTTP implementation used in the browser
//! - The process-wide observable session

pub mod client;
pub mod http;
#[cfg(test)]
pub(crate) mod mock;
pub mod session;

pub use client::{
    AuthClient, AuthError, ForgetPassword, SignInEmail, SignInUsername, SignUpEmail,
    UNEXPECTED_ERROR, refresh_session, sign_out_and_leave,
};
pub use http::HttpAuthClient;
pub use session::{Session, SessionGate, SessionInfo, SessionStore, SessionView, SubscriptionId, User};
