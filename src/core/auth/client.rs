//! Auth client abstraction
//!
//! The auth service is an external collaborator. Forms talk to it only through
//! the [`AuthClient`] trait so they can be driven by the HTTP client in the
//! browser and by an in-memory client in tests.

use serde::{Deserialize, Serialize};

use super::session::{Session, SessionStore};
use crate::core::view::Route;

/// Error returned by an auth call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    /// The auth service answered with an error payload (bad credentials,
    /// duplicate account, unknown email, ...)
    #[error("{}", .message.as_deref().unwrap_or("auth request rejected"))]
    Domain {
        message: Option<String>,
        code: Option<String>,
    },

    /// The request did not complete (network failure, unreadable response)
    #[error("{0}")]
    Transport(String),
}

impl AuthError {
    pub fn domain(message: impl Into<String>) -> Self {
        AuthError::Domain {
            message: Some(message.into()),
            code: None,
        }
    }

    /// Message to show to the user.
    ///
    /// Domain errors fall back to the form-specific `fallback`, transport
    /// errors to a generic message.
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            AuthError::Domain { message, .. } => message
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(fallback)
                .to_string(),
            AuthError::Transport(message) if !message.is_empty() => message.clone(),
            AuthError::Transport(_) => UNEXPECTED_ERROR.to_string(),
        }
    }
}

/// Shown when a failed request carries no usable message
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Error body sent by the auth service on non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub code: Option<String>,
}

impl From<ErrorBody> for AuthError {
    fn from(body: ErrorBody) -> Self {
        AuthError::Domain {
            message: body.message,
            code: body.code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignInEmail {
    pub email: String,
    pub password: String,
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignInUsername {
    pub username: String,
    pub password: String,
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignUpEmail {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForgetPassword {
    pub email: String,
    #[serde(rename = "redirectTo")]
    pub redirect_to: String,
}

/// Operations offered by the external auth service.
///
/// Every method performs exactly one request. Implementations refresh the
/// [`SessionStore`] after sign-in, sign-up and sign-out.
#[allow(async_fn_in_trait)]
pub trait AuthClient {
    async fn sign_in_email(&self, request: &SignInEmail) -> Result<(), AuthError>;

    async fn sign_in_username(&self, request: &SignInUsername) -> Result<(), AuthError>;

    async fn sign_up_email(&self, request: &SignUpEmail) -> Result<(), AuthError>;

    async fn forget_password(&self, request: &ForgetPassword) -> Result<(), AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    async fn get_session(&self) -> Result<Option<Session>, AuthError>;

    /// Process-wide session owned by this client
    fn session(&self) -> &SessionStore;
}

/// Fetch the current session and publish it to the store
pub async fn refresh_session<C: AuthClient>(client: &C) {
    match client.get_session().await {
        Ok(session) => {
            leptos::logging::log!("Session refreshed (signed in: {})", session.is_some());
            client.session().resolve(session);
        }
        Err(err) => {
            leptos::logging::warn!("Failed to load session: {}", err);
            client.session().resolve(None);
        }
    }
}

/// Sign out, then navigate to the auth page.
///
/// Navigation happens only after the sign-out call has resolved. A failed
/// sign-out is logged and the local session is cleared anyway.
pub async fn sign_out_and_leave<C: AuthClient>(client: &C, navigate: impl FnOnce(Route)) {
    if let Err(err) = client.sign_out().await {
        leptos::logging::warn!("Sign-out failed: {}", err);
        client.session().resolve(None);
    }
    navigate(Route::Auth);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::mock::{Call, MockAuthClient};
    use std::cell::RefCell;

    #[test]
    fn test_domain_error_uses_payload_message() {
        let err = AuthError::domain("Invalid email or password");

        assert_eq!(err.display_message("Login failed"), "Invalid email or password");
    }

    #[test]
    fn test_domain_error_without_message_uses_fallback() {
        let err = AuthError::Domain {
            message: None,
            code: Some("UNKNOWN".to_string()),
        };

        assert_eq!(err.display_message("Signup failed"), "Signup failed");
    }

    #[test]
    fn test_transport_error_message() {
        let err = AuthError::Transport("connection refused".to_string());
        assert_eq!(err.display_message("Login failed"), "connection refused");

        let err = AuthError::Transport(String::new());
        assert_eq!(err.display_message("Login failed"), UNEXPECTED_ERROR);
    }

    #[test]
    fn test_error_body_converts_to_domain_error() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"User already exists","code":"USER_ALREADY_EXISTS"}"#)
                .unwrap();

        assert_eq!(
            AuthError::from(body),
            AuthError::Domain {
                message: Some("User already exists".to_string()),
                code: Some("USER_ALREADY_EXISTS".to_string()),
            }
        );
    }

    #[test]
    fn test_request_wire_names() {
        let sign_in = serde_json::to_value(SignInEmail {
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
            callback_url: "/".to_string(),
        })
        .unwrap();
        assert_eq!(sign_in["callbackURL"], "/");

        let reset = serde_json::to_value(ForgetPassword {
            email: "a@b.com".to_string(),
            redirect_to: "/reset-password".to_string(),
        })
        .unwrap();
        assert_eq!(reset["redirectTo"], "/reset-password");

        let sign_up = serde_json::to_value(SignUpEmail {
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
            name: "Ada".to_string(),
            username: None,
        })
        .unwrap();
        assert!(sign_up.get("username").is_none());
    }

    #[tokio::test]
    async fn test_sign_out_happens_before_navigation() {
        let client = MockAuthClient::new();
        let navigated = RefCell::new(None);

        sign_out_and_leave(&client, |route| {
            assert_eq!(client.calls(), vec![Call::SignOut]);
            *navigated.borrow_mut() = Some(route);
        })
        .await;

        assert_eq!(*navigated.borrow(), Some(Route::Auth));
    }

    #[tokio::test]
    async fn test_failed_sign_out_still_navigates_and_clears_session() {
        let client = MockAuthClient::new().with_session(Some(MockAuthClient::sample_session()));
        client.fail_next(AuthError::Transport("offline".to_string()));
        let mut navigated = None;

        sign_out_and_leave(&client, |route| navigated = Some(route)).await;

        assert_eq!(navigated, Some(Route::Auth));
        assert!(client.session().current().data.is_none());
    }

    #[tokio::test]
    async fn test_refresh_session_publishes_result() {
        let client = MockAuthClient::new().with_remote_session(Some(MockAuthClient::sample_session()));
        assert!(client.session().current().pending);

        refresh_session(&client).await;

        let view = client.session().current();
        assert!(!view.pending);
        assert_eq!(view.data.map(|s| s.user.name), Some("Ada Lovelace".to_string()));
    }

    #[tokio::test]
    async fn test_refresh_session_failure_resolves_to_absent() {
        let client = MockAuthClient::new();
        client.fail_next(AuthError::Transport("offline".to_string()));

        refresh_session(&client).await;

        let view = client.session().current();
        assert!(!view.pending);
        assert!(view.data.is_none());
    }
}
