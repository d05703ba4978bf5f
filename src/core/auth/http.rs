//! HTTP implementation of [`AuthClient`]
//!
//! Speaks the JSON API of the external auth service mounted under
//! `{base_url}/api/auth`. The session cookie is managed by the browser, so every
//! request is sent with credentials.

use super::client::{
    AuthClient, AuthError, ForgetPassword, SignInEmail, SignInUsername, SignUpEmail,
};
use super::session::{Session, SessionStore};

/// Path prefix of the auth service API
pub const AUTH_API_PREFIX: &str = "/api/auth";

/// Browser auth client
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    base_url: String,
    store: SessionStore,
}

impl HttpAuthClient {
    /// `base_url` may be empty to target the page's own origin
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store: SessionStore::new(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, AUTH_API_PREFIX, path)
    }
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, Response};
    use serde::Serialize;
    use web_sys::RequestCredentials;

    use super::super::client::{AuthError, ErrorBody};

    fn transport_error(err: gloo_net::Error) -> AuthError {
        AuthError::Transport(err.to_string())
    }

    async fn into_result(response: Response) -> Result<Response, AuthError> {
        if response.ok() {
            return Ok(response);
        }
        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        Err(AuthError::Domain {
            message: body.message.or_else(|| Some(response.status_text())),
            code: body.code,
        })
    }

    pub async fn post<B: Serialize>(url: &str, body: &B) -> Result<Response, AuthError> {
        let response = Request::post(url)
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        into_result(response).await
    }

    pub async fn post_empty(url: &str) -> Result<Response, AuthError> {
        let response = Request::post(url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(transport_error)?;
        into_result(response).await
    }

    pub async fn get(url: &str) -> Result<Response, AuthError> {
        let response = Request::get(url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(transport_error)?;
        into_result(response).await
    }

    pub async fn json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, AuthError> {
        response.json::<T>().await.map_err(transport_error)
    }
}

#[cfg(feature = "hydrate")]
impl AuthClient for HttpAuthClient {
    async fn sign_in_email(&self, request: &SignInEmail) -> Result<(), AuthError> {
        transport::post(&self.endpoint("/sign-in/email"), request).await?;
        super::client::refresh_session(self).await;
        Ok(())
    }

    async fn sign_in_username(&self, request: &SignInUsername) -> Result<(), AuthError> {
        transport::post(&self.endpoint("/sign-in/username"), request).await?;
        super::client::refresh_session(self).await;
        Ok(())
    }

    async fn sign_up_email(&self, request: &SignUpEmail) -> Result<(), AuthError> {
        transport::post(&self.endpoint("/sign-up/email"), request).await?;
        super::client::refresh_session(self).await;
        Ok(())
    }

    async fn forget_password(&self, request: &ForgetPassword) -> Result<(), AuthError> {
        transport::post(&self.endpoint("/forget-password"), request).await?;
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        transport::post_empty(&self.endpoint("/sign-out")).await?;
        self.store.resolve(None);
        Ok(())
    }

    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        let response = transport::get(&self.endpoint("/get-session")).await?;
        transport::json::<Option<Session>>(response).await
    }

    fn session(&self) -> &SessionStore {
        &self.store
    }
}

/// Forms are never submitted during server rendering; every call fails.
#[cfg(not(feature = "hydrate"))]
impl AuthClient for HttpAuthClient {
    async fn sign_in_email(&self, _request: &SignInEmail) -> Result<(), AuthError> {
        Err(unavailable())
    }

    async fn sign_in_username(&self, _request: &SignInUsername) -> Result<(), AuthError> {
        Err(unavailable())
    }

    async fn sign_up_email(&self, _request: &SignUpEmail) -> Result<(), AuthError> {
        Err(unavailable())
    }

    async fn forget_password(&self, _request: &ForgetPassword) -> Result<(), AuthError> {
        Err(unavailable())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Err(unavailable())
    }

    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        Err(unavailable())
    }

    fn session(&self) -> &SessionStore {
        &self.store
    }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> AuthError {
    AuthError::Transport("Auth client not available on server".to_string())
}
