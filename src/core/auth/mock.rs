//! In-memory auth client for tests

use std::cell::RefCell;
use std::collections::VecDeque;

use chrono::{TimeZone, Utc};

use super::client::{
    AuthClient, AuthError, ForgetPassword, SignInEmail, SignInUsername, SignUpEmail,
};
use super::session::{Session, SessionInfo, SessionStore, User};

/// A recorded call to the auth service
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SignInEmail(SignInEmail),
    SignInUsername(SignInUsername),
    SignUpEmail(SignUpEmail),
    ForgetPassword(ForgetPassword),
    SignOut,
    GetSession,
}

/// Records calls and answers with queued failures, succeeding otherwise
#[derive(Default)]
pub struct MockAuthClient {
    calls: RefCell<Vec<Call>>,
    failures: RefCell<VecDeque<AuthError>>,
    remote_session: Option<Session>,
    store: SessionStore,
}

impl MockAuthClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session already published to the local store
    pub fn with_session(self, session: Option<Session>) -> Self {
        self.store.resolve(session);
        self
    }

    /// Session returned by `get_session` and published after sign-in
    pub fn with_remote_session(mut self, session: Option<Session>) -> Self {
        self.remote_session = session;
        self
    }

    /// Make the next call fail with `error`
    pub fn fail_next(&self, error: AuthError) {
        self.failures.borrow_mut().push_back(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn sample_session() -> Session {
        Session {
            user: User {
                id: "user-1".to_string(),
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                username: Some("ada".to_string()),
                email_verified: true,
                image: None,
                created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
            },
            session: SessionInfo {
                id: "session-1".to_string(),
                expires_at: Utc.with_ymd_and_hms(2024, 1, 22, 9, 30, 0).unwrap(),
            },
        }
    }

    fn record(&self, call: Call) -> Result<(), AuthError> {
        self.calls.borrow_mut().push(call);
        match self.failures.borrow_mut().pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl AuthClient for MockAuthClient {
    async fn sign_in_email(&self, request: &SignInEmail) -> Result<(), AuthError> {
        self.record(Call::SignInEmail(request.clone()))?;
        self.store.resolve(self.remote_session.clone());
        Ok(())
    }

    async fn sign_in_username(&self, request: &SignInUsername) -> Result<(), AuthError> {
        self.record(Call::SignInUsername(request.clone()))?;
        self.store.resolve(self.remote_session.clone());
        Ok(())
    }

    async fn sign_up_email(&self, request: &SignUpEmail) -> Result<(), AuthError> {
        self.record(Call::SignUpEmail(request.clone()))?;
        self.store.resolve(self.remote_session.clone());
        Ok(())
    }

    async fn forget_password(&self, request: &ForgetPassword) -> Result<(), AuthError> {
        self.record(Call::ForgetPassword(request.clone()))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.record(Call::SignOut)?;
        self.store.resolve(None);
        Ok(())
    }

    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        self.record(Call::GetSession)?;
        Ok(self.remote_session.clone())
    }

    fn session(&self) -> &SessionStore {
        &self.store
    }
}
