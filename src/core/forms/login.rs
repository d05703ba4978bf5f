//! Login form controller

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::SubmitOutcome;
use crate::core::auth::{AuthClient, AuthError, SignInEmail, SignInUsername};
use crate::core::form::{FormState, SubmitBlocked};
use crate::core::validation::{FieldName, FieldSchema, FormSchema, Rule, value_of};

/// Where the auth service sends the browser after sign-in
pub const SIGN_IN_CALLBACK_URL: &str = "/";

const LOGIN_FAILED: &str = "Login failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoginField {
    EmailOrUsername,
    Email,
    Password,
}

impl FieldName for LoginField {
    fn as_str(self) -> &'static str {
        match self {
            LoginField::EmailOrUsername => "emailOrUsername",
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }
}

/// Which identifiers the login form accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoginMode {
    /// Email address or username; requires the auth service's username support
    #[default]
    EmailOrUsername,
    EmailOnly,
}

fn password_schema() -> FieldSchema {
    FieldSchema::required(vec![Rule::MinLength {
        min: 6,
        message: "Password must be at least 6 characters",
    }])
}

static IDENTIFIER_SCHEMA: LazyLock<FormSchema<LoginField>> = LazyLock::new(|| {
    FormSchema::new(vec![
        (
            LoginField::EmailOrUsername,
            FieldSchema::required(vec![
                Rule::Required {
                    message: "Email or username is required",
                },
                Rule::MinLength {
                    min: 3,
                    message: "Email or username must be at least 3 characters",
                },
            ]),
        ),
        (LoginField::Password, password_schema()),
    ])
});

static EMAIL_SCHEMA: LazyLock<FormSchema<LoginField>> = LazyLock::new(|| {
    FormSchema::new(vec![
        (
            LoginField::Email,
            FieldSchema::required(vec![
                Rule::Required {
                    message: "Email is required",
                },
                Rule::Email {
                    message: "Invalid email address",
                },
            ]),
        ),
        (LoginField::Password, password_schema()),
    ])
});

/// The single sign-in call a login submission dispatches
#[derive(Debug, Clone, PartialEq)]
pub enum LoginRequest {
    Email(SignInEmail),
    Username(SignInUsername),
}

impl LoginRequest {
    pub async fn send<C: AuthClient>(&self, client: &C) -> Result<(), AuthError> {
        match self {
            LoginRequest::Email(request) => client.sign_in_email(request).await,
            LoginRequest::Username(request) => client.sign_in_username(request).await,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginController {
    mode: LoginMode,
    pub form: FormState<LoginField>,
    error: Option<String>,
}

impl LoginController {
    pub fn new(mode: LoginMode) -> Self {
        let schema = match mode {
            LoginMode::EmailOrUsername => &*IDENTIFIER_SCHEMA,
            LoginMode::EmailOnly => &*EMAIL_SCHEMA,
        };
        Self {
            mode,
            form: FormState::new(schema),
            error: None,
        }
    }

    /// Field holding the account identifier in the current mode
    pub fn identifier_field(&self) -> LoginField {
        match self.mode {
            LoginMode::EmailOrUsername => LoginField::EmailOrUsername,
            LoginMode::EmailOnly => LoginField::Email,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_submit(&mut self) -> Result<LoginRequest, SubmitBlocked> {
        let values = self.form.begin_submit()?;
        self.error = None;

        let identifier = value_of(&values, self.identifier_field()).to_string();
        let password = value_of(&values, LoginField::Password).to_string();
        let callback_url = SIGN_IN_CALLBACK_URL.to_string();

        let by_username = self.mode == LoginMode::EmailOrUsername && !identifier.contains('@');
        let request = if by_username {
            LoginRequest::Username(SignInUsername {
                username: identifier,
                password,
                callback_url,
            })
        } else {
            LoginRequest::Email(SignInEmail {
                email: identifier,
                password,
                callback_url,
            })
        };
        leptos::logging::log!("Login submitted (by username: {})", by_username);
        Ok(request)
    }

    pub fn finish_submit(&mut self, result: Result<(), AuthError>) -> SubmitOutcome {
        self.form.end_submit();
        match result {
            Ok(()) => {
                leptos::logging::log!("Login succeeded");
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                leptos::logging::warn!("Login failed: {}", err);
                let message = err.display_message(LOGIN_FAILED);
                self.error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    pub async fn submit<C: AuthClient>(&mut self, client: &C) -> Result<SubmitOutcome, SubmitBlocked> {
        let request = self.begin_submit()?;
        let result = request.send(client).await;
        Ok(self.finish_submit(result))
    }
}
