//! Signup form controller

use std::sync::LazyLock;

use super::SubmitOutcome;
use crate::core::auth::{AuthClient, AuthError, SignUpEmail};
use crate::core::form::{FormState, SubmitBlocked};
use crate::core::validation::{
    FieldName, FieldSchema, FormSchema, Refinement, Rule, USERNAME_PATTERN, value_of,
};

const SIGNUP_FAILED: &str = "Signup failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignupField {
    Name,
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldName for SignupField {
    fn as_str(self) -> &'static str {
        match self {
            SignupField::Name => "name",
            SignupField::Username => "username",
            SignupField::Email => "email",
            SignupField::Password => "password",
            SignupField::ConfirmPassword => "confirmPassword",
        }
    }
}

static SIGNUP_SCHEMA: LazyLock<FormSchema<SignupField>> = LazyLock::new(|| {
    FormSchema::new(vec![
        (
            SignupField::Name,
            FieldSchema::required(vec![Rule::Required {
                message: "Name is required",
            }]),
        ),
        (
            SignupField::Username,
            FieldSchema::optional(vec![
                Rule::MinLength {
                    min: 3,
                    message: "Username must be at least 3 characters",
                },
                Rule::MaxLength {
                    max: 30,
                    message: "Username must be less than 30 characters",
                },
                Rule::Pattern {
                    pattern: &USERNAME_PATTERN,
                    message: "Username can only contain letters, numbers, underscores, and hyphens",
                },
            ]),
        ),
        (
            SignupField::Email,
            FieldSchema::required(vec![
                Rule::Required {
                    message: "Email is required",
                },
                Rule::Email {
                    message: "Invalid email address",
                },
            ]),
        ),
        (
            SignupField::Password,
            FieldSchema::required(vec![Rule::MinLength {
                min: 6,
                message: "Password must be at least 6 characters",
            }]),
        ),
        (
            SignupField::ConfirmPassword,
            FieldSchema::required(vec![Rule::Required {
                message: "Please confirm your password",
            }]),
        ),
    ])
    .refine(Refinement {
        field: SignupField::ConfirmPassword,
        message: "Passwords don't match",
        check: |values| {
            value_of(values, SignupField::Password) == value_of(values, SignupField::ConfirmPassword)
        },
    })
});

#[derive(Debug, Clone)]
pub struct SignupController {
    pub form: FormState<SignupField>,
    error: Option<String>,
}

impl Default for SignupController {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupController {
    pub fn new() -> Self {
        Self {
            form: FormState::new(&*SIGNUP_SCHEMA),
            error: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_submit(&mut self) -> Result<SignUpEmail, SubmitBlocked> {
        let values = self.form.begin_submit()?;
        self.error = None;

        let username = value_of(&values, SignupField::Username);
        let request = SignUpEmail {
            email: value_of(&values, SignupField::Email).to_string(),
            password: value_of(&values, SignupField::Password).to_string(),
            name: value_of(&values, SignupField::Name).to_string(),
            username: (!username.is_empty()).then(|| username.to_string()),
        };
        leptos::logging::log!("Signup submitted (with username: {})", request.username.is_some());
        Ok(request)
    }

    pub fn finish_submit(&mut self, result: Result<(), AuthError>) -> SubmitOutcome {
        self.form.end_submit();
        match result {
            Ok(()) => {
                leptos::logging::log!("Signup succeeded");
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                leptos::logging::warn!("Signup failed: {}", err);
                let message = err.display_message(SIGNUP_FAILED);
                self.error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    pub async fn submit<C: AuthClient>(&mut self, client: &C) -> Result<SubmitOutcome, SubmitBlocked> {
        let request = self.begin_submit()?;
        let result = client.sign_up_email(&request).await;
        Ok(self.finish_submit(result))
    }
}
