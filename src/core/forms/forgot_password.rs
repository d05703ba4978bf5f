//! Forgot-password form controller
//!
//! Unlike the other forms, success does not leave the form right away: it
//! switches to a confirmation panel and the success callback runs after
//! [`RESET_REDIRECT_DELAY`](crate::core::view::RESET_REDIRECT_DELAY).

use std::sync::LazyLock;

use super::SubmitOutcome;
use crate::core::auth::{AuthClient, AuthError, ForgetPassword};
use crate::core::form::{FormState, SubmitBlocked};
use crate::core::timer::{Timer, run_after};
use crate::core::validation::{FieldName, FieldSchema, FormSchema, Rule, value_of};
use crate::core::view::AuthView;

/// Page the reset link in the email points to
pub const RESET_PASSWORD_REDIRECT: &str = "/reset-password";

const RESET_FAILED: &str = "Failed to send reset email";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ForgotPasswordField {
    Email,
}

impl FieldName for ForgotPasswordField {
    fn as_str(self) -> &'static str {
        match self {
            ForgotPasswordField::Email => "email",
        }
    }
}

static FORGOT_PASSWORD_SCHEMA: LazyLock<FormSchema<ForgotPasswordField>> = LazyLock::new(|| {
    FormSchema::new(vec![(
        ForgotPasswordField::Email,
        FieldSchema::required(vec![
            Rule::Required {
                message: "Email is required",
            },
            Rule::Email {
                message: "Invalid email address",
            },
        ]),
    )])
});

/// `error` and `success` are independent: each submission clears both before
/// the outcome sets one of them.
#[derive(Debug, Clone)]
pub struct ForgotPasswordController {
    pub form: FormState<ForgotPasswordField>,
    error: Option<String>,
    success: bool,
}

impl Default for ForgotPasswordController {
    fn default() -> Self {
        Self::new()
    }
}

impl ForgotPasswordController {
    pub fn new() -> Self {
        Self {
            form: FormState::new(&*FORGOT_PASSWORD_SCHEMA),
            error: None,
            success: false,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the confirmation panel replaces the form
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn begin_submit(&mut self) -> Result<ForgetPassword, SubmitBlocked> {
        let values = self.form.begin_submit()?;
        self.error = None;
        self.success = false;

        Ok(ForgetPassword {
            email: value_of(&values, ForgotPasswordField::Email).to_string(),
            redirect_to: RESET_PASSWORD_REDIRECT.to_string(),
        })
    }

    pub fn finish_submit(&mut self, result: Result<(), AuthError>) -> SubmitOutcome {
        self.form.end_submit();
        match result {
            Ok(()) => {
                leptos::logging::log!("Password reset email sent");
                self.error = None;
                self.success = true;
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                leptos::logging::warn!("Password reset failed: {}", err);
                let message = err.display_message(RESET_FAILED);
                self.error = Some(message.clone());
                self.success = false;
                SubmitOutcome::Failed(message)
            }
        }
    }

    pub async fn submit<C: AuthClient>(&mut self, client: &C) -> Result<SubmitOutcome, SubmitBlocked> {
        let request = self.begin_submit()?;
        let result = client.forget_password(&request).await;
        Ok(self.finish_submit(result))
    }
}

/// Run `on_success` once the confirmation has been shown long enough
pub fn schedule_reset_redirect<T: Timer>(timer: &T, on_success: impl FnOnce() + 'static) {
    run_after(timer, AuthView::ForgotPassword.success_delay(), on_success);
}
