//! Auth form controllers
//!
//! Each controller owns a [`FormState`](crate::core::form::FormState) built
//! from a static schema and the banner state of its form. Submission is split
//! in two steps so the UI can release its borrow of the controller while the
//! request is in flight:
//!
//! 1. `begin_submit` validates, guards against double submission and returns
//!    the request to send;
//! 2. `finish_submit` maps the auth client's answer to UI state.
//!
//! `submit` chains both steps for callers that can hold the controller across
//! the await.

use super::form::FormState;
use super::validation::FieldName;

mod forgot_password;
mod login;
mod signup;

pub use forgot_password::{
    ForgotPasswordController, ForgotPasswordField, RESET_PASSWORD_REDIRECT, schedule_reset_redirect,
};
pub use login::{LoginController, LoginField, LoginMode, LoginRequest, SIGN_IN_CALLBACK_URL};
pub use signup::{SignupController, SignupField};

/// Result of a completed submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    /// The message now shown in the form's error banner
    Failed(String),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded)
    }
}

/// Field access shared by every auth form controller
pub trait FormController {
    type Field: FieldName;

    fn form(&self) -> &FormState<Self::Field>;

    fn form_mut(&mut self) -> &mut FormState<Self::Field>;
}

macro_rules! impl_form_controller {
    ($controller:ty, $field:ty) => {
        impl FormController for $controller {
            type Field = $field;

            fn form(&self) -> &FormState<$field> {
                &self.form
            }

            fn form_mut(&mut self) -> &mut FormState<$field> {
                &mut self.form
            }
        }
    };
}

impl_form_controller!(LoginController, LoginField);
impl_form_controller!(SignupController, SignupField);
impl_form_controller!(ForgotPasswordController, ForgotPasswordField);
