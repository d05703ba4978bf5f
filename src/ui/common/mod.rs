//! Common reusable UI components
//!
//! Building blocks shared by the auth forms and pages.

pub mod form;
pub mod message;
pub mod spinner;

pub use form::{FieldBinding, FormField, bind_field};
pub use message::ErrorBanner;
pub use spinner::{InlineSpinner, LoadingSpinner, Spinner, SpinnerSize};
