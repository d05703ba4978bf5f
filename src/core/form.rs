//! Form state with touched tracking and eager validation
//!
//! Validity is recomputed on every value change, but errors are only shown for
//! fields the user has interacted with (blurred, or attempted to submit).

use std::collections::BTreeSet;

use super::validation::{FieldName, FieldValues, FormSchema, ValidationReport, value_of};

/// Why a submit attempt did not start a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    InFlight,

    #[error("the form has invalid fields")]
    Invalid,
}

/// State of one mounted form
#[derive(Debug, Clone)]
pub struct FormState<F: FieldName> {
    schema: &'static FormSchema<F>,
    values: FieldValues<F>,
    touched: BTreeSet<F>,
    report: ValidationReport<F>,
    submitting: bool,
}

impl<F: FieldName> FormState<F> {
    /// Create a form with every declared field empty and untouched
    pub fn new(schema: &'static FormSchema<F>) -> Self {
        let values: FieldValues<F> = schema.fields().map(|f| (f, String::new())).collect();
        let report = schema.validate(&values);
        Self {
            schema,
            values,
            touched: BTreeSet::new(),
            report,
            submitting: false,
        }
    }

    pub fn value(&self, field: F) -> &str {
        value_of(&self.values, field)
    }

    pub fn values(&self) -> &FieldValues<F> {
        &self.values
    }

    /// Update a field value and revalidate the whole form
    ///
    /// The whole form is revalidated because cross-field rules may depend on
    /// the changed value.
    pub fn set_value(&mut self, field: F, value: impl Into<String>) {
        self.values.insert(field, value.into());
        self.report = self.schema.validate(&self.values);
    }

    /// Mark a field as touched (first blur)
    pub fn blur(&mut self, field: F) {
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(self.schema.fields());
    }

    pub fn is_touched(&self, field: F) -> bool {
        self.touched.contains(&field)
    }

    pub fn is_valid(&self, field: F) -> bool {
        !self.report.contains_key(&field)
    }

    /// All current violations of a field, whether shown or not
    pub fn errors(&self, field: F) -> &[&'static str] {
        self.report.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether the field should render as invalid
    pub fn shows_error(&self, field: F) -> bool {
        self.is_touched(field) && !self.is_valid(field)
    }

    /// Errors to display: empty unless the field is touched and invalid
    pub fn visible_errors(&self, field: F) -> Vec<&'static str> {
        if self.shows_error(field) {
            self.errors(field).to_vec()
        } else {
            Vec::new()
        }
    }

    /// True when every declared field passes validation
    pub fn can_submit(&self) -> bool {
        self.report.is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Start a submission.
    ///
    /// Touches every field so that errors become visible. On success the form
    /// is marked as submitting and a snapshot of the values is returned.
    pub fn begin_submit(&mut self) -> Result<FieldValues<F>, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        self.touch_all();
        if !self.can_submit() {
            return Err(SubmitBlocked::Invalid);
        }
        self.submitting = true;
        Ok(self.values.clone())
    }

    /// Mark the in-flight submission as resolved
    pub fn end_submit(&mut self) {
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::{FieldSchema, Rule};
    use std::sync::LazyLock;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Field {
        Title,
        Code,
    }

    impl FieldName for Field {
        fn as_str(self) -> &'static str {
            match self {
                Field::Title => "title",
                Field::Code => "code",
            }
        }
    }

    static SCHEMA: LazyLock<FormSchema<Field>> = LazyLock::new(|| {
        FormSchema::new(vec![
            (
                Field::Title,
                FieldSchema::required(vec![Rule::Required {
                    message: "Title is required",
                }]),
            ),
            (
                Field::Code,
                FieldSchema::required(vec![Rule::MinLength {
                    min: 3,
                    message: "Code too short",
                }]),
            ),
        ])
    });

    #[test]
    fn test_new_form_is_untouched_and_hides_errors() {
        let form = FormState::new(&*SCHEMA);

        assert!(!form.is_touched(Field::Title));
        assert!(!form.is_valid(Field::Title));
        assert!(!form.shows_error(Field::Title));
        assert!(form.visible_errors(Field::Title).is_empty());
        assert!(!form.can_submit());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_blur_reveals_errors_of_invalid_field() {
        let mut form = FormState::new(&*SCHEMA);
        form.blur(Field::Title);

        assert!(form.shows_error(Field::Title));
        assert_eq!(form.visible_errors(Field::Title), vec!["Title is required"]);
        assert!(!form.shows_error(Field::Code));
    }

    #[test]
    fn test_validity_is_recomputed_on_change() {
        let mut form = FormState::new(&*SCHEMA);
        form.blur(Field::Code);
        form.set_value(Field::Code, "ab");
        assert_eq!(form.errors(Field::Code), &["Code too short"]);

        form.set_value(Field::Code, "abc");
        assert!(form.is_valid(Field::Code));
        assert!(!form.shows_error(Field::Code));
    }

    #[test]
    fn test_untouched_valid_field_never_shows_error() {
        let mut form = FormState::new(&*SCHEMA);
        form.set_value(Field::Title, "x");

        assert!(form.is_valid(Field::Title));
        assert!(!form.shows_error(Field::Title));
    }

    #[test]
    fn test_can_submit_requires_all_fields_valid() {
        let mut form = FormState::new(&*SCHEMA);
        form.set_value(Field::Title, "Report");
        assert!(!form.can_submit());

        form.set_value(Field::Code, "R-1");
        assert!(form.can_submit());
    }

    #[test]
    fn test_begin_submit_touches_fields_when_invalid() {
        let mut form = FormState::new(&*SCHEMA);
        form.set_value(Field::Title, "Report");

        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid));
        assert!(form.is_touched(Field::Title));
        assert!(form.shows_error(Field::Code));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_begin_submit_guards_against_double_submission() {
        let mut form = FormState::new(&*SCHEMA);
        form.set_value(Field::Title, "Report");
        form.set_value(Field::Code, "R-1");

        let values = form.begin_submit().unwrap();
        assert_eq!(value_of(&values, Field::Code), "R-1");
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));

        form.end_submit();
        assert!(form.begin_submit().is_ok());
    }
}
