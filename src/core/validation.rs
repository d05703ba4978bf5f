//! Declarative validation rules for form fields
//!
//! A [`FormSchema`] maps every field of a form to a list of [`Rule`]s and may
//! carry cross-field [`Refinement`]s. Validating a set of values produces, for
//! each field, the list of messages of the rules it violates.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::LazyLock;

use regex::Regex;

/// Username alphabet: letters, digits, underscores and hyphens
pub static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid username regex"));

/// Local part and domain shape of an email address.
/// Leading dots and consecutive dots are rejected separately in [`is_valid_email`].
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("valid email regex")
});

/// Check whether a string is a well-formed email address
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

/// Identifies the fields of one form.
///
/// Implemented by a small `Copy` enum per form so that field state can be
/// stored in ordered maps and looked up without string keys.
pub trait FieldName: Copy + Ord + Debug + Send + Sync + 'static {
    /// HTML name/id of the field
    fn as_str(self) -> &'static str;
}

/// Current values of all fields of a form
pub type FieldValues<F> = BTreeMap<F, String>;

/// Read a field value, treating a missing entry as the empty string
pub fn value_of<F: FieldName>(values: &FieldValues<F>, field: F) -> &str {
    values.get(&field).map(String::as_str).unwrap_or_default()
}

/// A single-field validation rule
#[derive(Debug, Clone)]
pub enum Rule {
    /// Value must not be empty
    Required { message: &'static str },
    /// Value must have at least `min` characters
    MinLength { min: usize, message: &'static str },
    /// Value must have at most `max` characters
    MaxLength { max: usize, message: &'static str },
    /// Value must match the pattern
    Pattern {
        pattern: &'static LazyLock<Regex>,
        message: &'static str,
    },
    /// Value must be a well-formed email address
    Email { message: &'static str },
}

impl Rule {
    /// Check whether a value satisfies the rule
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Rule::Required { .. } => !value.is_empty(),
            Rule::MinLength { min, .. } => value.chars().count() >= *min,
            Rule::MaxLength { max, .. } => value.chars().count() <= *max,
            Rule::Pattern { pattern, .. } => pattern.is_match(value),
            Rule::Email { .. } => is_valid_email(value),
        }
    }

    /// Message reported when the rule is violated
    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required { message }
            | Rule::MinLength { message, .. }
            | Rule::MaxLength { message, .. }
            | Rule::Pattern { message, .. }
            | Rule::Email { message } => message,
        }
    }
}

/// Rules attached to one field
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub rules: Vec<Rule>,
    /// An optional field accepts the empty string and only checks its rules
    /// once a value has been entered
    pub optional: bool,
}

impl FieldSchema {
    pub fn required(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            optional: false,
        }
    }

    pub fn optional(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            optional: true,
        }
    }

    /// Messages of every violated rule, in declaration order
    pub fn violations(&self, value: &str) -> Vec<&'static str> {
        if self.optional && value.is_empty() {
            return Vec::new();
        }
        self.rules
            .iter()
            .filter(|rule| !rule.accepts(value))
            .map(Rule::message)
            .collect()
    }
}

/// A rule evaluated against the whole form, reported on a single field
#[derive(Debug, Clone)]
pub struct Refinement<F: FieldName> {
    /// Field the message is attached to
    pub field: F,
    pub message: &'static str,
    pub check: fn(&FieldValues<F>) -> bool,
}

/// Validation errors keyed by field. Fields without violations are absent.
pub type ValidationReport<F> = BTreeMap<F, Vec<&'static str>>;

/// Declarative schema for a whole form
#[derive(Debug, Clone)]
pub struct FormSchema<F: FieldName> {
    fields: Vec<(F, FieldSchema)>,
    refinements: Vec<Refinement<F>>,
}

impl<F: FieldName> FormSchema<F> {
    pub fn new(fields: Vec<(F, FieldSchema)>) -> Self {
        Self {
            fields,
            refinements: Vec::new(),
        }
    }

    /// Add a cross-field rule
    pub fn refine(mut self, refinement: Refinement<F>) -> Self {
        self.refinements.push(refinement);
        self
    }

    /// Declared fields, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.fields.iter().map(|(field, _)| *field)
    }

    /// Validate all values against the schema
    pub fn validate(&self, values: &FieldValues<F>) -> ValidationReport<F> {
        let mut report = ValidationReport::new();

        for (field, schema) in &self.fields {
            let violations = schema.violations(value_of(values, *field));
            if !violations.is_empty() {
                report.insert(*field, violations);
            }
        }

        for refinement in &self.refinements {
            if !(refinement.check)(values) {
                report
                    .entry(refinement.field)
                    .or_default()
                    .push(refinement.message);
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Field {
        Name,
        Nickname,
        Secret,
        Repeat,
    }

    impl FieldName for Field {
        fn as_str(self) -> &'static str {
            match self {
                Field::Name => "name",
                Field::Nickname => "nickname",
                Field::Secret => "secret",
                Field::Repeat => "repeat",
            }
        }
    }

    fn schema() -> FormSchema<Field> {
        FormSchema::new(vec![
            (
                Field::Name,
                FieldSchema::required(vec![Rule::Required {
                    message: "Name is required",
                }]),
            ),
            (
                Field::Nickname,
                FieldSchema::optional(vec![
                    Rule::MinLength {
                        min: 3,
                        message: "too short",
                    },
                    Rule::Pattern {
                        pattern: &USERNAME_PATTERN,
                        message: "bad characters",
                    },
                ]),
            ),
            (
                Field::Secret,
                FieldSchema::required(vec![Rule::MinLength {
                    min: 6,
                    message: "short secret",
                }]),
            ),
            (Field::Repeat, FieldSchema::required(vec![])),
        ])
        .refine(Refinement {
            field: Field::Repeat,
            message: "mismatch",
            check: |values| value_of(values, Field::Secret) == value_of(values, Field::Repeat),
        })
    }

    fn values(pairs: &[(Field, &str)]) -> FieldValues<Field> {
        pairs.iter().map(|(f, v)| (*f, v.to_string())).collect()
    }

    #[test]
    fn test_valid_values_produce_empty_report() {
        let report = schema().validate(&values(&[
            (Field::Name, "Ada"),
            (Field::Nickname, "ada_l"),
            (Field::Secret, "hunter22"),
            (Field::Repeat, "hunter22"),
        ]));

        assert!(report.is_empty());
    }

    #[test]
    fn test_missing_values_are_treated_as_empty() {
        let report = schema().validate(&FieldValues::new());

        assert_eq!(report.get(&Field::Name), Some(&vec!["Name is required"]));
        assert_eq!(report.get(&Field::Secret), Some(&vec!["short secret"]));
        assert!(!report.contains_key(&Field::Nickname));
        assert!(!report.contains_key(&Field::Repeat));
    }

    #[test]
    fn test_optional_field_checks_rules_once_filled() {
        let report = schema().validate(&values(&[(Field::Nickname, "a!")]));

        assert_eq!(
            report.get(&Field::Nickname),
            Some(&vec!["too short", "bad characters"])
        );
    }

    #[test]
    fn test_refinement_attaches_to_target_field() {
        let report = schema().validate(&values(&[
            (Field::Name, "Ada"),
            (Field::Secret, "secret1"),
            (Field::Repeat, "secret2"),
        ]));

        assert_eq!(report.get(&Field::Repeat), Some(&vec!["mismatch"]));
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let rule = Rule::MaxLength {
            max: 3,
            message: "long",
        };

        assert!(rule.accepts("äöü"));
        assert!(!rule.accepts("äöüß"));
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("bob"));
        assert!(!is_valid_email("bob@localhost"));
        assert!(!is_valid_email(".bob@example.com"));
        assert!(!is_valid_email("bob..smith@example.com"));
        assert!(!is_valid_email("bob.@example.com"));
        assert!(!is_valid_email("bob@example.c"));
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let fields: Vec<Field> = schema().fields().collect();

        assert_eq!(
            fields,
            vec![Field::Name, Field::Nickname, Field::Secret, Field::Repeat]
        );
    }
}
