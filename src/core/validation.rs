//! Declarative form validation
//!
//! A [`Schema`] is an ordered list of fields, each with an ordered list of
//! [`Rule`]s, plus optional cross-field refinements. Validation reports at most
//! one message per field: the first rule that fails. Refinements always run,
//! but never replace a message a field rule already reported.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Shape of an email address: local part, `@`, dotted domain, alphabetic TLD.
/// Leading dots and `..` sequences are rejected separately in [`is_valid_email`].
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Check whether a string is a well-formed email address
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

/// Field keys, as they appear in request payloads and error maps
pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const PASSWORD_CONFIRMATION: &str = "passwordConfirmation";
}

/// Access to a form's raw string values by field key
pub trait FormValues {
    /// Value of the given field, or `""` if the form has no such field
    fn field(&self, name: &str) -> &str;
}

/// A single check on one string field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must not be empty
    Required(&'static str),
    /// Value must be a well-formed email address
    Email(&'static str),
    /// Value must have at least this many characters
    MinLength(usize, &'static str),
}

impl Rule {
    /// Returns the rule's message if `value` violates it
    pub fn check(&self, value: &str) -> Option<&'static str> {
        let passed = match self {
            Rule::Required(_) => !value.is_empty(),
            Rule::Email(_) => is_valid_email(value),
            Rule::MinLength(min, _) => value.chars().count() >= *min,
        };
        if passed { None } else { Some(self.message()) }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required(message) | Rule::Email(message) | Rule::MinLength(_, message) => {
                *message
            }
        }
    }
}

/// Cross-field check whose failure is reported on `field`
struct Refinement<T> {
    predicate: fn(&T) -> bool,
    field: &'static str,
    message: &'static str,
}

/// Per-field validation errors, one message per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field` unless it already has one
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Owned copy of a field's message, for reactive views
    pub fn message(&self, field: &str) -> Option<String> {
        self.get(field).map(str::to_owned)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Declarative validation schema over a form type
pub struct Schema<T> {
    fields: Vec<(&'static str, Vec<Rule>)>,
    refinements: Vec<Refinement<T>>,
}

impl<T: FormValues> Default for Schema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FormValues> Schema<T> {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            refinements: Vec::new(),
        }
    }

    /// Declare a field and its rules, checked in the given order
    pub fn field(mut self, name: &'static str, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push((name, rules.into_iter().collect()));
        self
    }

    /// Add a cross-field check reported on `field` when `predicate` is false
    pub fn refine(
        mut self,
        predicate: fn(&T) -> bool,
        field: &'static str,
        message: &'static str,
    ) -> Self {
        self.refinements.push(Refinement {
            predicate,
            field,
            message,
        });
        self
    }

    /// Validate `values`, returning every field error found
    pub fn validate(&self, values: &T) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        for (name, rules) in &self.fields {
            let value = values.field(name);
            if let Some(message) = rules.iter().find_map(|rule| rule.check(value)) {
                errors.insert(*name, message);
            }
        }

        for refinement in &self.refinements {
            if !(refinement.predicate)(values) {
                errors.insert(refinement.field, refinement.message);
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Credentials submitted by the login form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl FormValues for LoginCredentials {
    fn field(&self, name: &str) -> &str {
        match name {
            fields::EMAIL => &self.email,
            fields::PASSWORD => &self.password,
            _ => "",
        }
    }
}

/// Input submitted by the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl FormValues for RegistrationInput {
    fn field(&self, name: &str) -> &str {
        match name {
            fields::NAME => &self.name,
            fields::EMAIL => &self.email,
            fields::PASSWORD => &self.password,
            fields::PASSWORD_CONFIRMATION => &self.password_confirmation,
            _ => "",
        }
    }
}

/// Schema for the login form: both fields present
pub static LOGIN_SCHEMA: LazyLock<Schema<LoginCredentials>> = LazyLock::new(|| {
    Schema::new()
        .field(fields::EMAIL, [Rule::Required("Email is required")])
        .field(fields::PASSWORD, [Rule::Required("Password is required")])
});

/// Schema for the registration form
pub static REGISTRATION_SCHEMA: LazyLock<Schema<RegistrationInput>> = LazyLock::new(|| {
    Schema::<RegistrationInput>::new()
        .field(fields::NAME, [Rule::Required("Name is required")])
        .field(
            fields::EMAIL,
            [
                Rule::Email("Not a valid email"),
                Rule::Required("Email is required"),
            ],
        )
        .field(
            fields::PASSWORD,
            [
                Rule::MinLength(
                    MIN_PASSWORD_LENGTH,
                    "Password too short - should be 6 chars minimum",
                ),
                Rule::Required("Password is required"),
            ],
        )
        .field(
            fields::PASSWORD_CONFIRMATION,
            [Rule::Required("passwordConfirmation is required")],
        )
        .refine(
            |input: &RegistrationInput| input.password == input.password_confirmation,
            fields::PASSWORD_CONFIRMATION,
            "Passwords do not match",
        )
});

impl LoginCredentials {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        LOGIN_SCHEMA.validate(self)
    }
}

impl RegistrationInput {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        REGISTRATION_SCHEMA.validate(self)
    }
}
