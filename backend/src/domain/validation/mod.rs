//! Property validation with error aggregation.
//!
//! Entities describe their rules per property and run them against a
//! snapshot of their properties before construction and before every
//! mutation. Every violated rule on every property is collected into a
//! [`FieldsError`] instead of stopping at the first failure.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

mod rules;

pub use rules::{HasLen, MaxLength, MinLength, NotEmpty, Required, Rule};

/// Property name mapped to its violation messages, in rule order.
///
/// Serialises as a JSON object, e.g. `{"name": ["name should not be empty"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldsError(BTreeMap<String, Vec<String>>);

impl FieldsError {
    /// Empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map holding a single message for `field`.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Append a message for `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Merge another map, appending messages per field.
    pub fn merge(&mut self, other: Self) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// Messages recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Whether any message was recorded for `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Whether no violations were recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names of the fields with violations, in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over fields and their messages.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }
}

impl fmt::Display for FieldsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{field}: {}", messages.join(", "))?;
        }
        Ok(())
    }
}

/// Accumulates violations across fields.
///
/// # Examples
///
/// ```
/// use catalog::domain::validation::{MaxLength, Required, Validator};
///
/// let mut validator = Validator::new();
/// validator.field("name", "").rule(&Required).rule(&MaxLength(3));
/// validator.field("code", "toolong").rule(&MaxLength(3));
///
/// assert!(!validator.is_valid());
/// let errors = validator.finish().unwrap_err();
/// assert_eq!(errors.fields().collect::<Vec<_>>(), ["code", "name"]);
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldsError,
}

impl Validator {
    /// Validator with no recorded violations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start checking rules against one property value.
    pub fn field<'v, T: ?Sized>(
        &'v mut self,
        name: &'static str,
        value: &'v T,
    ) -> FieldCheck<'v, T> {
        FieldCheck {
            errors: &mut self.errors,
            name,
            value,
        }
    }

    /// Whether every rule checked so far passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Violations recorded so far.
    pub fn errors(&self) -> &FieldsError {
        &self.errors
    }

    /// Finish validation.
    ///
    /// # Errors
    ///
    /// Returns every recorded violation when at least one rule failed.
    pub fn finish(self) -> Result<(), FieldsError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Rule chain bound to a single property.
pub struct FieldCheck<'v, T: ?Sized> {
    errors: &'v mut FieldsError,
    name: &'static str,
    value: &'v T,
}

impl<T: ?Sized> FieldCheck<'_, T> {
    /// Check one rule, recording its message on failure and continuing.
    pub fn rule(self, rule: &impl Rule<T>) -> Self {
        if let Some(message) = rule.check(self.name, self.value) {
            self.errors.add(self.name, message);
        }
        self
    }
}

/// Declarative rule-set for a property snapshot.
pub trait PropsValidator<P: ?Sized> {
    /// Register every property rule against `props`.
    fn rules(validator: &mut Validator, props: &P);

    /// Run all rules and collect every violation.
    ///
    /// # Errors
    ///
    /// Returns the aggregated [`FieldsError`] when any rule fails.
    fn validate(props: &P) -> Result<(), FieldsError> {
        let mut validator = Validator::new();
        Self::rules(&mut validator, props);
        validator.finish()
    }
}
