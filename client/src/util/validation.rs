//! Declarative validation rules for the auth form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser runs these rules on every edit and before every submit; the
//! host re-runs the same schema before forwarding a payload upstream, so an
//! invalid form never reaches the identity backend.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use email_address::{EmailAddress, Options};

use crate::state::fields::{Field, FieldSet, FormMode};

/// Minimum password length accepted in either mode.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Raised when a form is requested for a mode name that does not exist.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown form mode: {0:?}")]
    UnknownMode(String),
}

/// A single constraint on a field value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty after trimming.
    Required,
    /// RFC 5322 address with a top-level domain and no surrounding whitespace.
    Email,
    /// At least this many characters.
    MinLength(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationErrorKind {
    Required,
    InvalidEmail,
    TooShort { min: usize },
}

/// Inline error for one field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe(.field, .kind))]
pub struct ValidationError {
    pub field: Field,
    pub kind: ValidationErrorKind,
}

fn describe(field: &Field, kind: &ValidationErrorKind) -> String {
    match kind {
        ValidationErrorKind::Required => format!("{} is required", field.label()),
        ValidationErrorKind::InvalidEmail => "Invalid email address".to_owned(),
        ValidationErrorKind::TooShort { min } => format!("{} must be at least {min} characters", field.label()),
    }
}

/// Field errors keyed in form order.
pub type FieldErrors = BTreeMap<Field, ValidationError>;

/// Per-field rules for one form mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationSchema {
    mode: FormMode,
    entries: Vec<(Field, Vec<Rule>)>,
}

impl ValidationSchema {
    #[must_use]
    pub fn for_mode(mode: FormMode) -> Self {
        let entries = mode
            .fields()
            .iter()
            .map(|&field| (field, rules_for(field)))
            .collect();
        Self { mode, entries }
    }

    /// Build a schema from a route-level mode name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownMode`] for anything other than
    /// `"sign-in"` or `"sign-up"`.
    pub fn parse(mode: &str) -> Result<Self, ConfigError> {
        Ok(Self::for_mode(mode.parse()?))
    }

    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Fields covered by this schema, in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries.iter().map(|(field, _)| *field)
    }

    /// Rules attached to `field`; empty when the field is not in this mode.
    #[must_use]
    pub fn rules(&self, field: Field) -> &[Rule] {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    /// Fields carrying a `Required` rule.
    pub fn required_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries
            .iter()
            .filter(|(_, rules)| rules.contains(&Rule::Required))
            .map(|(field, _)| *field)
    }

    /// Check one value against its field's rules. The first failing rule wins.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first rule `value` breaks.
    pub fn validate_field(&self, field: Field, value: &str) -> Result<(), ValidationError> {
        for rule in self.rules(field) {
            if let Some(kind) = check(*rule, value) {
                return Err(ValidationError { field, kind });
            }
        }
        Ok(())
    }

    /// Run the whole schema over `fields`.
    ///
    /// # Errors
    ///
    /// Returns every failing field; an empty map is never returned as an error.
    pub fn validate(&self, fields: &FieldSet) -> Result<(), FieldErrors> {
        let errors: FieldErrors = self
            .fields()
            .filter_map(|field| {
                let value = fields.get(field).unwrap_or_default();
                self.validate_field(field, value).err().map(|e| (field, e))
            })
            .collect();
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn rules_for(field: Field) -> Vec<Rule> {
    match field {
        Field::Email => vec![Rule::Required, Rule::Email],
        Field::Password => vec![Rule::Required, Rule::MinLength(PASSWORD_MIN_LEN)],
        _ => vec![Rule::Required],
    }
}

fn check(rule: Rule, value: &str) -> Option<ValidationErrorKind> {
    match rule {
        Rule::Required if value.trim().is_empty() => Some(ValidationErrorKind::Required),
        Rule::Email if !is_valid_email(value) => Some(ValidationErrorKind::InvalidEmail),
        Rule::MinLength(min) if value.chars().count() < min => Some(ValidationErrorKind::TooShort { min }),
        _ => None,
    }
}

/// Address check used by [`Rule::Email`].
///
/// The value is checked exactly as it will be sent, so padded input fails.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let options = Options::default()
        .with_required_tld()
        .without_display_text()
        .without_domain_literal();
    value.trim() == value && EmailAddress::parse_with_options(value, options).is_ok()
}
