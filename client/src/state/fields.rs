//! Form modes and the typed field sets each mode collects.
//!
//! DESIGN
//! ======
//! Sign-in and sign-up share one page, but their inputs are modeled as a
//! tagged `FieldSet` so a sign-up-only field can never be carried by a
//! sign-in form (or vice versa).

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::util::validation::ConfigError;

/// Which flavor of the auth form is mounted. Fixed for the life of a form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormMode {
    SignIn,
    SignUp,
}

const SIGN_IN_FIELDS: &[Field] = &[Field::Email, Field::Password];

const SIGN_UP_FIELDS: &[Field] = &[
    Field::FirstName,
    Field::LastName,
    Field::Address1,
    Field::City,
    Field::State,
    Field::PostalCode,
    Field::DateOfBirth,
    Field::Ssn,
    Field::Email,
    Field::Password,
];

impl FormMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SignIn => "sign-in",
            Self::SignUp => "sign-up",
        }
    }

    /// Route path that mounts this mode.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::SignIn => "/sign-in",
            Self::SignUp => "/sign-up",
        }
    }

    /// The mode the footer link switches to.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    /// Fields collected by this mode, in render order.
    #[must_use]
    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::SignIn => SIGN_IN_FIELDS,
            Self::SignUp => SIGN_UP_FIELDS,
        }
    }
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sign-in" => Ok(Self::SignIn),
            "sign-up" => Ok(Self::SignUp),
            other => Err(ConfigError::UnknownMode(other.to_owned())),
        }
    }
}

/// Every input the auth form can render. Ordering follows sign-up form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Address1,
    City,
    State,
    PostalCode,
    DateOfBirth,
    Ssn,
    Email,
    Password,
}

impl Field {
    /// Wire/input name (camelCase, matching the JSON payloads).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Address1 => "address1",
            Self::City => "city",
            Self::State => "state",
            Self::PostalCode => "postalCode",
            Self::DateOfBirth => "dateOfBirth",
            Self::Ssn => "ssn",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Address1 => "Address",
            Self::City => "City",
            Self::State => "State",
            Self::PostalCode => "Postal Code",
            Self::DateOfBirth => "Date of Birth",
            Self::Ssn => "SSN",
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::FirstName => "Enter your first name",
            Self::LastName => "Enter your last name",
            Self::Address1 => "Enter your specific address",
            Self::City => "Example: Chennai",
            Self::State => "Example: TN",
            Self::PostalCode => "Example: 600001",
            Self::DateOfBirth => "YYYY-MM-DD",
            Self::Ssn => "Example: 1234",
            Self::Email => "Enter your email",
            Self::Password => "Enter your password",
        }
    }

    /// HTML `type` attribute for the input element.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            _ => "text",
        }
    }
}

/// Sign-in payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Sign-up payload: the ten values the identity backend needs to open an account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpFields {
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub date_of_birth: String,
    pub ssn: String,
    pub email: String,
    pub password: String,
}

impl SignUpFields {
    fn slot(&self, field: Field) -> &String {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Address1 => &self.address1,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::PostalCode => &self.postal_code,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Ssn => &self.ssn,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Address1 => &mut self.address1,
            Field::City => &mut self.city,
            Field::State => &mut self.state,
            Field::PostalCode => &mut self.postal_code,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::Ssn => &mut self.ssn,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }
}

/// Values currently held by one form instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldSet {
    SignIn(Credentials),
    SignUp(SignUpFields),
}

impl FieldSet {
    /// All-empty field set for `mode`.
    #[must_use]
    pub fn empty(mode: FormMode) -> Self {
        match mode {
            FormMode::SignIn => Self::SignIn(Credentials::default()),
            FormMode::SignUp => Self::SignUp(SignUpFields::default()),
        }
    }

    #[must_use]
    pub fn mode(&self) -> FormMode {
        match self {
            Self::SignIn(_) => FormMode::SignIn,
            Self::SignUp(_) => FormMode::SignUp,
        }
    }

    /// Value of `field`, or `None` when the field is not part of this shape.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        match self {
            Self::SignIn(creds) => match field {
                Field::Email => Some(&creds.email),
                Field::Password => Some(&creds.password),
                _ => None,
            },
            Self::SignUp(fields) => Some(fields.slot(field)),
        }
    }

    /// Overwrite `field`. Returns `false` (and changes nothing) when the
    /// field is not part of this shape.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> bool {
        let slot = match self {
            Self::SignIn(creds) => match field {
                Field::Email => &mut creds.email,
                Field::Password => &mut creds.password,
                _ => return false,
            },
            Self::SignUp(fields) => fields.slot_mut(field),
        };
        *slot = value.into();
        true
    }

    /// `(field, value)` pairs in render order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.mode()
            .fields()
            .iter()
            .filter_map(move |&field| self.get(field).map(|value| (field, value)))
    }

    /// Email and password, present in both shapes.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        match self {
            Self::SignIn(creds) => creds.clone(),
            Self::SignUp(fields) => Credentials { email: fields.email.clone(), password: fields.password.clone() },
        }
    }
}
