//! Sign-in / sign-up form state machine.
//!
//! DESIGN
//! ======
//! One `AuthForm` value holds the mode and a single `AuthPhase`. Every
//! transition replaces the phase as a whole, so combinations such as
//! "loading while already linked" cannot be represented.
//!
//! ```text
//! Editing --submit(valid)--> Submitting --sign-up ok--> LinkPending
//!    ^  |                        |  \----sign-in ok---> Done (navigate "/")
//!    |  +--submit(invalid)--+    +--any error--> Failed
//!    +--edit / retry ------------------------------------+
//! ```
//!
//! The machine performs no I/O. `begin_submit` hands back the payload to
//! send and `complete` consumes the backend's answer; the page controller
//! owns the async call in between.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use crate::net::identity::AuthError;
use crate::net::types::{SessionRef, SessionUserRef};
use crate::state::fields::{Credentials, Field, FieldSet, FormMode, SignUpFields};
use crate::util::validation::{FieldErrors, ValidationError, ValidationSchema};

/// Where the form currently is.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthPhase {
    /// Accepting input; `errors` holds the inline messages currently shown.
    Editing { fields: FieldSet, errors: FieldErrors },
    /// A backend call is in flight; inputs and the submit button are disabled.
    Submitting { fields: FieldSet },
    /// Sign-up succeeded; the next step is linking a bank account.
    LinkPending { user: SessionUserRef },
    /// The backend call failed; the fields are kept for a retry.
    Failed { fields: FieldSet, error: AuthError },
    /// Sign-in succeeded and the page navigated away.
    Done,
}

/// Payload released by a successful `begin_submit`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitRequest {
    SignIn(Credentials),
    SignUp(SignUpFields),
}

/// Backend answer fed back into `complete`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitResponse {
    SignedUp(SessionUserRef),
    SignedIn(Option<SessionRef>),
}

/// Path visited after a successful sign-in.
pub const HOME_PATH: &str = "/";

#[derive(Clone, Debug, PartialEq)]
pub struct AuthForm {
    mode: FormMode,
    schema: ValidationSchema,
    phase: AuthPhase,
}

impl AuthForm {
    /// Fresh form with every field empty.
    #[must_use]
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            schema: ValidationSchema::for_mode(mode),
            phase: AuthPhase::Editing { fields: FieldSet::empty(mode), errors: FieldErrors::new() },
        }
    }

    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    #[must_use]
    pub fn phase(&self) -> &AuthPhase {
        &self.phase
    }

    /// Current field values, while the form still holds them.
    #[must_use]
    pub fn fields(&self) -> Option<&FieldSet> {
        match &self.phase {
            AuthPhase::Editing { fields, .. } | AuthPhase::Submitting { fields } | AuthPhase::Failed { fields, .. } => {
                Some(fields)
            }
            AuthPhase::LinkPending { .. } | AuthPhase::Done => None,
        }
    }

    /// Value of one input, empty when the field is absent.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.fields().and_then(|f| f.get(field)).unwrap_or_default()
    }

    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<&ValidationError> {
        match &self.phase {
            AuthPhase::Editing { errors, .. } => errors.get(&field),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, AuthPhase::Submitting { .. })
    }

    #[must_use]
    pub fn error(&self) -> Option<&AuthError> {
        match &self.phase {
            AuthPhase::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    #[must_use]
    pub fn linked_user(&self) -> Option<&SessionUserRef> {
        match &self.phase {
            AuthPhase::LinkPending { user } => Some(user),
            _ => None,
        }
    }

    /// Apply one keystroke-level edit and re-check only that field.
    ///
    /// A failed form returns to editing with its fields intact. Edits are
    /// ignored while submitting and after the form has finished.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        let (mut fields, mut errors) = match std::mem::replace(&mut self.phase, AuthPhase::Done) {
            AuthPhase::Editing { fields, errors } => (fields, errors),
            AuthPhase::Failed { fields, .. } => (fields, FieldErrors::new()),
            other => {
                log::debug!("auth form: edit ignored while {}", phase_name(&other));
                self.phase = other;
                return;
            }
        };

        if fields.set(field, value) {
            let current = fields.get(field).unwrap_or_default();
            match self.schema.validate_field(field, current) {
                Ok(()) => {
                    errors.remove(&field);
                }
                Err(e) => {
                    errors.insert(field, e);
                }
            }
        } else {
            log::debug!("auth form: {} is not a {} field", field.name(), self.mode);
        }

        self.phase = AuthPhase::Editing { fields, errors };
    }

    /// Leave a failed state without changing anything else.
    pub fn retry(&mut self) {
        if let AuthPhase::Failed { fields, .. } = &self.phase {
            self.phase = AuthPhase::Editing { fields: fields.clone(), errors: FieldErrors::new() };
        }
    }

    /// Gate a submission on the full schema.
    ///
    /// Returns the payload to send when the form moved to `Submitting`.
    /// Returns `None` when validation failed (the form shows every field
    /// error) or when the form is not editable, including while a previous
    /// submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        let fields = match &self.phase {
            AuthPhase::Editing { fields, .. } | AuthPhase::Failed { fields, .. } => fields.clone(),
            other => {
                log::debug!("auth form: submit ignored while {}", phase_name(other));
                return None;
            }
        };

        if let Err(errors) = self.schema.validate(&fields) {
            self.phase = AuthPhase::Editing { fields, errors };
            return None;
        }

        let request = match &fields {
            FieldSet::SignIn(creds) => SubmitRequest::SignIn(creds.clone()),
            FieldSet::SignUp(sign_up) => SubmitRequest::SignUp(sign_up.clone()),
        };
        self.phase = AuthPhase::Submitting { fields };
        Some(request)
    }

    /// Consume the backend's answer to the in-flight submission.
    ///
    /// Returns the path to navigate to, if any. Answers arriving outside
    /// `Submitting` are dropped.
    pub fn complete(&mut self, result: Result<SubmitResponse, AuthError>) -> Option<&'static str> {
        if !self.is_submitting() {
            log::warn!("auth form: backend answer dropped while {}", phase_name(&self.phase));
            return None;
        }
        let AuthPhase::Submitting { fields } = std::mem::replace(&mut self.phase, AuthPhase::Done) else {
            return None;
        };

        match (self.mode, result) {
            (FormMode::SignUp, Ok(SubmitResponse::SignedUp(user))) => {
                self.phase = AuthPhase::LinkPending { user };
                None
            }
            (FormMode::SignIn, Ok(SubmitResponse::SignedIn(Some(_session)))) => {
                self.phase = AuthPhase::Done;
                Some(HOME_PATH)
            }
            (FormMode::SignIn, Ok(SubmitResponse::SignedIn(None))) => {
                self.phase = AuthPhase::Failed { fields, error: AuthError::Rejected };
                None
            }
            (mode, Ok(response)) => {
                let error = AuthError::Unavailable(format!("unexpected {response:?} for {mode} form"));
                self.phase = AuthPhase::Failed { fields, error };
                None
            }
            (_, Err(error)) => {
                self.phase = AuthPhase::Failed { fields, error };
                None
            }
        }
    }

    /// False once the form has been replaced by the link step or left behind.
    #[must_use]
    pub fn shows_inputs(&self) -> bool {
        !matches!(self.phase, AuthPhase::LinkPending { .. } | AuthPhase::Done)
    }

    #[must_use]
    pub fn heading(&self) -> &'static str {
        if self.linked_user().is_some() {
            return "Link Account";
        }
        match self.mode {
            FormMode::SignIn => "Sign In",
            FormMode::SignUp => "Sign Up",
        }
    }

    #[must_use]
    pub fn subheading(&self) -> &'static str {
        if self.linked_user().is_some() {
            "Link your account to get started"
        } else {
            "Please enter your details"
        }
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            return "Loading...";
        }
        match self.mode {
            FormMode::SignIn => "Sign In",
            FormMode::SignUp => "Sign Up",
        }
    }

    #[must_use]
    pub fn footer_prompt(&self) -> &'static str {
        match self.mode {
            FormMode::SignIn => "Don't have an account?",
            FormMode::SignUp => "Already have an account?",
        }
    }

    /// Label and path of the link to the other mode.
    #[must_use]
    pub fn footer_link(&self) -> (&'static str, &'static str) {
        let other = self.mode.other();
        let label = match other {
            FormMode::SignIn => "Sign in",
            FormMode::SignUp => "Sign up",
        };
        (label, other.path())
    }
}

fn phase_name(phase: &AuthPhase) -> &'static str {
    match phase {
        AuthPhase::Editing { .. } => "editing",
        AuthPhase::Submitting { .. } => "submitting",
        AuthPhase::LinkPending { .. } => "link-pending",
        AuthPhase::Failed { .. } => "failed",
        AuthPhase::Done => "done",
    }
}
