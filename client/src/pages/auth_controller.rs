//! Submission orchestration for the auth page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthForm` decides what may happen; this controller makes it happen. It
//! owns the form for one mounted page, performs the single backend call per
//! accepted submit, and tells the router where to go on sign-in.
//!
//! CONCURRENCY
//! ===========
//! Everything runs on the UI thread. The form cell is never borrowed across
//! an `.await`, so a second `submit()` issued while the first is in flight
//! sees `Submitting` and returns immediately.

#[cfg(test)]
#[path = "auth_controller_test.rs"]
mod auth_controller_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::identity::{AuthError, IdentityBackend, Navigator};
use crate::net::types::SessionUserRef;
use crate::state::auth_form::{AuthForm, SubmitRequest, SubmitResponse};
use crate::state::fields::{Field, FormMode};

/// What a call to [`AuthFormController::submit`] ended up doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was not accepting submissions (already submitting or finished).
    Ignored,
    /// Validation failed; nothing was sent.
    Invalid,
    /// Sign-up succeeded; the form now shows the link step.
    LinkPending(SessionUserRef),
    /// Sign-in succeeded and the navigator was sent to this path.
    Navigated(&'static str),
    /// The backend call failed; the form kept its fields.
    Failed(AuthError),
}

type Observer = Rc<dyn Fn(&AuthForm)>;

pub struct AuthFormController {
    form: RefCell<AuthForm>,
    backend: Rc<dyn IdentityBackend>,
    navigator: Rc<dyn Navigator>,
    observer: Option<Observer>,
}

impl AuthFormController {
    #[must_use]
    pub fn new(mode: FormMode, backend: Rc<dyn IdentityBackend>, navigator: Rc<dyn Navigator>) -> Self {
        Self { form: RefCell::new(AuthForm::new(mode)), backend, navigator, observer: None }
    }

    /// Call `observer` with the new form after every state change.
    #[must_use]
    pub fn with_observer(mut self, observer: impl Fn(&AuthForm) + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    /// Copy of the current form.
    #[must_use]
    pub fn snapshot(&self) -> AuthForm {
        self.form.borrow().clone()
    }

    pub fn edit(&self, field: Field, value: impl Into<String>) {
        self.form.borrow_mut().edit(field, value);
        self.notify();
    }

    pub fn retry(&self) {
        self.form.borrow_mut().retry();
        self.notify();
    }

    /// Validate, send, and settle one submission.
    pub async fn submit(&self) -> SubmitOutcome {
        let (request, was_editable) = {
            let mut form = self.form.borrow_mut();
            let was_editable = form.shows_inputs() && !form.is_submitting();
            (form.begin_submit(), was_editable)
        };
        let Some(request) = request else {
            if !was_editable {
                return SubmitOutcome::Ignored;
            }
            // Validation errors are now on the form.
            self.notify();
            return SubmitOutcome::Invalid;
        };
        self.notify();

        let result = match &request {
            SubmitRequest::SignUp(fields) => self.backend.sign_up(fields).await.map(SubmitResponse::SignedUp),
            SubmitRequest::SignIn(creds) => self.backend.sign_in(creds).await.map(SubmitResponse::SignedIn),
        };
        if let Err(e) = &result {
            log::warn!("auth form: {} failed: {e}", self.form.borrow().mode());
        }

        let target = self.form.borrow_mut().complete(result);
        self.notify();

        if let Some(path) = target {
            self.navigator.navigate(path);
            return SubmitOutcome::Navigated(path);
        }

        let form = self.form.borrow();
        if let Some(user) = form.linked_user() {
            SubmitOutcome::LinkPending(user.clone())
        } else if let Some(error) = form.error() {
            SubmitOutcome::Failed(error.clone())
        } else {
            SubmitOutcome::Ignored
        }
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            // Observers may re-enter the controller, so hand them a copy.
            let form = self.snapshot();
            observer(&form);
        }
    }
}
