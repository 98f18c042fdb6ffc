use super::*;
use crate::util::validation::ValidationErrorKind;

// =============================================================
// Helpers
// =============================================================

fn valid_sign_in() -> AuthForm {
    let mut form = AuthForm::new(FormMode::SignIn);
    form.edit(Field::Email, "a@b.com");
    form.edit(Field::Password, "abcdefgh");
    form
}

fn valid_sign_up() -> AuthForm {
    let mut form = AuthForm::new(FormMode::SignUp);
    for (field, value) in [
        (Field::FirstName, "Ada"),
        (Field::LastName, "Lovelace"),
        (Field::Address1, "12 Analytical Row"),
        (Field::City, "London"),
        (Field::State, "LDN"),
        (Field::PostalCode, "N1 9GU"),
        (Field::DateOfBirth, "1815-12-10"),
        (Field::Ssn, "1234"),
        (Field::Email, "ada@example.com"),
        (Field::Password, "difference"),
    ] {
        form.edit(field, value);
    }
    form
}

fn user_ref() -> SessionUserRef {
    SessionUserRef { user_id: "user-42".to_owned() }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_form_is_editing_with_empty_fields() {
    let form = AuthForm::new(FormMode::SignUp);
    assert_eq!(
        form.phase(),
        &AuthPhase::Editing { fields: FieldSet::empty(FormMode::SignUp), errors: FieldErrors::new() }
    );
    assert!(form.shows_inputs());
    assert!(!form.is_submitting());
}

// =============================================================
// Editing
// =============================================================

#[test]
fn edit_updates_value_and_shows_inline_error() {
    let mut form = AuthForm::new(FormMode::SignIn);
    form.edit(Field::Email, "not-an-email");
    assert_eq!(form.value(Field::Email), "not-an-email");
    assert_eq!(form.field_error(Field::Email).unwrap().kind, ValidationErrorKind::InvalidEmail);
    // Only the edited field is checked.
    assert!(form.field_error(Field::Password).is_none());
}

#[test]
fn fixing_a_field_clears_its_error() {
    let mut form = AuthForm::new(FormMode::SignIn);
    form.edit(Field::Password, "short");
    assert!(form.field_error(Field::Password).is_some());
    form.edit(Field::Password, "long-enough");
    assert!(form.field_error(Field::Password).is_none());
}

#[test]
fn edit_of_field_outside_mode_changes_nothing() {
    let mut form = AuthForm::new(FormMode::SignIn);
    let before = form.clone();
    form.edit(Field::Ssn, "1234");
    assert_eq!(form, before);
}

// =============================================================
// Submit gating
// =============================================================

#[test]
fn invalid_submit_stays_editing_with_all_errors() {
    let mut form = AuthForm::new(FormMode::SignUp);
    assert_eq!(form.begin_submit(), None);
    let AuthPhase::Editing { errors, .. } = form.phase() else {
        panic!("expected editing, got {:?}", form.phase());
    };
    assert_eq!(errors.len(), 10);
}

#[test]
fn malformed_email_blocks_submit() {
    let mut form = valid_sign_in();
    form.edit(Field::Email, "not-an-email");
    assert_eq!(form.begin_submit(), None);
    assert!(!form.is_submitting());
}

#[test]
fn padded_email_is_never_released() {
    let mut form = valid_sign_in();
    form.edit(Field::Email, "  a@b.com ");
    assert_eq!(form.field_error(Field::Email).unwrap().kind, ValidationErrorKind::InvalidEmail);
    assert_eq!(form.begin_submit(), None);
    assert!(!form.is_submitting());

    form.edit(Field::Email, "a@b.com");
    match form.begin_submit() {
        Some(SubmitRequest::SignIn(credentials)) => assert_eq!(credentials.email, "a@b.com"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn valid_sign_in_releases_credentials() {
    let mut form = valid_sign_in();
    let request = form.begin_submit();
    assert_eq!(
        request,
        Some(SubmitRequest::SignIn(Credentials { email: "a@b.com".to_owned(), password: "abcdefgh".to_owned() }))
    );
    assert!(form.is_submitting());
    assert_eq!(form.submit_label(), "Loading...");
}

#[test]
fn valid_sign_up_releases_all_ten_fields() {
    let mut form = valid_sign_up();
    let Some(SubmitRequest::SignUp(fields)) = form.begin_submit() else {
        panic!("expected sign-up request");
    };
    assert_eq!(fields.first_name, "Ada");
    assert_eq!(fields.ssn, "1234");
    assert_eq!(fields.password, "difference");
}

#[test]
fn second_submit_while_submitting_is_a_no_op() {
    let mut form = valid_sign_in();
    assert!(form.begin_submit().is_some());
    let snapshot = form.clone();
    assert_eq!(form.begin_submit(), None);
    assert_eq!(form, snapshot);
}

#[test]
fn edits_are_ignored_while_submitting() {
    let mut form = valid_sign_in();
    form.begin_submit();
    form.edit(Field::Email, "other@b.com");
    assert_eq!(form.value(Field::Email), "a@b.com");
}

// =============================================================
// Completion
// =============================================================

#[test]
fn sign_up_success_moves_to_link_pending() {
    let mut form = valid_sign_up();
    form.begin_submit();
    let nav = form.complete(Ok(SubmitResponse::SignedUp(user_ref())));
    assert_eq!(nav, None);
    assert_eq!(form.phase(), &AuthPhase::LinkPending { user: user_ref() });
    assert!(!form.shows_inputs());
    assert!(!form.is_submitting());
    assert_eq!(form.heading(), "Link Account");
    assert_eq!(form.subheading(), "Link your account to get started");
}

#[test]
fn sign_in_success_navigates_home() {
    let mut form = valid_sign_in();
    form.begin_submit();
    let session = SessionRef { session_id: "s-1".to_owned() };
    assert_eq!(form.complete(Ok(SubmitResponse::SignedIn(Some(session)))), Some("/"));
    assert_eq!(form.phase(), &AuthPhase::Done);
    assert!(!form.shows_inputs());
}

#[test]
fn sign_in_without_session_is_a_rejection() {
    let mut form = valid_sign_in();
    form.begin_submit();
    assert_eq!(form.complete(Ok(SubmitResponse::SignedIn(None))), None);
    assert_eq!(form.error(), Some(&AuthError::Rejected));
}

#[test]
fn failure_preserves_fields() {
    let mut form = valid_sign_up();
    let before = form.fields().cloned();
    form.begin_submit();
    form.complete(Err(AuthError::Unavailable("timeout".to_owned())));
    assert_eq!(form.fields().cloned(), before);
    assert_eq!(form.error(), Some(&AuthError::Unavailable("timeout".to_owned())));
    assert!(!form.is_submitting());
    assert!(form.shows_inputs());
}

#[test]
fn mismatched_response_fails_instead_of_linking() {
    let mut form = valid_sign_in();
    form.begin_submit();
    form.complete(Ok(SubmitResponse::SignedUp(user_ref())));
    assert!(matches!(form.error(), Some(AuthError::Unavailable(_))));
    assert!(form.linked_user().is_none());
}

#[test]
fn completion_outside_submitting_is_dropped() {
    let mut form = valid_sign_in();
    let before = form.clone();
    assert_eq!(form.complete(Ok(SubmitResponse::SignedIn(None))), None);
    assert_eq!(form, before);
}

// =============================================================
// Recovery
// =============================================================

#[test]
fn retry_returns_to_editing_with_same_fields() {
    let mut form = valid_sign_in();
    form.begin_submit();
    form.complete(Err(AuthError::Rejected));
    form.retry();
    assert_eq!(
        form.phase(),
        &AuthPhase::Editing { fields: valid_sign_in().fields().cloned().unwrap(), errors: FieldErrors::new() }
    );
}

#[test]
fn edit_after_failure_resumes_editing() {
    let mut form = valid_sign_in();
    form.begin_submit();
    form.complete(Err(AuthError::Rejected));
    form.edit(Field::Password, "abcdefghi");
    assert!(form.error().is_none());
    assert_eq!(form.value(Field::Email), "a@b.com");
    assert_eq!(form.value(Field::Password), "abcdefghi");
}

#[test]
fn submit_after_failure_resubmits_same_payload() {
    let mut form = valid_sign_in();
    let first = form.begin_submit();
    form.complete(Err(AuthError::Backend { status: 500, message: "boom".to_owned() }));
    assert_eq!(form.begin_submit(), first);
}

#[test]
fn link_pending_ignores_further_input() {
    let mut form = valid_sign_up();
    form.begin_submit();
    form.complete(Ok(SubmitResponse::SignedUp(user_ref())));
    form.edit(Field::Email, "x@y.com");
    form.retry();
    assert_eq!(form.begin_submit(), None);
    assert_eq!(form.linked_user(), Some(&user_ref()));
}

// =============================================================
// Presentation
// =============================================================

#[test]
fn headings_and_labels_follow_mode() {
    let sign_in = AuthForm::new(FormMode::SignIn);
    assert_eq!(sign_in.heading(), "Sign In");
    assert_eq!(sign_in.subheading(), "Please enter your details");
    assert_eq!(sign_in.submit_label(), "Sign In");
    assert_eq!(sign_in.footer_prompt(), "Don't have an account?");
    assert_eq!(sign_in.footer_link(), ("Sign up", "/sign-up"));

    let sign_up = AuthForm::new(FormMode::SignUp);
    assert_eq!(sign_up.heading(), "Sign Up");
    assert_eq!(sign_up.submit_label(), "Sign Up");
    assert_eq!(sign_up.footer_prompt(), "Already have an account?");
    assert_eq!(sign_up.footer_link(), ("Sign in", "/sign-in"));
}
