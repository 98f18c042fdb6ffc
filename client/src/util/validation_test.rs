use super::*;

fn filled_sign_up() -> FieldSet {
    let mut set = FieldSet::empty(FormMode::SignUp);
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
        set.set(field, value);
    }
    set
}

// =============================================================
// Schema shape
// =============================================================

#[test]
fn schema_fields_match_field_set_for_every_mode() {
    for mode in [FormMode::SignIn, FormMode::SignUp] {
        let schema = ValidationSchema::for_mode(mode);
        let schema_fields: Vec<_> = schema.required_fields().collect();
        let set_fields: Vec<_> = FieldSet::empty(mode).iter().map(|(field, _)| field).collect();
        assert_eq!(schema_fields, set_fields, "mode {mode}");
        assert_eq!(schema.fields().collect::<Vec<_>>(), set_fields, "mode {mode}");
    }
}

#[test]
fn email_and_password_rules_in_both_modes() {
    for mode in [FormMode::SignIn, FormMode::SignUp] {
        let schema = ValidationSchema::for_mode(mode);
        assert_eq!(schema.rules(Field::Email), &[Rule::Required, Rule::Email]);
        assert_eq!(schema.rules(Field::Password), &[Rule::Required, Rule::MinLength(8)]);
    }
}

#[test]
fn sign_up_extra_fields_are_required_only() {
    let schema = ValidationSchema::for_mode(FormMode::SignUp);
    for field in [Field::FirstName, Field::State, Field::PostalCode, Field::DateOfBirth, Field::Ssn] {
        assert_eq!(schema.rules(field), &[Rule::Required], "{field:?}");
    }
}

#[test]
fn sign_in_schema_has_no_rules_for_sign_up_fields() {
    let schema = ValidationSchema::for_mode(FormMode::SignIn);
    assert!(schema.rules(Field::City).is_empty());
}

#[test]
fn parse_builds_schema_for_known_modes() {
    assert_eq!(ValidationSchema::parse("sign-in").unwrap().mode(), FormMode::SignIn);
    assert_eq!(ValidationSchema::parse("sign-up").unwrap().mode(), FormMode::SignUp);
}

#[test]
fn parse_unknown_mode_is_config_error() {
    assert_eq!(ValidationSchema::parse("register"), Err(ConfigError::UnknownMode("register".to_owned())));
}

// =============================================================
// Field checks
// =============================================================

#[test]
fn malformed_email_fails_in_every_mode() {
    for mode in [FormMode::SignIn, FormMode::SignUp] {
        let schema = ValidationSchema::for_mode(mode);
        let err = schema.validate_field(Field::Email, "not-an-email").unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidEmail);
    }
}

#[test]
fn email_shapes() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("first.last@mail.example.org"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a@@b.com"));
    assert!(!is_valid_email("a@b..com"));
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@b.c om"));
}

#[test]
fn email_rejects_characters_outside_the_address_grammar() {
    for bad in ["a,b@c.com", "a<b>@c.com", "a@b_c.com", "a@-x.com", ".a@b.com", "Ada <ada@example.com>"] {
        assert!(!is_valid_email(bad), "{bad:?} should be rejected");
    }
}

#[test]
fn padded_email_is_invalid() {
    let schema = ValidationSchema::for_mode(FormMode::SignIn);
    for padded in ["  a@b.com", "a@b.com ", "\ta@b.com\n"] {
        let err = schema.validate_field(Field::Email, padded).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidEmail, "{padded:?}");
    }
}

#[test]
fn empty_email_reports_required_before_format() {
    let schema = ValidationSchema::for_mode(FormMode::SignIn);
    let err = schema.validate_field(Field::Email, "   ").unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::Required);
}

#[test]
fn password_minimum_is_eight_characters() {
    let schema = ValidationSchema::for_mode(FormMode::SignIn);
    assert_eq!(
        schema.validate_field(Field::Password, "abcdefg").unwrap_err().kind,
        ValidationErrorKind::TooShort { min: 8 }
    );
    assert!(schema.validate_field(Field::Password, "abcdefgh").is_ok());
}

#[test]
fn password_length_counts_characters() {
    let schema = ValidationSchema::for_mode(FormMode::SignIn);
    // 4 chars, 8 bytes.
    assert!(schema.validate_field(Field::Password, "éééé").is_err());
}

#[test]
fn whitespace_only_value_is_missing() {
    let schema = ValidationSchema::for_mode(FormMode::SignUp);
    assert_eq!(schema.validate_field(Field::City, " \t ").unwrap_err().kind, ValidationErrorKind::Required);
}

// =============================================================
// Full-schema validation
// =============================================================

#[test]
fn valid_sign_in_passes() {
    let schema = ValidationSchema::for_mode(FormMode::SignIn);
    let mut set = FieldSet::empty(FormMode::SignIn);
    set.set(Field::Email, "a@b.com");
    set.set(Field::Password, "abcdefgh");
    assert_eq!(schema.validate(&set), Ok(()));
}

#[test]
fn valid_sign_up_passes() {
    let schema = ValidationSchema::for_mode(FormMode::SignUp);
    assert_eq!(schema.validate(&filled_sign_up()), Ok(()));
}

#[test]
fn each_missing_sign_up_field_is_reported() {
    let schema = ValidationSchema::for_mode(FormMode::SignUp);
    for field in FormMode::SignUp.fields() {
        let mut set = filled_sign_up();
        set.set(*field, "");
        let errors = schema.validate(&set).unwrap_err();
        assert_eq!(errors.len(), 1, "{field:?}");
        assert_eq!(errors[field].kind, ValidationErrorKind::Required);
    }
}

#[test]
fn empty_form_reports_every_field() {
    let schema = ValidationSchema::for_mode(FormMode::SignUp);
    let errors = schema.validate(&FieldSet::empty(FormMode::SignUp)).unwrap_err();
    assert_eq!(errors.keys().copied().collect::<Vec<_>>(), FormMode::SignUp.fields());
}

// =============================================================
// Messages
// =============================================================

#[test]
fn error_messages_name_the_field() {
    let required = ValidationError { field: Field::FirstName, kind: ValidationErrorKind::Required };
    assert_eq!(required.to_string(), "First Name is required");
    let short = ValidationError { field: Field::Password, kind: ValidationErrorKind::TooShort { min: 8 } };
    assert_eq!(short.to_string(), "Password must be at least 8 characters");
    let email = ValidationError { field: Field::Email, kind: ValidationErrorKind::InvalidEmail };
    assert_eq!(email.to_string(), "Invalid email address");
}
