use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "hunter2"),
        Ok(("user@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("a@b.com", " spaced "),
        Ok(("a@b.com".to_owned(), " spaced ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter both email and password."));
}
