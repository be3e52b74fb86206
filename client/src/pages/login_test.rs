use super::*;

#[test]
fn accepts_ordinary_addresses() {
    for email in ["ayu@farm.co", "first.last+tag@mail.example.org", "A_B%C-1@sub-domain.ID"] {
        assert!(is_valid_email(email), "{email}");
    }
}

#[test]
fn rejects_malformed_addresses() {
    for email in ["", "plain", "@farm.co", "ayu@", "ayu@farm", "ayu@farm.c", "ayu@farm.c0m", "a b@farm.co", "ayu@.co"] {
        assert!(!is_valid_email(email), "{email}");
    }
}

#[test]
fn email_is_required_before_format_check() {
    assert_eq!(validate_email("   "), Err("Email is required"));
    assert_eq!(validate_email("nope"), Err("Invalid email address"));
    assert_eq!(validate_email(" ayu@farm.co "), Ok("ayu@farm.co".to_owned()));
}

#[test]
fn password_needs_six_characters() {
    assert_eq!(validate_password(""), Err("Password is required"));
    assert_eq!(validate_password("12345"), Err("Password must be at least 6 characters"));
    assert_eq!(validate_password("123456"), Ok("123456".to_owned()));
}

#[test]
fn login_input_reports_first_failure() {
    assert_eq!(validate_login_input("bad", "x"), Err("Invalid email address"));
    assert_eq!(validate_login_input("ayu@farm.co", "x"), Err("Password must be at least 6 characters"));
    assert_eq!(
        validate_login_input("ayu@farm.co", "secret1"),
        Ok(LoginRequest { email: "ayu@farm.co".to_owned(), password: "secret1".to_owned() })
    );
}
