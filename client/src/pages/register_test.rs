use super::*;

#[test]
fn validate_registration_trims_name_and_email() {
    assert_eq!(
        validate_registration("  Jane Doe ", " jane@example.com ", "secret1"),
        Ok(Registration {
            name: "Jane Doe".to_owned(),
            email: "jane@example.com".to_owned(),
            password: "secret1".to_owned(),
        })
    );
}

#[test]
fn validate_registration_requires_every_field() {
    let msg = "Fill in your name, email and a password.";
    assert_eq!(validate_registration("", "jane@example.com", "secret1"), Err(msg));
    assert_eq!(validate_registration("Jane", "  ", "secret1"), Err(msg));
    assert_eq!(validate_registration("Jane", "jane@example.com", ""), Err(msg));
}

#[test]
fn validate_registration_enforces_min_password_length() {
    assert_eq!(
        validate_registration("Jane", "jane@example.com", "12345"),
        Err("Passwords must be at least 6 characters.")
    );
    assert!(validate_registration("Jane", "jane@example.com", "123456").is_ok());
}

#[test]
fn password_length_counts_characters_not_bytes() {
    assert!(validate_registration("Jane", "jane@example.com", "ééééé").is_err());
    assert!(validate_registration("Jane", "jane@example.com", "éééééé").is_ok());
}
