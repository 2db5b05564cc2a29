use super::*;

#[test]
fn validate_credentials_trims_email_only() {
    assert_eq!(
        validate_credentials("  ada@example.com ", " secret "),
        Ok(("ada@example.com".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("   ", "pw"), Err("Enter your email and password."));
    assert_eq!(validate_credentials("a@b.co", ""), Err("Enter your email and password."));
}

#[test]
fn mode_toggles_between_login_and_register() {
    assert_eq!(LoginMode::default(), LoginMode::Login);
    assert_eq!(LoginMode::Login.toggled(), LoginMode::Register);
    assert_eq!(LoginMode::Register.toggled(), LoginMode::Login);
}

#[test]
fn mode_copy_matches_each_form() {
    assert_eq!(LoginMode::Login.heading(), "Welcome Back");
    assert_eq!(LoginMode::Register.heading(), "Create Account");
    assert_eq!(LoginMode::Login.submit_label(false), "Log In");
    assert_eq!(LoginMode::Register.submit_label(false), "Create Account");
    assert_eq!(LoginMode::Register.submit_label(true), "Please wait...");
    assert_eq!(LoginMode::Register.password_autocomplete(), "new-password");
    assert_eq!(LoginMode::Login.switch_prompt().1, "Sign up");
}
