use super::*;

// =============================================================
// Client-side validation — never reaches the network
// =============================================================

#[test]
fn validate_requires_username() {
    let err = validate(AuthMode::Login, "   ", "secret", "").unwrap_err();
    assert_eq!(err, "Le nom d’utilisateur est requis.");
}

#[test]
fn validate_requires_password() {
    let err = validate(AuthMode::Login, "omar", "", "").unwrap_err();
    assert_eq!(err, "Le mot de passe est requis.");
}

#[test]
fn validate_trims_username() {
    let creds = validate(AuthMode::Login, "  omar  ", "password", "").unwrap();
    assert_eq!(creds.username, "omar");
    assert_eq!(creds.password, "password");
}

#[test]
fn validate_register_rejects_short_password() {
    let err = validate(AuthMode::Register, "omar", "abc12", "abc12").unwrap_err();
    assert_eq!(err, "Mot de passe trop court (min 6 caractères).");
}

#[test]
fn validate_register_counts_chars_not_bytes() {
    // Six accented characters is long enough even though it is 12 bytes.
    assert!(validate(AuthMode::Register, "omar", "éééééé", "éééééé").is_ok());
}

#[test]
fn validate_register_rejects_mismatch() {
    let err = validate(AuthMode::Register, "omar", "password", "passw0rd").unwrap_err();
    assert_eq!(err, "Les mots de passe ne correspondent pas.");
}

#[test]
fn validate_login_ignores_confirm_field() {
    assert!(validate(AuthMode::Login, "omar", "pw", "unrelated").is_ok());
}

// =============================================================
// Submit error mapping
// =============================================================

#[test]
fn conflict_on_register_names_the_collision() {
    let msg = submit_error_message(AuthMode::Register, &ApiError::Status(409));
    assert_eq!(msg, "Ce nom d’utilisateur est déjà utilisé.");
}

#[test]
fn conflict_on_login_stays_generic() {
    let msg = submit_error_message(AuthMode::Login, &ApiError::Status(409));
    assert_eq!(msg, "Identifiants invalides ou service indisponible.");
}

#[test]
fn login_failures_are_generic() {
    for error in [
        ApiError::Status(401),
        ApiError::Status(500),
        ApiError::Network("offline".to_owned()),
    ] {
        assert_eq!(
            submit_error_message(AuthMode::Login, &error),
            "Identifiants invalides ou service indisponible."
        );
    }
}

#[test]
fn register_failures_are_generic_except_conflict() {
    let msg = submit_error_message(AuthMode::Register, &ApiError::Status(500));
    assert_eq!(msg, "Inscription impossible. Réessaie avec un autre identifiant.");
}
