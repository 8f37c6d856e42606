#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::ApiError;

/// Which face of the auth form is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Validated, trimmed credentials ready to submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Client-side form validation. Runs before any network call; a failure here
/// never reaches the backend.
///
/// # Errors
///
/// Returns the localized message to show inline.
pub fn validate(
    mode: AuthMode,
    username: &str,
    password: &str,
    confirm_password: &str,
) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Le nom d’utilisateur est requis.");
    }
    if password.is_empty() {
        return Err("Le mot de passe est requis.");
    }
    if mode == AuthMode::Register {
        if password.chars().count() < 6 {
            return Err("Mot de passe trop court (min 6 caractères).");
        }
        if password != confirm_password {
            return Err("Les mots de passe ne correspondent pas.");
        }
    }
    Ok(Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

/// Localized message for a failed login/registration call.
///
/// A 409 during registration is the one failure callers can act on (pick
/// another name); everything else collapses to a generic message per mode.
pub fn submit_error_message(mode: AuthMode, error: &ApiError) -> &'static str {
    if mode == AuthMode::Register && error.is_conflict() {
        "Ce nom d’utilisateur est déjà utilisé."
    } else if mode == AuthMode::Login {
        "Identifiants invalides ou service indisponible."
    } else {
        "Inscription impossible. Réessaie avec un autre identifiant."
    }
}
