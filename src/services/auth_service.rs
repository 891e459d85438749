use crate::config::DemoCredentials;
use crate::errors::AuthError;
use crate::models::Session;

/// Both fields must be non-empty. Checked before any simulated latency.
pub fn validate_login_fields(username: &str, password: &str) -> Result<(), AuthError> {
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::MissingField);
    }
    Ok(())
}

/// Mock authentication against the single demo credential pair (case-sensitive)
pub fn authenticate(
    username: &str,
    password: &str,
    credentials: &DemoCredentials,
) -> Result<Session, AuthError> {
    validate_login_fields(username, password)?;

    if username == credentials.username && password == credentials.password {
        log::info!("✅ [AUTH] Login accepted for {}", username);
        Ok(Session::authenticated(username))
    } else {
        log::warn!("❌ [AUTH] Invalid credentials for {}", username);
        Err(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> DemoCredentials {
        DemoCredentials::default()
    }

    #[test]
    fn demo_pair_is_accepted() {
        let session = authenticate("admin", "spacecargo123", &creds()).unwrap();
        assert!(session.is_authenticated);
        assert_eq!(session.username.as_deref(), Some("admin"));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert_eq!(
            authenticate("Admin", "spacecargo123", &creds()),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            authenticate("admin", "SPACECARGO123", &creds()),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn empty_fields_are_missing_not_invalid() {
        assert_eq!(authenticate("", "x", &creds()), Err(AuthError::MissingField));
        assert_eq!(authenticate("admin", "", &creds()), Err(AuthError::MissingField));
        assert_eq!(validate_login_fields("a", "b"), Ok(()));
    }
}
