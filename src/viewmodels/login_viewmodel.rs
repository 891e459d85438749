// ============================================================================
// LOGIN VIEWMODEL - Form state for the login screen
// ============================================================================
// The hook drives the delay; this type only decides what each step means.
// ============================================================================

use crate::config::DemoCredentials;
use crate::errors::AuthError;
use crate::models::Session;
use crate::services::auth_service::{authenticate, validate_login_fields};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Authenticating,
}

/// Credentials captured when the attempt started, resolved after the delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub show_password: bool,
    pub error: Option<AuthError>,
    pub phase: LoginPhase,
}

impl LoginForm {
    pub fn is_busy(&self) -> bool {
        self.phase == LoginPhase::Authenticating
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() {
            "Authenticating..."
        } else {
            "Login to Dashboard"
        }
    }

    /// Start an attempt. Returns `None` when already busy or when a field is
    /// empty; in the latter case the error is recorded and the form stays idle.
    pub fn begin(&mut self) -> Option<LoginAttempt> {
        if self.is_busy() {
            return None;
        }
        self.error = None;

        if let Err(e) = validate_login_fields(&self.username, &self.password) {
            self.error = Some(e);
            return None;
        }

        self.phase = LoginPhase::Authenticating;
        Some(LoginAttempt {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    /// Resolve an attempt once the simulated latency has elapsed
    pub fn finish(&mut self, attempt: &LoginAttempt, credentials: &DemoCredentials) -> Option<Session> {
        match authenticate(&attempt.username, &attempt.password, credentials) {
            Ok(session) => Some(session),
            Err(e) => {
                self.error = Some(e);
                self.phase = LoginPhase::Idle;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, password: &str) -> LoginForm {
        LoginForm {
            username: username.to_string(),
            password: password.to_string(),
            ..LoginForm::default()
        }
    }

    #[test]
    fn missing_field_fails_before_the_delay() {
        let mut login = form("", "x");
        assert!(login.begin().is_none());
        assert_eq!(login.error, Some(AuthError::MissingField));
        assert_eq!(login.phase, LoginPhase::Idle);
        assert_eq!(login.error_message().as_deref(), Some("Username and password are required"));
    }

    #[test]
    fn valid_attempt_goes_busy_and_rejects_duplicates() {
        let mut login = form("admin", "spacecargo123");
        let attempt = login.begin().expect("attempt should start");
        assert!(login.is_busy());
        assert_eq!(login.submit_label(), "Authenticating...");
        assert!(login.begin().is_none());

        let session = login.finish(&attempt, &DemoCredentials::default());
        assert_eq!(session, Some(Session::authenticated("admin")));
    }

    #[test]
    fn wrong_password_returns_to_idle_with_message() {
        let mut login = form("admin", "hunter2");
        let attempt = login.begin().unwrap();
        assert!(login.finish(&attempt, &DemoCredentials::default()).is_none());
        assert_eq!(login.error, Some(AuthError::InvalidCredentials));
        assert!(!login.is_busy());
        assert_eq!(login.error_message().as_deref(), Some("Invalid username or password"));
    }

    #[test]
    fn new_attempt_clears_previous_error() {
        let mut login = form("admin", "nope");
        let attempt = login.begin().unwrap();
        login.finish(&attempt, &DemoCredentials::default());
        login.password = "spacecargo123".to_string();
        assert!(login.begin().is_some());
        assert!(login.error.is_none());
    }
}
