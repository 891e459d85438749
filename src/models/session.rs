/// Authenticated/unauthenticated status plus the current username
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub is_authenticated: bool,
    pub username: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(username: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            username: Some(username.into()),
        }
    }

    /// Name shown in the dashboard header
    pub fn display_name(&self) -> &str {
        match &self.username {
            Some(name) if !name.is_empty() => name,
            _ => "USER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_session_is_not_authenticated() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated);
        assert_eq!(session.display_name(), "USER");
    }

    #[test]
    fn authenticated_session_shows_username() {
        let session = Session::authenticated("admin");
        assert!(session.is_authenticated);
        assert_eq!(session.display_name(), "admin");
    }
}
