// ============================================================================
// SESSION GATE - Evaluated before a protected page is constructed
// ============================================================================

use crate::models::Session;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the requested page
    Proceed(Route),
    /// Render nothing and navigate to the given page
    Redirect(Route),
}

impl GuardOutcome {
    pub fn is_redirect(&self) -> bool {
        matches!(self, GuardOutcome::Redirect(_))
    }
}

pub fn resolve(requested: Route, session: &Session) -> GuardOutcome {
    if requested.is_protected() && !session.is_authenticated {
        log::debug!("🔒 [NAV] {:?} requires a session, redirecting to login", requested);
        return GuardOutcome::Redirect(Route::Login);
    }
    GuardOutcome::Proceed(requested)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_visitors_are_sent_to_login() {
        let session = Session::anonymous();
        for route in Route::ALL.into_iter().filter(Route::is_protected) {
            assert_eq!(resolve(route, &session), GuardOutcome::Redirect(Route::Login));
        }
    }

    #[test]
    fn login_page_is_always_reachable() {
        assert_eq!(resolve(Route::Login, &Session::anonymous()), GuardOutcome::Proceed(Route::Login));
        assert_eq!(
            resolve(Route::Login, &Session::authenticated("admin")),
            GuardOutcome::Proceed(Route::Login)
        );
    }

    #[test]
    fn authenticated_session_proceeds_everywhere() {
        let session = Session::authenticated("admin");
        for route in Route::ALL {
            assert!(!resolve(route, &session).is_redirect());
        }
    }
}
