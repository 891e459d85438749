// ============================================================================
// ROUTES - Page identifiers reachable by direct transition
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    AddCargo,
    ArView,
    CrewAccess,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Login,
        Route::Dashboard,
        Route::AddCargo,
        Route::ArView,
        Route::CrewAccess,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/",
            Route::AddCargo => "/add-cargo",
            Route::ArView => "/ar-view",
            Route::CrewAccess => "/crew-access",
        }
    }

    /// Every page except the login screen sits behind the session gate
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Parse `window.location.hash` ("#/ar-view"). Unknown paths land on the dashboard.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let path = if path.is_empty() { "/" } else { path };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .unwrap_or(Route::Dashboard)
    }

    pub fn to_hash(&self) -> String {
        format!("#{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_round_trips_for_every_page() {
        for route in Route::ALL {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }

    #[test]
    fn empty_or_unknown_hash_is_dashboard() {
        assert_eq!(Route::from_hash(""), Route::Dashboard);
        assert_eq!(Route::from_hash("#"), Route::Dashboard);
        assert_eq!(Route::from_hash("#/profile"), Route::Dashboard);
    }

    #[test]
    fn only_login_is_public() {
        let public: Vec<_> = Route::ALL.into_iter().filter(|r| !r.is_protected()).collect();
        assert_eq!(public, vec![Route::Login]);
    }
}
