// ============================================================================
// VIEWMODELS - Page state and the rules for changing it (no DOM access)
// ============================================================================

pub mod login_viewmodel;
pub mod cargo_form_viewmodel;
pub mod dashboard_viewmodel;
pub mod crew_viewmodel;

pub use login_viewmodel::{LoginAttempt, LoginForm, LoginPhase};
pub use cargo_form_viewmodel::{CargoForm, CargoSubmission, SubmissionPhase, MAX_QUANTITY, MIN_QUANTITY};
pub use dashboard_viewmodel::DashboardView;
pub use crew_viewmodel::CrewAccessView;
