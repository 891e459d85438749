pub mod app;
pub mod page_header;
pub mod login_screen;
pub mod dashboard;
pub mod add_cargo;
pub mod ar_view;
pub mod crew_access;

pub use app::App;
pub use page_header::PageHeader;
pub use login_screen::LoginScreen;
pub use dashboard::DashboardPage;
pub use add_cargo::AddCargoPage;
pub use ar_view::ArViewPage;
pub use crew_access::CrewAccessPage;
