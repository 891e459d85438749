pub mod auth_service;
pub mod session_service;

pub use auth_service::*;
pub use session_service::*;
