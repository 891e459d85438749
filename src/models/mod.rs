pub mod session;
pub mod cargo;
pub mod crew;

pub use session::Session;
pub use cargo::{CargoCategory, CargoId, CargoItem, CargoStatus, Priority, StorageRequirement};
pub use crew::{AccessLevel, AccessLevelInfo, CrewMember, CrewStatus};
