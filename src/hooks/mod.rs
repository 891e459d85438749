pub mod session_context;
pub mod use_navigator;

pub use session_context::{use_session, SessionContextProvider, SessionHandle};
pub use use_navigator::{use_navigator, Navigator};
