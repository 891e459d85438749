// ============================================================================
// SESSION CONTEXT - Share the session between pages
// ============================================================================
// The provider owns the session lifecycle: read from localStorage once on
// mount, persist on sign-in, clear on sign-out.
// ============================================================================

use yew::prelude::*;
use crate::config::CONFIG;
use crate::models::Session;
use crate::services::session_service::{check_session, clear_session, persist_session};
use crate::utils::storage::BrowserStorage;

#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub session: Session,
    pub sign_in: Callback<Session>,
    pub sign_out: Callback<()>,
}

impl SessionHandle {
    /// Used when a component is rendered outside the provider
    fn detached() -> Self {
        Self {
            session: Session::anonymous(),
            sign_in: Callback::noop(),
            sign_out: Callback::noop(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
}

#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let session = use_state(|| {
        let restored = check_session(&BrowserStorage, &CONFIG.storage_keys);
        if restored.is_authenticated {
            log::info!("💾 [AUTH] Session restored for {}", restored.display_name());
        }
        restored
    });

    let sign_in = {
        let session = session.clone();
        Callback::from(move |new_session: Session| {
            if let Err(e) = persist_session(&BrowserStorage, &CONFIG.storage_keys, &new_session) {
                log::error!("❌ [AUTH] Could not persist session: {}", e);
            }
            session.set(new_session);
        })
    };

    let sign_out = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            if let Err(e) = clear_session(&BrowserStorage, &CONFIG.storage_keys) {
                log::error!("❌ [AUTH] Could not clear session: {}", e);
            }
            log::info!("👋 [AUTH] Logout");
            session.set(Session::anonymous());
        })
    };

    let handle = SessionHandle {
        session: (*session).clone(),
        sign_in,
        sign_out,
    };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    match use_context::<SessionHandle>() {
        Some(handle) => handle,
        None => {
            log::error!("❌ [AUTH] use_session called outside SessionContextProvider");
            SessionHandle::detached()
        }
    }
}
