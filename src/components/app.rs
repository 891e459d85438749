// ============================================================================
// APP - Root component, route state and session gate
// ============================================================================

use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::components::{AddCargoPage, ArViewPage, CrewAccessPage, DashboardPage, LoginScreen};
use crate::guard::{resolve, GuardOutcome};
use crate::hooks::{use_session, Navigator, SessionContextProvider};
use crate::routes::Route;

fn current_hash_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Route::from_hash(&hash))
        .unwrap_or(Route::Dashboard)
}

fn write_hash(route: Route) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(&route.to_hash()) {
            log::warn!("⚠️ [NAV] Could not update location hash: {:?}", e);
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionContextProvider>
            <Shell />
        </SessionContextProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let session = use_session();
    let route = use_state_eq(current_hash_route);

    let navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| {
            log::info!("🧭 [NAV] -> {}", target.path());
            write_hash(target);
            route.set(target);
        })
    };

    // Direct transitions typed into the address bar
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = Closure::wrap(Box::new(move |_: web_sys::Event| {
                route.set(current_hash_route());
            }) as Box<dyn FnMut(web_sys::Event)>);

            let window = web_sys::window();
            if let Some(w) = &window {
                let _ = w.add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(w) = &window {
                    let _ = w.remove_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref());
                }
                drop(listener);
            }
        });
    }

    let outcome = resolve(*route, &session.session);

    {
        let navigate = navigate.clone();
        use_effect_with(outcome, move |outcome| {
            if let GuardOutcome::Redirect(target) = outcome {
                log::info!("🔒 [NAV] Not authenticated, redirecting to {}", target.path());
                navigate.emit(*target);
            }
            || ()
        });
    }

    let page = match outcome {
        GuardOutcome::Proceed(route) => render_page(route),
        GuardOutcome::Redirect(_) => html! {},
    };

    html! {
        <ContextProvider<Navigator> context={Navigator::new(navigate)}>
            <div class="app">{page}</div>
        </ContextProvider<Navigator>>
    }
}

fn render_page(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginScreen /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::AddCargo => html! { <AddCargoPage /> },
        Route::ArView => html! { <ArViewPage /> },
        Route::CrewAccess => html! { <CrewAccessPage /> },
    }
}
