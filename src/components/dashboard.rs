// ============================================================================
// DASHBOARD - Home page: stats, quick actions, recent activity
// ============================================================================

use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use crate::hooks::{use_navigator, use_session};
use crate::models::cargo::demo::cargo_manifest;
use crate::models::{CargoItem, CargoStatus};
use crate::routes::Route;
use crate::utils::filter::StatusFilter;
use crate::viewmodels::DashboardView;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let view = use_state(DashboardView::default);
    let menu_open = use_state(|| false);
    let manifest = use_memo((), |_| cargo_manifest());
    let session = use_session();
    let navigator = use_navigator();

    let on_toggle_emergency = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*view).clone();
            next.toggle_emergency();
            view.set(next);
        })
    };

    let on_bell = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*view).clone();
            next.clear_notifications();
            view.set(next);
        })
    };

    let on_search = {
        let view = view.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*view).clone();
            next.search_query = input.value();
            view.set(next);
        })
    };

    let on_status = {
        let view = view.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*view).clone();
            next.status_filter = StatusFilter::from_select(&select.value(), CargoStatus::parse);
            view.set(next);
        })
    };

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_logout = {
        let sign_out = session.sign_out.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            sign_out.emit(());
            navigator.push(Route::Login);
        })
    };

    let emergency = view.emergency_mode;
    let visible = view.visible_items(&manifest);
    let selected_filter = view.status_filter.to_select(CargoStatus::as_str);

    html! {
        <div class={classes!("dashboard", emergency.then_some("emergency-mode"))}>
            if emergency {
                <div class="emergency-banner">{"⚠️ EMERGENCY MODE ACTIVE"}</div>
            }

            <header class="dashboard-header">
                <div class="brand">
                    <span class="brand-space">{"SPACE"}</span>
                    <span class="brand-cargo">{"CARGO"}</span>
                    <span class="brand-360">{"360"}</span>
                </div>

                <nav class="main-nav">
                    <a class="nav-link">{"HOME"}</a>
                    <a class="nav-link active">{"CARGO"}</a>
                    <a class="nav-link" onclick={navigator.to::<MouseEvent>(Route::ArView)}>{"🛰️ AR VIEW"}</a>
                    <a class="nav-link" onclick={navigator.to::<MouseEvent>(Route::CrewAccess)}>{"👥 CREW"}</a>
                </nav>

                <div class="header-actions">
                    <label class={classes!("emergency-toggle", emergency.then_some("active"))}>
                        {"EMERGENCY"}
                        <button
                            type="button"
                            role="switch"
                            aria-checked={emergency.to_string()}
                            class={classes!("switch", emergency.then_some("on"))}
                            onclick={on_toggle_emergency}
                        />
                    </label>

                    <button
                        type="button"
                        class="btn-bell"
                        title={format!("You have {} notifications", view.notifications)}
                        onclick={on_bell}
                    >
                        {"🔔"}
                        if view.notifications > 0 {
                            <span class="badge-count">{view.notifications}</span>
                        }
                    </button>

                    <div class="user-menu">
                        <button type="button" class="btn-user" onclick={on_toggle_menu}>
                            {format!("{} ›", session.session.display_name())}
                        </button>
                        if *menu_open {
                            <div class="user-menu-content">
                                <button type="button" class="menu-item" onclick={on_logout}>
                                    {"🚪 Logout"}
                                </button>
                            </div>
                        }
                    </div>
                </div>
            </header>

            <section class="hero">
                <h1>{"SPACE CARGO 360: SMART INVENTORY MANAGEMENT OPERATIONS"}</h1>
                <p>{"OPTIMIZE, TRACK, RETRIEVE, AND MANAGE RESOURCES IN SPACE"}</p>
                <div class="hero-actions">
                    <button type="button" class="btn-outline">{"VIEW CARGO ↗"}</button>
                    <button type="button" class="btn-primary" onclick={navigator.to::<MouseEvent>(Route::AddCargo)}>
                        {"+ ADD CARGO"}
                    </button>
                </div>
            </section>

            if emergency {
                <div class="alert alert-destructive" role="alert">
                    <h4>{"Emergency Resources Protocol Activated"}</h4>
                    <p>{"Critical resource allocation mode is now active. All non-essential requests are temporarily suspended."}</p>
                </div>
            }

            <section class="stats-grid">
                <div class="stat-card">
                    <p class="stat-label">{"📦 Total Items"}</p>
                    <h3>{"248"}</h3>
                    <p class="stat-hint">{"Across all categories"}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-label">{"📄 Storage Usage"}</p>
                    <h3>{"78%"}</h3>
                    <p class="stat-hint">{"of Total Capacity"}</p>
                    <progress max="100" value="78"></progress>
                </div>
                <div class="stat-card">
                    <p class="stat-label">{"🕒 Next Resupply"}</p>
                    <h3>{"13 Days"}</h3>
                    <p class="stat-hint">{"Until arrival"}</p>
                </div>
            </section>

            <section class="dashboard-grid">
                <div class="card quick-actions">
                    <h3>{"Quick Actions"}</h3>
                    <div class="quick-actions-grid">
                        <button type="button" class="quick-action" onclick={navigator.to::<MouseEvent>(Route::AddCargo)}>
                            <span class="quick-icon">{"➕"}</span>
                            <span>{"Add New Item"}</span>
                        </button>
                        <button type="button" class="quick-action">
                            <span class="quick-icon">{"🔍"}</span>
                            <span>{"Find Item"}</span>
                        </button>
                        <button type="button" class="quick-action">
                            <span class="quick-icon">{"📄"}</span>
                            <span>{"My Requests"}</span>
                            <span class="quick-hint">{"Awaiting 3 Signoffs"}</span>
                        </button>
                        <button type="button" class="quick-action" onclick={navigator.to::<MouseEvent>(Route::CrewAccess)}>
                            <span class="quick-icon">{"👥"}</span>
                            <span>{"Crew Access"}</span>
                            <span class="quick-hint">{"Manage Permissions"}</span>
                        </button>
                    </div>
                </div>

                <div class="card recent-activity">
                    <div class="card-header">
                        <h3>{"Recent Activity"}</h3>
                        <div class="card-tools">
                            <input
                                type="text"
                                placeholder="Search items..."
                                value={view.search_query.clone()}
                                oninput={on_search}
                            />
                            <select onchange={on_status}>
                                <option value="all" selected={selected_filter == "all"}>{"All Items"}</option>
                                { for CargoStatus::ALL.iter().map(|status| html! {
                                    <option value={status.as_str()} selected={selected_filter == status.as_str()}>
                                        {status.filter_label()}
                                    </option>
                                }) }
                            </select>
                        </div>
                    </div>

                    <div class="activity-list">
                        if visible.is_empty() {
                            <div class="empty-state">{"No items match your search criteria"}</div>
                        } else {
                            { for visible.iter().map(activity_row) }
                        }
                    </div>
                </div>
            </section>
        </div>
    }
}

fn activity_row(item: &CargoItem) -> Html {
    html! {
        <div class="activity-row" key={item.id}>
            <div class="activity-main">
                <span class={classes!("status-badge", item.status.as_str())}>{item.status.as_str()}</span>
                <div>
                    <h4>{item.name.clone()}</h4>
                    <p class="activity-meta">{format!("Last updated: {}", item.last_updated.format("%Y-%m-%d"))}</p>
                </div>
            </div>
            <span class="qty-badge">{format!("Qty: {}", item.quantity)}</span>
        </div>
    }
}
