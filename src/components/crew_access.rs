// ============================================================================
// CREW ACCESS - Roster with search, status filter and access levels
// ============================================================================

use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use crate::components::PageHeader;
use crate::models::crew::demo::crew_roster;
use crate::models::crew::{access_levels, describe_access, AccessLevelInfo};
use crate::models::{AccessLevel, CrewMember, CrewStatus};
use crate::utils::filter::StatusFilter;
use crate::viewmodels::CrewAccessView;

#[function_component(CrewAccessPage)]
pub fn crew_access_page() -> Html {
    let view = use_state(CrewAccessView::default);
    let roster = use_memo((), |_| crew_roster());
    let catalog = use_memo((), |_| access_levels());

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
            next.status_filter = StatusFilter::from_select(&select.value(), CrewStatus::parse);
            view.set(next);
        })
    };

    let set_dialog = |open: bool| {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*view).clone();
            if open {
                next.open_add_dialog();
            } else {
                next.close_add_dialog();
            }
            view.set(next);
        })
    };

    let visible = view.visible_members(&roster);
    let selected_filter = view.status_filter.to_select(CrewStatus::as_str);

    html! {
        <div class="crew-access-page">
            <PageHeader title="Crew Access Management" />

            <div class="card">
                <div class="card-header">
                    <div class="card-tools">
                        <input
                            type="text"
                            placeholder="Search crew members..."
                            value={view.search_query.clone()}
                            oninput={on_search}
                        />
                        <select onchange={on_status}>
                            <option value="all" selected={selected_filter == "all"}>{"All Status"}</option>
                            { for CrewStatus::ALL.iter().map(|status| html! {
                                <option value={status.as_str()} selected={selected_filter == status.as_str()}>
                                    {status.label()}
                                </option>
                            }) }
                        </select>
                    </div>
                    <button type="button" class="btn-primary" onclick={set_dialog(true)}>
                        {"+ Add Crew Member"}
                    </button>
                </div>

                <table class="crew-table">
                    <thead>
                        <tr>
                            <th>{"Crew Member"}</th>
                            <th>{"Role"}</th>
                            <th>{"Access Level"}</th>
                            <th>{"Status"}</th>
                            <th>{"Last Access"}</th>
                            <th class="align-right">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if visible.is_empty() {
                            <tr>
                                <td colspan="6" class="empty-state">
                                    <p>{"No crew members match your search criteria"}</p>
                                </td>
                            </tr>
                        } else {
                            { for visible.iter().map(|member| crew_row(member, &catalog)) }
                        }
                    </tbody>
                </table>
            </div>

            if view.add_dialog_open {
                { add_member_dialog(&catalog, set_dialog(false)) }
            }

            <section class="access-alerts">
                <h2>{"⚠️ Access Alerts"}</h2>
                <div class="card">
                    <div class="alert alert-warning">
                        <p class="alert-title">{"Multiple Failed Access Attempts"}</p>
                        <p>{"3 failed access attempts for Medical Storage from unrecognized device"}</p>
                        <div class="alert-actions">
                            <button type="button" class="btn-outline">{"View Details"}</button>
                            <button type="button" class="btn-warning">{"Resolve"}</button>
                        </div>
                    </div>
                    <div class="alert alert-success">
                        <p class="alert-title">{"Access Permissions Updated"}</p>
                        <p>{"Crew access levels were successfully updated on 2025-03-28"}</p>
                        <div class="alert-actions">
                            <button type="button" class="btn-outline">{"View Log"}</button>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}

fn crew_row(member: &CrewMember, catalog: &[AccessLevelInfo]) -> Html {
    let full_access = member.access_level == AccessLevel::Full;

    html! {
        <tr key={member.id}>
            <td>
                <div class="crew-member">
                    <span class="avatar">{member.initials()}</span>
                    <span>{member.name.clone()}</span>
                </div>
            </td>
            <td>{member.role.clone()}</td>
            <td>
                <span
                    class={classes!("badge", if full_access { "badge-default" } else { "badge-outline" })}
                    title={describe_access(catalog, member.access_level)}
                >
                    {member.access_level.as_str()}
                </span>
            </td>
            <td>
                <span class={classes!("status-dot", member.status.as_str())}></span>
                <span>{member.status.label()}</span>
            </td>
            <td class="muted">{member.last_access_label()}</td>
            <td class="align-right">
                <div class="row-actions">
                    <button type="button" class="btn-icon" title="Refresh">{"↻"}</button>
                    <button type="button" class="btn-icon" title="Lock">{"🔒"}</button>
                    <button type="button" class="btn-icon danger" title="Revoke">{"✕"}</button>
                </div>
            </td>
        </tr>
    }
}

/// Mock dialog: both buttons only close it
fn add_member_dialog(catalog: &[AccessLevelInfo], on_close: Callback<MouseEvent>) -> Html {
    html! {
        <div class="dialog-backdrop">
            <div class="dialog" role="dialog">
                <h3>{"Add New Crew Member"}</h3>
                <p class="dialog-description">{"Add a new crew member and set their cargo access level"}</p>

                <div class="form-group">
                    <label for="crew-name">{"Full Name"}</label>
                    <input type="text" id="crew-name" placeholder="Enter full name" />
                </div>
                <div class="form-group">
                    <label for="crew-role">{"Role"}</label>
                    <input type="text" id="crew-role" placeholder="Enter crew role" />
                </div>
                <div class="form-group">
                    <label for="crew-access">{"Access Level"}</label>
                    <select id="crew-access">
                        <option value="" selected=true>{"Select access level"}</option>
                        { for catalog.iter().map(|info| html! {
                            <option value={info.level.as_str()} title={info.description}>
                                {info.level.as_str()}
                            </option>
                        }) }
                    </select>
                </div>

                <div class="dialog-footer">
                    <button type="button" class="btn-outline" onclick={on_close.clone()}>{"Cancel"}</button>
                    <button type="button" class="btn-primary" onclick={on_close}>{"Add Crew Member"}</button>
                </div>
            </div>
        </div>
    }
}
