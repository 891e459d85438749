// ============================================================================
// ADD CARGO - New cargo form with a mock submission
// ============================================================================

use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use gloo_timers::callback::Timeout;
use crate::components::PageHeader;
use crate::config::CONFIG;
use crate::hooks::use_navigator;
use crate::models::{CargoCategory, Priority, StorageRequirement};
use crate::routes::Route;
use crate::viewmodels::{CargoForm, CargoSubmission, SubmissionPhase, MAX_QUANTITY, MIN_QUANTITY};

/// Clone-modify-set on the form held inside the submission state
fn edit_form(
    submission: &UseStateHandle<CargoSubmission>,
    apply: impl FnOnce(&mut CargoForm),
) {
    let mut next = (**submission).clone();
    apply(&mut next.form);
    submission.set(next);
}

#[function_component(AddCargoPage)]
pub fn add_cargo_page() -> Html {
    let submission = use_state(CargoSubmission::default);
    let navigator = use_navigator();

    let on_name = {
        let submission = submission.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit_form(&submission, |form| form.name = input.value());
        })
    };

    let on_category = {
        let submission = submission.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            edit_form(&submission, |form| form.category = CargoCategory::parse(&select.value()));
        })
    };

    let on_quantity = {
        let submission = submission.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value().parse::<i64>().unwrap_or(MIN_QUANTITY as i64);
            edit_form(&submission, |form| form.set_quantity(value));
        })
    };

    let on_priority = |priority: Priority| {
        let submission = submission.clone();
        Callback::from(move |_: Event| {
            edit_form(&submission, |form| form.priority = priority);
        })
    };

    let on_description = {
        let submission = submission.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            edit_form(&submission, |form| form.description = area.value());
        })
    };

    let on_expiration = {
        let submission = submission.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit_form(&submission, |form| form.set_expiration(&input.value()));
        })
    };

    let on_storage = {
        let submission = submission.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            edit_form(&submission, |form| form.storage = StorageRequirement::parse(&select.value()));
        })
    };

    let on_image = |attached: bool| {
        let submission = submission.clone();
        Callback::from(move |_: MouseEvent| {
            edit_form(&submission, |form| form.image_attached = attached);
        })
    };

    let on_submit = {
        let submission = submission.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if submission.phase != SubmissionPhase::Editing {
                return;
            }

            let mut next = (*submission).clone();
            let accepted = next.submit().is_ok();
            submission.set(next.clone());
            if !accepted {
                return;
            }

            let submission = submission.clone();
            let navigator = navigator.clone();
            Timeout::new(CONFIG.delays.submit_ms, move || {
                let mut done = next;
                done.complete();
                let redirect = done.redirect_after_success(&CONFIG.delays);
                submission.set(done);

                if let Some((target, delay_ms)) = redirect {
                    Timeout::new(delay_ms, move || navigator.push(target)).forget();
                }
            }).forget();
        })
    };

    let busy = submission.is_submitting();
    let form = &submission.form;

    if submission.phase == SubmissionPhase::Succeeded {
        return html! {
            <div class="add-cargo-page">
                <PageHeader title="Add New Cargo Item" />
                <div class="card success-card">
                    <div class="success-icon">{"✓"}</div>
                    <h2>{"Cargo Added Successfully"}</h2>
                    <p>{"Your new cargo item has been added to the inventory"}</p>
                    <button type="button" class="btn-primary" onclick={navigator.to::<MouseEvent>(Route::Dashboard)}>
                        {"Return to Dashboard"}
                    </button>
                </div>
            </div>
        };
    }

    html! {
        <div class="add-cargo-page">
            <PageHeader title="Add New Cargo Item" />

            <form class="cargo-form" onsubmit={on_submit}>
                if let Some(error) = &submission.error {
                    <div class="form-error" role="alert">{error.to_string()}</div>
                }

                <div class="card">
                    <h3>{"Cargo Details"}</h3>
                    <p class="card-hint">{"Enter the basic information about the cargo item"}</p>

                    <div class="form-group">
                        <label for="cargo-name">{"Cargo Name "}<span class="required">{"*"}</span></label>
                        <input
                            type="text"
                            id="cargo-name"
                            placeholder="e.g. Water Containers"
                            value={form.name.clone()}
                            oninput={on_name}
                        />
                    </div>

                    <div class="form-group">
                        <label for="category">{"Category "}<span class="required">{"*"}</span></label>
                        <select id="category" onchange={on_category}>
                            <option value="" selected={form.category.is_none()}>{"Select a category"}</option>
                            { for CargoCategory::ALL.iter().map(|category| html! {
                                <option value={category.as_str()} selected={form.category == Some(*category)}>
                                    {category.label()}
                                </option>
                            }) }
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="quantity">{"Quantity "}<span class="required">{"*"}</span></label>
                        <div class="slider-row">
                            <input
                                type="range"
                                id="quantity"
                                min={MIN_QUANTITY.to_string()}
                                max={MAX_QUANTITY.to_string()}
                                step="1"
                                value={form.quantity.to_string()}
                                oninput={on_quantity}
                            />
                            <span class="slider-value">{form.quantity}</span>
                        </div>
                    </div>

                    <div class="form-group">
                        <label>{"Priority Level"}</label>
                        <div class="radio-group">
                            { for Priority::ALL.iter().map(|priority| html! {
                                <label class={classes!("radio", priority.as_str())}>
                                    <input
                                        type="radio"
                                        name="priority"
                                        value={priority.as_str()}
                                        checked={form.priority == *priority}
                                        onchange={on_priority(*priority)}
                                    />
                                    {priority.label()}
                                </label>
                            }) }
                        </div>
                    </div>
                </div>

                <div class="card">
                    <h3>{"Additional Information"}</h3>
                    <p class="card-hint">{"Provide more details about the cargo item"}</p>

                    <div class="form-group">
                        <label for="description">{"Description"}</label>
                        <textarea
                            id="description"
                            placeholder="Enter a description of the cargo item"
                            value={form.description.clone()}
                            oninput={on_description}
                        />
                    </div>

                    <div class="form-group">
                        <label for="expiration-date">{"Expiration Date (if applicable)"}</label>
                        <input
                            type="date"
                            id="expiration-date"
                            value={form.expiration_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()}
                            onchange={on_expiration}
                        />
                    </div>

                    <div class="form-group">
                        <label for="storage-requirements">{"Storage Requirements"}</label>
                        <select id="storage-requirements" onchange={on_storage}>
                            <option value="" selected={form.storage.is_none()}>{"Select storage requirements"}</option>
                            { for StorageRequirement::ALL.iter().map(|storage| html! {
                                <option value={storage.as_str()} selected={form.storage == Some(*storage)}>
                                    {storage.label()}
                                </option>
                            }) }
                        </select>
                    </div>

                    <div class="form-group">
                        <label>{"Cargo Image"}</label>
                        <div class={classes!("image-drop", form.image_attached.then_some("attached"))}>
                            if form.image_attached {
                                <p>{"✓ Image uploaded successfully"}</p>
                                <button type="button" class="btn-link" onclick={on_image(false)}>{"Remove image"}</button>
                            } else {
                                <p>{"Drag and drop an image or click to browse"}</p>
                                <button type="button" class="btn-outline" onclick={on_image(true)}>{"Upload Image"}</button>
                            }
                        </div>
                    </div>
                </div>

                <div class="form-actions">
                    <button type="button" class="btn-outline" onclick={navigator.to::<MouseEvent>(Route::Dashboard)}>
                        {"Cancel"}
                    </button>
                    <button type="submit" class="btn-primary" disabled={busy}>
                        {submission.submit_label()}
                    </button>
                </div>
            </form>
        </div>
    }
}
