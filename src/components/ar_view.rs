// ============================================================================
// AR VIEW - Station map drawn on a canvas with zoom / rotate / select
// ============================================================================
// Loading -> Ready after a simulated init delay. Every change of zoom,
// rotation or selection rebuilds the whole frame.
// ============================================================================

use yew::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlInputElement};
use gloo_timers::callback::Timeout;
use crate::components::PageHeader;
use crate::config::CONFIG;
use crate::models::cargo::demo::cargo_manifest;
use crate::models::{CargoId, CargoItem, CargoStatus};
use crate::scene::canvas::{acquire_context, execute};
use crate::scene::state::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use crate::scene::{build_scene, ArPhase, SceneState};
use crate::utils::filter::{filter_records, StatusFilter};

fn redraw(canvas_ref: &NodeRef, scene: &SceneState, catalog: &[CargoItem]) {
    let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
        return;
    };
    let Some(ctx) = acquire_context(&canvas) else {
        return;
    };

    let commands = build_scene(scene, catalog, canvas.width() as f64, canvas.height() as f64);
    if let Err(e) = execute(&ctx, &commands) {
        log::error!("❌ [AR] Draw failed: {:?}", e);
    }
}

const NO_MATCHING_CARGO: &str = "No cargo items match your search";

/// Sidebar list: name search only, no status filter
fn sidebar_items(catalog: &[CargoItem], query: &str) -> Vec<CargoItem> {
    filter_records(catalog, query, StatusFilter::All)
}

fn status_variant(status: CargoStatus) -> &'static str {
    match status {
        CargoStatus::Warning => "warning",
        _ => "success",
    }
}

#[function_component(ArViewPage)]
pub fn ar_view_page() -> Html {
    let phase = use_state(ArPhase::default);
    let scene = use_state(SceneState::default);
    let search = use_state(String::new);
    let catalog = use_memo((), |_| cargo_manifest());
    let canvas_ref = use_node_ref();

    // Simulated environment init; the timer is dropped if the page goes away first
    {
        let phase = phase.clone();
        use_effect_with((), move |_| {
            log::info!("🛰️ [AR] Initializing AR environment");
            let init = Timeout::new(CONFIG.delays.ar_init_ms, move || {
                log::info!("✅ [AR] Environment ready");
                phase.set(ArPhase::Ready);
            });
            move || drop(init)
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let catalog = catalog.clone();
        use_effect_with((*phase, *scene), move |(phase, scene)| {
            if *phase == ArPhase::Ready {
                redraw(&canvas_ref, scene, &catalog);
            }
            || ()
        });
    }

    let update_scene = |apply: fn(&mut SceneState)| {
        let scene = scene.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *scene;
            apply(&mut next);
            scene.set(next);
        })
    };

    let on_zoom_slider = {
        let scene = scene.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(requested) = input.value().parse::<i32>() {
                let mut next = *scene;
                next.set_zoom(requested);
                scene.set(next);
            }
        })
    };

    let on_select = |id: CargoId| {
        let scene = scene.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *scene;
            next.select(id);
            scene.set(next);
        })
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let listed = sidebar_items(&catalog, &search);
    let selected = scene.selected_item(&catalog).cloned();

    html! {
        <div class="ar-view-page">
            <PageHeader title="AR Cargo View" />

            <div class="ar-layout">
                <div class="ar-stage">
                    if *phase == ArPhase::Loading {
                        <div class="ar-loading">
                            <div class="spinner"></div>
                            <p>{"Initializing AR Environment..."}</p>
                        </div>
                    } else {
                        <canvas ref={canvas_ref} class="ar-canvas"></canvas>
                    }

                    <div class="ar-controls">
                        <div class="control">
                            <div class="control-label">
                                <span>{"Zoom"}</span>
                                <span>{format!("{}%", scene.zoom())}</span>
                            </div>
                            <div class="control-row">
                                <button type="button" class="btn-icon" onclick={update_scene(SceneState::zoom_out)}>{"−"}</button>
                                <input
                                    type="range"
                                    min={MIN_ZOOM.to_string()}
                                    max={MAX_ZOOM.to_string()}
                                    step={ZOOM_STEP.to_string()}
                                    value={scene.zoom().to_string()}
                                    oninput={on_zoom_slider}
                                />
                                <button type="button" class="btn-icon" onclick={update_scene(SceneState::zoom_in)}>{"+"}</button>
                            </div>
                        </div>

                        <div class="control">
                            <div class="control-label">
                                <span>{"Rotation"}</span>
                                <span>{format!("{}°", scene.rotation)}</span>
                            </div>
                            <button type="button" class="btn-icon" onclick={update_scene(SceneState::rotate_step)}>{"⟲"}</button>
                        </div>
                    </div>

                    if let Some(item) = selected {
                        <div class="card ar-detail">
                            <h3>{item.name.clone()}</h3>
                            <dl>
                                <dt>{"Location:"}</dt>
                                <dd>{item.location.clone()}</dd>
                                <dt>{"Quantity:"}</dt>
                                <dd>{format!("{} units", item.quantity)}</dd>
                                <dt>{"Status:"}</dt>
                                <dd>
                                    <span class={classes!("badge", status_variant(item.status))}>
                                        {item.status.as_str().to_uppercase()}
                                    </span>
                                </dd>
                            </dl>
                            <button type="button" class="btn-outline">{"View Details"}</button>
                        </div>
                    }
                </div>

                <aside class="ar-sidebar">
                    <h3>{"Available Cargo"}</h3>
                    <input
                        type="text"
                        placeholder="Search cargo items..."
                        value={(*search).clone()}
                        oninput={on_search}
                    />

                    <div class="ar-item-list">
                        if listed.is_empty() {
                            <div class="empty-state">{NO_MATCHING_CARGO}</div>
                        } else {
                            { for listed.iter().map(|item| html! {
                                <div
                                    key={item.id}
                                    class={classes!("ar-item", (scene.selected == Some(item.id)).then_some("selected"))}
                                    onclick={on_select(item.id)}
                                >
                                    <div class="ar-item-head">
                                        <h4>{item.name.clone()}</h4>
                                        <span class={classes!("badge", status_variant(item.status))}>
                                            {item.status.short_badge()}
                                        </span>
                                    </div>
                                    <div class="ar-item-meta">
                                        <span>{item.location.clone()}</span>
                                        <span>{format!("QTY: {}", item.quantity)}</span>
                                    </div>
                                    <button type="button" class="btn-link">{"Locate"}</button>
                                </div>
                            }) }
                        }
                    </div>

                    <div class="ar-help">
                        <h4>{"AR View Controls:"}</h4>
                        <ul>
                            <li>{"Use the zoom slider to zoom in and out"}</li>
                            <li>{"Rotate the view with the rotation controls"}</li>
                            <li>{"Use the item list to locate specific cargo"}</li>
                            <li>{"Click on cargo indicators to see details"}</li>
                        </ul>
                    </div>
                </aside>
            </div>
        </div>
    }
}
