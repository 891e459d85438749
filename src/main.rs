use space_cargo::components::App;
use space_cargo::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Space Cargo 360 starting ({})", CONFIG.environment);
    log::debug!("⚙️ [CONFIG] {}", CONFIG.redacted_json());

    yew::Renderer::<App>::new().render();
}
