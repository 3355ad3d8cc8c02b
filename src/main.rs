use creators_dashboard::components::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Panel de Creadores iniciando...");

    yew::Renderer::<App>::new().render();
}
