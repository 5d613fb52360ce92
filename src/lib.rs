/// Tab Sidebar - browser sidebar panel listing the current window's tabs
/// Built with Rust + WASM + Yew

mod config;
mod error;
mod host;
mod interaction;
mod reconcile;
mod row_view;
mod sync;
mod tab_data;
mod view_state;
pub mod ui;

pub use config::PanelConfig;
pub use error::PanelError;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
}

// Start the sidebar panel with default settings
#[wasm_bindgen]
pub fn start_panel() {
    mount(PanelConfig::default());
}

// Start the sidebar panel with settings given as JSON, e.g. `{"logLevel": "debug"}`
#[wasm_bindgen]
pub fn start_panel_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = PanelConfig::from_json(config_json)?;
    mount(config);
    Ok(())
}

fn mount(config: PanelConfig) {
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::info!("Starting tab sidebar");
    yew::Renderer::<ui::panel::Panel>::with_props(ui::panel::PanelProps { config }).render();
}
