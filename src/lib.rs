// ============================================================================
// SENTINEL CONSOLE - Frontend Yew + WASM
// ============================================================================
// - router:     tabla de rutas + guard de navegación
// - stores:     estado de sesión (reducer)
// - viewmodels: lógica de login / logout
// - services:   HTTP y persistencia del token
// - components: páginas y layout
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod router;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;

use wasm_bindgen::prelude::*;

use crate::components::App;
use crate::config::CONFIG;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Sentinel console ({}) -> {}", CONFIG.environment, CONFIG.api_base());

    yew::Renderer::<App>::new().render();
    Ok(())
}
