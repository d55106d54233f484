use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

// Export convenience macros crate-wide
#[macro_use]
mod macros;

pub mod components;
pub mod config;
pub mod constants;
pub mod dom_utils;
pub mod error;
pub mod history;
pub mod messages;
pub mod pages;
pub mod routes;
pub mod state;
pub mod update;
pub mod views;

use crate::config::SiteConfig;
use crate::constants::WINDOW_READY_KEY;
use crate::messages::{Message, NavSource};
use crate::routes::{site_links, RouteTable};
use crate::state::{dispatch_global_message, install_app_state, with_app_state, AppState, APP_STATE};

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let config = SiteConfig::from_build_env()?.with_window_overrides()?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    mount_app(&document, config)?;

    // Signal to automation/tests that the app finished its initial bootstrap.
    if let Some(win) = web_sys::window() {
        let key = js_sys::JsString::from(WINDOW_READY_KEY);
        let _ = js_sys::Reflect::set(&win, &key, &JsValue::from_bool(true));
    }

    Ok(())
}

/// Render the shell into `config.mount_id` (created under `<body>` when the
/// host page lacks it), install the app state and show the page for the
/// current location.  A previously mounted app is torn down first.
pub fn mount_app(document: &Document, config: SiteConfig) -> Result<(), JsValue> {
    unmount_app(document)?;

    let state = AppState::new(config.clone(), RouteTable::site()?, site_links())?;
    let root = mount_root(document, &config.mount_id)?;
    views::render_shell(document, &root, &state)?;
    install_app_state(state);

    history::listen(config.mode)?;

    let initial = history::read_location(config.mode).unwrap_or_else(|| "/".to_string());
    debug_log!("site mounted in #{} ({:?}), initial path {}", config.mount_id, config.mode, initial);
    dispatch_global_message(Message::navigate(initial, NavSource::Initial));
    Ok(())
}

/// Remove the running app: listeners, click handlers, shell markup and
/// state.  No-op when nothing is mounted.
pub fn unmount_app(document: &Document) -> Result<(), JsValue> {
    let Some(state) = APP_STATE.with(|slot| slot.borrow_mut().take()) else {
        return Ok(());
    };

    history::stop_listening();
    if let Some(root) = document.get_element_by_id(&state.config().mount_id) {
        dom_utils::clear_children(&root)?;
    }
    components::navbar::release_click_handlers();
    views::release_shell();
    Ok(())
}

fn mount_root(document: &Document, mount_id: &str) -> Result<Element, JsValue> {
    if let Some(root) = document.get_element_by_id(mount_id) {
        return Ok(root);
    }
    let root = document.create_element("div")?;
    root.set_id(mount_id);
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no <body>"))?
        .append_child(&root)?;
    Ok(root)
}

/// Programmatic navigation; behaves like activating a navigation link.
#[wasm_bindgen]
pub fn navigate_to(path: &str) {
    dispatch_global_message(Message::navigate(path, NavSource::Link));
}

/// The canonical path currently shown, or an empty string before mount.
#[wasm_bindgen]
pub fn current_path() -> String {
    with_app_state(|state| state.current_path().to_string()).unwrap_or_default()
}
