//! Browser location plumbing for each [`RoutingMode`].
//!
//! `History` mode uses `pushState` / `popstate`, `Hash` mode keeps the path in
//! `location.hash` and listens for `hashchange`, `Memory` mode never touches
//! the URL.

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::RoutingMode;
use crate::messages::{Message, NavSource};
use crate::state::dispatch_global_message;

// The installed listener, kept so it can be detached again.
thread_local! {
    static LOCATION_LISTENER: RefCell<Option<(&'static str, Closure<dyn FnMut(web_sys::Event)>)>> =
        const { RefCell::new(None) };
}

/// `"#/about"` -> `"/about"`; an empty hash is the root.
pub fn path_from_hash(hash: &str) -> String {
    let path = hash.strip_prefix('#').unwrap_or(hash);
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

/// The path the browser is currently showing.  `None` in memory mode.
pub fn read_location(mode: RoutingMode) -> Option<String> {
    let location = web_sys::window()?.location();
    match mode {
        RoutingMode::History => location.pathname().ok(),
        RoutingMode::Hash => location.hash().ok().map(|h| path_from_hash(&h)),
        RoutingMode::Memory => None,
    }
}

/// Record `path` as a new history entry without reloading the page.
pub fn push_location(mode: RoutingMode, path: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    match mode {
        RoutingMode::History => window
            .history()?
            .push_state_with_url(&JsValue::NULL, "", Some(path)),
        // The resulting `hashchange` resolves to the current path and is a no-op.
        RoutingMode::Hash => window.location().set_hash(path),
        RoutingMode::Memory => Ok(()),
    }
}

/// Start following back/forward navigation.  Replaces any previous listener.
pub fn listen(mode: RoutingMode) -> Result<(), JsValue> {
    stop_listening();

    let event = match mode {
        RoutingMode::History => "popstate",
        RoutingMode::Hash => "hashchange",
        RoutingMode::Memory => return Ok(()),
    };
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;

    let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
        if let Some(path) = read_location(mode) {
            crate::debug_log!("{} -> {}", event, path);
            dispatch_global_message(Message::navigate(path, NavSource::History));
        }
    }) as Box<dyn FnMut(_)>);

    window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    LOCATION_LISTENER.with(|slot| slot.borrow_mut().replace((event, closure)));
    Ok(())
}

/// Detach the listener installed by [`listen`], if any.
pub fn stop_listening() {
    LOCATION_LISTENER.with(|slot| {
        if let Some((event, closure)) = slot.borrow_mut().take() {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_paths() {
        assert_eq!(path_from_hash(""), "/");
        assert_eq!(path_from_hash("#"), "/");
        assert_eq!(path_from_hash("#/"), "/");
        assert_eq!(path_from_hash("#/skills"), "/skills");
    }
}
