//! Navigation list for the site shell.
//!
//! Builds `<nav><ul><li><a>…</a></li>…</ul></nav>` in link declaration order
//! and routes plain left clicks through the app instead of letting the
//! browser load a new document.  Modified clicks (new tab, download, …) are
//! left to the browser.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, MouseEvent};

use crate::constants::{
    ATTR_DATA_PAGE, ATTR_DATA_PATH, ATTR_DATA_TESTID, ATTR_HREF, CSS_NAV, CSS_NAV_ITEM,
    CSS_NAV_LINK, CSS_NAV_LIST, ID_NAV_LIST, ID_SITE_NAV,
};
use crate::dom_utils::{create_text, create_with_class, set_active, set_inactive};
use crate::messages::{Message, NavSource};
use crate::state::dispatch_global_message;
use crate::views::NavItemView;

// Click handlers for the live navbar; dropped when the shell is torn down.
thread_local! {
    static NAV_CLICK_HANDLERS: RefCell<Vec<Closure<dyn FnMut(MouseEvent)>>> = const { RefCell::new(Vec::new()) };
}

/// Create the `<nav>` element with one anchor per item, in item order.
pub fn build_navbar(document: &Document, items: &[NavItemView]) -> Result<Element, JsValue> {
    release_click_handlers();

    let nav = create_with_class(document, "nav", CSS_NAV)?;
    nav.set_id(ID_SITE_NAV);

    let list = create_with_class(document, "ul", CSS_NAV_LIST)?;
    list.set_id(ID_NAV_LIST);

    for view in items {
        let item = create_with_class(document, "li", CSS_NAV_ITEM)?;
        let anchor = create_text(document, "a", CSS_NAV_LINK, &view.label)?;

        anchor.set_attribute(ATTR_HREF, &view.href)?;
        anchor.set_attribute(ATTR_DATA_PATH, &view.path)?;
        anchor.set_attribute(ATTR_DATA_PAGE, view.page.slug())?;
        anchor.set_attribute(ATTR_DATA_TESTID, &format!("nav-{}", view.page.slug()))?;

        attach_click_handler(&anchor, view.path.clone())?;

        item.append_child(&anchor)?;
        list.append_child(&item)?;
    }

    nav.append_child(&list)?;
    mark_active(&nav, items)?;
    Ok(nav)
}

fn attach_click_handler(anchor: &Element, path: String) -> Result<(), JsValue> {
    let handler = Closure::wrap(Box::new(move |event: MouseEvent| {
        if !is_plain_primary_click(&event) {
            return;
        }
        event.prevent_default();
        crate::debug_log!("nav link clicked: {}", path);
        dispatch_global_message(Message::navigate(path.clone(), NavSource::Link));
    }) as Box<dyn FnMut(MouseEvent)>);

    anchor.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    NAV_CLICK_HANDLERS.with(|handlers| handlers.borrow_mut().push(handler));
    Ok(())
}

fn is_plain_primary_click(event: &MouseEvent) -> bool {
    event.button() == 0
        && !event.ctrl_key()
        && !event.meta_key()
        && !event.shift_key()
        && !event.alt_key()
}

/// Drop the click closures of the previous navbar.  Only call once its
/// anchors are detached (or about to be replaced).
pub fn release_click_handlers() {
    NAV_CLICK_HANDLERS.with(|handlers| handlers.borrow_mut().clear());
}

/// Apply the `active` flags of `items` to the anchors, pairing them by
/// position.
pub fn mark_active(nav: &Element, items: &[NavItemView]) -> Result<(), JsValue> {
    let anchors = nav.query_selector_all(&format!("a[{}]", ATTR_DATA_PAGE))?;
    if anchors.length() as usize != items.len() {
        return Err(JsValue::from_str("navigation list does not match its view"));
    }
    for (i, view) in items.iter().enumerate() {
        let Some(anchor) = anchors
            .item(i as u32)
            .and_then(|n| n.dyn_into::<Element>().ok())
        else {
            continue;
        };
        if view.active {
            set_active(&anchor);
        } else {
            set_inactive(&anchor);
        }
    }
    Ok(())
}
