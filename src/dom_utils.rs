//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Small wrappers for the create / clear / activate patterns the shell and
//! pages repeat, so `set_attribute` calls don't spread across the code-base.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{ARIA_CURRENT_PAGE, ATTR_ARIA_CURRENT, CSS_NAV_LINK, CSS_NAV_LINK_ACTIVE};

/// `document.createElement(tag)` with a class name already applied.
pub fn create_with_class(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    el.set_class_name(class);
    Ok(el)
}

/// Like [`create_with_class`] but also sets the text content.
pub fn create_text(
    document: &Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<Element, JsValue> {
    let el = create_with_class(document, tag, class)?;
    el.set_text_content(Some(text));
    Ok(el)
}

/// Remove every child node of `el`.
pub fn clear_children(el: &Element) -> Result<(), JsValue> {
    while let Some(child) = el.first_child() {
        el.remove_child(&child)?;
    }
    Ok(())
}

/// Mark a navigation anchor as the current page.
pub fn set_active(link: &Element) {
    link.set_class_name(CSS_NAV_LINK_ACTIVE);
    let _ = link.set_attribute(ATTR_ARIA_CURRENT, ARIA_CURRENT_PAGE);
}

/// Remove the current-page marker from a navigation anchor.
pub fn set_inactive(link: &Element) {
    link.set_class_name(CSS_NAV_LINK);
    let _ = link.remove_attribute(ATTR_ARIA_CURRENT);
}
