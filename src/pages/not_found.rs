//! Placeholder for paths the route table does not declare.  The shell and its
//! links stay in place; only the content slot shows this page.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils::create_text;

pub fn render(document: &Document, section: &Element) -> Result<(), JsValue> {
    section.append_child(&create_text(
        document,
        "p",
        "",
        "Sorry, there is nothing at this address. Pick a page from the navigation above.",
    )?.into())?;
    Ok(())
}
