use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils::create_text;

pub fn render(document: &Document, section: &Element) -> Result<(), JsValue> {
    section.append_child(&create_text(
        document,
        "p",
        "lead",
        "Welcome! I build fast, reliable software for the web and beyond.",
    )?.into())?;
    section.append_child(&create_text(
        document,
        "p",
        "",
        "Use the navigation above to learn more about me, my skills and the projects I have worked on.",
    )?.into())?;
    Ok(())
}
