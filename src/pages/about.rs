use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils::create_text;

const PARAGRAPHS: &[&str] = &[
    "I am a software developer who enjoys turning rough ideas into polished, well-tested products.",
    "Outside of work I contribute to open source, read about programming languages and mentor newcomers.",
];

pub fn render(document: &Document, section: &Element) -> Result<(), JsValue> {
    for text in PARAGRAPHS {
        section.append_child(&create_text(document, "p", "", text)?.into())?;
    }
    Ok(())
}
