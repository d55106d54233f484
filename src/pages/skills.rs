use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::text_list;

const SKILLS: &[&str] = &[
    "Rust",
    "WebAssembly",
    "TypeScript",
    "HTML & CSS",
    "SQL",
    "Git",
];

pub fn render(document: &Document, section: &Element) -> Result<(), JsValue> {
    section.append_child(&text_list(document, "skills-list", SKILLS)?.into())?;
    Ok(())
}
