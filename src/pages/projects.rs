use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils::{create_text, create_with_class};

struct Project {
    name: &'static str,
    summary: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        name: "Portfolio Site",
        summary: "This website: a single-page app compiled from Rust to WebAssembly.",
    },
    Project {
        name: "Task Tracker",
        summary: "A small command-line tool for keeping daily to-do lists in plain text.",
    },
    Project {
        name: "Weather Dashboard",
        summary: "Fetches forecasts and renders them as a compact, responsive dashboard.",
    },
];

pub fn render(document: &Document, section: &Element) -> Result<(), JsValue> {
    let list = create_with_class(document, "div", "project-list")?;
    for project in PROJECTS {
        let card = create_with_class(document, "article", "project-card")?;
        card.append_child(&create_text(document, "h2", "project-name", project.name)?.into())?;
        card.append_child(&create_text(document, "p", "project-summary", project.summary)?.into())?;
        list.append_child(&card)?;
    }
    section.append_child(&list)?;
    Ok(())
}
