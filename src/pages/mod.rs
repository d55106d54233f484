// src/pages/mod.rs
//
// Page-level views.  Each page takes the shell's content slot and fills it;
// none of them receive anything from the router.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{ATTR_DATA_PAGE, ATTR_DATA_TESTID, CSS_PAGE};
use crate::dom_utils::{create_text, create_with_class};
use crate::routes::Page;

pub mod about;
pub mod home;
pub mod not_found;
pub mod projects;
pub mod skills;

/// Build the page's root `<section>` and append it to `slot`.
pub fn mount_page(document: &Document, slot: &Element, page: Page) -> Result<Element, JsValue> {
    let section = page_section(document, page)?;
    match page {
        Page::Home => home::render(document, &section)?,
        Page::About => about::render(document, &section)?,
        Page::Skills => skills::render(document, &section)?,
        Page::Projects => projects::render(document, &section)?,
        Page::NotFound => not_found::render(document, &section)?,
    }
    slot.append_child(&section)?;
    Ok(section)
}

fn page_section(document: &Document, page: Page) -> Result<Element, JsValue> {
    let section = create_with_class(document, "section", &format!("{} page-{}", CSS_PAGE, page.slug()))?;
    section.set_attribute(ATTR_DATA_PAGE, page.slug())?;
    section.set_attribute(ATTR_DATA_TESTID, &format!("page-{}", page.slug()))?;
    section.append_child(&create_text(document, "h1", "page-title", page.title())?.into())?;
    Ok(section)
}

/// `<ul>` with one `<li>` per entry; shared by the list-style pages.
pub(crate) fn text_list(document: &Document, class: &str, items: &[&str]) -> Result<Element, JsValue> {
    let list = create_with_class(document, "ul", class)?;
    for item in items {
        list.append_child(&create_text(document, "li", "", item)?.into())?;
    }
    Ok(list)
}
