// src/views.rs
//
// Rendering of the navigation shell and its content slot, plus the executor
// for the commands `update` produces.
//
use std::cell::RefCell;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::navbar;
use crate::config::RoutingMode;
use crate::constants::{ATTR_DATA_SLOT, CSS_CONTENT_SLOT, ID_CONTENT_SLOT, ID_SITE_NAV, SLOT_CONTENT};
use crate::dom_utils::{clear_children, create_with_class};
use crate::history;
use crate::messages::Command;
use crate::routes::{NavLink, Page, RouteTable};
use crate::state::AppState;

// Root element of the mounted shell.  Commands look up the nav and the
// content slot inside it, never document-wide.
thread_local! {
    static SHELL_ROOT: RefCell<Option<Element>> = const { RefCell::new(None) };
}

/// What one navigation entry should look like for a given active page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItemView {
    pub label: String,
    pub path: String,
    pub href: String,
    pub page: Page,
    pub active: bool,
}

/// View-model of the navigation list.  Order and text come only from
/// `links`; `active` only moves the marker.
pub fn shell_view(
    links: &[NavLink],
    routes: &RouteTable,
    mode: RoutingMode,
    active: Page,
) -> Vec<NavItemView> {
    links
        .iter()
        .map(|link| {
            let page = routes.resolve(link.path()).page;
            NavItemView {
                label: link.label().to_string(),
                path: link.path().to_string(),
                href: mode.href_for(link.path()),
                page,
                active: active != Page::NotFound && page == active,
            }
        })
        .collect()
}

fn state_view(state: &AppState, active: Page) -> Vec<NavItemView> {
    shell_view(state.links(), state.routes(), state.config().mode, active)
}

/// Replace the contents of `root` with the navigation list followed by an
/// empty content slot.  Returns the slot.
pub fn render_shell(document: &Document, root: &Element, state: &AppState) -> Result<Element, JsValue> {
    clear_children(root)?;

    let nav = navbar::build_navbar(document, &state_view(state, state.active_page()))?;
    root.append_child(&nav)?;

    let slot = create_with_class(document, "main", CSS_CONTENT_SLOT)?;
    slot.set_id(ID_CONTENT_SLOT);
    slot.set_attribute(ATTR_DATA_SLOT, SLOT_CONTENT)?;
    root.append_child(&slot)?;

    SHELL_ROOT.with(|cell| cell.borrow_mut().replace(root.clone()));
    Ok(slot)
}

/// Forget the mounted shell root.
pub fn release_shell() {
    SHELL_ROOT.with(|cell| cell.borrow_mut().take());
}

/// Unmount whatever the slot holds and mount `page` in its place.
pub fn mount_page(document: &Document, slot: &Element, page: Page) -> Result<Element, JsValue> {
    clear_children(slot)?;
    crate::pages::mount_page(document, slot, page)
}

fn shell_root() -> Result<Element, JsValue> {
    SHELL_ROOT
        .with(|cell| cell.borrow().clone())
        .ok_or_else(|| JsValue::from_str("site shell is not mounted"))
}

fn within(root: &Element, selector: &str) -> Result<Element, JsValue> {
    root.query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("{} not found in site root", selector)))
}

/// Execute commands in order; stops at the first DOM failure.
pub fn run_commands(commands: &[Command], state: &AppState) -> Result<(), JsValue> {
    if commands.is_empty() {
        return Ok(());
    }
    let root = shell_root()?;
    let document = root
        .owner_document()
        .ok_or_else(|| JsValue::from_str("site root is not attached to a document"))?;

    for command in commands {
        match command {
            Command::PushHistory(path) => history::push_location(state.config().mode, path)?,
            Command::MountPage(page) => {
                crate::debug_log!("mounting {:?}", page);
                let slot = within(&root, &format!("[{}='{}']", ATTR_DATA_SLOT, SLOT_CONTENT))?;
                mount_page(&document, &slot, *page)?;
            }
            Command::MarkActiveLink(page) => {
                let nav = within(&root, &format!("nav#{}", ID_SITE_NAV))?;
                navbar::mark_active(&nav, &state_view(state, *page))?;
            }
            Command::SetTitle(title) => document.set_title(title),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::site_links;

    fn labels(items: &[NavItemView]) -> Vec<&str> {
        items.iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn list_is_stable_across_pages() {
        let routes = RouteTable::site().unwrap();
        let links = site_links();
        for page in [Page::Home, Page::About, Page::Skills, Page::Projects, Page::NotFound] {
            let items = shell_view(&links, &routes, RoutingMode::History, page);
            assert_eq!(labels(&items), ["Home", "About", "Skills", "Projects"]);
            let hrefs: Vec<&str> = items.iter().map(|i| i.href.as_str()).collect();
            assert_eq!(hrefs, ["/", "/about", "/skills", "/projects"]);
        }
    }

    #[test]
    fn items_carry_their_routed_page() {
        let routes = RouteTable::site().unwrap();
        let items = shell_view(&site_links(), &routes, RoutingMode::Hash, Page::About);
        let pages: Vec<Page> = items.iter().map(|i| i.page).collect();
        assert_eq!(pages, [Page::Home, Page::About, Page::Skills, Page::Projects]);
        // `path` stays the raw route path; only `href` follows the mode
        assert_eq!(items[1].path, "/about");
        assert_eq!(items[1].href, "#/about");
        assert!(items[1].active);
    }

    #[test]
    fn exactly_one_active_entry_for_routed_pages() {
        let routes = RouteTable::site().unwrap();
        let links = site_links();
        let items = shell_view(&links, &routes, RoutingMode::History, Page::Skills);
        let active: Vec<&str> = items
            .iter()
            .filter(|i| i.active)
            .map(|i| i.label.as_str())
            .collect();
        assert_eq!(active, ["Skills"]);

        let items = shell_view(&links, &routes, RoutingMode::History, Page::NotFound);
        assert!(items.iter().all(|i| !i.active));
    }

    #[test]
    fn hash_mode_hrefs() {
        let routes = RouteTable::site().unwrap();
        let items = shell_view(&site_links(), &routes, RoutingMode::Hash, Page::Home);
        assert_eq!(items[2].href, "#/skills");
    }
}
