// src/state.rs
//
// Application state plus the thread-local instance the event handlers use.
//
use std::cell::RefCell;

use crate::config::SiteConfig;
use crate::error::Result;
use crate::messages::Message;
use crate::routes::{NavLink, Page, RouteTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    config: SiteConfig,
    routes: RouteTable,
    links: Vec<NavLink>,
    current_path: String,
    active_page: Page,
    mounted: bool,
}

impl AppState {
    /// Fails when a link targets a path the table does not declare.
    pub fn new(config: SiteConfig, routes: RouteTable, links: Vec<NavLink>) -> Result<Self> {
        routes.check_links(&links)?;
        let (current_path, active_page) = match routes.index() {
            Some(index) => (index.path().to_string(), index.page()),
            None => ("/".to_string(), Page::NotFound),
        };
        Ok(Self {
            config,
            routes,
            links,
            current_path,
            active_page,
            mounted: false,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn active_page(&self) -> Page {
        self.active_page
    }

    /// True once the first page has been mounted.
    pub fn has_mounted(&self) -> bool {
        self.mounted
    }

    pub(crate) fn set_location(&mut self, path: String, page: Page) {
        self.current_path = path;
        self.active_page = page;
        self.mounted = true;
    }

    /// Put the location back to what `previous` showed, after the DOM failed
    /// to follow a navigation.
    pub(crate) fn restore_location(&mut self, previous: &AppState) {
        self.current_path = previous.current_path.clone();
        self.active_page = previous.active_page;
        self.mounted = previous.mounted;
    }
}

// The browser gives us a single thread; event handlers reach the running app
// through this slot.  `None` until `mount_app` installs an instance.
thread_local! {
    pub static APP_STATE: RefCell<Option<AppState>> = const { RefCell::new(None) };
}

pub fn install_app_state(state: AppState) {
    APP_STATE.with(|slot| {
        slot.borrow_mut().replace(state);
    });
}

/// Run `f` against the installed app, if any.
pub fn with_app_state<R>(f: impl FnOnce(&AppState) -> R) -> Option<R> {
    APP_STATE.with(|slot| slot.borrow().as_ref().map(f))
}

/// Whether `debug_log!` should print.  Safe to call while the state is
/// mutably borrowed.
pub fn verbose_logging() -> bool {
    cfg!(debug_assertions)
        || APP_STATE.with(|slot| {
            slot.try_borrow()
                .ok()
                .and_then(|s| s.as_ref().map(|app| app.config().debug))
                .unwrap_or(false)
        })
}

/// Apply `msg` to the global state, then run the resulting commands once the
/// borrow has been released.  When the DOM cannot follow, the location is
/// rolled back so a retry of the same path is not swallowed as a no-op.
pub fn dispatch_global_message(msg: Message) {
    let outcome = APP_STATE.with(|slot| {
        let mut slot = slot.borrow_mut();
        slot.as_mut().map(|state| {
            let previous = state.clone();
            let commands = crate::update::update(state, msg);
            (commands, previous, state.clone())
        })
    });

    let Some((commands, previous, next)) = outcome else {
        web_sys::console::warn_1(&"dispatch before the site was mounted; ignoring".into());
        return;
    };

    if let Err(e) = crate::views::run_commands(&commands, &next) {
        web_sys::console::error_1(&format!("Failed to apply navigation: {:?}", e).into());
        APP_STATE.with(|slot| {
            if let Some(state) = slot.borrow_mut().as_mut() {
                state.restore_location(&previous);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::NavSource;
    use crate::routes::site_links;
    use crate::update::update;

    #[test]
    fn restore_location_undoes_a_navigation() {
        let mut state = AppState::new(
            SiteConfig::default(),
            RouteTable::site().unwrap(),
            site_links(),
        )
        .unwrap();
        update(&mut state, Message::navigate("/", NavSource::Initial));
        let previous = state.clone();

        update(&mut state, Message::navigate("/about", NavSource::Link));
        state.restore_location(&previous);
        assert_eq!(state, previous);

        // The same path is navigable again afterwards
        let commands = update(&mut state, Message::navigate("/about", NavSource::Link));
        assert!(!commands.is_empty());
    }
}
