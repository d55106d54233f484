//! Constants for the site frontend
//!
//! This module centralizes commonly used string literals to prevent typos
//! and enable safe refactoring across the codebase.

// Element IDs
pub const ID_SITE_NAV: &str = "site-nav";
pub const ID_NAV_LIST: &str = "site-nav-list";
pub const ID_CONTENT_SLOT: &str = "site-content";

// CSS Class Names
pub const CSS_NAV: &str = "nav-bar";
pub const CSS_NAV_LIST: &str = "nav-list";
pub const CSS_NAV_ITEM: &str = "nav-item";
pub const CSS_NAV_LINK: &str = "nav-link";
pub const CSS_NAV_LINK_ACTIVE: &str = "nav-link active";
pub const CSS_CONTENT_SLOT: &str = "content-slot";
pub const CSS_PAGE: &str = "page";

// HTML Attributes
pub const ATTR_HREF: &str = "href";
pub const ATTR_ARIA_CURRENT: &str = "aria-current";
pub const ATTR_DATA_TESTID: &str = "data-testid";
pub const ATTR_DATA_PATH: &str = "data-path";
pub const ATTR_DATA_PAGE: &str = "data-page";
pub const ATTR_DATA_SLOT: &str = "data-slot";

pub const SLOT_CONTENT: &str = "content";
pub const ARIA_CURRENT_PAGE: &str = "page";

// Default Values
pub const DEFAULT_SITE_NAME: &str = "Portfolio";
pub const DEFAULT_MOUNT_ID: &str = "app";

// Globals shared with the host page
pub const WINDOW_CONFIG_KEY: &str = "__SITE_CONFIG__";
pub const WINDOW_READY_KEY: &str = "__APP_READY__";
