//! Site configuration.
//!
//! Values are layered: built-in defaults, then build-time environment
//! (`SITE_NAME`, `SITE_ROUTING_MODE`, `SITE_CONFIG_JSON`), then the optional
//! `window.__SITE_CONFIG__` object supplied by the host page at runtime.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::constants::{DEFAULT_MOUNT_ID, DEFAULT_SITE_NAME, WINDOW_CONFIG_KEY};
use crate::error::{Result, SiteError};

/// How the current path is read from and written to the browser.
///
/// Deserializes through [`RoutingMode::parse`], so `"Hash"` and `"hash"` are
/// the same mode wherever the value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum RoutingMode {
    /// `history.pushState` + `popstate`; paths look like `/about`.
    #[default]
    History,
    /// `location.hash`; paths look like `#/about`.
    Hash,
    /// No URL synchronisation at all.
    Memory,
}

impl RoutingMode {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "history" => Ok(RoutingMode::History),
            "hash" => Ok(RoutingMode::Hash),
            "memory" => Ok(RoutingMode::Memory),
            other => Err(SiteError::config(format!("unknown routing mode {:?}", other))),
        }
    }

    /// The `href` written on a navigation anchor for `path`.
    pub fn href_for(self, path: &str) -> String {
        match self {
            RoutingMode::Hash => format!("#{}", path),
            RoutingMode::History | RoutingMode::Memory => path.to_string(),
        }
    }
}

impl TryFrom<String> for RoutingMode {
    type Error = SiteError;

    fn try_from(raw: String) -> Result<Self> {
        RoutingMode::parse(&raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Suffix for `document.title`.
    pub site_name: String,
    /// Id of the element the shell is rendered into.
    pub mount_id: String,
    pub mode: RoutingMode,
    /// Enables `debug_log!` output in release builds.
    pub debug: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            mode: RoutingMode::default(),
            debug: false,
        }
    }
}

impl SiteConfig {
    /// Defaults overlaid with the build-time environment.
    pub fn from_build_env() -> Result<Self> {
        Self::from_parts(
            option_env!("SITE_CONFIG_JSON"),
            option_env!("SITE_NAME"),
            option_env!("SITE_ROUTING_MODE"),
        )
    }

    fn from_parts(
        json: Option<&str>,
        site_name: Option<&str>,
        mode: Option<&str>,
    ) -> Result<Self> {
        let mut config = match json {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(raw)?,
            _ => Self::default(),
        };
        if let Some(name) = site_name.filter(|n| !n.trim().is_empty()) {
            config.site_name = name.trim().to_string();
        }
        if let Some(mode) = mode.filter(|m| !m.trim().is_empty()) {
            config.mode = RoutingMode::parse(mode)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| SiteError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read `window.__SITE_CONFIG__` when the host page defines it.  Any
    /// field it omits keeps the build-time value.
    pub fn with_window_overrides(self) -> Result<Self> {
        let Some(window) = web_sys::window() else {
            return Ok(self);
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(WINDOW_CONFIG_KEY))
            .unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return Ok(self);
        }

        let overrides: SiteConfigOverrides = serde_wasm_bindgen::from_value(raw)
            .map_err(|e| SiteError::config(e.to_string()))?;
        let merged = overrides.apply(self);
        merged.validate()?;
        Ok(merged)
    }

    fn validate(&self) -> Result<()> {
        if self.mount_id.trim().is_empty() {
            return Err(SiteError::config("mount_id must not be empty"));
        }
        Ok(())
    }

    /// `"<page title> | <site name>"`
    pub fn document_title(&self, page_title: &str) -> String {
        if self.site_name.is_empty() {
            page_title.to_string()
        } else {
            format!("{} | {}", page_title, self.site_name)
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SiteConfigOverrides {
    site_name: Option<String>,
    mount_id: Option<String>,
    mode: Option<RoutingMode>,
    debug: Option<bool>,
}

impl SiteConfigOverrides {
    fn apply(self, mut base: SiteConfig) -> SiteConfig {
        if let Some(name) = self.site_name {
            base.site_name = name;
        }
        if let Some(id) = self.mount_id {
            base.mount_id = id;
        }
        if let Some(mode) = self.mode {
            base.mode = mode;
        }
        if let Some(debug) = self.debug {
            base.debug = debug;
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.mount_id, "app");
        assert_eq!(config.site_name, "Portfolio");
        assert_eq!(config.mode, RoutingMode::History);
        assert!(!config.debug);
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = SiteConfig::from_json(r#"{"mode": "hash"}"#).unwrap();
        assert_eq!(config.mode, RoutingMode::Hash);
        assert_eq!(config.mount_id, "app");
    }

    #[test]
    fn json_rejects_unknown_mode_and_empty_mount() {
        assert!(SiteConfig::from_json(r#"{"mode": "pushstate"}"#).is_err());
        assert!(SiteConfig::from_json(r#"{"mount_id": "  "}"#).is_err());
    }

    #[test]
    fn json_mode_ignores_case_like_the_env_var() {
        let config = SiteConfig::from_json(r#"{"mode": "Hash"}"#).unwrap();
        assert_eq!(config.mode, RoutingMode::Hash);
        let config = SiteConfig::from_json(r#"{"mode": " MEMORY "}"#).unwrap();
        assert_eq!(config.mode, RoutingMode::Memory);
        assert!(SiteConfig::from_json(r#"{"mode": "Hashes"}"#).is_err());
    }

    #[test]
    fn env_parts_layer_over_json() {
        let config = SiteConfig::from_parts(
            Some(r#"{"site_name": "From JSON", "debug": true}"#),
            Some("Jane Doe"),
            Some("Memory"),
        )
        .unwrap();
        assert_eq!(config.site_name, "Jane Doe");
        assert_eq!(config.mode, RoutingMode::Memory);
        assert!(config.debug);

        let config = SiteConfig::from_parts(None, Some(""), None).unwrap();
        assert_eq!(config, SiteConfig::default());

        assert!(SiteConfig::from_parts(None, None, Some("bogus")).is_err());
    }

    #[test]
    fn overrides_only_touch_present_fields() {
        let overrides = SiteConfigOverrides {
            mode: Some(RoutingMode::Hash),
            ..Default::default()
        };
        let merged = overrides.apply(SiteConfig::default());
        assert_eq!(merged.mode, RoutingMode::Hash);
        assert_eq!(merged.site_name, "Portfolio");
    }

    #[test]
    fn hrefs_follow_the_mode() {
        assert_eq!(RoutingMode::History.href_for("/about"), "/about");
        assert_eq!(RoutingMode::Memory.href_for("/about"), "/about");
        assert_eq!(RoutingMode::Hash.href_for("/about"), "#/about");
    }

    #[test]
    fn document_title_format() {
        let config = SiteConfig::default();
        assert_eq!(config.document_title("Skills"), "Skills | Portfolio");
        let bare = SiteConfig {
            site_name: String::new(),
            ..SiteConfig::default()
        };
        assert_eq!(bare.document_title("Skills"), "Skills");
    }
}
