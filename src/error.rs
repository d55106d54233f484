//! Error types for site construction and configuration.
//!
//! DOM-facing code keeps returning `Result<_, JsValue>`; `SiteError` covers the
//! failures that can be detected before anything touches the document.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// A route path that does not begin with `/`
    #[error("invalid route path {path:?}: paths must start with '/'")]
    InvalidPath { path: String },

    /// Two routes normalise to the same path
    #[error("duplicate route for path {path:?}")]
    DuplicateRoute { path: String },

    #[error("route table must declare at least one route")]
    EmptyRouteTable,

    /// A navigation link points at a path the router does not declare
    #[error("navigation link {label:?} targets undeclared path {path:?}")]
    UnroutedLink { path: String, label: String },

    /// Configuration could not be parsed
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl SiteError {
    pub fn config(message: impl Into<String>) -> Self {
        SiteError::Config {
            message: message.into(),
        }
    }
}

impl From<SiteError> for JsValue {
    fn from(err: SiteError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = SiteError::UnroutedLink {
            path: "/contact".to_string(),
            label: "Contact".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "navigation link \"Contact\" targets undeclared path \"/contact\""
        );
        assert!(SiteError::config("bad mode").to_string().contains("bad mode"));
    }
}
