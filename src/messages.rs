// src/messages.rs
//
// The events the site reacts to, and the side effects the reducer asks for.
//
use crate::routes::Page;

/// Where a navigation request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSource {
    /// First render after bootstrap
    Initial,
    /// A navigation link (or `navigate_to`)
    Link,
    /// Browser back/forward or a hash edit
    History,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Navigate { path: String, source: NavSource },
}

impl Message {
    pub fn navigate(path: impl Into<String>, source: NavSource) -> Self {
        Message::Navigate {
            path: path.into(),
            source,
        }
    }
}

/// Side effects executed after the state borrow is released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Record a new browser history entry for the path
    PushHistory(String),
    /// Replace the content slot with the page
    MountPage(Page),
    /// Move the active marker in the navigation list
    MarkActiveLink(Page),
    SetTitle(String),
}
