//! Small crate-wide convenience macros.

/// Console trace that only fires when verbose logging is enabled, either via
/// `SiteConfig::debug` or a debug build.  Off-wasm (host unit tests) the
/// arguments are type-checked but nothing is printed.
///
/// ```rust,ignore
/// debug_log!("navigating to {}", path);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            if $crate::state::verbose_logging() {
                web_sys::console::log_1(&format!($($arg)*).into());
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
