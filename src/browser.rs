//! Side effects on the browser window: blocking alerts and full-page navigation

/// The two things a click handler can do to the page
pub trait Browser {
    fn alert(&self, message: &str);
    /// Full page load of `path` via `location.href`
    fn navigate(&self, path: &str);
}

/// Browser backed by the real `window`
#[derive(Debug, Clone, Copy, Default)]
pub struct WebBrowser;

impl Browser for WebBrowser {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window, dropping alert: {}", message);
            return;
        };

        if let Err(e) = window.alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", e);
        }
    }

    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window, cannot navigate to {}", path);
            return;
        };

        if let Err(e) = window.location().set_href(path) {
            log::error!("Failed to navigate to {}: {:?}", path, e);
        }
    }
}
