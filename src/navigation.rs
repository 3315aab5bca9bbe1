use leptos::*;

use crate::browser::{Browser, WebBrowser};

/// Pages reachable through plain redirect buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Register,
    Dashboard,
    LiveCamera,
}

impl NavTarget {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::LiveCamera => "/live_camera",
        }
    }
}

/// Send the browser to `target`
pub fn navigate(browser: &impl Browser, target: NavTarget) {
    log::debug!("Navigating to {}", target.path());
    browser.navigate(target.path());
}

/// Button whose only job is a full-page redirect
#[component]
pub fn NavButton(
    id: &'static str,
    label: &'static str,
    target: NavTarget,
    #[prop(default = "nav-button")] class: &'static str,
) -> impl IntoView {
    view! {
        <button id=id class=class type="button" on:click=move |_| navigate(&WebBrowser, target)>
            {label}
        </button>
    }
}
