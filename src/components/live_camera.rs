use leptos::*;

use super::dashboard::CameraCard;
use crate::config::AppConfig;
use crate::navigation::{NavButton, NavTarget};

/// Single camera view without the alert feed
#[component]
pub fn LiveCamera() -> impl IntoView {
    let config = AppConfig::from_env();

    view! {
        <div class="live-camera">
            <div class="dashboard-header">
                <h2>"Live Camera"</h2>
                <NavButton
                    id="dashboardRedirect"
                    label="Back to dashboard"
                    target=NavTarget::Dashboard
                    class="refresh-button"
                />
            </div>
            <CameraCard camera_id=config.camera_id.clone() src=config.video_feed_url() />
        </div>
    }
}
