use leptos::*;

use super::alert_feed_card::AlertFeedCard;
use super::camera_card::CameraCard;
use crate::auth::{logout, LocalSessionStore};
use crate::browser::WebBrowser;
use crate::config::AppConfig;
use crate::models::AlertFeed;
use crate::navigation::{NavButton, NavTarget};

/// Dashboard page: camera feed plus live threat alerts
#[component]
pub fn Dashboard() -> impl IntoView {
    let config = AppConfig::from_env();
    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
    let (feed, set_feed) = create_signal(AlertFeed::default());

    // Alerts arrive over SSE until the page is left
    #[cfg(target_arch = "wasm32")]
    {
        use crate::components::layout::current_time;
        use crate::api::ApiClient;

        let client = ApiClient::with_base_url(config.api_url.clone());
        let subscription = client.subscribe_alerts(move |alert| {
            log::warn!(
                "Threat on camera {}: {} ({})",
                alert.camera,
                alert.threat_type,
                alert.confidence_label()
            );
            let received_at = current_time();
            set_feed.update(|feed| feed.push(alert, received_at));
        });

        match subscription {
            Ok(handle) => on_cleanup(move || handle.abort()),
            Err(e) => log::error!("Could not subscribe to alerts: {}", e),
        }
    }

    let on_logout = move |_| logout(&LocalSessionStore).apply(&WebBrowser);

    view! {
        <div class="dashboard">
            <div class="dashboard-header">
                <h2>"Live Monitoring"</h2>
                <NavButton
                    id="liveCameraBtn"
                    label="Full screen"
                    target=NavTarget::LiveCamera
                    class="refresh-button"
                />
                <button id="logoutBtn" class="refresh-button" type="button" on:click=on_logout>
                    "Logout"
                </button>
            </div>
            <div class="dashboard-grid">
                <CameraCard camera_id=config.camera_id.clone() src=config.video_feed_url() />
                <AlertFeedCard feed=feed />
            </div>
        </div>
    }
}
