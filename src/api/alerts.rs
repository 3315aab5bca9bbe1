//! Live threat alerts over server-sent events

use futures::future::{AbortHandle, Abortable};
use futures::{FutureExt, StreamExt};
use gloo_net::eventsource::futures::EventSource;

use super::client::{ApiClient, ApiError};
use crate::models::ThreatAlert;

pub const ALERTS_PATH: &str = "/alerts";

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
impl ApiClient {
    /// Subscribe to `/alerts` and call `on_alert` for every parsed event.
    ///
    /// The connection stays open until the returned handle is aborted.
    pub fn subscribe_alerts(
        &self,
        on_alert: impl Fn(ThreatAlert) + 'static,
    ) -> Result<AbortHandle, ApiError> {
        let url = self.url(ALERTS_PATH);

        let mut source = EventSource::new(&url).map_err(|e| ApiError::Network(e.to_string()))?;
        let mut messages = source
            .subscribe("message")
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let (handle, registration) = AbortHandle::new_pair();

        let listen = async move {
            // Dropping the source closes the connection
            let _source = source;

            while let Some(next) = messages.next().await {
                let event = match next {
                    Ok((_, event)) => event,
                    Err(e) => {
                        // The browser reconnects on its own
                        log::warn!("Alert stream error: {:?}", e);
                        continue;
                    }
                };

                let Some(data) = event.data().as_string() else {
                    log::warn!("Ignoring non-text alert event");
                    continue;
                };

                match ThreatAlert::from_event_data(&data) {
                    Ok(alert) => on_alert(alert),
                    Err(e) => log::warn!("Skipping malformed alert {:?}: {}", data, e),
                }
            }

            log::info!("Alert stream closed");
        };

        wasm_bindgen_futures::spawn_local(Abortable::new(listen, registration).map(|_| ()));
        log::info!("Subscribed to alerts at {}", url);

        Ok(handle)
    }
}
