//! Runtime configuration injected by the hosting page as `window.ENV`

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

const DEFAULT_CAMERA_ID: &str = "0";

/// Portal configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix for backend requests; empty means same-origin relative paths
    pub api_url: String,
    /// Camera shown on the dashboard feed
    pub camera_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            camera_id: DEFAULT_CAMERA_ID.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from window.ENV, falling back to defaults per key
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_url: env_value("API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            camera_id: env_value("CAMERA_ID")
                .filter(|id| !id.is_empty())
                .unwrap_or(defaults.camera_id),
        }
    }

    /// Source URL of the live MJPEG feed for the configured camera
    pub fn video_feed_url(&self) -> String {
        format!(
            "{}/video_feed?camera={}",
            self.api_url,
            js_sys::encode_uri_component(&self.camera_id)
        )
    }
}

/// Read a string key from window.ENV
fn env_value(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
        if env.is_undefined() {
            return None;
        }
        js_sys::Reflect::get(&env, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}
