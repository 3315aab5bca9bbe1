use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Most alerts kept on the dashboard at once
pub const MAX_FEED_ENTRIES: usize = 50;

/// Threat detection pushed by the backend on `/alerts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatAlert {
    pub camera: String,
    pub threat_type: String,
    /// Percentage, already rounded to two decimals by the detector
    pub confidence: f64,
    /// Path of the saved clip, if one was written
    #[serde(default)]
    pub clip: Option<String>,
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
impl ThreatAlert {
    /// Parse the `data` payload of an alert event
    pub fn from_event_data(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }

    pub fn confidence_label(&self) -> String {
        format!("{:.1}%", self.confidence)
    }
}

/// Alert plus the local time it reached the browser
#[derive(Debug, Clone, PartialEq)]
pub struct AlertEntry {
    pub alert: ThreatAlert,
    pub received_at: String,
}

/// Newest-first list of recent alerts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertFeed {
    entries: VecDeque<AlertEntry>,
}

impl AlertFeed {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn push(&mut self, alert: ThreatAlert, received_at: impl Into<String>) {
        self.entries.push_front(AlertEntry {
            alert,
            received_at: received_at.into(),
        });
        self.entries.truncate(MAX_FEED_ENTRIES);
    }

    pub fn entries(&self) -> Vec<AlertEntry> {
        self.entries.iter().cloned().collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
