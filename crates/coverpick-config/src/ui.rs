use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_copy_ack_ms() -> u64 {
    2000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long the "copied" acknowledgement stays visible
    #[serde(default = "default_copy_ack_ms")]
    pub copy_ack_ms: u64,
    /// Where to write the rendered widget markup, if anywhere
    pub html_out: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            copy_ack_ms: default_copy_ack_ms(),
            html_out: None,
        }
    }
}

impl UiConfig {
    pub fn new() -> Self {
        let copy_ack_ms = env::var("COPY_ACK_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_copy_ack_ms);

        Self {
            copy_ack_ms,
            html_out: None,
        }
    }

    pub fn copy_ack(&self) -> Duration {
        Duration::from_millis(self.copy_ack_ms)
    }
}
