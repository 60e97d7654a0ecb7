//! Configuration for the REST transport.

use serde::{Deserialize, Serialize};

/// Where the campaign and checkout endpoints live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the donation API (e.g., <https://api.example.org>)
    pub base_url: String,

    /// Path prefix for campaign lookups; the campaign id is appended
    pub campaigns_path: String,

    /// Path of the checkout-initiation endpoint
    pub checkout_path: String,

    /// Per-request timeout in milliseconds. None means the call runs until the
    /// server answers or the connection drops.
    pub timeout_ms: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            campaigns_path: "/api/campaigns".to_string(),
            checkout_path: "/api/donations/checkout".to_string(),
            timeout_ms: None,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}
