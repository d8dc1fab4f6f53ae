//! Client Configuration
//!
//! Resolves where the assistant API lives. By default requests go to the
//! page's own origin; a base URL stored in local storage overrides that.

/// Local storage key holding an API base override
pub const API_BASE_STORAGE_KEY: &str = "order_assistant_api_url";

/// Default API base (same origin)
pub const DEFAULT_API_BASE: &str = "";

/// Resolved client configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Build a config from an optional base override
    pub fn from_override(base: Option<String>) -> Self {
        Self {
            api_base: normalize_base(base.as_deref().unwrap_or(DEFAULT_API_BASE)),
        }
    }

    /// Load the config, reading the override from local storage
    pub fn load() -> Self {
        let config = Self::from_override(stored_api_base());
        if config.api_base.is_empty() {
            tracing::debug!("using same-origin API base");
        } else {
            tracing::info!(api_base = %config.api_base, "using API base override");
        }
        config
    }

    /// Chat query endpoint
    pub fn query_url(&self) -> String {
        format!("{}/api/query", self.api_base)
    }

    /// Order creation endpoint
    pub fn add_url(&self) -> String {
        format!("{}/api/add", self.api_base)
    }
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn stored_api_base() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage
        .get_item(API_BASE_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|url| !url.trim().is_empty())
}
