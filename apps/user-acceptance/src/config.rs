//! Environment-driven settings for the harness.

/// Runtime settings for a scenario run.
#[derive(Debug, Clone, Default)]
pub struct HarnessConfig {
    /// When set, scenarios call this URL instead of the embedded mock
    /// endpoint.
    pub base_url_override: Option<String>,
}

impl HarnessConfig {
    /// Load settings from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url_override: std::env::var("USER_SERVICE_URL").ok(),
        }
    }
}
