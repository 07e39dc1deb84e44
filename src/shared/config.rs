//! Application configuration. Transcript service endpoint, timeouts, demo mode.

use serde::Deserialize;

/// Transcript service used when no URL is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:4001";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Base URL of the transcript service. Read from TRANSCRIPTS_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Timeout for each HTTP request, in seconds. Read from TRANSCRIPTS_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Use the seeded in-memory client instead of HTTP. Read from TRANSCRIPTS_DEMO.
    #[serde(default)]
    pub demo: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("TRANSCRIPTS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        // Environment wins over the file.
        c = c.add_source(config::Environment::with_prefix("TRANSCRIPTS").try_parsing(true));
        Self::from_builder(c)
    }

    /// Build from prepared sources. Any value of the wrong type fails the whole load
    /// instead of being dropped.
    pub fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        builder.build()?.try_deserialize()
    }

    /// Returns the service base URL. Defaults to DEFAULT_API_URL.
    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Returns the request timeout. Defaults to DEFAULT_REQUEST_TIMEOUT_SECS; zero is treated as unset.
    pub fn request_timeout_or_default(&self) -> std::time::Duration {
        let secs = self
            .request_timeout_secs
            .filter(|&s| s > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        std::time::Duration::from_secs(secs)
    }

    /// Returns true if demo mode (in-memory client) is enabled.
    pub fn is_demo(&self) -> bool {
        self.demo.unwrap_or(false)
    }
}
