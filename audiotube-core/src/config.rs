use serde::{Deserialize, Serialize};

/// Where the conversion service lives and how it is addressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Base endpoint of the conversion service.
    pub base_url: String,
    /// Value sent as the service-host identification header.
    pub api_host: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceSettings,

    // Secrets are stored outside this struct at rest.
    #[serde(default)]
    pub api_key_present: bool,
}
