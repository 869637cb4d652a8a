use audiotube_core::config::{AppConfig, ServiceSettings};

pub fn default_service_settings() -> ServiceSettings {
    ServiceSettings {
        base_url: "https://youtube-mp36.p.rapidapi.com".into(),
        api_host: "youtube-mp36.p.rapidapi.com".into(),
    }
}

pub fn default_app_config() -> AppConfig {
    AppConfig {
        service: default_service_settings(),
        api_key_present: false,
    }
}
