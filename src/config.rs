//! Build-time configuration for the dashboard.
//!
//! A static SPA has no runtime environment, so every setting is captured by
//! `option_env!` when the WASM bundle is compiled. `from_lookup` holds the
//! parsing rules so they can be tested without touching the build env.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

pub const API_BASE_URL_VAR: &str = "NEWS_API_BASE_URL";
pub const ASSET_CLOUD_NAME_VAR: &str = "NEWS_ASSET_CLOUD_NAME";
pub const ASSET_UPLOAD_PRESET_VAR: &str = "NEWS_ASSET_UPLOAD_PRESET";
pub const LOG_LEVEL_VAR: &str = "NEWS_LOG_LEVEL";

/// Credentials for the unauthenticated third-party image host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetHostConfig {
    pub cloud_name: String,
    pub upload_preset: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// REST API origin without a trailing slash.
    pub api_base_url: String,
    /// Direct-upload asset host; `None` when either credential is missing.
    pub asset_host: Option<AssetHostConfig>,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), asset_host: None, log_level: DEFAULT_LOG_LEVEL }
    }
}

impl AppConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `NEWS_API_BASE_URL`: default `http://localhost:5000`
    /// - `NEWS_ASSET_CLOUD_NAME` + `NEWS_ASSET_UPLOAD_PRESET`: both required to enable direct uploads
    /// - `NEWS_LOG_LEVEL`: default `info`
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            API_BASE_URL_VAR => option_env!("NEWS_API_BASE_URL"),
            ASSET_CLOUD_NAME_VAR => option_env!("NEWS_ASSET_CLOUD_NAME"),
            ASSET_UPLOAD_PRESET_VAR => option_env!("NEWS_ASSET_UPLOAD_PRESET"),
            LOG_LEVEL_VAR => option_env!("NEWS_LOG_LEVEL"),
            _ => None,
        })
    }

    pub fn from_lookup<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let api_base_url = non_empty(lookup(API_BASE_URL_VAR))
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();

        let asset_host = match (non_empty(lookup(ASSET_CLOUD_NAME_VAR)), non_empty(lookup(ASSET_UPLOAD_PRESET_VAR))) {
            (Some(cloud_name), Some(upload_preset)) => {
                Some(AssetHostConfig { cloud_name: cloud_name.to_owned(), upload_preset: upload_preset.to_owned() })
            }
            _ => None,
        };

        let log_level = parse_log_level(lookup(LOG_LEVEL_VAR));

        Self { api_base_url, asset_host, log_level }
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    non_empty(raw)
        .and_then(|v| v.parse::<log::Level>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
