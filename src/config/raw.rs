use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("beachsync.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub service_guide: Option<ServiceGuide>,
    pub references: Option<References>,
    pub context_broker: Option<ContextBroker>,
    pub beaches: Option<Beaches>,
    pub http: Option<Http>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServiceGuide {
    pub url: String,
    pub local_copy: Option<PathBuf>,
}

impl Default for ServiceGuide {
    fn default() -> Self {
        Config::default()
            .service_guide
            .expect("Service guide configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct References {
    pub file: PathBuf,
}

impl Default for References {
    fn default() -> Self {
        Config::default()
            .references
            .expect("References configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ContextBroker {
    pub url: String,
}

impl Default for ContextBroker {
    fn default() -> Self {
        Config::default()
            .context_broker
            .expect("Context broker configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Beaches {
    pub see_also_base_url: Option<String>,
    pub profile_base_url: Option<String>,
    pub data_provider: Option<String>,
    pub source_prefix: Option<String>,
}

impl Default for Beaches {
    fn default() -> Self {
        Config::default().beaches.expect("Beaches configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Http {
    #[serde(deserialize_with = "deserialize_duration")]
    pub request_timeout: Duration,
}

impl Default for Http {
    fn default() -> Self {
        Config::default().http.expect("HTTP configuration")
    }
}
