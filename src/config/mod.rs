use anyhow::{anyhow, Result};
use beachsync_core::usecases::BeachSettings;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "beachsync.toml";

const ENV_NAME_SERVICE_GUIDE_URL: &str = "SERVICE_GUIDEN";
const ENV_NAME_CONTEXT_BROKER_URL: &str = "CONTEXT_BROKER";
const ENV_NAME_PROFILE_BASE_URL: &str = "HAV_OCH_VATTEN_PROFILE_URL";
const ENV_NAME_SEE_ALSO_BASE_URL: &str = "SEE_ALSO_URL";
const ENV_NAME_DATA_PROVIDER: &str = "DATA_PROVIDER";
const ENV_NAME_SOURCE_PREFIX: &str = "SOURCE";

#[derive(Debug)]
pub struct Config {
    pub service_guide: ServiceGuide,
    pub references: References,
    pub context_broker: ContextBroker,
    pub beaches: BeachSettings,
    pub http: Http,
}

#[derive(Debug)]
pub struct ServiceGuide {
    pub url: String,
    /// A local copy of the service guide that is used instead of the API.
    pub local_copy: Option<PathBuf>,
}

#[derive(Debug)]
pub struct References {
    pub file: PathBuf,
}

#[derive(Debug)]
pub struct ContextBroker {
    pub url: String,
}

#[derive(Debug)]
pub struct Http {
    pub request_timeout: Duration,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.override_from(|name| env::var(name).ok());
        Ok(cfg)
    }

    /// Applies values of environment variables that are set.
    pub fn override_from<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let overrides = [
            (ENV_NAME_SERVICE_GUIDE_URL, &mut self.service_guide.url),
            (ENV_NAME_CONTEXT_BROKER_URL, &mut self.context_broker.url),
            (ENV_NAME_PROFILE_BASE_URL, &mut self.beaches.profile_base_url),
            (ENV_NAME_SEE_ALSO_BASE_URL, &mut self.beaches.see_also_base_url),
            (ENV_NAME_DATA_PROVIDER, &mut self.beaches.data_provider),
            (ENV_NAME_SOURCE_PREFIX, &mut self.beaches.source_prefix),
        ];
        for (name, value) in overrides {
            if let Some(v) = var(name).filter(|v| !v.is_empty()) {
                log::debug!("{name}={v}");
                *value = v;
            }
        }
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            service_guide,
            references,
            context_broker,
            beaches,
            http,
        } = from;

        let raw::ServiceGuide { url, local_copy } = service_guide.unwrap_or_default();
        if url.is_empty() {
            return Err(anyhow!("Missing service guide URL"));
        }
        let service_guide = ServiceGuide { url, local_copy };

        let raw::References { file } = references.unwrap_or_default();
        let references = References { file };

        let raw::ContextBroker { url } = context_broker.unwrap_or_default();
        if url.is_empty() {
            return Err(anyhow!("Missing context broker URL"));
        }
        let context_broker = ContextBroker { url };

        let raw::Beaches {
            see_also_base_url,
            profile_base_url,
            data_provider,
            source_prefix,
        } = beaches.unwrap_or_default();
        let defaults = BeachSettings::default();
        let beaches = BeachSettings {
            see_also_base_url: see_also_base_url.unwrap_or(defaults.see_also_base_url),
            profile_base_url: profile_base_url.unwrap_or(defaults.profile_base_url),
            data_provider: data_provider.unwrap_or(defaults.data_provider),
            source_prefix: source_prefix.unwrap_or(defaults.source_prefix),
            ..defaults
        };

        let raw::Http { request_timeout } = http.unwrap_or_default();
        if request_timeout.is_zero() {
            return Err(anyhow!("The request timeout must not be zero"));
        }
        let http = Http { request_timeout };

        Ok(Self {
            service_guide,
            references,
            context_broker,
            beaches,
            http,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = Some(Path::new("does-not-exist.toml"));
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(cfg.context_broker.url, "http://context-broker");
        assert_eq!(cfg.references.file, Path::new("/opt/diwise/config/lookup.csv"));
        assert_eq!(cfg.http.request_timeout, Duration::from_secs(30));
        assert_eq!(cfg.beaches, BeachSettings::default());
        assert!(Config::try_load_from_file_or_default(file).is_ok());
    }

    #[test]
    fn load_partial_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("beachsync.toml");
        fs::write(
            &path,
            r#"
            [context-broker]
            url = "http://localhost:8081"

            [beaches]
            data-provider = "Göteborgs Stad"

            [http]
            request-timeout = "10s"
            "#,
        )
        .unwrap();
        let raw_config: raw::Config = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let cfg = Config::try_from(raw_config).unwrap();
        assert_eq!(cfg.context_broker.url, "http://localhost:8081");
        assert_eq!(cfg.beaches.data_provider, "Göteborgs Stad");
        assert_eq!(
            cfg.beaches.profile_base_url,
            BeachSettings::default().profile_base_url
        );
        assert_eq!(cfg.http.request_timeout, Duration::from_secs(10));
        assert_eq!(
            cfg.service_guide.local_copy,
            Some(PathBuf::from("/opt/diwise/config/serviceguiden.json"))
        );
    }

    #[test]
    fn override_from_environment() {
        let mut cfg = Config::try_from(raw::Config::default()).unwrap();
        let vars: HashMap<&str, &str> = [
            ("CONTEXT_BROKER", "http://broker:8080"),
            ("SOURCE", "se:test:"),
            ("DATA_PROVIDER", ""),
        ]
        .into_iter()
        .collect();
        cfg.override_from(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(cfg.context_broker.url, "http://broker:8080");
        assert_eq!(cfg.beaches.source_prefix, "se:test:");
        assert_eq!(cfg.beaches.data_provider, "ServiceGuiden");
    }
}
