use anyhow::{anyhow, Context as _, Result};
use geochain_core::{
    entities::ProviderKind,
    settings::{config_key, SettingsMap},
    usecases::GeocodeRequest,
};
use geochain_gateways::http::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geochain.toml";

const ENV_NAME_PROVIDERS: &str = "GEOCODING_PROVIDERS";
const ENV_NAME_ADAPTER: &str = "GEOCODING_ADAPTER";

#[derive(Debug)]
pub struct Config {
    pub geocoding: Geocoding,
    pub http: Http,
    /// Provider parameters by lookup key.
    pub settings: SettingsMap,
}

#[derive(Debug)]
pub struct Geocoding {
    /// Space- or comma-separated provider names.
    pub providers: String,
    pub adapter: String,
}

#[derive(Debug)]
pub struct Http {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Config {
    /// Load the given file, [`DEFAULT_CONFIG_FILE_NAME`] or
    /// the built-in defaults, with environment overrides applied.
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let raw_config = match file_path {
            Some(file_path) => {
                let file_path = file_path.as_ref();
                let cfg_string = fs::read_to_string(file_path)
                    .with_context(|| format!("Unable to read {}", file_path.display()))?;
                toml::from_str(&cfg_string)?
            }
            None => {
                log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
                match fs::read_to_string(DEFAULT_CONFIG_FILE_NAME) {
                    Ok(cfg_string) => toml::from_str(&cfg_string)?,
                    Err(err) if err.kind() == ErrorKind::NotFound => {
                        log::info!(
                            "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                        );
                        raw::Config::default()
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides(|name| env::var(name).ok());
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(providers) = var(ENV_NAME_PROVIDERS) {
            self.geocoding.providers = providers;
        }
        if let Some(adapter) = var(ENV_NAME_ADAPTER) {
            self.geocoding.adapter = adapter;
        }
        for kind in ProviderKind::all() {
            for param in kind.params() {
                let key = config_key(kind.name(), param);
                if let Some(value) = var(&key) {
                    log::debug!("Use {key} from the environment");
                    self.settings.insert(key, value);
                }
            }
        }
    }

    pub fn geocode_request(&self) -> GeocodeRequest {
        GeocodeRequest::from_config(&self.geocoding.providers, &self.geocoding.adapter)
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            geocoding,
            http,
            settings,
        } = from;

        let raw::Geocoding { providers, adapter } = geocoding.unwrap_or_default();
        let geocoding = Geocoding {
            providers: providers.unwrap_or_default(),
            adapter: adapter.unwrap_or_default(),
        };

        let raw::Http {
            timeout,
            user_agent,
        } = http.unwrap_or_default();
        let timeout = timeout
            .or_else(|| raw::Http::default().timeout)
            .unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(anyhow!("The HTTP timeout must not be zero"));
        }
        let http = Http {
            timeout,
            user_agent: user_agent
                .or_else(|| raw::Http::default().user_agent)
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
        };

        let settings = settings
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| match value {
                toml::Value::String(value) => Ok((key, value)),
                toml::Value::Integer(_) | toml::Value::Float(_) | toml::Value::Boolean(_) => {
                    Ok((key, value.to_string()))
                }
                _ => Err(anyhow!("Invalid value of setting '{key}'")),
            })
            .collect::<Result<SettingsMap>>()?;

        Ok(Self {
            geocoding,
            http,
            settings,
        })
    }
}
