use figment::providers::{Format, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0: bind address, metrics exposition, logging.
#[derive(Deserialize, Serialize, Debug)]
pub struct ConfigV1 {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ConfigV1 {
    fn default() -> Self {
        ConfigV1 {
            bind_address: default_bind_address(),
            metrics: MetricsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Settings for the metrics layer and its exposition endpoint.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct MetricsConfig {
    /// Service label stamped on every metric family this process emits.
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// Path the rendered snapshot is served on.
    #[serde(default = "default_metrics_path")]
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        MetricsConfig {
            service_name: default_service_name(),
            path: default_metrics_path(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_service_name() -> String {
    "promgreet".to_string()
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

/// Load config from a YAML file named "config.yaml" in the current directory.
///
/// The file is optional; built-in defaults are used when it is missing, so
/// the binary runs with zero configuration. A file that exists but fails to
/// parse is fatal.
pub fn load_config() -> ConfigV1 {
    if !std::path::Path::new("./config.yaml").exists() {
        return ConfigV1::default();
    }

    let figment = Figment::new().merge(Yaml::file("./config.yaml"));
    let config = match figment.extract::<Config>() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };
    match config {
        Config::ConfigV1(c) => c,
    }

    // handle configuration migration between versions here when necessary
}
