use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CuratorError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_CONCURRENT_REQUESTS: usize = 4;
const DEFAULT_REQUEST_DELAY_MS: u64 = 100;
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub curation: CurationInfo,
    pub source: SourceConfig,
    pub input: InputConfig,
    pub load: LoadConfig,
    pub performance: Option<PerformanceConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurationInfo {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub roster_endpoint: String,
    pub stats_endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub request_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub players_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceConfig {
    pub concurrent_requests: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CuratorError::ConfigError {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }
        let content = std::fs::read_to_string(path).map_err(CuratorError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("curation.name", &self.curation.name)?;
        validation::validate_url("source.roster_endpoint", &self.source.roster_endpoint)?;
        validation::validate_url("source.stats_endpoint", &self.source.stats_endpoint)?;
        validation::validate_path("input.players_file", &self.input.players_file)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;

        if let Some(performance) = &self.performance {
            if let Some(concurrent) = performance.concurrent_requests {
                validation::validate_positive_number(
                    "performance.concurrent_requests",
                    concurrent,
                    1,
                )?;
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn roster_endpoint(&self) -> &str {
        &self.source.roster_endpoint
    }

    fn stats_endpoint(&self) -> &str {
        &self.source.stats_endpoint
    }

    fn input_file(&self) -> &str {
        &self.input.players_file
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn concurrent_requests(&self) -> usize {
        self.performance
            .as_ref()
            .and_then(|p| p.concurrent_requests)
            .unwrap_or(DEFAULT_CONCURRENT_REQUESTS)
    }

    fn request_delay_ms(&self) -> u64 {
        self.source
            .request_delay_ms
            .unwrap_or(DEFAULT_REQUEST_DELAY_MS)
    }

    fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}
