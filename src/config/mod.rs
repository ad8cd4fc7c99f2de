pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "grid-curator")]
#[command(about = "Curates baseball players whose careers can back a trivia grid puzzle")]
pub struct CliConfig {
    /// Roster provider search endpoint
    #[arg(long, default_value = "https://api.sports-reference.com/v1/br/players")]
    pub roster_endpoint: String,

    /// Canonical stats provider people-search endpoint
    #[arg(long, default_value = "https://statsapi.mlb.com/api/v1/people/search")]
    pub stats_endpoint: String,

    /// JSON file holding the player names to curate
    #[arg(long, default_value = "players.json")]
    pub input_file: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "4")]
    pub concurrent_requests: usize,

    /// Pause between roster searches, to stay polite with the provider
    #[arg(long, default_value = "100")]
    pub request_delay_ms: u64,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON instead of the compact format")]
    pub log_json: bool,

    #[arg(long, help = "Log system resource usage during the run")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn roster_endpoint(&self) -> &str {
        &self.roster_endpoint
    }

    fn stats_endpoint(&self) -> &str {
        &self.stats_endpoint
    }

    fn input_file(&self) -> &str {
        &self.input_file
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }

    fn request_delay_ms(&self) -> u64 {
        self.request_delay_ms
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("roster_endpoint", &self.roster_endpoint)?;
        validation::validate_url("stats_endpoint", &self.stats_endpoint)?;
        validation::validate_path("input_file", &self.input_file)?;
        validation::validate_file_extensions(
            "input_file",
            std::slice::from_ref(&self.input_file),
            &["json"],
        )?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_range("concurrent_requests", self.concurrent_requests, 1, 64)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        validation::validate_range("request_delay_ms", self.request_delay_ms, 0, 10_000)?;
        Ok(())
    }
}
