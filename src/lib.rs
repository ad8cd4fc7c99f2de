pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::LocalStorage;

pub use core::{curator::CuratorEngine, pipeline::GridPipeline};
pub use utils::error::{CuratorError, Result};
