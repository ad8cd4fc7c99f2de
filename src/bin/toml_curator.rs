use clap::Parser;
use grid_curator::config::toml_config::TomlConfig;
use grid_curator::utils::{logger, validation::Validate};
use grid_curator::{CuratorEngine, GridPipeline, LocalStorage};

#[derive(Parser)]
#[command(name = "toml-curator")]
#[command(about = "Grid curation driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "curator-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be curated without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-driven grid curation");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No curation will occur");
        perform_dry_run(&config)?;
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    let storage = LocalStorage::new(".".to_string());
    let pipeline = GridPipeline::new(storage, config);
    let engine = CuratorEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Curation completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Curation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!(
        "📋 Curation: {} v{}",
        config.curation.name,
        config.curation.version
    );
    tracing::info!("📡 Roster endpoint: {}", config.source.roster_endpoint);
    tracing::info!("📡 Stats endpoint: {}", config.source.stats_endpoint);
    tracing::info!("📂 Input: {}", config.input.players_file);
    tracing::info!("📁 Output: {}", config.load.output_path);
}

fn perform_dry_run(config: &TomlConfig) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(&config.input.players_file)?;
    let names: Vec<String> = serde_json::from_str(&content)?;
    println!(
        "🔍 Would curate {} player names from {}",
        names.len(),
        config.input.players_file
    );
    for name in names.iter().take(10) {
        println!("   - {}", name);
    }
    if names.len() > 10 {
        println!("   ... and {} more", names.len() - 10);
    }
    Ok(())
}
