use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct CuratorEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> CuratorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting grid curation...");

        println!("Gathering candidate players...");
        let players = self.pipeline.extract().await?;
        println!("Fetched {} candidate records", players.len());
        self.monitor.log_stats("extract");

        println!("Curating...");
        let result = self.pipeline.transform(players).await?;
        println!(
            "Curated {} players ({} skipped)",
            result.curated_players.len(),
            result.skipped.len()
        );
        self.monitor.log_stats("transform");

        println!("Writing output...");
        let output_path = self.pipeline.load(result).await?;
        println!("Output saved to: {}", output_path);

        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
