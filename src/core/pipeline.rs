use crate::core::feasibility::{self, Feasibility};
use crate::core::{allstar, franchise, identity, qualify};
use crate::domain::model::{
    CanonicalPlayer, CurationResult, PeopleSearchResponse, PlayerRecord, RosterSearchResponse,
    SkipReason, SkippedPlayer,
};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{CuratorError, Result};
use reqwest::Client;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinSet;

/// Everything the qualification engine needs from the canonical provider in
/// one request: awards plus career and year-by-year hitting/pitching splits.
const HYDRATE_CLAUSE: &str = "awards,stats(group=[hitting,pitching],type=[career,yearByYear])";

const JSONL_FILENAME: &str = "curated_players.jsonl";
const SUMMARY_FILENAME: &str = "curation_summary.csv";

pub struct GridPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> GridPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    async fn search_roster(&self, name: &str) -> Result<Vec<PlayerRecord>> {
        let response = self
            .client
            .get(self.config.roster_endpoint())
            .query(&[("search", identity::normalize_name(name))])
            .timeout(Duration::from_secs(self.config.timeout_seconds()))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CuratorError::ProcessingError {
                message: format!("roster request failed with status: {}", response.status()),
            });
        }

        let body: RosterSearchResponse = response.json().await?;
        Ok(body.players.unwrap_or_default())
    }
}

enum CurationOutcome {
    Curated(Box<PlayerRecord>, Feasibility),
    Skipped(SkippedPlayer),
    Duplicate,
    NotFeasible,
}

async fn fetch_candidates(
    client: &Client,
    endpoint: &str,
    name: &str,
    timeout_seconds: u64,
) -> Result<Vec<CanonicalPlayer>> {
    let response = client
        .get(endpoint)
        .query(&[
            ("names", identity::normalize_name(name).as_str()),
            ("hydrate", HYDRATE_CLAUSE),
        ])
        .timeout(Duration::from_secs(timeout_seconds))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(CuratorError::ProcessingError {
            message: format!("stats request failed with status: {}", response.status()),
        });
    }

    let body: PeopleSearchResponse = response.json().await?;
    Ok(body.people)
}

/// The per-player curation chain: dedup, normalize, cheap feasibility pass,
/// canonical lookup, attribution filter, authoritative pass, qualification.
/// Failures here are player-scoped; nothing propagates to the run.
async fn curate_player(
    client: Client,
    stats_endpoint: String,
    timeout_seconds: u64,
    mut player: PlayerRecord,
    seen_ids: Arc<Mutex<HashSet<String>>>,
) -> CurationOutcome {
    {
        // check-and-insert must be atomic across concurrent tasks
        let mut seen = seen_ids.lock().await;
        if !seen.insert(player.id.clone()) {
            return CurationOutcome::Duplicate;
        }
    }

    franchise::retain_known_stints(&mut player.teams);
    if !feasibility::classify(&player).is_feasible() {
        return CurationOutcome::NotFeasible;
    }

    // The cheap pass came back feasible, so the canonical lookup is worth
    // paying for.
    let candidates =
        match fetch_candidates(&client, &stats_endpoint, &player.name, timeout_seconds).await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!("Stats lookup failed for {}: {}", player.name, e);
                return CurationOutcome::Skipped(SkippedPlayer {
                    name: player.name,
                    reason: SkipReason::StatsLookupFailed,
                });
            }
        };

    let Some(snapshot) = identity::match_identity(&candidates, &player.name, &player.years) else {
        tracing::warn!("Could not find canonical data for {}", player.name);
        return CurationOutcome::Skipped(SkippedPlayer {
            name: player.name,
            reason: SkipReason::NoCanonicalMatch,
        });
    };
    let snapshot = snapshot.clone();

    allstar::retain_earned_all_star_flags(&snapshot, &mut player.teams);
    let verdict = feasibility::classify(&player);
    if !verdict.is_feasible() {
        tracing::info!("🚫 {} filtered after all-star check", player.name);
        return CurationOutcome::Skipped(SkippedPlayer {
            name: player.name,
            reason: SkipReason::DroppedByAllStarCheck,
        });
    }

    qualify::annotate_qualified(&mut player, &snapshot);
    CurationOutcome::Curated(Box::new(player), verdict)
}

fn render_summary_csv(
    curated: &[(PlayerRecord, Feasibility)],
    skipped: &[SkippedPlayer],
) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["name", "id", "years", "teams", "outcome"])?;
    for (player, verdict) in curated {
        writer.write_record([
            player.name.as_str(),
            player.id.as_str(),
            player.years.as_str(),
            &player.teams.len().to_string(),
            verdict.as_str(),
        ])?;
    }
    for skip in skipped {
        writer.write_record([skip.name.as_str(), "", "", "", skip.reason.as_str()])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CuratorError::ProcessingError {
            message: format!("CSV flush failed: {}", e),
        })?;
    String::from_utf8(bytes).map_err(|e| CuratorError::ProcessingError {
        message: format!("summary is not valid UTF-8: {}", e),
    })
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for GridPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<PlayerRecord>> {
        let raw = self.storage.read_file(self.config.input_file()).await?;
        let names: Vec<String> = serde_json::from_slice(&raw)?;
        tracing::info!(
            "📋 Loaded {} player names from {}",
            names.len(),
            self.config.input_file()
        );

        let mut players = Vec::new();
        for (index, name) in names.iter().enumerate() {
            tracing::debug!("📡 Roster search {}/{}: {}", index + 1, names.len(), name);
            match self.search_roster(name).await {
                Ok(mut found) => {
                    if found.is_empty() {
                        tracing::warn!("Got no roster entries for {}", name);
                    }
                    players.append(&mut found);
                }
                Err(e) => {
                    // one bad lookup must not sink the run
                    tracing::warn!("Roster lookup failed for {}: {}", name, e);
                }
            }
            if index + 1 < names.len() && self.config.request_delay_ms() > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.request_delay_ms())).await;
            }
        }

        tracing::info!(
            "📡 Roster search produced {} candidate records",
            players.len()
        );
        Ok(players)
    }

    async fn transform(&self, players: Vec<PlayerRecord>) -> Result<CurationResult> {
        let total = players.len();
        tracing::info!("🧮 Curating {} candidate records", total);

        // The only cross-player shared state: canonical-identity dedup.
        let seen_ids: Arc<Mutex<HashSet<String>>> = Arc::new(Mutex::new(HashSet::new()));
        let limit = self.config.concurrent_requests().max(1);
        let stats_endpoint = self.config.stats_endpoint().to_string();
        let timeout_seconds = self.config.timeout_seconds();

        let mut join_set: JoinSet<(usize, CurationOutcome)> = JoinSet::new();
        let mut outcomes: Vec<Option<CurationOutcome>> =
            std::iter::repeat_with(|| None).take(total).collect();

        for (index, player) in players.into_iter().enumerate() {
            while join_set.len() >= limit {
                if let Some(joined) = join_set.join_next().await {
                    let (done_index, outcome) =
                        joined.map_err(|e| CuratorError::ProcessingError {
                            message: format!("curation task failed: {}", e),
                        })?;
                    outcomes[done_index] = Some(outcome);
                }
            }
            let client = self.client.clone();
            let endpoint = stats_endpoint.clone();
            let seen = Arc::clone(&seen_ids);
            join_set.spawn(async move {
                let outcome = curate_player(client, endpoint, timeout_seconds, player, seen).await;
                (index, outcome)
            });
        }
        while let Some(joined) = join_set.join_next().await {
            let (done_index, outcome) = joined.map_err(|e| CuratorError::ProcessingError {
                message: format!("curation task failed: {}", e),
            })?;
            outcomes[done_index] = Some(outcome);
        }

        // Tasks finish in any order; output stays in input order.
        let mut curated: Vec<(PlayerRecord, Feasibility)> = Vec::new();
        let mut skipped: Vec<SkippedPlayer> = Vec::new();
        let mut duplicates = 0usize;
        let mut infeasible = 0usize;
        for outcome in outcomes.into_iter().flatten() {
            match outcome {
                CurationOutcome::Curated(player, verdict) => curated.push((*player, verdict)),
                CurationOutcome::Skipped(skip) => skipped.push(skip),
                CurationOutcome::Duplicate => duplicates += 1,
                CurationOutcome::NotFeasible => infeasible += 1,
            }
        }

        tracing::info!(
            "✅ Curated {} players ({} infeasible, {} duplicates, {} skipped)",
            curated.len(),
            infeasible,
            duplicates,
            skipped.len()
        );

        let summary_csv = render_summary_csv(&curated, &skipped)?;
        let mut jsonl_output = String::new();
        for (player, _) in &curated {
            jsonl_output.push_str(&serde_json::to_string(player)?);
            jsonl_output.push('\n');
        }

        Ok(CurationResult {
            curated_players: curated.into_iter().map(|(player, _)| player).collect(),
            jsonl_output,
            summary_csv,
            skipped,
        })
    }

    async fn load(&self, result: CurationResult) -> Result<String> {
        let output_path = self.config.output_path();
        let jsonl_path = format!("{}/{}", output_path, JSONL_FILENAME);
        let summary_path = format!("{}/{}", output_path, SUMMARY_FILENAME);

        tracing::debug!(
            "Writing {} curated records to {}",
            result.curated_players.len(),
            jsonl_path
        );
        self.storage
            .write_file(&jsonl_path, result.jsonl_output.as_bytes())
            .await?;
        self.storage
            .write_file(&summary_path, result.summary_csv.as_bytes())
            .await?;

        Ok(output_path.to_string())
    }
}
