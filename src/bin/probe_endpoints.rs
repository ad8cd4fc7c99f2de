use anyhow::Context;

const DEFAULT_ROSTER_ENDPOINT: &str = "https://api.sports-reference.com/v1/br/players";
const DEFAULT_STATS_ENDPOINT: &str = "https://statsapi.mlb.com/api/v1/people/search";

/// A name both providers definitely know about.
const PROBE_NAME: &str = "Babe Ruth";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let roster_endpoint = args
        .next()
        .unwrap_or_else(|| DEFAULT_ROSTER_ENDPOINT.to_string());
    let stats_endpoint = args
        .next()
        .unwrap_or_else(|| DEFAULT_STATS_ENDPOINT.to_string());

    println!("🚀 Probing provider endpoints");

    let client = reqwest::Client::new();

    let response = client
        .get(&roster_endpoint)
        .query(&[("search", PROBE_NAME)])
        .send()
        .await
        .context("roster endpoint unreachable")?;
    println!("📡 roster  {} -> {}", roster_endpoint, response.status());
    let body: serde_json::Value = response
        .json()
        .await
        .context("roster response was not JSON")?;
    let players = body
        .get("players")
        .and_then(|p| p.as_array())
        .map(|a| a.len())
        .unwrap_or(0);
    println!("   {} roster entries for '{}'", players, PROBE_NAME);

    let response = client
        .get(&stats_endpoint)
        .query(&[("names", PROBE_NAME), ("hydrate", "awards")])
        .send()
        .await
        .context("stats endpoint unreachable")?;
    println!("📡 stats   {} -> {}", stats_endpoint, response.status());
    let body: serde_json::Value = response
        .json()
        .await
        .context("stats response was not JSON")?;
    let people = body
        .get("people")
        .and_then(|p| p.as_array())
        .map(|a| a.len())
        .unwrap_or(0);
    println!("   {} canonical candidates for '{}'", people, PROBE_NAME);

    println!("✅ Probe complete");
    Ok(())
}
