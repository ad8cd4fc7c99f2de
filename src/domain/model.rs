use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Career-scoped achievement flags live at the top of a player record.
pub const CAREER_STAT_PREFIX: &str = "career_";
/// Season-scoped achievement flags live on individual team stints.
pub const SEASON_STAT_PREFIX: &str = "season_";
/// World-series championship is season-scoped despite not carrying the prefix.
pub const WS_CHAMP_FLAG: &str = "ws_champ";

pub const ALL_STAR_FLAG: &str = "season_allstar";
pub const SEASON_AVG_STAT: &str = "season_b_avg_300";
pub const CAREER_AVG_STAT: &str = "career_b_avg_300";

/// A flag counts as earned when the provider stored a nonzero value for it.
/// Strings never count, so records that already carry "qualified"/"unqualified"
/// annotations re-classify to nothing instead of to everything.
pub fn flag_is_set(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        _ => false,
    }
}

/// One player's tenure with one franchise, as the puzzle provider reports it.
/// Everything besides the franchise code is a free-form flag map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamStint {
    pub id: String,
    #[serde(flatten)]
    pub flags: HashMap<String, serde_json::Value>,
}

impl TeamStint {
    /// Earned season-scoped achievement flags, sorted for deterministic output.
    pub fn season_awards(&self) -> Vec<String> {
        let mut awards: Vec<String> = self
            .flags
            .iter()
            .filter(|(name, value)| {
                (name.starts_with(SEASON_STAT_PREFIX) || name.starts_with(WS_CHAMP_FLAG))
                    && flag_is_set(value)
            })
            .map(|(name, _)| name.clone())
            .collect();
        awards.sort();
        awards
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: String,
    pub name: String,
    /// Active-year range formatted "start-end", e.g. "1995-2009".
    pub years: String,
    #[serde(default)]
    pub teams: Vec<TeamStint>,
    #[serde(flatten)]
    pub flags: HashMap<String, serde_json::Value>,
}

impl PlayerRecord {
    /// Earned career-scoped achievement flags.
    pub fn career_awards(&self) -> HashSet<String> {
        self.flags
            .iter()
            .filter(|(name, value)| name.starts_with(CAREER_STAT_PREFIX) && flag_is_set(value))
            .map(|(name, _)| name.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualificationStatus {
    Qualified,
    Unqualified,
    Unevaluated,
}

impl QualificationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            QualificationStatus::Qualified => "qualified",
            QualificationStatus::Unqualified => "unqualified",
            QualificationStatus::Unevaluated => "unevaluated",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSearchResponse {
    pub players: Option<Vec<PlayerRecord>>,
}

// -- canonical stats provider snapshot --

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeopleSearchResponse {
    #[serde(default)]
    pub people: Vec<CanonicalPlayer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalPlayer {
    pub full_name: String,
    #[serde(default)]
    pub mlb_debut_date: Option<String>,
    #[serde(default)]
    pub last_played_date: Option<String>,
    #[serde(default)]
    pub awards: Vec<AwardEntry>,
    #[serde(default)]
    pub stats: Vec<StatGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwardEntry {
    pub name: String,
    #[serde(default)]
    pub team: Option<TeamRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatGroup {
    pub group: DisplayName,
    #[serde(rename = "type")]
    pub kind: DisplayName,
    #[serde(default)]
    pub splits: Vec<StatSplit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayName {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// One split row. The stat map stays untyped: the provider mixes numbers and
/// strings and we only ever pull a few numeric fields out with safe defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatSplit {
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub team: Option<TeamRef>,
    #[serde(default)]
    pub stat: HashMap<String, serde_json::Value>,
}

// -- transform output --

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoCanonicalMatch,
    DroppedByAllStarCheck,
    StatsLookupFailed,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::NoCanonicalMatch => "no-canonical-match",
            SkipReason::DroppedByAllStarCheck => "dropped-by-all-star-check",
            SkipReason::StatsLookupFailed => "stats-lookup-failed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SkippedPlayer {
    pub name: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone)]
pub struct CurationResult {
    pub curated_players: Vec<PlayerRecord>,
    pub jsonl_output: String,
    pub summary_csv: String,
    pub skipped: Vec<SkippedPlayer>,
}
