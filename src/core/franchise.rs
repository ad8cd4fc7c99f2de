use crate::domain::model::TeamStint;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Puzzle-provider franchise codes paired with the canonical stats provider's
/// numeric team identifiers. The puzzle provider keeps a handful of legacy
/// codes (TBD, ANA, FLA, WSN) for franchises the stats provider files under
/// their current names.
const FRANCHISE_TABLE: &[(&str, u32)] = &[
    ("BAL", 110),
    ("NYY", 147),
    ("TBD", 139),
    ("BOS", 111),
    ("TOR", 141),
    //
    ("MIN", 142),
    ("CLE", 114),
    ("DET", 116),
    ("CHW", 145),
    ("KCR", 118),
    //
    ("ANA", 108),
    ("TEX", 140),
    ("HOU", 117),
    ("SEA", 136),
    ("OAK", 133),
    //
    ("ATL", 144),
    ("FLA", 146),
    ("PHI", 143),
    ("NYM", 121),
    ("WSN", 120),
    //
    ("CIN", 113),
    ("MIL", 158),
    ("CHC", 112),
    ("PIT", 134),
    ("STL", 138),
    //
    ("LAD", 119),
    ("SFG", 137),
    ("ARI", 109),
    ("SDP", 135),
    ("COL", 115),
];

fn table() -> &'static HashMap<&'static str, u32> {
    static TABLE: OnceLock<HashMap<&'static str, u32>> = OnceLock::new();
    TABLE.get_or_init(|| FRANCHISE_TABLE.iter().copied().collect())
}

/// `None` means the code is not one we curate for (deprecated or unsupported
/// franchise codes do show up in provider data).
pub fn canonical_team_id(code: &str) -> Option<u32> {
    table().get(code).copied()
}

/// Drops stints whose franchise code is unknown. Not an error: downstream
/// classification must simply never see them.
pub fn retain_known_stints(teams: &mut Vec<TeamStint>) {
    teams.retain(|stint| {
        let known = canonical_team_id(&stint.id).is_some();
        if !known {
            tracing::debug!("Dropping stint with unknown franchise code: {}", stint.id);
        }
        known
    });
}
