use crate::core::franchise;
use crate::domain::model::{
    CanonicalPlayer, PlayerRecord, QualificationStatus, StatSplit, CAREER_AVG_STAT,
    SEASON_AVG_STAT,
};
use std::collections::HashMap;

const HITTING_GROUP: &str = "hitting";
const CAREER_TYPE: &str = "career";
const YEAR_BY_YEAR_TYPE: &str = "yearByYear";

/// Minimum career plate appearances for the career batting-average award.
const CAREER_PA_FLOOR: f64 = 3000.0;
/// Plate appearances per scheduled game required for rate-stat qualification.
const PA_PER_GAME: f64 = 3.1;

/// Scheduled games for a season. Strike years and the pandemic season ran
/// short; 1961-62 expansion settled the modern 162.
pub fn games_in_season(year: i32) -> u32 {
    match year {
        2020 => 60,
        1994 => 112,
        1995 => 144,
        y if y >= 1962 => 162,
        _ => 154,
    }
}

/// Minimum qualifying plate appearances for a season.
pub fn min_plate_appearances(year: i32) -> f64 {
    f64::from(games_in_season(year)) * PA_PER_GAME
}

/// The provider mixes JSON numbers and stringified numbers in stat maps.
fn stat_f64(stat: &HashMap<String, serde_json::Value>, key: &str) -> Option<f64> {
    match stat.get(key)? {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Season-scoped qualification for one split. Counting stats are earned-or-not
/// as flags and always qualify; only the batting-average threshold carries a
/// minimum-volume requirement.
fn split_qualifies(stat_name: &str, split: &StatSplit) -> bool {
    if stat_name != SEASON_AVG_STAT {
        return true;
    }

    let year = split
        .season
        .as_deref()
        .and_then(|s| s.parse::<i32>().ok())
        .unwrap_or(0);
    let plate_appearances = stat_f64(&split.stat, "plateAppearances").unwrap_or(0.0);
    let threshold = min_plate_appearances(year);

    if plate_appearances < threshold {
        // Thin sample: rate the season as if the at-bat count were exactly the
        // qualifying volume. Crude, but it matches the upstream provider's cut
        // and puzzle answers have to agree with it.
        let hits = stat_f64(&split.stat, "hits").unwrap_or(0.0);
        let hypothetical_avg = hits / threshold;
        if hypothetical_avg < 0.3 {
            return false;
        }
    }
    true
}

fn career_stat_qualifies(stat_name: &str, career_hitting: &HashMap<String, serde_json::Value>) -> bool {
    if stat_name != CAREER_AVG_STAT {
        return true;
    }
    let plate_appearances = stat_f64(career_hitting, "plateAppearances").unwrap_or(CAREER_PA_FLOOR);
    plate_appearances >= CAREER_PA_FLOOR
}

fn status_value(qualified: bool) -> serde_json::Value {
    let status = if qualified {
        QualificationStatus::Qualified
    } else {
        QualificationStatus::Unqualified
    };
    serde_json::Value::String(status.as_str().to_string())
}

/// Rewrites every surviving achievement flag on the record to
/// "qualified"/"unqualified". Only hitting data is consulted: every pitching
/// season award is a counting stat. Revisit if the puzzle provider brings back
/// ERA.
pub fn annotate_qualified(player: &mut PlayerRecord, snapshot: &CanonicalPlayer) {
    let mut career_hitting: HashMap<String, serde_json::Value> = HashMap::new();
    let mut season_hitting: Vec<StatSplit> = Vec::new();

    for group in &snapshot.stats {
        if group.group.display_name != HITTING_GROUP {
            continue;
        }
        match group.kind.display_name.as_str() {
            CAREER_TYPE => {
                if let Some(split) = group.splits.first() {
                    career_hitting = split.stat.clone();
                }
            }
            YEAR_BY_YEAR_TYPE => season_hitting = group.splits.clone(),
            _ => {}
        }
    }

    for stint in &mut player.teams {
        let Some(canonical_id) = franchise::canonical_team_id(&stint.id) else {
            continue;
        };

        let seasons_with_team: Vec<&StatSplit> = season_hitting
            .iter()
            .filter(|split| split.season.is_some())
            .filter(|split| split.team.as_ref().map(|team| team.id) == Some(canonical_id))
            .collect();

        for award in stint.season_awards() {
            // A player traded mid-season who clears the volume and average
            // thresholds only in aggregate ends up unqualified with both
            // teams. The upstream puzzle provider reads it the same way, so
            // the behavior stays.
            let qualified = award != SEASON_AVG_STAT
                || seasons_with_team
                    .iter()
                    .any(|split| split_qualifies(&award, split));
            stint.flags.insert(award, status_value(qualified));
        }
    }

    for award in player.career_awards() {
        let qualified = career_stat_qualifies(&award, &career_hitting);
        player.flags.insert(award, status_value(qualified));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DisplayName, StatGroup, TeamRef, TeamStint};
    use serde_json::json;

    #[test]
    fn season_length_lookup() {
        assert_eq!(games_in_season(2020), 60);
        assert_eq!(games_in_season(1994), 112);
        assert_eq!(games_in_season(1995), 144);
        assert_eq!(games_in_season(1962), 162);
        assert_eq!(games_in_season(2019), 162);
        assert_eq!(games_in_season(1961), 154);
        assert_eq!(games_in_season(1900), 154);
    }

    fn avg_split(season: &str, team_id: u32, plate_appearances: f64, hits: f64) -> StatSplit {
        StatSplit {
            season: Some(season.to_string()),
            team: Some(TeamRef { id: team_id }),
            stat: [
                ("plateAppearances".to_string(), json!(plate_appearances)),
                ("hits".to_string(), json!(hits)),
                ("avg".to_string(), json!(".312")),
            ]
            .into_iter()
            .collect(),
        }
    }

    #[test]
    fn full_volume_season_qualifies() {
        // 162 * 3.1 = 502.2 plate appearances
        let split = avg_split("2019", 147, 502.2, 150.0);
        assert!(split_qualifies(SEASON_AVG_STAT, &split));
    }

    #[test]
    fn thin_season_with_strong_hypothetical_average_qualifies() {
        // 200/502.2 = .398 against the stand-in at-bat count
        let split = avg_split("2019", 147, 400.0, 200.0);
        assert!(split_qualifies(SEASON_AVG_STAT, &split));
    }

    #[test]
    fn thin_season_with_weak_hypothetical_average_does_not_qualify() {
        // 120/502.2 = .239
        let split = avg_split("2019", 147, 400.0, 120.0);
        assert!(!split_qualifies(SEASON_AVG_STAT, &split));
    }

    #[test]
    fn shortened_season_uses_its_own_threshold() {
        // 2020: 60 * 3.1 = 186 plate appearances suffice
        let split = avg_split("2020", 147, 186.0, 40.0);
        assert!(split_qualifies(SEASON_AVG_STAT, &split));
    }

    #[test]
    fn counting_stats_always_qualify() {
        let split = avg_split("2019", 147, 12.0, 1.0);
        assert!(split_qualifies("season_b_hr_40", &split));
        assert!(split_qualifies("ws_champ", &split));
    }

    fn snapshot_with(career_pa: Option<f64>, splits: Vec<StatSplit>) -> CanonicalPlayer {
        let mut career_stat: HashMap<String, serde_json::Value> = HashMap::new();
        if let Some(pa) = career_pa {
            career_stat.insert("plateAppearances".to_string(), json!(pa));
        }
        CanonicalPlayer {
            full_name: "Test Player".to_string(),
            mlb_debut_date: None,
            last_played_date: None,
            awards: vec![],
            stats: vec![
                StatGroup {
                    group: DisplayName {
                        display_name: HITTING_GROUP.to_string(),
                    },
                    kind: DisplayName {
                        display_name: CAREER_TYPE.to_string(),
                    },
                    splits: vec![StatSplit {
                        season: None,
                        team: None,
                        stat: career_stat,
                    }],
                },
                StatGroup {
                    group: DisplayName {
                        display_name: HITTING_GROUP.to_string(),
                    },
                    kind: DisplayName {
                        display_name: YEAR_BY_YEAR_TYPE.to_string(),
                    },
                    splits,
                },
            ],
        }
    }

    fn player_with(stint_flags: &[(&str, &[&str])], career_flags: &[&str]) -> PlayerRecord {
        PlayerRecord {
            id: "p".to_string(),
            name: "Test Player".to_string(),
            years: "1990-2005".to_string(),
            teams: stint_flags
                .iter()
                .map(|(id, flags)| TeamStint {
                    id: id.to_string(),
                    flags: flags.iter().map(|f| (f.to_string(), json!(1))).collect(),
                })
                .collect(),
            flags: career_flags
                .iter()
                .map(|f| (f.to_string(), json!(1)))
                .collect(),
        }
    }

    #[test]
    fn career_average_requires_three_thousand_plate_appearances() {
        let mut qualified = player_with(&[], &["career_b_avg_300"]);
        annotate_qualified(&mut qualified, &snapshot_with(Some(3000.0), vec![]));
        assert_eq!(qualified.flags["career_b_avg_300"], json!("qualified"));

        let mut unqualified = player_with(&[], &["career_b_avg_300"]);
        annotate_qualified(&mut unqualified, &snapshot_with(Some(2999.0), vec![]));
        assert_eq!(unqualified.flags["career_b_avg_300"], json!("unqualified"));
    }

    #[test]
    fn absent_career_plate_appearances_default_to_qualified() {
        let mut player = player_with(&[], &["career_b_avg_300"]);
        annotate_qualified(&mut player, &snapshot_with(None, vec![]));
        assert_eq!(player.flags["career_b_avg_300"], json!("qualified"));
    }

    #[test]
    fn other_career_awards_qualify_automatically() {
        let mut player = player_with(&[], &["career_b_h_3000", "career_award_hof"]);
        annotate_qualified(&mut player, &snapshot_with(Some(0.0), vec![]));
        assert_eq!(player.flags["career_b_h_3000"], json!("qualified"));
        assert_eq!(player.flags["career_award_hof"], json!("qualified"));
    }

    #[test]
    fn season_average_is_proven_by_a_qualifying_split_with_that_team() {
        let splits = vec![
            // qualifying year with NYY (147), junk year with BOS (111)
            avg_split("2019", 147, 600.0, 190.0),
            avg_split("2018", 111, 100.0, 20.0),
        ];
        let mut player = player_with(
            &[
                ("NYY", &["season_b_avg_300"]),
                ("BOS", &["season_b_avg_300"]),
            ],
            &[],
        );
        annotate_qualified(&mut player, &snapshot_with(None, splits));

        assert_eq!(player.teams[0].flags["season_b_avg_300"], json!("qualified"));
        assert_eq!(
            player.teams[1].flags["season_b_avg_300"],
            json!("unqualified")
        );
    }

    #[test]
    fn season_average_with_no_splits_for_the_team_is_unqualified() {
        let mut player = player_with(&[("CHC", &["season_b_avg_300"])], &[]);
        annotate_qualified(&mut player, &snapshot_with(None, vec![]));
        assert_eq!(
            player.teams[0].flags["season_b_avg_300"],
            json!("unqualified")
        );
    }

    #[test]
    fn counting_season_awards_are_rewritten_as_qualified() {
        let mut player = player_with(&[("NYY", &["season_b_hr_40", "ws_champ"])], &[]);
        annotate_qualified(&mut player, &snapshot_with(None, vec![]));
        assert_eq!(player.teams[0].flags["season_b_hr_40"], json!("qualified"));
        assert_eq!(player.teams[0].flags["ws_champ"], json!("qualified"));
    }

    #[test]
    fn stringified_numbers_in_splits_are_read() {
        let split = StatSplit {
            season: Some("2019".to_string()),
            team: Some(TeamRef { id: 147 }),
            stat: [
                ("plateAppearances".to_string(), json!("650")),
                ("hits".to_string(), json!("200")),
            ]
            .into_iter()
            .collect(),
        };
        assert!(split_qualifies(SEASON_AVG_STAT, &split));
    }
}
