use crate::domain::model::PlayerRecord;
use std::collections::{HashMap, HashSet};

/// Whether a player's record can back a valid puzzle, and of which kind.
///
/// The ordering follows puzzle difficulty: a single-achievement grid needs the
/// most teams, so `OneStatGridPossible` is the strongest verdict. `Ord` makes
/// the two-pass monotonicity check a plain comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Feasibility {
    NotPossible,
    TwoStatGridPossible,
    OneStatGridPossible,
}

impl Feasibility {
    pub fn is_feasible(self) -> bool {
        self != Feasibility::NotPossible
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Feasibility::NotPossible => "not-possible",
            Feasibility::TwoStatGridPossible => "two-stat-grid",
            Feasibility::OneStatGridPossible => "one-stat-grid",
        }
    }
}

/// Classifies a player's stints. Pure over the record; callers must have
/// filtered unknown franchise codes out of `player.teams` first.
///
/// Tiers are checked strongest-first and the first hit wins. Only set
/// membership matters, so the verdict is invariant under stint order.
pub fn classify(player: &PlayerRecord) -> Feasibility {
    let teams = &player.teams;
    // A grid needs at minimum 4 team/achievement cells.
    if teams.len() < 4 {
        return Feasibility::NotPossible;
    }

    let career_awards = player.career_awards();

    let mut teams_by_season_award: HashMap<String, HashSet<&str>> = HashMap::new();
    for team in teams {
        for award in team.season_awards() {
            teams_by_season_award
                .entry(award)
                .or_default()
                .insert(team.id.as_str());
        }
    }

    // A three-team single-award grid is the hardest puzzle to construct, and
    // the stint-count gate makes it the cheapest tier to falsify.
    if teams.len() >= 6 {
        if !career_awards.is_empty() {
            return Feasibility::OneStatGridPossible;
        }
        if teams_by_season_award.values().any(|t| t.len() >= 3) {
            return Feasibility::OneStatGridPossible;
        }
    }

    if career_awards.len() > 2 {
        return Feasibility::TwoStatGridPossible;
    }

    if !career_awards.is_empty() && teams_by_season_award.values().any(|t| t.len() >= 2) {
        return Feasibility::TwoStatGridPossible;
    }

    // Trickiest case: two season awards whose team sets are disjoint enough to
    // supply two separate team pairs, one per award.
    let award_teams: Vec<&HashSet<&str>> = teams_by_season_award.values().collect();
    for i in 0..award_teams.len() {
        for j in (i + 1)..award_teams.len() {
            let (first, second) = (award_teams[i], award_teams[j]);
            if first.len() < 2 || second.len() < 2 {
                continue;
            }
            if first.union(second).count() >= 4 {
                return Feasibility::OneStatGridPossible;
            }
        }
    }

    Feasibility::NotPossible
}
