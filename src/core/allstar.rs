use crate::core::franchise;
use crate::domain::model::{CanonicalPlayer, TeamStint, ALL_STAR_FLAG};
use std::collections::HashSet;

/// An all-star selection belongs only to the team the player represented that
/// season. The puzzle provider flags it on every team-season without checking
/// attribution, so stints whose canonical team earned no all-star award in the
/// snapshot lose the flag. Flags are only ever removed here, never added, so a
/// re-classification can only lower the verdict.
pub fn retain_earned_all_star_flags(snapshot: &CanonicalPlayer, teams: &mut [TeamStint]) {
    let all_star_teams: HashSet<u32> = snapshot
        .awards
        .iter()
        .filter(|award| award.name.contains("All-Star"))
        .filter_map(|award| award.team.as_ref().map(|team| team.id))
        .collect();

    for stint in teams.iter_mut() {
        let earned = franchise::canonical_team_id(&stint.id)
            .map(|id| all_star_teams.contains(&id))
            .unwrap_or(false);
        if !earned && stint.flags.remove(ALL_STAR_FLAG).is_some() {
            tracing::debug!("Removed unearned all-star flag from stint {}", stint.id);
        }
    }
}
