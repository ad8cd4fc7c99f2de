use crate::domain::model::CanonicalPlayer;
use chrono::{Datelike, NaiveDate};
use deunicode::deunicode;

/// Stand-in for "still active" when a snapshot has no last-played date,
/// frozen at the date the upstream puzzle data was pulled.
pub const FALLBACK_LAST_PLAYED: &str = "2023-08-02";

/// Both providers disagree on diacritics, so names are ASCII-folded before
/// any comparison or query.
pub fn normalize_name(name: &str) -> String {
    deunicode(name)
}

fn date_year(date: &str) -> Option<i32> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.year())
}

/// Resolves a puzzle-provider player against the canonical provider's search
/// candidates.
///
/// First pass wants an exact name match and an exact "debut-last" year range;
/// second pass relaxes to the debut year alone, since the providers often
/// disagree on a retirement year. First candidate in provider order wins —
/// not guaranteed globally unique across eras, but it is the upstream
/// tie-break and qualification must agree with it.
pub fn match_identity<'a>(
    candidates: &'a [CanonicalPlayer],
    name: &str,
    years_active: &str,
) -> Option<&'a CanonicalPlayer> {
    let wanted_name = normalize_name(name);

    for candidate in candidates {
        let Some(debut) = candidate.mlb_debut_date.as_deref() else {
            continue;
        };
        if normalize_name(&candidate.full_name) != wanted_name {
            continue;
        }
        let last = candidate
            .last_played_date
            .as_deref()
            .unwrap_or(FALLBACK_LAST_PLAYED);
        let (Some(start), Some(end)) = (date_year(debut), date_year(last)) else {
            continue;
        };
        if format!("{}-{}", start, end) == years_active {
            return Some(candidate);
        }
    }

    let wanted_debut = years_active.split('-').next().unwrap_or("");
    for candidate in candidates {
        let Some(debut) = candidate.mlb_debut_date.as_deref() else {
            continue;
        };
        if normalize_name(&candidate.full_name) != wanted_name {
            continue;
        }
        if let Some(start) = date_year(debut) {
            if start.to_string() == wanted_debut {
                return Some(candidate);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, debut: Option<&str>, last: Option<&str>) -> CanonicalPlayer {
        CanonicalPlayer {
            full_name: name.to_string(),
            mlb_debut_date: debut.map(str::to_string),
            last_played_date: last.map(str::to_string),
            awards: vec![],
            stats: vec![],
        }
    }

    #[test]
    fn exact_name_and_year_range_match() {
        let candidates = vec![
            candidate("Pedro Martinez", Some("1992-09-24"), Some("2009-10-04")),
            candidate("Pedro Martinez", Some("1993-04-10"), Some("1997-09-20")),
        ];
        let matched = match_identity(&candidates, "Pedro Martinez", "1993-1997").unwrap();
        assert_eq!(matched.mlb_debut_date.as_deref(), Some("1993-04-10"));
    }

    #[test]
    fn accented_names_fold_before_comparison() {
        let candidates = vec![candidate("José Ramírez", Some("2013-09-01"), Some("2023-06-01"))];
        assert!(match_identity(&candidates, "Jose Ramirez", "2013-2023").is_some());
    }

    #[test]
    fn missing_last_played_date_defaults_to_the_fixed_current_date() {
        // Both candidates share the debut year, so only a first-pass range
        // match can pick the second one - which requires the fallback end
        // date to stand in for the missing lastPlayedDate.
        let candidates = vec![
            candidate("Mike Trout", Some("2011-04-01"), Some("2020-10-01")),
            candidate("Mike Trout", Some("2011-07-08"), None),
        ];
        let matched = match_identity(&candidates, "Mike Trout", "2011-2023").unwrap();
        assert_eq!(matched.mlb_debut_date.as_deref(), Some("2011-07-08"));
    }

    #[test]
    fn second_pass_matches_on_debut_year_alone() {
        let candidates = vec![candidate("Carl Crawford", Some("2002-07-20"), Some("2016-06-05"))];
        // provider thinks he retired in 2017; debut year still lines up
        let matched = match_identity(&candidates, "Carl Crawford", "2002-2017");
        assert!(matched.is_some());
    }

    #[test]
    fn first_pass_beats_second_pass_order() {
        // An exact range match later in the list wins over an earlier
        // debut-only match.
        let candidates = vec![
            candidate("John Smith", Some("1990-05-01"), Some("1999-09-01")),
            candidate("John Smith", Some("1990-06-15"), Some("2001-09-30")),
        ];
        let matched = match_identity(&candidates, "John Smith", "1990-2001").unwrap();
        assert_eq!(matched.last_played_date.as_deref(), Some("2001-09-30"));
    }

    #[test]
    fn candidates_without_a_debut_date_are_skipped() {
        let candidates = vec![candidate("Ghost Player", None, None)];
        assert!(match_identity(&candidates, "Ghost Player", "2000-2010").is_none());
    }

    #[test]
    fn no_match_is_none_not_a_panic() {
        assert!(match_identity(&[], "Anyone", "2000-2010").is_none());
    }
}
