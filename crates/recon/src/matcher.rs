//! Candidate search and prefecture disambiguation over the registry index.

use crate::model::MunicipalityRecord;

/// Result of resolving one normalized place key against the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchSelection {
    None,
    /// Exactly one candidate.
    Unique(usize),
    /// Narrowed to a prefecture via the region hint; first of the narrowed
    /// subset in registry order.
    Disambiguated(usize),
    /// Multiple candidates and no narrowing; first candidate in registry
    /// order.
    FellBack { index: usize, candidates: usize },
}

impl MatchSelection {
    pub fn registry_index(&self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Unique(i) | Self::Disambiguated(i) => Some(*i),
            Self::FellBack { index, .. } => Some(*index),
        }
    }
}

/// Indices of all records whose romanized city name contains `search_city`.
///
/// Containment rather than equality: reference names routinely omit the
/// administrative suffix (`KESENNUMA` vs `KESENNUMASHI`). An empty key
/// matches nothing.
pub fn find_candidates(index: &[MunicipalityRecord], search_city: &str) -> Vec<usize> {
    if search_city.is_empty() {
        return Vec::new();
    }
    index
        .iter()
        .enumerate()
        .filter(|(_, r)| r.romaji_city.contains(search_city))
        .map(|(i, _)| i)
        .collect()
}

/// Resolve a place key, using the region hint to narrow when several
/// municipalities share a romanized name.
pub fn select_match(
    index: &[MunicipalityRecord],
    search_city: &str,
    search_region: Option<&str>,
) -> MatchSelection {
    let candidates = find_candidates(index, search_city);
    match candidates.len() {
        0 => MatchSelection::None,
        1 => MatchSelection::Unique(candidates[0]),
        n => {
            if let Some(region) = search_region {
                if let Some(&hit) = candidates
                    .iter()
                    .find(|&&i| index[i].romaji_pref.contains(region))
                {
                    return MatchSelection::Disambiguated(hit);
                }
            }
            MatchSelection::FellBack {
                index: candidates[0],
                candidates: n,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(local: &str, pref: &str, romaji_city: &str, romaji_pref: &str) -> MunicipalityRecord {
        MunicipalityRecord {
            full_name: local.into(),
            local_name: local.into(),
            prefecture: pref.into(),
            romaji_city: romaji_city.into(),
            romaji_pref: romaji_pref.into(),
        }
    }

    fn fuchu_index() -> Vec<MunicipalityRecord> {
        vec![
            record("府中市", "東京都", "FUCHUSHI", "TOUKYOUTO"),
            record("府中市", "広島県", "FUCHUSHI", "HIROSHIMAKEN"),
            record("気仙沼市", "宮城県", "KESENNUMASHI", "MIYAGIKEN"),
        ]
    }

    #[test]
    fn containment_tolerates_missing_suffix() {
        let index = fuchu_index();
        assert_eq!(find_candidates(&index, "KESENNUMA"), vec![2]);
        assert_eq!(find_candidates(&index, "KESENNUMASHI"), vec![2]);
    }

    #[test]
    fn empty_key_matches_nothing() {
        let index = fuchu_index();
        assert!(find_candidates(&index, "").is_empty());
        assert_eq!(select_match(&index, "", Some("MIYAGI")), MatchSelection::None);
    }

    #[test]
    fn unique_candidate_ignores_region_hint() {
        let index = fuchu_index();
        // Region hint is wrong, but with a single candidate it never applies.
        assert_eq!(
            select_match(&index, "KESENNUMA", Some("AOMORI")),
            MatchSelection::Unique(2)
        );
    }

    #[test]
    fn region_hint_narrows_to_second_candidate() {
        let index = fuchu_index();
        assert_eq!(
            select_match(&index, "FUCHU", Some("HIROSHIMA")),
            MatchSelection::Disambiguated(1)
        );
    }

    #[test]
    fn unhelpful_hint_falls_back_to_registry_order() {
        // First-by-registry-order is the documented tie-break policy,
        // kept for compatibility with the original tool.
        let index = fuchu_index();
        assert_eq!(
            select_match(&index, "FUCHU", Some("OKINAWA")),
            MatchSelection::FellBack { index: 0, candidates: 2 }
        );
    }

    #[test]
    fn missing_hint_falls_back_to_registry_order() {
        let index = fuchu_index();
        assert_eq!(
            select_match(&index, "FUCHU", None),
            MatchSelection::FellBack { index: 0, candidates: 2 }
        );
    }

    #[test]
    fn no_candidate() {
        let index = fuchu_index();
        assert_eq!(select_match(&index, "SAPPORO", None), MatchSelection::None);
    }
}
