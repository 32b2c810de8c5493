//! Registry index builder: raw registry rows to searchable records.

use crate::model::{MunicipalityRecord, RawMunicipality};
use crate::naming::strip_grouping;
use crate::romanize::{registry_key, Romanizer};

/// Build the searchable index from raw registry rows.
///
/// Order-preserving and duplicate-preserving: the matcher's tie-break
/// relies on registry order.
pub fn build_index(rows: &[RawMunicipality], romanizer: &dyn Romanizer) -> Vec<MunicipalityRecord> {
    rows.iter().map(|raw| index_entry(raw, romanizer)).collect()
}

fn index_entry(raw: &RawMunicipality, romanizer: &dyn Romanizer) -> MunicipalityRecord {
    let local_name = strip_grouping(&raw.name).to_string();
    MunicipalityRecord {
        full_name: raw.name.clone(),
        romaji_city: registry_key(&romanizer.romanize(&local_name)),
        romaji_pref: registry_key(&romanizer.romanize(&raw.prefecture)),
        prefecture: raw.prefecture.clone(),
        local_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Echoes its input; enough to observe the normalization steps.
    struct Echo;

    impl Romanizer for Echo {
        fn romanize(&self, text: &str) -> String {
            text.to_string()
        }
    }

    /// Lower-case lookup table, as kakasi would produce.
    struct Table;

    impl Romanizer for Table {
        fn romanize(&self, text: &str) -> String {
            match text {
                "大河原町" => "ookawara machi".into(),
                "宮城県" => "miyagi ken".into(),
                _ => String::new(),
            }
        }
    }

    fn raw(name: &str, prefecture: &str) -> RawMunicipality {
        RawMunicipality {
            code: "04321".into(),
            name: name.into(),
            reading: String::new(),
            prefecture_code: "04".into(),
            prefecture: prefecture.into(),
            prefecture_reading: String::new(),
        }
    }

    #[test]
    fn grouping_removed_from_local_name_only() {
        let index = build_index(&[raw("柴田郡大河原町", "宮城県")], &Echo);
        assert_eq!(index.len(), 1);
        assert_eq!(index[0].full_name, "柴田郡大河原町");
        assert_eq!(index[0].local_name, "大河原町");
    }

    #[test]
    fn romaji_keys_are_uppercase_without_spaces() {
        let index = build_index(&[raw("柴田郡大河原町", "宮城県")], &Table);
        assert_eq!(index[0].romaji_city, "OOKAWARAMACHI");
        assert_eq!(index[0].romaji_pref, "MIYAGIKEN");
    }

    #[test]
    fn order_and_duplicates_preserved() {
        let rows = vec![raw("府中市", "東京都"), raw("府中市", "広島県")];
        let index = build_index(&rows, &Echo);
        assert_eq!(index.len(), 2);
        assert_eq!(index[0].prefecture, "東京都");
        assert_eq!(index[1].prefecture, "広島県");
    }
}
