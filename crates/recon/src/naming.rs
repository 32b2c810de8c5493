//! Display-name finalization: county-grouping removal and administrative
//! suffix correction.

use crate::model::RegionType;

/// Marker separating a county grouping from the municipality proper,
/// e.g. `柴田郡大河原町`.
pub const GROUPING_MARKER: char = '郡';

/// Suffix vocabulary recognized when replacing a wrong trailing suffix.
/// 県 never becomes a target but still gets stripped.
pub const ADMIN_SUFFIXES: [char; 5] = ['市', '町', '区', '村', '県'];

/// Returns the part after the last county marker, or the whole name when
/// no marker is present. Idempotent.
pub fn strip_grouping(name: &str) -> &str {
    match name.rfind(GROUPING_MARKER) {
        Some(pos) => &name[pos + GROUPING_MARKER.len_utf8()..],
        None => name,
    }
}

/// Produce the canonical display name for a registry name and region type.
///
/// The county grouping is stripped first (the index already strips it, so
/// this is idempotent on index names). A name that already carries the
/// target suffix is returned unchanged; a name carrying a different known
/// suffix has it replaced; otherwise the target suffix is appended. Region
/// types without a suffix (District, city regions) return the stripped
/// name as-is.
pub fn finalize_name(raw: &str, region_type: &RegionType) -> String {
    let name = strip_grouping(raw);

    let Some(target) = region_type.suffix() else {
        return name.to_string();
    };

    if name.ends_with(target) {
        return name.to_string();
    }

    let base = match ADMIN_SUFFIXES.iter().find(|&&s| name.ends_with(s)) {
        Some(&s) => &name[..name.len() - s.len_utf8()],
        None => name,
    };

    let mut out = String::with_capacity(base.len() + target.len_utf8());
    out.push_str(base);
    out.push(target);
    out
}
