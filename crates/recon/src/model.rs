use serde::Serialize;

// ---------------------------------------------------------------------------
// Registry input
// ---------------------------------------------------------------------------

/// A single raw row from the municipality registry CSV (six positional
/// columns, no header).
#[derive(Debug, Clone)]
pub struct RawMunicipality {
    pub code: String,
    /// Native-script municipality name. May embed a county grouping,
    /// e.g. `柴田郡大河原町`.
    pub name: String,
    pub reading: String,
    pub prefecture_code: String,
    pub prefecture: String,
    pub prefecture_reading: String,
}

/// One searchable index entry derived from a registry row.
///
/// `romaji_city` and `romaji_pref` are upper-cased, whitespace-free Latin
/// tokens used purely for matching, never for display.
#[derive(Debug, Clone)]
pub struct MunicipalityRecord {
    /// Full native name, county grouping included.
    pub full_name: String,
    /// Native name with any county grouping removed.
    pub local_name: String,
    /// Native prefecture name.
    pub prefecture: String,
    pub romaji_city: String,
    pub romaji_pref: String,
}

// ---------------------------------------------------------------------------
// Template input
// ---------------------------------------------------------------------------

/// Administrative region type from the template's 地域種別 column.
///
/// Unrecognized values are carried through as `Other` and never rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionType {
    City,
    Town,
    Ward,
    Village,
    District,
    CityRegion,
    Other(String),
}

impl RegionType {
    pub fn parse(s: &str) -> Self {
        match s {
            "City" => Self::City,
            "Town" => Self::Town,
            "Ward" => Self::Ward,
            "Village" => Self::Village,
            "District" => Self::District,
            "City region" => Self::CityRegion,
            other => Self::Other(other.to_string()),
        }
    }

    /// Rows with an unrecognized region type pass through untouched.
    pub fn is_eligible(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Administrative suffix appended to the display name. District and
    /// city-region rows keep the registry name as-is.
    pub fn suffix(&self) -> Option<char> {
        match self {
            Self::City => Some('市'),
            Self::Town => Some('町'),
            Self::Ward => Some('区'),
            Self::Village => Some('村'),
            Self::District | Self::CityRegion | Self::Other(_) => None,
        }
    }
}

impl std::fmt::Display for RegionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::City => write!(f, "City"),
            Self::Town => write!(f, "Town"),
            Self::Ward => write!(f, "Ward"),
            Self::Village => write!(f, "Village"),
            Self::District => write!(f, "District"),
            Self::CityRegion => write!(f, "City region"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

/// Engine-facing view of one template row.
#[derive(Debug, Clone)]
pub struct TemplateRow {
    pub region_type: RegionType,
    /// Current 名前 value.
    pub display_name: String,
    /// Current 正式名 value: a comma-separated English reference such as
    /// `Kesennuma, Miyagi, Japan`.
    pub formal_name: String,
}

/// A reference string split into its place and optional region part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference {
    pub place: String,
    pub region: Option<String>,
}

// ---------------------------------------------------------------------------
// Per-row results
// ---------------------------------------------------------------------------

/// How a row was resolved. The original tool only printed matches and
/// silently kept first-by-order on ambiguity; carrying the outcome lets
/// callers tell those apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOutcome {
    /// Single candidate, or narrowed to one prefecture via the region hint.
    Matched { registry_index: usize },
    /// Multiple candidates and no narrowing; kept the first in registry
    /// order.
    FellBackToFirst { registry_index: usize, candidates: usize },
    NoCandidate,
    Ineligible,
}

impl std::fmt::Display for RowOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Matched { .. } => write!(f, "matched"),
            Self::FellBackToFirst { .. } => write!(f, "fell_back_to_first"),
            Self::NoCandidate => write!(f, "no_candidate"),
            Self::Ineligible => write!(f, "ineligible"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RowResult {
    /// Zero-based position in the template.
    pub row: usize,
    pub region_type: String,
    pub outcome: RowOutcome,
    pub old_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formal_name: Option<String>,
}

impl RowResult {
    /// Whether the row's template fields should be rewritten.
    pub fn is_rewrite(&self) -> bool {
        self.display_name.is_some()
    }
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct UpdateSummary {
    pub total_rows: usize,
    pub eligible: usize,
    pub matched: usize,
    pub fell_back: usize,
    pub no_candidate: usize,
    pub ineligible: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateMeta {
    pub engine_version: String,
    pub run_at: String,
    pub registry_size: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateReport {
    pub meta: UpdateMeta,
    pub summary: UpdateSummary,
    pub rows: Vec<RowResult>,
}
