//! Per-row reconciliation: parse the reference, resolve a registry match,
//! finalize names.

use crate::matcher::{select_match, MatchSelection};
use crate::model::{
    MunicipalityRecord, ParsedReference, RowOutcome, RowResult, TemplateRow, UpdateMeta,
    UpdateReport, UpdateSummary,
};
use crate::naming::finalize_name;
use crate::romanize::{place_key, registry_key};

/// Split a comma-separated English reference (`Kesennuma, Miyagi, Japan`)
/// into its place and optional region part. An empty second field counts
/// as absent.
pub fn parse_reference(formal_name: &str) -> ParsedReference {
    let mut parts = formal_name.split(',').map(str::trim);
    let place = parts.next().unwrap_or("").to_string();
    let region = parts.next().filter(|s| !s.is_empty()).map(str::to_string);
    ParsedReference { place, region }
}

/// Reconcile template rows against the registry index.
///
/// Pure transformation: the input rows are untouched and every change is
/// reported as a [`RowResult`]. Rows are processed strictly in input
/// order.
pub fn reconcile(rows: &[TemplateRow], index: &[MunicipalityRecord]) -> UpdateReport {
    let results: Vec<RowResult> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| reconcile_row(i, row, index))
        .collect();

    let summary = compute_summary(rows.len(), &results);

    UpdateReport {
        meta: UpdateMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
            registry_size: index.len(),
        },
        summary,
        rows: results,
    }
}

fn reconcile_row(row_index: usize, row: &TemplateRow, index: &[MunicipalityRecord]) -> RowResult {
    let untouched = |outcome: RowOutcome| RowResult {
        row: row_index,
        region_type: row.region_type.to_string(),
        outcome,
        old_display: row.display_name.clone(),
        display_name: None,
        formal_name: None,
    };

    if !row.region_type.is_eligible() {
        return untouched(RowOutcome::Ineligible);
    }

    let reference = parse_reference(&row.formal_name);
    let search_city = place_key(&reference.place);
    let search_region = reference.region.as_deref().map(registry_key);

    let selection = select_match(index, &search_city, search_region.as_deref());
    let Some(registry_index) = selection.registry_index() else {
        return untouched(RowOutcome::NoCandidate);
    };
    let outcome = match selection {
        MatchSelection::Unique(i) | MatchSelection::Disambiguated(i) => {
            RowOutcome::Matched { registry_index: i }
        }
        MatchSelection::FellBack { index, candidates } => RowOutcome::FellBackToFirst {
            registry_index: index,
            candidates,
        },
        MatchSelection::None => unreachable!(),
    };

    let record = &index[registry_index];

    RowResult {
        row: row_index,
        region_type: row.region_type.to_string(),
        outcome,
        old_display: row.display_name.clone(),
        display_name: Some(finalize_name(&record.local_name, &row.region_type)),
        // Canonical long form: prefecture + full native name, no separator.
        formal_name: Some(format!("{}{}", record.prefecture, record.full_name)),
    }
}

fn compute_summary(total_rows: usize, results: &[RowResult]) -> UpdateSummary {
    let mut summary = UpdateSummary {
        total_rows,
        eligible: 0,
        matched: 0,
        fell_back: 0,
        no_candidate: 0,
        ineligible: 0,
    };
    for r in results {
        match r.outcome {
            RowOutcome::Matched { .. } => {
                summary.eligible += 1;
                summary.matched += 1;
            }
            RowOutcome::FellBackToFirst { .. } => {
                summary.eligible += 1;
                summary.fell_back += 1;
            }
            RowOutcome::NoCandidate => {
                summary.eligible += 1;
                summary.no_candidate += 1;
            }
            RowOutcome::Ineligible => summary.ineligible += 1,
        }
    }
    summary
}
