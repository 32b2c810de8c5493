//! `munimatch update` / `munimatch check` — run the reconciliation
//! pipeline over a template and registry file.

use std::path::{Path, PathBuf};

use munimatch_io::{load_registry, LoadError, TemplateFile};
use munimatch_recon::{build_index, reconcile, Romanizer, RowOutcome, UpdateReport};

use crate::exit_codes::{EXIT_ERROR, EXIT_INPUT_MISSING, EXIT_PARSE, EXIT_SCHEMA, EXIT_UNMATCHED};
use crate::CliError;

pub struct UpdateOptions {
    /// Print the full JSON report to stdout.
    pub json: bool,
    /// Write the full JSON report to a file.
    pub report: Option<PathBuf>,
    /// Suppress per-row stderr lines.
    pub quiet: bool,
}

fn load_err(e: LoadError) -> CliError {
    let code = match &e {
        LoadError::Io { .. } => EXIT_ERROR,
        LoadError::Csv { .. } => EXIT_PARSE,
        LoadError::ShortRow { .. } | LoadError::MissingColumn { .. } => EXIT_SCHEMA,
    };
    CliError { code, message: e.to_string(), hint: None }
}

fn require_exists(path: &Path) -> Result<(), CliError> {
    if path.exists() {
        return Ok(());
    }
    Err(CliError {
        code: EXIT_INPUT_MISSING,
        message: format!("input file not found: {}", path.display()),
        hint: None,
    })
}

/// Load both inputs and run the engine. Shared by `update` and `check`.
pub fn load_and_reconcile(
    template_path: &Path,
    registry_path: &Path,
    romanizer: &dyn Romanizer,
) -> Result<(TemplateFile, UpdateReport), CliError> {
    require_exists(template_path)?;
    require_exists(registry_path)?;

    let template = TemplateFile::load(template_path).map_err(load_err)?;
    let registry = load_registry(registry_path).map_err(load_err)?;

    let index = build_index(&registry, romanizer);
    let report = reconcile(&template.rows(), &index);
    Ok((template, report))
}

fn emit_report(report: &UpdateReport, opts: &UpdateOptions) -> Result<(), CliError> {
    if opts.json || opts.report.is_some() {
        let json_str = serde_json::to_string_pretty(report)
            .map_err(|e| CliError::general(format!("JSON serialization error: {e}")))?;

        if let Some(ref path) = opts.report {
            std::fs::write(path, &json_str).map_err(|e| {
                CliError::general(format!("cannot write {}: {e}", path.display()))
            })?;
            eprintln!("wrote {}", path.display());
        }
        if opts.json {
            println!("{json_str}");
        }
    }
    Ok(())
}

fn print_summary(report: &UpdateReport) {
    let s = &report.summary;
    eprintln!(
        "{} rows — {} rewritten ({} via region hint or unique match, {} kept first of several), {} unmatched, {} skipped",
        s.total_rows,
        s.matched + s.fell_back,
        s.matched,
        s.fell_back,
        s.no_candidate,
        s.ineligible,
    );
}

pub fn cmd_update(
    template_path: &Path,
    registry_path: &Path,
    output_path: &Path,
    opts: &UpdateOptions,
    romanizer: &dyn Romanizer,
) -> Result<(), CliError> {
    let (mut template, report) = load_and_reconcile(template_path, registry_path, romanizer)?;

    for r in &report.rows {
        let (Some(display), Some(formal)) = (&r.display_name, &r.formal_name) else {
            continue;
        };
        if !opts.quiet {
            eprintln!("'{}' -> 名前: '{display}', 正式名: '{formal}'", r.old_display);
            if let RowOutcome::FellBackToFirst { candidates, .. } = r.outcome {
                eprintln!(
                    "  row {}: {candidates} candidates, no region narrowing — kept first registry entry",
                    r.row + 1,
                );
            }
        }
        template.apply(r.row, display, formal);
    }

    template.write(output_path).map_err(load_err)?;
    eprintln!("wrote {}", output_path.display());

    emit_report(&report, opts)?;
    print_summary(&report);
    Ok(())
}

pub fn cmd_check(
    template_path: &Path,
    registry_path: &Path,
    json: bool,
    romanizer: &dyn Romanizer,
) -> Result<(), CliError> {
    let (_, report) = load_and_reconcile(template_path, registry_path, romanizer)?;

    emit_report(
        &report,
        &UpdateOptions { json, report: None, quiet: true },
    )?;
    print_summary(&report);

    if report.summary.no_candidate > 0 {
        return Err(CliError {
            code: EXIT_UNMATCHED,
            message: format!("{} eligible row(s) with no registry match", report.summary.no_candidate),
            hint: Some("check the 正式名 reference spelling against the registry".into()),
        });
    }
    Ok(())
}
