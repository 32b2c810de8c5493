// munimatch CLI - reconcile a regional master list against the
// municipality registry

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use munimatch_cli::update::{cmd_check, cmd_update, UpdateOptions};
use munimatch_recon::Kakasi;

#[derive(Parser)]
#[command(name = "munimatch")]
#[command(about = "Municipality master-list reconciliation")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite the template's 名前/正式名 columns from the registry
    #[command(after_help = "\
Examples:
  munimatch update template.csv registry.csv -o updated.csv
  munimatch update template.csv registry.csv -o updated.csv --report report.json
  munimatch update template.csv registry.csv -o updated.csv --quiet --json")]
    Update {
        /// Template CSV (headered; 地域種別 / 名前 / 正式名 columns)
        template: PathBuf,

        /// Municipality registry CSV (headerless, six positional columns)
        registry: PathBuf,

        /// Output path for the updated template
        #[arg(long, short = 'o')]
        output: PathBuf,

        /// Print the full JSON report to stdout
        #[arg(long)]
        json: bool,

        /// Write the full JSON report to a file
        #[arg(long)]
        report: Option<PathBuf>,

        /// Suppress per-row output
        #[arg(long)]
        quiet: bool,
    },

    /// Run the pipeline without writing; exit nonzero on unmatched rows
    #[command(after_help = "\
Examples:
  munimatch check template.csv registry.csv
  munimatch check template.csv registry.csv --json")]
    Check {
        /// Template CSV (headered; 地域種別 / 名前 / 正式名 columns)
        template: PathBuf,

        /// Municipality registry CSV (headerless, six positional columns)
        registry: PathBuf,

        /// Print the full JSON report to stdout
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Update { template, registry, output, json, report, quiet } => cmd_update(
            &template,
            &registry,
            &output,
            &UpdateOptions { json, report, quiet },
            &Kakasi,
        ),
        Commands::Check { template, registry, json } => {
            cmd_check(&template, &registry, json, &Kakasi)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e.message);
            if let Some(hint) = e.hint {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(e.code)
        }
    }
}
