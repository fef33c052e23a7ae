use anyhow::{ensure, Result};
use clap::Parser;
use colored::Colorize;
use tracing::info;

use rancho::cli::{formatters, Cli, Commands};
use rancho::importers::{load_table, normalize_ledger, normalize_snapshot};
use rancho::reports::{reconcile_diff, reconcile_ledger};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Boundary between core and presentation: any failure surfaces as one
    // user-facing message
    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    ensure!(
        cli.delimiter.is_ascii(),
        "delimiter must be a single ASCII character"
    );
    let delimiter = cli.delimiter as u8;

    match &cli.command {
        Commands::Diff { initial, edited } => {
            info!("Reconciling snapshot diff: {:?} vs {:?}", initial, edited);

            let initial_snapshot = normalize_snapshot(&load_table(initial, delimiter)?)?;
            let edited_snapshot = normalize_snapshot(&load_table(edited, delimiter)?)?;
            let report = reconcile_diff(&initial_snapshot, &edited_snapshot);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                formatters::print_diff_report(&report);
            }
            Ok(())
        }

        Commands::Ledger { initial, trades } => {
            info!("Reconciling ledger: {:?} against {:?}", trades, initial);

            let initial_snapshot = normalize_snapshot(&load_table(initial, delimiter)?)?;
            let records = normalize_ledger(&load_table(trades, delimiter)?)?;
            let report = reconcile_ledger(&initial_snapshot, &records);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                formatters::print_ledger_report(&report);
            }
            Ok(())
        }
    }
}
