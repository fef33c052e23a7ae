use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod formatters;

#[derive(Parser)]
#[command(name = "rancho")]
#[command(version, about = "Ranch inventory reconciliation with trade balance reports")]
#[command(
    long_about = "Reconcile a starting ranch inventory against an edited copy of itself, or against a ledger of trade transactions, producing a gain/loss summary with per-item and per-trade reports."
)]
pub struct Cli {
    /// Disable colorized/ANSI output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Output the full report in JSON format
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Field delimiter for input tables
    #[arg(long, global = true, default_value = ",")]
    pub delimiter: char,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconcile an initial inventory snapshot against an edited copy
    Diff {
        /// Path to the initial inventory table (Item, Quantity, UnitValue)
        initial: PathBuf,

        /// Path to the edited inventory table (same columns)
        edited: PathBuf,
    },

    /// Reconcile an initial inventory snapshot against a trade ledger
    Ledger {
        /// Path to the initial inventory table (Item, Quantity, UnitValue)
        initial: PathBuf,

        /// Path to the ledger table (ItemGiven, QtyGiven, ItemReceived,
        /// QtyReceived, CashAdjustment)
        trades: PathBuf,
    },
}
