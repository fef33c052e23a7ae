//! Rancho - ranch inventory reconciliation and trade balance reports
//!
//! This library reconciles two inventory snapshots (or a snapshot plus a
//! ledger of trade transactions) into a per-item delta report and
//! portfolio-level gain/loss metrics.

pub mod cli;
pub mod error;
pub mod importers;
pub mod model;
pub mod reports;
pub mod utils;
