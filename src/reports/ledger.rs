//! Ledger reconciliation
//!
//! Resolves each trade record against the initial snapshot and classifies
//! every record by the sign of its net value. Items a record references that
//! are absent from the snapshot resolve to unit value zero; that is the
//! documented behavior, not an error.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::model::{InventorySnapshot, TradeRecord};

use super::{aggregate, count_by_frequency, DeltaKind, ReconciliationReport, TradeCount};

/// Entries kept in each top-5 frequency table
const TOP_TABLE_LEN: usize = 5;

/// A trade record with unit values resolved and its net computed
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedTrade {
    pub record: TradeRecord,
    pub unit_value_given: Decimal,
    pub unit_value_received: Decimal,
    pub value_given: Decimal,
    pub value_received: Decimal,
    /// value_received - value_given + cash_adjustment
    pub net: Decimal,
}

impl ResolvedTrade {
    /// Gain/loss classification by the sign of net; zero-net trades are neither
    pub fn classification(&self) -> Option<DeltaKind> {
        if self.net > Decimal::ZERO {
            Some(DeltaKind::Gain)
        } else if self.net < Decimal::ZERO {
            Some(DeltaKind::Loss)
        } else {
            None
        }
    }
}

/// Full output of the ledger pipeline
#[derive(Debug, Clone, Serialize)]
pub struct LedgerReport {
    pub summary: ReconciliationReport,
    pub trades: Vec<ResolvedTrade>,
    /// Arithmetic mean of trade nets; zero for an empty ledger
    pub mean_net: Decimal,
    /// Most frequent receiving-side items among gain trades, at most 5
    pub top_received_gains: Vec<TradeCount>,
    /// Most frequent given-side items among loss trades, at most 5
    pub top_given_losses: Vec<TradeCount>,
}

/// Reconcile an initial snapshot against a trade ledger
pub fn reconcile_ledger(initial: &InventorySnapshot, records: &[TradeRecord]) -> LedgerReport {
    let trades: Vec<ResolvedTrade> = records
        .iter()
        .map(|record| resolve_trade(initial, record))
        .collect();

    debug!("Resolved {} ledger trades", trades.len());

    let totals = aggregate(trades.iter().map(|t| t.net));

    let mean_net = if trades.is_empty() {
        Decimal::ZERO
    } else {
        trades.iter().map(|t| t.net).sum::<Decimal>() / Decimal::from(trades.len())
    };

    // Every appearance on either side of a record counts; one-sided records
    // carry an empty name on the missing side, which is not an item
    let trade_counts = count_by_frequency(
        trades
            .iter()
            .flat_map(|t| [t.record.item_given.as_str(), t.record.item_received.as_str()])
            .filter(|name| !name.is_empty()),
    );

    let mut top_received_gains = count_by_frequency(
        trades
            .iter()
            .filter(|t| t.net > Decimal::ZERO)
            .map(|t| t.record.item_received.as_str())
            .filter(|name| !name.is_empty()),
    );
    top_received_gains.truncate(TOP_TABLE_LEN);

    let mut top_given_losses = count_by_frequency(
        trades
            .iter()
            .filter(|t| t.net < Decimal::ZERO)
            .map(|t| t.record.item_given.as_str())
            .filter(|name| !name.is_empty()),
    );
    top_given_losses.truncate(TOP_TABLE_LEN);

    LedgerReport {
        summary: ReconciliationReport::new(initial.total_value(), &totals, trade_counts),
        trades,
        mean_net,
        top_received_gains,
        top_given_losses,
    }
}

fn resolve_trade(initial: &InventorySnapshot, record: &TradeRecord) -> ResolvedTrade {
    let unit_value_given = initial.unit_value_or_zero(&record.item_given);
    let unit_value_received = initial.unit_value_or_zero(&record.item_received);
    let value_given = record.qty_given * unit_value_given;
    let value_received = record.qty_received * unit_value_received;

    ResolvedTrade {
        record: record.clone(),
        unit_value_given,
        unit_value_received,
        value_given,
        value_received,
        net: value_received - value_given + record.cash_adjustment,
    }
}
