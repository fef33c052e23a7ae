// Reports module - snapshot-diff and ledger reconciliation reports

pub mod aggregate;
pub mod diff;
pub mod ledger;

pub use aggregate::{aggregate, final_value, Totals};
pub use diff::{reconcile_diff, DiffReport, ItemDelta};
pub use ledger::{reconcile_ledger, LedgerReport, ResolvedTrade};

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

/// Classification of one delta or trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeltaKind {
    /// Quantity or value went up
    Gain,
    /// Quantity or value went down
    Loss,
}

impl std::fmt::Display for DeltaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeltaKind::Gain => write!(f, "Received (Gain)"),
            DeltaKind::Loss => write!(f, "Traded (Loss)"),
        }
    }
}

/// How many deltas/records reference one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradeCount {
    pub item: String,
    pub count: usize,
}

/// Portfolio-level reconciliation metrics, shared by both pipelines
#[derive(Debug, Clone, Serialize)]
pub struct ReconciliationReport {
    /// Total inventory value before any change
    pub initial_value: Decimal,
    /// Sum of positive value deltas (diff) or positive trade nets (ledger)
    pub gain_total: Decimal,
    /// Absolute sum of the negative counterparts
    pub loss_total: Decimal,
    /// gain_total - loss_total
    pub net_balance: Decimal,
    /// initial_value + net_balance
    pub final_value: Decimal,
    /// Item trade frequencies, descending, ties in first-encountered order
    pub trade_counts: Vec<TradeCount>,
}

impl ReconciliationReport {
    pub(crate) fn new(initial_value: Decimal, totals: &Totals, trade_counts: Vec<TradeCount>) -> Self {
        Self {
            initial_value,
            gain_total: totals.gain_total,
            loss_total: totals.loss_total,
            net_balance: totals.net_balance,
            final_value: final_value(initial_value, totals),
            trade_counts,
        }
    }
}

/// Count item-name frequencies, descending, ties kept in first-encountered
/// order (the stable sort preserves encounter order among equal counts)
pub(crate) fn count_by_frequency<'a, I>(names: I) -> Vec<TradeCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for name in names {
        if !counts.contains_key(name) {
            order.push(name);
        }
        *counts.entry(name).or_insert(0) += 1;
    }

    let mut result: Vec<TradeCount> = order
        .into_iter()
        .map(|name| TradeCount {
            item: name.to_string(),
            count: counts[name],
        })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count));
    result
}
