//! Snapshot-diff reconciliation
//!
//! Compares an initial inventory snapshot against an edited copy and turns
//! the difference into per-item deltas plus portfolio-level metrics.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::model::InventorySnapshot;

use super::{aggregate, count_by_frequency, DeltaKind, ReconciliationReport};

/// Signed change of one item between the two snapshots
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDelta {
    pub item: String,
    pub qty_initial: Decimal,
    pub qty_final: Decimal,
    pub qty_delta: Decimal,
    pub unit_value: Decimal,
    pub value_delta: Decimal,
}

impl ItemDelta {
    /// Gain/loss classification; unchanged items are not classified
    pub fn classification(&self) -> Option<DeltaKind> {
        if self.qty_delta > Decimal::ZERO {
            Some(DeltaKind::Gain)
        } else if self.qty_delta < Decimal::ZERO {
            Some(DeltaKind::Loss)
        } else {
            None
        }
    }

    pub fn is_traded(&self) -> bool {
        self.qty_delta != Decimal::ZERO
    }
}

/// Full output of the snapshot-diff pipeline
#[derive(Debug, Clone, Serialize)]
pub struct DiffReport {
    pub summary: ReconciliationReport,
    /// One delta per item present in either snapshot, unchanged items included
    pub deltas: Vec<ItemDelta>,
}

/// Reconcile an initial snapshot against its edited copy
///
/// Full outer join on item name: initial items first in snapshot order, then
/// items only present in the edited snapshot in their order. A missing side
/// contributes quantity zero. The unit value prefers the edited snapshot's
/// recorded value, falling back to the initial one.
pub fn reconcile_diff(initial: &InventorySnapshot, edited: &InventorySnapshot) -> DiffReport {
    let mut deltas = Vec::with_capacity(initial.len() + edited.len());

    for item in initial.iter() {
        let qty_final = edited
            .get(&item.name)
            .map(|e| e.quantity)
            .unwrap_or(Decimal::ZERO);
        let unit_value = edited
            .get(&item.name)
            .map(|e| e.unit_value)
            .unwrap_or(item.unit_value);
        deltas.push(build_delta(&item.name, item.quantity, qty_final, unit_value));
    }

    for item in edited.iter() {
        if !initial.contains(&item.name) {
            deltas.push(build_delta(&item.name, Decimal::ZERO, item.quantity, item.unit_value));
        }
    }

    debug!(
        "Diff produced {} deltas ({} traded)",
        deltas.len(),
        deltas.iter().filter(|d| d.is_traded()).count()
    );

    let totals = aggregate(deltas.iter().map(|d| d.value_delta));
    let trade_counts = count_by_frequency(
        deltas
            .iter()
            .filter(|d| d.is_traded())
            .map(|d| d.item.as_str()),
    );

    DiffReport {
        summary: ReconciliationReport::new(initial.total_value(), &totals, trade_counts),
        deltas,
    }
}

fn build_delta(
    item: &str,
    qty_initial: Decimal,
    qty_final: Decimal,
    unit_value: Decimal,
) -> ItemDelta {
    let qty_delta = qty_final - qty_initial;
    ItemDelta {
        item: item.to_string(),
        qty_initial,
        qty_final,
        qty_delta,
        unit_value,
        value_delta: qty_delta * unit_value,
    }
}
