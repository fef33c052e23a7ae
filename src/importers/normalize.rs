//! Snapshot and ledger normalization
//!
//! Validates column presence once at this boundary, then coerces every
//! numeric cell. Coercion never fails: an unparseable or absent value
//! degrades to zero with a warning, so a schema-valid table always
//! normalizes successfully.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::{InventoryError, Result};
use crate::model::{InventoryItem, InventorySnapshot, TradeRecord};

use super::RawTable;

/// Required columns for an inventory snapshot table
pub const SNAPSHOT_COLUMNS: [&str; 3] = ["Item", "Quantity", "UnitValue"];

/// Required columns for a trade ledger table
pub const LEDGER_COLUMNS: [&str; 5] = [
    "ItemGiven",
    "QtyGiven",
    "ItemReceived",
    "QtyReceived",
    "CashAdjustment",
];

/// Normalize a raw table into an [`InventorySnapshot`]
///
/// Fails only when required columns are missing. Rows with an empty item
/// name are skipped; duplicate names follow the snapshot's last-seen-wins
/// tie-break.
pub fn normalize_snapshot(table: &RawTable) -> Result<InventorySnapshot> {
    let cols = require_columns(table, &SNAPSHOT_COLUMNS)?;
    let (item_idx, qty_idx, value_idx) = (cols[0], cols[1], cols[2]);

    let mut snapshot = InventorySnapshot::new();
    for (row_num, row) in table.rows.iter().enumerate() {
        let name = cell(row, item_idx).trim();
        if name.is_empty() {
            debug!("Skipping row {}: empty item name", row_num + 2);
            continue;
        }

        snapshot.insert(InventoryItem::new(
            name,
            coerce_decimal(cell(row, qty_idx)),
            coerce_decimal(cell(row, value_idx)),
        ));
    }

    debug!("Normalized snapshot with {} items", snapshot.len());
    Ok(snapshot)
}

/// Normalize a raw table into a list of [`TradeRecord`]s
///
/// Rows where both item fields are empty are skipped; a record with one
/// empty side is kept and resolves that side to zero value downstream.
pub fn normalize_ledger(table: &RawTable) -> Result<Vec<TradeRecord>> {
    let cols = require_columns(table, &LEDGER_COLUMNS)?;
    let (given_idx, qty_given_idx, received_idx, qty_received_idx, cash_idx) =
        (cols[0], cols[1], cols[2], cols[3], cols[4]);

    let mut records = Vec::new();
    for (row_num, row) in table.rows.iter().enumerate() {
        let item_given = cell(row, given_idx).trim();
        let item_received = cell(row, received_idx).trim();
        if item_given.is_empty() && item_received.is_empty() {
            debug!("Skipping row {}: no items on either side", row_num + 2);
            continue;
        }

        records.push(TradeRecord {
            item_given: item_given.to_string(),
            qty_given: coerce_decimal(cell(row, qty_given_idx)),
            item_received: item_received.to_string(),
            qty_received: coerce_decimal(cell(row, qty_received_idx)),
            cash_adjustment: coerce_decimal(cell(row, cash_idx)),
        });
    }

    debug!("Normalized ledger with {} records", records.len());
    Ok(records)
}

/// Coerce a raw cell to a Decimal, defaulting to zero
///
/// Accepts plain notation ("1234.56") and Brazilian currency notation
/// ("R$ 1.234,56"). Anything unparseable becomes zero; this is the
/// documented zero-fill policy, not an error.
pub fn coerce_decimal(raw: &str) -> Decimal {
    let cleaned = raw.trim().replace("R$", "").replace(' ', "");
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }

    // Comma present means Brazilian notation: '.' thousands, ',' decimal
    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned
    };

    match Decimal::from_str(&normalized) {
        Ok(value) => value,
        Err(_) => {
            warn!("Coercing unparseable numeric cell {:?} to 0", raw);
            Decimal::ZERO
        }
    }
}

/// Resolve required columns to indices, reporting every missing name at once
fn require_columns(table: &RawTable, names: &[&str]) -> Result<Vec<usize>> {
    let mut indices = Vec::with_capacity(names.len());
    let mut missing = Vec::new();

    for name in names {
        match table.column_index(name) {
            Some(idx) => indices.push(idx),
            None => missing.push(name.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(InventoryError::MissingColumns(missing).into());
    }
    Ok(indices)
}

/// Cell accessor tolerant of short rows (flexible CSV input)
fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}
