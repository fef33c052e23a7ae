//! Core data model: inventory items, snapshots and trade records

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

/// A single inventory line: item name, quantity on hand and unit value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItem {
    pub name: String,
    pub quantity: Decimal,
    pub unit_value: Decimal,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, quantity: Decimal, unit_value: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_value,
        }
    }

    /// Total value of this line (quantity x unit value)
    pub fn total_value(&self) -> Decimal {
        self.quantity * self.unit_value
    }
}

/// A point-in-time inventory: items keyed by name, first-seen order preserved.
///
/// Duplicate names overwrite in place, so the last-seen values win while the
/// item keeps its original position. This is the documented tie-break for
/// sources that carry the same item twice.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InventorySnapshot {
    items: Vec<InventoryItem>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl InventorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item; an existing item with the same name is replaced in place
    pub fn insert(&mut self, item: InventoryItem) {
        if let Some(&pos) = self.index.get(&item.name) {
            self.items[pos] = item;
        } else {
            self.index.insert(item.name.clone(), self.items.len());
            self.items.push(item);
        }
    }

    pub fn get(&self, name: &str) -> Option<&InventoryItem> {
        self.index.get(name).map(|&pos| &self.items[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Unit value for an item, or zero when the item is not in the snapshot
    pub fn unit_value_or_zero(&self, name: &str) -> Decimal {
        self.get(name).map(|i| i.unit_value).unwrap_or(Decimal::ZERO)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total inventory value: sum of quantity x unit value over all items
    pub fn total_value(&self) -> Decimal {
        self.items.iter().map(|i| i.total_value()).sum()
    }
}

impl FromIterator<InventoryItem> for InventorySnapshot {
    fn from_iter<T: IntoIterator<Item = InventoryItem>>(iter: T) -> Self {
        let mut snapshot = Self::new();
        for item in iter {
            snapshot.insert(item);
        }
        snapshot
    }
}

/// One trade transaction from a ledger: an item given away, an item received
/// and a cash adjustment on top
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeRecord {
    pub item_given: String,
    pub qty_given: Decimal,
    pub item_received: String,
    pub qty_received: Decimal,
    pub cash_adjustment: Decimal,
}
