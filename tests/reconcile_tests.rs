//! Integration tests for the reconciliation engine
//!
//! These exercise the full pipeline from raw tables through normalization to
//! the final reports, covering the documented invariants:
//! - identity diff yields an all-zero report
//! - outer-join completeness over both snapshots
//! - value delta sign follows quantity delta sign
//! - per-trade net additivity
//! - aggregation consistency across both pipelines
//! - zero-fill resolution of items absent from the snapshot

use rancho::importers::{normalize_ledger, normalize_snapshot, RawTable};
use rancho::model::{InventoryItem, InventorySnapshot, TradeRecord};
use rancho::reports::{reconcile_diff, reconcile_ledger, DeltaKind};
use rust_decimal::prelude::Signed;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn snapshot(items: &[(&str, Decimal, Decimal)]) -> InventorySnapshot {
    items
        .iter()
        .map(|(name, qty, value)| InventoryItem::new(*name, *qty, *value))
        .collect()
}

fn snapshot_table(rows: &[[&str; 3]]) -> RawTable {
    RawTable::new(
        vec!["Item".into(), "Quantity".into(), "UnitValue".into()],
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
}

#[test]
fn scenario_a_wood_and_stone() {
    let initial = snapshot(&[("Wood", dec!(10), dec!(2.0))]);
    let edited = snapshot(&[("Wood", dec!(8), dec!(2.0)), ("Stone", dec!(5), dec!(1.0))]);

    let report = reconcile_diff(&initial, &edited);

    let wood = report.deltas.iter().find(|d| d.item == "Wood").unwrap();
    assert_eq!(wood.qty_delta, dec!(-2));
    assert_eq!(wood.value_delta, dec!(-4.0));
    assert_eq!(wood.classification(), Some(DeltaKind::Loss));

    let stone = report.deltas.iter().find(|d| d.item == "Stone").unwrap();
    assert_eq!(stone.qty_delta, dec!(5));
    assert_eq!(stone.value_delta, dec!(5.0));
    assert_eq!(stone.classification(), Some(DeltaKind::Gain));

    assert_eq!(report.summary.initial_value, dec!(20.0));
    assert_eq!(report.summary.gain_total, dec!(5.0));
    assert_eq!(report.summary.loss_total, dec!(4.0));
    assert_eq!(report.summary.net_balance, dec!(1.0));
    assert_eq!(report.summary.final_value, dec!(21.0));
}

#[test]
fn scenario_b_trade_against_absent_item() {
    let initial = snapshot(&[("Wood", dec!(10), dec!(2.0))]);
    let records = vec![TradeRecord {
        item_given: "Wood".to_string(),
        qty_given: dec!(3),
        item_received: "Ore".to_string(),
        qty_received: dec!(1),
        cash_adjustment: dec!(1.0),
    }];

    let report = reconcile_ledger(&initial, &records);
    let trade = &report.trades[0];

    assert_eq!(trade.value_given, dec!(6.0));
    assert_eq!(trade.value_received, Decimal::ZERO);
    assert_eq!(trade.net, dec!(-5.0));
    assert_eq!(trade.classification(), Some(DeltaKind::Loss));
    assert_eq!(report.summary.loss_total, dec!(5.0));
}

#[test]
fn scenario_c_empty_ledger() {
    let initial = snapshot(&[("Wood", dec!(10), dec!(2.0))]);
    let report = reconcile_ledger(&initial, &[]);

    assert_eq!(report.mean_net, Decimal::ZERO);
    assert_eq!(report.summary.gain_total, Decimal::ZERO);
    assert_eq!(report.summary.loss_total, Decimal::ZERO);
    assert_eq!(report.summary.net_balance, Decimal::ZERO);
    assert_eq!(report.summary.final_value, dec!(20.0));
}

#[test]
fn identity_diff_is_all_zero() {
    let initial = snapshot(&[
        ("Wood", dec!(10), dec!(2.0)),
        ("Stone", dec!(5), dec!(1.5)),
        ("Rope", dec!(0), dec!(4.0)),
    ]);

    let report = reconcile_diff(&initial, &initial.clone());

    for delta in &report.deltas {
        assert_eq!(delta.qty_delta, Decimal::ZERO);
        assert_eq!(delta.value_delta, Decimal::ZERO);
        assert_eq!(delta.classification(), None);
    }
    assert_eq!(report.summary.gain_total, Decimal::ZERO);
    assert_eq!(report.summary.loss_total, Decimal::ZERO);
    assert_eq!(report.summary.final_value, report.summary.initial_value);
    assert!(report.summary.trade_counts.is_empty());
}

#[test]
fn outer_join_covers_every_item_exactly_once() {
    let initial = snapshot(&[("Wood", dec!(10), dec!(2)), ("Rope", dec!(3), dec!(4))]);
    let edited = snapshot(&[("Stone", dec!(5), dec!(1)), ("Rope", dec!(4), dec!(4))]);

    let report = reconcile_diff(&initial, &edited);

    let mut items: Vec<&str> = report.deltas.iter().map(|d| d.item.as_str()).collect();
    items.sort_unstable();
    assert_eq!(items, vec!["Rope", "Stone", "Wood"]);
}

#[test]
fn disjoint_snapshots_are_valid() {
    let initial = snapshot(&[("Wood", dec!(10), dec!(2))]);
    let edited = snapshot(&[("Stone", dec!(5), dec!(1))]);

    let report = reconcile_diff(&initial, &edited);

    assert_eq!(report.deltas.len(), 2);
    assert_eq!(report.summary.loss_total, dec!(20));
    assert_eq!(report.summary.gain_total, dec!(5));
    assert_eq!(report.summary.final_value, dec!(5));
}

#[test]
fn value_delta_sign_follows_qty_delta_sign() {
    let initial = snapshot(&[
        ("Wood", dec!(10), dec!(2)),
        ("Stone", dec!(5), dec!(1)),
        ("Scrap", dec!(7), dec!(0)),
    ]);
    let edited = snapshot(&[
        ("Wood", dec!(12), dec!(2)),
        ("Stone", dec!(1), dec!(1)),
        ("Scrap", dec!(1), dec!(0)),
    ]);

    let report = reconcile_diff(&initial, &edited);

    for delta in &report.deltas {
        if delta.unit_value > Decimal::ZERO {
            assert_eq!(
                delta.value_delta.signum(),
                delta.qty_delta.signum(),
                "sign mismatch for {}",
                delta.item
            );
        } else {
            assert_eq!(delta.value_delta, Decimal::ZERO);
        }
    }
}

#[test]
fn ledger_net_additivity_holds_for_every_record() {
    let initial = snapshot(&[("Wood", dec!(10), dec!(2.5)), ("Stone", dec!(20), dec!(1.25))]);
    let records = vec![
        TradeRecord {
            item_given: "Wood".to_string(),
            qty_given: dec!(2),
            item_received: "Stone".to_string(),
            qty_received: dec!(3),
            cash_adjustment: dec!(-0.75),
        },
        TradeRecord {
            item_given: "Stone".to_string(),
            qty_given: dec!(8),
            item_received: "Wood".to_string(),
            qty_received: dec!(5),
            cash_adjustment: dec!(2),
        },
    ];

    let report = reconcile_ledger(&initial, &records);

    for trade in &report.trades {
        assert_eq!(
            trade.net,
            trade.value_received - trade.value_given + trade.record.cash_adjustment
        );
    }
}

#[test]
fn aggregation_consistency_both_pipelines() {
    let initial = snapshot(&[("Wood", dec!(10), dec!(2)), ("Stone", dec!(6), dec!(3))]);
    let edited = snapshot(&[("Wood", dec!(4), dec!(2)), ("Stone", dec!(9), dec!(3))]);
    let diff = reconcile_diff(&initial, &edited);
    assert_eq!(
        diff.summary.net_balance,
        diff.summary.gain_total - diff.summary.loss_total
    );
    assert_eq!(
        diff.summary.final_value,
        diff.summary.initial_value + diff.summary.net_balance
    );

    let records = vec![TradeRecord {
        item_given: "Stone".to_string(),
        qty_given: dec!(1),
        item_received: "Wood".to_string(),
        qty_received: dec!(2),
        cash_adjustment: dec!(0),
    }];
    let ledger = reconcile_ledger(&initial, &records);
    assert_eq!(
        ledger.summary.net_balance,
        ledger.summary.gain_total - ledger.summary.loss_total
    );
    assert_eq!(
        ledger.summary.final_value,
        ledger.summary.initial_value + ledger.summary.net_balance
    );
}

#[test]
fn normalization_duplicate_item_last_wins() {
    let table = snapshot_table(&[
        ["Wood", "10", "2.0"],
        ["Stone", "5", "1.0"],
        ["Wood", "3", "6.0"],
    ]);

    let snapshot = normalize_snapshot(&table).unwrap();

    assert_eq!(snapshot.len(), 2);
    let wood = snapshot.get("Wood").unwrap();
    assert_eq!(wood.quantity, dec!(3));
    assert_eq!(wood.unit_value, dec!(6.0));
    // 3 * 6 + 5 * 1
    assert_eq!(snapshot.total_value(), dec!(23.0));
}

#[test]
fn normalization_zero_fills_without_failing_the_run() {
    let table = snapshot_table(&[["Wood", "not-a-number", ""], ["Stone", "5", "1.0"]]);

    let snapshot = normalize_snapshot(&table).unwrap();
    let report = reconcile_diff(&snapshot, &snapshot.clone());

    // Wood contributes nothing; Stone carries the whole value
    assert_eq!(report.summary.initial_value, dec!(5.0));
}

#[test]
fn normalization_missing_columns_is_fatal_and_names_them() {
    let table = RawTable::new(vec!["Item".into()], vec![]);
    let err = normalize_snapshot(&table).unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing required columns: Quantity, UnitValue"
    );
}

#[test]
fn ledger_normalization_feeds_reconciler() {
    let initial = snapshot(&[("Wood", dec!(10), dec!(2.0))]);
    let table = RawTable::new(
        vec![
            "ItemGiven".into(),
            "QtyGiven".into(),
            "ItemReceived".into(),
            "QtyReceived".into(),
            "CashAdjustment".into(),
        ],
        vec![vec![
            "Wood".into(),
            "3".into(),
            "Ore".into(),
            "1".into(),
            "R$ 1,00".into(),
        ]],
    );

    let records = normalize_ledger(&table).unwrap();
    let report = reconcile_ledger(&initial, &records);

    assert_eq!(report.trades[0].net, dec!(-5.0));
    assert_eq!(report.mean_net, dec!(-5.0));
}
