//! Terminal rendering of reconciliation reports

use colored::Colorize;
use itertools::Itertools;
use tabled::{settings::Style, Table, Tabled};

use crate::reports::{DiffReport, LedgerReport, ReconciliationReport, TradeCount};
use crate::utils::{format_currency, format_signed_currency};

/// Print the snapshot-diff report: financial summary, per-item variations
/// and trade counts
pub fn print_diff_report(report: &DiffReport) {
    print_summary(&report.summary);

    #[derive(Tabled)]
    struct DeltaRow {
        #[tabled(rename = "Item")]
        item: String,
        #[tabled(rename = "Qty Initial")]
        qty_initial: String,
        #[tabled(rename = "Qty Final")]
        qty_final: String,
        #[tabled(rename = "Qty Delta")]
        qty_delta: String,
        #[tabled(rename = "Unit Value")]
        unit_value: String,
        #[tabled(rename = "Value Delta")]
        value_delta: String,
        #[tabled(rename = "Type")]
        kind: String,
    }

    let rows: Vec<DeltaRow> = report
        .deltas
        .iter()
        .filter(|d| d.is_traded())
        .map(|d| DeltaRow {
            item: d.item.clone(),
            qty_initial: d.qty_initial.to_string(),
            qty_final: d.qty_final.to_string(),
            qty_delta: d.qty_delta.to_string(),
            unit_value: format_currency(d.unit_value),
            value_delta: format_signed_currency(d.value_delta),
            kind: d
                .classification()
                .map(|k| k.to_string())
                .unwrap_or_default(),
        })
        .collect();

    if rows.is_empty() {
        println!("\n{} No item variations found", "ℹ".blue().bold());
    } else {
        println!("\n{}", "Item variations".bold());
        println!("{}", Table::new(rows).with(Style::rounded()).to_string());
        print_trade_counts(&report.summary.trade_counts);
    }
}

/// Print the ledger report: financial summary, per-trade nets, trade counts
/// and the top-5 gain/loss item tables
pub fn print_ledger_report(report: &LedgerReport) {
    print_summary(&report.summary);
    println!(
        "  {:<28} {}",
        "Mean net per trade:",
        format_signed_currency(report.mean_net)
    );

    #[derive(Tabled)]
    struct TradeRow {
        #[tabled(rename = "Given")]
        given: String,
        #[tabled(rename = "Qty")]
        qty_given: String,
        #[tabled(rename = "Received")]
        received: String,
        #[tabled(rename = "Qty ")]
        qty_received: String,
        #[tabled(rename = "Cash")]
        cash: String,
        #[tabled(rename = "Net")]
        net: String,
        #[tabled(rename = "Type")]
        kind: String,
    }

    if report.trades.is_empty() {
        println!("\n{} Ledger is empty - nothing to reconcile", "ℹ".blue().bold());
        return;
    }

    let rows: Vec<TradeRow> = report
        .trades
        .iter()
        .map(|t| TradeRow {
            given: t.record.item_given.clone(),
            qty_given: t.record.qty_given.to_string(),
            received: t.record.item_received.clone(),
            qty_received: t.record.qty_received.to_string(),
            cash: format_signed_currency(t.record.cash_adjustment),
            net: format_signed_currency(t.net),
            kind: t
                .classification()
                .map(|k| k.to_string())
                .unwrap_or_default(),
        })
        .collect();

    println!("\n{}", "Trades".bold());
    println!("{}", Table::new(rows).with(Style::rounded()).to_string());

    print_trade_counts(&report.summary.trade_counts);

    if !report.top_received_gains.is_empty() {
        println!(
            "\n{} {}",
            "Most received in gains:".green(),
            format_count_list(&report.top_received_gains)
        );
    }
    if !report.top_given_losses.is_empty() {
        println!(
            "{} {}",
            "Most given in losses:  ".red(),
            format_count_list(&report.top_given_losses)
        );
    }
}

fn print_summary(summary: &ReconciliationReport) {
    println!("\n{}", "Financial Summary".bold().underline());
    println!(
        "  {:<28} {}",
        "Initial inventory value:",
        format_currency(summary.initial_value)
    );
    println!(
        "  {:<28} {}",
        "Value gained:",
        format_currency(summary.gain_total).green()
    );
    println!(
        "  {:<28} {}",
        "Value lost:",
        format_currency(summary.loss_total).red()
    );
    println!(
        "  {:<28} {}",
        "Net trade balance:",
        format_signed_currency(summary.net_balance)
    );
    println!(
        "  {:<28} {}",
        "Final inventory value:",
        format_currency(summary.final_value).bold()
    );
}

fn print_trade_counts(counts: &[TradeCount]) {
    if counts.is_empty() {
        return;
    }

    #[derive(Tabled)]
    struct CountRow {
        #[tabled(rename = "Item")]
        item: String,
        #[tabled(rename = "Trades/Variations")]
        count: usize,
    }

    let rows: Vec<CountRow> = counts
        .iter()
        .map(|c| CountRow {
            item: c.item.clone(),
            count: c.count,
        })
        .collect();

    println!("\n{}", "Trade counts".bold());
    println!("{}", Table::new(rows).with(Style::rounded()).to_string());
}

fn format_count_list(counts: &[TradeCount]) -> String {
    counts
        .iter()
        .map(|c| format!("{} ({}x)", c.item, c.count))
        .join(", ")
}
