//! Shared gain/loss fold used by both reconciliation pipelines

use rust_decimal::Decimal;
use serde::Serialize;

/// Result of folding a sequence of signed deltas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub gain_total: Decimal,
    pub loss_total: Decimal,
    pub net_balance: Decimal,
}

/// Fold signed values into gain/loss totals
///
/// gain_total sums the positive values, loss_total is the absolute sum of
/// the negative ones, net_balance = gain_total - loss_total. Zero values
/// contribute to neither side.
pub fn aggregate<I>(values: I) -> Totals
where
    I: IntoIterator<Item = Decimal>,
{
    let mut gain_total = Decimal::ZERO;
    let mut loss_total = Decimal::ZERO;

    for value in values {
        if value > Decimal::ZERO {
            gain_total += value;
        } else if value < Decimal::ZERO {
            loss_total += value.abs();
        }
    }

    Totals {
        gain_total,
        loss_total,
        net_balance: gain_total - loss_total,
    }
}

/// Final inventory value: the initial value adjusted by the net balance
pub fn final_value(initial_value: Decimal, totals: &Totals) -> Decimal {
    initial_value + totals.net_balance
}
