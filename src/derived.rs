//! Derived order figures.
//!
//! Every derived field on an [`Order`](crate::orders::Order) is computed by
//! one of these functions at composition time; they are never edited
//! independently afterwards.

use jiff::civil::Date;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary or percentage value to exactly two decimal places.
///
/// The scale is padded as well as truncated, so `40` becomes `40.00`; the
/// sheet stores these values as text and expects the two-place form.
fn round_2dp(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Profit on a single order: sale price minus cost price, to two decimal
/// places. Negative results are valid; a loss is still an order.
#[must_use]
pub fn profit(sale: Decimal, cost: Decimal) -> Decimal {
    round_2dp(sale - cost)
}

/// Margin as a percentage of the sale price, to two decimal places.
///
/// Defined as zero when the sale price is zero (giveaways and samples have
/// no margin rather than an undefined one).
#[must_use]
pub fn margin(sale: Decimal, cost: Decimal) -> Decimal {
    if sale.is_zero() {
        return Decimal::ZERO;
    }

    round_2dp((sale - cost) / sale * Decimal::ONE_HUNDRED)
}

/// Delivery duration between two dates, in whole calendar days.
///
/// Returns `None` when either date is absent; the difference is taken as an
/// absolute value, so the function is symmetric in its arguments.
#[must_use]
pub fn delivery_duration(start: Option<Date>, end: Option<Date>) -> Option<i64> {
    let (start, end) = (start?, end?);

    Some(i64::from((end - start).get_days()).abs())
}
