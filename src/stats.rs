//! Aggregate statistics over the order collection.

use rust_decimal::{Decimal, RoundingStrategy};
use rustc_hash::FxHashMap;

use crate::orders::Order;

/// Grouping key for rows with a blank product type or country.
const UNKNOWN: &str = "Unknown";

/// Summary metrics over the full in-memory order collection.
///
/// Every metric is a single pass over the collection. An empty collection
/// produces zeros and `None` placeholders; no division by zero is surfaced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatsSummary {
    /// Sum of sale prices.
    pub revenue: Decimal,
    /// Sum of per-order profits.
    pub profit: Decimal,
    /// Number of orders.
    pub order_count: usize,
    /// Mean margin across all orders; zero when there are none.
    pub average_margin: Decimal,
    /// Product type with the most orders, with its count.
    /// Ties go to the product encountered first.
    pub top_product: Option<(String, usize)>,
    /// Product type with the highest mean margin, with that mean.
    /// Ties go to the product encountered first.
    pub best_margin_product: Option<(String, Decimal)>,
    /// Country with the most orders, with its count.
    /// Ties go to the country encountered first.
    pub top_country: Option<(String, usize)>,
    /// Mean delivery time in days over orders that have one; `None` when no
    /// order has been delivered (reported as unavailable, not zero).
    pub average_delivery_days: Option<Decimal>,
}

impl StatsSummary {
    /// Computes every metric over the given collection.
    #[must_use]
    pub fn from_orders(orders: &[Order]) -> Self {
        if orders.is_empty() {
            return Self::default();
        }

        let revenue = orders.iter().map(|order| order.sale_price).sum();
        let profit = orders.iter().map(|order| order.profit).sum();
        let order_count = orders.len();

        let margin_total: Decimal = orders.iter().map(|order| order.margin).sum();
        let average_margin = round_2dp(margin_total / Decimal::from(order_count));

        let top_product =
            occurrence_leader(orders.iter().map(|order| group_key(&order.product_type)));
        let top_country = occurrence_leader(orders.iter().map(|order| group_key(&order.country)));
        let best_margin_product = margin_leader(orders);

        let delivery_days: Vec<i64> = orders
            .iter()
            .filter_map(|order| order.delivery_time)
            .collect();
        let average_delivery_days = mean_days(&delivery_days);

        Self {
            revenue,
            profit,
            order_count,
            average_margin,
            top_product,
            best_margin_product,
            top_country,
            average_delivery_days,
        }
    }
}

fn round_2dp(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn group_key(value: &str) -> &str {
    let trimmed = value.trim();

    if trimmed.is_empty() { UNKNOWN } else { trimmed }
}

/// Most frequent value, ties resolved by first encounter order.
fn occurrence_leader<'a>(values: impl Iterator<Item = &'a str>) -> Option<(String, usize)> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    let mut seen_order: Vec<&str> = Vec::new();

    for value in values {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            seen_order.push(value);
        }
        *count += 1;
    }

    let mut leader: Option<(&str, usize)> = None;

    for value in seen_order {
        let count = counts.get(value).copied().unwrap_or(0);

        // Strict comparison keeps the first-encountered value on ties.
        if leader.is_none_or(|(_, best)| count > best) {
            leader = Some((value, count));
        }
    }

    leader.map(|(value, count)| (value.to_string(), count))
}

/// Product type with the highest mean margin across its occurrences.
fn margin_leader(orders: &[Order]) -> Option<(String, Decimal)> {
    let mut totals: FxHashMap<&str, (Decimal, usize)> = FxHashMap::default();
    let mut seen_order: Vec<&str> = Vec::new();

    for order in orders {
        let key = group_key(&order.product_type);
        let entry = totals.entry(key).or_insert((Decimal::ZERO, 0));
        if entry.1 == 0 {
            seen_order.push(key);
        }
        entry.0 += order.margin;
        entry.1 += 1;
    }

    let mut means: Vec<(&str, Decimal)> = seen_order
        .into_iter()
        .filter_map(|key| {
            let (total, count) = totals.get(key).copied()?;

            Some((key, round_2dp(total / Decimal::from(count))))
        })
        .collect();

    // Stable sort: equal means keep first-encounter order.
    means.sort_by(|a, b| b.1.cmp(&a.1));

    means
        .first()
        .map(|(product, mean)| ((*product).to_string(), *mean))
}

fn mean_days(days: &[i64]) -> Option<Decimal> {
    if days.is_empty() {
        return None;
    }

    let total: i64 = days.iter().sum();

    Some(round_2dp(Decimal::from(total) / Decimal::from(days.len())))
}

#[cfg(test)]
mod tests {
    use jiff::civil::Date;
    use rust_decimal::dec;

    use crate::orders::{OrderDraft, OrderStatus};

    use super::*;

    fn order(product: &str, country: &str, sale: Decimal, cost: Decimal) -> Order {
        Order::from_draft(OrderDraft {
            date_client: Date::constant(2024, 1, 1),
            date_ali: Date::constant(2024, 1, 2),
            date_estimate: None,
            date_delivered: None,
            product_type: product.to_string(),
            ali_link: String::new(),
            customer_name: "Test Customer".to_string(),
            customer_address: String::new(),
            country: country.to_string(),
            sale_price: sale,
            cost_price: cost,
            status: OrderStatus::Pending,
            notes: String::new(),
        })
    }

    fn delivered(product: &str, country: &str, days: i64) -> Order {
        let mut order = order(product, country, dec!(20), dec!(10));
        order.date_delivered = Some(Date::constant(2024, 1, 2) + jiff::Span::new().days(days));
        order.delivery_time = Some(days);
        order.status = OrderStatus::Delivered;
        order
    }

    #[test]
    fn empty_collection_reports_placeholders() {
        let summary = StatsSummary::from_orders(&[]);

        assert_eq!(summary.revenue, Decimal::ZERO);
        assert_eq!(summary.profit, Decimal::ZERO);
        assert_eq!(summary.order_count, 0);
        assert_eq!(summary.average_margin, Decimal::ZERO);
        assert_eq!(summary.top_product, None);
        assert_eq!(summary.best_margin_product, None);
        assert_eq!(summary.top_country, None);
        assert_eq!(
            summary.average_delivery_days, None,
            "no delivered orders means unavailable, not zero"
        );
    }

    #[test]
    fn monetary_totals_and_average_margin() {
        let orders = [
            order("Mug", "France", dec!(100), dec!(60)),
            order("Mug", "Spain", dec!(50), dec!(50)),
        ];

        let summary = StatsSummary::from_orders(&orders);

        assert_eq!(summary.revenue, dec!(150));
        // Per-order profits are {40.00, 0.00}.
        assert_eq!(summary.profit, dec!(40.00));
        assert_eq!(summary.order_count, 2);
        // (40.00 + 0.00) / 2
        assert_eq!(summary.average_margin, dec!(20.00));
    }

    #[test]
    fn top_product_by_count_and_best_product_by_mean_margin() {
        let orders = [
            order("Mug", "France", dec!(100), dec!(60)), // margin 40
            order("Mug", "France", dec!(100), dec!(80)), // margin 20
            order("Cup", "Spain", dec!(100), dec!(10)),  // margin 90
        ];

        let summary = StatsSummary::from_orders(&orders);

        assert_eq!(summary.top_product, Some(("Mug".to_string(), 2)));
        assert_eq!(
            summary.best_margin_product,
            Some(("Cup".to_string(), dec!(90.00)))
        );
        assert_eq!(summary.top_country, Some(("France".to_string(), 2)));
    }

    #[test]
    fn count_ties_go_to_first_encountered() {
        let orders = [
            order("Poster", "Italy", dec!(10), dec!(5)),
            order("Sticker", "Spain", dec!(10), dec!(5)),
            order("Sticker", "Italy", dec!(10), dec!(5)),
            order("Poster", "Spain", dec!(10), dec!(5)),
        ];

        let summary = StatsSummary::from_orders(&orders);

        assert_eq!(summary.top_product, Some(("Poster".to_string(), 2)));
        assert_eq!(summary.top_country, Some(("Italy".to_string(), 2)));
    }

    #[test]
    fn margin_ties_go_to_first_encountered() {
        let orders = [
            order("Poster", "Italy", dec!(100), dec!(50)),
            order("Sticker", "Spain", dec!(100), dec!(50)),
        ];

        let summary = StatsSummary::from_orders(&orders);

        assert_eq!(
            summary.best_margin_product,
            Some(("Poster".to_string(), dec!(50.00)))
        );
    }

    #[test]
    fn blank_product_groups_as_unknown() {
        let orders = [
            order("", "France", dec!(10), dec!(5)),
            order("  ", "France", dec!(10), dec!(5)),
            order("Mug", "France", dec!(10), dec!(5)),
        ];

        let summary = StatsSummary::from_orders(&orders);

        assert_eq!(summary.top_product, Some((UNKNOWN.to_string(), 2)));
    }

    #[test]
    fn average_delivery_skips_undelivered_orders() {
        let orders = [
            delivered("Mug", "France", 10),
            delivered("Mug", "France", 14),
            order("Mug", "France", dec!(10), dec!(5)),
        ];

        let summary = StatsSummary::from_orders(&orders);

        assert_eq!(summary.average_delivery_days, Some(dec!(12.00)));
    }
}
