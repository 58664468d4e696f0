//! Table rendering for orders and statistics.
//!
//! The core exposes plain data; these helpers turn it into console tables
//! for the CLI. Placeholders mirror the tracker UI conventions: `-` for
//! absent values and `- days` for an unavailable average delay.

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::{orders::Order, settings::Currency, stats::StatsSummary};

/// Formats a monetary amount with the display currency's symbol.
#[must_use]
pub fn format_money(amount: Decimal, currency: Currency) -> String {
    format!("{amount:.2} {}", currency.symbol())
}

/// Renders the order list as a table, one row per order.
#[must_use]
pub fn order_table(orders: &[&Order], currency: Currency) -> String {
    let mut builder = Builder::default();

    builder.push_record([
        "Date", "Customer", "Product", "Country", "Sale", "Cost", "Profit", "Margin", "Status",
        "Delivery",
    ]);

    if orders.is_empty() {
        builder.push_record(["No orders", "-", "-", "-", "-", "-", "-", "-", "-", "-"]);
    }

    for order in orders {
        builder.push_record([
            order.date_client.to_string(),
            placeholder(&order.customer_name),
            placeholder(&order.product_type),
            placeholder(&order.country),
            format_money(order.sale_price, currency),
            format_money(order.cost_price, currency),
            format_money(order.profit, currency),
            format!("{:.2}%", order.margin),
            order.status.label().to_string(),
            order
                .delivery_time
                .map_or_else(|| "-".to_string(), |days| format!("{days}d")),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.modify(Columns::new(4..8), Alignment::right());

    table.to_string()
}

/// Renders the aggregate statistics as a two-column table.
#[must_use]
pub fn stats_table(summary: &StatsSummary, currency: Currency) -> String {
    let best_margin = summary
        .best_margin_product
        .as_ref()
        .map_or_else(|| "-".to_string(), |(name, mean)| format!("{name} ({mean:.2}%)"));
    let average_delivery = summary
        .average_delivery_days
        .map_or_else(|| "- days".to_string(), |days| format!("{days:.0} days"));

    let rows = [
        ("Revenue", format_money(summary.revenue, currency)),
        ("Profit", format_money(summary.profit, currency)),
        ("Orders", summary.order_count.to_string()),
        ("Average margin", format!("{:.2}%", summary.average_margin)),
        ("Top product", count_leader(summary.top_product.as_ref())),
        ("Best margin product", best_margin),
        ("Top country", count_leader(summary.top_country.as_ref())),
        ("Average delivery", average_delivery),
    ];

    let mut builder = Builder::default();
    builder.push_record(["Metric", "Value"]);

    for (metric, value) in rows {
        builder.push_record([metric.to_string(), value]);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.modify(Columns::new(1..2), Alignment::right());

    table.to_string()
}

fn placeholder(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn count_leader(leader: Option<&(String, usize)>) -> String {
    leader.map_or_else(|| "-".to_string(), |(name, count)| format!("{name} ({count})"))
}
