//! `flipkit list` — fetch and display the order list.

use std::path::Path;

use clap::Args;

use crate::{filter::OrderFilter, orders::OrderStatus, render};

/// Arguments for listing orders.
#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    /// Free-text search over customer, product, and country
    #[arg(long)]
    search: Option<String>,

    /// Only show orders with this status
    #[arg(long, value_enum)]
    status: Option<OrderStatus>,
}

pub(crate) async fn run(settings_path: &Path, args: ListArgs) -> Result<(), String> {
    let mut tracker = super::load_tracker(settings_path)?;
    let currency = tracker.settings().currency;

    tracker
        .refresh()
        .await
        .map_err(|error| format!("failed to fetch orders: {error}"))?;

    let filter = OrderFilter::new(args.search.as_deref(), args.status);
    let orders = tracker.filtered(&filter);

    println!("{}", render::order_table(&orders, currency));
    println!("{} of {} orders", orders.len(), tracker.orders().len());

    Ok(())
}
