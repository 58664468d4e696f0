//! `flipkit add` — record and submit a new order.

use std::path::Path;

use clap::Args;
use jiff::{Zoned, civil::Date};
use rust_decimal::Decimal;

use crate::{
    orders::{OrderDraft, OrderStatus},
    render,
};

/// Arguments for recording a new order.
#[derive(Debug, Args)]
pub(crate) struct AddArgs {
    /// Date the customer ordered (defaults to today)
    #[arg(long)]
    date_client: Option<Date>,

    /// Date the order was placed with the supplier (defaults to today)
    #[arg(long)]
    date_ali: Option<Date>,

    /// Supplier's estimated delivery date
    #[arg(long)]
    date_estimate: Option<Date>,

    /// Actual delivery date, if already delivered
    #[arg(long)]
    date_delivered: Option<Date>,

    /// Product type
    #[arg(long)]
    product_type: String,

    /// Supplier listing URL
    #[arg(long, default_value = "")]
    ali_link: String,

    /// Customer name
    #[arg(long)]
    customer_name: String,

    /// Customer shipping address
    #[arg(long, default_value = "")]
    customer_address: String,

    /// Destination country
    #[arg(long)]
    country: String,

    /// Sale price in the configured currency
    #[arg(long)]
    sale_price: Decimal,

    /// Cost price in the configured currency
    #[arg(long)]
    cost_price: Decimal,

    /// Delivery status
    #[arg(long, value_enum, default_value_t = OrderStatus::Pending)]
    status: OrderStatus,

    /// Free-text notes
    #[arg(long, default_value = "")]
    notes: String,
}

impl AddArgs {
    fn into_draft(self) -> OrderDraft {
        let today = Zoned::now().date();

        OrderDraft {
            date_client: self.date_client.unwrap_or(today),
            date_ali: self.date_ali.unwrap_or(today),
            date_estimate: self.date_estimate,
            date_delivered: self.date_delivered,
            product_type: self.product_type,
            ali_link: self.ali_link,
            customer_name: self.customer_name,
            customer_address: self.customer_address,
            country: self.country,
            sale_price: self.sale_price,
            cost_price: self.cost_price,
            status: self.status,
            notes: self.notes,
        }
    }
}

pub(crate) async fn run(settings_path: &Path, args: AddArgs) -> Result<(), String> {
    let mut tracker = super::load_tracker(settings_path)?;
    let currency = tracker.settings().currency;

    let order = tracker
        .submit(args.into_draft())
        .await
        .map_err(|error| format!("failed to submit order: {error}"))?;

    println!("{}", render::order_table(&[&order], currency));
    println!("order submitted");

    Ok(())
}
