//! Order records.
//!
//! An [`Order`] is composed once, at submission, from an [`OrderDraft`] of
//! raw form input. The derived fields (profit, margin, delivery time,
//! timestamp) are filled in at that point and never edited afterwards; the
//! in-memory collection is only ever replaced wholesale by a refresh from
//! the remote sheet.

use clap::ValueEnum;
use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::derived;

pub(crate) mod wire;

/// Delivery status of an order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Ordered from the supplier, not yet delivered.
    #[default]
    Pending,
    /// Delivered to the end customer.
    Delivered,
    /// Something went wrong (lost parcel, refund, dispute).
    Problem,
}

impl<'de> Deserialize<'de> for OrderStatus {
    // Sheet rows written by older clients carry status strings this enum
    // does not know; those load as `Pending` instead of failing the row.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;

        Ok(match raw.as_str() {
            "delivered" => Self::Delivered,
            "problem" => Self::Problem,
            _ => Self::Pending,
        })
    }
}

impl OrderStatus {
    /// Human-readable label for table output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Delivered => "Delivered",
            Self::Problem => "Problem",
        }
    }
}

/// One tracked reseller transaction, from customer purchase to delivery.
///
/// The serialized form is the camelCase JSON the spreadsheet API speaks.
/// Sheet-sourced values are forgiving on the way in: numbers may arrive as
/// strings, and optional dates or the delivery time may arrive as `""`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Date the end customer placed the order.
    pub date_client: Date,
    /// Date the order was placed with the supplier.
    pub date_ali: Date,
    /// Supplier's estimated delivery date.
    #[serde(
        default,
        serialize_with = "wire::date_to_wire",
        deserialize_with = "wire::date_from_wire"
    )]
    pub date_estimate: Option<Date>,
    /// Actual delivery date, once known.
    #[serde(
        default,
        serialize_with = "wire::date_to_wire",
        deserialize_with = "wire::date_from_wire"
    )]
    pub date_delivered: Option<Date>,
    /// Days between supplier order and delivery; absent until delivered.
    #[serde(
        default,
        serialize_with = "wire::days_to_wire",
        deserialize_with = "wire::days_from_wire"
    )]
    pub delivery_time: Option<i64>,
    /// Free-text product type.
    pub product_type: String,
    /// Supplier listing URL.
    pub ali_link: String,
    /// End customer name.
    pub customer_name: String,
    /// End customer shipping address.
    pub customer_address: String,
    /// Destination country.
    pub country: String,
    /// Price the customer paid.
    #[serde(deserialize_with = "wire::decimal_from_wire")]
    pub sale_price: Decimal,
    /// Price paid to the supplier.
    #[serde(deserialize_with = "wire::decimal_from_wire")]
    pub cost_price: Decimal,
    /// Sale price minus cost price, derived at composition.
    #[serde(deserialize_with = "wire::decimal_from_wire")]
    pub profit: Decimal,
    /// Profit as a percentage of sale price, derived at composition.
    #[serde(deserialize_with = "wire::decimal_from_wire")]
    pub margin: Decimal,
    /// Delivery status.
    pub status: OrderStatus,
    /// Free-text notes.
    pub notes: String,
    /// Record-creation instant.
    pub timestamp: Timestamp,
}

/// Raw order input, exactly as entered; no derived fields yet.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderDraft {
    /// Date the end customer placed the order.
    pub date_client: Date,
    /// Date the order was placed with the supplier.
    pub date_ali: Date,
    /// Supplier's estimated delivery date.
    pub date_estimate: Option<Date>,
    /// Actual delivery date, if already known at entry time.
    pub date_delivered: Option<Date>,
    /// Free-text product type.
    pub product_type: String,
    /// Supplier listing URL.
    pub ali_link: String,
    /// End customer name.
    pub customer_name: String,
    /// End customer shipping address.
    pub customer_address: String,
    /// Destination country.
    pub country: String,
    /// Price the customer paid.
    pub sale_price: Decimal,
    /// Price paid to the supplier.
    pub cost_price: Decimal,
    /// Delivery status.
    pub status: OrderStatus,
    /// Free-text notes.
    pub notes: String,
}

impl Order {
    /// Composes a full order record from raw input, computing every derived
    /// field and stamping the creation instant.
    #[must_use]
    pub fn from_draft(draft: OrderDraft) -> Self {
        let profit = derived::profit(draft.sale_price, draft.cost_price);
        let margin = derived::margin(draft.sale_price, draft.cost_price);
        let delivery_time =
            derived::delivery_duration(Some(draft.date_ali), draft.date_delivered);

        Self {
            date_client: draft.date_client,
            date_ali: draft.date_ali,
            date_estimate: draft.date_estimate,
            date_delivered: draft.date_delivered,
            delivery_time,
            product_type: draft.product_type,
            ali_link: draft.ali_link,
            customer_name: draft.customer_name,
            customer_address: draft.customer_address,
            country: draft.country,
            sale_price: draft.sale_price,
            cost_price: draft.cost_price,
            profit,
            margin,
            status: draft.status,
            notes: draft.notes,
            timestamp: Timestamp::now(),
        }
    }
}
