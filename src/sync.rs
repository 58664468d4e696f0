//! HTTP sync with the spreadsheet endpoint.
//!
//! The remote store is a spreadsheet fronted by a single web-app URL that
//! multiplexes on an `action` parameter: orders are appended with a POST of
//! `{ "action": "addOrder", "data": ... }` and fetched with
//! `GET ?action=getOrders`.

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::orders::Order;

/// Errors from synchronizing with the remote sheet.
///
/// All of these are recoverable: the caller falls back to an empty
/// collection on fetch failure and appends nothing on submit failure.
#[derive(Debug, Error)]
pub enum SyncError {
    /// No endpoint URL has been configured; blocks both submit and fetch.
    #[error("no sync endpoint configured; set the API URL first")]
    NotConfigured,

    /// Transport-level failure: connection refused, DNS, timeout.
    #[error("could not reach the sync endpoint")]
    Network(#[source] reqwest::Error),

    /// The fetch completed but the payload did not report success.
    #[error("sync endpoint reported status {status:?}")]
    InvalidResponse {
        /// The status string the endpoint returned instead of `"success"`.
        status: String,
    },

    /// The fetch completed but the body was not the expected JSON shape.
    #[error("could not decode the sync endpoint response")]
    Decode(#[source] reqwest::Error),
}

/// Submit payload: `{ "action": "addOrder", "data": <order> }`.
#[derive(Debug, Serialize)]
struct AddOrderRequest<'a> {
    action: &'static str,
    data: &'a Order,
}

/// Fetch payload: `{ "status": "success", "orders": [...] }`.
#[derive(Debug, Deserialize)]
struct OrdersResponse {
    status: String,
    #[serde(default)]
    orders: Vec<Order>,
}

/// The remote order store.
#[automock]
#[async_trait]
pub trait SheetClient: Send + Sync {
    /// Appends one order to the remote sheet.
    async fn add_order(&self, order: &Order) -> Result<(), SyncError>;

    /// Fetches the full order collection from the remote sheet.
    async fn fetch_orders(&self) -> Result<Vec<Order>, SyncError>;
}

/// [`SheetClient`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSheetClient {
    http: reqwest::Client,
    api_url: String,
}

impl HttpSheetClient {
    /// Creates a client for the given web-app URL.
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl SheetClient for HttpSheetClient {
    async fn add_order(&self, order: &Order) -> Result<(), SyncError> {
        debug!(url = %self.api_url, "submitting order");

        self.http
            .post(&self.api_url)
            .json(&AddOrderRequest {
                action: "addOrder",
                data: order,
            })
            .send()
            .await
            .map_err(SyncError::Network)?;

        // The web-app endpoint answers appends with an opaque redirect, so
        // completion of the round-trip is the only success signal available.
        Ok(())
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, SyncError> {
        debug!(url = %self.api_url, "fetching orders");

        let response = self
            .http
            .get(&self.api_url)
            .query(&[("action", "getOrders")])
            .send()
            .await
            .map_err(SyncError::Network)?;

        let body: OrdersResponse = response.json().await.map_err(SyncError::Decode)?;

        if body.status != "success" {
            return Err(SyncError::InvalidResponse {
                status: body.status,
            });
        }

        debug!(count = body.orders.len(), "fetched orders");

        Ok(body.orders)
    }
}
