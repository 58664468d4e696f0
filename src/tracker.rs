//! Application state: settings, the order collection, and the sync client.

use tracing::{info, warn};

use crate::{
    filter::OrderFilter,
    orders::{Order, OrderDraft},
    settings::Settings,
    stats::StatsSummary,
    sync::{SheetClient, SyncError},
};

/// Outcome of the most recent sync operation, for the presentation layer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SyncStatus {
    /// No sync has been attempted yet.
    #[default]
    Idle,
    /// A sync operation is in flight.
    Syncing,
    /// The last sync operation completed.
    Success,
    /// The last sync operation failed.
    Failed,
}

/// Owns the settings, the in-memory order collection, and the sync client.
///
/// There is exactly one logical writer: the collection is only ever replaced
/// wholesale by a completed [`refresh`](Tracker::refresh), never patched
/// incrementally, so every failure path leaves it either unchanged or fully
/// replaced.
pub struct Tracker {
    settings: Settings,
    orders: Vec<Order>,
    client: Box<dyn SheetClient>,
    sync_status: SyncStatus,
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("settings", &self.settings)
            .field("orders", &self.orders.len())
            .field("sync_status", &self.sync_status)
            .finish_non_exhaustive()
    }
}

impl Tracker {
    /// Creates a tracker with an empty order collection.
    #[must_use]
    pub fn new(settings: Settings, client: Box<dyn SheetClient>) -> Self {
        Self {
            settings,
            orders: Vec::new(),
            client,
            sync_status: SyncStatus::default(),
        }
    }

    /// The loaded settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The current in-memory order collection, in remote order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Outcome of the most recent sync operation.
    #[must_use]
    pub fn sync_status(&self) -> SyncStatus {
        self.sync_status
    }

    /// Composes an order from raw input and submits it to the remote sheet.
    ///
    /// The order is never appended locally: the remote store is the source
    /// of truth, and the collection is picked up on the next refresh. The
    /// composed order is returned so the caller can display it.
    ///
    /// # Errors
    ///
    /// [`SyncError::NotConfigured`] when no endpoint is set (the sync status
    /// is left untouched), or the client's error when the submit fails.
    pub async fn submit(&mut self, draft: OrderDraft) -> Result<Order, SyncError> {
        self.ensure_configured()?;

        let order = Order::from_draft(draft);
        self.sync_status = SyncStatus::Syncing;

        match self.client.add_order(&order).await {
            Ok(()) => {
                self.sync_status = SyncStatus::Success;
                info!(product = %order.product_type, "order submitted");
                Ok(order)
            }
            Err(error) => {
                self.sync_status = SyncStatus::Failed;
                warn!(%error, "order submit failed");
                Err(error)
            }
        }
    }

    /// Replaces the order collection wholesale from the remote sheet.
    ///
    /// Returns the number of orders fetched. On any failure the collection
    /// becomes empty and the error is surfaced exactly once.
    ///
    /// # Errors
    ///
    /// [`SyncError::NotConfigured`] when no endpoint is set, or the client's
    /// error when the fetch fails.
    pub async fn refresh(&mut self) -> Result<usize, SyncError> {
        self.ensure_configured()?;

        self.sync_status = SyncStatus::Syncing;

        match self.client.fetch_orders().await {
            Ok(orders) => {
                self.sync_status = SyncStatus::Success;
                self.orders = orders;
                info!(count = self.orders.len(), "order collection refreshed");
                Ok(self.orders.len())
            }
            Err(error) => {
                self.sync_status = SyncStatus::Failed;
                self.orders.clear();
                warn!(%error, "refresh failed; collection emptied");
                Err(error)
            }
        }
    }

    /// The matching subset of the collection, in collection order.
    #[must_use]
    pub fn filtered(&self, filter: &OrderFilter) -> Vec<&Order> {
        filter.apply(&self.orders)
    }

    /// Aggregate statistics over the current collection.
    #[must_use]
    pub fn stats(&self) -> StatsSummary {
        StatsSummary::from_orders(&self.orders)
    }

    fn ensure_configured(&self) -> Result<(), SyncError> {
        if self.settings.has_endpoint() {
            Ok(())
        } else {
            Err(SyncError::NotConfigured)
        }
    }
}
