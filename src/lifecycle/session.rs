use crate::clients::TrackingClient;
use crate::driver::{DriverExit, DriverHandle};
use crate::model::{OrderId, OrderTracking};
use crate::tracking_actor::TrackingError;
use crate::view::{render, TrackerView};
use resource_actor::ActorClient;
use tokio::sync::watch;
use tracing::info;

/// One mounted tracking view: an order in the actor plus the driver advancing it.
///
/// Dropping the session cancels the driver; [`unmount`](Self::unmount) also deletes the order.
pub struct TrackingSession {
    order_id: OrderId,
    client: TrackingClient,
    driver: DriverHandle,
}

impl TrackingSession {
    pub(crate) fn new(order_id: OrderId, client: TrackingClient, driver: DriverHandle) -> Self {
        Self {
            order_id,
            client,
            driver,
        }
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub async fn snapshot(&self) -> Result<OrderTracking, TrackingError> {
        self.client.snapshot(self.order_id).await
    }

    pub async fn view(&self) -> Result<TrackerView, TrackingError> {
        Ok(render(&self.snapshot().await?))
    }

    /// Every state the order commits from now on. Closes when the order is deleted.
    pub async fn changes(&self) -> Result<watch::Receiver<OrderTracking>, TrackingError> {
        self.client.watch(self.order_id).await
    }

    pub async fn cancel(&self) -> Result<(), TrackingError> {
        self.client.cancel(self.order_id).await
    }

    pub fn driver_finished(&self) -> bool {
        self.driver.is_finished()
    }

    /// Waits until the driver stops by itself, without tearing anything down.
    ///
    /// Returns `None` if the driver had already been waited on.
    pub async fn settled(&mut self) -> Option<DriverExit> {
        self.driver.wait().await
    }

    /// Cancels the driver, then deletes the order.
    pub async fn unmount(self) -> Result<(), TrackingError> {
        let Self {
            order_id,
            client,
            driver,
        } = self;
        driver.stop().await;
        client.delete(order_id).await?;
        info!(%order_id, "Session unmounted");
        Ok(())
    }
}
