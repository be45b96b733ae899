//! # Tracking Client
//!
//! High-level API for the tracking actor. Entity errors come back as [`TrackingError`]
//! rather than boxed framework errors.
use crate::model::{OrderId, OrderTracking, TrackingCreate};
use crate::tracking_actor::{TrackingAction, TrackingActionResult, TrackingError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct TrackingClient {
    inner: ResourceClient<OrderTracking>,
}

impl TrackingClient {
    pub fn new(inner: ResourceClient<OrderTracking>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn start_tracking(&self, params: TrackingCreate) -> Result<OrderId, TrackingError> {
        info!("Sending start_tracking to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn advance(&self, id: OrderId) -> Result<TrackingActionResult, TrackingError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, TrackingAction::Advance)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn cancel(&self, id: OrderId) -> Result<(), TrackingError> {
        info!("Sending cancel to actor");
        self.inner
            .perform_action(id, TrackingAction::Cancel)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    /// Current state, failing with `NotFound` instead of returning `None`.
    pub async fn snapshot(&self, id: OrderId) -> Result<OrderTracking, TrackingError> {
        self.get(id)
            .await?
            .ok_or_else(|| TrackingError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl ActorClient<OrderTracking> for TrackingClient {
    type Error = TrackingError;

    fn inner(&self) -> &ResourceClient<OrderTracking> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<TrackingError>() {
            Ok(tracking) => tracking,
            Err(FrameworkError::NotFound(id)) => TrackingError::NotFound(id),
            Err(other) => TrackingError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderStatus;
    use resource_actor::mock::MockClient;

    #[tokio::test]
    async fn maps_framework_errors() {
        let mut mock = MockClient::<OrderTracking>::new();
        mock.expect_action(OrderId(1))
            .return_err(FrameworkError::NotFound("ORD1".to_string()));
        mock.expect_action(OrderId(1))
            .return_err(FrameworkError::EntityError(Box::new(
                TrackingError::AlreadyTerminal {
                    id: OrderId(1),
                    status: OrderStatus::Delivered,
                },
            )));
        mock.expect_action(OrderId(1))
            .return_err(FrameworkError::ActorClosed);
        let client = TrackingClient::new(mock.client());

        assert_eq!(
            client.advance(OrderId(1)).await,
            Err(TrackingError::NotFound("ORD1".to_string()))
        );
        assert_eq!(
            client.cancel(OrderId(1)).await,
            Err(TrackingError::AlreadyTerminal {
                id: OrderId(1),
                status: OrderStatus::Delivered
            })
        );
        assert!(matches!(
            client.advance(OrderId(1)).await,
            Err(TrackingError::ActorCommunicationError(_))
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn snapshot_of_missing_order() {
        let mut mock = MockClient::<OrderTracking>::new();
        mock.expect_get(OrderId(4)).return_ok(None);
        let client = TrackingClient::new(mock.client());

        assert_eq!(
            client.snapshot(OrderId(4)).await,
            Err(TrackingError::NotFound("ORD4".to_string()))
        );
        mock.verify();
    }
}
