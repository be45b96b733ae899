//! [`ActorEntity`] implementation for [`OrderTracking`].
//!
//! The actor is the only writer of a tracked order: the driver, a cancel request and
//! any watcher all go through it.

use super::actions::{TrackingAction, TrackingActionResult};
use super::error::TrackingError;
use super::TrackingContext;
use crate::model::{OrderId, OrderTracking, TrackingCreate};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for OrderTracking {
    type Id = OrderId;
    type Create = TrackingCreate;
    type Action = TrackingAction;
    type ActionResult = TrackingActionResult;
    type Context = TrackingContext;
    type Error = TrackingError;

    /// Seeds the order as `Confirmed` with one history entry.
    fn from_create_params(
        id: OrderId,
        params: TrackingCreate,
        ctx: &TrackingContext,
    ) -> Result<Self, TrackingError> {
        if let Some(driver) = &params.driver_info {
            if driver.name.trim().is_empty() {
                return Err(TrackingError::InvalidDriver(
                    "driver name must not be blank".to_string(),
                ));
            }
        }
        Ok(OrderTracking::confirmed(id, params, ctx.clock.now()))
    }

    async fn handle_action(
        &mut self,
        action: TrackingAction,
        ctx: &TrackingContext,
    ) -> Result<TrackingActionResult, TrackingError> {
        let now = ctx.clock.now();
        match action {
            TrackingAction::Advance => match self.advance(now, &ctx.eta) {
                Some(status) => {
                    info!(order_id = %self.id, %status, "Status advanced");
                    Ok(TrackingActionResult::Advanced(status))
                }
                None => {
                    debug!(order_id = %self.id, status = %self.current_status, "Already settled");
                    Ok(TrackingActionResult::Settled(self.current_status))
                }
            },
            TrackingAction::Cancel => {
                if self.cancel(now) {
                    info!(order_id = %self.id, "Order cancelled");
                    Ok(TrackingActionResult::Cancelled)
                } else {
                    Err(TrackingError::AlreadyTerminal {
                        id: self.id,
                        status: self.current_status,
                    })
                }
            }
        }
    }
}
