//! Actions on a tracked order.
//!
//! Statuses change only through these, handled by
//! [`ActorEntity::handle_action`](resource_actor::ActorEntity::handle_action) on
//! [`OrderTracking`](crate::model::OrderTracking).

use crate::model::OrderStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingAction {
    /// Moves to the next stage of the happy path. A terminal order is left as is.
    Advance,
    /// Cancels a transient order.
    ///
    /// # Errors
    /// Fails with `AlreadyTerminal` once the order is delivered or cancelled.
    Cancel,
}

/// Results of [`TrackingAction`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingActionResult {
    /// `Advance` moved the order to this status.
    Advanced(OrderStatus),
    /// `Advance` found the order already terminal in this status; nothing changed.
    Settled(OrderStatus),
    /// `Cancel` succeeded.
    Cancelled,
}

impl TrackingActionResult {
    /// Status the order is in after the action.
    pub fn status(self) -> OrderStatus {
        match self {
            TrackingActionResult::Advanced(status) | TrackingActionResult::Settled(status) => {
                status
            }
            TrackingActionResult::Cancelled => OrderStatus::Cancelled,
        }
    }

    /// True when no further `Advance` can change the order.
    pub fn is_final(self) -> bool {
        self.status().is_terminal()
    }
}
