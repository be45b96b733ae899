//! The tracked-order state and its transitions.
//!
//! # Actor Entity
//! [`OrderTracking`] implements [`ActorEntity`](resource_actor::ActorEntity) (see
//! [`crate::tracking_actor::entity`]); the methods here are the pure transition rules the
//! actor applies.

use crate::model::status::OrderStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a tracked order, assigned by the actor. Displays as `ORD<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ORD{}", self.0)
    }
}

/// The courier assigned to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverInfo {
    pub name: String,
    pub avatar_url: Option<String>,
    /// e.g. `"Bike - AB 123 CD"`
    pub vehicle: Option<String>,
}

impl DriverInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar_url: None,
            vehicle: None,
        }
    }

    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    pub fn with_vehicle(mut self, vehicle: impl Into<String>) -> Self {
        self.vehicle = Some(vehicle.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    pub status: OrderStatus,
    pub timestamp: DateTime<Utc>,
}

/// ETA texts written on the transitions that change the estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtaMessages {
    /// Set on entering `OutForDelivery`.
    pub arriving_soon: String,
    /// Set on entering `Delivered`.
    pub delivered: String,
}

impl Default for EtaMessages {
    fn default() -> Self {
        Self {
            arriving_soon: "In 10-15 minutes".to_string(),
            delivered: "Delivered".to_string(),
        }
    }
}

/// Payload for starting to track an order.
#[derive(Debug, Clone, Default)]
pub struct TrackingCreate {
    pub estimated_delivery_time: Option<String>,
    pub driver_info: Option<DriverInfo>,
    /// When the order was confirmed. Defaults to the actor clock's now.
    pub confirmed_at: Option<DateTime<Utc>>,
}

/// State of one tracked order.
///
/// `status_history` is append-only and its last entry always carries `current_status`.
/// Only [`OrderTracking::advance`] and [`OrderTracking::cancel`] change the status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderTracking {
    pub id: OrderId,
    pub current_status: OrderStatus,
    pub estimated_delivery_time: Option<String>,
    pub driver_info: Option<DriverInfo>,
    pub status_history: Vec<StatusHistoryEntry>,
}

impl OrderTracking {
    /// A freshly confirmed order with a single history entry.
    pub fn confirmed(id: OrderId, params: TrackingCreate, now: DateTime<Utc>) -> Self {
        let at = params.confirmed_at.unwrap_or(now);
        Self {
            id,
            current_status: OrderStatus::Confirmed,
            estimated_delivery_time: params.estimated_delivery_time,
            driver_info: params.driver_info,
            status_history: vec![StatusHistoryEntry {
                status: OrderStatus::Confirmed,
                timestamp: at,
            }],
        }
    }

    /// Moves to the next stage of the happy path and returns it, or `None` if the order
    /// is already terminal (nothing changes then).
    pub fn advance(&mut self, at: DateTime<Utc>, eta: &EtaMessages) -> Option<OrderStatus> {
        let next = self.current_status.successor()?;
        match next {
            OrderStatus::OutForDelivery => {
                self.estimated_delivery_time = Some(eta.arriving_soon.clone())
            }
            OrderStatus::Delivered => self.estimated_delivery_time = Some(eta.delivered.clone()),
            _ => {}
        }
        self.record(next, at);
        Some(next)
    }

    /// Cancels a transient order. Returns `false` and changes nothing once terminal.
    pub fn cancel(&mut self, at: DateTime<Utc>) -> bool {
        if self.current_status.is_terminal() {
            return false;
        }
        self.record(OrderStatus::Cancelled, at);
        true
    }

    fn record(&mut self, status: OrderStatus, at: DateTime<Utc>) {
        // keep timestamps non-decreasing even if the clock stepped back
        let at = self
            .status_history
            .last()
            .map_or(at, |last| at.max(last.timestamp));
        self.current_status = status;
        self.status_history.push(StatusHistoryEntry {
            status,
            timestamp: at,
        });
    }

    pub fn is_terminal(&self) -> bool {
        self.current_status.is_terminal()
    }
}
