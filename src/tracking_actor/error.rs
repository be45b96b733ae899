//! Error types for the tracking actor.

use crate::model::{OrderId, OrderStatus};
use thiserror::Error;

/// Errors that can occur while tracking an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TrackingError {
    /// No tracked order has this id.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order already reached `Delivered` or `Cancelled`.
    #[error("Order {id} is already {status}")]
    AlreadyTerminal { id: OrderId, status: OrderStatus },

    /// The driver details supplied at creation are unusable.
    #[error("Invalid driver: {0}")]
    InvalidDriver(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
