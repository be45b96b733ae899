//! The actor that owns every tracked order.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clock::SharedClock;
use crate::model::{EtaMessages, OrderTracking};
use resource_actor::{ResourceActor, ResourceClient};

/// Dependencies injected into the tracking actor at `run()`.
#[derive(Clone)]
pub struct TrackingContext {
    pub clock: SharedClock,
    pub eta: EtaMessages,
}

impl TrackingContext {
    pub fn new(clock: SharedClock, eta: EtaMessages) -> Self {
        Self { clock, eta }
    }
}

/// Creates the tracking actor and its generic client.
pub fn new(mailbox_size: usize) -> (ResourceActor<OrderTracking>, ResourceClient<OrderTracking>) {
    ResourceActor::new(mailbox_size)
}
