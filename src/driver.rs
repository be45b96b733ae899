//! # Lifecycle Driver
//!
//! Stands in for server-pushed order progress: every `tick_interval` it asks the tracking
//! actor to advance one order, and stops on its own once the order is terminal.
//!
//! The timer lives in a spawned task owned by a [`DriverHandle`]. Dropping the handle
//! aborts the task, so a driver cannot outlive whatever mounted it, whichever way that
//! owner goes away.

use crate::clients::TrackingClient;
use crate::model::{OrderId, OrderStatus};
use crate::tracking_actor::TrackingError;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Why a driver stopped on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverExit {
    /// The order reached this terminal status.
    Settled(OrderStatus),
    /// The order or the actor went away.
    Lost(TrackingError),
}

pub struct LifecycleDriver {
    client: TrackingClient,
    order_id: OrderId,
    every: Duration,
}

impl LifecycleDriver {
    pub fn new(client: TrackingClient, order_id: OrderId, every: Duration) -> Self {
        Self {
            client,
            order_id,
            every,
        }
    }

    /// Spawns the timer task. The first tick fires one full interval from now.
    pub fn start(self) -> DriverHandle {
        let order_id = self.order_id;
        info!(%order_id, every = ?self.every, "Driver started");
        DriverHandle {
            order_id,
            task: Some(tokio::spawn(self.run())),
        }
    }

    async fn run(self) -> DriverExit {
        let mut ticker = interval_at(Instant::now() + self.every, self.every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let order_id = self.order_id;

        let exit = loop {
            ticker.tick().await;
            match self.client.advance(order_id).await {
                Ok(result) if result.is_final() => break DriverExit::Settled(result.status()),
                Ok(result) => {
                    debug!(%order_id, status = %result.status(), "Tick");
                }
                Err(e) => {
                    warn!(%order_id, error = %e, "Driver lost its order");
                    break DriverExit::Lost(e);
                }
            }
        };
        info!(%order_id, ?exit, "Driver stopped");
        exit
    }
}

/// Owner of a running driver. Dropping it cancels the timer.
#[derive(Debug)]
pub struct DriverHandle {
    order_id: OrderId,
    task: Option<JoinHandle<DriverExit>>,
}

impl DriverHandle {
    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    /// True once the driver stopped, by itself or not.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |task| task.is_finished())
    }

    /// Cancels the timer and waits for the task to end. Returns the exit reason if the
    /// driver had already stopped by itself.
    pub async fn stop(mut self) -> Option<DriverExit> {
        let mut task = self.task.take()?;
        task.abort();
        Self::join(self.order_id, &mut task).await
    }

    /// Waits for the driver to stop by itself.
    pub async fn finished(mut self) -> Option<DriverExit> {
        self.wait().await
    }

    /// Like [`finished`](Self::finished) but keeps the handle. If this future is dropped
    /// early the driver keeps running and stays owned by the handle.
    pub async fn wait(&mut self) -> Option<DriverExit> {
        let task = self.task.as_mut()?;
        let exit = Self::join(self.order_id, task).await;
        self.task = None;
        exit
    }

    async fn join(order_id: OrderId, task: &mut JoinHandle<DriverExit>) -> Option<DriverExit> {
        match task.await {
            Ok(exit) => Some(exit),
            Err(e) if e.is_cancelled() => {
                debug!(%order_id, "Driver cancelled");
                None
            }
            Err(e) => {
                warn!(%order_id, error = %e, "Driver task failed");
                None
            }
        }
    }
}

impl Drop for DriverHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
