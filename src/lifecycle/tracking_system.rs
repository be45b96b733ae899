use crate::clients::TrackingClient;
use crate::clock::{MonotonicClock, SharedClock};
use crate::config::TrackingConfig;
use crate::driver::LifecycleDriver;
use crate::lifecycle::TrackingSession;
use crate::model::TrackingCreate;
use crate::tracking_actor::{self, TrackingContext, TrackingError};
use std::sync::Arc;
use tracing::{error, info};

/// Runtime orchestrator for order tracking.
///
/// # Example
///
/// ```ignore
/// let system = TrackingSystem::new(TrackingConfig::default());
/// let session = system.mount(TrackingCreate::default()).await?;
/// println!("{}", session.view().await?);
/// session.unmount().await?;
/// system.shutdown().await?;
/// ```
pub struct TrackingSystem {
    /// Client for the tracking actor.
    pub tracking_client: TrackingClient,
    config: TrackingConfig,
    handle: tokio::task::JoinHandle<()>,
}

impl TrackingSystem {
    /// Starts the tracking actor with a [`MonotonicClock`].
    pub fn new(config: TrackingConfig) -> Self {
        Self::with_clock(config, Arc::new(MonotonicClock::new()))
    }

    pub fn with_clock(config: TrackingConfig, clock: SharedClock) -> Self {
        let (actor, generic_client) = tracking_actor::new(config.mailbox_size);
        let context = TrackingContext::new(clock, config.eta_messages());
        let handle = tokio::spawn(actor.run(context));
        info!(tick = ?config.tick_interval, "Tracking system started");

        Self {
            tracking_client: TrackingClient::new(generic_client),
            config,
            handle,
        }
    }

    pub fn config(&self) -> &TrackingConfig {
        &self.config
    }

    /// Creates an order and starts driving it.
    ///
    /// Without an explicit ETA the order starts with the configured `initial_eta`.
    pub async fn mount(&self, mut params: TrackingCreate) -> Result<TrackingSession, TrackingError> {
        if params.estimated_delivery_time.is_none() {
            params.estimated_delivery_time = self.config.initial_eta.clone();
        }
        let order_id = self.tracking_client.start_tracking(params).await?;
        let driver = LifecycleDriver::new(
            self.tracking_client.clone(),
            order_id,
            self.config.tick_interval,
        )
        .start();
        info!(%order_id, "Session mounted");
        Ok(TrackingSession::new(order_id, self.tracking_client.clone(), driver))
    }

    /// Drops the system's client and waits for the actor to finish.
    ///
    /// Sessions still alive keep the actor running; unmount or drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down tracking system...");
        drop(self.tracking_client);

        if let Err(e) = self.handle.await {
            error!("Tracking actor failed: {:?}", e);
            return Err(format!("Tracking actor failed: {:?}", e));
        }
        info!("Tracking system shutdown complete.");
        Ok(())
    }
}
