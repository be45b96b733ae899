//! Demo: mounts one order with a driver and prints the tracking card on every change
//! until the order is delivered.

use chrono::Utc;
use order_tracking::config::TrackingConfig;
use order_tracking::lifecycle::TrackingSystem;
use order_tracking::model::{DriverInfo, TrackingCreate};
use order_tracking::view::render;
use resource_actor::tracing::setup_tracing;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = TrackingConfig::load().map_err(|e| e.to_string())?;
    info!(tick = ?config.tick_interval, "Starting order tracking demo");

    let system = TrackingSystem::new(config);

    let params = TrackingCreate {
        estimated_delivery_time: Some("6:15 PM - 6:30 PM".to_string()),
        driver_info: Some(
            DriverInfo::new("John Doe")
                .with_avatar("https://source.unsplash.com/random/100x100?driver")
                .with_vehicle("Bike - SGX 1234A"),
        ),
        confirmed_at: Some(Utc::now() - chrono::Duration::minutes(5)),
    };
    let session = system.mount(params).await.map_err(|e| e.to_string())?;
    let order_id = session.order_id();

    let span = tracing::info_span!("tracking", %order_id);
    async {
        let mut changes = session.changes().await.map_err(|e| e.to_string())?;
        loop {
            let state = changes.borrow_and_update().clone();
            println!("{}", render(&state));
            if state.is_terminal() {
                info!(status = %state.current_status, "Order settled");
                break;
            }
            if changes.changed().await.is_err() {
                info!("Order went away");
                break;
            }
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    session.unmount().await.map_err(|e| e.to_string())?;
    system.shutdown().await?;
    Ok(())
}
