use chrono::{DateTime, TimeZone, Utc};
use order_tracking::clock::MonotonicClock;
use order_tracking::config::TrackingConfig;
use order_tracking::driver::DriverExit;
use order_tracking::lifecycle::TrackingSystem;
use order_tracking::model::{DriverInfo, OrderId, OrderStatus, TrackingCreate};
use order_tracking::tracking_actor::TrackingError;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout};

fn origin() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

fn at(secs: i64) -> DateTime<Utc> {
    origin() + chrono::Duration::seconds(secs)
}

fn system() -> TrackingSystem {
    TrackingSystem::with_clock(
        TrackingConfig::default(),
        Arc::new(MonotonicClock::anchored_at(origin())),
    )
}

fn with_driver() -> TrackingCreate {
    TrackingCreate {
        estimated_delivery_time: Some("6:15 PM - 6:30 PM".to_string()),
        driver_info: Some(DriverInfo::new("John Doe").with_vehicle("Bike - SGX 1234A")),
        confirmed_at: None,
    }
}

#[tokio::test(start_paused = true)]
async fn order_progresses_every_tick_until_delivered() {
    let system = system();
    let session = system.mount(with_driver()).await.unwrap();
    assert_eq!(session.order_id(), OrderId(1));

    let state = session.snapshot().await.unwrap();
    assert_eq!(state.current_status, OrderStatus::Confirmed);
    assert_eq!(state.status_history.len(), 1);
    assert_eq!(state.status_history[0].timestamp, at(0));
    assert!(session.view().await.unwrap().driver.is_none());

    sleep(Duration::from_secs(16)).await;
    let state = session.snapshot().await.unwrap();
    assert_eq!(state.current_status, OrderStatus::Preparing);
    assert_eq!(state.status_history.len(), 2);
    assert_eq!(state.status_history[1].timestamp, at(15));
    assert_eq!(state.estimated_delivery_time.as_deref(), Some("6:15 PM - 6:30 PM"));

    sleep(Duration::from_secs(15)).await;
    let state = session.snapshot().await.unwrap();
    assert_eq!(state.current_status, OrderStatus::OutForDelivery);
    assert_eq!(state.estimated_delivery_time.as_deref(), Some("In 10-15 minutes"));
    let card = session.view().await.unwrap().driver.unwrap();
    assert_eq!(card.headline, "John Doe is on the way!");

    sleep(Duration::from_secs(15)).await;
    let state = session.snapshot().await.unwrap();
    assert_eq!(state.current_status, OrderStatus::Delivered);
    assert_eq!(state.estimated_delivery_time.as_deref(), Some("Delivered"));
    let view = session.view().await.unwrap();
    assert!(view.driver.is_none());
    assert_eq!(view.estimated_delivery, None);
    assert!(session.driver_finished());

    let statuses: Vec<_> = state.status_history.iter().map(|e| e.status).collect();
    assert_eq!(
        statuses,
        vec![
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered
        ]
    );
    assert!(state
        .status_history
        .windows(2)
        .all(|pair| pair[0].timestamp <= pair[1].timestamp));

    sleep(Duration::from_secs(120)).await;
    assert_eq!(session.snapshot().await.unwrap(), state);

    session.unmount().await.unwrap();
    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn watchers_see_every_transition() {
    let system = system();
    let session = system.mount(TrackingCreate::default()).await.unwrap();
    let mut changes = session.changes().await.unwrap();

    let mut seen = vec![changes.borrow_and_update().current_status];
    while changes.changed().await.is_ok() {
        let state = changes.borrow_and_update().clone();
        seen.push(state.current_status);
        if state.is_terminal() {
            break;
        }
    }
    assert_eq!(
        seen,
        vec![
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn dropping_the_session_stops_the_timer() {
    let system = system();
    let session = system.mount(with_driver()).await.unwrap();
    let id = session.order_id();

    sleep(Duration::from_secs(31)).await;
    drop(session);

    sleep(Duration::from_secs(120)).await;
    let state = system.tracking_client.snapshot(id).await.unwrap();
    assert_eq!(state.current_status, OrderStatus::OutForDelivery);
    assert_eq!(state.status_history.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn unmount_stops_the_timer_and_deletes_the_order() {
    let system = system();
    let session = system.mount(with_driver()).await.unwrap();
    let id = session.order_id();
    let mut changes = session.changes().await.unwrap();

    sleep(Duration::from_secs(16)).await;
    session.unmount().await.unwrap();

    assert!(matches!(
        system.tracking_client.snapshot(id).await,
        Err(TrackingError::NotFound(_))
    ));
    changes.borrow_and_update();
    assert!(changes.changed().await.is_err());

    sleep(Duration::from_secs(60)).await;
    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn cancel_settles_the_order() {
    let system = system();
    let mut session = system.mount(with_driver()).await.unwrap();

    sleep(Duration::from_secs(16)).await;
    session.cancel().await.unwrap();

    let state = session.snapshot().await.unwrap();
    assert_eq!(state.current_status, OrderStatus::Cancelled);
    assert_eq!(state.status_history.len(), 3);
    let view = session.view().await.unwrap();
    assert_eq!(view.progress, None);
    assert_eq!(view.notice, Some("This order has been cancelled."));

    assert_eq!(
        session.settled().await,
        Some(DriverExit::Settled(OrderStatus::Cancelled))
    );
    assert_eq!(
        session.cancel().await,
        Err(TrackingError::AlreadyTerminal {
            id: session.order_id(),
            status: OrderStatus::Cancelled
        })
    );
    assert_eq!(session.snapshot().await.unwrap().status_history.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn sessions_are_independent() {
    let system = system();
    let first = system.mount(with_driver()).await.unwrap();
    sleep(Duration::from_secs(16)).await;
    let second = system.mount(TrackingCreate::default()).await.unwrap();
    assert_eq!(second.order_id(), OrderId(2));

    sleep(Duration::from_secs(15)).await;
    assert_eq!(
        first.snapshot().await.unwrap().current_status,
        OrderStatus::OutForDelivery
    );
    assert_eq!(
        second.snapshot().await.unwrap().current_status,
        OrderStatus::Preparing
    );
}

#[tokio::test(start_paused = true)]
async fn configured_tick_and_initial_eta() {
    let config =
        TrackingConfig::from_json_str(r#"{ "tick_interval": "2s", "initial_eta": "Soon" }"#)
            .unwrap();
    let system = TrackingSystem::with_clock(config, Arc::new(MonotonicClock::anchored_at(origin())));
    let mut session = system.mount(TrackingCreate::default()).await.unwrap();
    assert_eq!(
        session.snapshot().await.unwrap().estimated_delivery_time.as_deref(),
        Some("Soon")
    );

    assert_eq!(
        session.settled().await,
        Some(DriverExit::Settled(OrderStatus::Delivered))
    );
    let state = session.snapshot().await.unwrap();
    assert_eq!(state.status_history.last().unwrap().timestamp, at(6));
}

#[tokio::test]
async fn blank_driver_name_is_rejected() {
    let system = system();
    let params = TrackingCreate {
        driver_info: Some(DriverInfo::new("   ")),
        ..TrackingCreate::default()
    };
    assert!(matches!(
        system.mount(params).await,
        Err(TrackingError::InvalidDriver(_))
    ));
    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn settled_ticks_do_not_wake_watchers() {
    let system = system();
    let mut session = system.mount(with_driver()).await.unwrap();
    let mut changes = session.changes().await.unwrap();

    session.cancel().await.unwrap();
    changes.changed().await.unwrap();
    let cancelled = changes.borrow_and_update().clone();
    assert_eq!(cancelled.current_status, OrderStatus::Cancelled);

    // spans the next tick, which finds the order settled
    assert!(timeout(Duration::from_secs(20), changes.changed())
        .await
        .is_err());
    assert_eq!(
        session.settled().await,
        Some(DriverExit::Settled(OrderStatus::Cancelled))
    );
    assert_eq!(session.snapshot().await.unwrap(), cancelled);
}
