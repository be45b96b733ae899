//! # System Lifecycle
//!
//! Starting, wiring and stopping the tracking runtime.
//!
//! - [`TrackingSystem`] spawns the tracking actor with its context (clock, ETA texts) and
//!   owns the actor task until [`TrackingSystem::shutdown`].
//! - [`TrackingSession`] is one mounted tracking view: it creates the order, starts its
//!   [`LifecycleDriver`](crate::driver::LifecycleDriver), and tears both down on
//!   [`TrackingSession::unmount`].
//!
//! ## Teardown
//!
//! A session's driver stops in three ways: the order reaches a terminal status, the
//! session is unmounted, or the session is dropped (the `DriverHandle` aborts its task).
//! `unmount()` additionally deletes the order, which closes every watcher on it.
//!
//! Shutdown drops the system's client; the actor exits once every other client clone
//! (sessions, drivers) is gone too.

pub mod session;
pub mod tracking_system;

pub use session::*;
pub use tracking_system::*;
