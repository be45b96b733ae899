//! # Order Tracking
//!
//! Live delivery tracking for a single order: a status that moves through
//! `confirmed → preparing → out_for_delivery → delivered` on a timer, a history of every
//! transition, and a tracking card rendered from the current state.
//!
//! ## Design
//!
//! ### Single writer
//! Every tracked order lives inside one [`ResourceActor`](resource_actor::ResourceActor).
//! The lifecycle driver, a cancel request and any observer all talk to it through a
//! [`TrackingClient`](clients::TrackingClient), so transitions are applied one at a time
//! and always in order.
//!
//! ### Commit or nothing
//! An action runs against a working copy of the order. Only a successful action is
//! committed and published to watchers, so a rejected cancel leaves no trace.
//!
//! ### Scoped timers
//! A [`DriverHandle`](driver::DriverHandle) owns the timer task. Unmounting a session,
//! dropping it, or reaching a terminal status all stop the timer; nothing mutates the
//! order afterwards.
//!
//! ## Module Tour
//!
//! - [`model`]: statuses, the tracked order and its transition rules. Pure data.
//! - [`tracking_actor`]: the `ActorEntity` impl, its actions and errors.
//! - [`clients`]: the typed client over the actor.
//! - [`driver`]: the periodic advancer.
//! - [`view`]: projection of an order into the tracking card.
//! - [`lifecycle`]: [`TrackingSystem`](lifecycle::TrackingSystem) and
//!   [`TrackingSession`](lifecycle::TrackingSession), which wire everything together.
//! - [`config`] and [`clock`]: runtime settings and time sources.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info ORDER_TRACKING_TICK=2s cargo run
//! ```

pub mod clients;
pub mod clock;
pub mod config;
pub mod driver;
pub mod lifecycle;
pub mod model;
pub mod tracking_actor;
pub mod view;
