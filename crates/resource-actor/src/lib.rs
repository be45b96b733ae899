//! # Resource Actor
//!
//! A small runtime for owning stateful entities inside a single Tokio task and talking
//! to them through a typed, cloneable client.
//!
//! ## Layers
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain state and the rules that mutate it
//! 2. **Runtime Layer** ([`ResourceActor`]) - the message loop, the only writer of every entity
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - async request/response over channels
//!
//! Entities are created, read, watched, acted on and deleted. There is no generic
//! "update": every mutation goes through an explicit [`ActorEntity::Action`], so the
//! entity decides which transitions are legal.
//!
//! ## Example
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Counter { id: u32, value: u32 }
//!
//! #[derive(Debug)] struct CounterCreate { start: u32 }
//! #[derive(Debug)] enum CounterAction { Bump }
//! #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
//!
//! #[async_trait]
//! impl ActorEntity for Counter {
//!     type Id = u32;
//!     type Create = CounterCreate;
//!     type Action = CounterAction;
//!     type ActionResult = u32;
//!     type Context = ();
//!     type Error = CounterError;
//!
//!     fn from_create_params(id: u32, params: CounterCreate, _: &()) -> Result<Self, Self::Error> {
//!         Ok(Self { id, value: params.start })
//!     }
//!
//!     async fn handle_action(&mut self, action: CounterAction, _: &()) -> Result<u32, Self::Error> {
//!         match action {
//!             CounterAction::Bump => { self.value += 1; Ok(self.value) }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Counter>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(CounterCreate { start: 41 }).await.unwrap();
//!     assert_eq!(client.perform_action(id, CounterAction::Bump).await.unwrap(), 42);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task and processes messages **sequentially**.
//! - State lives in the task; clients only hold a channel sender.
//! - Observers subscribe with [`ResourceClient::watch`] and receive every committed state.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a queue of expectations, so code built on a
//! client can be tested without spawning an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
