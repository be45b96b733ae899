//! # ActorEntity Trait
//!
//! The contract a type implements to be owned by a [`ResourceActor`](crate::ResourceActor).
//! Associated types pin down the id, the creation payload, the action vocabulary, the
//! injected context and the error type, so a request for one entity can never be sent
//! to another.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any entity must implement to be managed by a `ResourceActor`.
///
/// # Context
/// `Context` is handed to `run()` rather than `new()`, and is passed to every hook.
/// Dependencies such as clocks or other clients are bound late this way.
///
/// # Equality
/// `PartialEq` decides whether an action changed anything. Watchers are only woken
/// when the committed state differs from the previous one.
///
/// # Hooks
/// [`on_create`](ActorEntity::on_create) and [`on_delete`](ActorEntity::on_delete) default
/// to doing nothing.
#[async_trait]
pub trait ActorEntity: Clone + PartialEq + Send + Sync + 'static {
    /// Identifier, generated by the actor from a `u32` counter starting at 1.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a new instance.
    type Create: Send + Sync + Debug;

    /// Entity-specific operations.
    type Action: Send + Sync + Debug;

    /// What an action returns.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into the actor. Use `()` if none.
    type Context: Send + Sync;

    /// One error enum for the whole entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its id and payload. Runs before `on_create`.
    fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    /// Called after construction, before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an action. On `Ok` the new state is stored, and published to watchers if it
    /// differs from the old one.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
