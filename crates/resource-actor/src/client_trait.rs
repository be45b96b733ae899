//! # ActorClient Trait
//!
//! Shared plumbing for domain clients that wrap a [`ResourceClient`]: `get`, `watch` and
//! `delete` come for free once `inner` and `map_error` are provided.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for domain-specific clients built on a `ResourceClient<T>`.
///
/// # Example
///
/// ```rust
/// use resource_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug, PartialEq)] struct Ticket { id: u32 }
/// #[derive(Debug)] struct TicketCreate;
/// #[derive(Debug)] enum TicketAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct TicketError(String);
///
/// #[async_trait]
/// impl ActorEntity for Ticket {
///     type Id = u32; type Create = TicketCreate; type Action = TicketAction;
///     type ActionResult = (); type Context = (); type Error = TicketError;
///     fn from_create_params(id: u32, _: TicketCreate, _: &()) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn handle_action(&mut self, _: TicketAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct TicketClient { inner: ResourceClient<Ticket> }
///
/// #[async_trait]
/// impl ActorClient<Ticket> for TicketClient {
///     type Error = TicketError;
///     fn inner(&self) -> &ResourceClient<Ticket> { &self.inner }
///     fn map_error(e: FrameworkError) -> TicketError { TicketError(e.to_string()) }
/// }
///
/// async fn usage(client: TicketClient) {
///     let _ = client.get(1).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The domain error type.
    type Error: Send + Sync;

    /// The wrapped generic client.
    fn inner(&self) -> &ResourceClient<T>;

    /// Maps runtime errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Subscribe to an entity's committed states.
    #[tracing::instrument(skip(self))]
    async fn watch(&self, id: T::Id) -> Result<watch::Receiver<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().watch(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
