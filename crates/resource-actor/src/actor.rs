//! # Actor Server
//!
//! [`ResourceActor`] owns every entity of one type and is the only code that ever
//! mutates them. It processes one request at a time, so entities need no locks.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The actor that owns a collection of entities.
///
/// Each entity is kept inside a [`watch::Sender`], which doubles as its storage slot and
/// its change feed: `Get` borrows from it, `Watch` subscribes to it, and a successful
/// action that changed the entity publishes the new state with `send_if_modified`.
/// Deleting an entity drops the sender, which closes every receiver handed out for it.
///
/// # Operations
///
/// * **Create**: takes the next id from the `u32` counter, calls
///   [`ActorEntity::from_create_params`] then [`ActorEntity::on_create`], stores the result.
/// * **Get**: clones the current state, or `None`.
/// * **Watch**: subscribes a new receiver, or `NotFound`.
/// * **Delete**: calls [`ActorEntity::on_delete`], then removes the entity.
/// * **Action**: runs [`ActorEntity::handle_action`] on a working copy. The copy is
///   committed only when the action succeeds, so a failed action leaves no trace.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, watch::Sender<T>>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and its client. `buffer_size` is the mailbox capacity; senders
    /// wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the message loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    let mut item = match T::from_create_params(id.clone(), params, &context) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let (slot, _) = watch::channel(item);
                    self.store.insert(id.clone(), slot);
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(id));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).map(|slot| slot.borrow().clone());
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Watch { id, respond_to } => {
                    match self.store.get(&id) {
                        Some(slot) => {
                            debug!(entity_type, %id, watchers = slot.receiver_count() + 1, "Watch");
                            let _ = respond_to.send(Ok(slot.subscribe()));
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        }
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(slot) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let item = slot.borrow().clone();
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(slot) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut working = slot.borrow().clone();
                    let result = working.handle_action(action, &context).await;
                    match result {
                        Ok(outcome) => {
                            let changed = slot.send_if_modified(|current| {
                                if *current == working {
                                    return false;
                                }
                                *current = working;
                                true
                            });
                            info!(entity_type, %id, changed, "Action ok");
                            let _ = respond_to.send(Ok(outcome));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
