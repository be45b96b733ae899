//! # Messages
//!
//! The request enum exchanged between [`ResourceClient`](crate::ResourceClient) and
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::{oneshot, watch};

/// One-shot channel the actor answers on.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A request to the actor.
///
/// - **Create**: build a new entity from [`ActorEntity::Create`].
/// - **Get**: clone the current state.
/// - **Watch**: subscribe to every state the entity commits from now on.
/// - **Delete**: run [`ActorEntity::on_delete`] and drop the entity (closing its watchers).
/// - **Action**: run [`ActorEntity::handle_action`], the only way an entity changes.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Watch {
        id: T::Id,
        respond_to: Response<watch::Receiver<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
