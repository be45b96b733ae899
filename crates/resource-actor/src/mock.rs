//! # Mock Client
//!
//! [`MockClient`] hands out a real [`ResourceClient`] whose requests are answered by a
//! scripted queue of expectations instead of an actor. Use it to test code that drives a
//! client (periodic tasks, orchestration) without spawning the entity's actor.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | State | none, answers are scripted | real entities |
//! | Error injection | `return_err` | needs a state that fails |
//! | Use | logic *around* the client | the entity itself, or the whole system |
//!
//! ```rust
//! use resource_actor::mock::MockClient;
//! use resource_actor::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)] struct Lamp { id: u32, on: bool }
//! #[derive(Debug)] struct LampCreate;
//! #[derive(Debug)] enum LampAction { Toggle }
//! #[derive(Debug, thiserror::Error)] #[error("lamp")] struct LampError;
//!
//! #[async_trait]
//! impl ActorEntity for Lamp {
//!     type Id = u32; type Create = LampCreate; type Action = LampAction;
//!     type ActionResult = bool; type Context = (); type Error = LampError;
//!     fn from_create_params(id: u32, _: LampCreate, _: &()) -> Result<Self, Self::Error> { Ok(Self { id, on: false }) }
//!     async fn handle_action(&mut self, _: LampAction, _: &()) -> Result<bool, Self::Error> { self.on = !self.on; Ok(self.on) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Lamp>::new();
//!     mock.expect_action(1).return_ok(true);
//!     mock.expect_action(1).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(client.perform_action(1, LampAction::Toggle).await.unwrap());
//!     assert!(matches!(
//!         client.perform_action(1, LampAction::Toggle).await,
//!         Err(FrameworkError::ActorClosed)
//!     ));
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn describe(&self) -> String {
        match self {
            Expectation::Get { id, .. } => format!("get({id})"),
            Expectation::Create { .. } => "create".to_string(),
            Expectation::Delete { id, .. } => format!("delete({id})"),
            Expectation::Action { id, .. } => format!("action({id})"),
        }
    }
}

fn describe_request<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { .. } => "create".to_string(),
        ResourceRequest::Get { id, .. } => format!("get({id})"),
        ResourceRequest::Watch { id, .. } => format!("watch({id})"),
        ResourceRequest::Delete { id, .. } => format!("delete({id})"),
        ResourceRequest::Action { id, .. } => format!("action({id})"),
    }
}

struct Script<T: ActorEntity> {
    pending: VecDeque<Expectation<T>>,
    mismatches: Vec<String>,
}

fn answer<T: ActorEntity>(script: &Mutex<Script<T>>, request: ResourceRequest<T>) {
    let mut script = script.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let expectation = script.pending.pop_front();

    match (request, expectation) {
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response }))
            if id == want =>
        {
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete { id: want, response }),
        ) if id == want => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action { id: want, response }),
        ) if id == want => {
            let _ = respond_to.send(response);
        }
        (request, expectation) => {
            let expected = expectation
                .map(|e| e.describe())
                .unwrap_or_else(|| "nothing".to_string());
            let got = describe_request(&request);
            script.mismatches.push(format!("got {got}, expected {expected}"));
        }
    }
}

/// A client double answering from a queue of expectations, in order.
///
/// A request that does not match the next expectation is recorded as a mismatch and
/// its response channel is dropped, so the caller sees [`FrameworkError::ActorDropped`].
/// [`MockClient::verify`] panics on mismatches and on leftover expectations.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    script: Arc<Mutex<Script<T>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let script = Arc::new(Mutex::new(Script {
            pending: VecDeque::new(),
            mismatches: Vec::new(),
        }));
        let shared = script.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                answer(&shared, request);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            script,
            _handle: handle,
        }
    }

    /// The client to hand to the code under test.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    fn builder<R>(
        &mut self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            script: self.script.clone(),
        }
    }

    /// Number of expectations not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.lock().map(|s| s.pending.len()).unwrap_or(0)
    }

    /// Panics if any request mismatched or any expectation is left.
    pub fn verify(&self) {
        let script = self.script.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if !script.mismatches.is_empty() {
            panic!("Unexpected requests: {}", script.mismatches.join("; "));
        }
        if !script.pending.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                script.pending.len()
            );
        }
    }
}

/// Finishes an expectation with the response the mock will send.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    script: Arc<Mutex<Script<T>>>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        if let Ok(mut script) = self.script.lock() {
            script.pending.push_back(expectation);
        }
    }
}
