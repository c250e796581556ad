//! # Mock Clients for Testing
//!
//! Two ways to stand in for a real actor:
//!
//! - [`MockClient`]: queue the replies you want (`expect_get(id).return_ok(..)`) and
//!   hand `mock.client()` to the code under test. Requests are answered in order;
//!   [`MockClient::verify`] fails the test if a request did not match or an
//!   expectation was never consumed.
//! - [`create_mock_client`] plus [`expect_create`] / [`expect_action`]: receive the raw
//!   request yourself, assert on its payload, and answer through its responder.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | State | scripted replies | real store |
//! | Error injection | `return_err(..)` | needs specific state |
//! | Use case | logic *around* a client | the actor itself |
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Venue { id: u32 }
//! #[derive(Debug)] struct VenueCreate;
//! #[derive(Debug)] struct VenueUpdate;
//! #[derive(Debug)] enum VenueAction {}
//! #[derive(Debug, thiserror::Error)] #[error("venue error")] struct VenueError;
//!
//! #[async_trait]
//! impl ActorEntity for Venue {
//!     type Id = u32; type Create = VenueCreate; type Update = VenueUpdate;
//!     type Action = VenueAction; type ActionResult = (); type Context = (); type Error = VenueError;
//!     fn from_create_params(id: u32, _: VenueCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: VenueUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: VenueAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Venue>::new();
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = mock.client().get(1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Scripted reply for one request kind.
enum Reply<T: ActorEntity> {
    Get(Result<Option<T>, FrameworkError>),
    Create(Result<T::Id, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Update(Result<T, FrameworkError>),
    Delete(Result<(), FrameworkError>),
    Action(Result<T::ActionResult, FrameworkError>),
}

impl<T: ActorEntity> Reply<T> {
    fn kind(&self) -> &'static str {
        match self {
            Reply::Get(_) => "Get",
            Reply::Create(_) => "Create",
            Reply::List(_) => "List",
            Reply::Update(_) => "Update",
            Reply::Delete(_) => "Delete",
            Reply::Action(_) => "Action",
        }
    }
}

struct Expectation<T: ActorEntity> {
    /// `None` for requests that carry no id (Create, List).
    id: Option<T::Id>,
    reply: Reply<T>,
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn request_kind<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Get { .. } => "Get",
        ResourceRequest::Create { .. } => "Create",
        ResourceRequest::List { .. } => "List",
        ResourceRequest::Update { .. } => "Update",
        ResourceRequest::Delete { .. } => "Delete",
        ResourceRequest::Action { .. } => "Action",
    }
}

fn check_id<T: ActorEntity>(expected: Option<T::Id>, actual: &T::Id) -> Result<(), String> {
    match expected {
        Some(expected) if &expected != actual => {
            Err(format!("expected id {expected}, got {actual}"))
        }
        _ => Ok(()),
    }
}

fn answer<R>(respond_to: oneshot::Sender<Result<R, FrameworkError>>, reply: Result<R, FrameworkError>) {
    let _ = respond_to.send(reply);
}

/// Answers `request` from `expectation`. On mismatch the responder is dropped, so
/// the caller sees `FrameworkError::ActorDropped`, and the reason is returned.
fn dispatch<T: ActorEntity>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
) -> Result<(), String> {
    let Some(Expectation { id: expected, reply }) = expectation else {
        return Err(format!("unexpected {} request", request_kind(&request)));
    };

    match (request, reply) {
        (ResourceRequest::Get { id, respond_to }, Reply::Get(r)) => {
            check_id::<T>(expected, &id)?;
            answer(respond_to, r);
        }
        (ResourceRequest::Create { respond_to, .. }, Reply::Create(r)) => answer(respond_to, r),
        (ResourceRequest::List { respond_to }, Reply::List(r)) => answer(respond_to, r),
        (ResourceRequest::Update { id, respond_to, .. }, Reply::Update(r)) => {
            check_id::<T>(expected, &id)?;
            answer(respond_to, r);
        }
        (ResourceRequest::Delete { id, respond_to }, Reply::Delete(r)) => {
            check_id::<T>(expected, &id)?;
            answer(respond_to, r);
        }
        (ResourceRequest::Action { id, respond_to, .. }, Reply::Action(r)) => {
            check_id::<T>(expected, &id)?;
            answer(respond_to, r);
        }
        (request, reply) => {
            return Err(format!(
                "expected {} request, got {}",
                reply.kind(),
                request_kind(&request)
            ));
        }
    }
    Ok(())
}

/// A mock client with expectation tracking for fluent testing.
///
/// ```ignore
/// let mut listings = MockClient::<Listing>::new();
/// listings
///     .expect_action(ListingId(1))
///     .return_ok(ListingActionResult::Reserve(ValidationResult::Accepted { duration_hours: 1.0 }));
///
/// let client = ListingClient::new(listings.client());
/// // exercise code that reserves a slot...
/// listings.verify();
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    failures: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime: the replies are served from a
    /// background task.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let failures = Arc::new(Mutex::new(Vec::new()));

        let queued = expectations.clone();
        let failed = failures.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queued.lock().expect("mock expectations poisoned").pop_front();
                if let Err(reason) = dispatch(request, next) {
                    failed.lock().expect("mock failures poisoned").push(reason);
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            failures,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn builder<R>(&mut self, id: Option<T::Id>, wrap: fn(Result<R, FrameworkError>) -> Reply<T>) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            id,
            wrap,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get` of `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Some(id), Reply::Get)
    }

    /// Expects a `create`, whatever its payload.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(None, Reply::Create)
    }

    /// Expects a `list`.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(None, Reply::List)
    }

    /// Expects an `update` of `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Some(id), Reply::Update)
    }

    /// Expects a `delete` of `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(Some(id), Reply::Delete)
    }

    /// Expects an action on `id`, whatever the action.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(Some(id), Reply::Action)
    }

    /// Panics if a request did not match its expectation or if expectations remain.
    pub fn verify(&self) {
        let failures = self.failures.lock().expect("mock failures poisoned");
        if !failures.is_empty() {
            panic!("Mock received unexpected requests: {}", failures.join("; "));
        }
        let remaining = self.expectations.lock().expect("mock expectations poisoned");
        if !remaining.is_empty() {
            panic!("Not all expectations were met. {} remaining", remaining.len());
        }
    }
}

/// Records the reply for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    id: Option<T::Id>,
    wrap: fn(Result<R, FrameworkError>) -> Reply<T>,
    expectations: Expectations<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let reply = (self.wrap)(response);
        self.expectations
            .lock()
            .expect("mock expectations poisoned")
            .push_back(Expectation { id: self.id, reply });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
///
/// Use it when the payload of the request matters: pull the request with
/// [`expect_create`] or [`expect_action`], assert on it, then answer through the
/// returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Returns the next request if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Room {
        id: u32,
        seats: u32,
    }

    #[derive(Debug)]
    struct RoomCreate {
        seats: u32,
    }

    #[derive(Debug)]
    struct RoomUpdate;

    #[derive(Debug)]
    enum RoomAction {
        Hold,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Room error")]
    struct RoomError;

    #[async_trait]
    impl ActorEntity for Room {
        type Id = u32;
        type Create = RoomCreate;
        type Update = RoomUpdate;
        type Action = RoomAction;
        type ActionResult = bool;
        type Context = ();
        type Error = RoomError;

        fn from_create_params(id: u32, params: RoomCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                seats: params.seats,
            })
        }

        async fn on_update(&mut self, _update: RoomUpdate, _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _action: RoomAction, _ctx: &()) -> Result<bool, Self::Error> {
            Ok(true)
        }
    }

    #[tokio::test]
    async fn test_raw_channel_create() {
        let (client, mut receiver) = create_mock_client::<Room>(10);

        let create_task = tokio::spawn(async move { client.create(RoomCreate { seats: 12 }).await });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.seats, 12);
        responder.send(Ok(7)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(7)));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Room>::new();
        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(Room { id: 1, seats: 30 }));
        mock.expect_action(1).return_ok(true);
        mock.expect_delete(1).return_ok(());

        let client = mock.client();
        assert_eq!(client.create(RoomCreate { seats: 30 }).await.unwrap(), 1);
        assert_eq!(client.get(1).await.unwrap().unwrap().seats, 30);
        assert!(client.perform_action(1, RoomAction::Hold).await.unwrap());
        client.delete(1).await.unwrap();

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "expected id 1, got 2")]
    async fn test_mock_client_flags_wrong_id() {
        let mut mock = MockClient::<Room>::new();
        mock.expect_get(1).return_ok(None);

        let result = mock.client().get(2).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "1 remaining")]
    async fn test_verify_reports_unmet_expectations() {
        let mut mock = MockClient::<Room>::new();
        mock.expect_list().return_ok(vec![]);
        mock.verify();
    }
}
