//! # Mock Operations & Testing Guide
//!
//! Testing an [`AsyncResource`](crate::AsyncResource) means observing it *while* a
//! run is outstanding, which a plain `async { Ok(v) }` operation never allows.
//! [`controlled`] returns an operation whose every invocation parks until the
//! test settles it through an [`OperationController`].
//!
//! ## Pattern: hold a run in flight
//!
//! ```rust
//! use async_resource::{mock, AsyncResource};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (operation, mut controller) = mock::controlled::<&'static str>();
//!     let resource = AsyncResource::with_auto_start(operation, false);
//!
//!     tokio::join!(resource.run(), async {
//!         let call = controller.next_call().await;
//!         assert!(resource.in_flight());
//!         call.resolve("done");
//!     });
//!
//!     assert_eq!(resource.result(), Some("done"));
//! }
//! ```
//!
//! ## Pattern: auto-started resources
//!
//! With `AsyncResource::new` the first run is spawned. Wait for it with
//! [`OperationController::next_call`], settle it, then await
//! [`AsyncResource::settled`](crate::AsyncResource::settled).

use crate::error::Rejection;
use crate::resource::OperationFuture;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// Errors produced by the mock itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MockError {
    #[error("Pending call was dropped before it was settled")]
    Abandoned,
}

/// Creates an operation that is settled by hand, and the controller that settles it.
pub fn controlled<T>() -> (
    impl Fn() -> OperationFuture<T> + Send + Sync + 'static,
    OperationController<T>,
)
where
    T: Send + 'static,
{
    let (sender, receiver) = mpsc::unbounded_channel::<oneshot::Sender<Result<T, Rejection>>>();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let operation = move || -> OperationFuture<T> {
        counter.fetch_add(1, Ordering::SeqCst);
        let (respond_to, response) = oneshot::channel();
        // The controller may be gone; the call then reads as abandoned.
        let _ = sender.send(respond_to);
        Box::pin(async move {
            response
                .await
                .unwrap_or_else(|_| Err(Rejection::error(MockError::Abandoned)))
        })
    };

    let controller = OperationController { receiver, calls };
    (operation, controller)
}

/// Test-side handle for a [`controlled`] operation.
pub struct OperationController<T> {
    receiver: mpsc::UnboundedReceiver<oneshot::Sender<Result<T, Rejection>>>,
    calls: Arc<AtomicUsize>,
}

impl<T> OperationController<T> {
    /// Waits for the next invocation of the operation.
    ///
    /// # Panics
    /// If the operation has been dropped and no invocations are pending.
    pub async fn next_call(&mut self) -> PendingCall<T> {
        let respond_to = self
            .receiver
            .recv()
            .await
            .expect("operation dropped while waiting for a call");
        PendingCall { respond_to }
    }

    /// Number of times the operation has been invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// One outstanding invocation of a [`controlled`] operation.
pub struct PendingCall<T> {
    respond_to: oneshot::Sender<Result<T, Rejection>>,
}

impl<T> PendingCall<T> {
    /// Settles the call successfully.
    pub fn resolve(self, value: T) {
        let _ = self.respond_to.send(Ok(value));
    }

    /// Settles the call with a failure.
    pub fn reject(self, rejection: impl Into<Rejection>) {
        let _ = self.respond_to.send(Err(rejection.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_calls_are_counted_and_settled_in_order() {
        let (operation, mut controller) = controlled::<u8>();

        let first = tokio::spawn(operation());
        let second = tokio::spawn(operation());

        controller.next_call().await.resolve(1);
        controller.next_call().await.reject("nope");

        assert_eq!(controller.calls(), 2);
        assert_eq!(first.await.unwrap().unwrap(), 1);
        assert!(matches!(second.await.unwrap(), Err(Rejection::Opaque(msg)) if msg == "nope"));
    }

    #[tokio::test]
    async fn test_dropped_call_is_abandoned() {
        let (operation, mut controller) = controlled::<u8>();
        let pending = tokio::spawn(operation());

        drop(controller.next_call().await);

        match pending.await.unwrap() {
            Err(Rejection::Error(error)) => {
                assert_eq!(error.to_string(), MockError::Abandoned.to_string())
            }
            other => panic!("Expected abandoned call, got {other:?}"),
        }
    }
}
