//! # Async Resource
//!
//! This module defines [`AsyncResource`], a stateful wrapper around one
//! asynchronous operation. It runs the operation on demand and records the
//! outcome in a [`ResourceState`] that consumers read back after each await.

use crate::error::{Rejection, ResourceError};
use crate::state::{Phase, ResourceState};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info_span, warn, Instrument};

/// Boxed future produced by a wrapped operation.
pub type OperationFuture<T> = Pin<Box<dyn Future<Output = Result<T, Rejection>> + Send>>;

/// Type-erased, shareable operation.
type Operation<T> = Arc<dyn Fn() -> OperationFuture<T> + Send + Sync>;

/// A stateful wrapper around a zero-argument asynchronous operation.
///
/// # Architecture Note
/// The state lives in a [`watch`] channel owned by the resource. Only [`run`](Self::run)
/// and [`reset`](Self::reset) write to it; everyone else reads a snapshot or
/// [`subscribe`](Self::subscribe)s to changes. Writes never span an await point, so
/// each step of a run is atomic with respect to other tasks.
///
/// **Concurrency Model**:
/// Runs are not serialized. Two overlapping `run()` calls each set `in_flight`,
/// each await their own operation, and each write their own outcome. Whichever
/// settles last determines the final state. `reset()` does not cancel a pending
/// run either; when that run settles it overwrites the reset state.
///
/// # Example
///
/// ```rust
/// use async_resource::AsyncResource;
///
/// #[tokio::main]
/// async fn main() {
///     let resource = AsyncResource::with_auto_start(|| async { Ok::<_, &str>(42) }, false);
///     assert!(resource.result().is_none());
///
///     resource.run().await;
///     assert_eq!(resource.result(), Some(42));
///     assert!(!resource.in_flight());
///
///     resource.reset();
///     assert!(resource.result().is_none());
/// }
/// ```
pub struct AsyncResource<T> {
    state: Arc<watch::Sender<ResourceState<T>>>,
    operation: Operation<T>,
    runs: Arc<AtomicU64>,
}

impl<T> Clone for AsyncResource<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            operation: Arc::clone(&self.operation),
            runs: Arc::clone(&self.runs),
        }
    }
}

impl<T> AsyncResource<T>
where
    T: Send + Sync + 'static,
{
    /// Creates a resource and immediately starts one run in the background.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new<F, Fut, E>(operation: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        E: Into<Rejection> + 'static,
    {
        Self::with_auto_start(operation, true)
    }

    /// Creates a resource, starting a background run only if `auto_start` is set.
    ///
    /// The background run is fire-and-forget: construction never waits for it.
    pub fn with_auto_start<F, Fut, E>(operation: F, auto_start: bool) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        E: Into<Rejection> + 'static,
    {
        let operation: Operation<T> = Arc::new(move || -> OperationFuture<T> {
            let pending = operation();
            Box::pin(async move { pending.await.map_err(Into::<Rejection>::into) })
        });
        let (state, _) = watch::channel(ResourceState::default());
        let resource = Self {
            state: Arc::new(state),
            operation,
            runs: Arc::new(AtomicU64::new(0)),
        };

        if auto_start {
            let background = resource.clone();
            tokio::spawn(async move { background.run().await });
        }

        resource
    }

    /// Runs the operation once and records its outcome.
    ///
    /// 1. Marks the resource in flight and clears the previous failure.
    /// 2. Awaits the operation.
    /// 3. Stores the value on success, or the normalized failure on error. A failed
    ///    run keeps the previous result.
    /// 4. Clears the in-flight flag, even if this future is dropped before settling.
    ///
    /// Failures are never returned to the caller; inspect [`failure`](Self::failure).
    pub async fn run(&self) {
        let run = self.runs.fetch_add(1, Ordering::SeqCst) + 1;
        let resource = resource_name::<T>();
        let span = info_span!("run", resource, run);

        async {
            self.state.send_modify(|state| {
                state.in_flight = true;
                state.failure = None;
            });
            debug!("Started");
            let _in_flight = InFlightGuard { state: &self.state };

            match (self.operation)().await {
                Ok(value) => {
                    self.state.send_modify(|state| state.result = Some(value));
                    debug!("Succeeded");
                }
                Err(rejection) => {
                    let failure = ResourceError::from(rejection);
                    warn!(error = %failure, detail = ?failure, "Failed");
                    self.state.send_modify(|state| state.failure = Some(failure));
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Clears result, failure and the in-flight flag.
    ///
    /// A run that is still pending is not cancelled and will write its outcome
    /// when it settles.
    pub fn reset(&self) {
        let was_in_flight = self.state.borrow().in_flight;
        self.state.send_replace(ResourceState::default());
        debug!(resource = resource_name::<T>(), was_in_flight, "Reset");
    }
}

impl<T> AsyncResource<T> {
    /// True while a run is outstanding.
    pub fn in_flight(&self) -> bool {
        self.state.borrow().in_flight
    }

    /// Failure from the most recent failed run, if any.
    pub fn failure(&self) -> Option<ResourceError> {
        self.state.borrow().failure.clone()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.state.borrow().phase()
    }

    /// Subscribes to state changes.
    ///
    /// The receiver sees every write made by `run` and `reset`.
    pub fn subscribe(&self) -> watch::Receiver<ResourceState<T>> {
        self.state.subscribe()
    }

    /// Waits until no run is in flight.
    ///
    /// Returns immediately when the resource is idle. With overlapping runs this
    /// resolves as soon as any of them clears the flag.
    pub async fn settled(&self) {
        let mut receiver = self.state.subscribe();
        // The sender lives as long as `self`, so this cannot fail.
        let _ = receiver.wait_for(|state| !state.in_flight).await;
    }
}

impl<T: Clone> AsyncResource<T> {
    /// Value from the most recent successful run.
    pub fn result(&self) -> Option<T> {
        self.state.borrow().result.clone()
    }

    /// A copy of the full state.
    pub fn snapshot(&self) -> ResourceState<T> {
        self.state.borrow().clone()
    }
}

/// Clears `in_flight` when a run ends, whichever way it ends.
struct InFlightGuard<'a, T> {
    state: &'a watch::Sender<ResourceState<T>>,
}

impl<T> Drop for InFlightGuard<'_, T> {
    fn drop(&mut self) {
        self.state.send_modify(|state| state.in_flight = false);
    }
}

/// Short type name for logs (e.g. "MovieDetails" instead of the full path).
fn resource_name<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use std::time::Duration;

    #[tokio::test]
    async fn test_run_stores_value_and_clears_flag() {
        let resource = AsyncResource::with_auto_start(|| async { Ok::<_, &str>("ready") }, false);
        assert_eq!(resource.phase(), Phase::Idle);

        resource.run().await;

        assert_eq!(resource.result(), Some("ready"));
        assert!(resource.failure().is_none());
        assert!(!resource.in_flight());
        assert_eq!(resource.phase(), Phase::Succeeded);
    }

    #[tokio::test]
    async fn test_failed_run_keeps_previous_result() {
        let (operation, mut controller) = mock::controlled::<u32>();
        let resource = AsyncResource::with_auto_start(operation, false);

        tokio::join!(resource.run(), async {
            controller.next_call().await.resolve(1);
        });
        tokio::join!(resource.run(), async {
            controller.next_call().await.reject("boom");
        });

        assert_eq!(resource.result(), Some(1));
        assert!(resource.failure().is_some());
        assert_eq!(resource.phase(), Phase::Failed);
    }

    #[tokio::test]
    async fn test_new_run_clears_previous_failure() {
        let (operation, mut controller) = mock::controlled::<u32>();
        let resource = AsyncResource::with_auto_start(operation, false);

        tokio::join!(resource.run(), async {
            controller.next_call().await.reject("boom");
        });
        assert!(resource.failure().is_some());

        tokio::join!(resource.run(), async {
            let call = controller.next_call().await;
            // Cleared at the start of the run, before the operation settles.
            assert!(resource.failure().is_none());
            assert!(resource.in_flight());
            call.resolve(2);
        });
        assert_eq!(resource.result(), Some(2));
        assert!(resource.failure().is_none());
    }

    #[tokio::test]
    async fn test_dropped_run_clears_in_flight() {
        let (operation, mut controller) = mock::controlled::<u32>();
        let resource = AsyncResource::with_auto_start(operation, false);

        {
            let run = resource.run();
            tokio::select! {
                _ = run => panic!("run must not settle"),
                call = controller.next_call() => {
                    assert!(resource.in_flight());
                    drop(call);
                    // Leaving the select drops the pending run future.
                }
            }
        }

        assert!(!resource.in_flight());
        assert!(resource.result().is_none());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let resource = AsyncResource::with_auto_start(|| async { Ok::<_, &str>(5u8) }, false);
        let other = resource.clone();

        other.run().await;
        assert_eq!(resource.result(), Some(5));

        resource.reset();
        assert!(other.result().is_none());
    }

    #[tokio::test]
    async fn test_settled_returns_immediately_when_idle() {
        let resource = AsyncResource::with_auto_start(|| async { Ok::<_, &str>(()) }, false);
        tokio::time::timeout(Duration::from_millis(100), resource.settled())
            .await
            .expect("settled() should not wait on an idle resource");
    }
}
