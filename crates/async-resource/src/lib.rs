//! # Async Resource
//!
//! This crate provides [`AsyncResource`], a small building block for screens and
//! services that load one thing asynchronously and need to know, at any moment,
//! whether it is loading, what it produced, and why it failed.
//!
//! ## The Contract
//!
//! An `AsyncResource<T>` wraps a zero-argument operation returning
//! `Future<Output = Result<T, E>>` and tracks three fields:
//!
//! - `result` – the value from the last successful run
//! - `in_flight` – true exactly while a run is outstanding
//! - `failure` – the error from the last failed run
//!
//! [`run`](AsyncResource::run) re-runs the operation and [`reset`](AsyncResource::reset)
//! restores the initial state. Neither returns the value: callers read the fields back
//! (or [`subscribe`](AsyncResource::subscribe) to changes) after awaiting.
//!
//! ```rust
//! use async_resource::{AsyncResource, Phase};
//!
//! #[tokio::main]
//! async fn main() {
//!     let resource =
//!         AsyncResource::with_auto_start(|| async { Err::<u32, _>("network down") }, false);
//!     assert_eq!(resource.phase(), Phase::Idle);
//!
//!     resource.run().await;
//!     assert_eq!(resource.phase(), Phase::Failed);
//!     assert_eq!(resource.failure().unwrap().message(), "An unexpected error occurred");
//! }
//! ```
//!
//! ## Error Normalization
//!
//! Operations fail with anything convertible into a [`Rejection`]. Real errors are kept
//! as-is; values without error semantics (a bare string, say) are reported as
//! [`ResourceError::Unexpected`]. Failures are caught inside `run` and never re-raised.
//!
//! ## Concurrency Model
//!
//! - One suspension point per run: the await on the operation.
//! - No serialization of overlapping runs: the last one to settle wins.
//! - No cancellation: `reset` during a run is overwritten when that run settles.
//!
//! ## Testing
//!
//! See the [`mock`] module for an operation that tests settle by hand.

pub mod error;
pub mod mock;
pub mod resource;
pub mod state;
pub mod tracing;

// Re-export core types for convenience
pub use error::{Rejection, ResourceError, UNEXPECTED_ERROR};
pub use resource::{AsyncResource, OperationFuture};
pub use state::{Phase, ResourceState};
