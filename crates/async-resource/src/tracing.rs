//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Runs**: every [`AsyncResource::run`](crate::AsyncResource::run) opens a `run`
//!   span with the resource type and a per-resource run number.
//! - **Transitions**: `Started`, `Succeeded` and `Reset` at `debug`.
//! - **Failures**: `Failed` at `warn`, with the normalized message and the raw detail.
//!
//! ```bash
//! RUST_LOG=info cargo run -p movie-details -- 438631
//! RUST_LOG=debug cargo run -p movie-details -- 438631
//! RUST_LOG=async_resource=debug,movie_details=info cargo run -p movie-details -- 438631
//! ```
//!
//! With `RUST_LOG=debug` a single fetch looks like:
//!
//! ```text
//! DEBUG run: Started resource="MovieDetails" run=1
//! DEBUG run:fetch_movie_details: Sending request id="438631"
//! DEBUG run: Succeeded resource="MovieDetails" run=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // The run span already names the resource
        .compact()
        .init();
}
