//! # Movie Details
//!
//! The movie details screen and everything it talks to.
//!
//! ## Module Tour
//!
//! - **[model]**: The [`MovieDetails`](model::MovieDetails) record as the API returns it.
//! - **[clients]**: The [`MovieApi`](clients::MovieApi) seam, the HTTP
//!   [`TmdbClient`](clients::TmdbClient), and [`MockMovieApi`](clients::MockMovieApi) for tests.
//! - **[view]**: Pure formatting: poster URL, release year, `"$165.0 million"`, joined names.
//! - **[screen]**: [`MovieDetailsScreen`](screen::MovieDetailsScreen), which consumes an
//!   [`AsyncResource`](async_resource::AsyncResource) and decides what to draw, plus navigation.
//! - **[config]**: [`TmdbConfig`](config::TmdbConfig), loaded from `.env` and the environment.
//!
//! ## Quick Start
//!
//! ```bash
//! TMDB_API_KEY=... RUST_LOG=info cargo run -p movie-details -- 438631
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod model;
pub mod screen;
pub mod view;
