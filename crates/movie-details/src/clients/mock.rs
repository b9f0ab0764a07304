//! # Mock Movie API
//!
//! An in-memory [`MovieApi`] driven by expectations, for testing screens without
//! a network.
//!
//! ```rust
//! use movie_details::clients::{MockMovieApi, MovieApi};
//! use movie_details::model::MovieDetails;
//!
//! #[tokio::main]
//! async fn main() {
//!     let api = MockMovieApi::new();
//!     api.expect_details("1").return_ok(MovieDetails::new("Dune"));
//!
//!     let movie = api.fetch_movie_details("1").await.unwrap();
//!     assert_eq!(movie.title, "Dune");
//!     api.verify();
//! }
//! ```

use crate::clients::MovieApi;
use crate::error::ApiError;
use crate::model::MovieDetails;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// An expected `fetch_movie_details` call and its canned response.
struct Expectation {
    id: String,
    response: Result<MovieDetails, ApiError>,
}

/// A mock API that answers calls in the order expectations were registered.
///
/// # Panics
/// A call with no matching expectation, or with a different id than expected,
/// panics inside the calling task.
#[derive(Clone, Default)]
pub struct MockMovieApi {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl MockMovieApi {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `fetch_movie_details(id)` call.
    pub fn expect_details(&self, id: impl Into<String>) -> DetailsExpectationBuilder {
        DetailsExpectationBuilder {
            id: id.into(),
            expectations: Arc::clone(&self.expectations),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl MovieApi for MockMovieApi {
    async fn fetch_movie_details(&self, id: &str) -> Result<MovieDetails, ApiError> {
        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(Expectation { id: expected, response }) => {
                assert_eq!(expected, id, "fetch_movie_details called with unexpected id");
                response
            }
            None => panic!("Unexpected fetch_movie_details({id:?})"),
        }
    }
}

/// Builder for `fetch_movie_details` expectations.
pub struct DetailsExpectationBuilder {
    id: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl DetailsExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, movie: MovieDetails) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            id: self.id,
            response: Ok(movie),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ApiError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            id: self.id,
            response: Err(error),
        });
    }
}
