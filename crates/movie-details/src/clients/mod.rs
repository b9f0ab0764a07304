//! Movie lookup: the [`MovieApi`] trait, its HTTP client and its mock.

pub mod mock;
pub mod movie_client;

pub use mock::*;
pub use movie_client::*;
