//! Plain data structures (DTOs) returned by the movie API.

pub mod movie;

pub use movie::*;
