//! # Resource Errors
//!
//! An operation fails with a [`Rejection`]. The resource normalizes every
//! rejection into a single [`ResourceError`] so consumers only ever match on
//! one failure type.

use std::error::Error;
use std::sync::Arc;

/// Message shown for failures that carry no error semantics of their own.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// What a wrapped operation can fail with.
///
/// Operations usually fail with a real error type (see [`Rejection::error`]),
/// but a plain value such as a string is accepted too. Those become
/// [`ResourceError::Unexpected`] once they reach the resource.
#[derive(Debug)]
pub enum Rejection {
    /// A value that already implements [`std::error::Error`].
    Error(Box<dyn Error + Send + Sync>),
    /// A value without error semantics.
    Opaque(String),
}

impl Rejection {
    /// Wraps a concrete error type.
    pub fn error(error: impl Error + Send + Sync + 'static) -> Self {
        Rejection::Error(Box::new(error))
    }

    /// Wraps a value that is not an error.
    pub fn opaque(value: impl Into<String>) -> Self {
        Rejection::Opaque(value.into())
    }
}

impl From<Box<dyn Error + Send + Sync>> for Rejection {
    fn from(error: Box<dyn Error + Send + Sync>) -> Self {
        Rejection::Error(error)
    }
}

impl From<String> for Rejection {
    fn from(value: String) -> Self {
        Rejection::Opaque(value)
    }
}

impl From<&str> for Rejection {
    fn from(value: &str) -> Self {
        Rejection::Opaque(value.to_owned())
    }
}

/// The normalized failure stored by an [`AsyncResource`](crate::AsyncResource).
///
/// Cloneable so snapshots of the resource state can be handed out freely.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResourceError {
    /// The operation failed with a real error, kept as-is.
    #[error("{0}")]
    Operation(Arc<dyn Error + Send + Sync>),

    /// The operation failed with something that is not an error.
    #[error("An unexpected error occurred")]
    Unexpected {
        /// The original value, for logs only.
        detail: String,
    },
}

impl ResourceError {
    /// The user-facing message for this failure.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The original error, when the operation failed with one.
    pub fn source_error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            ResourceError::Operation(error) => Some(error.as_ref()),
            ResourceError::Unexpected { .. } => None,
        }
    }
}

impl From<Rejection> for ResourceError {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::Error(error) => ResourceError::Operation(Arc::from(error)),
            Rejection::Opaque(detail) => ResourceError::Unexpected { detail },
        }
    }
}
