//! # Resource State
//!
//! The observable half of an [`AsyncResource`](crate::AsyncResource): the last
//! result, the in-flight flag, and the last failure.

use crate::error::ResourceError;

/// A snapshot of everything a consumer can observe about a resource.
#[derive(Debug, Clone)]
pub struct ResourceState<T> {
    /// Value from the most recent successful run.
    pub result: Option<T>,
    /// True while a run is outstanding.
    pub in_flight: bool,
    /// Failure from the most recent failed run.
    pub failure: Option<ResourceError>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            result: None,
            in_flight: false,
            failure: None,
        }
    }
}

impl<T> ResourceState<T> {
    /// Derives the lifecycle phase from the three fields.
    pub fn phase(&self) -> Phase {
        if self.in_flight {
            Phase::Running
        } else if self.failure.is_some() {
            Phase::Failed
        } else if self.result.is_some() {
            Phase::Succeeded
        } else {
            Phase::Idle
        }
    }

    /// True when nothing has been observed yet, which is also the state `reset()` restores.
    pub fn is_idle(&self) -> bool {
        self.phase() == Phase::Idle
    }
}

/// Lifecycle of a single logical run.
///
/// ```text
/// Idle ──run──▶ Running ──ok──▶ Succeeded
///                  │
///                  └────err───▶ Failed
/// Succeeded | Failed ──run──▶ Running
/// any ──reset──▶ Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Succeeded,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Rejection;

    #[test]
    fn test_phase_derivation() {
        let mut state = ResourceState::<u32>::default();
        assert_eq!(state.phase(), Phase::Idle);

        state.in_flight = true;
        assert_eq!(state.phase(), Phase::Running);

        state.in_flight = false;
        state.result = Some(7);
        assert_eq!(state.phase(), Phase::Succeeded);

        // A failure after a success keeps the old result but reports Failed.
        state.failure = Some(Rejection::from("boom").into());
        assert_eq!(state.phase(), Phase::Failed);
        assert_eq!(state.result, Some(7));
    }
}
