//! Navigation between screens.

use std::sync::{Arc, Mutex};
use tracing::debug;

/// The one navigation action the details screen needs.
pub trait Navigator: Send + Sync {
    /// Return to the previous screen.
    fn back(&self);
}

/// A stack of routes, newest last.
///
/// Cloning shares the same stack, so a screen can hold one clone while the app
/// holds another.
#[derive(Clone, Debug, Default)]
pub struct Router {
    stack: Arc<Mutex<Vec<String>>>,
}

impl Router {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            stack: Arc::new(Mutex::new(vec![root.into()])),
        }
    }

    pub fn push(&self, route: impl Into<String>) {
        let route = route.into();
        debug!(%route, "Push");
        self.lock().push(route);
    }

    /// The route on top of the stack.
    pub fn current(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    pub fn depth(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // Every critical section is a single Vec operation.
        self.stack.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Navigator for Router {
    /// Pops the current route. The root route is never popped.
    fn back(&self) {
        let mut stack = self.lock();
        if stack.len() > 1 {
            let left = stack.pop();
            debug!(?left, "Back");
        }
    }
}
