//! Navigation adapters.
//!
//! A real UI supplies its own `Navigator`; these two cover the demo
//! binary and tests.

use std::sync::Mutex;

use crate::ports::Navigator;

/// Logs navigation signals. The default for headless embeddings where a
/// route change has nowhere to go.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: &str) {
        tracing::info!(route, "navigation requested");
    }
}

/// Records every navigation signal for inspection in tests.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All routes requested so far, in order.
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_navigator_keeps_order() {
        let navigator = RecordingNavigator::new();
        navigator.navigate("/login");
        navigator.navigate("/");
        assert_eq!(navigator.routes(), ["/login", "/"]);
    }
}
