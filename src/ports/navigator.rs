//! Navigator Port - where the 401 recovery sends the user.
//!
//! The API client never touches routing directly; it emits a navigation
//! signal through this port and the embedding UI decides what a route
//! change means.

/// Route the 401 recovery policy targets.
pub const LOGIN_ROUTE: &str = "/login";

/// Port for emitting navigation signals.
pub trait Navigator: Send + Sync {
    /// Requests navigation to the given route. Fire-and-forget.
    fn navigate(&self, route: &str);
}
