//! Process-wide session state.

mod store;

pub use store::{SessionError, SessionStore, SESSION_KEY, TOKEN_KEY};
