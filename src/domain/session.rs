//! The client-local authentication state.
//!
//! Exactly one of three modes holds at any time; a bearer token exists iff
//! the session is `Authenticated`. The persisted record encodes the mode
//! as a pair of booleans (`isAuthenticated`, `isGuest`) which admits
//! contradictory combinations; the tagged variant makes those
//! unrepresentable in memory.

use serde::{Deserialize, Serialize};

use super::User;

/// Client-local session mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    /// No user, no token. The initial state.
    #[default]
    Anonymous,
    /// A signed-in owner with an opaque bearer token.
    Authenticated { user: User, token: String },
    /// Read-only browsing without an account.
    Guest,
}

impl Session {
    /// The bearer token, present iff `Authenticated`.
    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }

    /// The signed-in user, present iff `Authenticated`.
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    /// True for `Authenticated`.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    /// True for `Guest`.
    pub fn is_guest(&self) -> bool {
        matches!(self, Session::Guest)
    }
}

/// The durable `"auth-storage"` record.
///
/// Shape-compatible with the web client's persisted store:
/// `{"state":{"user":...,"token":...,"isAuthenticated":...,"isGuest":...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSession {
    pub state: PersistedState,
}

/// Inner payload of [`PersistedSession`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub is_guest: bool,
}

impl From<&Session> for PersistedSession {
    fn from(session: &Session) -> Self {
        let state = match session {
            Session::Anonymous => PersistedState {
                user: None,
                token: None,
                is_authenticated: false,
                is_guest: false,
            },
            Session::Authenticated { user, token } => PersistedState {
                user: Some(user.clone()),
                token: Some(token.clone()),
                is_authenticated: true,
                is_guest: false,
            },
            Session::Guest => PersistedState {
                user: None,
                token: None,
                is_authenticated: true,
                is_guest: true,
            },
        };
        Self { state }
    }
}

impl From<PersistedSession> for Session {
    /// Resolves the boolean encoding back into the tagged variant.
    ///
    /// `isGuest` wins over `isAuthenticated` when both are set (mutual
    /// exclusion); a record with both token and user is `Authenticated`;
    /// anything else degrades to `Anonymous`.
    fn from(persisted: PersistedSession) -> Self {
        let state = persisted.state;
        if state.is_guest {
            return Session::Guest;
        }
        match (state.user, state.token) {
            (Some(user), Some(token)) => Session::Authenticated { user, token },
            _ => Session::Anonymous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_user() -> User {
        User {
            id: "u1".to_string(),
            unique_id: "pub-u1".to_string(),
            email: "alice@example.com".to_string(),
            username: "alice".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn token_present_iff_authenticated() {
        assert!(Session::Anonymous.token().is_none());
        assert!(Session::Guest.token().is_none());
        let session = Session::Authenticated {
            user: test_user(),
            token: "T".to_string(),
        };
        assert_eq!(session.token(), Some("T"));
    }

    #[test]
    fn persisted_round_trip_authenticated() {
        let session = Session::Authenticated {
            user: test_user(),
            token: "T".to_string(),
        };
        let persisted = PersistedSession::from(&session);
        assert!(persisted.state.is_authenticated);
        assert!(!persisted.state.is_guest);
        assert_eq!(Session::from(persisted), session);
    }

    #[test]
    fn guest_flag_wins_over_authenticated_flag() {
        let persisted = PersistedSession {
            state: PersistedState {
                user: Some(test_user()),
                token: Some("T".to_string()),
                is_authenticated: true,
                is_guest: true,
            },
        };
        assert_eq!(Session::from(persisted), Session::Guest);
    }

    #[test]
    fn token_without_user_degrades_to_anonymous() {
        let persisted = PersistedSession {
            state: PersistedState {
                user: None,
                token: Some("T".to_string()),
                is_authenticated: true,
                is_guest: false,
            },
        };
        assert_eq!(Session::from(persisted), Session::Anonymous);
    }
}
