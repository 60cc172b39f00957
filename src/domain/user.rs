//! Registered owner account as returned by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered restaurant owner.
///
/// Immutable from the client's perspective after creation; the backend
/// owns every field, including the timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable internal identifier.
    pub id: String,

    /// Unique public identifier, distinct from `id`.
    #[serde(rename = "uniqueID")]
    pub unique_id: String,

    /// Unique, RFC-valid email address.
    pub email: String,

    /// Display username, at least 3 characters.
    pub username: String,

    /// Server-managed creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Server-managed last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_shape() {
        let json = serde_json::json!({
            "id": "u1",
            "uniqueID": "pub-u1",
            "email": "alice@example.com",
            "username": "alice",
            "createdAt": "2024-01-10T09:00:00Z",
            "updatedAt": "2024-01-11T09:00:00Z"
        });
        let user: User = serde_json::from_value(json).unwrap();
        assert_eq!(user.unique_id, "pub-u1");
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn round_trips_unique_id_field_name() {
        let user = User {
            id: "u1".to_string(),
            unique_id: "pub-u1".to_string(),
            email: "alice@example.com".to_string(),
            username: "alice".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("uniqueID").is_some());
        assert!(value.get("createdAt").is_some());
    }
}
