//! Session user state.
//!
//! The authenticated user is a single shared value owned by the session
//! collaborator. The form only reads it for initial field values and
//! replaces it wholesale after a successful update.

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The authenticated user as held in session state.
///
/// This is also the shape of a successful profile-update response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Read and replace the current session user.
pub trait SessionStore: Send + Sync {
    /// Snapshot of the current user.
    fn current_user(&self) -> Arc<SessionUser>;

    /// Replace the stored user with the server's updated representation.
    fn replace_user(&self, user: SessionUser);
}

/// In-process session slot.
///
/// Readers get a cheap snapshot; a successful update swaps the whole value.
pub struct InMemorySession {
    user: ArcSwap<SessionUser>,
}

impl InMemorySession {
    pub fn new(user: SessionUser) -> Self {
        Self {
            user: ArcSwap::from_pointee(user),
        }
    }
}

impl SessionStore for InMemorySession {
    fn current_user(&self) -> Arc<SessionUser> {
        self.user.load_full()
    }

    fn replace_user(&self, user: SessionUser) {
        self.user.store(Arc::new(user));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> SessionUser {
        SessionUser {
            id: uuid::Uuid::new_v4().to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            avatar_url: Some("https://cdn.example.com/avatars/jane.png".to_string()),
        }
    }

    #[test]
    fn test_replace_is_visible_to_readers() {
        let session = InMemorySession::new(sample_user());
        let before = session.current_user();

        let mut updated = sample_user();
        updated.name = "Jane Smith".to_string();
        session.replace_user(updated);

        assert_eq!(before.name, "Jane Doe");
        assert_eq!(session.current_user().name, "Jane Smith");
    }

    #[test]
    fn test_user_deserializes_without_avatar() {
        let user: SessionUser = serde_json::from_str(
            r#"{"id":"1","name":"Jane Doe","email":"jane@example.com"}"#,
        )
        .unwrap();
        assert_eq!(user.avatar_url, None);
    }
}
