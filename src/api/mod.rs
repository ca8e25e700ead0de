//! Remote profile API collaborator.
//!
//! The form talks to the profile endpoint through the `ProfileApi` trait so
//! the submit workflow can be exercised against a stub. `HttpProfileClient`
//! is the real implementation over reqwest.

mod client;

pub use client::HttpProfileClient;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::session::SessionUser;

/// Wire payload for a profile update.
///
/// The password-change section is flattened into the top level when present
/// and omitted entirely when `None`, so the endpoint never sees password keys
/// unless a change was actually requested.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdateRequest {
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub password_change: Option<PasswordChange>,
}

/// Password-change fields, only ever sent as a complete set.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Errors from the profile endpoint.
///
/// The submit workflow does not distinguish between these variants; they all
/// surface to the user as one generic failure toast.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("profile endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Remote profile-update operations.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Send the update and return the server's updated user representation.
    async fn update_profile(&self, request: &ProfileUpdateRequest) -> Result<SessionUser, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_password_change_has_two_keys() {
        let request = ProfileUpdateRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password_change: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["email", "name"]);
    }

    #[test]
    fn test_request_with_password_change_flattens_all_fields() {
        let request = ProfileUpdateRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password_change: Some(PasswordChange {
                old_password: "current-secret".to_string(),
                password: "new-secret".to_string(),
                password_confirmation: "new-secret".to_string(),
            }),
        };

        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "email",
                "name",
                "old_password",
                "password",
                "password_confirmation"
            ]
        );
        assert_eq!(object["old_password"], "current-secret");
    }
}
