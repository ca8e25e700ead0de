//! The profile edit form and its submit workflow.
//!
//! One submit attempt runs: clear field errors, validate, build the update
//! payload, PUT it to the profile endpoint, replace the session user,
//! navigate to the dashboard, toast. Validation failures stop before the
//! network call and only set field errors; remote failures only toast.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{PasswordChange, ProfileApi, ProfileUpdateRequest};
use crate::config::RoutesConfig;
use crate::navigation::Navigator;
use crate::notifications::{Notifier, Toast};
use crate::session::SessionStore;
use crate::validation;

/// Raw field values of one submit attempt.
///
/// An empty `old_password` means no password change was requested; the
/// other password fields are then ignored entirely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileFormInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub old_password: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password_confirmation: String,
}

impl ProfileFormInput {
    /// Build the outgoing payload.
    ///
    /// Password fields are included only when a change was requested, so the
    /// endpoint never triggers its password-change path by accident.
    pub fn into_request(self) -> ProfileUpdateRequest {
        let password_change = if self.old_password.is_empty() {
            None
        } else {
            Some(PasswordChange {
                old_password: self.old_password,
                password: self.password,
                password_confirmation: self.password_confirmation,
            })
        };

        ProfileUpdateRequest {
            name: self.name,
            email: self.email,
            password_change,
        }
    }
}

/// Result of one submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Profile updated; session replaced, user navigated away.
    Updated,
    /// Validation failed; field errors are set, nothing was sent.
    Invalid,
    /// The remote call failed; an error toast was emitted, form left intact.
    Failed,
}

/// The profile edit screen's form state and collaborators.
pub struct ProfileEditForm {
    api: Arc<dyn ProfileApi>,
    session: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    dashboard_path: String,
    field_errors: HashMap<String, String>,
}

impl ProfileEditForm {
    pub fn new(
        api: Arc<dyn ProfileApi>,
        session: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        routes: &RoutesConfig,
    ) -> Self {
        Self {
            api,
            session,
            notifier,
            navigator,
            dashboard_path: routes.dashboard.clone(),
            field_errors: HashMap::new(),
        }
    }

    /// Initial field values: current user's name and email, passwords empty.
    pub fn initial_values(&self) -> ProfileFormInput {
        let user = self.session.current_user();
        ProfileFormInput {
            name: user.name.clone(),
            email: user.email.clone(),
            ..ProfileFormInput::default()
        }
    }

    /// Field errors from the last submit attempt, for display.
    pub fn field_errors(&self) -> &HashMap<String, String> {
        &self.field_errors
    }

    /// Drop the error for one field, typically when the user edits it.
    pub fn clear_field_error(&mut self, field: &str) {
        self.field_errors.remove(field);
    }

    /// Run one submit attempt end to end.
    pub async fn submit(&mut self, input: ProfileFormInput) -> SubmitOutcome {
        self.field_errors.clear();

        if let Err(err) = validation::validate(&input) {
            self.field_errors = validation::field_errors(&err);
            return SubmitOutcome::Invalid;
        }

        let request = input.into_request();

        match self.api.update_profile(&request).await {
            Ok(user) => {
                self.session.replace_user(user);
                self.navigator.go_to(&self.dashboard_path);
                self.notifier.notify(Toast::success(
                    "Profile updated",
                    "Your profile information has been updated.",
                ));
                SubmitOutcome::Updated
            }
            Err(err) => {
                tracing::warn!("Profile update failed: {}", err);
                self.notifier.notify(Toast::error(
                    "Update failed",
                    "Something went wrong while updating your profile. Please try again.",
                ));
                SubmitOutcome::Failed
            }
        }
    }
}
