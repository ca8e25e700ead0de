//! Profile edit screen core.
//!
//! A validated profile-update form: conditional password-change rules
//! evaluated without short-circuiting, a field-error extractor for display,
//! and a submit workflow that PUTs the update, replaces the session user,
//! navigates to the dashboard, and emits a toast.

pub mod api;
pub mod config;
pub mod form;
pub mod logging;
pub mod navigation;
pub mod notifications;
pub mod session;
pub mod validation;

pub use api::{ApiError, HttpProfileClient, PasswordChange, ProfileApi, ProfileUpdateRequest};
pub use form::{ProfileEditForm, ProfileFormInput, SubmitOutcome};
pub use navigation::{HistoryNavigator, Navigator};
pub use notifications::{ChannelNotifier, Notifier, Toast, ToastKind, TracingNotifier};
pub use session::{InMemorySession, SessionStore, SessionUser};
pub use validation::{field_errors, validate, FieldError, ValidationError};
