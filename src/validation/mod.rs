//! Validation for the profile edit form.
//!
//! The schema is a static table of per-field rules. Every rule whose
//! activation condition holds is evaluated, so a single attempt reports all
//! violations at once instead of stopping at the first one. The resulting
//! error preserves rule order; `field_errors` collapses it into a per-field
//! map for display.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

use crate::form::ProfileFormInput;

lazy_static! {
    /// Regex for basic email syntax (local@domain.tld, no whitespace)
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

/// A single field violation, in the order the schema produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Schema validation failure carrying every violation from one attempt.
#[derive(Debug, Clone, Error)]
#[error("validation failed for {} field(s)", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

/// One entry of the validation schema.
///
/// `active` gates whether the rule applies to this input at all; `ok` is the
/// predicate that must hold when it does.
struct Rule {
    field: &'static str,
    message: &'static str,
    active: fn(&ProfileFormInput) -> bool,
    ok: fn(&ProfileFormInput) -> bool,
}

fn always(_: &ProfileFormInput) -> bool {
    true
}

/// A non-empty current password means the user requested a password change.
fn changing_password(input: &ProfileFormInput) -> bool {
    !input.old_password.is_empty()
}

fn password_entered(input: &ProfileFormInput) -> bool {
    changing_password(input) && !input.password.is_empty()
}

fn confirmation_entered(input: &ProfileFormInput) -> bool {
    changing_password(input) && !input.password_confirmation.is_empty()
}

fn name_present(input: &ProfileFormInput) -> bool {
    !input.name.is_empty()
}

fn email_present(input: &ProfileFormInput) -> bool {
    !input.email.is_empty()
}

fn email_well_formed(input: &ProfileFormInput) -> bool {
    EMAIL_REGEX.is_match(&input.email)
}

fn password_present(input: &ProfileFormInput) -> bool {
    !input.password.is_empty()
}

fn password_long_enough(input: &ProfileFormInput) -> bool {
    input.password.chars().count() >= 6
}

fn confirmation_present(input: &ProfileFormInput) -> bool {
    !input.password_confirmation.is_empty()
}

fn confirmation_long_enough(input: &ProfileFormInput) -> bool {
    input.password_confirmation.chars().count() >= 6
}

fn confirmation_matches(input: &ProfileFormInput) -> bool {
    input.password_confirmation == input.password
}

/// The profile form schema, evaluated top to bottom.
///
/// Format and length rules activate only once their own field is non-empty,
/// so a blank field reports "required" rather than two stacked messages.
/// All password rules activate only while a password change is requested;
/// with an empty `old_password` those fields are unconstrained.
static RULES: &[Rule] = &[
    Rule {
        field: "name",
        message: "Name is required",
        active: always,
        ok: name_present,
    },
    Rule {
        field: "email",
        message: "Email is required",
        active: always,
        ok: email_present,
    },
    Rule {
        field: "email",
        message: "Enter a valid email",
        active: email_present,
        ok: email_well_formed,
    },
    Rule {
        field: "password",
        message: "New password is required",
        active: changing_password,
        ok: password_present,
    },
    Rule {
        field: "password",
        message: "Must be at least 6 characters",
        active: password_entered,
        ok: password_long_enough,
    },
    Rule {
        field: "password_confirmation",
        message: "Confirmation is required",
        active: changing_password,
        ok: confirmation_present,
    },
    Rule {
        field: "password_confirmation",
        message: "Must be at least 6 characters",
        active: confirmation_entered,
        ok: confirmation_long_enough,
    },
    Rule {
        field: "password_confirmation",
        message: "Confirmation does not match",
        active: confirmation_entered,
        ok: confirmation_matches,
    },
];

/// Validate a submit attempt against the schema, collecting all violations.
pub fn validate(input: &ProfileFormInput) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    for rule in RULES {
        if (rule.active)(input) && !(rule.ok)(input) {
            errors.push(FieldError {
                field: rule.field,
                message: rule.message,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { errors })
    }
}

/// Collapse an ordered validation failure into a field-to-message map.
///
/// Later entries for the same field overwrite earlier ones, so the displayed
/// message for a field is always the last one the schema produced. An empty
/// error list yields an empty map.
pub fn field_errors(err: &ValidationError) -> HashMap<String, String> {
    let mut map = HashMap::new();

    for error in &err.errors {
        map.insert(error.field.to_string(), error.message.to_string());
    }

    map
}
