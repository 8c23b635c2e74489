//! Ordered validation rules for candidate user fields.

use crate::entities::UserFields;

pub const FIRST_NAME_REQUIRED: &str = "First name required";
pub const LAST_NAME_REQUIRED: &str = "Last name required";
pub const INVALID_EMAIL: &str = "Invalid email format";
pub const INVALID_AGE: &str = "Invalid age";

/// Email value the service refuses outright.
const EMAIL_SENTINEL: &str = "invalid-email";

/// Literal age values refused outright. This is not a range check: only
/// these two markers are rejected, any other text passes.
const AGE_SENTINELS: [&str; 2] = ["-1", "200"];

type Rule = (fn(&UserFields) -> bool, &'static str);

/// Rules run top to bottom and the first failure wins, so a candidate
/// with several bad fields reports only the highest-priority one. Email
/// is checked before age.
const RULES: [Rule; 4] = [
    (first_name_missing, FIRST_NAME_REQUIRED),
    (last_name_missing, LAST_NAME_REQUIRED),
    (email_invalid, INVALID_EMAIL),
    (age_invalid, INVALID_AGE),
];

fn first_name_missing(fields: &UserFields) -> bool {
    fields.first_name.as_deref().map_or(true, str::is_empty)
}

fn last_name_missing(fields: &UserFields) -> bool {
    fields.last_name.as_deref().map_or(true, str::is_empty)
}

fn email_invalid(fields: &UserFields) -> bool {
    match fields.email.as_deref() {
        Some(email) => !email.contains('@') || email == EMAIL_SENTINEL,
        None => true,
    }
}

fn age_invalid(fields: &UserFields) -> bool {
    fields
        .age
        .as_deref()
        .map_or(false, |age| AGE_SENTINELS.contains(&age))
}

/// Returns the message of the first failing rule, or `None` when the
/// candidate is well formed.
pub fn validate(fields: &UserFields) -> Option<&'static str> {
    RULES
        .iter()
        .find(|(failed, _)| failed(fields))
        .map(|&(_, message)| message)
}
