//! Input validation for item payloads.
//!
//! Every rule is checked and all violations are reported together.

use crate::error::{ItemError, ItemResult};
use crate::models::NewItem;

pub const NAME_EMPTY: &str = "name must not be empty";
pub const DESCRIPTION_EMPTY: &str = "description must not be empty";
pub const EMAIL_INVALID: &str = "invalid email format";

/// Validates a create/update payload
pub fn validate_new_item(item: &NewItem) -> ItemResult<()> {
    let mut violations = Vec::new();

    if item.name.is_empty() {
        violations.push(NAME_EMPTY.to_string());
    }

    if item.description.is_empty() {
        violations.push(DESCRIPTION_EMPTY.to_string());
    }

    if item.email.as_deref().is_some_and(|email| !is_valid_email(email)) {
        violations.push(EMAIL_INVALID.to_string());
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ItemError::Validation(violations))
    }
}

/// Accepts `local@domain` where both sides are non-empty; either side may
/// itself contain `@`.
fn is_valid_email(email: &str) -> bool {
    email
        .char_indices()
        .any(|(i, c)| c == '@' && i > 0 && i + 1 < email.len())
}
