//! Operator login against the static user list.
//!
//! Every account shares one demo password. This only selects which user is
//! recorded on movements; it is not an access-control mechanism.

use crate::error::{InventoryError, InventoryResult};
use crate::models::User;
use crate::validation::validate_email;

/// Password accepted for every demo account
pub const DEMO_PASSWORD: &str = "password";

/// Find the user with `email` if `password` matches the demo password
pub fn authenticate<'a>(users: &'a [User], email: &str, password: &str) -> InventoryResult<&'a User> {
    if validate_email(email).is_err() || password != DEMO_PASSWORD {
        return Err(InventoryError::InvalidCredentials);
    }

    users
        .iter()
        .find(|u| u.email == email)
        .ok_or(InventoryError::InvalidCredentials)
}
