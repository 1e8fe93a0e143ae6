//! Mapping from resource-store errors to IAM errors.

use mockstack_core::StoreError;
use mockstack_iam_model::error::IamError;

use crate::state::{GROUP_KIND, POLICY_KIND, USER_KIND};

/// Convert a store error into the matching IAM error.
///
/// Group creation conflicts keep their legacy shape (text in the code slot,
/// no message); group renames report `Conflict`.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn store_error_to_iam(e: StoreError) -> IamError {
    match e {
        StoreError::NotFound { kind, ref key } => match kind {
            GROUP_KIND => IamError::group_not_found(key),
            USER_KIND => IamError::user_not_found(key),
            POLICY_KIND => IamError::policy_not_found(key),
            _ => IamError::no_such_entity(e.to_string()),
        },
        StoreError::AlreadyExists { kind, ref key } => match kind {
            GROUP_KIND => IamError::group_already_exists(key),
            USER_KIND => IamError::entity_already_exists(format!("User {key} already exists")),
            POLICY_KIND => IamError::entity_already_exists(format!(
                "A policy called {key} already exists. Duplicate names are not allowed."
            )),
            _ => IamError::entity_already_exists(e.to_string()),
        },
        StoreError::Conflict { kind, ref key } => match kind {
            GROUP_KIND => IamError::conflict(format!("Group {key} already exists")),
            USER_KIND => IamError::entity_already_exists(format!("User {key} already exists")),
            _ => IamError::conflict(e.to_string()),
        },
    }
}
