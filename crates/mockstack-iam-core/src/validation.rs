//! Validation for IAM requests.
//!
//! Every check runs before the state lock is taken, so a rejected request
//! never leaves partial changes behind.

use mockstack_core::arn::PolicyArn;
use mockstack_iam_model::error::IamError;

/// Maximum length of a group, user, or policy name.
const MAX_NAME_LEN: usize = 128;

/// Maximum length of a path.
const MAX_PATH_LEN: usize = 512;

/// Path used when the caller gives none.
pub const DEFAULT_PATH: &str = "/";

/// Validate an entity or policy name.
///
/// Names are 1-128 characters from `[A-Za-z0-9+=,.@_-]`.
///
/// # Errors
///
/// `ValidationError` naming the offending parameter.
///
/// # Examples
///
/// ```
/// use mockstack_iam_core::validation::validate_name;
///
/// assert!(validate_name("groupName", "my-group").is_ok());
/// assert!(validate_name("groupName", "my group").is_err());
/// ```
pub fn validate_name(param: &str, value: &str) -> Result<(), IamError> {
    if value.is_empty() || value.chars().count() > MAX_NAME_LEN {
        return Err(IamError::validation(format!(
            "1 validation error detected: Value '{value}' at '{param}' failed to satisfy \
             constraint: Member must have length between 1 and {MAX_NAME_LEN}"
        )));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '=' | ',' | '.' | '@' | '_' | '-'))
    {
        return Err(IamError::validation(format!(
            "1 validation error detected: Value '{value}' at '{param}' failed to satisfy \
             constraint: Member must satisfy regular expression pattern: [\\w+=,.@-]+"
        )));
    }
    Ok(())
}

/// Validate a path and return it, or the default path when absent.
///
/// A path starts with `/` and holds 1-512 printable ASCII characters. It is
/// used verbatim, so a missing trailing slash is kept as is.
///
/// # Errors
///
/// `ValidationError` naming the offending parameter.
pub fn validate_path<'a>(param: &str, value: Option<&'a str>) -> Result<&'a str, IamError> {
    let Some(path) = value else {
        return Ok(DEFAULT_PATH);
    };
    let printable = path.chars().all(|c| ('!'..='~').contains(&c));
    if !path.starts_with('/') || path.len() > MAX_PATH_LEN || !printable {
        return Err(IamError::validation(format!(
            "1 validation error detected: Value '{path}' at '{param}' failed to satisfy \
             constraint: Member must satisfy regular expression pattern: \
             (\\u002F)|(\\u002F[\\u0021-\\u007F]+\\u002F)"
        )));
    }
    Ok(path)
}

/// Validate a path prefix filter.
///
/// # Errors
///
/// `ValidationError` if the prefix does not start with `/`.
pub fn validate_path_prefix(value: Option<&str>) -> Result<(), IamError> {
    match value {
        Some(prefix) if !prefix.starts_with('/') => Err(IamError::validation(format!(
            "1 validation error detected: Value '{prefix}' at 'pathPrefix' failed to satisfy \
             constraint: Member must start with '/'"
        ))),
        _ => Ok(()),
    }
}

/// Parse a managed-policy ARN.
///
/// # Errors
///
/// `InvalidInput` when the string is not `arn:{partition}:iam::{account}:policy/...`.
pub fn validate_policy_arn(arn: &str) -> Result<PolicyArn<'_>, IamError> {
    PolicyArn::parse(arn).ok_or_else(|| IamError::invalid_input(format!("ARN {arn} is not valid.")))
}
