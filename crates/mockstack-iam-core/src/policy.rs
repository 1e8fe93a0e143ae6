//! Policy document parsing.
//!
//! Query-protocol clients send the document either as raw JSON or
//! percent-encoded. Documents are stored parsed so reads return structured
//! JSON regardless of how they were sent.

use mockstack_iam_model::error::IamError;
use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use serde_json::Value;

/// Message of every `MalformedPolicyDocument` error.
pub const SYNTAX_ERROR_MESSAGE: &str = "Syntax errors in policy.";

/// A parsed policy document.
#[derive(Debug, Clone)]
pub struct PolicyDocument<'a> {
    /// The JSON text after percent-decoding.
    pub text: Cow<'a, str>,
    pub value: Value,
}

impl PolicyDocument<'_> {
    /// Length of the decoded document in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Parse a policy document.
///
/// The document must be a JSON object. When `require_statement` is set it
/// must also carry a `Statement` member.
///
/// # Errors
///
/// `MalformedPolicyDocument` if the text is not valid JSON (raw or
/// percent-decoded) or the object shape is wrong.
pub fn parse_policy_document(
    raw: &str,
    require_statement: bool,
) -> Result<PolicyDocument<'_>, IamError> {
    let (text, value) = match serde_json::from_str::<Value>(raw) {
        Ok(value) => (Cow::Borrowed(raw), value),
        Err(raw_err) => {
            let decoded = percent_decode_str(raw).decode_utf8().map_err(|e| {
                IamError::malformed_policy_document(SYNTAX_ERROR_MESSAGE).with_source(e)
            })?;
            let value = serde_json::from_str::<Value>(&decoded).map_err(|_| {
                IamError::malformed_policy_document(SYNTAX_ERROR_MESSAGE).with_source(raw_err)
            })?;
            (decoded, value)
        }
    };

    let Some(object) = value.as_object() else {
        return Err(IamError::malformed_policy_document(SYNTAX_ERROR_MESSAGE));
    };
    if require_statement && !object.contains_key("Statement") {
        return Err(IamError::malformed_policy_document(SYNTAX_ERROR_MESSAGE));
    }
    Ok(PolicyDocument { text, value })
}
