//! API Gateway v2 input types.
//!
//! Path parameters (`apiId`, `authorizerId`) are carried as ordinary fields;
//! the transport layer is expected to fill them from the URI. Every optional
//! field is an explicit `Option` so an update can tell "not supplied" apart
//! from "set to empty".

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{AuthorizerType, JwtConfiguration, ProtocolType};

// ---------------------------------------------------------------------------
// APIs
// ---------------------------------------------------------------------------

/// Input for the `CreateApi` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiInput {
    /// Name of the API.
    pub name: String,

    /// `HTTP` or `WEBSOCKET`.
    pub protocol_type: ProtocolType,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Expression selecting the route for a request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_selection_expression: Option<String>,

    /// Expression selecting the API key for a request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_selection_expression: Option<String>,

    /// Whether the default `execute-api` endpoint is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_execute_api_endpoint: Option<bool>,

    /// Version label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Resource tags.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

/// Input for the `GetApi` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetApiInput {
    pub api_id: String,
}

/// Input for the `GetApis` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetApisInput {}

/// Input for the `DeleteApi` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteApiInput {
    pub api_id: String,
}

// ---------------------------------------------------------------------------
// Authorizers
// ---------------------------------------------------------------------------

/// Input for the `CreateAuthorizer` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorizerInput {
    /// The API the authorizer belongs to.
    pub api_id: String,

    /// `REQUEST` or `JWT`.
    pub authorizer_type: AuthorizerType,

    /// Name of the authorizer.
    pub name: String,

    /// Request locations that carry the identity (may be empty).
    #[serde(default)]
    pub identity_source: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_credentials_arn: Option<String>,

    /// Required for `REQUEST` authorizers on HTTP APIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_payload_format_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_result_ttl_in_seconds: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_simple_responses: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_validation_expression: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_configuration: Option<JwtConfiguration>,
}

/// Input for the `GetAuthorizer` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAuthorizerInput {
    pub api_id: String,
    pub authorizer_id: String,
}

/// Input for the `GetAuthorizers` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAuthorizersInput {
    pub api_id: String,
}

/// Input for the `UpdateAuthorizer` operation.
///
/// Only fields that are `Some` are applied; everything else keeps its
/// current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuthorizerInput {
    pub api_id: String,
    pub authorizer_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_type: Option<AuthorizerType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_source: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_credentials_arn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_payload_format_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_result_ttl_in_seconds: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_simple_responses: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_validation_expression: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_configuration: Option<JwtConfiguration>,
}

/// Input for the `DeleteAuthorizer` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAuthorizerInput {
    pub api_id: String,
    pub authorizer_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_distinguish_absent_from_empty_on_update() {
        let input: UpdateAuthorizerInput = serde_json::from_str(
            r#"{"apiId":"a","authorizerId":"b","authorizerCredentialsArn":""}"#,
        )
        .expect("deserialize UpdateAuthorizerInput");
        assert_eq!(input.authorizer_credentials_arn.as_deref(), Some(""));
        assert!(input.name.is_none());
        assert!(input.identity_source.is_none());
    }

    #[test]
    fn test_should_default_identity_source_to_empty() {
        let input: CreateAuthorizerInput = serde_json::from_str(
            r#"{"apiId":"a","authorizerType":"JWT","name":"auth1"}"#,
        )
        .expect("deserialize CreateAuthorizerInput");
        assert_eq!(input.authorizer_type, AuthorizerType::Jwt);
        assert!(input.identity_source.is_empty());
    }
}
