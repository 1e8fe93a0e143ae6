//! API Gateway v2 output types.
//!
//! Single-resource responses are flat on the wire, so they wrap the shared
//! record with `#[serde(flatten)]`.

use serde::{Deserialize, Serialize};

use crate::types::{Api, Authorizer};

// ---------------------------------------------------------------------------
// APIs
// ---------------------------------------------------------------------------

/// Output for the `CreateApi` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateApiOutput {
    #[serde(flatten)]
    pub api: Api,
}

/// Output for the `GetApi` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetApiOutput {
    #[serde(flatten)]
    pub api: Api,
}

/// Output for the `GetApis` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetApisOutput {
    #[serde(default)]
    pub items: Vec<Api>,
}

/// Output for the `DeleteApi` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteApiOutput {}

// ---------------------------------------------------------------------------
// Authorizers
// ---------------------------------------------------------------------------

/// Output for the `CreateAuthorizer` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAuthorizerOutput {
    #[serde(flatten)]
    pub authorizer: Authorizer,
}

/// Output for the `GetAuthorizer` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetAuthorizerOutput {
    #[serde(flatten)]
    pub authorizer: Authorizer,
}

/// Output for the `GetAuthorizers` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAuthorizersOutput {
    #[serde(default)]
    pub items: Vec<Authorizer>,
}

/// Output for the `UpdateAuthorizer` operation. Always the full record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAuthorizerOutput {
    #[serde(flatten)]
    pub authorizer: Authorizer,
}

/// Output for the `DeleteAuthorizer` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteAuthorizerOutput {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AuthorizerType;

    #[test]
    fn test_should_flatten_authorizer_output() {
        let output = CreateAuthorizerOutput {
            authorizer: Authorizer {
                authorizer_id: "x1y2z3".to_owned(),
                authorizer_type: AuthorizerType::Jwt,
                name: "auth1".to_owned(),
                ..Default::default()
            },
        };
        let json = serde_json::to_value(&output).expect("serialize CreateAuthorizerOutput");
        assert_eq!(json["authorizerId"], "x1y2z3");
        assert_eq!(json["authorizerType"], "JWT");
        assert!(json.get("authorizer").is_none());
    }
}
