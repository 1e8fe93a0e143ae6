//! Shared API Gateway v2 types.
//!
//! API Gateway v2 speaks `restJson1`, so structs use `camelCase` field names.
//! Enum values use the `SCREAMING_CASE` strings from the wire. Unknown enum
//! values are kept as `Unknown(..)` instead of failing deserialization, so the
//! provider can reject them with a `BadRequestException`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Protocol of an API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ProtocolType {
    /// HTTP API.
    #[default]
    Http,
    /// WebSocket API.
    Websocket,
    /// Unrecognized value sent by the client.
    Unknown(String),
}

impl ProtocolType {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Http => "HTTP",
            Self::Websocket => "WEBSOCKET",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for ProtocolType {
    fn from(s: &str) -> Self {
        match s {
            "HTTP" => Self::Http,
            "WEBSOCKET" => Self::Websocket,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl Serialize for ProtocolType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProtocolType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for ProtocolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of authorizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum AuthorizerType {
    /// Lambda-backed request authorizer.
    #[default]
    Request,
    /// JSON Web Token authorizer.
    Jwt,
    /// Unrecognized value sent by the client.
    Unknown(String),
}

impl AuthorizerType {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Request => "REQUEST",
            Self::Jwt => "JWT",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for AuthorizerType {
    fn from(s: &str) -> Self {
        match s {
            "REQUEST" => Self::Request,
            "JWT" => Self::Jwt,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl Serialize for AuthorizerType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AuthorizerType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for AuthorizerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT settings of a `JWT` authorizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtConfiguration {
    /// Accepted audiences.
    #[serde(default)]
    pub audience: Vec<String>,
    /// Token issuer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

/// An API as returned by `CreateApi`, `GetApi`, and `GetApis`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Api {
    pub api_id: String,
    pub name: String,
    pub protocol_type: ProtocolType,
    pub api_endpoint: String,
    pub api_key_selection_expression: String,
    pub route_selection_expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub disable_execute_api_endpoint: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub created_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

/// An authorizer as returned by every authorizer operation.
///
/// Optional attributes the caller never set stay `None` and are omitted on
/// the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authorizer {
    pub authorizer_id: String,
    pub authorizer_type: AuthorizerType,
    pub name: String,
    #[serde(default)]
    pub identity_source: Vec<String>,
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
