//! API Gateway v2 state.
//!
//! One [`ApiGatewayV2State`] exists per (account, region). APIs own their
//! authorizers, so removing an API drops its authorizers with it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use mockstack_apigatewayv2_model::input::UpdateAuthorizerInput;
use mockstack_apigatewayv2_model::types::{
    Api, Authorizer, AuthorizerType, JwtConfiguration, ProtocolType,
};
use mockstack_core::{Resource, ResourceTable};
use parking_lot::RwLock;

/// A stored API.
#[derive(Debug, Clone)]
pub struct ApiRecord {
    pub api_id: String,
    pub name: String,
    pub protocol_type: ProtocolType,
    pub api_endpoint: String,
    pub api_key_selection_expression: String,
    pub route_selection_expression: String,
    pub description: Option<String>,
    pub disable_execute_api_endpoint: bool,
    pub version: Option<String>,
    pub created_date: DateTime<Utc>,
    pub tags: HashMap<String, String>,
    /// Authorizers of this API, in creation order.
    pub authorizers: ResourceTable<AuthorizerRecord>,
}

impl Resource for ApiRecord {
    const KIND: &'static str = "api";

    fn id(&self) -> &str {
        &self.api_id
    }
}

impl ApiRecord {
    /// Wire representation of this API.
    #[must_use]
    pub fn to_api(&self) -> Api {
        Api {
            api_id: self.api_id.clone(),
            name: self.name.clone(),
            protocol_type: self.protocol_type.clone(),
            api_endpoint: self.api_endpoint.clone(),
            api_key_selection_expression: self.api_key_selection_expression.clone(),
            route_selection_expression: self.route_selection_expression.clone(),
            description: self.description.clone(),
            disable_execute_api_endpoint: self.disable_execute_api_endpoint,
            version: self.version.clone(),
            created_date: self.created_date,
            tags: self.tags.clone(),
        }
    }
}

/// A stored authorizer.
#[derive(Debug, Clone, Default)]
pub struct AuthorizerRecord {
    pub authorizer_id: String,
    pub authorizer_type: AuthorizerType,
    pub name: String,
    pub identity_source: Vec<String>,
    pub authorizer_credentials_arn: Option<String>,
    pub authorizer_payload_format_version: Option<String>,
    pub authorizer_result_ttl_in_seconds: Option<i32>,
    pub authorizer_uri: Option<String>,
    pub enable_simple_responses: Option<bool>,
    pub identity_validation_expression: Option<String>,
    pub jwt_configuration: Option<JwtConfiguration>,
}

impl Resource for AuthorizerRecord {
    const KIND: &'static str = "authorizer";

    fn id(&self) -> &str {
        &self.authorizer_id
    }
}

impl AuthorizerRecord {
    /// Wire representation of this authorizer.
    #[must_use]
    pub fn to_authorizer(&self) -> Authorizer {
        Authorizer {
            authorizer_id: self.authorizer_id.clone(),
            authorizer_type: self.authorizer_type.clone(),
            name: self.name.clone(),
            identity_source: self.identity_source.clone(),
            authorizer_credentials_arn: self.authorizer_credentials_arn.clone(),
            authorizer_payload_format_version: self.authorizer_payload_format_version.clone(),
            authorizer_result_ttl_in_seconds: self.authorizer_result_ttl_in_seconds,
            authorizer_uri: self.authorizer_uri.clone(),
            enable_simple_responses: self.enable_simple_responses,
            identity_validation_expression: self.identity_validation_expression.clone(),
            jwt_configuration: self.jwt_configuration.clone(),
        }
    }

    /// Overwrite every field the update supplies.
    ///
    /// An empty string counts as supplied. `jwt_configuration` is replaced as
    /// a whole, never merged.
    pub fn apply_update(&mut self, input: &UpdateAuthorizerInput) {
        if let Some(ref v) = input.authorizer_type {
            self.authorizer_type = v.clone();
        }
        if let Some(ref v) = input.name {
            self.name.clone_from(v);
        }
        if let Some(ref v) = input.identity_source {
            self.identity_source.clone_from(v);
        }
        if input.authorizer_credentials_arn.is_some() {
            self.authorizer_credentials_arn
                .clone_from(&input.authorizer_credentials_arn);
        }
        if input.authorizer_payload_format_version.is_some() {
            self.authorizer_payload_format_version
                .clone_from(&input.authorizer_payload_format_version);
        }
        if input.authorizer_result_ttl_in_seconds.is_some() {
            self.authorizer_result_ttl_in_seconds = input.authorizer_result_ttl_in_seconds;
        }
        if input.authorizer_uri.is_some() {
            self.authorizer_uri.clone_from(&input.authorizer_uri);
        }
        if input.enable_simple_responses.is_some() {
            self.enable_simple_responses = input.enable_simple_responses;
        }
        if input.identity_validation_expression.is_some() {
            self.identity_validation_expression
                .clone_from(&input.identity_validation_expression);
        }
        if input.jwt_configuration.is_some() {
            self.jwt_configuration.clone_from(&input.jwt_configuration);
        }
    }
}

/// API Gateway v2 state for one account and region.
#[derive(Debug, Default)]
pub struct ApiGatewayV2State {
    /// All APIs, in creation order.
    pub apis: RwLock<ResourceTable<ApiRecord>>,
}

impl ApiGatewayV2State {
    /// Drop every API and authorizer.
    pub fn clear(&self) {
        self.apis.write().clear();
    }
}
