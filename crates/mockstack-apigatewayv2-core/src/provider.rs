//! API Gateway v2 provider implementing the API and authorizer operations.

use std::sync::Arc;

use mockstack_apigatewayv2_model::error::ApiGatewayV2Error;
use mockstack_apigatewayv2_model::input::{
    CreateApiInput, CreateAuthorizerInput, DeleteApiInput, DeleteAuthorizerInput, GetApiInput,
    GetApisInput, GetAuthorizerInput, GetAuthorizersInput, UpdateAuthorizerInput,
};
use mockstack_apigatewayv2_model::output::{
    CreateApiOutput, CreateAuthorizerOutput, DeleteApiOutput, DeleteAuthorizerOutput,
    GetApiOutput, GetApisOutput, GetAuthorizerOutput, GetAuthorizersOutput,
    UpdateAuthorizerOutput,
};
use mockstack_apigatewayv2_model::types::ProtocolType;
use mockstack_core::id::fresh_lowercase_id;
use mockstack_core::{AccountRegionStore, RequestContext, ResourceTable};
use tracing::{debug, info};

use crate::config::ApiGatewayV2Config;
use crate::error::store_error_to_apigatewayv2;
use crate::state::{ApiGatewayV2State, ApiRecord, AuthorizerRecord};
use crate::validation::{AuthorizerCheck, validate_authorizer, validate_create_api};

/// Route selection expression applied when the caller gives none.
const DEFAULT_ROUTE_SELECTION_EXPRESSION: &str = "$request.method $request.path";

/// API key selection expression applied when the caller gives none.
const DEFAULT_API_KEY_SELECTION_EXPRESSION: &str = "$request.header.x-api-key";

/// Main API Gateway v2 provider.
#[derive(Debug)]
pub struct MockStackApiGatewayV2 {
    /// Per account and region state.
    pub state: AccountRegionStore<ApiGatewayV2State>,
    /// Configuration.
    pub config: Arc<ApiGatewayV2Config>,
}

impl Default for MockStackApiGatewayV2 {
    fn default() -> Self {
        Self::new(ApiGatewayV2Config::default())
    }
}

impl MockStackApiGatewayV2 {
    /// Create a new API Gateway v2 provider.
    #[must_use]
    pub fn new(config: ApiGatewayV2Config) -> Self {
        Self {
            state: AccountRegionStore::new(),
            config: Arc::new(config),
        }
    }

    /// Reset all state (for testing).
    pub fn reset(&self) {
        self.state.reset();
    }

    fn endpoint(&self, ctx: &RequestContext, protocol: &ProtocolType, api_id: &str) -> String {
        let scheme = match protocol {
            ProtocolType::Websocket => "wss",
            _ => "https",
        };
        format!(
            "{scheme}://{api_id}.execute-api.{}.{}",
            ctx.region, self.config.execute_api_domain
        )
    }
}

// ---------------------------------------------------------------------------
// APIs
// ---------------------------------------------------------------------------

impl MockStackApiGatewayV2 {
    /// Handle `CreateApi`.
    pub fn handle_create_api(
        &self,
        ctx: &RequestContext,
        input: CreateApiInput,
    ) -> Result<CreateApiOutput, ApiGatewayV2Error> {
        validate_create_api(&input)?;

        let state = self.state.for_context(ctx);
        let mut apis = state.apis.write();
        let api_id = fresh_lowercase_id(self.config.api_id_length, |id| apis.get(id).is_some());
        let record = ApiRecord {
            api_endpoint: self.endpoint(ctx, &input.protocol_type, &api_id),
            api_id,
            name: input.name,
            protocol_type: input.protocol_type,
            api_key_selection_expression: input
                .api_key_selection_expression
                .unwrap_or_else(|| DEFAULT_API_KEY_SELECTION_EXPRESSION.to_owned()),
            route_selection_expression: input
                .route_selection_expression
                .unwrap_or_else(|| DEFAULT_ROUTE_SELECTION_EXPRESSION.to_owned()),
            description: input.description,
            disable_execute_api_endpoint: input.disable_execute_api_endpoint.unwrap_or(false),
            version: input.version,
            created_date: chrono::Utc::now(),
            tags: input.tags,
            authorizers: ResourceTable::new(),
        };

        let api = apis
            .insert(record)
            .map_err(store_error_to_apigatewayv2)?
            .to_api();
        info!(api_id = %api.api_id, name = %api.name, protocol = %api.protocol_type, "created api");
        Ok(CreateApiOutput { api })
    }

    /// Handle `GetApi`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_get_api(
        &self,
        ctx: &RequestContext,
        input: GetApiInput,
    ) -> Result<GetApiOutput, ApiGatewayV2Error> {
        let state = self.state.for_context(ctx);
        let apis = state.apis.read();
        let api = apis
            .require(&input.api_id)
            .map_err(store_error_to_apigatewayv2)?
            .to_api();
        debug!(api_id = %input.api_id, "got api");
        Ok(GetApiOutput { api })
    }

    /// Handle `GetApis`. Returns every API of the scope in creation order.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_get_apis(
        &self,
        ctx: &RequestContext,
        _input: GetApisInput,
    ) -> Result<GetApisOutput, ApiGatewayV2Error> {
        let state = self.state.for_context(ctx);
        let items: Vec<_> = state.apis.read().list().map(ApiRecord::to_api).collect();
        debug!(count = items.len(), "listed apis");
        Ok(GetApisOutput { items })
    }

    /// Handle `DeleteApi`. The API's authorizers go with it.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_delete_api(
        &self,
        ctx: &RequestContext,
        input: DeleteApiInput,
    ) -> Result<DeleteApiOutput, ApiGatewayV2Error> {
        let state = self.state.for_context(ctx);
        let removed = state
            .apis
            .write()
            .remove(&input.api_id)
            .map_err(store_error_to_apigatewayv2)?;
        info!(
            api_id = %input.api_id,
            authorizers = removed.authorizers.len(),
            "deleted api"
        );
        Ok(DeleteApiOutput {})
    }
}

// ---------------------------------------------------------------------------
// Authorizers
// ---------------------------------------------------------------------------

impl MockStackApiGatewayV2 {
    /// Handle `CreateAuthorizer`.
    pub fn handle_create_authorizer(
        &self,
        ctx: &RequestContext,
        input: CreateAuthorizerInput,
    ) -> Result<CreateAuthorizerOutput, ApiGatewayV2Error> {
        let mut record = AuthorizerRecord {
            authorizer_id: String::new(),
            authorizer_type: input.authorizer_type,
            name: input.name,
            identity_source: input.identity_source,
            authorizer_credentials_arn: input.authorizer_credentials_arn,
            authorizer_payload_format_version: input.authorizer_payload_format_version,
            authorizer_result_ttl_in_seconds: input.authorizer_result_ttl_in_seconds,
            authorizer_uri: input.authorizer_uri,
            enable_simple_responses: input.enable_simple_responses,
            identity_validation_expression: input.identity_validation_expression,
            jwt_configuration: input.jwt_configuration,
        };

        let state = self.state.for_context(ctx);
        let mut apis = state.apis.write();
        let api = apis
            .get_mut(&input.api_id)
            .ok_or_else(|| ApiGatewayV2Error::api_not_found(&input.api_id))?;
        validate_authorizer(&AuthorizerCheck {
            protocol_type: &api.protocol_type,
            authorizer: &record,
        })?;
        record.authorizer_id = fresh_lowercase_id(self.config.authorizer_id_length, |id| {
            api.authorizers.get(id).is_some()
        });

        let authorizer = api
            .authorizers
            .insert(record)
            .map_err(store_error_to_apigatewayv2)?
            .to_authorizer();
        info!(
            api_id = %input.api_id,
            authorizer_id = %authorizer.authorizer_id,
            authorizer_type = %authorizer.authorizer_type,
            "created authorizer"
        );
        Ok(CreateAuthorizerOutput { authorizer })
    }

    /// Handle `GetAuthorizer`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_get_authorizer(
        &self,
        ctx: &RequestContext,
        input: GetAuthorizerInput,
    ) -> Result<GetAuthorizerOutput, ApiGatewayV2Error> {
        let state = self.state.for_context(ctx);
        let apis = state.apis.read();
        let api = apis
            .require(&input.api_id)
            .map_err(store_error_to_apigatewayv2)?;
        let authorizer = api
            .authorizers
            .require(&input.authorizer_id)
            .map_err(store_error_to_apigatewayv2)?
            .to_authorizer();
        debug!(api_id = %input.api_id, authorizer_id = %input.authorizer_id, "got authorizer");
        Ok(GetAuthorizerOutput { authorizer })
    }

    /// Handle `GetAuthorizers`. Returns authorizers in creation order.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_get_authorizers(
        &self,
        ctx: &RequestContext,
        input: GetAuthorizersInput,
    ) -> Result<GetAuthorizersOutput, ApiGatewayV2Error> {
        let state = self.state.for_context(ctx);
        let apis = state.apis.read();
        let api = apis
            .require(&input.api_id)
            .map_err(store_error_to_apigatewayv2)?;
        let items: Vec<_> = api
            .authorizers
            .list()
            .map(AuthorizerRecord::to_authorizer)
            .collect();
        debug!(api_id = %input.api_id, count = items.len(), "listed authorizers");
        Ok(GetAuthorizersOutput { items })
    }

    /// Handle `UpdateAuthorizer`.
    ///
    /// The patch is validated as a whole record before it is stored; a
    /// rejected update leaves the authorizer unchanged.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_update_authorizer(
        &self,
        ctx: &RequestContext,
        input: UpdateAuthorizerInput,
    ) -> Result<UpdateAuthorizerOutput, ApiGatewayV2Error> {
        let state = self.state.for_context(ctx);
        let mut apis = state.apis.write();
        let api = apis
            .get_mut(&input.api_id)
            .ok_or_else(|| ApiGatewayV2Error::api_not_found(&input.api_id))?;

        let mut next = api
            .authorizers
            .require(&input.authorizer_id)
            .map_err(store_error_to_apigatewayv2)?
            .clone();
        next.apply_update(&input);
        validate_authorizer(&AuthorizerCheck {
            protocol_type: &api.protocol_type,
            authorizer: &next,
        })?;

        let authorizer = api
            .authorizers
            .update(&input.authorizer_id, |current| *current = next)
            .map_err(store_error_to_apigatewayv2)?
            .to_authorizer();
        info!(api_id = %input.api_id, authorizer_id = %input.authorizer_id, "updated authorizer");
        Ok(UpdateAuthorizerOutput { authorizer })
    }

    /// Handle `DeleteAuthorizer`. An unknown authorizer id is NotFound, not a
    /// silent success.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_delete_authorizer(
        &self,
        ctx: &RequestContext,
        input: DeleteAuthorizerInput,
    ) -> Result<DeleteAuthorizerOutput, ApiGatewayV2Error> {
        let state = self.state.for_context(ctx);
        let mut apis = state.apis.write();
        let api = apis
            .get_mut(&input.api_id)
            .ok_or_else(|| ApiGatewayV2Error::api_not_found(&input.api_id))?;
        api.authorizers
            .remove(&input.authorizer_id)
            .map_err(store_error_to_apigatewayv2)?;
        info!(api_id = %input.api_id, authorizer_id = %input.authorizer_id, "deleted authorizer");
        Ok(DeleteAuthorizerOutput {})
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use mockstack_apigatewayv2_model::error::ApiGatewayV2ErrorCode;
    use mockstack_apigatewayv2_model::types::{AuthorizerType, JwtConfiguration};

    use super::*;
    use crate::validation::PAYLOAD_FORMAT_VERSION_REQUIRED;

    fn ctx() -> RequestContext {
        RequestContext::for_region("us-east-2")
    }

    fn create_api(provider: &MockStackApiGatewayV2, protocol: ProtocolType) -> String {
        provider
            .handle_create_api(
                &ctx(),
                CreateApiInput {
                    name: "test-api".to_owned(),
                    protocol_type: protocol,
                    ..Default::default()
                },
            )
            .unwrap()
            .api
            .api_id
    }

    fn jwt_input(api_id: &str) -> CreateAuthorizerInput {
        CreateAuthorizerInput {
            api_id: api_id.to_owned(),
            authorizer_type: AuthorizerType::Jwt,
            name: "auth1".to_owned(),
            identity_source: vec!["$request.header.Authorization".to_owned()],
            jwt_configuration: Some(JwtConfiguration {
                audience: vec!["a1".to_owned()],
                issuer: Some("https://issuer.example.com".to_owned()),
            }),
            ..Default::default()
        }
    }

    fn request_input(api_id: &str) -> CreateAuthorizerInput {
        CreateAuthorizerInput {
            api_id: api_id.to_owned(),
            authorizer_type: AuthorizerType::Request,
            name: "auth1".to_owned(),
            identity_source: vec!["$request.header.Authorization".to_owned()],
            authorizer_credentials_arn: Some("auth:creds:arn".to_owned()),
            authorizer_payload_format_version: Some("2.0".to_owned()),
            authorizer_result_ttl_in_seconds: Some(3),
            authorizer_uri: Some("auth_uri".to_owned()),
            enable_simple_responses: Some(true),
            identity_validation_expression: Some("ive".to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn test_should_create_and_get_api() {
        let provider = MockStackApiGatewayV2::default();
        let created = provider
            .handle_create_api(
                &ctx(),
                CreateApiInput {
                    name: "test-api".to_owned(),
                    protocol_type: ProtocolType::Http,
                    description: Some("my api".to_owned()),
                    tags: HashMap::from([("k".to_owned(), "v".to_owned())]),
                    ..Default::default()
                },
            )
            .unwrap()
            .api;
        assert_eq!(created.api_id.len(), 10);
        assert_eq!(
            created.api_endpoint,
            format!("https://{}.execute-api.us-east-2.amazonaws.com", created.api_id)
        );
        assert_eq!(created.route_selection_expression, DEFAULT_ROUTE_SELECTION_EXPRESSION);
        assert!(!created.disable_execute_api_endpoint);

        let fetched = provider
            .handle_get_api(
                &ctx(),
                GetApiInput {
                    api_id: created.api_id.clone(),
                },
            )
            .unwrap()
            .api;
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_should_use_wss_endpoint_for_websocket_api() {
        let provider = MockStackApiGatewayV2::default();
        let api_id = create_api(&provider, ProtocolType::Websocket);
        let api = provider
            .handle_get_api(&ctx(), GetApiInput { api_id })
            .unwrap()
            .api;
        assert!(api.api_endpoint.starts_with("wss://"));
    }

    #[test]
    fn test_should_list_apis_in_creation_order() {
        let provider = MockStackApiGatewayV2::default();
        let first = create_api(&provider, ProtocolType::Http);
        let second = create_api(&provider, ProtocolType::Websocket);
        let ids: Vec<_> = provider
            .handle_get_apis(&ctx(), GetApisInput {})
            .unwrap()
            .items
            .into_iter()
            .map(|api| api.api_id)
            .collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_should_delete_api_with_its_authorizers() {
        let provider = MockStackApiGatewayV2::default();
        let api_id = create_api(&provider, ProtocolType::Http);
        provider
            .handle_create_authorizer(&ctx(), jwt_input(&api_id))
            .unwrap();
        provider
            .handle_delete_api(
                &ctx(),
                DeleteApiInput {
                    api_id: api_id.clone(),
                },
            )
            .unwrap();

        let err = provider
            .handle_get_authorizers(&ctx(), GetAuthorizersInput { api_id: api_id.clone() })
            .unwrap_err();
        assert_eq!(err.code, ApiGatewayV2ErrorCode::NotFoundException);
        assert_eq!(err.message, format!("Invalid API identifier specified {api_id}"));
    }

    #[test]
    fn test_should_create_jwt_authorizer() {
        let provider = MockStackApiGatewayV2::default();
        let api_id = create_api(&provider, ProtocolType::Http);
        let authorizer = provider
            .handle_create_authorizer(&ctx(), jwt_input(&api_id))
            .unwrap()
            .authorizer;

        assert_eq!(authorizer.authorizer_id.len(), 6);
        assert_eq!(authorizer.authorizer_type, AuthorizerType::Jwt);
        assert_eq!(authorizer.name, "auth1");
        assert_eq!(
            authorizer.identity_source,
            vec!["$request.header.Authorization".to_owned()]
        );
        let jwt = authorizer.jwt_configuration.unwrap();
        assert_eq!(jwt.audience, vec!["a1".to_owned()]);
        assert_eq!(jwt.issuer.as_deref(), Some("https://issuer.example.com"));
        assert!(authorizer.authorizer_payload_format_version.is_none());
    }

    #[test]
    fn test_should_create_request_authorizer_with_all_attributes() {
        let provider = MockStackApiGatewayV2::default();
        let api_id = create_api(&provider, ProtocolType::Http);
        let authorizer = provider
            .handle_create_authorizer(&ctx(), request_input(&api_id))
            .unwrap()
            .authorizer;

        assert_eq!(authorizer.authorizer_type, AuthorizerType::Request);
        assert_eq!(authorizer.authorizer_credentials_arn.as_deref(), Some("auth:creds:arn"));
        assert_eq!(authorizer.authorizer_payload_format_version.as_deref(), Some("2.0"));
        assert_eq!(authorizer.authorizer_result_ttl_in_seconds, Some(3));
        assert_eq!(authorizer.authorizer_uri.as_deref(), Some("auth_uri"));
        assert_eq!(authorizer.enable_simple_responses, Some(true));
        assert_eq!(authorizer.identity_validation_expression.as_deref(), Some("ive"));
        assert!(authorizer.jwt_configuration.is_none());
    }

    #[test]
    fn test_should_reject_request_authorizer_without_payload_version_on_http_api() {
        let provider = MockStackApiGatewayV2::default();
        let api_id = create_api(&provider, ProtocolType::Http);
        let err = provider
            .handle_create_authorizer(
                &ctx(),
                CreateAuthorizerInput {
                    authorizer_payload_format_version: None,
                    ..request_input(&api_id)
                },
            )
            .unwrap_err();
        assert_eq!(err.code, ApiGatewayV2ErrorCode::BadRequestException);
        assert_eq!(err.message, PAYLOAD_FORMAT_VERSION_REQUIRED);

        let listed = provider
            .handle_get_authorizers(&ctx(), GetAuthorizersInput { api_id })
            .unwrap();
        assert!(listed.items.is_empty());
    }

    #[test]
    fn test_should_accept_request_authorizer_without_payload_version_on_websocket_api() {
        let provider = MockStackApiGatewayV2::default();
        let api_id = create_api(&provider, ProtocolType::Websocket);
        let authorizer = provider
            .handle_create_authorizer(
                &ctx(),
                CreateAuthorizerInput {
                    authorizer_payload_format_version: None,
                    ..request_input(&api_id)
                },
            )
            .unwrap()
            .authorizer;
        assert!(authorizer.authorizer_payload_format_version.is_none());
    }

    #[test]
    fn test_should_reject_authorizer_for_unknown_api() {
        let provider = MockStackApiGatewayV2::default();
        let err = provider
            .handle_create_authorizer(&ctx(), jwt_input("unknown"))
            .unwrap_err();
        assert_eq!(err.code, ApiGatewayV2ErrorCode::NotFoundException);
        assert_eq!(err.message, "Invalid API identifier specified unknown");
    }

    #[test]
    fn test_should_get_authorizer() {
        let provider = MockStackApiGatewayV2::default();
        let api_id = create_api(&provider, ProtocolType::Http);
        let created = provider
            .handle_create_authorizer(&ctx(), request_input(&api_id))
            .unwrap()
            .authorizer;
        let fetched = provider
            .handle_get_authorizer(
                &ctx(),
                GetAuthorizerInput {
                    api_id,
                    authorizer_id: created.authorizer_id.clone(),
                },
            )
            .unwrap()
            .authorizer;
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_should_report_unknown_authorizer() {
        let provider = MockStackApiGatewayV2::default();
        let api_id = create_api(&provider, ProtocolType::Http);
        let err = provider
            .handle_get_authorizer(
                &ctx(),
                GetAuthorizerInput {
                    api_id,
                    authorizer_id: "unknown".to_owned(),
                },
            )
            .unwrap_err();
        assert_eq!(err.code, ApiGatewayV2ErrorCode::NotFoundException);
        assert_eq!(err.message, "Invalid Authorizer identifier specified unknown");
    }

    #[test]
    fn test_should_list_authorizers_in_creation_order() {
        let provider = MockStackApiGatewayV2::default();
        let api_id = create_api(&provider, ProtocolType::Http);
        let first = provider
            .handle_create_authorizer(&ctx(), jwt_input(&api_id))
            .unwrap()
            .authorizer;
        let second = provider
            .handle_create_authorizer(&ctx(), request_input(&api_id))
            .unwrap()
            .authorizer;
        let items = provider
            .handle_get_authorizers(&ctx(), GetAuthorizersInput { api_id })
            .unwrap()
            .items;
        assert_eq!(items, vec![first, second]);
    }

    #[test]
    fn test_should_delete_authorizer() {
        let provider = MockStackApiGatewayV2::default();
        let api_id = create_api(&provider, ProtocolType::Http);
        let authorizer_id = provider
            .handle_create_authorizer(&ctx(), jwt_input(&api_id))
            .unwrap()
            .authorizer
            .authorizer_id;
        provider
            .handle_delete_authorizer(
                &ctx(),
                DeleteAuthorizerInput {
                    api_id: api_id.clone(),
                    authorizer_id: authorizer_id.clone(),
                },
            )
            .unwrap();

        let err = provider
            .handle_get_authorizer(
                &ctx(),
                GetAuthorizerInput {
                    api_id: api_id.clone(),
                    authorizer_id: authorizer_id.clone(),
                },
            )
            .unwrap_err();
        assert_eq!(err.code, ApiGatewayV2ErrorCode::NotFoundException);

        let again = provider
            .handle_delete_authorizer(&ctx(), DeleteAuthorizerInput { api_id, authorizer_id })
            .unwrap_err();
        assert_eq!(again.code, ApiGatewayV2ErrorCode::NotFoundException);
    }

    #[test]
    fn test_should_draw_new_ids_on_collision() {
        let provider = MockStackApiGatewayV2::new(
            ApiGatewayV2Config::builder()
                .api_id_length(1)
                .authorizer_id_length(1)
                .build(),
        );
        let api_ids: Vec<_> = (0..20)
            .map(|_| create_api(&provider, ProtocolType::Http))
            .collect();
        let api_id = api_ids[0].clone();
        let authorizer_ids: Vec<_> = (0..20)
            .map(|_| {
                provider
                    .handle_create_authorizer(&ctx(), jwt_input(&api_id))
                    .unwrap()
                    .authorizer
                    .authorizer_id
            })
            .collect();

        let unique_apis: std::collections::HashSet<_> = api_ids.iter().collect();
        let unique_authorizers: std::collections::HashSet<_> = authorizer_ids.iter().collect();
        assert_eq!(unique_apis.len(), 20);
        assert_eq!(unique_authorizers.len(), 20);
    }

    #[test]
    fn test_should_update_single_field_and_keep_others() {
        let provider = MockStackApiGatewayV2::default();
        let api_id = create_api(&provider, ProtocolType::Http);
        let created = provider
            .handle_create_authorizer(&ctx(), request_input(&api_id))
            .unwrap()
            .authorizer;
        let updated = provider
            .handle_update_authorizer(
                &ctx(),
                UpdateAuthorizerInput {
                    api_id,
                    authorizer_id: created.authorizer_id.clone(),
                    name: Some("auth2".to_owned()),
                    ..Default::default()
                },
            )
            .unwrap()
            .authorizer;
        assert_eq!(updated.name, "auth2");
        assert_eq!(updated.authorizer_uri, created.authorizer_uri);
        assert_eq!(updated.identity_source, created.identity_source);
        assert_eq!(
            updated.authorizer_payload_format_version,
            created.authorizer_payload_format_version
        );
    }

    #[test]
    fn test_should_update_all_attributes() {
        let provider = MockStackApiGatewayV2::default();
        let api_id = create_api(&provider, ProtocolType::Http);
        let created = provider
            .handle_create_authorizer(&ctx(), jwt_input(&api_id))
            .unwrap()
            .authorizer;
        let updated = provider
            .handle_update_authorizer(
                &ctx(),
                UpdateAuthorizerInput {
                    api_id,
                    authorizer_id: created.authorizer_id,
                    authorizer_type: Some(AuthorizerType::Request),
                    name: Some("auth2".to_owned()),
                    identity_source: Some(vec!["$request.header.Auth".to_owned()]),
                    authorizer_credentials_arn: Some(String::new()),
                    authorizer_payload_format_version: Some("3.0".to_owned()),
                    authorizer_result_ttl_in_seconds: Some(5),
                    authorizer_uri: Some("auth_uri2".to_owned()),
                    enable_simple_responses: Some(false),
                    identity_validation_expression: Some("ive2".to_owned()),
                    jwt_configuration: Some(JwtConfiguration {
                        audience: vec!["a2".to_owned()],
                        issuer: None,
                    }),
                },
            )
            .unwrap()
            .authorizer;
        assert_eq!(updated.authorizer_type, AuthorizerType::Request);
        assert_eq!(updated.name, "auth2");
        assert_eq!(updated.identity_source, vec!["$request.header.Auth".to_owned()]);
        assert_eq!(updated.authorizer_credentials_arn.as_deref(), Some(""));
        assert_eq!(updated.authorizer_payload_format_version.as_deref(), Some("3.0"));
        assert_eq!(updated.authorizer_result_ttl_in_seconds, Some(5));
        assert_eq!(updated.authorizer_uri.as_deref(), Some("auth_uri2"));
        assert_eq!(updated.enable_simple_responses, Some(false));
        assert_eq!(updated.identity_validation_expression.as_deref(), Some("ive2"));
        let jwt = updated.jwt_configuration.unwrap();
        assert_eq!(jwt.audience, vec!["a2".to_owned()]);
        assert!(jwt.issuer.is_none());
    }

    #[test]
    fn test_should_reject_update_that_breaks_payload_version_rule() {
        let provider = MockStackApiGatewayV2::default();
        let api_id = create_api(&provider, ProtocolType::Http);
        let created = provider
            .handle_create_authorizer(&ctx(), jwt_input(&api_id))
            .unwrap()
            .authorizer;
        let err = provider
            .handle_update_authorizer(
                &ctx(),
                UpdateAuthorizerInput {
                    api_id: api_id.clone(),
                    authorizer_id: created.authorizer_id.clone(),
                    authorizer_type: Some(AuthorizerType::Request),
                    name: Some("renamed".to_owned()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(err.message, PAYLOAD_FORMAT_VERSION_REQUIRED);

        let unchanged = provider
            .handle_get_authorizer(
                &ctx(),
                GetAuthorizerInput {
                    api_id,
                    authorizer_id: created.authorizer_id,
                },
            )
            .unwrap()
            .authorizer;
        assert_eq!(unchanged.authorizer_type, AuthorizerType::Jwt);
        assert_eq!(unchanged.name, "auth1");
    }

    #[test]
    fn test_should_report_unknown_authorizer_on_update() {
        let provider = MockStackApiGatewayV2::default();
        let api_id = create_api(&provider, ProtocolType::Http);
        let err = provider
            .handle_update_authorizer(
                &ctx(),
                UpdateAuthorizerInput {
                    api_id,
                    authorizer_id: "unknown".to_owned(),
                    name: Some("x".to_owned()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(err.message, "Invalid Authorizer identifier specified unknown");
    }

    #[test]
    fn test_should_isolate_regions() {
        let provider = MockStackApiGatewayV2::default();
        let api_id = create_api(&provider, ProtocolType::Http);
        let other = RequestContext::for_region("eu-west-1");
        assert!(
            provider
                .handle_get_apis(&other, GetApisInput {})
                .unwrap()
                .items
                .is_empty()
        );
        let err = provider
            .handle_get_api(&other, GetApiInput { api_id })
            .unwrap_err();
        assert_eq!(err.code, ApiGatewayV2ErrorCode::NotFoundException);
    }

    #[test]
    fn test_should_reset_all_state() {
        let provider = MockStackApiGatewayV2::default();
        create_api(&provider, ProtocolType::Http);
        provider.reset();
        assert!(
            provider
                .handle_get_apis(&ctx(), GetApisInput {})
                .unwrap()
                .items
                .is_empty()
        );
    }
}
