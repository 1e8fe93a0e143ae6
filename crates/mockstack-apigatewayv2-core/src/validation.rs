//! Request validation for API Gateway v2.
//!
//! Rules are plain functions collected into per-resource tables and run in
//! order; the first failure wins. Authorizer rules run against the complete
//! record, so create and update share them.

use mockstack_apigatewayv2_model::error::ApiGatewayV2Error;
use mockstack_apigatewayv2_model::input::CreateApiInput;
use mockstack_apigatewayv2_model::types::{AuthorizerType, ProtocolType};

use crate::state::AuthorizerRecord;

/// Message returned when a REQUEST authorizer on an HTTP API has no payload
/// format version.
pub const PAYLOAD_FORMAT_VERSION_REQUIRED: &str =
    "AuthorizerPayloadFormatVersion is a required parameter for REQUEST authorizer";

/// Upper bound of `authorizerResultTtlInSeconds`.
pub const MAX_AUTHORIZER_RESULT_TTL: i32 = 3600;

type ApiRule = fn(&CreateApiInput) -> Result<(), ApiGatewayV2Error>;

/// What an authorizer rule gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct AuthorizerCheck<'a> {
    /// Protocol of the owning API.
    pub protocol_type: &'a ProtocolType,
    /// The authorizer as it would be stored.
    pub authorizer: &'a AuthorizerRecord,
}

type AuthorizerRule = fn(&AuthorizerCheck<'_>) -> Result<(), ApiGatewayV2Error>;

const API_RULES: &[ApiRule] = &[api_name_present, api_protocol_known];

const AUTHORIZER_RULES: &[AuthorizerRule] = &[
    authorizer_name_present,
    authorizer_type_known,
    request_authorizer_has_payload_format_version,
    result_ttl_in_range,
];

/// Validate a `CreateApi` request.
pub fn validate_create_api(input: &CreateApiInput) -> Result<(), ApiGatewayV2Error> {
    API_RULES.iter().try_for_each(|rule| rule(input))
}

/// Validate an authorizer record against the API it belongs to.
pub fn validate_authorizer(check: &AuthorizerCheck<'_>) -> Result<(), ApiGatewayV2Error> {
    AUTHORIZER_RULES.iter().try_for_each(|rule| rule(check))
}

fn api_name_present(input: &CreateApiInput) -> Result<(), ApiGatewayV2Error> {
    if input.name.is_empty() {
        return Err(ApiGatewayV2Error::bad_request("Name is a required parameter"));
    }
    Ok(())
}

fn api_protocol_known(input: &CreateApiInput) -> Result<(), ApiGatewayV2Error> {
    if let ProtocolType::Unknown(ref value) = input.protocol_type {
        return Err(ApiGatewayV2Error::bad_request(format!(
            "Invalid protocol type {value}"
        )));
    }
    Ok(())
}

fn authorizer_name_present(check: &AuthorizerCheck<'_>) -> Result<(), ApiGatewayV2Error> {
    if check.authorizer.name.is_empty() {
        return Err(ApiGatewayV2Error::bad_request("Name is a required parameter"));
    }
    Ok(())
}

fn authorizer_type_known(check: &AuthorizerCheck<'_>) -> Result<(), ApiGatewayV2Error> {
    if let AuthorizerType::Unknown(ref value) = check.authorizer.authorizer_type {
        return Err(ApiGatewayV2Error::bad_request(format!(
            "Invalid authorizer type {value}"
        )));
    }
    Ok(())
}

/// WEBSOCKET APIs are exempt.
fn request_authorizer_has_payload_format_version(
    check: &AuthorizerCheck<'_>,
) -> Result<(), ApiGatewayV2Error> {
    let missing = check
        .authorizer
        .authorizer_payload_format_version
        .as_deref()
        .is_none_or(str::is_empty);
    if *check.protocol_type == ProtocolType::Http
        && check.authorizer.authorizer_type == AuthorizerType::Request
        && missing
    {
        return Err(ApiGatewayV2Error::bad_request(
            PAYLOAD_FORMAT_VERSION_REQUIRED,
        ));
    }
    Ok(())
}

fn result_ttl_in_range(check: &AuthorizerCheck<'_>) -> Result<(), ApiGatewayV2Error> {
    match check.authorizer.authorizer_result_ttl_in_seconds {
        Some(ttl) if !(0..=MAX_AUTHORIZER_RESULT_TTL).contains(&ttl) => {
            Err(ApiGatewayV2Error::bad_request(format!(
                "AuthorizerResultTtlInSeconds must be between 0 and {MAX_AUTHORIZER_RESULT_TTL}"
            )))
        }
        _ => Ok(()),
    }
}
