//! Mapping from resource-store errors to API Gateway v2 errors.

use mockstack_apigatewayv2_model::error::ApiGatewayV2Error;
use mockstack_core::{Resource, StoreError};

use crate::state::{ApiRecord, AuthorizerRecord};

/// Convert a store error into the matching API Gateway v2 error.
///
/// Takes `e` by value because this is used as a closure argument to `.map_err()`.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn store_error_to_apigatewayv2(e: StoreError) -> ApiGatewayV2Error {
    match e {
        StoreError::NotFound { kind, key } if kind == ApiRecord::KIND => {
            ApiGatewayV2Error::api_not_found(&key)
        }
        StoreError::NotFound { kind, key } if kind == AuthorizerRecord::KIND => {
            ApiGatewayV2Error::authorizer_not_found(&key)
        }
        StoreError::NotFound { .. } => ApiGatewayV2Error::not_found(e.to_string()),
        StoreError::AlreadyExists { .. } | StoreError::Conflict { .. } => {
            ApiGatewayV2Error::conflict(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use mockstack_apigatewayv2_model::ApiGatewayV2ErrorCode;

    use super::*;

    #[test]
    fn test_should_map_missing_authorizer() {
        let err = store_error_to_apigatewayv2(StoreError::NotFound {
            kind: AuthorizerRecord::KIND,
            key: "abc".to_owned(),
        });
        assert_eq!(err.code, ApiGatewayV2ErrorCode::NotFoundException);
        assert_eq!(err.message, "Invalid Authorizer identifier specified abc");
    }

    #[test]
    fn test_should_map_conflicts() {
        let err = store_error_to_apigatewayv2(StoreError::AlreadyExists {
            kind: ApiRecord::KIND,
            key: "abc".to_owned(),
        });
        assert_eq!(err.code, ApiGatewayV2ErrorCode::ConflictException);
    }
}
