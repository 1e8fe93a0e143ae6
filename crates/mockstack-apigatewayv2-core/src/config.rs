//! API Gateway v2 configuration.

use std::env;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// API Gateway v2 service configuration.
///
/// # Examples
///
/// ```
/// use mockstack_apigatewayv2_core::config::ApiGatewayV2Config;
///
/// let config = ApiGatewayV2Config::builder()
///     .execute_api_domain("localhost.localstack.cloud".to_owned())
///     .build();
/// assert_eq!(config.api_id_length, 10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayV2Config {
    /// Domain suffix of generated `execute-api` endpoints.
    #[builder(default = String::from("amazonaws.com"))]
    pub execute_api_domain: String,

    /// Length of generated API ids.
    #[builder(default = 10)]
    pub api_id_length: usize,

    /// Length of generated authorizer ids.
    #[builder(default = 6)]
    pub authorizer_id_length: usize,
}

impl Default for ApiGatewayV2Config {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ApiGatewayV2Config {
    /// Create configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(v) = env::var("APIGATEWAYV2_EXECUTE_API_DOMAIN") {
            config.execute_api_domain = v;
        }
        config
    }
}
