//! Configuration management for MockStack services.
//!
//! All configuration is driven by environment variables.

use tracing_subscriber::EnvFilter;

use crate::error::{MockStackError, MockStackResult};
use crate::types::{AccountId, AwsRegion, RequestContext};

/// Global configuration for MockStack.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockStackConfig {
    /// Default AWS region.
    pub default_region: AwsRegion,
    /// Account used when a caller does not name one.
    pub default_account_id: AccountId,
    /// Log level.
    pub log_level: String,
}

impl Default for MockStackConfig {
    fn default() -> Self {
        Self {
            default_region: AwsRegion::default(),
            default_account_id: AccountId::default(),
            log_level: "info".to_owned(),
        }
    }
}

impl MockStackConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns an error if `DEFAULT_ACCOUNT_ID` is malformed or `LOG_LEVEL` is
    /// not a valid filter directive.
    pub fn from_env() -> MockStackResult<Self> {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("DEFAULT_REGION") {
            config.default_region = AwsRegion::new(v);
        }
        if let Ok(v) = std::env::var("DEFAULT_ACCOUNT_ID") {
            config.default_account_id = AccountId::new(v)?;
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = parse_log_level(v)?;
        }

        Ok(config)
    }

    /// Request context for the configured default account and region.
    #[must_use]
    pub fn default_context(&self) -> RequestContext {
        RequestContext::new(self.default_account_id.clone(), self.default_region.clone())
    }
}

/// Check a log level against the tracing filter syntax.
fn parse_log_level(level: String) -> MockStackResult<String> {
    match EnvFilter::try_new(&level) {
        Ok(_) => Ok(level),
        Err(e) => Err(MockStackError::Config(format!("invalid LOG_LEVEL {level:?}: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_default_config() {
        let config = MockStackConfig::default();
        assert_eq!(config.default_region.as_str(), "us-east-1");
        assert_eq!(config.default_account_id.as_str(), "123456789012");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_should_build_default_context() {
        let ctx = MockStackConfig::default().default_context();
        assert_eq!(ctx, RequestContext::default());
    }

    #[test]
    fn test_should_serialize_camel_case() {
        let json = serde_json::to_value(MockStackConfig::default()).unwrap();
        assert_eq!(json["defaultRegion"], "us-east-1");
        assert_eq!(json["defaultAccountId"], "123456789012");
    }

    #[test]
    fn test_should_accept_log_level_directives() {
        assert_eq!(parse_log_level("debug".to_owned()).unwrap(), "debug");
        assert!(parse_log_level("mockstack_iam_core=trace,info".to_owned()).is_ok());
    }

    #[test]
    fn test_should_reject_bad_log_level() {
        let err = parse_log_level("info,mockstack=notalevel".to_owned()).unwrap_err();
        assert!(matches!(err, MockStackError::Config(_)));
        assert!(err.to_string().starts_with("configuration error: invalid LOG_LEVEL"));
    }
}
