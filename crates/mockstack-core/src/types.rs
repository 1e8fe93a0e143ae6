//! Scope types shared by every emulated service.
//!
//! Every resource lives in exactly one (account, region) scope. Callers pass a
//! [`RequestContext`] into each provider operation instead of relying on a
//! process-global default.

use std::fmt;

/// AWS Account ID (12-digit string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Default account ID used when the caller does not supply one.
    pub const DEFAULT: &str = "123456789012";

    /// Create a new account ID from a string.
    ///
    /// # Errors
    /// Returns an error if the account ID is not a 12-digit numeric string.
    pub fn new(id: impl Into<String>) -> Result<Self, crate::MockStackError> {
        let id = id.into();
        if id.len() != 12 || !id.chars().all(|c| c.is_ascii_digit()) {
            return Err(crate::MockStackError::InvalidAccountId(id));
        }
        Ok(Self(id))
    }

    /// Get the account ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// AWS Region identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AwsRegion(String);

impl AwsRegion {
    /// Default region.
    pub const DEFAULT: &str = "us-east-1";

    /// Pseudo-region under which global services (IAM) keep their state.
    pub const GLOBAL: &str = "global";

    /// Create a new region.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// The pseudo-region used for global services.
    #[must_use]
    pub fn global() -> Self {
        Self(Self::GLOBAL.to_owned())
    }

    /// Get the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ARN partition this region belongs to.
    #[must_use]
    pub fn partition(&self) -> &'static str {
        if self.0.starts_with("cn-") {
            "aws-cn"
        } else if self.0.starts_with("us-gov-") {
            "aws-us-gov"
        } else {
            "aws"
        }
    }
}

impl Default for AwsRegion {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The (account, region) scope of a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RequestContext {
    /// Calling account.
    pub account_id: AccountId,
    /// Target region.
    pub region: AwsRegion,
}

impl RequestContext {
    /// Build a context for the given account and region.
    #[must_use]
    pub fn new(account_id: AccountId, region: AwsRegion) -> Self {
        Self { account_id, region }
    }

    /// Default account in the given region.
    #[must_use]
    pub fn for_region(region: impl Into<String>) -> Self {
        Self {
            account_id: AccountId::default(),
            region: AwsRegion::new(region),
        }
    }

    /// ARN partition for this request.
    #[must_use]
    pub fn partition(&self) -> &'static str {
        self.region.partition()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_valid_account_id() {
        let id = AccountId::new("210987654321").unwrap();
        assert_eq!(id.as_str(), "210987654321");
    }

    #[test]
    fn test_should_reject_invalid_account_id() {
        assert!(AccountId::new("12345").is_err());
        assert!(AccountId::new("abcdefghijkl").is_err());
        assert!(AccountId::new("1234567890123").is_err());
    }

    #[test]
    fn test_should_use_default_account_id() {
        assert_eq!(AccountId::default().as_str(), "123456789012");
    }

    #[test]
    fn test_should_derive_partition_from_region() {
        assert_eq!(AwsRegion::new("eu-west-1").partition(), "aws");
        assert_eq!(AwsRegion::new("cn-north-1").partition(), "aws-cn");
        assert_eq!(AwsRegion::new("us-gov-west-1").partition(), "aws-us-gov");
        assert_eq!(AwsRegion::global().partition(), "aws");
    }

    #[test]
    fn test_should_build_context_for_region() {
        let ctx = RequestContext::for_region("eu-west-1");
        assert_eq!(ctx.region.as_str(), "eu-west-1");
        assert_eq!(ctx.account_id, AccountId::default());
        assert_eq!(ctx.partition(), "aws");
    }
}
