//! ARN construction and parsing.

use std::fmt;

/// Account segment used by AWS-managed IAM policies.
pub const AWS_MANAGED_ACCOUNT: &str = "aws";

/// Build an IAM ARN: `arn:{partition}:iam::{account}:{resource_type}{path}{name}`.
///
/// The path is embedded verbatim between the resource type and the name, so
/// `/` yields `group/name` and `/some/location/` yields
/// `group/some/location/name`.
///
/// ```
/// use mockstack_core::arn::iam_arn;
///
/// assert_eq!(
///     iam_arn("aws", "123456789012", "group", "/", "my-group"),
///     "arn:aws:iam::123456789012:group/my-group"
/// );
/// ```
#[must_use]
pub fn iam_arn(
    partition: &str,
    account: &str,
    resource_type: &str,
    path: &str,
    name: &str,
) -> String {
    format!("arn:{partition}:iam::{account}:{resource_type}{path}{name}")
}

/// A parsed IAM managed-policy ARN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyArn<'a> {
    /// ARN partition.
    pub partition: &'a str,
    /// Owning account, or `aws` for AWS-managed policies.
    pub account: &'a str,
    /// Policy path, always starting and ending with `/`.
    pub path: &'a str,
    /// Policy name (the trailing segment).
    pub name: &'a str,
}

impl<'a> PolicyArn<'a> {
    /// Parse `arn:{partition}:iam::{account}:policy{path}{name}`.
    ///
    /// Returns `None` when the string is not an IAM policy ARN.
    #[must_use]
    pub fn parse(arn: &'a str) -> Option<Self> {
        let mut parts = arn.splitn(6, ':');
        if parts.next()? != "arn" {
            return None;
        }
        let partition = parts.next()?;
        if parts.next()? != "iam" || !parts.next()?.is_empty() {
            return None;
        }
        let account = parts.next()?;
        let resource = parts.next()?.strip_prefix("policy")?;
        if partition.is_empty() || account.is_empty() || !resource.starts_with('/') {
            return None;
        }
        let split = resource.rfind('/')?;
        let (path, name) = resource.split_at(split + 1);
        if name.is_empty() {
            return None;
        }
        Some(Self {
            partition,
            account,
            path,
            name,
        })
    }

    /// Whether this is an AWS-managed policy.
    #[must_use]
    pub fn is_aws_managed(&self) -> bool {
        self.account == AWS_MANAGED_ACCOUNT
    }
}

impl fmt::Display for PolicyArn<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:iam::{}:policy{}{}",
            self.partition, self.account, self.path, self.name
        )
    }
}

/// The trailing path segment of an ARN.
#[must_use]
pub fn trailing_segment(arn: &str) -> &str {
    arn.rsplit(['/', ':']).next().unwrap_or(arn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_embed_nested_path() {
        assert_eq!(
            iam_arn("aws", "123456789012", "group", "/some/location/", "g"),
            "arn:aws:iam::123456789012:group/some/location/g"
        );
    }

    #[test]
    fn test_should_parse_aws_managed_policy_arn() {
        let raw = "arn:aws:iam::aws:policy/service-role/AmazonElasticMapReduceforEC2Role";
        let arn = PolicyArn::parse(raw).unwrap();
        assert!(arn.is_aws_managed());
        assert_eq!(arn.path, "/service-role/");
        assert_eq!(arn.name, "AmazonElasticMapReduceforEC2Role");
        assert_eq!(arn.to_string(), raw);
    }

    #[test]
    fn test_should_reject_non_policy_arns() {
        assert!(PolicyArn::parse("arn:aws:iam::123456789012:group/g").is_none());
        assert!(PolicyArn::parse("arn:aws:s3:::bucket").is_none());
        assert!(PolicyArn::parse("arn:aws:iam::123456789012:policy/").is_none());
        assert!(PolicyArn::parse("not-an-arn").is_none());
    }

    #[test]
    fn test_should_return_trailing_segment() {
        assert_eq!(trailing_segment("arn:aws:iam::aws:policy/a/b/Name"), "Name");
        assert_eq!(trailing_segment("plain"), "plain");
    }
}
