//! IAM configuration.

use std::env;

/// Default number of groups a single user may belong to.
pub const DEFAULT_MAX_GROUPS_PER_USER: usize = 10;

/// Default maximum size of a policy document, in characters.
pub const DEFAULT_MAX_POLICY_SIZE: usize = 6144;

/// IAM service configuration.
#[derive(Debug, Clone)]
pub struct IamConfig {
    /// Quota on group memberships per user.
    pub max_groups_per_user: usize,
    /// Quota on the length of a policy document.
    pub max_policy_size: usize,
    /// Reject policy documents without a `Statement` member.
    pub require_statement: bool,
}

impl IamConfig {
    /// Create configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_groups_per_user: env_usize("IAM_MAX_GROUPS_PER_USER", DEFAULT_MAX_GROUPS_PER_USER),
            max_policy_size: env_usize("IAM_MAX_POLICY_SIZE", DEFAULT_MAX_POLICY_SIZE),
            require_statement: env_bool("IAM_REQUIRE_POLICY_STATEMENT", true),
        }
    }
}

impl Default for IamConfig {
    fn default() -> Self {
        Self {
            max_groups_per_user: DEFAULT_MAX_GROUPS_PER_USER,
            max_policy_size: DEFAULT_MAX_POLICY_SIZE,
            require_statement: true,
        }
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    env::var(key).map_or(default, |v| {
        matches!(v.as_str(), "1" | "true" | "yes" | "TRUE" | "YES")
    })
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_default_config() {
        let config = IamConfig::default();
        assert_eq!(config.max_groups_per_user, 10);
        assert_eq!(config.max_policy_size, 6144);
        assert!(config.require_statement);
    }
}
