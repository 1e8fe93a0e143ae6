//! IAM shared types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An IAM group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Group {
    pub path: String,
    pub group_name: String,
    pub group_id: String,
    pub arn: String,
    pub create_date: DateTime<Utc>,
}

/// An IAM user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub path: String,
    pub user_name: String,
    pub user_id: String,
    pub arn: String,
    pub create_date: DateTime<Utc>,
    /// Last console sign-in; absent if the password was never used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_last_used: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// A key/value tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// A managed policy attached to a group or user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttachedPolicy {
    /// Trailing segment of the policy ARN.
    pub policy_name: String,
    pub policy_arn: String,
}

/// A customer-managed policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Policy {
    pub policy_name: String,
    pub policy_id: String,
    pub arn: String,
    pub path: String,
    pub default_version_id: String,
    pub attachment_count: u32,
    pub is_attachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub create_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
}

/// One version of a managed policy, carrying its parsed document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyVersion {
    pub document: serde_json::Value,
    pub version_id: String,
    pub is_default_version: bool,
    pub create_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_group_in_pascal_case() {
        let group = Group {
            path: "/".to_owned(),
            group_name: "my-group".to_owned(),
            group_id: "AGPAEXAMPLE".to_owned(),
            arn: "arn:aws:iam::123456789012:group/my-group".to_owned(),
            create_date: Utc::now(),
        };
        let json = serde_json::to_value(&group).expect("serialize Group");
        assert_eq!(json["GroupName"], "my-group");
        assert_eq!(json["Arn"], "arn:aws:iam::123456789012:group/my-group");
        assert!(json.get("CreateDate").is_some());
    }

    #[test]
    fn test_should_omit_unused_password() {
        let user = User {
            user_name: "my-user".to_owned(),
            ..Default::default()
        };
        let json = serde_json::to_value(&user).expect("serialize User");
        assert!(json.get("PasswordLastUsed").is_none());
        assert!(json.get("Tags").is_none());
    }
}
