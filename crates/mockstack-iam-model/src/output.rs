//! IAM output types.

use serde::{Deserialize, Serialize};

use crate::types::{AttachedPolicy, Group, Policy, PolicyVersion, User};

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

/// Output for the `CreateGroup` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGroupOutput {
    pub group: Group,
}

/// Output for the `GetGroup` operation: the group and its members.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetGroupOutput {
    pub group: Group,
    #[serde(default)]
    pub users: Vec<User>,
}

/// Output for the `ListGroups` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGroupsOutput {
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// Output for the `UpdateGroup` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateGroupOutput {}

/// Output for the `DeleteGroup` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteGroupOutput {}

/// Output for the `AddUserToGroup` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddUserToGroupOutput {}

/// Output for the `RemoveUserFromGroup` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveUserFromGroupOutput {}

/// Output for the `ListGroupsForUser` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGroupsForUserOutput {
    #[serde(default)]
    pub groups: Vec<Group>,
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Output for the `CreateUser` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserOutput {
    pub user: User,
}

/// Output for the `GetUser` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserOutput {
    pub user: User,
}

/// Output for the `ListUsers` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUsersOutput {
    #[serde(default)]
    pub users: Vec<User>,
}

/// Output for the `UpdateUser` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserOutput {}

/// Output for the `DeleteUser` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteUserOutput {}

// ---------------------------------------------------------------------------
// Inline policies
// ---------------------------------------------------------------------------

/// Output for the `PutGroupPolicy` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PutGroupPolicyOutput {}

/// Output for the `GetGroupPolicy` operation. The document is parsed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetGroupPolicyOutput {
    pub group_name: String,
    pub policy_name: String,
    pub policy_document: serde_json::Value,
}

/// Output for the `DeleteGroupPolicy` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteGroupPolicyOutput {}

/// Output for the `ListGroupPolicies` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGroupPoliciesOutput {
    #[serde(default)]
    pub policy_names: Vec<String>,
}

/// Output for the `PutUserPolicy` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PutUserPolicyOutput {}

/// Output for the `GetUserPolicy` operation. The document is parsed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserPolicyOutput {
    pub user_name: String,
    pub policy_name: String,
    pub policy_document: serde_json::Value,
}

/// Output for the `DeleteUserPolicy` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteUserPolicyOutput {}

/// Output for the `ListUserPolicies` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUserPoliciesOutput {
    #[serde(default)]
    pub policy_names: Vec<String>,
}

// ---------------------------------------------------------------------------
// Managed policies and attachments
// ---------------------------------------------------------------------------

/// Output for the `CreatePolicy` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePolicyOutput {
    pub policy: Policy,
}

/// Output for the `GetPolicy` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPolicyOutput {
    pub policy: Policy,
}

/// Output for the `GetPolicyVersion` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPolicyVersionOutput {
    pub policy_version: PolicyVersion,
}

/// Output for the `ListPolicies` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPoliciesOutput {
    #[serde(default)]
    pub policies: Vec<Policy>,
}

/// Output for the `DeletePolicy` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePolicyOutput {}

/// Output for the `AttachGroupPolicy` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttachGroupPolicyOutput {}

/// Output for the `DetachGroupPolicy` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetachGroupPolicyOutput {}

/// Output for the `ListAttachedGroupPolicies` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAttachedGroupPoliciesOutput {
    #[serde(default)]
    pub attached_policies: Vec<AttachedPolicy>,
}

/// Output for the `AttachUserPolicy` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttachUserPolicyOutput {}

/// Output for the `DetachUserPolicy` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetachUserPolicyOutput {}

/// Output for the `ListAttachedUserPolicies` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAttachedUserPoliciesOutput {
    #[serde(default)]
    pub attached_policies: Vec<AttachedPolicy>,
}
