//! IAM state.
//!
//! IAM is global: one [`IamState`] exists per account. All tables and
//! relations sit behind a single lock so cascading deletes and renames are
//! applied as one step.

use chrono::{DateTime, Utc};
use mockstack_core::arn::{iam_arn, trailing_segment};
use mockstack_core::{RelationIndex, Resource, ResourceTable};
use mockstack_iam_model::types::{AttachedPolicy, Group, Policy, PolicyVersion, Tag, User};
use parking_lot::RwLock;
use serde_json::Value;

/// Resource kind of groups.
pub const GROUP_KIND: &str = "group";
/// Resource kind of users.
pub const USER_KIND: &str = "user";
/// Resource kind of managed policies.
pub const POLICY_KIND: &str = "policy";
/// Resource kind of inline policies.
pub const INLINE_POLICY_KIND: &str = "inline policy";

/// Version id of the only version a managed policy has.
pub const DEFAULT_VERSION_ID: &str = "v1";

/// An inline policy embedded in a group or user.
#[derive(Debug, Clone)]
pub struct InlinePolicy {
    pub policy_name: String,
    /// Parsed document.
    pub document: Value,
}

impl Resource for InlinePolicy {
    const KIND: &'static str = INLINE_POLICY_KIND;

    fn id(&self) -> &str {
        &self.policy_name
    }
}

/// A stored group.
#[derive(Debug, Clone)]
pub struct GroupRecord {
    pub group_id: String,
    pub group_name: String,
    pub path: String,
    pub arn: String,
    pub create_date: DateTime<Utc>,
    pub inline_policies: ResourceTable<InlinePolicy>,
}

impl Resource for GroupRecord {
    const KIND: &'static str = GROUP_KIND;

    fn id(&self) -> &str {
        &self.group_id
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.group_name)
    }
}

impl GroupRecord {
    #[must_use]
    pub fn to_group(&self) -> Group {
        Group {
            path: self.path.clone(),
            group_name: self.group_name.clone(),
            group_id: self.group_id.clone(),
            arn: self.arn.clone(),
            create_date: self.create_date,
        }
    }

    /// Rename and/or move the group, keeping id and creation date.
    pub fn rename(&mut self, partition: &str, account: &str, name: Option<&str>, path: Option<&str>) {
        if let Some(name) = name {
            name.clone_into(&mut self.group_name);
        }
        if let Some(path) = path {
            path.clone_into(&mut self.path);
        }
        self.arn = iam_arn(partition, account, GROUP_KIND, &self.path, &self.group_name);
    }
}

/// A stored user.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user_id: String,
    pub user_name: String,
    pub path: String,
    pub arn: String,
    pub create_date: DateTime<Utc>,
    pub password_last_used: Option<DateTime<Utc>>,
    pub tags: Vec<Tag>,
    pub inline_policies: ResourceTable<InlinePolicy>,
}

impl Resource for UserRecord {
    const KIND: &'static str = USER_KIND;

    fn id(&self) -> &str {
        &self.user_id
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.user_name)
    }
}

impl UserRecord {
    #[must_use]
    pub fn to_user(&self) -> User {
        User {
            path: self.path.clone(),
            user_name: self.user_name.clone(),
            user_id: self.user_id.clone(),
            arn: self.arn.clone(),
            create_date: self.create_date,
            password_last_used: self.password_last_used,
            tags: self.tags.clone(),
        }
    }

    /// Rename and/or move the user, keeping id and creation date.
    pub fn rename(&mut self, partition: &str, account: &str, name: Option<&str>, path: Option<&str>) {
        if let Some(name) = name {
            name.clone_into(&mut self.user_name);
        }
        if let Some(path) = path {
            path.clone_into(&mut self.path);
        }
        self.arn = iam_arn(partition, account, USER_KIND, &self.path, &self.user_name);
    }
}

/// A stored customer-managed policy. Keyed by ARN.
#[derive(Debug, Clone)]
pub struct ManagedPolicyRecord {
    pub arn: String,
    pub policy_id: String,
    pub policy_name: String,
    pub path: String,
    pub description: Option<String>,
    pub document: Value,
    pub create_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
}

impl Resource for ManagedPolicyRecord {
    const KIND: &'static str = POLICY_KIND;

    fn id(&self) -> &str {
        &self.arn
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.policy_name)
    }
}

impl ManagedPolicyRecord {
    #[must_use]
    pub fn to_policy(&self, attachment_count: usize) -> Policy {
        Policy {
            policy_name: self.policy_name.clone(),
            policy_id: self.policy_id.clone(),
            arn: self.arn.clone(),
            path: self.path.clone(),
            default_version_id: DEFAULT_VERSION_ID.to_owned(),
            attachment_count: u32::try_from(attachment_count).unwrap_or(u32::MAX),
            is_attachable: true,
            description: self.description.clone(),
            create_date: self.create_date,
            update_date: self.update_date,
        }
    }

    #[must_use]
    pub fn to_default_version(&self) -> PolicyVersion {
        PolicyVersion {
            document: self.document.clone(),
            version_id: DEFAULT_VERSION_ID.to_owned(),
            is_default_version: true,
            create_date: self.create_date,
        }
    }
}

/// Every IAM table and relation of one account.
#[derive(Debug, Default)]
pub struct IamTables {
    pub groups: ResourceTable<GroupRecord>,
    pub users: ResourceTable<UserRecord>,
    pub policies: ResourceTable<ManagedPolicyRecord>,
    /// group id -> user id.
    pub memberships: RelationIndex,
    /// owner (group or user) id -> policy ARN.
    pub attachments: RelationIndex,
}

impl IamTables {
    /// Members of a group, in the order they were added.
    #[must_use]
    pub fn members_of(&self, group_id: &str) -> Vec<&UserRecord> {
        self.memberships
            .targets(group_id)
            .iter()
            .filter_map(|user_id| self.users.get(user_id))
            .collect()
    }

    /// Groups a user belongs to, in the order the user joined them.
    #[must_use]
    pub fn groups_of(&self, user_id: &str) -> Vec<&GroupRecord> {
        self.memberships
            .sources(user_id)
            .iter()
            .filter_map(|group_id| self.groups.get(group_id))
            .collect()
    }

    /// Managed policies attached to an owner, in attachment order.
    #[must_use]
    pub fn attached_policies(&self, owner_id: &str) -> Vec<AttachedPolicy> {
        self.attachments
            .targets(owner_id)
            .iter()
            .map(|arn| AttachedPolicy {
                policy_name: trailing_segment(arn).to_owned(),
                policy_arn: arn.clone(),
            })
            .collect()
    }

    /// Number of groups and users a policy is attached to.
    #[must_use]
    pub fn attachment_count(&self, policy_arn: &str) -> usize {
        self.attachments.sources(policy_arn).len()
    }

    /// Remove a group together with its memberships and attachments.
    pub fn remove_group(&mut self, group_id: &str) -> Option<GroupRecord> {
        let group = self.groups.remove(group_id).ok()?;
        self.memberships.remove_source(group_id);
        self.attachments.remove_source(group_id);
        Some(group)
    }

    /// Remove a user together with its memberships and attachments.
    pub fn remove_user(&mut self, user_id: &str) -> Option<UserRecord> {
        let user = self.users.remove(user_id).ok()?;
        self.memberships.remove_target(user_id);
        self.attachments.remove_source(user_id);
        Some(user)
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.groups.clear();
        self.users.clear();
        self.policies.clear();
        self.memberships.clear();
        self.attachments.clear();
    }
}

/// IAM state for one account.
#[derive(Debug, Default)]
pub struct IamState {
    pub tables: RwLock<IamTables>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: &str, name: &str) -> GroupRecord {
        GroupRecord {
            group_id: id.to_owned(),
            group_name: name.to_owned(),
            path: "/".to_owned(),
            arn: iam_arn("aws", "123456789012", GROUP_KIND, "/", name),
            create_date: Utc::now(),
            inline_policies: ResourceTable::new(),
        }
    }

    fn user(id: &str, name: &str) -> UserRecord {
        UserRecord {
            user_id: id.to_owned(),
            user_name: name.to_owned(),
            path: "/".to_owned(),
            arn: iam_arn("aws", "123456789012", USER_KIND, "/", name),
            create_date: Utc::now(),
            password_last_used: None,
            tags: Vec::new(),
            inline_policies: ResourceTable::new(),
        }
    }

    #[test]
    fn test_should_rebuild_arn_on_rename() {
        let mut g = group("g1", "my-group");
        g.rename("aws", "123456789012", Some("new-group"), None);
        assert_eq!(g.arn, "arn:aws:iam::123456789012:group/new-group");

        g.rename("aws", "123456789012", None, Some("/new-path"));
        assert_eq!(g.arn, "arn:aws:iam::123456789012:group/new-pathnew-group");
        assert_eq!(g.group_id, "g1");
    }

    #[test]
    fn test_should_cascade_group_removal() {
        let mut tables = IamTables::default();
        tables.groups.insert(group("g1", "a")).unwrap();
        tables.groups.insert(group("g2", "b")).unwrap();
        tables.users.insert(user("u1", "alice")).unwrap();
        tables.memberships.add("g1", "u1");
        tables.memberships.add("g2", "u1");
        tables.attachments.add("g1", "arn:aws:iam::aws:policy/ReadOnlyAccess");

        tables.remove_group("g1").unwrap();

        let names: Vec<_> = tables
            .groups_of("u1")
            .into_iter()
            .map(|g| g.group_name.as_str())
            .collect();
        assert_eq!(names, vec!["b"]);
        assert_eq!(tables.attachment_count("arn:aws:iam::aws:policy/ReadOnlyAccess"), 0);
    }

    #[test]
    fn test_should_cascade_user_removal() {
        let mut tables = IamTables::default();
        tables.groups.insert(group("g1", "a")).unwrap();
        tables.users.insert(user("u1", "alice")).unwrap();
        tables.users.insert(user("u2", "bob")).unwrap();
        tables.memberships.add("g1", "u1");
        tables.memberships.add("g1", "u2");

        tables.remove_user("u1").unwrap();

        let members: Vec<_> = tables
            .members_of("g1")
            .into_iter()
            .map(|u| u.user_name.as_str())
            .collect();
        assert_eq!(members, vec!["bob"]);
    }

    #[test]
    fn test_should_derive_attached_policy_names() {
        let mut tables = IamTables::default();
        tables.attachments.add(
            "g1",
            "arn:aws:iam::aws:policy/service-role/AmazonElasticMapReduceforEC2Role",
        );
        let attached = tables.attached_policies("g1");
        assert_eq!(attached.len(), 1);
        assert_eq!(attached[0].policy_name, "AmazonElasticMapReduceforEC2Role");
    }
}
