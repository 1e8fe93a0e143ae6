//! IAM provider implementing group, user, and policy operations.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockstack_core::arn::iam_arn;
use mockstack_core::id::{GROUP_ID_PREFIX, POLICY_ID_PREFIX, USER_ID_PREFIX, iam_unique_id};
use mockstack_core::{AccountRegionStore, AwsRegion, RequestContext, ResourceTable};
use mockstack_iam_model::error::IamError;
use mockstack_iam_model::input::{
    AddUserToGroupInput, AttachGroupPolicyInput, AttachUserPolicyInput, CreateGroupInput,
    CreatePolicyInput, CreateUserInput, DeleteGroupInput, DeleteGroupPolicyInput,
    DeletePolicyInput, DeleteUserInput, DeleteUserPolicyInput, DetachGroupPolicyInput,
    DetachUserPolicyInput, GetGroupInput, GetGroupPolicyInput, GetPolicyInput,
    GetPolicyVersionInput, GetUserInput, GetUserPolicyInput, ListAttachedGroupPoliciesInput,
    ListAttachedUserPoliciesInput, ListGroupPoliciesInput, ListGroupsForUserInput,
    ListGroupsInput, ListPoliciesInput, ListUserPoliciesInput, ListUsersInput,
    PutGroupPolicyInput, PutUserPolicyInput, RemoveUserFromGroupInput, UpdateGroupInput,
    UpdateUserInput,
};
use mockstack_iam_model::output::{
    AddUserToGroupOutput, AttachGroupPolicyOutput, AttachUserPolicyOutput, CreateGroupOutput,
    CreatePolicyOutput, CreateUserOutput, DeleteGroupOutput, DeleteGroupPolicyOutput,
    DeletePolicyOutput, DeleteUserOutput, DeleteUserPolicyOutput, DetachGroupPolicyOutput,
    DetachUserPolicyOutput, GetGroupOutput, GetGroupPolicyOutput, GetPolicyOutput,
    GetPolicyVersionOutput, GetUserOutput, GetUserPolicyOutput, ListAttachedGroupPoliciesOutput,
    ListAttachedUserPoliciesOutput, ListGroupPoliciesOutput, ListGroupsForUserOutput,
    ListGroupsOutput, ListPoliciesOutput, ListUserPoliciesOutput, ListUsersOutput,
    PutGroupPolicyOutput, PutUserPolicyOutput, RemoveUserFromGroupOutput, UpdateGroupOutput,
    UpdateUserOutput,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::IamConfig;
use crate::error::store_error_to_iam;
use crate::policy::parse_policy_document;
use crate::state::{
    DEFAULT_VERSION_ID, GROUP_KIND, GroupRecord, IamState, IamTables, InlinePolicy,
    ManagedPolicyRecord, POLICY_KIND, USER_KIND, UserRecord,
};
use crate::validation::{validate_name, validate_path, validate_path_prefix, validate_policy_arn};

/// Main IAM provider.
#[derive(Debug)]
pub struct MockStackIam {
    /// Per-account state. IAM is global, so the region is always `global`.
    pub state: AccountRegionStore<IamState>,
    /// Configuration.
    pub config: Arc<IamConfig>,
}

impl Default for MockStackIam {
    fn default() -> Self {
        Self::new(IamConfig::default())
    }
}

impl MockStackIam {
    /// Create a new IAM provider.
    #[must_use]
    pub fn new(config: IamConfig) -> Self {
        Self {
            state: AccountRegionStore::new(),
            config: Arc::new(config),
        }
    }

    /// Reset all state (for testing).
    pub fn reset(&self) {
        self.state.reset();
    }

    fn scope(&self, ctx: &RequestContext) -> Arc<IamState> {
        self.state
            .get_or_create(&ctx.account_id, &AwsRegion::global())
    }

    /// Parse a document and check its decoded length against the quota.
    fn parse_document(&self, raw: &str) -> Result<Value, IamError> {
        let document = parse_policy_document(raw, self.config.require_statement)?;
        if document.len() > self.config.max_policy_size {
            return Err(IamError::limit_exceeded(format!(
                "Cannot exceed quota for PolicySize: {}",
                self.config.max_policy_size
            )));
        }
        Ok(document.value)
    }
}

fn group_id(tables: &IamTables, group_name: &str) -> Result<String, IamError> {
    tables
        .groups
        .get_by_key(group_name)
        .map(|g| g.group_id.clone())
        .ok_or_else(|| IamError::group_not_found(group_name))
}

fn user_id(tables: &IamTables, user_name: &str) -> Result<String, IamError> {
    tables
        .users
        .get_by_key(user_name)
        .map(|u| u.user_id.clone())
        .ok_or_else(|| IamError::user_not_found(user_name))
}

/// Create or overwrite an inline policy.
fn put_inline_policy(
    table: &mut ResourceTable<InlinePolicy>,
    policy_name: &str,
    document: Value,
) -> Result<(), IamError> {
    match table.get_mut(policy_name) {
        Some(existing) => existing.document = document,
        None => {
            table
                .insert(InlinePolicy {
                    policy_name: policy_name.to_owned(),
                    document,
                })
                .map_err(store_error_to_iam)?;
        }
    }
    Ok(())
}

fn inline_policy_names(table: &ResourceTable<InlinePolicy>) -> Vec<String> {
    table.list().map(|p| p.policy_name.clone()).collect()
}

/// Attach a managed policy to an owner. Returns `false` if it was already
/// attached.
fn attach_policy(
    tables: &mut IamTables,
    owner_id: &str,
    policy_arn: &str,
    aws_managed: bool,
) -> Result<bool, IamError> {
    if !aws_managed && tables.policies.get(policy_arn).is_none() {
        return Err(IamError::no_such_entity(format!(
            "Policy {policy_arn} does not exist or is not attachable."
        )));
    }
    Ok(tables.attachments.add(owner_id, policy_arn))
}

fn detach_policy(tables: &mut IamTables, owner_id: &str, policy_arn: &str) -> Result<(), IamError> {
    if !tables.attachments.remove(owner_id, policy_arn) {
        return Err(IamError::policy_not_found(policy_arn));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

impl MockStackIam {
    /// Handle `CreateGroup`.
    pub fn handle_create_group(
        &self,
        ctx: &RequestContext,
        input: CreateGroupInput,
    ) -> Result<CreateGroupOutput, IamError> {
        validate_name("groupName", &input.group_name)?;
        let path = validate_path("path", input.path.as_deref())?.to_owned();

        let record = GroupRecord {
            group_id: iam_unique_id(GROUP_ID_PREFIX),
            arn: iam_arn(
                ctx.partition(),
                ctx.account_id.as_str(),
                GROUP_KIND,
                &path,
                &input.group_name,
            ),
            group_name: input.group_name,
            path,
            create_date: Utc::now(),
            inline_policies: ResourceTable::new(),
        };

        let state = self.scope(ctx);
        let mut tables = state.tables.write();
        let group = tables
            .groups
            .insert(record)
            .map_err(store_error_to_iam)?
            .to_group();
        info!(group = %group.group_name, group_id = %group.group_id, "created group");
        Ok(CreateGroupOutput { group })
    }

    /// Handle `GetGroup`. Returns the group and its members.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_get_group(
        &self,
        ctx: &RequestContext,
        input: GetGroupInput,
    ) -> Result<GetGroupOutput, IamError> {
        let state = self.scope(ctx);
        let tables = state.tables.read();
        let group = tables
            .groups
            .get_by_key(&input.group_name)
            .ok_or_else(|| IamError::group_not_found(&input.group_name))?;
        let users = tables
            .members_of(&group.group_id)
            .into_iter()
            .map(UserRecord::to_user)
            .collect();
        debug!(group = %input.group_name, "got group");
        Ok(GetGroupOutput {
            group: group.to_group(),
            users,
        })
    }

    /// Handle `ListGroups`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_list_groups(
        &self,
        ctx: &RequestContext,
        input: ListGroupsInput,
    ) -> Result<ListGroupsOutput, IamError> {
        validate_path_prefix(input.path_prefix.as_deref())?;
        let prefix = input.path_prefix.as_deref().unwrap_or("/");
        let state = self.scope(ctx);
        let groups: Vec<_> = state
            .tables
            .read()
            .groups
            .list()
            .filter(|g| g.path.starts_with(prefix))
            .map(GroupRecord::to_group)
            .collect();
        debug!(count = groups.len(), "listed groups");
        Ok(ListGroupsOutput { groups })
    }

    /// Handle `UpdateGroup`: rename and/or move a group, keeping its id.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_update_group(
        &self,
        ctx: &RequestContext,
        input: UpdateGroupInput,
    ) -> Result<UpdateGroupOutput, IamError> {
        if let Some(ref name) = input.new_group_name {
            validate_name("newGroupName", name)?;
        }
        if input.new_path.is_some() {
            validate_path("newPath", input.new_path.as_deref())?;
        }

        let state = self.scope(ctx);
        let mut tables = state.tables.write();
        let id = tables
            .groups
            .get_by_key(&input.group_name)
            .map(|g| g.group_id.clone())
            .ok_or_else(|| IamError::group_cannot_be_found(&input.group_name))?;
        tables
            .groups
            .update(&id, |group| {
                group.rename(
                    ctx.partition(),
                    ctx.account_id.as_str(),
                    input.new_group_name.as_deref(),
                    input.new_path.as_deref(),
                );
            })
            .map_err(store_error_to_iam)?;
        info!(
            group = %input.group_name,
            new_name = ?input.new_group_name,
            new_path = ?input.new_path,
            "updated group"
        );
        Ok(UpdateGroupOutput {})
    }

    /// Handle `DeleteGroup`. Memberships, inline policies, and attachments go
    /// with the group.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_delete_group(
        &self,
        ctx: &RequestContext,
        input: DeleteGroupInput,
    ) -> Result<DeleteGroupOutput, IamError> {
        let state = self.scope(ctx);
        let mut tables = state.tables.write();
        let id = tables
            .groups
            .get_by_key(&input.group_name)
            .map(|g| g.group_id.clone())
            .ok_or_else(|| IamError::group_cannot_be_found(&input.group_name))?;
        tables.remove_group(&id);
        info!(group = %input.group_name, group_id = %id, "deleted group");
        Ok(DeleteGroupOutput {})
    }

    /// Handle `AddUserToGroup`. The user is looked up before the group.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_add_user_to_group(
        &self,
        ctx: &RequestContext,
        input: AddUserToGroupInput,
    ) -> Result<AddUserToGroupOutput, IamError> {
        let state = self.scope(ctx);
        let mut tables = state.tables.write();
        let uid = user_id(&tables, &input.user_name)?;
        let gid = group_id(&tables, &input.group_name)?;

        if tables.memberships.contains(&gid, &uid) {
            debug!(group = %input.group_name, user = %input.user_name, "user already in group");
            return Ok(AddUserToGroupOutput {});
        }
        if tables.memberships.sources(&uid).len() >= self.config.max_groups_per_user {
            return Err(IamError::limit_exceeded(format!(
                "Cannot exceed quota for GroupsPerUser: {}",
                self.config.max_groups_per_user
            )));
        }
        tables.memberships.add(&gid, &uid);
        info!(group = %input.group_name, user = %input.user_name, "added user to group");
        Ok(AddUserToGroupOutput {})
    }

    /// Handle `RemoveUserFromGroup`. Checks group, then user, then membership.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_remove_user_from_group(
        &self,
        ctx: &RequestContext,
        input: RemoveUserFromGroupInput,
    ) -> Result<RemoveUserFromGroupOutput, IamError> {
        let state = self.scope(ctx);
        let mut tables = state.tables.write();
        let gid = group_id(&tables, &input.group_name)?;
        let uid = user_id(&tables, &input.user_name)?;
        if !tables.memberships.remove(&gid, &uid) {
            return Err(IamError::no_such_entity(format!(
                "User {} not in group {}",
                input.user_name, input.group_name
            )));
        }
        info!(group = %input.group_name, user = %input.user_name, "removed user from group");
        Ok(RemoveUserFromGroupOutput {})
    }

    /// Handle `ListGroupsForUser`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_list_groups_for_user(
        &self,
        ctx: &RequestContext,
        input: ListGroupsForUserInput,
    ) -> Result<ListGroupsForUserOutput, IamError> {
        let state = self.scope(ctx);
        let tables = state.tables.read();
        let uid = user_id(&tables, &input.user_name)?;
        let groups = tables
            .groups_of(&uid)
            .into_iter()
            .map(GroupRecord::to_group)
            .collect();
        Ok(ListGroupsForUserOutput { groups })
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

impl MockStackIam {
    /// Handle `CreateUser`.
    pub fn handle_create_user(
        &self,
        ctx: &RequestContext,
        input: CreateUserInput,
    ) -> Result<CreateUserOutput, IamError> {
        validate_name("userName", &input.user_name)?;
        let path = validate_path("path", input.path.as_deref())?.to_owned();

        let record = UserRecord {
            user_id: iam_unique_id(USER_ID_PREFIX),
            arn: iam_arn(
                ctx.partition(),
                ctx.account_id.as_str(),
                USER_KIND,
                &path,
                &input.user_name,
            ),
            user_name: input.user_name,
            path,
            create_date: Utc::now(),
            password_last_used: None,
            tags: input.tags,
            inline_policies: ResourceTable::new(),
        };

        let state = self.scope(ctx);
        let mut tables = state.tables.write();
        let user = tables
            .users
            .insert(record)
            .map_err(store_error_to_iam)?
            .to_user();
        info!(user = %user.user_name, user_id = %user.user_id, "created user");
        Ok(CreateUserOutput { user })
    }

    /// Handle `GetUser`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_get_user(
        &self,
        ctx: &RequestContext,
        input: GetUserInput,
    ) -> Result<GetUserOutput, IamError> {
        let state = self.scope(ctx);
        let tables = state.tables.read();
        let user = tables
            .users
            .get_by_key(&input.user_name)
            .ok_or_else(|| IamError::user_not_found(&input.user_name))?
            .to_user();
        Ok(GetUserOutput { user })
    }

    /// Handle `ListUsers`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_list_users(
        &self,
        ctx: &RequestContext,
        input: ListUsersInput,
    ) -> Result<ListUsersOutput, IamError> {
        validate_path_prefix(input.path_prefix.as_deref())?;
        let prefix = input.path_prefix.as_deref().unwrap_or("/");
        let state = self.scope(ctx);
        let users = state
            .tables
            .read()
            .users
            .list()
            .filter(|u| u.path.starts_with(prefix))
            .map(UserRecord::to_user)
            .collect();
        Ok(ListUsersOutput { users })
    }

    /// Handle `UpdateUser`: rename and/or move a user, keeping its id.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_update_user(
        &self,
        ctx: &RequestContext,
        input: UpdateUserInput,
    ) -> Result<UpdateUserOutput, IamError> {
        if let Some(ref name) = input.new_user_name {
            validate_name("newUserName", name)?;
        }
        if input.new_path.is_some() {
            validate_path("newPath", input.new_path.as_deref())?;
        }

        let state = self.scope(ctx);
        let mut tables = state.tables.write();
        let id = user_id(&tables, &input.user_name)?;
        tables
            .users
            .update(&id, |user| {
                user.rename(
                    ctx.partition(),
                    ctx.account_id.as_str(),
                    input.new_user_name.as_deref(),
                    input.new_path.as_deref(),
                );
            })
            .map_err(store_error_to_iam)?;
        info!(user = %input.user_name, new_name = ?input.new_user_name, "updated user");
        Ok(UpdateUserOutput {})
    }

    /// Handle `DeleteUser`. Memberships, inline policies, and attachments go
    /// with the user.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_delete_user(
        &self,
        ctx: &RequestContext,
        input: DeleteUserInput,
    ) -> Result<DeleteUserOutput, IamError> {
        let state = self.scope(ctx);
        let mut tables = state.tables.write();
        let id = user_id(&tables, &input.user_name)?;
        tables.remove_user(&id);
        info!(user = %input.user_name, user_id = %id, "deleted user");
        Ok(DeleteUserOutput {})
    }

    /// Record a console sign-in for a user.
    ///
    /// There is no IAM action for this; it stands in for the user logging in
    /// with their password.
    pub fn record_password_use(
        &self,
        ctx: &RequestContext,
        user_name: &str,
        at: DateTime<Utc>,
    ) -> Result<(), IamError> {
        let state = self.scope(ctx);
        let mut tables = state.tables.write();
        let id = user_id(&tables, user_name)?;
        if let Some(user) = tables.users.get_mut(&id) {
            user.password_last_used = Some(at);
        }
        debug!(user = %user_name, %at, "recorded password use");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Inline policies
// ---------------------------------------------------------------------------

impl MockStackIam {
    /// Handle `PutGroupPolicy`. An existing policy with the same name is
    /// overwritten.
    pub fn handle_put_group_policy(
        &self,
        ctx: &RequestContext,
        input: PutGroupPolicyInput,
    ) -> Result<PutGroupPolicyOutput, IamError> {
        validate_name("policyName", &input.policy_name)?;
        let document = self.parse_document(&input.policy_document)?;

        let state = self.scope(ctx);
        let mut tables = state.tables.write();
        let gid = group_id(&tables, &input.group_name)?;
        if let Some(group) = tables.groups.get_mut(&gid) {
            put_inline_policy(&mut group.inline_policies, &input.policy_name, document)?;
        }
        info!(group = %input.group_name, policy = %input.policy_name, "put group policy");
        Ok(PutGroupPolicyOutput {})
    }

    /// Handle `GetGroupPolicy`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_get_group_policy(
        &self,
        ctx: &RequestContext,
        input: GetGroupPolicyInput,
    ) -> Result<GetGroupPolicyOutput, IamError> {
        let state = self.scope(ctx);
        let tables = state.tables.read();
        let group = tables
            .groups
            .get_by_key(&input.group_name)
            .ok_or_else(|| IamError::group_not_found(&input.group_name))?;
        let policy = group
            .inline_policies
            .get(&input.policy_name)
            .ok_or_else(|| IamError::inline_policy_not_found(&input.policy_name))?;
        Ok(GetGroupPolicyOutput {
            group_name: group.group_name.clone(),
            policy_name: policy.policy_name.clone(),
            policy_document: policy.document.clone(),
        })
    }

    /// Handle `DeleteGroupPolicy`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_delete_group_policy(
        &self,
        ctx: &RequestContext,
        input: DeleteGroupPolicyInput,
    ) -> Result<DeleteGroupPolicyOutput, IamError> {
        let state = self.scope(ctx);
        let mut tables = state.tables.write();
        let gid = group_id(&tables, &input.group_name)?;
        tables
            .groups
            .get_mut(&gid)
            .and_then(|group| group.inline_policies.remove(&input.policy_name).ok())
            .ok_or_else(|| IamError::inline_policy_not_found(&input.policy_name))?;
        info!(group = %input.group_name, policy = %input.policy_name, "deleted group policy");
        Ok(DeleteGroupPolicyOutput {})
    }

    /// Handle `ListGroupPolicies`. Names are returned in creation order.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_list_group_policies(
        &self,
        ctx: &RequestContext,
        input: ListGroupPoliciesInput,
    ) -> Result<ListGroupPoliciesOutput, IamError> {
        let state = self.scope(ctx);
        let tables = state.tables.read();
        let group = tables
            .groups
            .get_by_key(&input.group_name)
            .ok_or_else(|| IamError::group_not_found(&input.group_name))?;
        Ok(ListGroupPoliciesOutput {
            policy_names: inline_policy_names(&group.inline_policies),
        })
    }

    /// Handle `PutUserPolicy`. An existing policy with the same name is
    /// overwritten.
    pub fn handle_put_user_policy(
        &self,
        ctx: &RequestContext,
        input: PutUserPolicyInput,
    ) -> Result<PutUserPolicyOutput, IamError> {
        validate_name("policyName", &input.policy_name)?;
        let document = self.parse_document(&input.policy_document)?;

        let state = self.scope(ctx);
        let mut tables = state.tables.write();
        let uid = user_id(&tables, &input.user_name)?;
        if let Some(user) = tables.users.get_mut(&uid) {
            put_inline_policy(&mut user.inline_policies, &input.policy_name, document)?;
        }
        info!(user = %input.user_name, policy = %input.policy_name, "put user policy");
        Ok(PutUserPolicyOutput {})
    }

    /// Handle `GetUserPolicy`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_get_user_policy(
        &self,
        ctx: &RequestContext,
        input: GetUserPolicyInput,
    ) -> Result<GetUserPolicyOutput, IamError> {
        let state = self.scope(ctx);
        let tables = state.tables.read();
        let user = tables
            .users
            .get_by_key(&input.user_name)
            .ok_or_else(|| IamError::user_not_found(&input.user_name))?;
        let policy = user
            .inline_policies
            .get(&input.policy_name)
            .ok_or_else(|| IamError::inline_policy_not_found(&input.policy_name))?;
        Ok(GetUserPolicyOutput {
            user_name: user.user_name.clone(),
            policy_name: policy.policy_name.clone(),
            policy_document: policy.document.clone(),
        })
    }

    /// Handle `DeleteUserPolicy`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_delete_user_policy(
        &self,
        ctx: &RequestContext,
        input: DeleteUserPolicyInput,
    ) -> Result<DeleteUserPolicyOutput, IamError> {
        let state = self.scope(ctx);
        let mut tables = state.tables.write();
        let uid = user_id(&tables, &input.user_name)?;
        tables
            .users
            .get_mut(&uid)
            .and_then(|user| user.inline_policies.remove(&input.policy_name).ok())
            .ok_or_else(|| IamError::inline_policy_not_found(&input.policy_name))?;
        info!(user = %input.user_name, policy = %input.policy_name, "deleted user policy");
        Ok(DeleteUserPolicyOutput {})
    }

    /// Handle `ListUserPolicies`. Names are returned in creation order.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_list_user_policies(
        &self,
        ctx: &RequestContext,
        input: ListUserPoliciesInput,
    ) -> Result<ListUserPoliciesOutput, IamError> {
        let state = self.scope(ctx);
        let tables = state.tables.read();
        let user = tables
            .users
            .get_by_key(&input.user_name)
            .ok_or_else(|| IamError::user_not_found(&input.user_name))?;
        Ok(ListUserPoliciesOutput {
            policy_names: inline_policy_names(&user.inline_policies),
        })
    }
}

// ---------------------------------------------------------------------------
// Managed policies
// ---------------------------------------------------------------------------

impl MockStackIam {
    /// Handle `CreatePolicy`.
    pub fn handle_create_policy(
        &self,
        ctx: &RequestContext,
        input: CreatePolicyInput,
    ) -> Result<CreatePolicyOutput, IamError> {
        validate_name("policyName", &input.policy_name)?;
        let path = validate_path("path", input.path.as_deref())?.to_owned();
        let document = self.parse_document(&input.policy_document)?;

        let now = Utc::now();
        let record = ManagedPolicyRecord {
            arn: iam_arn(
                ctx.partition(),
                ctx.account_id.as_str(),
                POLICY_KIND,
                &path,
                &input.policy_name,
            ),
            policy_id: iam_unique_id(POLICY_ID_PREFIX),
            policy_name: input.policy_name,
            path,
            description: input.description,
            document,
            create_date: now,
            update_date: now,
        };

        let state = self.scope(ctx);
        let mut tables = state.tables.write();
        let policy = tables
            .policies
            .insert(record)
            .map_err(store_error_to_iam)?
            .to_policy(0);
        info!(policy_arn = %policy.arn, "created policy");
        Ok(CreatePolicyOutput { policy })
    }

    /// Handle `GetPolicy`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_get_policy(
        &self,
        ctx: &RequestContext,
        input: GetPolicyInput,
    ) -> Result<GetPolicyOutput, IamError> {
        validate_policy_arn(&input.policy_arn)?;
        let state = self.scope(ctx);
        let tables = state.tables.read();
        let record = tables
            .policies
            .require(&input.policy_arn)
            .map_err(store_error_to_iam)?;
        Ok(GetPolicyOutput {
            policy: record.to_policy(tables.attachment_count(&input.policy_arn)),
        })
    }

    /// Handle `GetPolicyVersion`. Every policy has exactly one version, `v1`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_get_policy_version(
        &self,
        ctx: &RequestContext,
        input: GetPolicyVersionInput,
    ) -> Result<GetPolicyVersionOutput, IamError> {
        validate_policy_arn(&input.policy_arn)?;
        let state = self.scope(ctx);
        let tables = state.tables.read();
        let record = tables
            .policies
            .require(&input.policy_arn)
            .map_err(store_error_to_iam)?;
        if input.version_id != DEFAULT_VERSION_ID {
            return Err(IamError::no_such_entity(format!(
                "Policy {} version {} does not exist.",
                input.policy_arn, input.version_id
            )));
        }
        Ok(GetPolicyVersionOutput {
            policy_version: record.to_default_version(),
        })
    }

    /// Handle `ListPolicies`. Lists customer-managed policies only.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_list_policies(
        &self,
        ctx: &RequestContext,
        input: ListPoliciesInput,
    ) -> Result<ListPoliciesOutput, IamError> {
        validate_path_prefix(input.path_prefix.as_deref())?;
        let prefix = input.path_prefix.as_deref().unwrap_or("/");
        let state = self.scope(ctx);
        let tables = state.tables.read();
        let policies = tables
            .policies
            .list()
            .filter(|p| p.path.starts_with(prefix))
            .map(|p| p.to_policy(tables.attachment_count(&p.arn)))
            .filter(|p| !input.only_attached || p.attachment_count > 0)
            .collect();
        Ok(ListPoliciesOutput { policies })
    }

    /// Handle `DeletePolicy`. Fails while the policy is attached anywhere.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_delete_policy(
        &self,
        ctx: &RequestContext,
        input: DeletePolicyInput,
    ) -> Result<DeletePolicyOutput, IamError> {
        validate_policy_arn(&input.policy_arn)?;
        let state = self.scope(ctx);
        let mut tables = state.tables.write();
        tables
            .policies
            .require(&input.policy_arn)
            .map_err(store_error_to_iam)?;
        if tables.attachment_count(&input.policy_arn) > 0 {
            return Err(IamError::delete_conflict(
                "Cannot delete a policy attached to entities.",
            ));
        }
        tables
            .policies
            .remove(&input.policy_arn)
            .map_err(store_error_to_iam)?;
        info!(policy_arn = %input.policy_arn, "deleted policy");
        Ok(DeletePolicyOutput {})
    }
}

// ---------------------------------------------------------------------------
// Attachments
// ---------------------------------------------------------------------------

impl MockStackIam {
    /// Handle `AttachGroupPolicy`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_attach_group_policy(
        &self,
        ctx: &RequestContext,
        input: AttachGroupPolicyInput,
    ) -> Result<AttachGroupPolicyOutput, IamError> {
        let aws_managed = validate_policy_arn(&input.policy_arn)?.is_aws_managed();
        let state = self.scope(ctx);
        let mut tables = state.tables.write();
        let gid = group_id(&tables, &input.group_name)?;
        if attach_policy(&mut tables, &gid, &input.policy_arn, aws_managed)? {
            info!(group = %input.group_name, policy_arn = %input.policy_arn, "attached group policy");
        } else {
            debug!(group = %input.group_name, policy_arn = %input.policy_arn, "policy already attached");
        }
        Ok(AttachGroupPolicyOutput {})
    }

    /// Handle `DetachGroupPolicy`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_detach_group_policy(
        &self,
        ctx: &RequestContext,
        input: DetachGroupPolicyInput,
    ) -> Result<DetachGroupPolicyOutput, IamError> {
        validate_policy_arn(&input.policy_arn)?;
        let state = self.scope(ctx);
        let mut tables = state.tables.write();
        let gid = group_id(&tables, &input.group_name)?;
        detach_policy(&mut tables, &gid, &input.policy_arn)?;
        info!(group = %input.group_name, policy_arn = %input.policy_arn, "detached group policy");
        Ok(DetachGroupPolicyOutput {})
    }

    /// Handle `ListAttachedGroupPolicies`. Policies are listed in attachment
    /// order.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_list_attached_group_policies(
        &self,
        ctx: &RequestContext,
        input: ListAttachedGroupPoliciesInput,
    ) -> Result<ListAttachedGroupPoliciesOutput, IamError> {
        let state = self.scope(ctx);
        let tables = state.tables.read();
        let gid = group_id(&tables, &input.group_name)?;
        Ok(ListAttachedGroupPoliciesOutput {
            attached_policies: tables.attached_policies(&gid),
        })
    }

    /// Handle `AttachUserPolicy`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_attach_user_policy(
        &self,
        ctx: &RequestContext,
        input: AttachUserPolicyInput,
    ) -> Result<AttachUserPolicyOutput, IamError> {
        let aws_managed = validate_policy_arn(&input.policy_arn)?.is_aws_managed();
        let state = self.scope(ctx);
        let mut tables = state.tables.write();
        let uid = user_id(&tables, &input.user_name)?;
        if attach_policy(&mut tables, &uid, &input.policy_arn, aws_managed)? {
            info!(user = %input.user_name, policy_arn = %input.policy_arn, "attached user policy");
        } else {
            debug!(user = %input.user_name, policy_arn = %input.policy_arn, "policy already attached");
        }
        Ok(AttachUserPolicyOutput {})
    }

    /// Handle `DetachUserPolicy`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_detach_user_policy(
        &self,
        ctx: &RequestContext,
        input: DetachUserPolicyInput,
    ) -> Result<DetachUserPolicyOutput, IamError> {
        validate_policy_arn(&input.policy_arn)?;
        let state = self.scope(ctx);
        let mut tables = state.tables.write();
        let uid = user_id(&tables, &input.user_name)?;
        detach_policy(&mut tables, &uid, &input.policy_arn)?;
        info!(user = %input.user_name, policy_arn = %input.policy_arn, "detached user policy");
        Ok(DetachUserPolicyOutput {})
    }

    /// Handle `ListAttachedUserPolicies`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_list_attached_user_policies(
        &self,
        ctx: &RequestContext,
        input: ListAttachedUserPoliciesInput,
    ) -> Result<ListAttachedUserPoliciesOutput, IamError> {
        let state = self.scope(ctx);
        let tables = state.tables.read();
        let uid = user_id(&tables, &input.user_name)?;
        Ok(ListAttachedUserPoliciesOutput {
            attached_policies: tables.attached_policies(&uid),
        })
    }
}
