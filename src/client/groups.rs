use crate::{
    client::{escape, path_segment, Attachment, Client, Identifier, ListOptions, Response, Result},
    AccessLevel, Date, DateTime, Group, GroupPushRules, LdapGroupLink, Project,
    ProjectCreationLevel, SamlGroupLink, SharedRunnersSetting, SubGroupCreationLevel, User,
    Visibility,
};
use reqwest::Method;
use serde::Serialize;

/// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#list-groups
#[derive(Clone, Debug, Default, Serialize)]
pub struct ListGroupsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_groups: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// One of name, path, id or similarity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_custom_attributes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_access_level: Option<AccessLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_level_only: Option<bool>,

    #[serde(flatten)]
    pub list_options: ListOptions,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#list-a-groups-projects
#[derive(Clone, Debug, Default, Serialize)]
pub struct ListGroupProjectsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simple: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_issues_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_merge_requests_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_shared: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_subgroups: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_access_level: Option<AccessLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_custom_attributes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_security_reports: Option<bool>,

    #[serde(flatten)]
    pub list_options: ListOptions,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct GetGroupOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_custom_attributes: Option<bool>,
    /// Include the group's projects. Defaults to true on the GitLab side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_projects: Option<bool>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#new-group
#[derive(Clone, Debug, Default, Serialize)]
pub struct CreateGroupOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Uploaded as a multipart form when set
    #[serde(skip)]
    pub avatar: Option<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_lock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_with_group_lock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_two_factor_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_factor_grace_period: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_creation_level: Option<ProjectCreationLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_devops_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subgroup_creation_level: Option<SubGroupCreationLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lfs_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_access_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch_protection: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_runners_minutes_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_shared_runners_minutes_limit: Option<u64>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#update-group
#[derive(Clone, Debug, Default, Serialize)]
pub struct UpdateGroupOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Uploaded as a multipart form when set
    #[serde(skip)]
    pub avatar: Option<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_lock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_with_group_lock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_two_factor_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_factor_grace_period: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_creation_level: Option<ProjectCreationLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_devops_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subgroup_creation_level: Option<SubGroupCreationLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lfs_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_access_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch_protection: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_template_project_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_runners_minutes_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_shared_runners_minutes_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_runners_setting: Option<SharedRunnersSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent_sharing_groups_outside_hierarchy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent_forking_outside_group: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_restriction_ranges: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct TransferSubGroupOptions {
    /// The new parent group. Leave unset to turn the subgroup into a
    /// top-level group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#remove-group
#[derive(Clone, Debug, Default, Serialize)]
pub struct DeleteGroupOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permanently_remove: Option<bool>,
    /// Must match the group's full path when `permanently_remove` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_path: Option<String>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#list-provisioned-users
#[derive(Clone, Debug, Default, Serialize)]
pub struct ListProvisionedUsersOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_after: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_before: Option<DateTime>,

    #[serde(flatten)]
    pub list_options: ListOptions,
}

/// Either `cn` or `filter` must be set, but not both.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#add-ldap-group-link-with-cn-or-filter
#[derive(Clone, Debug, Default, Serialize)]
pub struct AddGroupLdapLinkOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_access: Option<AccessLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#delete-ldap-group-link-with-cn-or-filter
#[derive(Clone, Debug, Default, Serialize)]
pub struct DeleteGroupLdapLinkOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#add-saml-group-link
#[derive(Clone, Debug, Default, Serialize)]
pub struct AddGroupSamlLinkOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saml_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_level: Option<AccessLevel>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#share-groups-with-groups
#[derive(Clone, Debug, Default, Serialize)]
pub struct ShareGroupWithGroupOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_access: Option<AccessLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Date>,
}

/// Used both to add and to edit group push rules.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#add-group-push-rule
#[derive(Clone, Debug, Default, Serialize)]
pub struct GroupPushRuleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email_regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_name_regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_committer_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_message_negative_regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_message_regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deny_delete_tag: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name_regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent_secrets: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_unsigned_commits: Option<bool>,
}

/// `GroupsClient` handles communication with the group related methods of the GitLab API.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html
pub struct GroupsClient<'a> {
    inner: &'a Client,
}

impl<'a> GroupsClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#list-groups
    pub async fn list(&self, options: Option<ListGroupsOptions>) -> Result<Response<Vec<Group>>> {
        let response = self.inner.get_with("groups", &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#list-a-groups-subgroups
    pub async fn list_subgroups<I: Into<Identifier>>(
        &self,
        group: I,
        options: Option<ListGroupsOptions>,
    ) -> Result<Response<Vec<Group>>> {
        let url = format!("groups/{}/subgroups", path_segment(group)?);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#list-a-groups-descendant-groups
    pub async fn list_descendant_groups<I: Into<Identifier>>(
        &self,
        group: I,
        options: Option<ListGroupsOptions>,
    ) -> Result<Response<Vec<Group>>> {
        let url = format!("groups/{}/descendant_groups", path_segment(group)?);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#list-a-groups-projects
    pub async fn list_projects<I: Into<Identifier>>(
        &self,
        group: I,
        options: Option<ListGroupProjectsOptions>,
    ) -> Result<Response<Vec<Project>>> {
        let url = format!("groups/{}/projects", path_segment(group)?);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#details-of-a-group
    pub async fn get<I: Into<Identifier>>(
        &self,
        group: I,
        options: Option<GetGroupOptions>,
    ) -> Result<Response<Group>> {
        let url = format!("groups/{}", path_segment(group)?);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// The raw bytes of the group's avatar image
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#download-a-group-avatar
    pub async fn download_avatar<I: Into<Identifier>>(&self, group: I) -> Result<Response<Vec<u8>>> {
        let url = format!("groups/{}/avatar", path_segment(group)?);
        let response = self.inner.get(&url).send().await?;

        self.inner.bytes(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#new-group
    pub async fn create(&self, options: &CreateGroupOptions) -> Result<Response<Group>> {
        let request = match &options.avatar {
            Some(avatar) if !avatar.is_empty() => {
                self.inner
                    .multipart(Method::POST, "groups", "avatar", avatar, options)?
            }
            _ => self.inner.post_with("groups", options)?,
        };
        let response = request.send().await?;

        self.inner.json(response).await
    }

    /// Move a project into this group. Available only to instance admins.
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#transfer-project-to-group
    pub async fn transfer_project<G: Into<Identifier>, P: Into<Identifier>>(
        &self,
        group: G,
        project: P,
    ) -> Result<Response<Group>> {
        let url = format!(
            "groups/{}/projects/{}",
            path_segment(group)?,
            path_segment(project)?
        );
        let response = self.inner.post(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#transfer-a-group
    pub async fn transfer_subgroup<I: Into<Identifier>>(
        &self,
        group: I,
        options: &TransferSubGroupOptions,
    ) -> Result<Response<Group>> {
        let url = format!("groups/{}/transfer", path_segment(group)?);
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#update-group
    pub async fn update<I: Into<Identifier>>(
        &self,
        group: I,
        options: &UpdateGroupOptions,
    ) -> Result<Response<Group>> {
        let url = format!("groups/{}", path_segment(group)?);
        let request = match &options.avatar {
            Some(avatar) if !avatar.is_empty() => {
                self.inner
                    .multipart(Method::PUT, &url, "avatar", avatar, options)?
            }
            _ => self.inner.put_with(&url, options)?,
        };
        let response = request.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#upload-a-group-avatar
    pub async fn upload_avatar<I: Into<Identifier>>(
        &self,
        group: I,
        avatar: &Attachment,
    ) -> Result<Response<Group>> {
        let url = format!("groups/{}", path_segment(group)?);
        let response = self
            .inner
            .multipart(Method::PUT, &url, "avatar", avatar, &())?
            .send()
            .await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#remove-group
    pub async fn delete<I: Into<Identifier>>(
        &self,
        group: I,
        options: Option<DeleteGroupOptions>,
    ) -> Result<Response<()>> {
        let url = format!("groups/{}", path_segment(group)?);
        let response = self.inner.delete_with(&url, &options)?.send().await?;

        self.inner.empty(response).await
    }

    /// Restore a group marked for deletion
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#restore-group-marked-for-deletion
    pub async fn restore<I: Into<Identifier>>(&self, group: I) -> Result<Response<Group>> {
        let url = format!("groups/{}/restore", path_segment(group)?);
        let response = self.inner.post(&url).send().await?;

        self.inner.json(response).await
    }

    /// Search for groups by name or path
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#search-for-group
    pub async fn search(&self, query: &str) -> Result<Response<Vec<Group>>> {
        let response = self
            .inner
            .get("groups")
            .query(&[("search", query)])
            .send()
            .await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#list-provisioned-users
    pub async fn list_provisioned_users<I: Into<Identifier>>(
        &self,
        group: I,
        options: Option<ListProvisionedUsersOptions>,
    ) -> Result<Response<Vec<User>>> {
        let url = format!("groups/{}/provisioned_users", path_segment(group)?);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#list-ldap-group-links
    pub async fn list_ldap_links<I: Into<Identifier>>(
        &self,
        group: I,
    ) -> Result<Response<Vec<LdapGroupLink>>> {
        let url = format!("groups/{}/ldap_group_links", path_segment(group)?);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#add-ldap-group-link-with-cn-or-filter
    pub async fn add_ldap_link<I: Into<Identifier>>(
        &self,
        group: I,
        options: &AddGroupLdapLinkOptions,
    ) -> Result<Response<LdapGroupLink>> {
        let url = format!("groups/{}/ldap_group_links", path_segment(group)?);
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#delete-ldap-group-link
    pub async fn delete_ldap_link<I: Into<Identifier>>(
        &self,
        group: I,
        cn: &str,
    ) -> Result<Response<()>> {
        let url = format!(
            "groups/{}/ldap_group_links/{}",
            path_segment(group)?,
            escape(cn)?
        );
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#delete-ldap-group-link-with-cn-or-filter
    pub async fn delete_ldap_link_with_cn_or_filter<I: Into<Identifier>>(
        &self,
        group: I,
        options: &DeleteGroupLdapLinkOptions,
    ) -> Result<Response<()>> {
        let url = format!("groups/{}/ldap_group_links", path_segment(group)?);
        let response = self.inner.delete_with(&url, options)?.send().await?;

        self.inner.empty(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#delete-ldap-group-link
    pub async fn delete_ldap_link_for_provider<I: Into<Identifier>>(
        &self,
        group: I,
        provider: &str,
        cn: &str,
    ) -> Result<Response<()>> {
        let url = format!(
            "groups/{}/ldap_group_links/{}/{}",
            path_segment(group)?,
            escape(provider)?,
            escape(cn)?
        );
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#list-saml-group-links
    pub async fn list_saml_links<I: Into<Identifier>>(
        &self,
        group: I,
    ) -> Result<Response<Vec<SamlGroupLink>>> {
        let url = format!("groups/{}/saml_group_links", path_segment(group)?);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#get-saml-group-link
    pub async fn get_saml_link<I: Into<Identifier>>(
        &self,
        group: I,
        saml_group_name: &str,
    ) -> Result<Response<SamlGroupLink>> {
        let url = format!(
            "groups/{}/saml_group_links/{}",
            path_segment(group)?,
            escape(saml_group_name)?
        );
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#add-saml-group-link
    pub async fn add_saml_link<I: Into<Identifier>>(
        &self,
        group: I,
        options: &AddGroupSamlLinkOptions,
    ) -> Result<Response<SamlGroupLink>> {
        let url = format!("groups/{}/saml_group_links", path_segment(group)?);
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#delete-saml-group-link
    pub async fn delete_saml_link<I: Into<Identifier>>(
        &self,
        group: I,
        saml_group_name: &str,
    ) -> Result<Response<()>> {
        let url = format!(
            "groups/{}/saml_group_links/{}",
            path_segment(group)?,
            escape(saml_group_name)?
        );
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#create-a-link-to-share-a-group-with-another-group
    pub async fn share_with_group<I: Into<Identifier>>(
        &self,
        group: I,
        options: &ShareGroupWithGroupOptions,
    ) -> Result<Response<Group>> {
        let url = format!("groups/{}/share", path_segment(group)?);
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#delete-link-sharing-group-with-another-group
    pub async fn unshare<I: Into<Identifier>>(
        &self,
        group: I,
        shared_with: u64,
    ) -> Result<Response<()>> {
        let url = format!("groups/{}/share/{}", path_segment(group)?, shared_with);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#get-group-push-rules
    pub async fn get_push_rules<I: Into<Identifier>>(
        &self,
        group: I,
    ) -> Result<Response<GroupPushRules>> {
        let url = format!("groups/{}/push_rule", path_segment(group)?);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#add-group-push-rule
    pub async fn add_push_rule<I: Into<Identifier>>(
        &self,
        group: I,
        options: &GroupPushRuleOptions,
    ) -> Result<Response<GroupPushRules>> {
        let url = format!("groups/{}/push_rule", path_segment(group)?);
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#edit-group-push-rule
    pub async fn edit_push_rule<I: Into<Identifier>>(
        &self,
        group: I,
        options: &GroupPushRuleOptions,
    ) -> Result<Response<GroupPushRules>> {
        let url = format!("groups/{}/push_rule", path_segment(group)?);
        let response = self.inner.put_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#delete-group-push-rule
    pub async fn delete_push_rule<I: Into<Identifier>>(&self, group: I) -> Result<Response<()>> {
        let url = format!("groups/{}/push_rule", path_segment(group)?);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }
}
