use crate::{
    client::{path_segment, Attachment, Client, Identifier, ListOptions, Response, Result},
    AccessControl, AccessLevel, Date, DateTime, MergeMethod, Project, ProjectApprovalRule,
    ProjectApprovals, ProjectFile, ProjectForkRelation, ProjectGroup, ProjectHook,
    ProjectLanguages, ProjectPullMirrorDetails, ProjectPushRules, ProjectRepositoryStorage,
    ProjectUser, SquashOption, Visibility,
};
use reqwest::Method;
use serde::Serialize;

/// Filters shared by every endpoint returning a list of projects.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#list-all-projects
#[derive(Clone, Debug, Default, Serialize)]
pub struct ListProjectsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_after: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_before: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imported: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity_after: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity_before: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_access_level: Option<AccessLevel>,
    /// One of id, name, path, created_at, updated_at or last_activity_at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_checksum_failed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_storage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_namespaces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simple: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiki_checksum_failed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_custom_attributes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_issues_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_merge_requests_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_programming_language: Option<String>,

    #[serde(flatten)]
    pub list_options: ListOptions,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ListProjectUsersOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(flatten)]
    pub list_options: ListOptions,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#list-a-projects-groups
#[derive(Clone, Debug, Default, Serialize)]
pub struct ListProjectGroupsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_min_access_level: Option<AccessLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_visible_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_groups: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_shared: Option<bool>,

    #[serde(flatten)]
    pub list_options: ListOptions,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct GetProjectOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_custom_attributes: Option<bool>,
}

/// Attributes of a new project. Either `name` or `path` is required.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#create-project
#[derive(Clone, Debug, Default, Serialize)]
pub struct CreateProjectOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Uploaded as a multipart form when set
    #[serde(skip)]
    pub avatar: Option<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initialize_with_readme: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_project_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_custom_template: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues_access_level: Option<AccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_access_level: Option<AccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_requests_access_level: Option<AccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builds_access_level: Option<AccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiki_access_level: Option<AccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippets_access_level: Option<AccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages_access_level: Option<AccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_registry_access_level: Option<AccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_method: Option<MergeMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squash_option: Option<SquashOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_allow_merge_if_pipeline_succeeds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_allow_merge_if_all_discussions_are_resolved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_source_branch_after_merge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_outdated_diff_discussions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_runners_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lfs_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_access_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci_config_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_timeout: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_devops_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirror: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approvals_before_merge: Option<u64>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#edit-project
#[derive(Clone, Debug, Default, Serialize)]
pub struct EditProjectOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Uploaded as a multipart form when set
    #[serde(skip)]
    pub avatar: Option<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues_access_level: Option<AccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_access_level: Option<AccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_requests_access_level: Option<AccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builds_access_level: Option<AccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiki_access_level: Option<AccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippets_access_level: Option<AccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages_access_level: Option<AccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_registry_access_level: Option<AccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_method: Option<MergeMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squash_option: Option<SquashOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_allow_merge_if_pipeline_succeeds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_allow_merge_if_all_discussions_are_resolved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_source_branch_after_merge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_outdated_diff_discussions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_runners_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lfs_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_access_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci_config_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci_forward_deployment_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_timeout: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_devops_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirror: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirror_trigger_builds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approvals_before_merge: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_latest_artifact: Option<bool>,
    #[serde(
        rename = "mr_default_target_self",
        skip_serializing_if = "Option::is_none"
    )]
    pub merge_request_default_target_self: Option<bool>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#fork-project
#[derive(Clone, Debug, Default, Serialize)]
pub struct ForkProjectOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "mr_default_target_self",
        skip_serializing_if = "Option::is_none"
    )]
    pub merge_request_default_target_self: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#share-project-with-group
#[derive(Clone, Debug, Default, Serialize)]
pub struct ShareProjectWithGroupOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_access: Option<AccessLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Date>,
}

/// Used both to add and to edit project hooks.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#add-project-hook
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProjectHookOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Sent back to the hook receiver in the `X-Gitlab-Token` header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_events_branch_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidential_issues_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_requests_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_push_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidential_note_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiki_page_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub releases_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_ssl_verification: Option<bool>,
}

/// Used both to add and to edit project push rules.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#add-project-push-rule
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProjectPushRuleOptions {
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

/// GitLab API docs: https://docs.gitlab.com/ee/api/merge_request_approvals.html#change-configuration
#[derive(Clone, Debug, Default, Serialize)]
pub struct ChangeApprovalConfigurationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approvals_before_merge: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_overriding_approvers_per_merge_request: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_requests_author_approval: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_requests_disable_committers_approval: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_password_to_approve: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_approvals_on_push: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective_code_owner_removals: Option<bool>,
}

/// Used both to create and to update project approval rules.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/merge_request_approvals.html#create-project-level-rule
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProjectApprovalRuleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approvals_required: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected_branch_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usernames: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to_all_protected_branches: Option<bool>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/merge_request_approvals.html#change-allowed-approvers
#[derive(Clone, Debug, Default, Serialize)]
pub struct ChangeAllowedApproversOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_group_ids: Option<Vec<u64>>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#transfer-a-project-to-a-new-namespace
#[derive(Clone, Debug, Default, Serialize)]
pub struct TransferProjectOptions {
    /// ID or path of the target namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// `ProjectsClient` handles communication with the project related methods of the GitLab API.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html
pub struct ProjectsClient<'a> {
    inner: &'a Client,
}

impl<'a> ProjectsClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#list-all-projects
    pub async fn list(
        &self,
        options: Option<ListProjectsOptions>,
    ) -> Result<Response<Vec<Project>>> {
        let response = self.inner.get_with("projects", &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#list-user-projects
    pub async fn list_user_projects<I: Into<Identifier>>(
        &self,
        user: I,
        options: Option<ListProjectsOptions>,
    ) -> Result<Response<Vec<Project>>> {
        let url = format!("users/{}/projects", path_segment(user)?);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#list-projects-starred-by-a-user
    pub async fn list_user_starred<I: Into<Identifier>>(
        &self,
        user: I,
        options: Option<ListProjectsOptions>,
    ) -> Result<Response<Vec<Project>>> {
        let url = format!("users/{}/starred_projects", path_segment(user)?);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#get-project-users
    pub async fn list_users<I: Into<Identifier>>(
        &self,
        project: I,
        options: Option<ListProjectUsersOptions>,
    ) -> Result<Response<Vec<ProjectUser>>> {
        let url = format!("projects/{}/users", path_segment(project)?);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#list-a-projects-groups
    pub async fn list_groups<I: Into<Identifier>>(
        &self,
        project: I,
        options: Option<ListProjectGroupsOptions>,
    ) -> Result<Response<Vec<ProjectGroup>>> {
        let url = format!("projects/{}/groups", path_segment(project)?);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#languages
    pub async fn languages<I: Into<Identifier>>(
        &self,
        project: I,
    ) -> Result<Response<ProjectLanguages>> {
        let url = format!("projects/{}/languages", path_segment(project)?);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#get-single-project
    pub async fn get<I: Into<Identifier>>(
        &self,
        project: I,
        options: Option<GetProjectOptions>,
    ) -> Result<Response<Project>> {
        let url = format!("projects/{}", path_segment(project)?);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#create-project
    pub async fn create(&self, options: &CreateProjectOptions) -> Result<Response<Project>> {
        let request = match &options.avatar {
            Some(avatar) if !avatar.is_empty() => {
                self.inner
                    .multipart(Method::POST, "projects", "avatar", avatar, options)?
            }
            _ => self.inner.post_with("projects", options)?,
        };
        let response = request.send().await?;

        self.inner.json(response).await
    }

    /// Create a project owned by another user. Available only for admins.
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#create-project-for-user
    pub async fn create_for_user(
        &self,
        user: u64,
        options: &CreateProjectOptions,
    ) -> Result<Response<Project>> {
        let url = format!("projects/user/{}", user);
        let request = match &options.avatar {
            Some(avatar) if !avatar.is_empty() => {
                self.inner
                    .multipart(Method::POST, &url, "avatar", avatar, options)?
            }
            _ => self.inner.post_with(&url, options)?,
        };
        let response = request.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#edit-project
    pub async fn edit<I: Into<Identifier>>(
        &self,
        project: I,
        options: &EditProjectOptions,
    ) -> Result<Response<Project>> {
        let url = format!("projects/{}", path_segment(project)?);
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

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#fork-project
    pub async fn fork<I: Into<Identifier>>(
        &self,
        project: I,
        options: &ForkProjectOptions,
    ) -> Result<Response<Project>> {
        let url = format!("projects/{}/fork", path_segment(project)?);
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// Starring an already starred project answers `304 Not Modified`,
    /// which is returned as `None`.
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#star-a-project
    pub async fn star<I: Into<Identifier>>(&self, project: I) -> Result<Response<Option<Project>>> {
        let url = format!("projects/{}/star", path_segment(project)?);
        let response = self.inner.post(&url).send().await?;

        self.inner.json_unless_not_modified(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#unstar-a-project
    pub async fn unstar<I: Into<Identifier>>(
        &self,
        project: I,
    ) -> Result<Response<Option<Project>>> {
        let url = format!("projects/{}/unstar", path_segment(project)?);
        let response = self.inner.post(&url).send().await?;

        self.inner.json_unless_not_modified(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#archive-a-project
    pub async fn archive<I: Into<Identifier>>(&self, project: I) -> Result<Response<Project>> {
        let url = format!("projects/{}/archive", path_segment(project)?);
        let response = self.inner.post(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#unarchive-a-project
    pub async fn unarchive<I: Into<Identifier>>(&self, project: I) -> Result<Response<Project>> {
        let url = format!("projects/{}/unarchive", path_segment(project)?);
        let response = self.inner.post(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#delete-project
    pub async fn delete<I: Into<Identifier>>(&self, project: I) -> Result<Response<()>> {
        let url = format!("projects/{}", path_segment(project)?);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#share-project-with-group
    pub async fn share_with_group<I: Into<Identifier>>(
        &self,
        project: I,
        options: &ShareProjectWithGroupOptions,
    ) -> Result<Response<()>> {
        let url = format!("projects/{}/share", path_segment(project)?);
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.empty(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#delete-a-shared-project-link-within-a-group
    pub async fn delete_shared_group<I: Into<Identifier>>(
        &self,
        project: I,
        group: u64,
    ) -> Result<Response<()>> {
        let url = format!("projects/{}/share/{}", path_segment(project)?, group);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#list-project-hooks
    pub async fn list_hooks<I: Into<Identifier>>(
        &self,
        project: I,
        options: Option<ListOptions>,
    ) -> Result<Response<Vec<ProjectHook>>> {
        let url = format!("projects/{}/hooks", path_segment(project)?);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#get-project-hook
    pub async fn get_hook<I: Into<Identifier>>(
        &self,
        project: I,
        hook: u64,
    ) -> Result<Response<ProjectHook>> {
        let url = format!("projects/{}/hooks/{}", path_segment(project)?, hook);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#add-project-hook
    pub async fn add_hook<I: Into<Identifier>>(
        &self,
        project: I,
        options: &ProjectHookOptions,
    ) -> Result<Response<ProjectHook>> {
        let url = format!("projects/{}/hooks", path_segment(project)?);
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#edit-project-hook
    pub async fn edit_hook<I: Into<Identifier>>(
        &self,
        project: I,
        hook: u64,
        options: &ProjectHookOptions,
    ) -> Result<Response<ProjectHook>> {
        let url = format!("projects/{}/hooks/{}", path_segment(project)?, hook);
        let response = self.inner.put_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#delete-project-hook
    pub async fn delete_hook<I: Into<Identifier>>(
        &self,
        project: I,
        hook: u64,
    ) -> Result<Response<()>> {
        let url = format!("projects/{}/hooks/{}", path_segment(project)?, hook);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// Mark `project` as a fork of `forked_from`. Available only for admins
    /// and project owners.
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#create-a-forked-fromto-relation-between-existing-projects
    pub async fn create_fork_relation<I: Into<Identifier>>(
        &self,
        project: I,
        forked_from: u64,
    ) -> Result<Response<ProjectForkRelation>> {
        let url = format!("projects/{}/fork/{}", path_segment(project)?, forked_from);
        let response = self.inner.post(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#delete-an-existing-forked-from-relationship
    pub async fn delete_fork_relation<I: Into<Identifier>>(
        &self,
        project: I,
    ) -> Result<Response<()>> {
        let url = format!("projects/{}/fork", path_segment(project)?);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#list-forks-of-a-project
    pub async fn list_forks<I: Into<Identifier>>(
        &self,
        project: I,
        options: Option<ListProjectsOptions>,
    ) -> Result<Response<Vec<Project>>> {
        let url = format!("projects/{}/forks", path_segment(project)?);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// Upload a file to reference from issues, merge requests or comments
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#upload-a-file
    pub async fn upload_file<I: Into<Identifier>>(
        &self,
        project: I,
        file: &Attachment,
    ) -> Result<Response<ProjectFile>> {
        let url = format!("projects/{}/uploads", path_segment(project)?);
        let response = self
            .inner
            .multipart(Method::POST, &url, "file", file, &())?
            .send()
            .await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#upload-a-project-avatar
    pub async fn upload_avatar<I: Into<Identifier>>(
        &self,
        project: I,
        avatar: &Attachment,
    ) -> Result<Response<Project>> {
        let url = format!("projects/{}", path_segment(project)?);
        let response = self
            .inner
            .multipart(Method::PUT, &url, "avatar", avatar, &())?
            .send()
            .await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#get-project-push-rules
    pub async fn get_push_rules<I: Into<Identifier>>(
        &self,
        project: I,
    ) -> Result<Response<ProjectPushRules>> {
        let url = format!("projects/{}/push_rule", path_segment(project)?);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#add-project-push-rule
    pub async fn add_push_rule<I: Into<Identifier>>(
        &self,
        project: I,
        options: &ProjectPushRuleOptions,
    ) -> Result<Response<ProjectPushRules>> {
        let url = format!("projects/{}/push_rule", path_segment(project)?);
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#edit-project-push-rule
    pub async fn edit_push_rule<I: Into<Identifier>>(
        &self,
        project: I,
        options: &ProjectPushRuleOptions,
    ) -> Result<Response<ProjectPushRules>> {
        let url = format!("projects/{}/push_rule", path_segment(project)?);
        let response = self.inner.put_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#delete-project-push-rule
    pub async fn delete_push_rule<I: Into<Identifier>>(&self, project: I) -> Result<Response<()>> {
        let url = format!("projects/{}/push_rule", path_segment(project)?);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_request_approvals.html#get-configuration
    pub async fn approval_configuration<I: Into<Identifier>>(
        &self,
        project: I,
    ) -> Result<Response<ProjectApprovals>> {
        let url = format!("projects/{}/approvals", path_segment(project)?);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_request_approvals.html#change-configuration
    pub async fn change_approval_configuration<I: Into<Identifier>>(
        &self,
        project: I,
        options: &ChangeApprovalConfigurationOptions,
    ) -> Result<Response<ProjectApprovals>> {
        let url = format!("projects/{}/approvals", path_segment(project)?);
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_request_approvals.html#get-project-level-rules
    pub async fn list_approval_rules<I: Into<Identifier>>(
        &self,
        project: I,
        options: Option<ListOptions>,
    ) -> Result<Response<Vec<ProjectApprovalRule>>> {
        let url = format!("projects/{}/approval_rules", path_segment(project)?);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_request_approvals.html#get-a-single-project-level-rule
    pub async fn get_approval_rule<I: Into<Identifier>>(
        &self,
        project: I,
        rule: u64,
    ) -> Result<Response<ProjectApprovalRule>> {
        let url = format!("projects/{}/approval_rules/{}", path_segment(project)?, rule);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_request_approvals.html#create-project-level-rule
    pub async fn create_approval_rule<I: Into<Identifier>>(
        &self,
        project: I,
        options: &ProjectApprovalRuleOptions,
    ) -> Result<Response<ProjectApprovalRule>> {
        let url = format!("projects/{}/approval_rules", path_segment(project)?);
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_request_approvals.html#update-project-level-rule
    pub async fn update_approval_rule<I: Into<Identifier>>(
        &self,
        project: I,
        rule: u64,
        options: &ProjectApprovalRuleOptions,
    ) -> Result<Response<ProjectApprovalRule>> {
        let url = format!("projects/{}/approval_rules/{}", path_segment(project)?, rule);
        let response = self.inner.put_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_request_approvals.html#delete-project-level-rule
    pub async fn delete_approval_rule<I: Into<Identifier>>(
        &self,
        project: I,
        rule: u64,
    ) -> Result<Response<()>> {
        let url = format!("projects/{}/approval_rules/{}", path_segment(project)?, rule);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_request_approvals.html#change-allowed-approvers
    pub async fn change_allowed_approvers<I: Into<Identifier>>(
        &self,
        project: I,
        options: &ChangeAllowedApproversOptions,
    ) -> Result<Response<ProjectApprovals>> {
        let url = format!("projects/{}/approvers", path_segment(project)?);
        let response = self.inner.put_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#get-a-projects-pull-mirror-details
    pub async fn pull_mirror_details<I: Into<Identifier>>(
        &self,
        project: I,
    ) -> Result<Response<ProjectPullMirrorDetails>> {
        let url = format!("projects/{}/mirror/pull", path_segment(project)?);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// Trigger a pull mirror update
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#start-the-pull-mirroring-process-for-a-project
    pub async fn start_mirroring<I: Into<Identifier>>(&self, project: I) -> Result<Response<()>> {
        let url = format!("projects/{}/mirror/pull", path_segment(project)?);
        let response = self.inner.post(&url).send().await?;

        self.inner.empty(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#transfer-a-project-to-a-new-namespace
    pub async fn transfer<I: Into<Identifier>>(
        &self,
        project: I,
        options: &TransferProjectOptions,
    ) -> Result<Response<Project>> {
        let url = format!("projects/{}/transfer", path_segment(project)?);
        let response = self.inner.put_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#start-the-housekeeping-task-for-a-project
    pub async fn start_housekeeping<I: Into<Identifier>>(
        &self,
        project: I,
    ) -> Result<Response<()>> {
        let url = format!("projects/{}/housekeeping", path_segment(project)?);
        let response = self.inner.post(&url).send().await?;

        self.inner.empty(response).await
    }

    /// Available only for admins.
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#get-the-path-to-repository-storage
    pub async fn repository_storage<I: Into<Identifier>>(
        &self,
        project: I,
    ) -> Result<Response<ProjectRepositoryStorage>> {
        let url = format!("projects/{}/storage", path_segment(project)?);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }
}
