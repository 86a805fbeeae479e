use super::{AccessLevel, BasicUser, CustomAttribute, Date, DateTime, Group, Visibility};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Project {
    pub id: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub visibility: Option<Visibility>,
    #[serde(default)]
    pub ssh_url_to_repo: Option<String>,
    #[serde(default)]
    pub http_url_to_repo: Option<String>,
    pub web_url: String,
    #[serde(default)]
    pub readme_url: Option<String>,
    #[serde(default)]
    pub tag_list: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub owner: Option<BasicUser>,
    pub name: String,
    pub name_with_namespace: String,
    pub path: String,
    pub path_with_namespace: String,
    #[serde(default)]
    pub issues_enabled: Option<bool>,
    #[serde(default)]
    pub open_issues_count: Option<u64>,
    #[serde(default)]
    pub merge_requests_enabled: Option<bool>,
    #[serde(default)]
    pub approvals_before_merge: Option<u64>,
    #[serde(default)]
    pub jobs_enabled: Option<bool>,
    #[serde(default)]
    pub wiki_enabled: Option<bool>,
    #[serde(default)]
    pub snippets_enabled: Option<bool>,
    #[serde(default)]
    pub resolve_outdated_diff_discussions: Option<bool>,
    #[serde(default)]
    pub container_registry_enabled: Option<bool>,
    #[serde(default)]
    pub container_registry_access_level: Option<AccessControl>,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub last_activity_at: Option<DateTime>,
    #[serde(default)]
    pub creator_id: Option<u64>,
    #[serde(default)]
    pub namespace: Option<ProjectNamespace>,
    #[serde(default)]
    pub permissions: Option<Permissions>,
    #[serde(default)]
    pub marked_for_deletion_at: Option<Date>,
    #[serde(default)]
    pub empty_repo: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub license_url: Option<String>,
    #[serde(default)]
    pub license: Option<ProjectLicense>,
    #[serde(default)]
    pub shared_runners_enabled: Option<bool>,
    #[serde(default)]
    pub group_runners_enabled: Option<bool>,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub star_count: u64,
    #[serde(default)]
    pub runners_token: Option<String>,
    #[serde(default)]
    pub allow_merge_on_skipped_pipeline: Option<bool>,
    #[serde(default)]
    pub only_allow_merge_if_pipeline_succeeds: Option<bool>,
    #[serde(default)]
    pub only_allow_merge_if_all_discussions_are_resolved: Option<bool>,
    #[serde(default)]
    pub remove_source_branch_after_merge: Option<bool>,
    #[serde(default)]
    pub printing_merge_request_link_enabled: Option<bool>,
    #[serde(default)]
    pub lfs_enabled: Option<bool>,
    #[serde(default)]
    pub repository_storage: Option<String>,
    #[serde(default)]
    pub request_access_enabled: Option<bool>,
    #[serde(default)]
    pub merge_method: Option<MergeMethod>,
    #[serde(default)]
    pub can_create_merge_request_in: Option<bool>,
    #[serde(default)]
    pub forked_from_project: Option<ForkParent>,
    #[serde(default)]
    pub mirror: bool,
    #[serde(default)]
    pub mirror_user_id: Option<u64>,
    #[serde(default)]
    pub mirror_trigger_builds: Option<bool>,
    #[serde(default)]
    pub only_mirror_protected_branches: Option<bool>,
    #[serde(default)]
    pub mirror_overwrites_diverged_branches: Option<bool>,
    #[serde(default)]
    pub packages_enabled: Option<bool>,
    #[serde(default)]
    pub service_desk_enabled: Option<bool>,
    #[serde(default)]
    pub service_desk_address: Option<String>,
    #[serde(default)]
    pub issues_access_level: Option<AccessControl>,
    #[serde(default)]
    pub repository_access_level: Option<AccessControl>,
    #[serde(default)]
    pub merge_requests_access_level: Option<AccessControl>,
    #[serde(default)]
    pub forking_access_level: Option<AccessControl>,
    #[serde(default)]
    pub wiki_access_level: Option<AccessControl>,
    #[serde(default)]
    pub builds_access_level: Option<AccessControl>,
    #[serde(default)]
    pub snippets_access_level: Option<AccessControl>,
    #[serde(default)]
    pub pages_access_level: Option<AccessControl>,
    #[serde(default)]
    pub operations_access_level: Option<AccessControl>,
    #[serde(default)]
    pub analytics_access_level: Option<AccessControl>,
    #[serde(default)]
    pub autoclose_referenced_issues: Option<bool>,
    #[serde(default)]
    pub suggestion_commit_message: Option<String>,
    #[serde(default)]
    pub squash_option: Option<SquashOption>,
    #[serde(default)]
    pub shared_with_groups: Vec<ProjectSharedWithGroup>,
    #[serde(default)]
    pub statistics: Option<ProjectStatistics>,
    #[serde(default, rename = "_links")]
    pub links: Option<ProjectLinks>,
    #[serde(default)]
    pub import_url: Option<String>,
    #[serde(default)]
    pub import_type: Option<String>,
    #[serde(default)]
    pub import_status: Option<String>,
    #[serde(default)]
    pub import_error: Option<String>,
    #[serde(default)]
    pub ci_default_git_depth: Option<u64>,
    #[serde(default)]
    pub ci_forward_deployment_enabled: Option<bool>,
    #[serde(default)]
    pub public_jobs: Option<bool>,
    #[serde(default)]
    pub build_timeout: Option<u64>,
    #[serde(default)]
    pub auto_cancel_pending_pipelines: Option<String>,
    #[serde(default)]
    pub ci_config_path: Option<String>,
    #[serde(default)]
    pub custom_attributes: Vec<CustomAttribute>,
    #[serde(default)]
    pub compliance_frameworks: Vec<String>,
    #[serde(default)]
    pub build_coverage_regex: Option<String>,
    #[serde(default)]
    pub issues_template: Option<String>,
    #[serde(default)]
    pub merge_requests_template: Option<String>,
    #[serde(default)]
    pub keep_latest_artifact: Option<bool>,
    #[serde(default)]
    pub merge_pipelines_enabled: Option<bool>,
    #[serde(default)]
    pub merge_trains_enabled: Option<bool>,
    #[serde(default)]
    pub merge_commit_template: Option<String>,
    #[serde(default)]
    pub squash_commit_template: Option<String>,
    #[serde(default)]
    pub auto_devops_enabled: Option<bool>,
    #[serde(default)]
    pub auto_devops_deploy_strategy: Option<String>,
    #[serde(default)]
    pub build_git_strategy: Option<String>,
    #[serde(default)]
    pub emails_disabled: Option<bool>,
    #[serde(default)]
    pub external_authorization_classification_label: Option<String>,
    #[serde(default, rename = "mr_default_target_self")]
    pub merge_request_default_target_self: Option<bool>,
}

/// Visibility of a single project feature
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessControl {
    Disabled,
    Private,
    Enabled,
    Public,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeMethod {
    Merge,
    RebaseMerge,
    Ff,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SquashOption {
    Never,
    Always,
    DefaultOn,
    DefaultOff,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProjectNamespace {
    pub id: u64,
    pub name: String,
    pub path: String,
    /// Either "user" or "group"
    pub kind: String,
    pub full_path: String,
    #[serde(default)]
    pub parent_id: Option<u64>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub web_url: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Permissions {
    #[serde(default)]
    pub project_access: Option<MemberAccess>,
    #[serde(default)]
    pub group_access: Option<MemberAccess>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MemberAccess {
    pub access_level: AccessLevel,
    #[serde(default)]
    pub notification_level: Option<u64>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProjectLicense {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

/// The parent project when a project is a fork
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ForkParent {
    pub id: u64,
    pub name: String,
    pub name_with_namespace: String,
    pub path: String,
    pub path_with_namespace: String,
    #[serde(default)]
    pub http_url_to_repo: Option<String>,
    #[serde(default)]
    pub web_url: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProjectSharedWithGroup {
    pub group_id: u64,
    pub group_name: String,
    pub group_full_path: String,
    pub group_access_level: AccessLevel,
}

/// Storage statistics of a group or project
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ProjectStatistics {
    pub commit_count: u64,
    pub storage_size: u64,
    pub repository_size: u64,
    pub wiki_size: u64,
    pub lfs_objects_size: u64,
    pub job_artifacts_size: u64,
    pub pipeline_artifacts_size: u64,
    pub packages_size: u64,
    pub snippets_size: u64,
    pub uploads_size: u64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProjectLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    #[serde(default)]
    pub issues: Option<String>,
    #[serde(default)]
    pub merge_requests: Option<String>,
    #[serde(default)]
    pub repo_branches: Option<String>,
    #[serde(default)]
    pub labels: Option<String>,
    #[serde(default)]
    pub events: Option<String>,
    #[serde(default)]
    pub members: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProjectUser {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub state: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub web_url: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProjectGroup {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub web_url: String,
    pub full_name: String,
    pub full_path: String,
}

/// Percentage of the repository taken up by each language
pub type ProjectLanguages = BTreeMap<String, f32>;

/// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#list-project-hooks
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProjectHook {
    pub id: u64,
    pub url: String,
    pub project_id: u64,
    #[serde(default)]
    pub push_events: bool,
    #[serde(default)]
    pub push_events_branch_filter: Option<String>,
    #[serde(default)]
    pub issues_events: bool,
    #[serde(default)]
    pub confidential_issues_events: bool,
    #[serde(default)]
    pub merge_requests_events: bool,
    #[serde(default)]
    pub tag_push_events: bool,
    #[serde(default)]
    pub note_events: bool,
    #[serde(default)]
    pub confidential_note_events: bool,
    #[serde(default)]
    pub job_events: bool,
    #[serde(default)]
    pub pipeline_events: bool,
    #[serde(default)]
    pub wiki_page_events: bool,
    #[serde(default)]
    pub deployment_events: bool,
    #[serde(default)]
    pub releases_events: bool,
    #[serde(default)]
    pub enable_ssl_verification: bool,
    #[serde(default)]
    pub created_at: Option<DateTime>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProjectForkRelation {
    pub id: u64,
    pub forked_to_project_id: u64,
    pub forked_from_project_id: u64,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
}

/// An uploaded file, ready to be referenced from markdown.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#upload-a-file
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProjectFile {
    pub alt: String,
    pub url: String,
    pub markdown: String,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#push-rules
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProjectPushRules {
    pub id: u64,
    pub project_id: u64,
    #[serde(default)]
    pub commit_message_regex: Option<String>,
    #[serde(default)]
    pub commit_message_negative_regex: Option<String>,
    #[serde(default)]
    pub branch_name_regex: Option<String>,
    #[serde(default)]
    pub deny_delete_tag: bool,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub member_check: bool,
    #[serde(default)]
    pub prevent_secrets: bool,
    #[serde(default)]
    pub author_email_regex: Option<String>,
    #[serde(default)]
    pub file_name_regex: Option<String>,
    #[serde(default)]
    pub max_file_size: u64,
    #[serde(default)]
    pub commit_committer_check: bool,
    #[serde(default)]
    pub reject_unsigned_commits: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ApproverUser {
    pub user: BasicUser,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ApproverGroup {
    pub group: ApproverGroupDetails,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ApproverGroupDetails {
    pub id: u64,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub visibility: Option<Visibility>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub full_path: Option<String>,
    #[serde(default)]
    pub lfs_enabled: Option<bool>,
    #[serde(default)]
    pub request_access_enabled: Option<bool>,
}

/// Project level approval configuration.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/merge_request_approvals.html#get-configuration
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProjectApprovals {
    #[serde(default)]
    pub approvers: Vec<ApproverUser>,
    #[serde(default)]
    pub approver_groups: Vec<ApproverGroup>,
    #[serde(default)]
    pub approvals_before_merge: u64,
    #[serde(default)]
    pub reset_approvals_on_push: bool,
    #[serde(default)]
    pub disable_overriding_approvers_per_merge_request: bool,
    #[serde(default)]
    pub merge_requests_author_approval: bool,
    #[serde(default)]
    pub merge_requests_disable_committers_approval: bool,
    #[serde(default)]
    pub require_password_to_approve: bool,
    #[serde(default)]
    pub selective_code_owner_removals: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProtectedBranch {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub allow_force_push: bool,
    #[serde(default)]
    pub code_owner_approval_required: bool,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/merge_request_approvals.html#get-project-level-rules
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProjectApprovalRule {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub rule_type: Option<String>,
    #[serde(default)]
    pub eligible_approvers: Vec<BasicUser>,
    pub approvals_required: u64,
    #[serde(default)]
    pub users: Vec<BasicUser>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub contains_hidden_groups: bool,
    #[serde(default)]
    pub protected_branches: Vec<ProtectedBranch>,
    #[serde(default)]
    pub applies_to_all_protected_branches: bool,
}

/// Configuration and update status of a pull mirror.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/projects.html#get-a-projects-pull-mirror-details
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProjectPullMirrorDetails {
    pub id: u64,
    #[serde(default)]
    pub last_error: Option<String>,
    #[serde(default)]
    pub last_successful_update_at: Option<DateTime>,
    #[serde(default)]
    pub last_update_at: Option<DateTime>,
    #[serde(default)]
    pub last_update_started_at: Option<DateTime>,
    #[serde(default)]
    pub update_status: Option<String>,
    pub url: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProjectRepositoryStorage {
    pub project_id: u64,
    pub disk_path: String,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    pub repository_storage: String,
}

#[cfg(test)]
mod test {
    use super::{AccessControl, MergeMethod, Project, ProjectApprovals, ProjectLanguages};
    use crate::{AccessLevel, Visibility};

    #[test]
    fn project() {
        const PROJECT_JSON: &str = include_str!("../test-input/project.json");

        let project: Project = serde_json::from_str(PROJECT_JSON).unwrap();
        assert_eq!(project.path_with_namespace, "diaspora/diaspora-project-site");
        assert_eq!(project.visibility, Some(Visibility::Private));
        assert_eq!(project.merge_method, Some(MergeMethod::Merge));
        assert_eq!(project.issues_access_level, Some(AccessControl::Enabled));
        assert_eq!(
            project
                .permissions
                .as_ref()
                .and_then(|p| p.group_access.as_ref())
                .map(|access| access.access_level),
            Some(AccessLevel::Owner)
        );
        assert_eq!(project.namespace.unwrap().kind, "group");
        assert_eq!(project.statistics.unwrap().commit_count, 37);
        assert_eq!(
            project.links.unwrap().self_link,
            "http://example.com/api/v4/projects"
        );
    }

    #[test]
    fn approvals() {
        let approvals: ProjectApprovals = serde_json::from_str(
            r#"{
                "approvers": [{"user": {"id": 5, "username": "ruth", "name": "Ruth"}}],
                "approver_groups": [],
                "approvals_before_merge": 2,
                "reset_approvals_on_push": true,
                "disable_overriding_approvers_per_merge_request": false
            }"#,
        )
        .unwrap();
        assert_eq!(approvals.approvers[0].user.username, "ruth");
        assert_eq!(approvals.approvals_before_merge, 2);
        assert!(!approvals.merge_requests_author_approval);
    }

    #[test]
    fn languages() {
        let languages: ProjectLanguages =
            serde_json::from_str(r#"{"Ruby": 66.69, "JavaScript": 22.98}"#).unwrap();
        assert_eq!(languages.len(), 2);
        assert!(languages["Ruby"] > 66.0);
    }
}
