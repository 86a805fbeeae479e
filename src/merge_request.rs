use super::{
    ApproverGroup, ApproverUser, BasicUser, Date, DateTime, Labels, Milestone, Pipeline,
    PipelineInfo, TimeStats,
};
use serde::{Deserialize, Serialize};

/// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MergeRequest {
    pub id: u64,
    pub iid: u64,
    pub target_branch: String,
    pub source_branch: String,
    pub project_id: u64,
    pub title: String,
    /// One of "opened", "closed", "locked" or "merged"
    pub state: String,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
    #[serde(default)]
    pub upvotes: u64,
    #[serde(default)]
    pub downvotes: u64,
    #[serde(default)]
    pub author: Option<BasicUser>,
    #[serde(default)]
    pub assignee: Option<BasicUser>,
    #[serde(default)]
    pub assignees: Vec<BasicUser>,
    #[serde(default)]
    pub reviewers: Vec<BasicUser>,
    #[serde(default)]
    pub source_project_id: Option<u64>,
    #[serde(default)]
    pub target_project_id: Option<u64>,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub work_in_progress: bool,
    #[serde(default)]
    pub milestone: Option<Milestone>,
    #[serde(default)]
    pub merge_when_pipeline_succeeds: bool,
    #[serde(default)]
    pub merge_status: Option<String>,
    #[serde(default)]
    pub detailed_merge_status: Option<String>,
    #[serde(default)]
    pub merge_error: Option<String>,
    #[serde(default)]
    pub merged_by: Option<BasicUser>,
    #[serde(default)]
    pub merged_at: Option<DateTime>,
    #[serde(default)]
    pub closed_by: Option<BasicUser>,
    #[serde(default)]
    pub closed_at: Option<DateTime>,
    #[serde(default)]
    pub subscribed: bool,
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default)]
    pub merge_commit_sha: Option<String>,
    #[serde(default)]
    pub squash_commit_sha: Option<String>,
    #[serde(default)]
    pub user_notes_count: u64,
    /// A string since GitLab reports large counts as "1000+"
    #[serde(default)]
    pub changes_count: Option<String>,
    #[serde(default)]
    pub should_remove_source_branch: Option<bool>,
    #[serde(default)]
    pub force_remove_source_branch: Option<bool>,
    #[serde(default)]
    pub allow_collaboration: Option<bool>,
    pub web_url: String,
    #[serde(default)]
    pub references: Option<References>,
    #[serde(default)]
    pub discussion_locked: Option<bool>,
    /// Only populated by the changes endpoint
    #[serde(default)]
    pub changes: Vec<Diff>,
    #[serde(default)]
    pub user: Option<MergeRequestUserPermissions>,
    #[serde(default)]
    pub time_stats: Option<TimeStats>,
    #[serde(default)]
    pub squash: bool,
    #[serde(default)]
    pub pipeline: Option<PipelineInfo>,
    #[serde(default)]
    pub head_pipeline: Option<Pipeline>,
    #[serde(default)]
    pub diff_refs: Option<DiffRefs>,
    #[serde(default)]
    pub diverged_commits_count: Option<u64>,
    #[serde(default)]
    pub rebase_in_progress: Option<bool>,
    #[serde(default)]
    pub approvals_before_merge: Option<u64>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub first_contribution: Option<bool>,
    #[serde(default)]
    pub task_completion_status: Option<TaskCompletionStatus>,
    #[serde(default)]
    pub has_conflicts: bool,
    #[serde(default)]
    pub blocking_discussions_resolved: Option<bool>,
    #[serde(default)]
    pub overflow: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MergeRequestUserPermissions {
    pub can_merge: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct References {
    pub short: String,
    pub relative: String,
    pub full: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DiffRefs {
    #[serde(default)]
    pub base_sha: Option<String>,
    #[serde(default)]
    pub head_sha: Option<String>,
    #[serde(default)]
    pub start_sha: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TaskCompletionStatus {
    pub count: u64,
    pub completed_count: u64,
}

/// A single file's changes
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Diff {
    pub old_path: String,
    pub new_path: String,
    #[serde(default)]
    pub a_mode: Option<String>,
    #[serde(default)]
    pub b_mode: Option<String>,
    #[serde(default)]
    pub diff: String,
    #[serde(default)]
    pub new_file: bool,
    #[serde(default)]
    pub renamed_file: bool,
    #[serde(default)]
    pub deleted_file: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Commit {
    pub id: String,
    pub short_id: String,
    pub title: String,
    pub author_name: String,
    pub author_email: String,
    #[serde(default)]
    pub authored_date: Option<DateTime>,
    #[serde(default)]
    pub committer_name: Option<String>,
    #[serde(default)]
    pub committer_email: Option<String>,
    #[serde(default)]
    pub committed_date: Option<DateTime>,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub parent_ids: Vec<String>,
    #[serde(default)]
    pub web_url: Option<String>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#get-merge-request-diff-versions
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MergeRequestDiffVersion {
    pub id: u64,
    #[serde(default)]
    pub head_commit_sha: Option<String>,
    #[serde(default)]
    pub base_commit_sha: Option<String>,
    #[serde(default)]
    pub start_commit_sha: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub merge_request_id: Option<u64>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub real_size: Option<String>,
    /// Only populated for a single version
    #[serde(default)]
    pub commits: Vec<Commit>,
    #[serde(default)]
    pub diffs: Vec<Diff>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/merge_request_approvals.html#merge-request-level-mr-approvals
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MergeRequestApprovals {
    pub id: u64,
    pub iid: u64,
    pub project_id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
    #[serde(default)]
    pub merge_status: Option<String>,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub approvals_before_merge: Option<u64>,
    #[serde(default)]
    pub approvals_required: u64,
    #[serde(default)]
    pub approvals_left: u64,
    #[serde(default)]
    pub require_password_to_approve: bool,
    #[serde(default)]
    pub approved_by: Vec<ApproverUser>,
    #[serde(default)]
    pub suggested_approvers: Vec<BasicUser>,
    #[serde(default)]
    pub approvers: Vec<ApproverUser>,
    #[serde(default)]
    pub approver_groups: Vec<ApproverGroup>,
    #[serde(default)]
    pub user_has_approved: bool,
    #[serde(default)]
    pub user_can_approve: bool,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/issues.html
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Issue {
    pub id: u64,
    pub iid: u64,
    #[serde(default)]
    pub external_id: Option<String>,
    pub project_id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub state: String,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
    #[serde(default)]
    pub closed_at: Option<DateTime>,
    #[serde(default)]
    pub closed_by: Option<BasicUser>,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub milestone: Option<Milestone>,
    #[serde(default)]
    pub author: Option<BasicUser>,
    #[serde(default)]
    pub assignee: Option<BasicUser>,
    #[serde(default)]
    pub assignees: Vec<BasicUser>,
    #[serde(default)]
    pub upvotes: u64,
    #[serde(default)]
    pub downvotes: u64,
    #[serde(default)]
    pub user_notes_count: u64,
    #[serde(default)]
    pub confidential: bool,
    #[serde(default)]
    pub due_date: Option<Date>,
    pub web_url: String,
    #[serde(default)]
    pub references: Option<References>,
    #[serde(default)]
    pub time_stats: Option<TimeStats>,
    #[serde(default)]
    pub discussion_locked: Option<bool>,
    #[serde(default)]
    pub issue_type: Option<String>,
    #[serde(default)]
    pub weight: Option<u64>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TodoProject {
    pub id: u64,
    pub name: String,
    pub name_with_namespace: String,
    pub path: String,
    pub path_with_namespace: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/todos.html
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Todo {
    pub id: u64,
    #[serde(default)]
    pub project: Option<TodoProject>,
    #[serde(default)]
    pub author: Option<BasicUser>,
    pub action_name: String,
    pub target_type: String,
    /// The object the to-do item refers to, in the shape of its target type
    #[serde(default)]
    pub target: serde_json::Value,
    pub target_url: String,
    #[serde(default)]
    pub body: Option<String>,
    pub state: String,
    #[serde(default)]
    pub created_at: Option<DateTime>,
}

#[cfg(test)]
mod test {
    use super::{MergeRequest, MergeRequestApprovals};

    #[test]
    fn merge_request() {
        const JSON: &str = include_str!("../test-input/merge-request.json");

        let mr: MergeRequest = serde_json::from_str(JSON).unwrap();
        assert_eq!(mr.iid, 1);
        assert_eq!(
            mr.labels.iter().collect::<Vec<_>>(),
            vec!["Community contribution", "Manage"]
        );
        assert_eq!(mr.references.as_ref().unwrap().full, "my-group/my-project!1");
        assert_eq!(mr.changes[0].new_path, "VERSION");
        assert!(mr.user.unwrap().can_merge);
        assert_eq!(mr.pipeline.unwrap().id, 29626725);
        assert_eq!(mr.head_pipeline.unwrap().coverage.as_deref(), Some("98.29"));
        assert_eq!(mr.time_stats.unwrap().time_estimate, 0);
        assert_eq!(
            mr.diff_refs.unwrap().head_sha.as_deref(),
            Some("2be7ddb704c7b6b83732fdd5b9f09d5a397b5f8f")
        );
    }

    #[test]
    fn approvals() {
        let approvals: MergeRequestApprovals = serde_json::from_str(
            r#"{
                "id": 5,
                "iid": 5,
                "project_id": 1,
                "title": "Approvals API",
                "state": "opened",
                "merge_status": "cannot_be_merged",
                "approvals_required": 2,
                "approvals_left": 1,
                "approved_by": [
                  {"user": {"name": "Administrator", "username": "root", "id": 1, "state": "active"}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(approvals.approvals_left, 1);
        assert_eq!(approvals.approved_by[0].user.username, "root");
        assert!(!approvals.user_has_approved);
    }
}
