use crate::{
    client::{path_segment, Client, Identifier, ListOptions, Response, Result},
    BasicUser, Commit, DateTime, Issue, Labels, MergeRequest, MergeRequestApprovals,
    MergeRequestDiffVersion, PipelineInfo, TimeStats, Todo,
};
use serde::Serialize;

/// Filters for listing merge requests, globally, per group or per project.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#list-merge-requests
#[derive(Clone, Debug, Default, Serialize)]
pub struct ListMergeRequestsOptions {
    /// Only honoured when listing the merge requests of a project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iids: Option<Vec<u64>>,
    /// One of opened, closed, locked, merged or all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<String>,
    /// "simple" returns a reduced set of fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_labels_details: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_merge_status_recheck: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_after: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_before: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_after: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_before: Option<DateTime>,
    /// One of created_by_me, assigned_to_me or all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_reaction_emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Restrict `search` to title, description or both ("title,description")
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub search_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,

    #[serde(flatten)]
    pub list_options: ListOptions,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#get-single-mr
#[derive(Clone, Debug, Default, Serialize)]
pub struct GetMergeRequestOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_html: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_diverged_commits_count: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_rebase_in_progress: Option<bool>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#get-single-mr-changes
#[derive(Clone, Debug, Default, Serialize)]
pub struct GetMergeRequestChangesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_raw_diffs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unidiff: Option<bool>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#create-mr
#[derive(Clone, Debug, Default, Serialize)]
pub struct CreateMergeRequestOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_project_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_source_branch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squash: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_collaboration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approvals_before_merge: Option<u64>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#update-mr
#[derive(Clone, Debug, Default, Serialize)]
pub struct UpdateMergeRequestOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_ids: Option<Vec<u64>>,
    /// Replaces every label of the merge request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_labels: Option<Labels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_labels: Option<Labels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<u64>,
    /// Either "close" or "reopen"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_source_branch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squash: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussion_locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_collaboration: Option<bool>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#merge-a-merge-request
#[derive(Clone, Debug, Default, Serialize)]
pub struct AcceptMergeRequestOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_commit_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squash_commit_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squash: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_remove_source_branch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_when_pipeline_succeeds: Option<bool>,
    /// The merge is refused unless the source branch head still matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct RebaseMergeRequestOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_ci: Option<bool>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#set-a-time-estimate-for-a-merge-request
#[derive(Clone, Debug, Default, Serialize)]
pub struct SetTimeEstimateOptions {
    /// Human readable duration such as "3h30m"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#add-spent-time-for-a-merge-request
#[derive(Clone, Debug, Default, Serialize)]
pub struct AddSpentTimeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// `MergeRequestsClient` handles communication with the merge request related methods of the GitLab API.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html
pub struct MergeRequestsClient<'a> {
    inner: &'a Client,
}

impl<'a> MergeRequestsClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    fn url<I: Into<Identifier>>(project: I, merge_request: u64, suffix: &str) -> Result<String> {
        Ok(format!(
            "projects/{}/merge_requests/{}{}",
            path_segment(project)?,
            merge_request,
            suffix
        ))
    }

    /// All merge requests the authenticated user has access to
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#list-merge-requests
    pub async fn list(
        &self,
        options: Option<ListMergeRequestsOptions>,
    ) -> Result<Response<Vec<MergeRequest>>> {
        let response = self
            .inner
            .get_with("merge_requests", &options)?
            .send()
            .await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#list-project-merge-requests
    pub async fn list_for_project<I: Into<Identifier>>(
        &self,
        project: I,
        options: Option<ListMergeRequestsOptions>,
    ) -> Result<Response<Vec<MergeRequest>>> {
        let url = format!("projects/{}/merge_requests", path_segment(project)?);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#list-group-merge-requests
    pub async fn list_for_group<I: Into<Identifier>>(
        &self,
        group: I,
        options: Option<ListMergeRequestsOptions>,
    ) -> Result<Response<Vec<MergeRequest>>> {
        let url = format!("groups/{}/merge_requests", path_segment(group)?);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#get-single-mr
    pub async fn get<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
        options: Option<GetMergeRequestOptions>,
    ) -> Result<Response<MergeRequest>> {
        let url = Self::url(project, merge_request, "")?;
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_request_approvals.html#merge-request-level-mr-approvals
    pub async fn approvals<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
    ) -> Result<Response<MergeRequestApprovals>> {
        let url = Self::url(project, merge_request, "/approvals")?;
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#get-single-mr-commits
    pub async fn commits<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
        options: Option<ListOptions>,
    ) -> Result<Response<Vec<Commit>>> {
        let url = Self::url(project, merge_request, "/commits")?;
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// The merge request along with its `changes`
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#get-single-mr-changes
    pub async fn changes<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
        options: Option<GetMergeRequestChangesOptions>,
    ) -> Result<Response<MergeRequest>> {
        let url = Self::url(project, merge_request, "/changes")?;
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#get-single-mr-participants
    pub async fn participants<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
    ) -> Result<Response<Vec<BasicUser>>> {
        let url = Self::url(project, merge_request, "/participants")?;
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#list-mr-pipelines
    pub async fn pipelines<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
    ) -> Result<Response<Vec<PipelineInfo>>> {
        let url = Self::url(project, merge_request, "/pipelines")?;
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// Run a merge request pipeline
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#create-mr-pipeline
    pub async fn create_pipeline<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
    ) -> Result<Response<PipelineInfo>> {
        let url = Self::url(project, merge_request, "/pipelines")?;
        let response = self.inner.post(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#list-issues-that-close-on-merge
    pub async fn issues_closed_on_merge<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
        options: Option<ListOptions>,
    ) -> Result<Response<Vec<Issue>>> {
        let url = Self::url(project, merge_request, "/closes_issues")?;
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#create-mr
    pub async fn create<I: Into<Identifier>>(
        &self,
        project: I,
        options: &CreateMergeRequestOptions,
    ) -> Result<Response<MergeRequest>> {
        let url = format!("projects/{}/merge_requests", path_segment(project)?);
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#update-mr
    pub async fn update<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
        options: &UpdateMergeRequestOptions,
    ) -> Result<Response<MergeRequest>> {
        let url = Self::url(project, merge_request, "")?;
        let response = self.inner.put_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// Only for admins and project owners.
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#delete-a-merge-request
    pub async fn delete<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
    ) -> Result<Response<()>> {
        let url = Self::url(project, merge_request, "")?;
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// Merge changes submitted with a merge request
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#merge-a-merge-request
    pub async fn accept<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
        options: &AcceptMergeRequestOptions,
    ) -> Result<Response<MergeRequest>> {
        let url = Self::url(project, merge_request, "/merge")?;
        let response = self.inner.put_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#cancel-merge-when-pipeline-succeeds
    pub async fn cancel_merge_when_pipeline_succeeds<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
    ) -> Result<Response<MergeRequest>> {
        let url = Self::url(project, merge_request, "/cancel_merge_when_pipeline_succeeds")?;
        let response = self.inner.post(&url).send().await?;

        self.inner.json(response).await
    }

    /// Ask GitLab to rebase the source branch onto the target branch. The
    /// rebase runs asynchronously; poll `get` with
    /// `include_rebase_in_progress` to follow it.
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#rebase-a-merge-request
    pub async fn rebase<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
        options: Option<RebaseMergeRequestOptions>,
    ) -> Result<Response<()>> {
        let url = Self::url(project, merge_request, "/rebase")?;
        let response = self.inner.put_with(&url, &options)?.send().await?;

        self.inner.empty(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#get-mr-diff-versions
    pub async fn diff_versions<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
        options: Option<ListOptions>,
    ) -> Result<Response<Vec<MergeRequestDiffVersion>>> {
        let url = Self::url(project, merge_request, "/versions")?;
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#get-a-single-mr-diff-version
    pub async fn diff_version<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
        version: u64,
    ) -> Result<Response<MergeRequestDiffVersion>> {
        let url = Self::url(project, merge_request, &format!("/versions/{}", version))?;
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// Returns `None` when the user is already subscribed
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#subscribe-to-a-merge-request
    pub async fn subscribe<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
    ) -> Result<Response<Option<MergeRequest>>> {
        let url = Self::url(project, merge_request, "/subscribe")?;
        let response = self.inner.post(&url).send().await?;

        self.inner.json_unless_not_modified(response).await
    }

    /// Returns `None` when the user is not subscribed
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#unsubscribe-from-a-merge-request
    pub async fn unsubscribe<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
    ) -> Result<Response<Option<MergeRequest>>> {
        let url = Self::url(project, merge_request, "/unsubscribe")?;
        let response = self.inner.post(&url).send().await?;

        self.inner.json_unless_not_modified(response).await
    }

    /// Returns `None` when a to-do item already exists for the merge request
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#create-a-to-do-item
    pub async fn create_todo<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
    ) -> Result<Response<Option<Todo>>> {
        let url = Self::url(project, merge_request, "/todo")?;
        let response = self.inner.post(&url).send().await?;

        self.inner.json_unless_not_modified(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#set-a-time-estimate-for-a-merge-request
    pub async fn set_time_estimate<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
        options: &SetTimeEstimateOptions,
    ) -> Result<Response<TimeStats>> {
        let url = Self::url(project, merge_request, "/time_estimate")?;
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#reset-the-time-estimate-for-a-merge-request
    pub async fn reset_time_estimate<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
    ) -> Result<Response<TimeStats>> {
        let url = Self::url(project, merge_request, "/reset_time_estimate")?;
        let response = self.inner.post(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#add-spent-time-for-a-merge-request
    pub async fn add_spent_time<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
        options: &AddSpentTimeOptions,
    ) -> Result<Response<TimeStats>> {
        let url = Self::url(project, merge_request, "/add_spent_time")?;
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#reset-spent-time-for-a-merge-request
    pub async fn reset_spent_time<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
    ) -> Result<Response<TimeStats>> {
        let url = Self::url(project, merge_request, "/reset_spent_time")?;
        let response = self.inner.post(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#get-time-tracking-stats
    pub async fn time_stats<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
    ) -> Result<Response<TimeStats>> {
        let url = Self::url(project, merge_request, "/time_stats")?;
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }
}
