use crate::{
    client::{escape, path_segment, Client, Identifier, ListOptions, Response, Result},
    DateTime, Discussion, Note, NotePosition,
};
use serde::Serialize;

/// Start a new thread. `commit_id` and `position` are only meaningful for
/// merge request and commit threads.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#create-new-merge-request-thread
#[derive(Clone, Debug, Default, Serialize)]
pub struct CreateDiscussionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Requires admin or project/group owner rights
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<NotePosition>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#add-note-to-existing-issue-thread
#[derive(Clone, Debug, Default, Serialize)]
pub struct AddDiscussionNoteOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
}

/// Exactly one of `body` or `resolved` should be set. `resolved` is only
/// meaningful for merge request threads.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#modify-an-existing-merge-request-thread-note
#[derive(Clone, Debug, Default, Serialize)]
pub struct UpdateDiscussionNoteOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
}

/// `DiscussionsClient` handles communication with the discussion related
/// methods of the GitLab API. Threads hang off issues, snippets, epics,
/// merge requests and commits; every one of them offers the same six
/// operations.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html
pub struct DiscussionsClient<'a> {
    inner: &'a Client,
}

impl<'a> DiscussionsClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    async fn list(
        &self,
        base: &str,
        options: Option<ListOptions>,
    ) -> Result<Response<Vec<Discussion>>> {
        let response = self.inner.get_with(base, &options)?.send().await?;

        self.inner.json(response).await
    }

    async fn get(&self, base: &str, discussion: &str) -> Result<Response<Discussion>> {
        let url = format!("{}/{}", base, escape(discussion)?);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    async fn create(
        &self,
        base: &str,
        options: &CreateDiscussionOptions,
    ) -> Result<Response<Discussion>> {
        let response = self.inner.post_with(base, options)?.send().await?;

        self.inner.json(response).await
    }

    async fn add_note(
        &self,
        base: &str,
        discussion: &str,
        options: &AddDiscussionNoteOptions,
    ) -> Result<Response<Note>> {
        let url = format!("{}/{}/notes", base, escape(discussion)?);
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    async fn update_note(
        &self,
        base: &str,
        discussion: &str,
        note: u64,
        options: &UpdateDiscussionNoteOptions,
    ) -> Result<Response<Note>> {
        let url = format!("{}/{}/notes/{}", base, escape(discussion)?, note);
        let response = self.inner.put_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    async fn delete_note(&self, base: &str, discussion: &str, note: u64) -> Result<Response<()>> {
        let url = format!("{}/{}/notes/{}", base, escape(discussion)?, note);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    fn issue_base<I: Into<Identifier>>(project: I, issue: u64) -> Result<String> {
        Ok(format!(
            "projects/{}/issues/{}/discussions",
            path_segment(project)?,
            issue
        ))
    }

    fn snippet_base<I: Into<Identifier>>(project: I, snippet: u64) -> Result<String> {
        Ok(format!(
            "projects/{}/snippets/{}/discussions",
            path_segment(project)?,
            snippet
        ))
    }

    fn epic_base<I: Into<Identifier>>(group: I, epic: u64) -> Result<String> {
        Ok(format!(
            "groups/{}/epics/{}/discussions",
            path_segment(group)?,
            epic
        ))
    }

    fn merge_request_base<I: Into<Identifier>>(project: I, merge_request: u64) -> Result<String> {
        Ok(format!(
            "projects/{}/merge_requests/{}/discussions",
            path_segment(project)?,
            merge_request
        ))
    }

    fn commit_base<I: Into<Identifier>>(project: I, commit: &str) -> Result<String> {
        Ok(format!(
            "projects/{}/repository/commits/{}/discussions",
            path_segment(project)?,
            escape(commit)?
        ))
    }

    // Issues

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#list-project-issue-discussion-items
    pub async fn list_issue_discussions<I: Into<Identifier>>(
        &self,
        project: I,
        issue: u64,
        options: Option<ListOptions>,
    ) -> Result<Response<Vec<Discussion>>> {
        self.list(&Self::issue_base(project, issue)?, options).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#get-single-issue-discussion-item
    pub async fn get_issue_discussion<I: Into<Identifier>>(
        &self,
        project: I,
        issue: u64,
        discussion: &str,
    ) -> Result<Response<Discussion>> {
        self.get(&Self::issue_base(project, issue)?, discussion)
            .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#create-new-issue-thread
    pub async fn create_issue_discussion<I: Into<Identifier>>(
        &self,
        project: I,
        issue: u64,
        options: &CreateDiscussionOptions,
    ) -> Result<Response<Discussion>> {
        self.create(&Self::issue_base(project, issue)?, options)
            .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#add-note-to-existing-issue-thread
    pub async fn add_issue_discussion_note<I: Into<Identifier>>(
        &self,
        project: I,
        issue: u64,
        discussion: &str,
        options: &AddDiscussionNoteOptions,
    ) -> Result<Response<Note>> {
        self.add_note(&Self::issue_base(project, issue)?, discussion, options)
            .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#modify-existing-issue-thread-note
    pub async fn update_issue_discussion_note<I: Into<Identifier>>(
        &self,
        project: I,
        issue: u64,
        discussion: &str,
        note: u64,
        options: &UpdateDiscussionNoteOptions,
    ) -> Result<Response<Note>> {
        self.update_note(&Self::issue_base(project, issue)?, discussion, note, options)
            .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#delete-an-issue-thread-note
    pub async fn delete_issue_discussion_note<I: Into<Identifier>>(
        &self,
        project: I,
        issue: u64,
        discussion: &str,
        note: u64,
    ) -> Result<Response<()>> {
        self.delete_note(&Self::issue_base(project, issue)?, discussion, note)
            .await
    }

    // Snippets

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#list-project-snippet-discussion-items
    pub async fn list_snippet_discussions<I: Into<Identifier>>(
        &self,
        project: I,
        snippet: u64,
        options: Option<ListOptions>,
    ) -> Result<Response<Vec<Discussion>>> {
        self.list(&Self::snippet_base(project, snippet)?, options)
            .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#get-single-snippet-discussion-item
    pub async fn get_snippet_discussion<I: Into<Identifier>>(
        &self,
        project: I,
        snippet: u64,
        discussion: &str,
    ) -> Result<Response<Discussion>> {
        self.get(&Self::snippet_base(project, snippet)?, discussion)
            .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#create-new-snippet-thread
    pub async fn create_snippet_discussion<I: Into<Identifier>>(
        &self,
        project: I,
        snippet: u64,
        options: &CreateDiscussionOptions,
    ) -> Result<Response<Discussion>> {
        self.create(&Self::snippet_base(project, snippet)?, options)
            .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#add-note-to-existing-snippet-thread
    pub async fn add_snippet_discussion_note<I: Into<Identifier>>(
        &self,
        project: I,
        snippet: u64,
        discussion: &str,
        options: &AddDiscussionNoteOptions,
    ) -> Result<Response<Note>> {
        self.add_note(&Self::snippet_base(project, snippet)?, discussion, options)
            .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#modify-existing-snippet-thread-note
    pub async fn update_snippet_discussion_note<I: Into<Identifier>>(
        &self,
        project: I,
        snippet: u64,
        discussion: &str,
        note: u64,
        options: &UpdateDiscussionNoteOptions,
    ) -> Result<Response<Note>> {
        self.update_note(
            &Self::snippet_base(project, snippet)?,
            discussion,
            note,
            options,
        )
        .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#delete-a-snippet-thread-note
    pub async fn delete_snippet_discussion_note<I: Into<Identifier>>(
        &self,
        project: I,
        snippet: u64,
        discussion: &str,
        note: u64,
    ) -> Result<Response<()>> {
        self.delete_note(&Self::snippet_base(project, snippet)?, discussion, note)
            .await
    }

    // Epics

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#list-group-epic-discussion-items
    pub async fn list_epic_discussions<I: Into<Identifier>>(
        &self,
        group: I,
        epic: u64,
        options: Option<ListOptions>,
    ) -> Result<Response<Vec<Discussion>>> {
        self.list(&Self::epic_base(group, epic)?, options).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#get-single-epic-discussion-item
    pub async fn get_epic_discussion<I: Into<Identifier>>(
        &self,
        group: I,
        epic: u64,
        discussion: &str,
    ) -> Result<Response<Discussion>> {
        self.get(&Self::epic_base(group, epic)?, discussion).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#create-new-epic-thread
    pub async fn create_epic_discussion<I: Into<Identifier>>(
        &self,
        group: I,
        epic: u64,
        options: &CreateDiscussionOptions,
    ) -> Result<Response<Discussion>> {
        self.create(&Self::epic_base(group, epic)?, options).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#add-note-to-existing-epic-thread
    pub async fn add_epic_discussion_note<I: Into<Identifier>>(
        &self,
        group: I,
        epic: u64,
        discussion: &str,
        options: &AddDiscussionNoteOptions,
    ) -> Result<Response<Note>> {
        self.add_note(&Self::epic_base(group, epic)?, discussion, options)
            .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#modify-existing-epic-thread-note
    pub async fn update_epic_discussion_note<I: Into<Identifier>>(
        &self,
        group: I,
        epic: u64,
        discussion: &str,
        note: u64,
        options: &UpdateDiscussionNoteOptions,
    ) -> Result<Response<Note>> {
        self.update_note(&Self::epic_base(group, epic)?, discussion, note, options)
            .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#delete-an-epic-thread-note
    pub async fn delete_epic_discussion_note<I: Into<Identifier>>(
        &self,
        group: I,
        epic: u64,
        discussion: &str,
        note: u64,
    ) -> Result<Response<()>> {
        self.delete_note(&Self::epic_base(group, epic)?, discussion, note)
            .await
    }

    // Merge requests

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#list-project-merge-request-discussion-items
    pub async fn list_merge_request_discussions<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
        options: Option<ListOptions>,
    ) -> Result<Response<Vec<Discussion>>> {
        self.list(&Self::merge_request_base(project, merge_request)?, options)
            .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#get-single-merge-request-discussion-item
    pub async fn get_merge_request_discussion<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
        discussion: &str,
    ) -> Result<Response<Discussion>> {
        self.get(&Self::merge_request_base(project, merge_request)?, discussion)
            .await
    }

    /// Set `position` to start a thread on a line of the diff.
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#create-new-merge-request-thread
    pub async fn create_merge_request_discussion<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
        options: &CreateDiscussionOptions,
    ) -> Result<Response<Discussion>> {
        self.create(&Self::merge_request_base(project, merge_request)?, options)
            .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#resolve-a-merge-request-thread
    pub async fn resolve_merge_request_discussion<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
        discussion: &str,
        resolved: bool,
    ) -> Result<Response<Discussion>> {
        let url = format!(
            "{}/{}",
            Self::merge_request_base(project, merge_request)?,
            escape(discussion)?
        );
        let response = self
            .inner
            .put(&url)
            .query(&[("resolved", resolved)])
            .send()
            .await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#add-note-to-existing-merge-request-thread
    pub async fn add_merge_request_discussion_note<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
        discussion: &str,
        options: &AddDiscussionNoteOptions,
    ) -> Result<Response<Note>> {
        self.add_note(
            &Self::merge_request_base(project, merge_request)?,
            discussion,
            options,
        )
        .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#modify-an-existing-merge-request-thread-note
    pub async fn update_merge_request_discussion_note<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
        discussion: &str,
        note: u64,
        options: &UpdateDiscussionNoteOptions,
    ) -> Result<Response<Note>> {
        self.update_note(
            &Self::merge_request_base(project, merge_request)?,
            discussion,
            note,
            options,
        )
        .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#delete-a-merge-request-thread-note
    pub async fn delete_merge_request_discussion_note<I: Into<Identifier>>(
        &self,
        project: I,
        merge_request: u64,
        discussion: &str,
        note: u64,
    ) -> Result<Response<()>> {
        self.delete_note(
            &Self::merge_request_base(project, merge_request)?,
            discussion,
            note,
        )
        .await
    }

    // Commits

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#list-project-commit-discussion-items
    pub async fn list_commit_discussions<I: Into<Identifier>>(
        &self,
        project: I,
        commit: &str,
        options: Option<ListOptions>,
    ) -> Result<Response<Vec<Discussion>>> {
        self.list(&Self::commit_base(project, commit)?, options)
            .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#get-single-commit-discussion-item
    pub async fn get_commit_discussion<I: Into<Identifier>>(
        &self,
        project: I,
        commit: &str,
        discussion: &str,
    ) -> Result<Response<Discussion>> {
        self.get(&Self::commit_base(project, commit)?, discussion)
            .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#create-new-commit-thread
    pub async fn create_commit_discussion<I: Into<Identifier>>(
        &self,
        project: I,
        commit: &str,
        options: &CreateDiscussionOptions,
    ) -> Result<Response<Discussion>> {
        self.create(&Self::commit_base(project, commit)?, options)
            .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#add-note-to-existing-commit-thread
    pub async fn add_commit_discussion_note<I: Into<Identifier>>(
        &self,
        project: I,
        commit: &str,
        discussion: &str,
        options: &AddDiscussionNoteOptions,
    ) -> Result<Response<Note>> {
        self.add_note(&Self::commit_base(project, commit)?, discussion, options)
            .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#modify-an-existing-commit-thread-note
    pub async fn update_commit_discussion_note<I: Into<Identifier>>(
        &self,
        project: I,
        commit: &str,
        discussion: &str,
        note: u64,
        options: &UpdateDiscussionNoteOptions,
    ) -> Result<Response<Note>> {
        self.update_note(&Self::commit_base(project, commit)?, discussion, note, options)
            .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#delete-a-commit-thread-note
    pub async fn delete_commit_discussion_note<I: Into<Identifier>>(
        &self,
        project: I,
        commit: &str,
        discussion: &str,
        note: u64,
    ) -> Result<Response<()>> {
        self.delete_note(&Self::commit_base(project, commit)?, discussion, note)
            .await
    }
}
