use crate::{
    client::{path_segment, Client, Identifier, ListOptions, Response, Result},
    DateTime, Pipeline, PipelineInfo, PipelineVariable, TestReport, TestReportSummary,
};
use serde::Serialize;

/// GitLab API docs: https://docs.gitlab.com/ee/api/pipelines.html#list-project-pipelines
#[derive(Clone, Debug, Default, Serialize)]
pub struct ListProjectPipelinesOptions {
    /// One of running, pending, finished, branches or tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaml_errors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_after: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_before: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    #[serde(flatten)]
    pub list_options: ListOptions,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct PipelineVariableOptions {
    pub key: String,
    pub value: String,
    /// Either "env_var" (the default) or "file"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<String>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/pipelines.html#create-a-new-pipeline
#[derive(Clone, Debug, Default, Serialize)]
pub struct CreatePipelineOptions {
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<PipelineVariableOptions>>,
}

/// `PipelinesClient` handles communication with the pipeline related methods of the GitLab API.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/pipelines.html
pub struct PipelinesClient<'a> {
    inner: &'a Client,
}

impl<'a> PipelinesClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    fn url<I: Into<Identifier>>(project: I, pipeline: u64, suffix: &str) -> Result<String> {
        Ok(format!(
            "projects/{}/pipelines/{}{}",
            path_segment(project)?,
            pipeline,
            suffix
        ))
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/pipelines.html#list-project-pipelines
    pub async fn list<I: Into<Identifier>>(
        &self,
        project: I,
        options: Option<ListProjectPipelinesOptions>,
    ) -> Result<Response<Vec<PipelineInfo>>> {
        let url = format!("projects/{}/pipelines", path_segment(project)?);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/pipelines.html#get-a-single-pipeline
    pub async fn get<I: Into<Identifier>>(
        &self,
        project: I,
        pipeline: u64,
    ) -> Result<Response<Pipeline>> {
        let url = Self::url(project, pipeline, "")?;
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/pipelines.html#get-variables-of-a-pipeline
    pub async fn variables<I: Into<Identifier>>(
        &self,
        project: I,
        pipeline: u64,
    ) -> Result<Response<Vec<PipelineVariable>>> {
        let url = Self::url(project, pipeline, "/variables")?;
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/pipelines.html#get-a-pipelines-test-report
    pub async fn test_report<I: Into<Identifier>>(
        &self,
        project: I,
        pipeline: u64,
    ) -> Result<Response<TestReport>> {
        let url = Self::url(project, pipeline, "/test_report")?;
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/pipelines.html#get-a-pipelines-test-report-summary
    pub async fn test_report_summary<I: Into<Identifier>>(
        &self,
        project: I,
        pipeline: u64,
    ) -> Result<Response<TestReportSummary>> {
        let url = Self::url(project, pipeline, "/test_report_summary")?;
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/pipelines.html#create-a-new-pipeline
    pub async fn create<I: Into<Identifier>>(
        &self,
        project: I,
        options: &CreatePipelineOptions,
    ) -> Result<Response<Pipeline>> {
        let url = format!("projects/{}/pipeline", path_segment(project)?);
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// Retry the failed or cancelled jobs of a pipeline
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/pipelines.html#retry-jobs-in-a-pipeline
    pub async fn retry<I: Into<Identifier>>(
        &self,
        project: I,
        pipeline: u64,
    ) -> Result<Response<Pipeline>> {
        let url = Self::url(project, pipeline, "/retry")?;
        let response = self.inner.post(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/pipelines.html#cancel-a-pipelines-jobs
    pub async fn cancel<I: Into<Identifier>>(
        &self,
        project: I,
        pipeline: u64,
    ) -> Result<Response<Pipeline>> {
        let url = Self::url(project, pipeline, "/cancel")?;
        let response = self.inner.post(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/pipelines.html#delete-a-pipeline
    pub async fn delete<I: Into<Identifier>>(
        &self,
        project: I,
        pipeline: u64,
    ) -> Result<Response<()>> {
        let url = Self::url(project, pipeline, "")?;
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }
}
