use crate::{
    client::{escape, path_segment, Client, Identifier, ListOptions, Response, Result},
    Bridge, Job,
};
use serde::Serialize;

/// GitLab API docs: https://docs.gitlab.com/ee/api/jobs.html#list-project-jobs
#[derive(Clone, Debug, Default, Serialize)]
pub struct ListJobsOptions {
    /// Statuses to include, e.g. "failed" or "success"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Vec<String>>,
    /// Include jobs of retried pipelines. Only honoured for pipeline jobs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_retried: Option<bool>,

    #[serde(flatten)]
    pub list_options: ListOptions,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct DownloadArtifactsOptions {
    /// Name of the job whose artifacts to download
    pub job: String,
}

/// `JobsClient` handles communication with the CI job related methods of the GitLab API.
///
/// Artifacts and traces are returned as raw bytes.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/jobs.html
pub struct JobsClient<'a> {
    inner: &'a Client,
}

impl<'a> JobsClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    fn url<I: Into<Identifier>>(project: I, job: u64, suffix: &str) -> Result<String> {
        Ok(format!(
            "projects/{}/jobs/{}{}",
            path_segment(project)?,
            job,
            suffix
        ))
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/jobs.html#list-project-jobs
    pub async fn list_project_jobs<I: Into<Identifier>>(
        &self,
        project: I,
        options: Option<ListJobsOptions>,
    ) -> Result<Response<Vec<Job>>> {
        let url = format!("projects/{}/jobs", path_segment(project)?);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/jobs.html#list-pipeline-jobs
    pub async fn list_pipeline_jobs<I: Into<Identifier>>(
        &self,
        project: I,
        pipeline: u64,
        options: Option<ListJobsOptions>,
    ) -> Result<Response<Vec<Job>>> {
        let url = format!(
            "projects/{}/pipelines/{}/jobs",
            path_segment(project)?,
            pipeline
        );
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/jobs.html#list-pipeline-trigger-jobs
    pub async fn list_pipeline_bridges<I: Into<Identifier>>(
        &self,
        project: I,
        pipeline: u64,
        options: Option<ListJobsOptions>,
    ) -> Result<Response<Vec<Bridge>>> {
        let url = format!(
            "projects/{}/pipelines/{}/bridges",
            path_segment(project)?,
            pipeline
        );
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/jobs.html#get-a-single-job
    pub async fn get<I: Into<Identifier>>(&self, project: I, job: u64) -> Result<Response<Job>> {
        let url = Self::url(project, job, "")?;
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// The zipped artifacts archive of a job
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/job_artifacts.html#get-job-artifacts
    pub async fn artifacts<I: Into<Identifier>>(
        &self,
        project: I,
        job: u64,
    ) -> Result<Response<Vec<u8>>> {
        let url = Self::url(project, job, "/artifacts")?;
        let response = self.inner.get(&url).send().await?;

        self.inner.bytes(response).await
    }

    /// The artifacts archive of the latest successful job named
    /// `options.job` on `git_ref`
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/job_artifacts.html#download-the-artifacts-archive
    pub async fn download_artifacts_by_ref<I: Into<Identifier>>(
        &self,
        project: I,
        git_ref: &str,
        options: &DownloadArtifactsOptions,
    ) -> Result<Response<Vec<u8>>> {
        let url = format!(
            "projects/{}/jobs/artifacts/{}/download",
            path_segment(project)?,
            escape(git_ref)?
        );
        let response = self.inner.get_with(&url, options)?.send().await?;

        self.inner.bytes(response).await
    }

    /// A single file out of a job's artifacts archive. Each `/`-separated
    /// part of `path` is escaped on its own; empty, `.` and `..` parts are
    /// rejected.
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/job_artifacts.html#download-a-single-artifact-file-by-job-id
    pub async fn artifact_file<I: Into<Identifier>>(
        &self,
        project: I,
        job: u64,
        path: &str,
    ) -> Result<Response<Vec<u8>>> {
        let path = path
            .split('/')
            .map(escape)
            .collect::<Result<Vec<_>>>()?
            .join("/");
        let url = Self::url(project, job, &format!("/artifacts/{}", path))?;
        let response = self.inner.get(&url).send().await?;

        self.inner.bytes(response).await
    }

    /// The job's log
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/jobs.html#get-a-log-file
    pub async fn trace<I: Into<Identifier>>(
        &self,
        project: I,
        job: u64,
    ) -> Result<Response<Vec<u8>>> {
        let url = Self::url(project, job, "/trace")?;
        let response = self.inner.get(&url).send().await?;

        self.inner.bytes(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/jobs.html#cancel-a-job
    pub async fn cancel<I: Into<Identifier>>(&self, project: I, job: u64) -> Result<Response<Job>> {
        self.action(project, job, "/cancel").await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/jobs.html#retry-a-job
    pub async fn retry<I: Into<Identifier>>(&self, project: I, job: u64) -> Result<Response<Job>> {
        self.action(project, job, "/retry").await
    }

    /// Remove the job's log and artifacts
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/jobs.html#erase-a-job
    pub async fn erase<I: Into<Identifier>>(&self, project: I, job: u64) -> Result<Response<Job>> {
        self.action(project, job, "/erase").await
    }

    /// Trigger a manual job
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/jobs.html#run-a-job
    pub async fn play<I: Into<Identifier>>(&self, project: I, job: u64) -> Result<Response<Job>> {
        self.action(project, job, "/play").await
    }

    /// Prevent the artifacts from expiring
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/job_artifacts.html#keep-artifacts
    pub async fn keep_artifacts<I: Into<Identifier>>(
        &self,
        project: I,
        job: u64,
    ) -> Result<Response<Job>> {
        self.action(project, job, "/artifacts/keep").await
    }

    async fn action<I: Into<Identifier>>(
        &self,
        project: I,
        job: u64,
        suffix: &str,
    ) -> Result<Response<Job>> {
        let url = Self::url(project, job, suffix)?;
        let response = self.inner.post(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/job_artifacts.html#delete-job-artifacts
    pub async fn delete_artifacts<I: Into<Identifier>>(
        &self,
        project: I,
        job: u64,
    ) -> Result<Response<()>> {
        let url = Self::url(project, job, "/artifacts")?;
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// Delete the artifacts of every job of a project that can be deleted
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/job_artifacts.html#delete-project-artifacts
    pub async fn delete_project_artifacts<I: Into<Identifier>>(
        &self,
        project: I,
    ) -> Result<Response<()>> {
        let url = format!("projects/{}/artifacts", path_segment(project)?);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }
}
