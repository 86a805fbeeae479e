use super::{BasicUser, Commit, DateTime};
use serde::{Deserialize, Serialize};

/// The pipeline summary returned by list endpoints and embedded in merge requests.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PipelineInfo {
    pub id: u64,
    #[serde(default)]
    pub iid: Option<u64>,
    pub project_id: u64,
    pub status: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub sha: String,
    pub web_url: String,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/pipelines.html#get-a-single-pipeline
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Pipeline {
    pub id: u64,
    #[serde(default)]
    pub iid: Option<u64>,
    pub project_id: u64,
    pub status: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub sha: String,
    #[serde(default)]
    pub before_sha: Option<String>,
    #[serde(default)]
    pub tag: bool,
    #[serde(default)]
    pub yaml_errors: Option<String>,
    #[serde(default)]
    pub user: Option<BasicUser>,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
    #[serde(default)]
    pub started_at: Option<DateTime>,
    #[serde(default)]
    pub finished_at: Option<DateTime>,
    #[serde(default)]
    pub committed_at: Option<DateTime>,
    /// Seconds
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub queued_duration: Option<f64>,
    #[serde(default)]
    pub coverage: Option<String>,
    pub web_url: String,
    #[serde(default)]
    pub detailed_status: Option<DetailedStatus>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DetailedStatus {
    pub icon: String,
    pub text: String,
    pub label: String,
    pub group: String,
    #[serde(default)]
    pub tooltip: Option<String>,
    #[serde(default)]
    pub has_details: bool,
    #[serde(default)]
    pub details_path: Option<String>,
    #[serde(default)]
    pub illustration: Option<serde_json::Value>,
    #[serde(default)]
    pub favicon: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PipelineVariable {
    pub key: String,
    #[serde(default)]
    pub variable_type: Option<String>,
    pub value: String,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/pipelines.html#get-a-pipelines-test-report
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TestReport {
    pub total_time: f64,
    pub total_count: u64,
    pub success_count: u64,
    pub failed_count: u64,
    pub skipped_count: u64,
    pub error_count: u64,
    #[serde(default)]
    pub test_suites: Vec<TestSuite>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TestSuite {
    pub name: String,
    pub total_time: f64,
    pub total_count: u64,
    pub success_count: u64,
    pub failed_count: u64,
    pub skipped_count: u64,
    pub error_count: u64,
    #[serde(default)]
    pub suite_error: Option<String>,
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TestCase {
    /// One of "success", "failed", "skipped" or "error"
    pub status: String,
    pub name: String,
    #[serde(default)]
    pub classname: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub execution_time: f64,
    #[serde(default)]
    pub system_output: Option<String>,
    #[serde(default)]
    pub stack_trace: Option<String>,
    #[serde(default)]
    pub attachment_url: Option<String>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/pipelines.html#get-a-pipelines-test-report-summary
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TestReportSummary {
    pub total: TestReportTotals,
    #[serde(default)]
    pub test_suites: Vec<TestSuiteSummary>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TestReportTotals {
    pub time: f64,
    pub count: u64,
    pub success: u64,
    pub failed: u64,
    pub skipped: u64,
    pub error: u64,
    #[serde(default)]
    pub suite_error: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TestSuiteSummary {
    pub name: String,
    pub total_time: f64,
    pub total_count: u64,
    pub success_count: u64,
    pub failed_count: u64,
    pub skipped_count: u64,
    pub error_count: u64,
    #[serde(default)]
    pub build_ids: Vec<u64>,
    #[serde(default)]
    pub suite_error: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Runner {
    pub id: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub paused: bool,
    #[serde(default)]
    pub is_shared: bool,
    #[serde(default)]
    pub runner_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub online: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct JobArtifact {
    pub file_type: String,
    pub size: u64,
    pub filename: String,
    #[serde(default)]
    pub file_format: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ArtifactsFile {
    pub filename: String,
    pub size: u64,
}

/// The pipeline a job belongs to
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct JobPipeline {
    pub id: u64,
    pub project_id: u64,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub sha: String,
    pub status: String,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/jobs.html
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Job {
    pub id: u64,
    pub status: String,
    pub stage: String,
    pub name: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    #[serde(default)]
    pub tag: bool,
    #[serde(default)]
    pub coverage: Option<f64>,
    #[serde(default)]
    pub allow_failure: bool,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub started_at: Option<DateTime>,
    #[serde(default)]
    pub finished_at: Option<DateTime>,
    #[serde(default)]
    pub erased_at: Option<DateTime>,
    /// Seconds
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub queued_duration: Option<f64>,
    #[serde(default)]
    pub user: Option<BasicUser>,
    #[serde(default)]
    pub commit: Option<Commit>,
    pub pipeline: JobPipeline,
    pub web_url: String,
    #[serde(default)]
    pub artifacts: Vec<JobArtifact>,
    #[serde(default)]
    pub artifacts_file: Option<ArtifactsFile>,
    #[serde(default)]
    pub artifacts_expire_at: Option<DateTime>,
    #[serde(default)]
    pub runner: Option<Runner>,
    #[serde(default)]
    pub tag_list: Vec<String>,
    #[serde(default)]
    pub failure_reason: Option<String>,
}

/// A trigger job which starts a downstream pipeline
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Bridge {
    pub id: u64,
    pub status: String,
    pub stage: String,
    pub name: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    #[serde(default)]
    pub tag: bool,
    #[serde(default)]
    pub coverage: Option<f64>,
    #[serde(default)]
    pub allow_failure: bool,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub started_at: Option<DateTime>,
    #[serde(default)]
    pub finished_at: Option<DateTime>,
    #[serde(default)]
    pub erased_at: Option<DateTime>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub queued_duration: Option<f64>,
    #[serde(default)]
    pub user: Option<BasicUser>,
    #[serde(default)]
    pub commit: Option<Commit>,
    pub pipeline: JobPipeline,
    pub web_url: String,
    #[serde(default)]
    pub downstream_pipeline: Option<PipelineInfo>,
}

#[cfg(test)]
mod test {
    use super::{Job, TestReport, TestReportSummary};

    #[test]
    fn job() {
        const JSON: &str = include_str!("../test-input/job.json");

        let job: Job = serde_json::from_str(JSON).unwrap();
        assert_eq!(job.name, "rubocop");
        assert_eq!(job.git_ref, "master");
        assert_eq!(job.pipeline.id, 6);
        assert_eq!(job.artifacts_file.unwrap().filename, "artifacts.zip");
        assert_eq!(job.artifacts.len(), 2);
        assert_eq!(job.commit.unwrap().short_id, "0ff3ae19");
        assert!(job.runner.is_none());
        assert!(job.duration.unwrap() > 0.0);
    }

    #[test]
    fn test_report() {
        let report: TestReport = serde_json::from_str(
            r#"{
                "total_time": 5,
                "total_count": 1,
                "success_count": 1,
                "failed_count": 0,
                "skipped_count": 0,
                "error_count": 0,
                "test_suites": [{
                    "name": "Secure",
                    "total_time": 5,
                    "total_count": 1,
                    "success_count": 1,
                    "failed_count": 0,
                    "skipped_count": 0,
                    "error_count": 0,
                    "test_cases": [{
                        "status": "success",
                        "name": "Security Reports can create an auto-remediation MR",
                        "classname": "vulnerability_management_spec",
                        "execution_time": 5,
                        "system_output": null,
                        "stack_trace": null
                    }]
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(report.test_suites[0].test_cases[0].status, "success");

        let summary: TestReportSummary = serde_json::from_str(
            r#"{
                "total": {"time": 1904, "count": 3363, "success": 3351, "failed": 0, "skipped": 12, "error": 0, "suite_error": null},
                "test_suites": [{
                    "name": "test",
                    "total_time": 1904,
                    "total_count": 3363,
                    "success_count": 3351,
                    "failed_count": 0,
                    "skipped_count": 12,
                    "error_count": 0,
                    "build_ids": [66004],
                    "suite_error": null
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(summary.total.count, 3363);
        assert_eq!(summary.test_suites[0].build_ids, vec![66004]);
    }
}
