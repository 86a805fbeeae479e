use crate::{
    client::{Client, Response, Result},
    Settings, Visibility,
};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Settings to change. Untyped settings can be set through `extra`, keyed by
/// their API name.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/settings.html#change-application-settings
#[derive(Clone, Debug, Default, Serialize)]
pub struct UpdateSettingsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_projects_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signup_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_authentication_enabled_for_web: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_authentication_enabled_for_git: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_two_factor_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_factor_grace_period: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_sign_out_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_project_visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_snippet_visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_group_visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted_visibility_levels: Option<Vec<Visibility>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch_protection: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_allowlist: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_denylist_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_denylist: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_sources: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attachment_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_artifacts_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_expire_delay: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravatar_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_devops_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_runners_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_runners_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_artifacts_expire_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plantuml_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plantuml_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_max_session_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_local_requests_from_web_hooks_and_services: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_local_requests_from_system_hooks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet_size_limit: Option<u64>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// `SettingsClient` handles communication with the application settings
/// related methods of the GitLab API. Both operations require an admin.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/settings.html
pub struct SettingsClient<'a> {
    inner: &'a Client,
}

impl<'a> SettingsClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/settings.html#get-current-application-settings
    pub async fn get(&self) -> Result<Response<Settings>> {
        let response = self.inner.get("application/settings").send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/settings.html#change-application-settings
    pub async fn update(&self, options: &UpdateSettingsOptions) -> Result<Response<Settings>> {
        let response = self
            .inner
            .put_with("application/settings", options)?
            .send()
            .await?;

        self.inner.json(response).await
    }
}
