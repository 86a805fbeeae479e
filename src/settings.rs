use super::{DateTime, Visibility};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Application settings of a GitLab instance.
///
/// Only the commonly used settings are typed; GitLab exposes several hundred
/// and adds new ones with most releases. Everything else ends up in `extra`.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/settings.html
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Settings {
    pub id: u64,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
    #[serde(default)]
    pub default_projects_limit: Option<u64>,
    #[serde(default)]
    pub signup_enabled: Option<bool>,
    #[serde(default)]
    pub password_authentication_enabled_for_web: Option<bool>,
    #[serde(default)]
    pub password_authentication_enabled_for_git: Option<bool>,
    #[serde(default)]
    pub require_two_factor_authentication: Option<bool>,
    #[serde(default)]
    pub two_factor_grace_period: Option<u64>,
    #[serde(default)]
    pub after_sign_out_path: Option<String>,
    #[serde(default)]
    pub home_page_url: Option<String>,
    #[serde(default)]
    pub default_project_visibility: Option<Visibility>,
    #[serde(default)]
    pub default_snippet_visibility: Option<Visibility>,
    #[serde(default)]
    pub default_group_visibility: Option<Visibility>,
    #[serde(default)]
    pub restricted_visibility_levels: Vec<Visibility>,
    #[serde(default)]
    pub default_branch_protection: Option<u64>,
    #[serde(default)]
    pub default_branch_name: Option<String>,
    #[serde(default)]
    pub domain_allowlist: Vec<String>,
    #[serde(default)]
    pub domain_denylist_enabled: Option<bool>,
    #[serde(default)]
    pub domain_denylist: Vec<String>,
    #[serde(default)]
    pub import_sources: Vec<String>,
    #[serde(default)]
    pub max_attachment_size: Option<u64>,
    #[serde(default)]
    pub max_artifacts_size: Option<u64>,
    #[serde(default)]
    pub max_pages_size: Option<u64>,
    #[serde(default)]
    pub session_expire_delay: Option<u64>,
    #[serde(default)]
    pub user_oauth_applications: Option<bool>,
    #[serde(default)]
    pub gravatar_enabled: Option<bool>,
    #[serde(default)]
    pub auto_devops_enabled: Option<bool>,
    #[serde(default)]
    pub shared_runners_enabled: Option<bool>,
    #[serde(default)]
    pub shared_runners_text: Option<String>,
    #[serde(default)]
    pub container_registry_token_expire_delay: Option<u64>,
    #[serde(default)]
    pub default_artifacts_expire_in: Option<String>,
    #[serde(default)]
    pub plantuml_enabled: Option<bool>,
    #[serde(default)]
    pub plantuml_url: Option<String>,
    #[serde(default)]
    pub terminal_max_session_time: Option<u64>,
    #[serde(default)]
    pub polling_interval_multiplier: Option<f64>,
    #[serde(default)]
    pub rsa_key_restriction: Option<i64>,
    #[serde(default)]
    pub dsa_key_restriction: Option<i64>,
    #[serde(default)]
    pub ecdsa_key_restriction: Option<i64>,
    #[serde(default)]
    pub ed25519_key_restriction: Option<i64>,
    #[serde(default)]
    pub local_markdown_version: Option<u64>,
    #[serde(default)]
    pub asset_proxy_enabled: Option<bool>,
    #[serde(default)]
    pub asset_proxy_url: Option<String>,
    #[serde(default)]
    pub asset_proxy_allowlist: Vec<String>,
    #[serde(default)]
    pub allow_local_requests_from_hooks_and_services: Option<bool>,
    #[serde(default)]
    pub allow_local_requests_from_web_hooks_and_services: Option<bool>,
    #[serde(default)]
    pub allow_local_requests_from_system_hooks: Option<bool>,
    #[serde(default)]
    pub performance_bar_allowed_group_id: Option<u64>,
    #[serde(default)]
    pub instance_statistics_visibility_private: Option<bool>,
    #[serde(default)]
    pub user_show_add_ssh_key_message: Option<bool>,
    #[serde(default)]
    pub snippet_size_limit: Option<u64>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Settings {
    /// Look up a setting that has no typed field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

#[cfg(test)]
mod test {
    use super::Settings;
    use crate::Visibility;

    #[test]
    fn unknown_settings_are_kept() {
        const JSON: &str = r#"
        {
          "id": 1,
          "default_projects_limit": 100000,
          "signup_enabled": true,
          "default_project_visibility": "private",
          "restricted_visibility_levels": ["public"],
          "domain_allowlist": [],
          "max_attachment_size": 10,
          "created_at": "2016-01-04T15:44:55.176Z",
          "container_expiration_policies_enable_historic_entries": true,
          "sidekiq_job_limiter_mode": "compress"
        }
        "#;

        let settings: Settings = serde_json::from_str(JSON).unwrap();
        assert_eq!(settings.default_projects_limit, Some(100000));
        assert_eq!(settings.default_project_visibility, Some(Visibility::Private));
        assert_eq!(settings.restricted_visibility_levels, vec![Visibility::Public]);
        assert_eq!(
            settings.get("sidekiq_job_limiter_mode"),
            Some(&serde_json::json!("compress"))
        );
        assert!(settings.extra.get("signup_enabled").is_none());
    }
}
