use super::{AccessLevel, CustomAttribute, Date, DateTime, Project, ProjectStatistics, Visibility};
use serde::{Deserialize, Serialize};

/// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Group {
    pub id: u64,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub membership_lock: bool,
    #[serde(default)]
    pub visibility: Option<Visibility>,
    #[serde(default)]
    pub lfs_enabled: bool,
    #[serde(default)]
    pub default_branch_protection: Option<u64>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub web_url: String,
    #[serde(default)]
    pub request_access_enabled: bool,
    pub full_name: String,
    pub full_path: String,
    #[serde(default)]
    pub file_template_project_id: Option<u64>,
    #[serde(default)]
    pub parent_id: Option<u64>,
    /// Only populated when requested with `with_projects`
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub statistics: Option<ProjectStatistics>,
    #[serde(default)]
    pub custom_attributes: Vec<CustomAttribute>,
    #[serde(default)]
    pub share_with_group_lock: bool,
    #[serde(default, rename = "require_two_factor_authentication")]
    pub require_two_factor_auth: bool,
    #[serde(default)]
    pub two_factor_grace_period: Option<u64>,
    #[serde(default)]
    pub project_creation_level: Option<ProjectCreationLevel>,
    #[serde(default)]
    pub auto_devops_enabled: Option<bool>,
    #[serde(default)]
    pub subgroup_creation_level: Option<SubGroupCreationLevel>,
    #[serde(default)]
    pub emails_disabled: Option<bool>,
    #[serde(default)]
    pub mentions_disabled: Option<bool>,
    #[serde(default)]
    pub runners_token: Option<String>,
    #[serde(default)]
    pub shared_projects: Vec<Project>,
    #[serde(default)]
    pub shared_runners_enabled: Option<bool>,
    #[serde(default)]
    pub shared_with_groups: Vec<SharedWithGroup>,
    #[serde(default)]
    pub ldap_cn: Option<String>,
    #[serde(default)]
    pub ldap_access: Option<AccessLevel>,
    #[serde(default)]
    pub ldap_group_links: Vec<LdapGroupLink>,
    #[serde(default)]
    pub saml_group_links: Vec<SamlGroupLink>,
    #[serde(default)]
    pub shared_runners_minutes_limit: Option<u64>,
    #[serde(default)]
    pub extra_shared_runners_minutes_limit: Option<u64>,
    #[serde(default)]
    pub prevent_forking_outside_group: Option<bool>,
    #[serde(default)]
    pub marked_for_deletion_on: Option<Date>,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub ip_restriction_ranges: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SharedWithGroup {
    pub group_id: u64,
    pub group_name: String,
    pub group_full_path: String,
    pub group_access_level: AccessLevel,
    #[serde(default)]
    pub expires_at: Option<Date>,
}

/// Who may create projects within a group
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCreationLevel {
    Noone,
    Maintainer,
    Developer,
}

/// Who may create subgroups within a group
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubGroupCreationLevel {
    Owner,
    Maintainer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SharedRunnersSetting {
    Enabled,
    DisabledWithOverride,
    DisabledAndUnoverridable,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#ldap-group-links
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LdapGroupLink {
    #[serde(default)]
    pub cn: Option<String>,
    #[serde(default)]
    pub filter: Option<String>,
    pub group_access: AccessLevel,
    pub provider: String,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#saml-group-links
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SamlGroupLink {
    pub name: String,
    pub access_level: AccessLevel,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/groups.html#push-rules
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GroupPushRules {
    pub id: u64,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub commit_message_regex: Option<String>,
    #[serde(default)]
    pub commit_message_negative_regex: Option<String>,
    #[serde(default)]
    pub branch_name_regex: Option<String>,
    #[serde(default)]
    pub deny_delete_tag: bool,
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

#[cfg(test)]
mod test {
    use super::{Group, ProjectCreationLevel};
    use crate::{AccessLevel, Visibility};

    #[test]
    fn group() {
        const GROUP_JSON: &str = r#"
        {
          "id": 4,
          "name": "Twitter",
          "path": "twitter",
          "description": "Aliquid qui quis dignissimos distinctio ut commodi voluptas est.",
          "visibility": "public",
          "avatar_url": null,
          "web_url": "https://gitlab.example.com/groups/twitter",
          "request_access_enabled": false,
          "full_name": "Twitter",
          "full_path": "twitter",
          "runners_token": "ba324ca7b1c77fc20bb9",
          "file_template_project_id": 1,
          "parent_id": null,
          "project_creation_level": "developer",
          "created_at": "2020-01-15T12:36:29.590Z",
          "shared_with_groups": [
            {
              "group_id": 28,
              "group_name": "H5bp",
              "group_full_path": "h5bp",
              "group_access_level": 20,
              "expires_at": null
            }
          ],
          "ldap_group_links": [
            {"cn": "developers", "filter": null, "group_access": 30, "provider": "ldapmain"}
          ]
        }
        "#;

        let group: Group = serde_json::from_str(GROUP_JSON).unwrap();
        assert_eq!(group.full_path, "twitter");
        assert_eq!(group.visibility, Some(Visibility::Public));
        assert_eq!(
            group.project_creation_level,
            Some(ProjectCreationLevel::Developer)
        );
        assert_eq!(group.parent_id, None);
        assert_eq!(
            group.shared_with_groups[0].group_access_level,
            AccessLevel::Reporter
        );
        assert_eq!(group.ldap_group_links[0].group_access, AccessLevel::Developer);
        assert!(group.projects.is_empty());
    }
}
