use super::{DateTime, EventError, EventProject, MergeEvent, PushEvent, TagPushEvent};
use serde::{Deserialize, Serialize};

/// An instance-wide event delivered to a system hook.
///
/// GitLab API docs: https://docs.gitlab.com/ee/administration/system_hooks.html
#[derive(Clone, Debug)]
#[allow(clippy::large_enum_variant)]
pub enum SystemEvent {
    Project(ProjectSystemEvent),
    Group(GroupSystemEvent),
    Key(KeySystemEvent),
    User(UserSystemEvent),
    UserGroup(UserGroupSystemEvent),
    UserTeam(UserTeamSystemEvent),
    Push(PushEvent),
    TagPush(TagPushEvent),
    RepositoryUpdate(RepositoryUpdateSystemEvent),
    MergeRequest(MergeEvent),
}

/// Decode a system hook payload, dispatching on `event_name` and falling
/// back to `object_kind`.
pub fn parse_system_hook(payload: &[u8]) -> Result<SystemEvent, EventError> {
    SystemEvent::from_json(payload)
}

impl SystemEvent {
    pub fn from_json(json: &[u8]) -> Result<Self, EventError> {
        #[derive(Deserialize)]
        struct Discriminator {
            #[serde(default)]
            event_name: Option<String>,
            #[serde(default)]
            object_kind: Option<String>,
        }

        let Discriminator {
            event_name,
            object_kind,
        } = serde_json::from_slice(json)?;

        let event = match event_name.as_deref() {
            Some(
                "project_create" | "project_update" | "project_destroy" | "project_transfer"
                | "project_rename",
            ) => SystemEvent::Project(serde_json::from_slice(json)?),
            Some("group_create" | "group_destroy" | "group_rename") => {
                SystemEvent::Group(serde_json::from_slice(json)?)
            }
            Some("key_create" | "key_destroy") => SystemEvent::Key(serde_json::from_slice(json)?),
            Some("user_create" | "user_destroy" | "user_rename" | "user_failed_login") => {
                SystemEvent::User(serde_json::from_slice(json)?)
            }
            Some("user_add_to_group" | "user_remove_from_group" | "user_update_for_group") => {
                SystemEvent::UserGroup(serde_json::from_slice(json)?)
            }
            Some("user_add_to_team" | "user_update_for_team" | "user_remove_from_team") => {
                SystemEvent::UserTeam(serde_json::from_slice(json)?)
            }
            // repository_update payloads only carry an event_name
            _ => match object_kind.as_deref().or(event_name.as_deref()) {
                Some("push") => SystemEvent::Push(serde_json::from_slice(json)?),
                Some("tag_push") => SystemEvent::TagPush(serde_json::from_slice(json)?),
                Some("repository_update") => {
                    SystemEvent::RepositoryUpdate(serde_json::from_slice(json)?)
                }
                Some("merge_request") => SystemEvent::MergeRequest(serde_json::from_slice(json)?),
                other => {
                    return Err(EventError::UnexpectedSystemHookType(
                        other.unwrap_or_default().to_owned(),
                    ))
                }
            },
        };
        Ok(event)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProjectOwner {
    pub name: String,
    pub email: String,
}

/// GitLab API docs: https://docs.gitlab.com/ee/administration/system_hooks.html#hooks-request-example
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProjectSystemEvent {
    pub event_name: String,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
    pub name: String,
    pub path: String,
    pub path_with_namespace: String,
    pub project_id: u64,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub owner_email: Option<String>,
    #[serde(default)]
    pub owners: Vec<ProjectOwner>,
    /// private, internal or public
    #[serde(default)]
    pub project_visibility: Option<String>,
    /// Set on project_rename and project_transfer
    #[serde(default)]
    pub old_path_with_namespace: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GroupSystemEvent {
    pub event_name: String,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub full_path: Option<String>,
    pub group_id: u64,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub owner_email: Option<String>,
    #[serde(default)]
    pub old_path: Option<String>,
    #[serde(default)]
    pub old_full_path: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct KeySystemEvent {
    pub event_name: String,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
    pub id: u64,
    pub username: String,
    pub key: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UserSystemEvent {
    pub event_name: String,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub old_username: Option<String>,
    /// Only sent with user_failed_login
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UserGroupSystemEvent {
    pub event_name: String,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
    pub group_id: u64,
    pub group_name: String,
    pub group_path: String,
    #[serde(default)]
    pub group_plan: Option<String>,
    pub user_id: u64,
    pub user_name: String,
    pub user_username: String,
    #[serde(default)]
    pub user_email: Option<String>,
    pub group_access: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UserTeamSystemEvent {
    pub event_name: String,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
    pub access_level: String,
    pub project_id: u64,
    pub project_name: String,
    pub project_path: String,
    pub project_path_with_namespace: String,
    #[serde(default)]
    pub project_visibility: Option<String>,
    pub user_id: u64,
    pub user_name: String,
    pub user_username: String,
    #[serde(default)]
    pub user_email: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RefChange {
    pub before: String,
    pub after: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
}

/// Sent once per push instead of `push` when a push touches several refs
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RepositoryUpdateSystemEvent {
    pub event_name: String,
    pub user_id: u64,
    pub user_name: String,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub user_avatar: Option<String>,
    pub project_id: u64,
    pub project: EventProject,
    #[serde(default)]
    pub changes: Vec<RefChange>,
    #[serde(default)]
    pub refs: Vec<String>,
}

#[cfg(test)]
mod test {
    use super::{parse_system_hook, SystemEvent};
    use crate::EventError;

    #[test]
    fn project_create() {
        const JSON: &[u8] = include_bytes!("../test-input/system-project-create.json");

        let project = match parse_system_hook(JSON).unwrap() {
            SystemEvent::Project(project) => project,
            other => panic!("expected project event, got {:?}", other),
        };
        assert_eq!(project.event_name, "project_create");
        assert_eq!(project.path_with_namespace, "jsmith/storecloud");
        assert_eq!(project.owners[0].name, "John Smith");
        assert_eq!(project.project_visibility.as_deref(), Some("private"));
    }

    #[test]
    fn user_failed_login() {
        let json = br#"{
            "event_name": "user_failed_login",
            "created_at": "2017-10-03T06:08:48Z",
            "updated_at": "2018-01-15T04:52:06Z",
            "name": "John Smith",
            "email": "user4@example.com",
            "user_id": 26,
            "username": "user4",
            "state": "blocked"
        }"#;

        match parse_system_hook(json).unwrap() {
            SystemEvent::User(user) => assert_eq!(user.state.as_deref(), Some("blocked")),
            other => panic!("expected user event, got {:?}", other),
        }
    }

    #[test]
    fn push_falls_back_to_object_kind() {
        const JSON: &[u8] = include_bytes!("../test-input/push-event.json");

        match parse_system_hook(JSON).unwrap() {
            SystemEvent::Push(push) => assert_eq!(push.after, "da1560886d4f094c3e6c9ef40349f7d38b5d27d7"),
            other => panic!("expected push event, got {:?}", other),
        }
    }

    #[test]
    fn repository_update() {
        let json = br#"{
            "event_name": "repository_update",
            "user_id": 1,
            "user_name": "John Smith",
            "user_email": "admin@example.com",
            "project_id": 1,
            "project": {
                "name": "Example",
                "web_url": "http://example.com/jsmith/example",
                "path_with_namespace": "jsmith/example",
                "visibility_level": 0
            },
            "changes": [
                {
                    "before": "8205ea8d81ce0c6b90fbe8280d118cc9fdad6130",
                    "after": "4045ea7a3df38697b3730a20fb73c8bed8a3e69e",
                    "ref": "refs/heads/master"
                }
            ],
            "refs": ["refs/heads/master"]
        }"#;

        match parse_system_hook(json).unwrap() {
            SystemEvent::RepositoryUpdate(update) => {
                assert_eq!(update.changes[0].git_ref, "refs/heads/master");
                assert_eq!(update.refs, vec!["refs/heads/master"]);
            }
            other => panic!("expected repository update, got {:?}", other),
        }
    }

    #[test]
    fn unexpected_system_hook() {
        let err = parse_system_hook(br#"{"event_name": "runner_create"}"#).unwrap_err();
        assert!(matches!(err, EventError::UnexpectedSystemHookType(ref t) if t == "runner_create"));
    }
}
