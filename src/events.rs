use super::{AccessLevel, Date, DateTime, NotePosition, SystemEvent, Visibility};
use serde::{de, Deserialize, Serialize};
use serde_json::Value;
use std::{collections::BTreeMap, fmt, str::FromStr};
use thiserror::Error;

/// The kind of a webhook delivery, as sent in the `X-Gitlab-Event` header.
///
/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhook_events.html
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    Build,
    Deployment,
    FeatureFlag,
    Issue,
    ConfidentialIssue,
    Job,
    Member,
    MergeRequest,
    Note,
    ConfidentialNote,
    Pipeline,
    Push,
    Release,
    Service,
    Subgroup,
    System,
    TagPush,
    WikiPage,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        use EventType::*;

        match self {
            Build => "Build Hook",
            Deployment => "Deployment Hook",
            FeatureFlag => "Feature Flag Hook",
            Issue => "Issue Hook",
            ConfidentialIssue => "Confidential Issue Hook",
            Job => "Job Hook",
            Member => "Member Hook",
            MergeRequest => "Merge Request Hook",
            Note => "Note Hook",
            ConfidentialNote => "Confidential Note Hook",
            Pipeline => "Pipeline Hook",
            Push => "Push Hook",
            Release => "Release Hook",
            Service => "Service Hook",
            Subgroup => "Subgroup Hook",
            System => "System Hook",
            TagPush => "Tag Push Hook",
            WikiPage => "Wiki Page Hook",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unexpected event type: {0}")]
pub struct ParseEventTypeError(pub String);

impl FromStr for EventType {
    type Err = ParseEventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use EventType::*;

        match s {
            "Build Hook" => Ok(Build),
            "Deployment Hook" => Ok(Deployment),
            "Feature Flag Hook" => Ok(FeatureFlag),
            "Issue Hook" => Ok(Issue),
            "Confidential Issue Hook" => Ok(ConfidentialIssue),
            "Job Hook" => Ok(Job),
            "Member Hook" => Ok(Member),
            "Merge Request Hook" => Ok(MergeRequest),
            "Note Hook" => Ok(Note),
            "Confidential Note Hook" => Ok(ConfidentialNote),
            "Pipeline Hook" => Ok(Pipeline),
            "Push Hook" => Ok(Push),
            "Release Hook" => Ok(Release),
            "Service Hook" => Ok(Service),
            "Subgroup Hook" => Ok(Subgroup),
            "System Hook" => Ok(System),
            "Tag Push Hook" => Ok(TagPush),
            "Wiki Page Hook" => Ok(WikiPage),
            _ => Err(ParseEventTypeError(s.to_owned())),
        }
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = <String>::deserialize(deserializer)?;
        Self::from_str(&s).map_err(de::Error::custom)
    }
}

/// Why a webhook payload could not be turned into an `Event`
#[derive(Error, Debug)]
pub enum EventError {
    #[error("unexpected event type: {0}")]
    UnexpectedEventType(String),

    #[error("unexpected noteable type {0}")]
    UnexpectedNoteableType(String),

    #[error("unexpected service type {0}")]
    UnexpectedServiceType(String),

    #[error("unexpected system hook type {0}")]
    UnexpectedSystemHookType(String),

    #[error("json error")]
    Json(#[from] serde_json::Error),
}

impl From<ParseEventTypeError> for EventError {
    fn from(error: ParseEventTypeError) -> Self {
        EventError::UnexpectedEventType(error.0)
    }
}

/// Decode a webhook payload given the value of its `X-Gitlab-Event` header.
pub fn parse_webhook(event_type: &str, payload: &[u8]) -> Result<Event, EventError> {
    let event_type = event_type.parse::<EventType>()?;
    Event::from_json(&event_type, payload)
}

#[derive(Clone, Debug)]
#[allow(clippy::large_enum_variant)]
pub enum Event {
    Build(JobEvent),
    Deployment(DeploymentEvent),
    FeatureFlag(FeatureFlagEvent),
    Issue(IssueEvent),
    Job(JobEvent),
    Member(MemberEvent),
    MergeRequest(MergeEvent),
    Note(NoteEvent),
    Pipeline(PipelineEvent),
    Push(PushEvent),
    Release(ReleaseEvent),
    Service(ServiceEvent),
    Subgroup(SubgroupEvent),
    System(SystemEvent),
    TagPush(TagPushEvent),
    WikiPage(WikiPageEvent),
}

impl Event {
    pub fn from_json(event_type: &EventType, json: &[u8]) -> Result<Self, EventError> {
        let event = match event_type {
            EventType::Build => Event::Build(serde_json::from_slice(json)?),
            EventType::Deployment => Event::Deployment(serde_json::from_slice(json)?),
            EventType::FeatureFlag => Event::FeatureFlag(serde_json::from_slice(json)?),
            EventType::Issue | EventType::ConfidentialIssue => {
                Event::Issue(serde_json::from_slice(json)?)
            }
            EventType::Job => Event::Job(serde_json::from_slice(json)?),
            EventType::Member => Event::Member(serde_json::from_slice(json)?),
            EventType::MergeRequest => Event::MergeRequest(serde_json::from_slice(json)?),
            EventType::Note | EventType::ConfidentialNote => Event::Note(NoteEvent::from_json(json)?),
            EventType::Pipeline => Event::Pipeline(serde_json::from_slice(json)?),
            EventType::Push => Event::Push(serde_json::from_slice(json)?),
            EventType::Release => Event::Release(serde_json::from_slice(json)?),
            EventType::Service => Event::Service(ServiceEvent::from_json(json)?),
            EventType::Subgroup => Event::Subgroup(serde_json::from_slice(json)?),
            EventType::System => Event::System(SystemEvent::from_json(json)?),
            EventType::TagPush => Event::TagPush(serde_json::from_slice(json)?),
            EventType::WikiPage => Event::WikiPage(serde_json::from_slice(json)?),
        };
        Ok(event)
    }

    /// Confidential issue and note deliveries report their public counterpart
    pub fn event_type(&self) -> EventType {
        match &self {
            Event::Build(_) => EventType::Build,
            Event::Deployment(_) => EventType::Deployment,
            Event::FeatureFlag(_) => EventType::FeatureFlag,
            Event::Issue(_) => EventType::Issue,
            Event::Job(_) => EventType::Job,
            Event::Member(_) => EventType::Member,
            Event::MergeRequest(_) => EventType::MergeRequest,
            Event::Note(_) => EventType::Note,
            Event::Pipeline(_) => EventType::Pipeline,
            Event::Push(_) => EventType::Push,
            Event::Release(_) => EventType::Release,
            Event::Service(_) => EventType::Service,
            Event::Subgroup(_) => EventType::Subgroup,
            Event::System(_) => EventType::System,
            Event::TagPush(_) => EventType::TagPush,
            Event::WikiPage(_) => EventType::WikiPage,
        }
    }
}

/// A comment, dispatched on the type of the object it was left on.
///
/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhook_events.html#comment-events
#[derive(Clone, Debug)]
pub enum NoteEvent {
    Commit(CommitCommentEvent),
    MergeRequest(MergeCommentEvent),
    Issue(IssueCommentEvent),
    Snippet(SnippetCommentEvent),
}

impl NoteEvent {
    pub fn from_json(json: &[u8]) -> Result<Self, EventError> {
        #[derive(Deserialize)]
        struct Noteable {
            noteable_type: String,
        }

        #[derive(Deserialize)]
        struct Discriminator {
            object_attributes: Noteable,
        }

        let discriminator: Discriminator = serde_json::from_slice(json)?;
        let event = match discriminator.object_attributes.noteable_type.as_str() {
            "Commit" => NoteEvent::Commit(serde_json::from_slice(json)?),
            "MergeRequest" => NoteEvent::MergeRequest(serde_json::from_slice(json)?),
            "Issue" => NoteEvent::Issue(serde_json::from_slice(json)?),
            "Snippet" => NoteEvent::Snippet(serde_json::from_slice(json)?),
            other => return Err(EventError::UnexpectedNoteableType(other.to_owned())),
        };
        Ok(event)
    }

    pub fn note(&self) -> &NoteAttributes {
        match self {
            NoteEvent::Commit(event) => &event.object_attributes,
            NoteEvent::MergeRequest(event) => &event.object_attributes,
            NoteEvent::Issue(event) => &event.object_attributes,
            NoteEvent::Snippet(event) => &event.object_attributes,
        }
    }
}

/// An event relayed by a service integration, dispatched on `object_kind`
#[derive(Clone, Debug)]
pub enum ServiceEvent {
    Push(PushEvent),
    TagPush(TagPushEvent),
    MergeRequest(MergeEvent),
}

impl ServiceEvent {
    pub fn from_json(json: &[u8]) -> Result<Self, EventError> {
        #[derive(Deserialize)]
        struct Discriminator {
            object_kind: String,
        }

        let discriminator: Discriminator = serde_json::from_slice(json)?;
        let event = match discriminator.object_kind.as_str() {
            "push" => ServiceEvent::Push(serde_json::from_slice(json)?),
            "tag_push" => ServiceEvent::TagPush(serde_json::from_slice(json)?),
            "merge_request" => ServiceEvent::MergeRequest(serde_json::from_slice(json)?),
            other => return Err(EventError::UnexpectedServiceType(other.to_owned())),
        };
        Ok(event)
    }
}

/// The user responsible for an event
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EventUser {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// The project an event happened in
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EventProject {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub web_url: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub git_ssh_url: Option<String>,
    #[serde(default)]
    pub git_http_url: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
    /// 0 private, 10 internal, 20 public
    #[serde(default)]
    pub visibility_level: Option<u64>,
    pub path_with_namespace: String,
    #[serde(default)]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub ci_config_path: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EventRepository {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub git_http_url: Option<String>,
    #[serde(default)]
    pub git_ssh_url: Option<String>,
    #[serde(default)]
    pub visibility_level: Option<u64>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EventCommitAuthor {
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EventCommit {
    pub id: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub author: Option<EventCommitAuthor>,
    #[serde(default)]
    pub added: Vec<String>,
    #[serde(default)]
    pub modified: Vec<String>,
    #[serde(default)]
    pub removed: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EventLabel {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub project_id: Option<u64>,
    #[serde(default)]
    pub group_id: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub label_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
}

/// A before/after pair describing how one attribute changed
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventChange {
    #[serde(default)]
    pub previous: Value,
    #[serde(default)]
    pub current: Value,
}

/// Attribute changes keyed by attribute name
pub type EventChanges = BTreeMap<String, EventChange>;

/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhook_events.html#push-events
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PushEvent {
    #[serde(default)]
    pub object_kind: Option<String>,
    #[serde(default)]
    pub event_name: Option<String>,
    pub before: String,
    pub after: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    #[serde(default)]
    pub ref_protected: Option<bool>,
    #[serde(default)]
    pub checkout_sha: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    pub user_id: u64,
    pub user_name: String,
    #[serde(default)]
    pub user_username: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub user_avatar: Option<String>,
    pub project_id: u64,
    pub project: EventProject,
    #[serde(default)]
    pub repository: Option<EventRepository>,
    #[serde(default)]
    pub commits: Vec<EventCommit>,
    #[serde(default)]
    pub total_commits_count: u64,
}

/// Tag pushes carry the same payload as branch pushes
///
/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhook_events.html#tag-events
pub type TagPushEvent = PushEvent;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct IssueAttributes {
    pub id: u64,
    pub iid: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    /// open, close, reopen or update; absent on comment events
    #[serde(default)]
    pub action: Option<String>,
    pub project_id: u64,
    #[serde(default)]
    pub author_id: Option<u64>,
    #[serde(default)]
    pub assignee_id: Option<u64>,
    #[serde(default)]
    pub assignee_ids: Vec<u64>,
    #[serde(default)]
    pub milestone_id: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
    #[serde(default)]
    pub closed_at: Option<DateTime>,
    #[serde(default)]
    pub due_date: Option<Date>,
    #[serde(default)]
    pub confidential: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub labels: Vec<EventLabel>,
    #[serde(default)]
    pub weight: Option<u64>,
    #[serde(default)]
    pub time_estimate: Option<i64>,
    #[serde(default)]
    pub total_time_spent: Option<i64>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhook_events.html#issue-events
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct IssueEvent {
    pub object_kind: String,
    #[serde(default)]
    pub event_type: Option<String>,
    pub user: EventUser,
    pub project: EventProject,
    #[serde(default)]
    pub repository: Option<EventRepository>,
    pub object_attributes: IssueAttributes,
    #[serde(default)]
    pub assignees: Vec<EventUser>,
    #[serde(default)]
    pub labels: Vec<EventLabel>,
    #[serde(default)]
    pub changes: EventChanges,
}

/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhook_events.html#job-events
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct JobEvent {
    pub object_kind: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    #[serde(default)]
    pub tag: bool,
    #[serde(default)]
    pub before_sha: Option<String>,
    pub sha: String,
    pub build_id: u64,
    pub build_name: String,
    pub build_stage: String,
    pub build_status: String,
    #[serde(default)]
    pub build_created_at: Option<DateTime>,
    #[serde(default)]
    pub build_started_at: Option<DateTime>,
    #[serde(default)]
    pub build_finished_at: Option<DateTime>,
    #[serde(default)]
    pub build_duration: Option<f64>,
    #[serde(default)]
    pub build_queued_duration: Option<f64>,
    #[serde(default)]
    pub build_allow_failure: bool,
    #[serde(default)]
    pub build_failure_reason: Option<String>,
    #[serde(default)]
    pub pipeline_id: Option<u64>,
    pub project_id: u64,
    pub project_name: String,
    #[serde(default)]
    pub user: Option<EventUser>,
    #[serde(default)]
    pub commit: Option<JobEventCommit>,
    #[serde(default)]
    pub repository: Option<EventRepository>,
    #[serde(default)]
    pub runner: Option<EventRunner>,
    #[serde(default)]
    pub environment: Option<EventEnvironment>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct JobEventCommit {
    pub id: u64,
    pub sha: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub started_at: Option<DateTime>,
    #[serde(default)]
    pub finished_at: Option<DateTime>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EventRunner {
    pub id: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub is_shared: bool,
    #[serde(default)]
    pub runner_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EventEnvironment {
    pub name: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub deployment_tier: Option<String>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhook_events.html#deployment-events
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeploymentEvent {
    pub object_kind: String,
    pub status: String,
    #[serde(default)]
    pub status_changed_at: Option<DateTime>,
    pub deployment_id: u64,
    #[serde(default)]
    pub deployable_id: Option<u64>,
    #[serde(default)]
    pub deployable_url: Option<String>,
    pub environment: String,
    #[serde(default)]
    pub environment_tier: Option<String>,
    pub project: EventProject,
    pub short_sha: String,
    #[serde(default)]
    pub user: Option<EventUser>,
    #[serde(default)]
    pub user_url: Option<String>,
    #[serde(default)]
    pub commit_url: Option<String>,
    #[serde(default)]
    pub commit_title: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FeatureFlagAttributes {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub active: bool,
}

/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhook_events.html#feature-flag-events
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FeatureFlagEvent {
    pub object_kind: String,
    pub project: EventProject,
    pub user: EventUser,
    #[serde(default)]
    pub user_url: Option<String>,
    pub object_attributes: FeatureFlagAttributes,
}

/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhook_events.html#group-member-events
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MemberEvent {
    /// user_add_to_group, user_update_for_group or user_remove_from_group
    pub event_name: String,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
    pub group_name: String,
    pub group_path: String,
    pub group_id: u64,
    pub user_username: String,
    pub user_name: String,
    #[serde(default)]
    pub user_email: Option<String>,
    pub user_id: u64,
    /// The role name, e.g. "Developer"
    pub group_access: String,
    #[serde(default)]
    pub group_plan: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MergeRequestAttributes {
    pub id: u64,
    pub iid: u64,
    pub target_branch: String,
    pub source_branch: String,
    #[serde(default)]
    pub source_project_id: Option<u64>,
    #[serde(default)]
    pub target_project_id: Option<u64>,
    #[serde(default)]
    pub author_id: Option<u64>,
    #[serde(default)]
    pub assignee_id: Option<u64>,
    #[serde(default)]
    pub assignee_ids: Vec<u64>,
    #[serde(default)]
    pub reviewer_ids: Vec<u64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
    #[serde(default)]
    pub milestone_id: Option<u64>,
    pub state: String,
    #[serde(default)]
    pub merge_status: Option<String>,
    #[serde(default)]
    pub detailed_merge_status: Option<String>,
    #[serde(default)]
    pub merge_commit_sha: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source: Option<EventProject>,
    #[serde(default)]
    pub target: Option<EventProject>,
    #[serde(default)]
    pub last_commit: Option<EventCommit>,
    #[serde(default)]
    pub work_in_progress: bool,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub head_pipeline_id: Option<u64>,
    #[serde(default)]
    pub blocking_discussions_resolved: Option<bool>,
    #[serde(default)]
    pub labels: Vec<EventLabel>,
    /// open, close, reopen, update, approved, unapproved, approval,
    /// unapproval or merge; absent on comment events
    #[serde(default)]
    pub action: Option<String>,
    /// Previous head of the source branch when new commits were pushed
    #[serde(default)]
    pub oldrev: Option<String>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhook_events.html#merge-request-events
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MergeEvent {
    pub object_kind: String,
    #[serde(default)]
    pub event_type: Option<String>,
    pub user: EventUser,
    pub project: EventProject,
    #[serde(default)]
    pub repository: Option<EventRepository>,
    pub object_attributes: MergeRequestAttributes,
    #[serde(default)]
    pub labels: Vec<EventLabel>,
    #[serde(default)]
    pub changes: EventChanges,
    #[serde(default)]
    pub assignees: Vec<EventUser>,
    #[serde(default)]
    pub reviewers: Vec<EventUser>,
}

/// The comment itself, common to every `NoteEvent`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NoteAttributes {
    pub id: u64,
    pub note: String,
    pub noteable_type: String,
    #[serde(default)]
    pub noteable_id: Option<u64>,
    #[serde(default)]
    pub author_id: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
    #[serde(default)]
    pub project_id: Option<u64>,
    #[serde(default)]
    pub attachment: Option<String>,
    #[serde(default)]
    pub line_code: Option<String>,
    #[serde(default)]
    pub commit_id: Option<String>,
    #[serde(default)]
    pub discussion_id: Option<String>,
    #[serde(default)]
    pub system: bool,
    #[serde(default)]
    pub st_diff: Option<Value>,
    #[serde(default)]
    pub position: Option<NotePosition>,
    #[serde(default, rename = "type")]
    pub note_type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Either "create" or "update"
    #[serde(default)]
    pub action: Option<String>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhook_events.html#comment-on-a-commit
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CommitCommentEvent {
    pub object_kind: String,
    #[serde(default)]
    pub event_type: Option<String>,
    pub user: EventUser,
    pub project_id: u64,
    pub project: EventProject,
    #[serde(default)]
    pub repository: Option<EventRepository>,
    pub object_attributes: NoteAttributes,
    pub commit: EventCommit,
}

/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhook_events.html#comment-on-a-merge-request
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MergeCommentEvent {
    pub object_kind: String,
    #[serde(default)]
    pub event_type: Option<String>,
    pub user: EventUser,
    pub project_id: u64,
    pub project: EventProject,
    #[serde(default)]
    pub repository: Option<EventRepository>,
    pub object_attributes: NoteAttributes,
    pub merge_request: MergeRequestAttributes,
}

/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhook_events.html#comment-on-an-issue
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct IssueCommentEvent {
    pub object_kind: String,
    #[serde(default)]
    pub event_type: Option<String>,
    pub user: EventUser,
    pub project_id: u64,
    pub project: EventProject,
    #[serde(default)]
    pub repository: Option<EventRepository>,
    pub object_attributes: NoteAttributes,
    pub issue: IssueAttributes,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EventSnippet {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author_id: Option<u64>,
    #[serde(default)]
    pub project_id: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default, rename = "type")]
    pub snippet_type: Option<String>,
    #[serde(default)]
    pub visibility_level: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhook_events.html#comment-on-a-code-snippet
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SnippetCommentEvent {
    pub object_kind: String,
    #[serde(default)]
    pub event_type: Option<String>,
    pub user: EventUser,
    pub project_id: u64,
    pub project: EventProject,
    #[serde(default)]
    pub repository: Option<EventRepository>,
    pub object_attributes: NoteAttributes,
    pub snippet: EventSnippet,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PipelineAttributes {
    pub id: u64,
    #[serde(default)]
    pub iid: Option<u64>,
    #[serde(rename = "ref")]
    pub git_ref: String,
    #[serde(default)]
    pub tag: bool,
    pub sha: String,
    #[serde(default)]
    pub before_sha: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    pub status: String,
    #[serde(default)]
    pub detailed_status: Option<String>,
    #[serde(default)]
    pub stages: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub finished_at: Option<DateTime>,
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub queued_duration: Option<u64>,
    #[serde(default)]
    pub variables: Vec<PipelineEventVariable>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PipelineEventVariable {
    pub key: String,
    pub value: String,
}

/// The merge request a merge request pipeline ran for
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PipelineMergeRequest {
    pub id: u64,
    pub iid: u64,
    pub title: String,
    pub source_branch: String,
    #[serde(default)]
    pub source_project_id: Option<u64>,
    pub target_branch: String,
    #[serde(default)]
    pub target_project_id: Option<u64>,
    pub state: String,
    #[serde(default)]
    pub merge_status: Option<String>,
    #[serde(default)]
    pub detailed_merge_status: Option<String>,
    pub url: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PipelineBuild {
    pub id: u64,
    pub stage: String,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub started_at: Option<DateTime>,
    #[serde(default)]
    pub finished_at: Option<DateTime>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub queued_duration: Option<f64>,
    #[serde(default)]
    pub failure_reason: Option<String>,
    /// on_success, manual, always, ...
    #[serde(default)]
    pub when: Option<String>,
    #[serde(default)]
    pub manual: bool,
    #[serde(default)]
    pub allow_failure: bool,
    #[serde(default)]
    pub user: Option<EventUser>,
    #[serde(default)]
    pub runner: Option<EventRunner>,
    #[serde(default)]
    pub environment: Option<EventEnvironment>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhook_events.html#pipeline-events
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PipelineEvent {
    pub object_kind: String,
    pub object_attributes: PipelineAttributes,
    #[serde(default)]
    pub merge_request: Option<PipelineMergeRequest>,
    #[serde(default)]
    pub user: Option<EventUser>,
    pub project: EventProject,
    #[serde(default)]
    pub commit: Option<EventCommit>,
    #[serde(default)]
    pub builds: Vec<PipelineBuild>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ReleaseLink {
    pub id: u64,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub external: bool,
    #[serde(default)]
    pub link_type: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ReleaseSource {
    pub format: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ReleaseAssets {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub links: Vec<ReleaseLink>,
    #[serde(default)]
    pub sources: Vec<ReleaseSource>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhook_events.html#release-events
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ReleaseEvent {
    pub id: u64,
    pub object_kind: String,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub released_at: Option<DateTime>,
    #[serde(default)]
    pub description: Option<String>,
    pub name: String,
    pub tag: String,
    pub url: String,
    /// create, update or delete
    pub action: String,
    pub project: EventProject,
    #[serde(default)]
    pub assets: ReleaseAssets,
    #[serde(default)]
    pub commit: Option<EventCommit>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhook_events.html#subgroup-events
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SubgroupEvent {
    /// subgroup_create or subgroup_destroy
    pub event_name: String,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
    pub name: String,
    pub path: String,
    pub full_path: String,
    pub group_id: u64,
    pub parent_group_id: u64,
    pub parent_name: String,
    pub parent_path: String,
    pub parent_full_path: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EventWiki {
    pub web_url: String,
    #[serde(default)]
    pub git_ssh_url: Option<String>,
    #[serde(default)]
    pub git_http_url: Option<String>,
    pub path_with_namespace: String,
    #[serde(default)]
    pub default_branch: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WikiPageAttributes {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    pub slug: String,
    pub url: String,
    /// create, update or delete
    pub action: String,
    #[serde(default)]
    pub diff_url: Option<String>,
    #[serde(default)]
    pub version_id: Option<String>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhook_events.html#wiki-page-events
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WikiPageEvent {
    pub object_kind: String,
    pub user: EventUser,
    pub project: EventProject,
    pub wiki: EventWiki,
    pub object_attributes: WikiPageAttributes,
}

impl EventProject {
    pub fn visibility(&self) -> Option<Visibility> {
        match self.visibility_level? {
            0 => Some(Visibility::Private),
            10 => Some(Visibility::Internal),
            20 => Some(Visibility::Public),
            _ => None,
        }
    }
}

impl MemberEvent {
    /// `group_access` as an `AccessLevel`, when it names a known role
    pub fn access_level(&self) -> Option<AccessLevel> {
        match self.group_access.as_str() {
            "Minimal Access" => Some(AccessLevel::MinimalAccess),
            "Guest" => Some(AccessLevel::Guest),
            "Reporter" => Some(AccessLevel::Reporter),
            "Developer" => Some(AccessLevel::Developer),
            "Maintainer" => Some(AccessLevel::Maintainer),
            "Owner" => Some(AccessLevel::Owner),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{parse_webhook, Event, EventError, EventType, NoteEvent, ServiceEvent};
    use crate::{AccessLevel, SystemEvent, Visibility};

    #[test]
    fn event_type_round_trips_header_values() {
        for header in &[
            "Push Hook",
            "Tag Push Hook",
            "Confidential Note Hook",
            "Feature Flag Hook",
            "System Hook",
        ] {
            let event_type: EventType = header.parse().unwrap();
            assert_eq!(event_type.as_str(), *header);
        }
    }

    #[test]
    fn unknown_event_type() {
        let err = parse_webhook("Emoji Party Hook", b"{}").unwrap_err();
        assert!(matches!(err, EventError::UnexpectedEventType(_)));
        assert_eq!(err.to_string(), "unexpected event type: Emoji Party Hook");
    }

    #[test]
    fn push() {
        const JSON: &[u8] = include_bytes!("../test-input/push-event.json");

        let event = parse_webhook("Push Hook", JSON).unwrap();
        assert_eq!(event.event_type(), EventType::Push);

        let push = match event {
            Event::Push(push) => push,
            other => panic!("expected push event, got {:?}", other.event_type()),
        };
        assert_eq!(push.git_ref, "refs/heads/master");
        assert_eq!(push.user_username.as_deref(), Some("jsmith"));
        assert_eq!(push.project.path_with_namespace, "mike/diaspora");
        assert_eq!(push.project.visibility(), Some(Visibility::Public));
        assert_eq!(push.commits.len(), 2);
        assert_eq!(push.commits[1].added, vec!["CHANGELOG"]);
        assert_eq!(push.total_commits_count, 4);
    }

    #[test]
    fn tag_push_uses_push_payload() {
        const JSON: &[u8] = include_bytes!("../test-input/push-event.json");

        let event = parse_webhook("Tag Push Hook", JSON).unwrap();
        assert!(matches!(event, Event::TagPush(_)));
    }

    #[test]
    fn issue_comment() {
        const JSON: &[u8] = include_bytes!("../test-input/note-issue-event.json");

        let note = match parse_webhook("Note Hook", JSON).unwrap() {
            Event::Note(NoteEvent::Issue(note)) => note,
            other => panic!("expected issue comment, got {:?}", other),
        };
        assert_eq!(note.object_attributes.note, "Hello world");
        assert_eq!(note.issue.iid, 23);
        assert_eq!(note.issue.labels[0].title, "API");
        assert_eq!(note.user.username, "root");
    }

    #[test]
    fn confidential_note_dispatches_like_note() {
        const JSON: &[u8] = include_bytes!("../test-input/note-issue-event.json");

        let event = parse_webhook("Confidential Note Hook", JSON).unwrap();
        match event {
            Event::Note(note) => assert_eq!(note.note().noteable_type, "Issue"),
            other => panic!("expected note, got {:?}", other),
        }
    }

    #[test]
    fn unexpected_noteable_type() {
        const JSON: &[u8] = include_bytes!("../test-input/note-wiki-event.json");

        let err = parse_webhook("Note Hook", JSON).unwrap_err();
        assert!(matches!(err, EventError::UnexpectedNoteableType(ref t) if t == "Wiki"));
        assert_eq!(err.to_string(), "unexpected noteable type Wiki");
    }

    #[test]
    fn merge_request_comment() {
        let json = serde_json::json!({
            "object_kind": "note",
            "event_type": "note",
            "user": {"id": 1, "name": "Administrator", "username": "root", "email": "admin@example.com"},
            "project_id": 5,
            "project": {
                "id": 5,
                "name": "Gitlab Test",
                "web_url": "http://example.com/gitlabhq/gitlab-test",
                "path_with_namespace": "gitlabhq/gitlab-test",
                "visibility_level": 20
            },
            "object_attributes": {
                "id": 1244,
                "note": "This MR needs work.",
                "noteable_type": "MergeRequest",
                "author_id": 1,
                "created_at": "2015-05-17 18:21:36 UTC",
                "updated_at": "2015-05-17 18:21:36 UTC",
                "project_id": 5,
                "noteable_id": 7,
                "system": false,
                "url": "http://example.com/gitlab-org/gitlab-test/merge_requests/1#note_1244"
            },
            "merge_request": {
                "id": 7,
                "iid": 1,
                "target_branch": "markdown",
                "source_branch": "master",
                "source_project_id": 5,
                "target_project_id": 5,
                "author_id": 8,
                "title": "Tempora et eos debitis quae laborum et.",
                "created_at": "2015-03-01 20:12:53 UTC",
                "updated_at": "2015-03-21 18:27:27 UTC",
                "state": "opened",
                "merge_status": "cannot_be_merged",
                "work_in_progress": false
            }
        });

        let event = parse_webhook("Note Hook", json.to_string().as_bytes()).unwrap();
        match event {
            Event::Note(NoteEvent::MergeRequest(note)) => {
                assert_eq!(note.merge_request.iid, 1);
                assert_eq!(note.object_attributes.noteable_id, Some(7));
            }
            other => panic!("expected merge request comment, got {:?}", other),
        }
    }

    #[test]
    fn service_hook_dispatches_on_object_kind() {
        const JSON: &[u8] = include_bytes!("../test-input/push-event.json");

        match parse_webhook("Service Hook", JSON).unwrap() {
            Event::Service(ServiceEvent::Push(push)) => assert_eq!(push.project_id, 15),
            other => panic!("expected service push, got {:?}", other),
        }

        let err = parse_webhook("Service Hook", br#"{"object_kind": "build"}"#).unwrap_err();
        assert_eq!(err.to_string(), "unexpected service type build");
    }

    #[test]
    fn unexpected_service_type() {
        const JSON: &[u8] = include_bytes!("../test-input/pipeline-event.json");

        let err = parse_webhook("Service Hook", JSON).unwrap_err();
        assert!(matches!(err, EventError::UnexpectedServiceType(ref t) if t == "pipeline"));
        assert_eq!(err.to_string(), "unexpected service type pipeline");
    }

    #[test]
    fn pipeline() {
        const JSON: &[u8] = include_bytes!("../test-input/pipeline-event.json");

        let pipeline = match parse_webhook("Pipeline Hook", JSON).unwrap() {
            Event::Pipeline(pipeline) => pipeline,
            other => panic!("expected pipeline, got {:?}", other),
        };
        assert_eq!(pipeline.object_attributes.git_ref, "master");
        assert_eq!(pipeline.object_attributes.stages, vec!["build", "test", "deploy"]);
        assert_eq!(pipeline.merge_request.unwrap().iid, 1);
        assert_eq!(pipeline.builds.len(), 2);
        assert!(pipeline.builds[1].manual);
        assert!(pipeline.builds[1].runner.is_none());
    }

    #[test]
    fn system_hook_header() {
        const JSON: &[u8] = include_bytes!("../test-input/system-project-create.json");

        match parse_webhook("System Hook", JSON).unwrap() {
            Event::System(SystemEvent::Project(project)) => {
                assert_eq!(project.event_name, "project_create")
            }
            other => panic!("expected project system event, got {:?}", other),
        }
    }

    #[test]
    fn member() {
        let json = br#"{
            "created_at": "2020-12-11T04:57:22Z",
            "updated_at": "2020-12-11T04:57:22Z",
            "group_name": "webhook-test",
            "group_path": "webhook-test",
            "group_id": 100,
            "user_username": "test_user",
            "user_name": "Test User",
            "user_email": "testuser@webhooktest.com",
            "user_id": 64,
            "group_access": "Guest",
            "group_plan": null,
            "expires_at": "2020-12-14T00:00:00Z",
            "event_name": "user_add_to_group"
        }"#;

        match parse_webhook("Member Hook", json).unwrap() {
            Event::Member(member) => assert_eq!(member.access_level(), Some(AccessLevel::Guest)),
            other => panic!("expected member event, got {:?}", other),
        }
    }

    #[test]
    fn malformed_payload() {
        let err = parse_webhook("Push Hook", b"{not json").unwrap_err();
        assert!(matches!(err, EventError::Json(_)));
    }
}
