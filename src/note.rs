use super::{BasicUser, DateTime};
use serde::{Deserialize, Serialize};

/// A thread of notes attached to an issue, snippet, epic, merge request or commit.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Discussion {
    pub id: String,
    #[serde(default)]
    pub individual_note: bool,
    #[serde(default)]
    pub notes: Vec<Note>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/notes.html
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Note {
    pub id: u64,
    /// "DiffNote", "DiscussionNote" or absent for plain comments
    #[serde(default, rename = "type")]
    pub note_type: Option<String>,
    pub body: String,
    #[serde(default)]
    pub attachment: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    pub author: BasicUser,
    #[serde(default)]
    pub system: bool,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
    #[serde(default)]
    pub expires_at: Option<DateTime>,
    #[serde(default)]
    pub commit_id: Option<String>,
    #[serde(default)]
    pub position: Option<NotePosition>,
    #[serde(default)]
    pub resolvable: bool,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub resolved_by: Option<BasicUser>,
    #[serde(default)]
    pub resolved_at: Option<DateTime>,
    #[serde(default)]
    pub noteable_id: Option<u64>,
    #[serde(default)]
    pub noteable_iid: Option<u64>,
    #[serde(default)]
    pub noteable_type: Option<String>,
    #[serde(default)]
    pub confidential: bool,
    #[serde(default)]
    pub internal: bool,
}

/// Where a diff note is anchored. Sent when starting a thread on a diff and
/// returned on diff notes.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/discussions.html#create-a-new-thread-in-the-merge-request-diff
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct NotePosition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_sha: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_sha: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_sha: Option<String>,
    /// Either "text" or "image"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_line: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_line: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_range: Option<LineRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LineRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<LinePosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<LinePosition>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LinePosition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_code: Option<String>,
    /// Either "new" or "old"
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub line_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_line: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_line: Option<u64>,
}

#[cfg(test)]
mod test {
    use super::{Discussion, NotePosition};

    #[test]
    fn diff_discussion() {
        const JSON: &str = r#"
        {
          "id": "87805b7c09016a7058e91bdbe7b29d1f284a39e6",
          "individual_note": false,
          "notes": [
            {
              "id": 1128,
              "type": "DiffNote",
              "body": "diff comment",
              "attachment": null,
              "author": {
                "id": 1,
                "name": "root",
                "username": "root",
                "state": "active",
                "avatar_url": "https://www.gravatar.com/avatar/00afb8fb6ab07c3ee3e9c1f38777e2f4?s=80&d=identicon",
                "web_url": "http://localhost:3000/root"
              },
              "created_at": "2018-03-03T21:54:39.668Z",
              "updated_at": "2018-03-03T21:54:39.668Z",
              "system": false,
              "noteable_id": 3,
              "noteable_type": "MergeRequest",
              "noteable_iid": null,
              "commit_id": "4803c71e6b1833ca72b8b26ef2ecd5adc8a38031",
              "position": {
                "base_sha": "b5d6e7b1613fca24d250fa8e5bc7bcc3dd6002ef",
                "start_sha": "7c9c2ead8a320fb7ba0b4e234bd9529a2614e306",
                "head_sha": "4803c71e6b1833ca72b8b26ef2ecd5adc8a38031",
                "old_path": "package.json",
                "new_path": "package.json",
                "position_type": "text",
                "old_line": 27,
                "new_line": 27,
                "line_range": {
                  "start": {"line_code": "588440f66559714280628a4f9799f0c4eb880a4a_10_10", "type": "new", "old_line": null, "new_line": 10},
                  "end": {"line_code": "588440f66559714280628a4f9799f0c4eb880a4a_11_11", "type": "old", "old_line": 11, "new_line": 11}
                }
              },
              "resolved": false,
              "resolvable": true,
              "resolved_by": null,
              "confidential": false
            }
          ]
        }
        "#;

        let discussion: Discussion = serde_json::from_str(JSON).unwrap();
        let note = &discussion.notes[0];
        assert!(!discussion.individual_note);
        assert_eq!(note.note_type.as_deref(), Some("DiffNote"));
        assert!(note.resolvable);

        let range = note.position.as_ref().unwrap().line_range.as_ref().unwrap();
        assert_eq!(range.end.as_ref().unwrap().line_type.as_deref(), Some("old"));
    }

    #[test]
    fn position_omits_unset_fields() {
        let position = NotePosition {
            position_type: Some("text".to_owned()),
            new_path: Some("README.md".to_owned()),
            new_line: Some(3),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&position).unwrap(),
            serde_json::json!({"position_type": "text", "new_path": "README.md", "new_line": 3})
        );
    }
}
