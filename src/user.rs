use super::{AccessLevel, Date, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub public_email: Option<String>,
    #[serde(default)]
    pub skype: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub extern_uid: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub theme_id: Option<u64>,
    #[serde(default)]
    pub last_activity_on: Option<Date>,
    #[serde(default)]
    pub color_scheme_id: Option<u64>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub can_create_group: bool,
    #[serde(default)]
    pub can_create_project: bool,
    #[serde(default)]
    pub projects_limit: Option<u64>,
    #[serde(default)]
    pub current_sign_in_at: Option<DateTime>,
    #[serde(default)]
    pub current_sign_in_ip: Option<String>,
    #[serde(default)]
    pub last_sign_in_at: Option<DateTime>,
    #[serde(default)]
    pub last_sign_in_ip: Option<String>,
    #[serde(default)]
    pub confirmed_at: Option<DateTime>,
    #[serde(default)]
    pub two_factor_enabled: bool,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub identities: Vec<UserIdentity>,
    #[serde(default)]
    pub external: bool,
    #[serde(default)]
    pub private_profile: bool,
    #[serde(default)]
    pub shared_runners_minutes_limit: Option<u64>,
    #[serde(default)]
    pub extra_shared_runners_minutes_limit: Option<u64>,
    #[serde(default)]
    pub using_license_seat: bool,
    #[serde(default)]
    pub custom_attributes: Vec<CustomAttribute>,
    #[serde(default)]
    pub namespace_id: Option<u64>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UserIdentity {
    pub provider: String,
    pub extern_uid: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CustomAttribute {
    pub key: String,
    pub value: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    NotSet,
    Busy,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UserStatus {
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub availability: Option<Availability>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub message_html: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SshKey {
    pub id: u64,
    pub title: String,
    pub key: String,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub expires_at: Option<DateTime>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GpgKey {
    pub id: u64,
    pub key: String,
    #[serde(default)]
    pub created_at: Option<DateTime>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Email {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub confirmed_at: Option<DateTime>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ImpersonationToken {
    pub id: u64,
    pub name: String,
    pub active: bool,
    /// Only present in the response to the creation request
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub scopes: Vec<String>,
    pub revoked: bool,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub expires_at: Option<Date>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PersonalAccessToken {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub revoked: bool,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub last_used_at: Option<DateTime>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub expires_at: Option<Date>,
    /// Only present in the response to the creation request
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UserActivity {
    pub username: String,
    #[serde(default)]
    pub last_activity_on: Option<Date>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UserMembership {
    pub source_id: u64,
    pub source_name: String,
    /// "Project" or "Namespace"
    pub source_type: String,
    pub access_level: AccessLevel,
}

#[cfg(test)]
mod test {
    use super::{Availability, User, UserStatus};

    #[test]
    fn user() {
        const USER_JSON: &str = r#"
        {
          "id": 1,
          "username": "john_smith",
          "name": "John Smith",
          "state": "active",
          "avatar_url": "http://localhost:3000/uploads/user/avatar/1/cd8.jpeg",
          "web_url": "http://localhost:3000/john_smith",
          "created_at": "2012-05-23T08:00:58Z",
          "is_admin": false,
          "bio": "",
          "location": null,
          "skype": "",
          "linkedin": "",
          "twitter": "",
          "website_url": "",
          "organization": "",
          "last_sign_in_at": "2012-06-01T11:41:01Z",
          "confirmed_at": "2012-05-23T09:05:22Z",
          "theme_id": 1,
          "last_activity_on": "2012-05-23",
          "color_scheme_id": 2,
          "projects_limit": 100,
          "current_sign_in_at": "2012-06-02T06:36:55Z",
          "identities": [
            {"provider": "github", "extern_uid": "2435223452345"}
          ],
          "can_create_group": true,
          "can_create_project": true,
          "two_factor_enabled": true,
          "external": false,
          "private_profile": false,
          "current_sign_in_ip": "196.165.1.102",
          "last_sign_in_ip": "172.127.2.22",
          "namespace_id": 42
        }
        "#;

        let user: User = serde_json::from_str(USER_JSON).unwrap();
        assert_eq!(user.username, "john_smith");
        assert_eq!(user.identities[0].provider, "github");
        assert_eq!(user.last_activity_on.unwrap().to_string(), "2012-05-23");
        assert!(user.two_factor_enabled);
        assert_eq!(user.namespace_id, Some(42));
    }

    #[test]
    fn user_status() {
        let status: UserStatus = serde_json::from_str(
            r#"{"emoji":"coffee","availability":"busy","message":"I crave coffee","message_html":"I crave coffee"}"#,
        )
        .unwrap();
        assert_eq!(status.availability, Some(Availability::Busy));
    }
}
