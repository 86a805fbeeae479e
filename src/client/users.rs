use crate::{
    client::{
        path_segment, Client, Identifier, ListOptions, Response, Result, UserLifecycleError,
        UserLifecycleErrorKind,
    },
    Availability, DateTime, Date, Email, GpgKey, ImpersonationToken, PersonalAccessToken, SshKey,
    User, UserActivity, UserMembership, UserStatus,
};
use log::debug;
use reqwest::{Method, StatusCode};
use serde::Serialize;

#[derive(Clone, Debug, Default, Serialize)]
pub struct ListUsersOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_internal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_external: Option<bool>,

    // The options below are only available for admins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "extern_uid", skip_serializing_if = "Option::is_none")]
    pub external_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_before: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_after: Option<DateTime>,
    /// One of id, name, username, created_at or updated_at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Either "enabled" or "disabled"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_factor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admins: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub without_projects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_custom_attributes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub without_project_bots: Option<bool>,

    #[serde(flatten)]
    pub list_options: ListOptions,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct GetUserOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_custom_attributes: Option<bool>,
}

/// Attributes of a new user. Only administrators can create users.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#user-creation
#[derive(Clone, Debug, Default, Serialize)]
pub struct CreateUserOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_password: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_random_password: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extern_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_create_group: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_confirmation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_profile: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<u64>,
}

/// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#user-modification
#[derive(Clone, Debug, Default, Serialize)]
pub struct ModifyUserOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extern_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_create_group: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_reconfirmation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_profile: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_email: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct UserStatusOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct AddSshKeyOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct AddGpgKeyOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct AddEmailOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_confirmation: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ListImpersonationTokensOptions {
    /// One of "all", "active" or "inactive"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(flatten)]
    pub list_options: ListOptions,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct CreateImpersonationTokenOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Date>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct CreatePersonalAccessTokenOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct UserActivitiesOptions {
    /// Only list users active on or after this date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Date>,

    #[serde(flatten)]
    pub list_options: ListOptions,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct UserMembershipsOptions {
    /// Either "Project" or "Namespace"
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,

    #[serde(flatten)]
    pub list_options: ListOptions,
}

/// `UsersClient` handles communication with the user related methods of the GitLab API.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/users.html
pub struct UsersClient<'a> {
    inner: &'a Client,
}

impl<'a> UsersClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#list-users
    pub async fn list(&self, options: Option<ListUsersOptions>) -> Result<Response<Vec<User>>> {
        let response = self.inner.get_with("users", &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#single-user
    pub async fn get(&self, user: u64, options: Option<GetUserOptions>) -> Result<Response<User>> {
        let url = format!("users/{}", user);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#user-creation
    pub async fn create(&self, options: &CreateUserOptions) -> Result<Response<User>> {
        let response = self.inner.post_with("users", options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#user-modification
    pub async fn modify(&self, user: u64, options: &ModifyUserOptions) -> Result<Response<User>> {
        let url = format!("users/{}", user);
        let response = self.inner.put_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// Deleting a user that does not exist still succeeds.
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#user-deletion
    pub async fn delete(&self, user: u64) -> Result<Response<()>> {
        let url = format!("users/{}", user);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// Get the currently authenticated user
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#list-current-user
    pub async fn current(&self) -> Result<Response<User>> {
        let response = self.inner.get("user").send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#user-status
    pub async fn current_status(&self) -> Result<Response<UserStatus>> {
        let response = self.inner.get("user/status").send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#get-the-status-of-a-user
    pub async fn get_status<I: Into<Identifier>>(&self, user: I) -> Result<Response<UserStatus>> {
        let url = format!("users/{}/status", path_segment(user)?);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#set-user-status
    pub async fn set_status(&self, options: &UserStatusOptions) -> Result<Response<UserStatus>> {
        let response = self.inner.put_with("user/status", options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#list-ssh-keys
    pub async fn list_ssh_keys(&self) -> Result<Response<Vec<SshKey>>> {
        let response = self.inner.get("user/keys").send().await?;

        self.inner.json(response).await
    }

    /// `user` may be either an ID or a username.
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#list-ssh-keys-for-user
    pub async fn list_ssh_keys_for_user<I: Into<Identifier>>(
        &self,
        user: I,
        options: Option<ListOptions>,
    ) -> Result<Response<Vec<SshKey>>> {
        let url = format!("users/{}/keys", path_segment(user)?);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#single-ssh-key
    pub async fn get_ssh_key(&self, key: u64) -> Result<Response<SshKey>> {
        let url = format!("user/keys/{}", key);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#single-ssh-key-for-given-user
    pub async fn get_ssh_key_for_user(&self, user: u64, key: u64) -> Result<Response<SshKey>> {
        let url = format!("users/{}/keys/{}", user, key);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#add-ssh-key
    pub async fn add_ssh_key(&self, options: &AddSshKeyOptions) -> Result<Response<SshKey>> {
        let response = self.inner.post_with("user/keys", options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#add-ssh-key-for-user
    pub async fn add_ssh_key_for_user(
        &self,
        user: u64,
        options: &AddSshKeyOptions,
    ) -> Result<Response<SshKey>> {
        let url = format!("users/{}/keys", user);
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#delete-ssh-key-for-current-user
    pub async fn delete_ssh_key(&self, key: u64) -> Result<Response<()>> {
        let url = format!("user/keys/{}", key);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#delete-ssh-key-for-given-user
    pub async fn delete_ssh_key_for_user(&self, user: u64, key: u64) -> Result<Response<()>> {
        let url = format!("users/{}/keys/{}", user, key);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#list-all-gpg-keys
    pub async fn list_gpg_keys(&self) -> Result<Response<Vec<GpgKey>>> {
        let response = self.inner.get("user/gpg_keys").send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#get-a-specific-gpg-key
    pub async fn get_gpg_key(&self, key: u64) -> Result<Response<GpgKey>> {
        let url = format!("user/gpg_keys/{}", key);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#add-a-gpg-key
    pub async fn add_gpg_key(&self, options: &AddGpgKeyOptions) -> Result<Response<GpgKey>> {
        let response = self.inner.post_with("user/gpg_keys", options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#delete-a-gpg-key
    pub async fn delete_gpg_key(&self, key: u64) -> Result<Response<()>> {
        let url = format!("user/gpg_keys/{}", key);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#list-all-gpg-keys-for-given-user
    pub async fn list_gpg_keys_for_user(&self, user: u64) -> Result<Response<Vec<GpgKey>>> {
        let url = format!("users/{}/gpg_keys", user);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#get-a-specific-gpg-key-for-a-given-user
    pub async fn get_gpg_key_for_user(&self, user: u64, key: u64) -> Result<Response<GpgKey>> {
        let url = format!("users/{}/gpg_keys/{}", user, key);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#add-a-gpg-key-for-a-given-user
    pub async fn add_gpg_key_for_user(
        &self,
        user: u64,
        options: &AddGpgKeyOptions,
    ) -> Result<Response<GpgKey>> {
        let url = format!("users/{}/gpg_keys", user);
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#delete-a-gpg-key-for-a-given-user
    pub async fn delete_gpg_key_for_user(&self, user: u64, key: u64) -> Result<Response<()>> {
        let url = format!("users/{}/gpg_keys/{}", user, key);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#list-emails
    pub async fn list_emails(&self) -> Result<Response<Vec<Email>>> {
        let response = self.inner.get("user/emails").send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#list-emails-for-user
    pub async fn list_emails_for_user(
        &self,
        user: u64,
        options: Option<ListOptions>,
    ) -> Result<Response<Vec<Email>>> {
        let url = format!("users/{}/emails", user);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#single-email
    pub async fn get_email(&self, email: u64) -> Result<Response<Email>> {
        let url = format!("user/emails/{}", email);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#add-email
    pub async fn add_email(&self, options: &AddEmailOptions) -> Result<Response<Email>> {
        let response = self.inner.post_with("user/emails", options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#add-email-for-user
    pub async fn add_email_for_user(
        &self,
        user: u64,
        options: &AddEmailOptions,
    ) -> Result<Response<Email>> {
        let url = format!("users/{}/emails", user);
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#delete-email-for-current-user
    pub async fn delete_email(&self, email: u64) -> Result<Response<()>> {
        let url = format!("user/emails/{}", email);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#delete-email-for-given-user
    pub async fn delete_email_for_user(&self, user: u64, email: u64) -> Result<Response<()>> {
        let url = format!("users/{}/emails/{}", user, email);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    // The administrative state changes below do not return a body. GitLab
    // signals refusal through specific status codes which are mapped onto
    // `UserLifecycleErrorKind`.
    async fn change_state(
        &self,
        user: u64,
        method: Method,
        action: &str,
        success: StatusCode,
        refusals: &[(StatusCode, UserLifecycleErrorKind)],
    ) -> Result<()> {
        let url = format!("users/{}/{}", user, action);
        let response = self.inner.request(method, &url).send().await?;
        debug!("GitLab Response: {:#?}", response);

        let status = response.status();
        if status == success {
            return Ok(());
        }

        let kind = refusals
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, kind)| *kind)
            .unwrap_or(UserLifecycleErrorKind::UnexpectedStatus(status));

        Err(UserLifecycleError {
            kind,
            user_id: user,
        }
        .into())
    }

    /// Block a user. Available only for admins.
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#block-user
    pub async fn block(&self, user: u64) -> Result<()> {
        use UserLifecycleErrorKind::*;

        self.change_state(
            user,
            Method::POST,
            "block",
            StatusCode::CREATED,
            &[
                (StatusCode::FORBIDDEN, BlockPrevented),
                (StatusCode::NOT_FOUND, NotFound),
            ],
        )
        .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#unblock-user
    pub async fn unblock(&self, user: u64) -> Result<()> {
        use UserLifecycleErrorKind::*;

        self.change_state(
            user,
            Method::POST,
            "unblock",
            StatusCode::CREATED,
            &[
                (StatusCode::FORBIDDEN, UnblockPrevented),
                (StatusCode::NOT_FOUND, NotFound),
            ],
        )
        .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#ban-user
    pub async fn ban(&self, user: u64) -> Result<()> {
        self.change_state(
            user,
            Method::POST,
            "ban",
            StatusCode::CREATED,
            &[(StatusCode::NOT_FOUND, UserLifecycleErrorKind::NotFound)],
        )
        .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#unban-user
    pub async fn unban(&self, user: u64) -> Result<()> {
        self.change_state(
            user,
            Method::POST,
            "unban",
            StatusCode::CREATED,
            &[(StatusCode::NOT_FOUND, UserLifecycleErrorKind::NotFound)],
        )
        .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#deactivate-user
    pub async fn deactivate(&self, user: u64) -> Result<()> {
        use UserLifecycleErrorKind::*;

        self.change_state(
            user,
            Method::POST,
            "deactivate",
            StatusCode::CREATED,
            &[
                (StatusCode::FORBIDDEN, DeactivatePrevented),
                (StatusCode::NOT_FOUND, NotFound),
            ],
        )
        .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#activate-user
    pub async fn activate(&self, user: u64) -> Result<()> {
        use UserLifecycleErrorKind::*;

        self.change_state(
            user,
            Method::POST,
            "activate",
            StatusCode::CREATED,
            &[
                (StatusCode::FORBIDDEN, ActivatePrevented),
                (StatusCode::NOT_FOUND, NotFound),
            ],
        )
        .await
    }

    /// Approve a user whose sign up is pending.
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#approve-user
    pub async fn approve(&self, user: u64) -> Result<()> {
        use UserLifecycleErrorKind::*;

        self.change_state(
            user,
            Method::POST,
            "approve",
            StatusCode::CREATED,
            &[
                (StatusCode::FORBIDDEN, ApprovePrevented),
                (StatusCode::NOT_FOUND, NotFound),
            ],
        )
        .await
    }

    /// Reject a user whose sign up is pending.
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#reject-user
    pub async fn reject(&self, user: u64) -> Result<()> {
        use UserLifecycleErrorKind::*;

        self.change_state(
            user,
            Method::POST,
            "reject",
            StatusCode::OK,
            &[
                (StatusCode::FORBIDDEN, RejectPrevented),
                (StatusCode::NOT_FOUND, NotFound),
                (StatusCode::CONFLICT, Conflict),
            ],
        )
        .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#disable-two-factor-authentication
    pub async fn disable_two_factor(&self, user: u64) -> Result<()> {
        use UserLifecycleErrorKind::*;

        self.change_state(
            user,
            Method::PATCH,
            "disable_two_factor",
            StatusCode::NO_CONTENT,
            &[
                (StatusCode::BAD_REQUEST, TwoFactorNotEnabled),
                (StatusCode::FORBIDDEN, DisableTwoFactorPrevented),
                (StatusCode::NOT_FOUND, NotFound),
            ],
        )
        .await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#get-all-impersonation-tokens-of-a-user
    pub async fn list_impersonation_tokens(
        &self,
        user: u64,
        options: Option<ListImpersonationTokensOptions>,
    ) -> Result<Response<Vec<ImpersonationToken>>> {
        let url = format!("users/{}/impersonation_tokens", user);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#get-an-impersonation-token-of-a-user
    pub async fn get_impersonation_token(
        &self,
        user: u64,
        token: u64,
    ) -> Result<Response<ImpersonationToken>> {
        let url = format!("users/{}/impersonation_tokens/{}", user, token);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#create-an-impersonation-token
    pub async fn create_impersonation_token(
        &self,
        user: u64,
        options: &CreateImpersonationTokenOptions,
    ) -> Result<Response<ImpersonationToken>> {
        let url = format!("users/{}/impersonation_tokens", user);
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#revoke-an-impersonation-token
    pub async fn revoke_impersonation_token(&self, user: u64, token: u64) -> Result<Response<()>> {
        let url = format!("users/{}/impersonation_tokens/{}", user, token);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#create-a-personal-access-token
    pub async fn create_personal_access_token(
        &self,
        user: u64,
        options: &CreatePersonalAccessTokenOptions,
    ) -> Result<Response<PersonalAccessToken>> {
        let url = format!("users/{}/personal_access_tokens", user);
        let response = self.inner.post_with(&url, options)?.send().await?;

        self.inner.json(response).await
    }

    /// Last activity date of every user. Available only for admins.
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#get-user-activities
    pub async fn activities(
        &self,
        options: Option<UserActivitiesOptions>,
    ) -> Result<Response<Vec<UserActivity>>> {
        let response = self
            .inner
            .get_with("user/activities", &options)?
            .send()
            .await?;

        self.inner.json(response).await
    }

    /// GitLab API docs: https://docs.gitlab.com/ee/api/users.html#user-memberships
    pub async fn memberships(
        &self,
        user: u64,
        options: Option<UserMembershipsOptions>,
    ) -> Result<Response<Vec<UserMembership>>> {
        let url = format!("users/{}/memberships", user);
        let response = self.inner.get_with(&url, &options)?.send().await?;

        self.inner.json(response).await
    }
}
