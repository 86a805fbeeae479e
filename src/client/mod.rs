use log::debug;
use reqwest::{
    header,
    multipart::{Form, Part},
    Client as ReqwestClient, Method, RequestBuilder, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use std::{fmt, time::Duration};
use url::Url;

mod discussions;
mod error;
#[cfg(feature = "graphql")]
mod graphql;
mod groups;
mod identifier;
mod jobs;
mod merge_requests;
mod pagination;
mod pipelines;
mod projects;
mod query;
mod rate_limit;
mod settings;
mod users;

#[cfg(test)]
mod test;

pub use discussions::*;
pub use error::{
    Error, GitlabClientError, GraphqlError, GraphqlErrorLocation, Result, UserLifecycleError,
    UserLifecycleErrorKind,
};
#[cfg(feature = "graphql")]
pub use graphql::GraphqlClient;
pub use groups::*;
pub use identifier::Identifier;
pub(crate) use identifier::escape;
pub use jobs::*;
pub use merge_requests::*;
pub use pagination::{ListOptions, Pagination, SortDirection};
pub use pipelines::*;
pub use projects::*;
pub use rate_limit::Rate;
pub use settings::*;
pub use users::*;

// Constants
const DEFAULT_BASE_URL: &str = "https://gitlab.com/api/v4/";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Header names are lowercase so they can be used with `HeaderMap::insert`
const HEADER_LINK: &str = "link";
const HEADER_TOTAL: &str = "x-total";
const HEADER_TOTAL_PAGES: &str = "x-total-pages";
const HEADER_PER_PAGE: &str = "x-per-page";
const HEADER_PAGE: &str = "x-page";
const HEADER_NEXT_PAGE: &str = "x-next-page";
const HEADER_PREV_PAGE: &str = "x-prev-page";

const HEADER_RATE_LIMIT: &str = "ratelimit-limit";
const HEADER_RATE_REMAINING: &str = "ratelimit-remaining";
const HEADER_RATE_RESET: &str = "ratelimit-reset";

const HEADER_PRIVATE_TOKEN: &str = "private-token";
const HEADER_JOB_TOKEN: &str = "job-token";
const HEADER_SUDO: &str = "sudo";

const MEDIA_TYPE_JSON: &str = "application/json";

/// Credentials sent with every request.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/rest/index.html#authentication
#[derive(Clone)]
pub enum AuthToken {
    /// Personal, project or group access token, sent as `PRIVATE-TOKEN`
    Private(String),
    /// OAuth2 access token, sent as `Authorization: Bearer`
    OAuth(String),
    /// CI job token, sent as `JOB-TOKEN`
    Job(String),
}

impl AuthToken {
    fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            AuthToken::Private(token) => builder.header(HEADER_PRIVATE_TOKEN, token),
            AuthToken::OAuth(token) => builder.bearer_auth(token),
            AuthToken::Job(token) => builder.header(HEADER_JOB_TOKEN, token),
        }
    }
}

// Tokens never end up in logs
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            AuthToken::Private(_) => "Private",
            AuthToken::OAuth(_) => "OAuth",
            AuthToken::Job(_) => "Job",
        };
        write!(f, "{}(<redacted>)", kind)
    }
}

/// A cross-cutting modification applied to outgoing requests, either for
/// every request of a client (`ClientBuilder::request_option`) or for a
/// scoped copy of it (`Client::with_options`).
#[derive(Clone, Debug)]
pub enum RequestOption {
    Header(String, String),
    /// Perform the request as another user. Requires an admin token.
    ///
    /// GitLab API docs: https://docs.gitlab.com/ee/api/rest/index.html#sudo
    Sudo(String),
    /// Authenticate with this token instead of the client's own
    Token(AuthToken),
    Timeout(Duration),
}

impl RequestOption {
    pub fn header<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        RequestOption::Header(name.into(), value.into())
    }

    pub fn sudo<S: Into<String>>(user: S) -> Self {
        RequestOption::Sudo(user.into())
    }

    fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            RequestOption::Header(name, value) => builder.header(name.as_str(), value.as_str()),
            RequestOption::Sudo(user) => builder.header(HEADER_SUDO, user.as_str()),
            RequestOption::Timeout(timeout) => builder.timeout(*timeout),
            // Tokens are resolved in `Client::request` so that only one is sent
            RequestOption::Token(_) => builder,
        }
    }
}

/// An in-memory file sent as a multipart form part.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attachment {
    pub filename: String,
    pub content: Vec<u8>,
}

impl Attachment {
    pub fn new<S: Into<String>, B: Into<Vec<u8>>>(filename: S, content: B) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A decoded API response along with its metadata.
#[derive(Debug)]
pub struct Response<T> {
    status: StatusCode,
    headers: header::HeaderMap,
    pagination: Pagination,
    rate: Option<Rate>,
    data: T,
}

impl<T> Response<T> {
    fn new(status: StatusCode, headers: header::HeaderMap, data: T) -> Self {
        Self {
            pagination: Pagination::from_headers(&headers),
            rate: Rate::from_headers(&headers),
            status,
            headers,
            data,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &header::HeaderMap {
        &self.headers
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn rate(&self) -> Option<&Rate> {
        self.rate.as_ref()
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn into_inner(self) -> T {
        self.data
    }

    pub fn into_parts(self) -> (Pagination, Option<Rate>, T) {
        (self.pagination, self.rate, self.data)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Response<U> {
        Response {
            status: self.status,
            headers: self.headers,
            pagination: self.pagination,
            rate: self.rate,
            data: f(self.data),
        }
    }
}

#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    token: Option<AuthToken>,
    timeout: Option<Duration>,
    options: Vec<RequestOption>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            token: None,
            timeout: None,
            options: Vec::new(),
        }
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn token(mut self, token: AuthToken) -> Self {
        self.token = Some(token);
        self
    }

    pub fn private_token<S: Into<String>>(self, token: S) -> Self {
        self.token(AuthToken::Private(token.into()))
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn request_option(mut self, option: RequestOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn build(self) -> Result<Client> {
        let mut base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Url::parse(&base_url).map_err(|e| format!("invalid base url `{}`: {}", base_url, e))?;

        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_owned());

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static(MEDIA_TYPE_JSON),
        );

        let mut client_builder = ReqwestClient::builder()
            .user_agent(&user_agent)
            .default_headers(headers);

        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder.build()?;

        Ok(Client {
            base_url,
            user_agent,
            token: self.token,
            options: self.options,
            client,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub struct Client {
    /// Base URL to use for API requests. Defaults to the public GitLab API,
    /// but can be overridden for use with self-managed instances. Always
    /// terminated with a trailing slash.
    base_url: String,

    /// User agent string sent when communicating with GitLab APIs
    #[allow(unused)]
    user_agent: String,

    /// Token to use when issuing requests to GitLab
    token: Option<AuthToken>,

    /// Applied to every request, in order
    options: Vec<RequestOption>,

    /// Client used to make http requests
    client: ReqwestClient,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// A copy of this client that also applies `options` to each request.
    /// The underlying connection pool is shared.
    pub fn with_options<I: IntoIterator<Item = RequestOption>>(&self, options: I) -> Client {
        let mut client = self.clone();
        client.options.extend(options);
        client
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    fn post(&self, url: &str) -> RequestBuilder {
        self.request(Method::POST, url)
    }

    fn put(&self, url: &str) -> RequestBuilder {
        self.request(Method::PUT, url)
    }

    fn delete(&self, url: &str) -> RequestBuilder {
        self.request(Method::DELETE, url)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, url);
        self.request_absolute(method, &url)
    }

    fn request_absolute(&self, method: Method, url: &str) -> RequestBuilder {
        debug!("GitLab Request: {} {}", method, url);

        let mut builder = self.client.request(method, url);
        let mut token = self.token.as_ref();

        for option in &self.options {
            if let RequestOption::Token(t) = option {
                token = Some(t);
            }
            builder = option.apply(builder);
        }

        match token {
            Some(token) => token.apply(builder),
            None => builder,
        }
    }

    // GET and DELETE carry their options in the query string
    fn get_with<O: Serialize + ?Sized>(&self, url: &str, options: &O) -> Result<RequestBuilder> {
        Ok(self.get(url).query(&query::encode(options)?))
    }

    fn delete_with<O: Serialize + ?Sized>(
        &self,
        url: &str,
        options: &O,
    ) -> Result<RequestBuilder> {
        Ok(self.delete(url).query(&query::encode(options)?))
    }

    // POST and PUT carry their options as a JSON body
    fn post_with<O: Serialize + ?Sized>(&self, url: &str, options: &O) -> Result<RequestBuilder> {
        with_body(self.post(url), options)
    }

    fn put_with<O: Serialize + ?Sized>(&self, url: &str, options: &O) -> Result<RequestBuilder> {
        with_body(self.put(url), options)
    }

    /// Build a `multipart/form-data` request with `attachment` under `field`
    /// and every populated option as a text part.
    fn multipart<O: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        field: &str,
        attachment: &Attachment,
        options: &O,
    ) -> Result<RequestBuilder> {
        let mut form = Form::new();
        for (key, value) in query::encode(options)? {
            form = form.text(key, value);
        }

        let part = Part::bytes(attachment.content.clone()).file_name(attachment.filename.clone());
        form = form.part(field.to_owned(), part);

        Ok(self.request(method, url).multipart(form))
    }

    // Check the status of a response received from GitLab, turning error
    // statuses into an `Error` carrying the decoded error payload.
    async fn check_response(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        debug!("GitLab Response: {:#?}", response);

        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_MODIFIED {
            return Ok(response);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::RateLimit);
        }

        let body = response.bytes().await?;
        Err(Error::GitlabClientError(
            status,
            GitlabClientError::from_body(&body),
        ))
    }

    // Process a response recieved from GitLab and deserialize its json body.
    async fn json<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<Response<T>> {
        let response = self.check_response(response).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let payload = response.bytes().await?;

        match serde_json::from_slice(&payload) {
            Ok(data) => Ok(Response::new(status, headers, data)),
            Err(e) => {
                debug!(
                    "Error deserializing: {}\nContent: {}",
                    e,
                    String::from_utf8_lossy(&payload)
                );
                Err(e.into())
            }
        }
    }

    // Like `json`, but GitLab answers 304 Not Modified without a body when the
    // requested state already holds.
    async fn json_unless_not_modified<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<Response<Option<T>>> {
        if response.status() == StatusCode::NOT_MODIFIED {
            let headers = response.headers().clone();
            return Ok(Response::new(StatusCode::NOT_MODIFIED, headers, None));
        }

        Ok(self.json::<T>(response).await?.map(Some))
    }

    async fn empty(&self, response: reqwest::Response) -> Result<Response<()>> {
        let response = self.check_response(response).await?;
        let status = response.status();
        let headers = response.headers().clone();

        Ok(Response::new(status, headers, ()))
    }

    // Binary payloads are buffered fully into memory
    async fn bytes(&self, response: reqwest::Response) -> Result<Response<Vec<u8>>> {
        let response = self.check_response(response).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let payload = response.bytes().await?;

        Ok(Response::new(status, headers, payload.to_vec()))
    }

    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(self)
    }

    pub fn groups(&self) -> GroupsClient<'_> {
        GroupsClient::new(self)
    }

    pub fn projects(&self) -> ProjectsClient<'_> {
        ProjectsClient::new(self)
    }

    pub fn merge_requests(&self) -> MergeRequestsClient<'_> {
        MergeRequestsClient::new(self)
    }

    pub fn discussions(&self) -> DiscussionsClient<'_> {
        DiscussionsClient::new(self)
    }

    pub fn settings(&self) -> SettingsClient<'_> {
        SettingsClient::new(self)
    }

    pub fn pipelines(&self) -> PipelinesClient<'_> {
        PipelinesClient::new(self)
    }

    pub fn jobs(&self) -> JobsClient<'_> {
        JobsClient::new(self)
    }

    #[cfg(feature = "graphql")]
    pub fn graphql(&self) -> GraphqlClient<'_> {
        GraphqlClient::new(self)
    }
}

fn with_body<O: Serialize + ?Sized>(builder: RequestBuilder, options: &O) -> Result<RequestBuilder> {
    let body = serde_json::to_value(options)?;
    if body.is_null() {
        Ok(builder)
    } else {
        Ok(builder.json(&body))
    }
}

fn path_segment<I: Into<Identifier>>(id: I) -> Result<String> {
    id.into().to_path_segment().map(|segment| segment.into_owned())
}
