//! HTTP level tests against a mock GitLab instance

use super::{
    Attachment, Client, CreateGroupOptions, Error, ListOptions, ListProjectsOptions,
    RequestOption, UserLifecycleErrorKind,
};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const PROJECT: &str = include_str!("../../test-input/project.json");
const MERGE_REQUEST: &str = include_str!("../../test-input/merge-request.json");

fn client(server: &MockServer) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();

    Client::builder()
        .base_url(format!("{}/api/v4", server.uri()))
        .private_token("test-token")
        .build()
        .unwrap()
}

fn json(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/json")
}

#[tokio::test]
async fn escapes_path_identifiers_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects/group%2Fsub-group"))
        .and(header("PRIVATE-TOKEN", "test-token"))
        .respond_with(json(PROJECT))
        .expect(1)
        .mount(&server)
        .await;

    let project = client(&server)
        .projects()
        .get("group/sub-group", None)
        .await
        .unwrap()
        .into_inner();
    assert_eq!(project.id, 3);
}

#[tokio::test]
async fn invalid_identifier_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(json(PROJECT))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server).projects().get("", None).await.unwrap_err();
    assert!(matches!(err, Error::InvalidIdentifier(_)));
}

#[tokio::test]
async fn dot_segments_send_nothing() {
    let server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(json(PROJECT))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);

    let err = client.projects().get("..", None).await.unwrap_err();
    assert!(matches!(err, Error::InvalidIdentifier(ref p) if p == ".."));

    let err = client
        .jobs()
        .artifact_file(3u64, 8, "../../../user")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidIdentifier(ref p) if p == ".."));

    let err = client
        .discussions()
        .get_merge_request_discussion(3u64, 1, "..")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidIdentifier(_)));
}

#[tokio::test]
async fn artifact_file_keeps_directories() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects/3/jobs/8/artifacts/coverage/index%2Ehtml"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"<html></html>".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let file = client(&server)
        .jobs()
        .artifact_file(3u64, 8, "coverage/index.html")
        .await
        .unwrap()
        .into_inner();
    assert_eq!(file, b"<html></html>".to_vec());
}

#[tokio::test]
async fn list_options_in_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects"))
        .and(query_param("search", "diaspora"))
        .and(query_param("per_page", "2"))
        .respond_with(
            json(&format!("[{}]", PROJECT))
                .insert_header("x-total", "3")
                .insert_header("x-total-pages", "2")
                .insert_header("x-per-page", "2")
                .insert_header("x-page", "1")
                .insert_header("x-next-page", "2")
                .insert_header("x-prev-page", ""),
        )
        .mount(&server)
        .await;

    let options = ListProjectsOptions {
        search: Some("diaspora".to_owned()),
        list_options: ListOptions {
            page: None,
            per_page: Some(2),
        },
        ..Default::default()
    };
    let response = client(&server)
        .projects()
        .list(Some(options))
        .await
        .unwrap();

    let pagination = response.pagination();
    assert_eq!(pagination.total_items, Some(3));
    assert_eq!(pagination.next_page, Some(2));
    assert_eq!(pagination.previous_page, None);
    assert_eq!(response.data().len(), 1);

    let requests = server.received_requests().await.unwrap();
    let keys: Vec<String> = requests[0]
        .url
        .query_pairs()
        .map(|(key, _)| key.into_owned())
        .collect();
    assert_eq!(keys.len(), 2, "unset options leaked into {:?}", keys);
    assert!(!keys.iter().any(|key| key == "page" || key == "owned"));
}

#[tokio::test]
async fn block_user() {
    let server = MockServer::start().await;

    for (user, status) in &[(1, 201), (2, 403), (3, 404), (4, 500)] {
        Mock::given(method("POST"))
            .and(path(format!("/api/v4/users/{}/block", user)))
            .respond_with(ResponseTemplate::new(*status))
            .mount(&server)
            .await;
    }

    let client = client(&server);
    let users = client.users();

    users.block(1).await.unwrap();

    match users.block(2).await.unwrap_err() {
        Error::UserLifecycle(e) => {
            assert_eq!(e.kind, UserLifecycleErrorKind::BlockPrevented);
            assert_eq!(e.user_id, 2);
        }
        other => panic!("unexpected error {:?}", other),
    }

    match users.block(3).await.unwrap_err() {
        Error::UserLifecycle(e) => assert_eq!(e.kind, UserLifecycleErrorKind::NotFound),
        other => panic!("unexpected error {:?}", other),
    }

    let err = users.block(4).await.unwrap_err();
    assert!(err.to_string().contains("500"), "{}", err);
}

#[tokio::test]
async fn reject_user() {
    let server = MockServer::start().await;

    for (user, status) in &[(1, 200), (2, 201), (3, 409)] {
        Mock::given(method("POST"))
            .and(path(format!("/api/v4/users/{}/reject", user)))
            .respond_with(ResponseTemplate::new(*status))
            .mount(&server)
            .await;
    }

    let client = client(&server);
    let users = client.users();

    users.reject(1).await.unwrap();

    match users.reject(2).await.unwrap_err() {
        Error::UserLifecycle(e) => assert_eq!(
            e.kind,
            UserLifecycleErrorKind::UnexpectedStatus(StatusCode::CREATED)
        ),
        other => panic!("unexpected error {:?}", other),
    }

    match users.reject(3).await.unwrap_err() {
        Error::UserLifecycle(e) => {
            assert_eq!(e.kind, UserLifecycleErrorKind::Conflict);
            assert_eq!(e.to_string(), "User does not have a pending request (user 3)");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[tokio::test]
async fn disable_two_factor() {
    let server = MockServer::start().await;

    for (user, status) in &[(1, 204), (2, 200), (3, 400)] {
        Mock::given(method("PATCH"))
            .and(path(format!("/api/v4/users/{}/disable_two_factor", user)))
            .respond_with(ResponseTemplate::new(*status))
            .mount(&server)
            .await;
    }

    let client = client(&server);
    let users = client.users();

    users.disable_two_factor(1).await.unwrap();

    match users.disable_two_factor(2).await.unwrap_err() {
        Error::UserLifecycle(e) => assert_eq!(
            e.kind,
            UserLifecycleErrorKind::UnexpectedStatus(StatusCode::OK)
        ),
        other => panic!("unexpected error {:?}", other),
    }

    match users.disable_two_factor(3).await.unwrap_err() {
        Error::UserLifecycle(e) => {
            assert_eq!(e.kind, UserLifecycleErrorKind::TwoFactorNotEnabled)
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[tokio::test]
async fn client_error_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects/42"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "404 Project Not Found"})),
        )
        .mount(&server)
        .await;

    match client(&server).projects().get(42u64, None).await.unwrap_err() {
        Error::GitlabClientError(status, body) => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body.to_string(), "404 Project Not Found");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[tokio::test]
async fn rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client(&server).settings().get().await.unwrap_err();
    assert!(matches!(err, Error::RateLimit));
}

#[tokio::test]
async fn group_avatar_is_sent_as_multipart() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v4/groups"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7,
            "name": "Foobar Group",
            "path": "foo-bar",
            "web_url": "http://localhost:3000/groups/foo-bar",
            "full_name": "Foobar Group",
            "full_path": "foo-bar"
        })))
        .mount(&server)
        .await;

    let options = CreateGroupOptions {
        name: Some("Foobar Group".to_owned()),
        path: Some("foo-bar".to_owned()),
        avatar: Some(Attachment::new("avatar.png", b"\x89PNG".to_vec())),
        ..Default::default()
    };
    let group = client(&server)
        .groups()
        .create(&options)
        .await
        .unwrap()
        .into_inner();
    assert_eq!(group.full_path, "foo-bar");

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("multipart/form-data"), "{}", content_type);

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"avatar\"; filename=\"avatar.png\""));
    assert!(body.contains("name=\"path\""));
}

#[tokio::test]
async fn group_without_avatar_is_sent_as_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v4/groups"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7,
            "name": "Foobar Group",
            "path": "foo-bar",
            "web_url": "http://localhost:3000/groups/foo-bar",
            "full_name": "Foobar Group",
            "full_path": "foo-bar"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = CreateGroupOptions {
        name: Some("Foobar Group".to_owned()),
        path: Some("foo-bar".to_owned()),
        avatar: Some(Attachment::default()),
        ..Default::default()
    };
    client(&server).groups().create(&options).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, json!({"name": "Foobar Group", "path": "foo-bar"}));
}

#[tokio::test]
async fn subscribe_not_modified() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v4/projects/3/merge_requests/1/subscribe"))
        .respond_with(ResponseTemplate::new(304))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v4/projects/4/merge_requests/1/subscribe"))
        .respond_with(json(MERGE_REQUEST))
        .mount(&server)
        .await;

    let client = client(&server);

    let response = client.merge_requests().subscribe(3u64, 1).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    assert!(response.into_inner().is_none());

    let merge_request = client
        .merge_requests()
        .subscribe(4u64, 1)
        .await
        .unwrap()
        .into_inner()
        .unwrap();
    assert_eq!(merge_request.iid, 1);
}

#[tokio::test]
async fn job_trace_is_raw_bytes() {
    let server = MockServer::start().await;
    let log = b"\x1b[32;1mJob succeeded\x1b[0;m\n".to_vec();

    Mock::given(method("GET"))
        .and(path("/api/v4/projects/3/jobs/8/trace"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(log.clone()))
        .mount(&server)
        .await;

    let trace = client(&server)
        .jobs()
        .trace(3u64, 8)
        .await
        .unwrap()
        .into_inner();
    assert_eq!(trace, log);
}

#[tokio::test]
async fn per_call_options() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects/3"))
        .and(header("sudo", "jsmith"))
        .and(header("x-request-id", "abc"))
        .respond_with(json(PROJECT))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let scoped = client.with_options(vec![
        RequestOption::sudo("jsmith"),
        RequestOption::header("x-request-id", "abc"),
    ]);
    scoped.projects().get(3u64, None).await.unwrap();

    // the original client is left untouched
    let err = client.projects().get(3u64, None).await.unwrap_err();
    assert!(matches!(err, Error::GitlabClientError(StatusCode::NOT_FOUND, _)));
}

#[tokio::test]
async fn token_override() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects/3"))
        .and(header("JOB-TOKEN", "ci-token"))
        .respond_with(json(PROJECT))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server).with_options(vec![RequestOption::Token(
        super::AuthToken::Job("ci-token".to_owned()),
    )]);
    client.projects().get(3u64, None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("private-token").is_none());
}
