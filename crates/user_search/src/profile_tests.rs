use super::*;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn profile_body(login: &str) -> serde_json::Value {
    json!({
        "login": login,
        "id": 583231,
        "avatar_url": format!("https://avatars.githubusercontent.com/{login}"),
        "html_url": format!("https://github.com/{login}"),
        "name": "The Octocat",
        "company": "@github",
        "blog": "https://github.blog",
        "location": "San Francisco",
        "bio": null,
        "public_repos": 8,
        "followers": 9000,
        "following": 9,
        "created_at": "2011-01-25T18:44:36Z"
    })
}

fn fetcher_for(mock_server: &MockServer) -> ProfileFetcher {
    let client = Octocrab::builder()
        .base_uri(mock_server.uri())
        .unwrap()
        .build()
        .unwrap();
    ProfileFetcher::new(client)
}

#[tokio::test]
async fn test_fetch_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body("octocat")))
        .mount(&mock_server)
        .await;

    let profile = fetcher_for(&mock_server)
        .fetch("octocat")
        .await
        .expect("fetch should succeed")
        .expect("profile should exist");

    assert_eq!(profile.login, "octocat");
    assert_eq!(profile.name.as_deref(), Some("The Octocat"));
    assert_eq!(profile.followers, 9000);
    assert_eq!(profile.location.as_deref(), Some("San Francisco"));
}

#[tokio::test]
async fn test_fetch_not_found_returns_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/ghost-user"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&mock_server)
        .await;

    let result = fetcher_for(&mock_server).fetch("ghost-user").await;

    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn test_fetch_forbidden_is_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("retry-after", "30")
                .set_body_json(json!({ "message": "API rate limit exceeded" })),
        )
        .mount(&mock_server)
        .await;

    let result = fetcher_for(&mock_server).fetch("octocat").await;

    match result {
        Err(Error::RateLimited { retry_after }) => {
            assert_eq!(retry_after, Some(std::time::Duration::from_secs(30)));
        }
        other => panic!("Expected RateLimited error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_unprocessable_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation Failed"
        })))
        .mount(&mock_server)
        .await;

    let result = fetcher_for(&mock_server).fetch("octocat").await;

    match result {
        Err(Error::Transport { status, message }) => {
            assert_eq!(status, Some(422));
            assert!(message.contains("Validation Failed"));
        }
        other => panic!("Expected Transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_malformed_body_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
        .mount(&mock_server)
        .await;

    let result = fetcher_for(&mock_server).fetch("octocat").await;

    assert!(matches!(result, Err(Error::Transport { .. })));
}

#[tokio::test]
async fn test_fetch_attaches_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .and(header("authorization", "Bearer ghp_test_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body("octocat")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Octocrab::builder()
        .base_uri(mock_server.uri())
        .unwrap()
        .personal_token("ghp_test_token".to_string())
        .build()
        .unwrap();

    let result = ProfileFetcher::new(client).fetch("octocat").await;

    assert!(matches!(result, Ok(Some(_))));
}

#[test]
fn test_profile_path_encodes_login_as_segment() {
    assert_eq!(profile_path("octocat").unwrap(), "/users/octocat");
    assert_eq!(profile_path("a b").unwrap(), "/users/a%20b");
    assert_eq!(profile_path("x/y").unwrap(), "/users/x%2Fy");
}

#[tokio::test]
async fn test_fetch_encodes_space_in_login() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/a%20b"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = fetcher_for(&mock_server).fetch("a b").await;

    assert!(matches!(result, Ok(None)));
}
