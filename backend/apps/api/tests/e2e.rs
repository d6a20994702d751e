//! End-to-end flow through the assembled router with in-memory stores and a
//! temporary upload directory.

use std::sync::Arc;

use api::{HttpSettings, OwnerDirectory, build_router};
use auth::{AuthConfig, MemoryAuthRepository, auth_router_generic};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use platform::guard::AccessGuard;
use platform::token::TokenService;
use serde_json::{Value, json};
use story::{DiskMediaStore, MemoryStoryRepository, StoryConfig, story_router_generic};
use tempfile::TempDir;
use tower::ServiceExt;

const BOUNDARY: &str = "e2e-boundary";

struct TestServer {
    app: Router,
    uploads: TempDir,
}

impl TestServer {
    fn new() -> Self {
        let uploads = tempfile::tempdir().unwrap();

        let tokens = Arc::new(TokenService::from_secret(b"e2e-secret"));
        let auth_config = AuthConfig::development();
        let guard = AccessGuard::new(tokens, auth_config.cookie_name());
        let story_config = StoryConfig::default();

        let users = MemoryAuthRepository::new();
        let api = auth_router_generic(users.clone(), auth_config, guard.clone()).merge(
            story_router_generic(
                MemoryStoryRepository::new(),
                OwnerDirectory::new(users),
                DiskMediaStore::new(uploads.path()),
                story_config.clone(),
                guard,
            ),
        );

        let settings = HttpSettings {
            cors_origins: vec!["http://localhost:5173".parse().unwrap()],
            upload_dir: uploads.path().to_path_buf(),
            media_url_prefix: story_config.media_url_prefix,
        };

        Self {
            app: build_router(api, &settings),
            uploads,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    async fn send_json(&self, request: Request<Body>) -> (StatusCode, Value) {
        let (status, bytes) = self.send(request).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    /// Register then log in; returns the login token
    async fn sign_up(&self, name: &str, email: &str) -> String {
        let (status, _) = self
            .send_json(json_request(
                "POST",
                "/api/users/register",
                None,
                json!({"name": name, "email": email, "password": "Harbour-Lights-88"}),
            ))
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = self
            .send_json(json_request(
                "POST",
                "/api/users/login",
                None,
                json!({"email": email, "password": "Harbour-Lights-88"}),
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn upload(filename: &str, content_type: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/users/upload-image")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_liveness() {
    let server = TestServer::new();

    let (status, body) = server.send(get("/", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Hello");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let server = TestServer::new();

    let (status, body) = server.send_json(get("/api/users/nope", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn test_journal_flow() {
    let server = TestServer::new();
    let token = server.sign_up("Ana", "ana@example.com").await;

    // Profile
    let (status, profile) = server.send_json(get("/api/users/get-user", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["name"], "Ana");

    // Upload, then serve back through the static route
    let png = b"\x89PNG\r\n\x1a\nfake";
    let (status, body) = server.send_json(upload("beach.png", "image/png", png)).await;
    assert_eq!(status, StatusCode::CREATED);
    let image_url = body["imageUrl"].as_str().unwrap().to_string();
    assert!(image_url.starts_with("/uploads/"));

    let (status, served) = server.send(get(&image_url, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(served, png);

    // Story with that image, denormalized owner details
    let (status, body) = server
        .send_json(json_request(
            "POST",
            "/api/users/allrequired",
            Some(&token),
            json!({
                "title": "Nice",
                "story": "Pebbles everywhere",
                "visitedLocation": ["Nice", "Promenade des Anglais"],
                "imageUrl": image_url,
                "visitedDate": 1717200000000_i64
            }),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["story"]["name"], "Ana");
    assert_eq!(body["story"]["email"], "ana@example.com");
    assert_eq!(body["story"]["userid"], profile["id"]);
    let id = body["story"]["_id"].as_str().unwrap().to_string();

    let (_, body) = server.send_json(get("/api/users/search?query=promenade", None)).await;
    assert_eq!(body["story"].as_array().unwrap().len(), 1);

    // Deleting the story takes the image with it
    let (status, _) = server
        .send_json(json_request(
            "DELETE",
            &format!("/api/users/delete/{id}"),
            Some(&token),
            json!({}),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);

    let filename = image_url.trim_start_matches("/uploads/");
    assert!(!server.uploads.path().join(filename).exists());

    let (_, body) = server.send_json(get("/api/users/getalltravelstory", Some(&token))).await;
    assert!(body["story"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_stories_are_isolated_between_accounts() {
    let server = TestServer::new();
    let ana = server.sign_up("Ana", "ana@example.com").await;
    let ben = server.sign_up("Ben", "ben@example.com").await;

    let story = json!({
        "title": "Kyoto",
        "story": "Temples",
        "visitedLocation": ["Kyoto"],
        "imageUrl": "https://images.example.com/kyoto.jpg",
        "visitedDate": 1717200000000_i64
    });
    let (_, body) = server
        .send_json(json_request("POST", "/api/users/allrequired", Some(&ana), story))
        .await;
    let id = body["story"]["_id"].as_str().unwrap().to_string();

    let (_, body) = server.send_json(get("/api/users/getalltravelstory", Some(&ben))).await;
    assert!(body["story"].as_array().unwrap().is_empty());

    let (status, _) = server
        .send_json(json_request(
            "PUT",
            &format!("/api/users/edit-story/{id}"),
            Some(&ben),
            json!({
                "title": "Mine",
                "story": "Not really",
                "visitedLocation": ["Osaka"],
                "visitedDate": 1717200000000_i64
            }),
        ))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = server.send_json(get("/api/users/getpublicstories", None)).await;
    assert_eq!(body["stories"].as_array().unwrap().len(), 1);
    assert_eq!(body["stories"][0]["title"], "Kyoto");
}

#[tokio::test]
async fn test_cors_preflight_allows_frontend() {
    let server = TestServer::new();

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/users/login")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = server.app.clone().oneshot(request).await.unwrap();
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5173"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}
