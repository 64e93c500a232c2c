// tests/support/helpers.rs
use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode, header},
    response::Response,
};
use chrono::Duration;
use conduit_core::{
    application::{
        commands::articles::CreateArticleCommand,
        dto::AuthenticatedUser,
        services::ApplicationServices,
    },
    domain::{article::ArticleWriteRepository, user::User},
    infrastructure::util::TitleSlugGenerator,
    presentation::http::{routes::build_router, state::HttpState},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt as _;

use super::mocks::{
    DummyPasswordHasher, DummyTokenManager, InMemoryStore, TickingClock, fixed_now, token_for,
};

pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let writer: Arc<dyn ArticleWriteRepository> = store.clone();
        Self::with_writer(store, writer)
    }

    /// Same wiring, but article writes go through `writer`.
    pub fn with_writer(store: Arc<InMemoryStore>, writer: Arc<dyn ArticleWriteRepository>) -> Self {
        let services = Arc::new(ApplicationServices::new(
            store.clone(),
            store.clone(),
            writer,
            store.clone(),
            store.clone(),
            Arc::new(DummyPasswordHasher),
            Arc::new(DummyTokenManager),
            Arc::new(TickingClock::default()),
            Arc::new(TitleSlugGenerator),
        ));
        Self { store, services }
    }

    pub fn router(&self) -> Router {
        build_router(
            HttpState {
                services: Arc::clone(&self.services),
            },
            &[],
        )
    }
}

pub fn actor(user: &User) -> AuthenticatedUser {
    AuthenticatedUser {
        id: user.id,
        username: user.username.to_string(),
        issued_at: fixed_now(),
        expires_at: fixed_now() + Duration::hours(1),
    }
}

pub fn bearer(user: &User) -> String {
    format!("Bearer {}", token_for(user.id, user.username.as_str()))
}

pub fn new_article(title: &str) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title(title)
        .description("what it is about")
        .body("the whole story")
        .build()
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, auth: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

pub async fn read_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    }
}

pub async fn assert_error_response(
    response: Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(response.status(), expected_status);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content type: {content_type}"
    );

    let payload = read_json(response).await;
    assert_eq!(payload["error"], expected_error);
    assert!(
        payload["message"].as_str().is_some_and(|m| !m.is_empty()),
        "missing message in {payload}"
    );
}
