#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use adboard::{
    build_app,
    db,
    middleware::{
        auth::{create_access_token, Role},
        AuthUser,
    },
    models::{Ad, AdInput, AdListQuery, AdWithUser, CreateUserRequest},
    services::{AdError, AdService, SqliteAdService},
    AppState,
};
use async_trait::async_trait;
use serde_json::{json, Value};
use sqlx::SqlitePool;

pub const JWT_SECRET: &str = "test-secret";

pub struct TestServer {
    pub base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Builds the production router around `state` and binds it to an ephemeral port.
    pub async fn spawn(state: AppState) -> Self {
        let app = build_app(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}/api/v1", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn token_for(user_id: i64) -> String {
    create_access_token(user_id, Role::User, JWT_SECRET).expect("failed to encode jwt")
}

pub fn admin_token(user_id: i64) -> String {
    create_access_token(user_id, Role::Admin, JWT_SECRET).expect("failed to encode jwt")
}

pub fn ad_body() -> Value {
    json!({
        "title": "T",
        "content": "C",
        "city": "Paris",
        "postal_code": "75000"
    })
}

/// In-memory SQLite with migrations applied and `users` users seeded (ids 1..=users).
pub async fn sqlite_pool(users: usize) -> SqlitePool {
    let pool = db::connect("sqlite::memory:", 1)
        .await
        .expect("failed to open in-memory database");

    for n in 1..=users {
        db::users::create_user(
            &pool,
            &CreateUserRequest {
                first_name: format!("First{n}"),
                last_name: format!("Last{n}"),
                email: Some(format!("user{n}@example.com")),
            },
        )
        .await
        .expect("failed to seed user");
    }

    pool
}

pub async fn sqlite_server(users: usize) -> (TestServer, SqlitePool) {
    let pool = sqlite_pool(users).await;
    let state = AppState::new(Arc::new(SqliteAdService::new(pool.clone())), JWT_SECRET);
    (TestServer::spawn(state).await, pool)
}

/// Controller double that records every call and returns canned values.
#[derive(Default)]
pub struct SpyAdService {
    calls: Mutex<Vec<&'static str>>,
}

impl SpyAdService {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
    }
}

fn canned_ad(id: i64, user_id: i64, input: Option<AdInput>) -> Ad {
    let input = input.unwrap_or(AdInput {
        title: "T".into(),
        content: "C".into(),
        city: "Paris".into(),
        postal_code: "75000".into(),
    });
    Ad {
        id,
        title: input.title,
        content: input.content,
        city: input.city,
        postal_code: input.postal_code,
        user_id,
        created_at: "2024-01-01T00:00:00.000Z".into(),
        updated_at: "2024-01-01T00:00:00.000Z".into(),
    }
}

#[async_trait]
impl AdService for SpyAdService {
    async fn list_by_user(&self, _principal: &AuthUser, user_id: i64) -> Result<Vec<Ad>, AdError> {
        self.record("list_by_user");
        Ok(vec![canned_ad(1, user_id, None)])
    }

    async fn create_for_user(
        &self,
        _principal: &AuthUser,
        user_id: i64,
        input: AdInput,
    ) -> Result<Ad, AdError> {
        self.record("create_for_user");
        Ok(canned_ad(1, user_id, Some(input)))
    }

    async fn list_all(
        &self,
        _principal: &AuthUser,
        _query: AdListQuery,
    ) -> Result<Vec<AdWithUser>, AdError> {
        self.record("list_all");
        Ok(Vec::new())
    }

    async fn update(&self, principal: &AuthUser, ad_id: i64, input: AdInput) -> Result<Ad, AdError> {
        self.record("update");
        Ok(canned_ad(ad_id, principal.user_id, Some(input)))
    }

    async fn delete(&self, _principal: &AuthUser, _ad_id: i64) -> Result<(), AdError> {
        self.record("delete");
        Ok(())
    }
}

pub async fn spy_server() -> (TestServer, Arc<SpyAdService>) {
    let spy = Arc::new(SpyAdService::default());
    let state = AppState::new(spy.clone(), JWT_SECRET);
    (TestServer::spawn(state).await, spy)
}

pub const PANIC_DETAIL: &str = "connection string sqlite:///var/lib/adboard/secret.db";

/// Controller double whose every call either panics or reports a database failure.
pub enum FailingAdService {
    Panics,
    DatabaseDown,
}

impl FailingAdService {
    fn fail<T>(&self) -> Result<T, AdError> {
        match self {
            FailingAdService::Panics => panic!("{PANIC_DETAIL}"),
            FailingAdService::DatabaseDown => Err(AdError::Database(sqlx::Error::PoolClosed)),
        }
    }
}

#[async_trait]
impl AdService for FailingAdService {
    async fn list_by_user(&self, _principal: &AuthUser, _user_id: i64) -> Result<Vec<Ad>, AdError> {
        self.fail()
    }

    async fn create_for_user(
        &self,
        _principal: &AuthUser,
        _user_id: i64,
        _input: AdInput,
    ) -> Result<Ad, AdError> {
        self.fail()
    }

    async fn list_all(
        &self,
        _principal: &AuthUser,
        _query: AdListQuery,
    ) -> Result<Vec<AdWithUser>, AdError> {
        self.fail()
    }

    async fn update(&self, _principal: &AuthUser, _ad_id: i64, _input: AdInput) -> Result<Ad, AdError> {
        self.fail()
    }

    async fn delete(&self, _principal: &AuthUser, _ad_id: i64) -> Result<(), AdError> {
        self.fail()
    }
}

pub async fn failing_server(service: FailingAdService) -> TestServer {
    TestServer::spawn(AppState::new(Arc::new(service), JWT_SECRET)).await
}
