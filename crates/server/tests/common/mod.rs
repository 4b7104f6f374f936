use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use serde_json::Value;
use server::{auth::Claims, build_router, config::AppConfig, state::AppState};
use std::collections::HashMap;
use tower::ServiceExt;

pub const SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_env(&[]).await
    }

    /// Builds the app on a fresh in-memory database with extra environment variables
    pub async fn with_env(extra: &[(&str, &str)]) -> Self {
        let mut vars: HashMap<String, String> = HashMap::from([
            ("DATABASE_URL".to_string(), "sqlite::memory:".to_string()),
            ("JWT_SECRET".to_string(), SECRET.to_string()),
        ]);
        for (name, value) in extra {
            vars.insert(name.to_string(), value.to_string());
        }
        let config = AppConfig::from_lookup(|name| vars.get(name).cloned()).unwrap();

        let db = Database::connect(config.database_url.as_str()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        Self {
            router: build_router(AppState::new(db, config)),
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    /// Sends a prebuilt request and returns the untouched response, headers included
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }
}

/// Signs a staff token the way the external identity provider would
pub fn token() -> String {
    token_expiring_in(Duration::hours(1))
}

pub fn token_expiring_in(expires_in: Duration) -> String {
    let claims = Claims {
        sub: "staff-1".to_string(),
        exp: (Utc::now() + expires_in).timestamp(),
        iat: Some(Utc::now().timestamp()),
        email: Some("staff@example.com".to_string()),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}
