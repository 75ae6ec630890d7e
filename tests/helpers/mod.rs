#![allow(dead_code)]

use std::collections::HashMap;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use corpsite::{AppState, Config};
use http_body_util::BodyExt;
use serde_json::Value;
use temp_dir::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub dir: TempDir,
}

/// Builds the full application over a fresh database in a temp directory.
///
/// SMTP points at a closed local port so every delivery attempt fails fast.
pub async fn setup_test_app() -> anyhow::Result<TestApp> {
    setup_test_app_with(|_| {}).await
}

pub async fn setup_test_app_with(configure: impl FnOnce(&mut Config)) -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let mut config = Config::load_with_env(Some("does-not-exist.toml".to_owned()), HashMap::new())?;

    config.database.url = format!("sqlite:{}", dir.child("db.sqlite3").to_str().unwrap());
    config.server.static_dir = dir.child("static").to_str().unwrap().to_owned();
    config.email.smtp_host = "127.0.0.1".to_owned();
    config.email.smtp_port = 1;
    config.email.contact_address = "staff@corpsite.localhost".to_owned();
    config.email.timeout_secs = 2;
    configure(&mut config);

    let pool = corpsite::db::create_pool(&config.database.url, 5).await?;
    corpsite::db::migrate(&pool).await?;

    let state = AppState::new(config, pool)?;
    let router = corpsite::server::app(state.clone());

    Ok(TestApp { router, state, dir })
}

impl TestApp {
    pub async fn get(&self, uri: impl AsRef<str>) -> anyhow::Result<(StatusCode, Value)> {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: impl AsRef<str>, body: Value) -> anyhow::Result<(StatusCode, Value)> {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: impl AsRef<str>, body: Value) -> anyhow::Result<(StatusCode, Value)> {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn request(
        &self,
        method: Method,
        uri: impl AsRef<str>,
        body: Option<Value>,
    ) -> anyhow::Result<(StatusCode, Value)> {
        let builder = Request::builder().method(method).uri(uri.as_ref());
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        Ok((status, value))
    }
}

pub fn submission(name: &str) -> Value {
    serde_json::json!({
        "name": name,
        "email": format!("{name}@corpsite.localhost"),
        "subject": "Pricing",
        "message": "my message",
    })
}
