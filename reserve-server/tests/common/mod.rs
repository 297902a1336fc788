//! Helpers shared by the HTTP integration tests

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use reserve_server::db::DbService;
use reserve_server::{Config, ServerState, api::build_app};
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: ServerState,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = DbService::in_memory().await.unwrap();
        let config = Config::with_overrides(std::env::temp_dir().to_string_lossy(), 0);
        let state = ServerState::new(config, db);
        Self {
            router: build_app(state.clone()),
            state,
        }
    }

    /// Send a request, optionally as `user`, and return status plus JSON body
    pub async fn call(
        &self,
        method: Method,
        uri: &str,
        user: Option<i64>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(id) = user {
            builder = builder.header("x-user-id", id.to_string());
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn register_company(&self, email: &str) -> i64 {
        let (status, body) = self
            .call(
                Method::POST,
                "/api/accounts/companies",
                None,
                Some(serde_json::json!({
                    "email": email,
                    "name": "La Mesa",
                    "work_hours_from": "12:00:00",
                    "work_hours_to": "16:00:00"
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["id"].as_i64().unwrap()
    }

    pub async fn register_customer(&self, email: &str) -> i64 {
        let (status, body) = self
            .call(
                Method::POST,
                "/api/accounts/customers",
                None,
                Some(serde_json::json!({
                    "email": email,
                    "first_name": "Ana",
                    "last_name": "Diaz"
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["id"].as_i64().unwrap()
    }

    pub async fn table_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM dining_table")
            .fetch_one(self.state.pool())
            .await
            .unwrap()
    }
}
