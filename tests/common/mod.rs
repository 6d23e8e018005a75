// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use cashbook::application::LedgerService;
use cashbook::http::{self, AppState};
use serde_json::Value;
use tower::ServiceExt;

/// Helper to create a service over an empty store
pub fn test_service() -> LedgerService {
    LedgerService::in_memory()
}

/// Helper to create a router and keep a handle on the service behind it
pub fn test_app() -> (Router, AppState) {
    let service: AppState = Arc::new(LedgerService::in_memory());
    (http::app(service.clone()), service)
}

/// Build a request, optionally carrying a `cpf` header and a JSON body
pub fn request(
    method: Method,
    uri: &str,
    cpf: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cpf) = cpf {
        builder = builder.header("cpf", cpf);
    }

    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send a request through the router. Empty bodies come back as `Value::Null`.
pub async fn send(app: &Router, req: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = app.clone().oneshot(req).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, body))
}

/// Test fixture: a registered customer with some history
pub struct StandardCustomers;

impl StandardCustomers {
    /// Register Alice ("111") and Bob ("222")
    pub async fn create_basic(service: &LedgerService) -> Result<()> {
        service
            .create_account("111".into(), "Alice".into())
            .await?;
        service.create_account("222".into(), "Bob".into()).await?;
        Ok(())
    }
}
