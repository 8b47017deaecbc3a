// Utilidades compartidas por los tests de rutas y handlers

use std::{sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::{
    db::memory::{MemoryBroadcasts, MemoryCredentials, MemoryNews},
    resolver::{ResolverConfig, StreamResolver},
    routes::{create_routes, AppState},
    utils::{jwt::JwtConfig, security::hash_password},
};

pub struct TestApp {
    pub state: AppState,
    pub credentials: Arc<MemoryCredentials>,
    pub broadcasts: Arc<MemoryBroadcasts>,
    pub news: Arc<MemoryNews>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}

impl TestApp {
    // Sin credencial cargada
    pub fn empty() -> Self {
        Self::build(MemoryCredentials::empty(), ResolverConfig::default())
    }

    pub fn with_password(password: &str) -> Self {
        Self::with_password_and_resolver(password, ResolverConfig::default())
    }

    // Hash ya calculado, por ejemplo uno bcrypt heredado
    pub fn with_hash(hash: &str) -> Self {
        Self::build(MemoryCredentials::with_hash(hash.to_string()), ResolverConfig::default())
    }

    pub fn with_password_and_resolver(password: &str, resolver: ResolverConfig) -> Self {
        let hash = hash_password(password).expect("hashing test password");
        Self::build(MemoryCredentials::with_hash(hash), resolver)
    }

    fn build(credentials: MemoryCredentials, resolver: ResolverConfig) -> Self {
        let credentials = Arc::new(credentials);
        let broadcasts = Arc::new(MemoryBroadcasts::new());
        let news = Arc::new(MemoryNews::new());
        let state = AppState {
            credentials: credentials.clone(),
            broadcasts: broadcasts.clone(),
            news: news.clone(),
            resolver: StreamResolver::new(resolver).expect("building resolver"),
            jwt: JwtConfig::new("secreto-de-tests", Duration::from_secs(600)),
        };

        Self { state, credentials, broadcasts, news }
    }

    pub fn router(&self) -> Router {
        create_routes(self.state.clone())
    }

    pub fn admin_token(&self) -> String {
        self.state.jwt.issue().expect("issuing test token")
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        self.send_with_token(method, uri, body, None).await
    }

    pub async fn send_as_admin(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let token = self.admin_token();
        self.send_with_token(method, uri, body, Some(&token)).await
    }

    pub async fn send_with_token(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let body = match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        };

        let response = self
            .router()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();

        TestResponse { status, headers, body }
    }
}
