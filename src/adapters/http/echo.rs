//! Echo HTTP server.
//!
//! One route, `GET /api/echo`, returning the resolved settings as JSON.
//! Secret values are returned verbatim: this is a diagnostic endpoint and the
//! hosting platform is expected to restrict who can reach it.

use axum::{extract::State, response::Json, routing::get, Router};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::domain::errors::StartupError;
use crate::domain::models::{ServerConfig, Settings};

/// Path of the echo route
pub const ECHO_ROUTE: &str = "/api/echo";

/// Build the router serving the given settings.
pub fn router(settings: Arc<Settings>) -> Router {
    Router::new()
        .route(ECHO_ROUTE, get(get_settings))
        .with_state(settings)
        .layer(TraceLayer::new_for_http())
}

async fn get_settings(State(settings): State<Arc<Settings>>) -> Json<Settings> {
    Json(Settings::clone(&settings))
}

/// Echo HTTP Server.
pub struct EchoHttpServer {
    settings: Arc<Settings>,
    config: ServerConfig,
}

impl EchoHttpServer {
    pub const fn new(settings: Arc<Settings>, config: ServerConfig) -> Self {
        Self { settings, config }
    }

    /// Bind the listener.
    ///
    /// Kept separate from serving so that a bind failure is still a startup
    /// failure, and so tests can bind port 0.
    pub async fn bind(&self) -> Result<TcpListener, StartupError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        TcpListener::bind(&addr)
            .await
            .map_err(|source| StartupError::Bind { addr, source })
    }

    /// Serve on the listener until `shutdown` resolves.
    pub async fn serve_with_shutdown<F>(
        self,
        listener: TcpListener,
        shutdown: F,
    ) -> Result<(), StartupError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: Option<SocketAddr> = listener.local_addr().ok();
        let router = router(self.settings);

        tracing::info!(?addr, route = ECHO_ROUTE, "Echo HTTP server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(StartupError::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn settings() -> Arc<Settings> {
        Arc::new(Settings {
            api_key: "abc123".to_string(),
            connection_string: "Server=db;Password=hunter2".to_string(),
            greeting: "hello".to_string(),
        })
    }

    async fn call(app: Router, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_echo_returns_settings_verbatim() {
        let (status, body) = call(router(settings()), Method::GET, ECHO_ROUTE).await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ApiKey": "abc123",
                "ConnectionString": "Server=db;Password=hunter2",
                "Greeting": "hello"
            })
        );
    }

    #[tokio::test]
    async fn test_echo_is_byte_identical_across_requests() {
        let app = router(settings());

        let (_, first) = call(app.clone(), Method::GET, ECHO_ROUTE).await;
        for _ in 0..5 {
            let (_, next) = call(app.clone(), Method::GET, ECHO_ROUTE).await;
            assert_eq!(first, next);
        }
    }

    #[tokio::test]
    async fn test_other_methods_and_paths_use_framework_defaults() {
        let (status, _) = call(router(settings()), Method::POST, ECHO_ROUTE).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

        let (status, _) = call(router(settings()), Method::GET, "/api/other").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_bind_failure_is_reported() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let server = EchoHttpServer::new(
            settings(),
            ServerConfig {
                host: "127.0.0.1".to_string(),
                port,
            },
        );

        assert!(matches!(
            server.bind().await,
            Err(StartupError::Bind { .. })
        ));
    }
}
