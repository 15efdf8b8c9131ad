// HTTP API module - a single greeting endpoint
//
// GET /api/hello answers {"message": "hello hi"}; every other path is 404.
// The server shares no state with the TUI and stops on a oneshot signal.

use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub const HELLO_MESSAGE: &str = "hello hi";

/// Response body for `GET /api/hello`
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
}

async fn hello() -> Json<HelloResponse> {
    tracing::debug!("GET /api/hello");
    Json(HelloResponse {
        message: HELLO_MESSAGE,
    })
}

/// Build the router
pub fn router() -> Router {
    Router::new().route("/api/hello", get(hello))
}

/// Bind `bind_addr` and serve until `shutdown_rx` fires
pub async fn serve(bind_addr: SocketAddr, shutdown_rx: oneshot::Receiver<()>) -> Result<()> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    serve_on(listener, shutdown_rx).await
}

/// Serve on an already bound listener
pub async fn serve_on(listener: TcpListener, shutdown_rx: oneshot::Receiver<()>) -> Result<()> {
    let local = listener
        .local_addr()
        .context("Failed to read listener address")?;
    tracing::info!("API listening on http://{}/api/hello", local);

    axum::serve(listener, router())
        .with_graceful_shutdown(async move {
            shutdown_rx.await.ok();
        })
        .await
        .context("Server error")?;

    tracing::info!("API server shut down gracefully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn spawn_server() -> (SocketAddr, oneshot::Sender<()>, tokio::task::JoinHandle<Result<()>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(serve_on(listener, rx));
        (addr, tx, handle)
    }

    #[tokio::test]
    async fn hello_returns_greeting() {
        let (addr, shutdown, handle) = spawn_server().await;

        let response = reqwest::get(format!("http://{}/api/hello", addr))
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({ "message": "hello hi" }));

        shutdown.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn other_paths_are_not_found() {
        let (addr, shutdown, handle) = spawn_server().await;

        for path in ["/", "/api", "/api/hello/extra", "/api/goodbye"] {
            let response = reqwest::get(format!("http://{}{}", addr, path)).await.unwrap();
            assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND, "{}", path);
        }

        shutdown.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn bind_conflict_is_reported() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap();
        let (_tx, rx) = oneshot::channel();

        let err = serve(addr, rx).await.unwrap_err();
        assert!(err.to_string().contains("Failed to bind"));
    }
}
