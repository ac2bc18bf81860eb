use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use error_stack::ResultExt;
use thiserror::Error;
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

use super::{
    routes::{health_handler, votes_handler},
    state::AppState,
};
use crate::adapters::config::server_config::ServerConfig;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {0}")]
    Bind(String),
    #[error("Server stopped unexpectedly")]
    Serve,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/votes", get(votes_handler))
        .route("/api/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(
    config: &ServerConfig,
    state: AppState,
) -> error_stack::Result<(), ServerError> {
    let address = config.address();
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .change_context_lazy(|| ServerError::Bind(address.clone()))?;
    info!("Server running on {address}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .change_context(ServerError::Serve)?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{json, Value};

    use super::*;
    use crate::{
        adapters::config::sheets_config::SheetsConfig,
        application::vote_snapshot::VoteSnapshotReader,
        ports::sheet_source::SheetSourceError,
        test_support::{row, sheets_config, FakeConnector, FakeSheet},
    };

    async fn spawn(config: SheetsConfig, sheet: FakeSheet) -> (String, Arc<FakeConnector>) {
        let connector = Arc::new(FakeConnector::new(sheet));
        let state = AppState::new(VoteSnapshotReader::new(config, connector.clone()));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(state)).await.unwrap();
        });

        (format!("http://{}", address), connector)
    }

    #[tokio::test]
    async fn test_votes_endpoint() {
        let (base_url, _) = spawn(
            sheets_config(),
            FakeSheet::with_rows(
                row(&["[سامي] لائحة ٢٠٤٠", "[Bob] unaffiliated"]),
                row(&["12", "3"]),
            ),
        )
        .await;

        let response = reqwest::get(format!("{}/api/votes", base_url))
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);

        let body: Value = response.json().await.unwrap();
        assert_eq!(
            body,
            json!({
                "votes": [
                    { "name": "سامي", "votes": 12, "list": "لائحة ٢٠٤٠" },
                    { "name": "Bob", "votes": 3, "list": "Unknown List" }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_votes_endpoint_without_config() {
        let (base_url, connector) = spawn(SheetsConfig::default(), FakeSheet::default()).await;

        let response = reqwest::get(format!("{}/api/votes", base_url))
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 500);

        let body: Value = response.json().await.unwrap();
        assert_eq!(
            body,
            json!({ "statusCode": 500, "statusMessage": "Server configuration error." })
        );
        assert_eq!(connector.connects(), 0);
    }

    #[tokio::test]
    async fn test_votes_endpoint_forwards_upstream_status() {
        let (base_url, _) = spawn(
            sheets_config(),
            FakeSheet::failing(SheetSourceError::Upstream {
                code: Some(404),
                message: "Requested entity was not found.".to_string(),
            }),
        )
        .await;

        let response = reqwest::get(format!("{}/api/votes", base_url))
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 404);

        let body: Value = response.json().await.unwrap();
        assert_eq!(
            body["statusMessage"],
            "Google API Error: Requested entity was not found."
        );
    }

    #[tokio::test]
    async fn test_health() {
        let (base_url, _) = spawn(SheetsConfig::default(), FakeSheet::default()).await;

        let response = reqwest::get(format!("{}/api/health", base_url))
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(response.text().await.unwrap(), "OK");
    }
}
