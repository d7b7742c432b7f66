use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{extract::State, http::StatusCode, routing, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;

const SUBMIT_ROUTE: &str = "/submit";

pub async fn start_server(host: IpAddr, port: u16, access_key: String) -> anyhow::Result<()> {
    info!("Starting delivery testing server on {host}:{port}");
    info!("Delivery submit endpoint: http://{host}:{port}{SUBMIT_ROUTE}");
    info!("Access key: {access_key:?}");
    info!("Requests with any other access key are rejected with a 401 response");

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(access_key))
        .await
        .context("Failed to start HTTP server")
}

pub fn router(access_key: String) -> Router<()> {
    Router::new()
        .route(SUBMIT_ROUTE, routing::post(submit))
        .with_state(access_key.into())
}

#[derive(Deserialize)]
struct SubmitRequest {
    access_key: String,
    from_name: String,
    subject: String,
}

#[derive(Serialize)]
struct SubmitResponse {
    success: bool,
    message: String,
}

async fn submit(
    state: State<Arc<str>>,
    Json(SubmitRequest {
        access_key,
        from_name,
        subject,
    }): Json<SubmitRequest>,
) -> (StatusCode, Json<SubmitResponse>) {
    if *access_key != **state {
        return (
            StatusCode::UNAUTHORIZED,
            Json(SubmitResponse {
                success: false,
                message: "Invalid access key".into(),
            }),
        );
    }

    info!("Accepted enquiry from {from_name:?}: {subject:?}");
    (
        StatusCode::OK,
        Json(SubmitResponse {
            success: true,
            message: "Email sent successfully!".into(),
        }),
    )
}
