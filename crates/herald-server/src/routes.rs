//! HTTP surface: the webhook route and a liveness probe.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{MethodRouter, get, post},
};
use herald_config::ServerConfig;
use herald_core::{WebhookRequest, WebhookResponse};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{AppContext, fulfill};

type SharedContext = Arc<AppContext>;

/// Build the router for `server`.
///
/// Only `POST` reaches the pipeline on the webhook path. With CORS enabled,
/// `OPTIONS` is answered with an empty 200; every other method gets a 405.
pub fn router(ctx: SharedContext, server: &ServerConfig) -> Router {
    let app = Router::new()
        .route(&server.webhook_path, webhook_route(server.cors))
        .route("/healthz", get(health))
        .with_state(ctx)
        .layer(TraceLayer::new_for_http());

    if server.cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

fn webhook_route(cors: bool) -> MethodRouter<SharedContext> {
    let route = post(webhook);
    let route = if cors { route.options(preflight) } else { route };
    route.fallback(method_not_allowed)
}

async fn webhook(State(ctx): State<SharedContext>, body: Bytes) -> Json<WebhookResponse> {
    // Unreadable bodies carry no query and take the not-understood path.
    let request: WebhookRequest = serde_json::from_slice(&body).unwrap_or_else(|error| {
        tracing::warn!(%error, "unreadable webhook body");
        WebhookRequest::default()
    });

    Json(fulfill(&ctx, request.query_text()).await.response)
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        Json(json!({ "error": "Method not allowed" })),
    )
}

async fn health() -> &'static str {
    "ok"
}
