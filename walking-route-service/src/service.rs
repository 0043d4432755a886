use axum::{
    Router,
    http::{HeaderValue, Request},
    middleware::{Next, from_fn},
    response::Json,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{Instrument, info};
use uuid::Uuid;

use crate::models::{RouteEnvelope, RouteRequest};
use crate::suggestion::build_suggestion;

pub fn create_app() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api/fetch-ai", post(fetch_route_suggestion))
        .layer(from_fn(correlation_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Middleware to add a correlation ID to all requests
async fn correlation_id_middleware(
    mut request: Request<axum::body::Body>,
    next: Next,
) -> axum::response::Response {
    let correlation_id = Uuid::new_v4().to_string();

    // Expose the correlation ID to downstream handlers
    request.headers_mut().insert(
        "x-correlation-id",
        HeaderValue::from_str(&correlation_id).unwrap(),
    );

    let span = tracing::info_span!("http_request", correlation_id = %correlation_id);

    next.run(request).instrument(span).await
}

async fn root() -> Json<Value> {
    Json(json!({
        "service": "Walking Route Suggestion Service",
        "version": "1.0.0",
        "description": "Suggests a walking route for a requested mood and distance",
        "endpoints": {
            "POST /api/fetch-ai": "Suggest a walking route",
            "GET /health": "Health check"
        }
    }))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Suggest a walking route. This handler never fails: every decodable request
/// gets a 200 with a `{statusCode, body}` envelope, and unusable numeric
/// input surfaces as `null` fields in the body rather than an error status.
async fn fetch_route_suggestion(Json(request): Json<RouteRequest>) -> Json<RouteEnvelope> {
    info!(
        mood = %request.mood,
        distance_km = request.distance,
        "Processing route suggestion request"
    );

    Json(RouteEnvelope {
        status_code: 200,
        body: build_suggestion(&request),
    })
}
