//! # mrisafe-api-rest
//!
//! REST proxy between clients and the generative AI service.
//!
//! Handles:
//! - `POST /api/search` with axum (the only data endpoint)
//! - CORS for browser clients (mirrored origin, `POST`/`OPTIONS`,
//!   `Content-Type`)
//! - OpenAPI/Swagger documentation
//!
//! The proxy is stateless per request: each call builds one prompt, makes
//! one outbound AI call through the injected [`SafetySearch`]
//! implementation, and returns one response. Failure detail is logged under
//! a per-request id and never forwarded verbatim to clients.

#![warn(rust_2018_idioms)]

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use mrisafe_core::{ExtractError, SafetySearch, SearchError};
use mrisafe_types::{
    ConditionalGuidelines, GroundingChunk, ImplantName, SafetyClassification, SearchRequest,
    SearchResult, StructuredSafetyInfo, WebSource,
};

/// Application state shared across REST API handlers.
///
/// Holds the safety search pipeline as an injected dependency; the concrete
/// implementation is chosen by the binary (production Gemini pipeline) or by
/// tests (fakes).
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn SafetySearch>,
}

/// Health check response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, search),
    components(schemas(
        HealthRes,
        SearchRequest,
        SearchResult,
        StructuredSafetyInfo,
        ConditionalGuidelines,
        SafetyClassification,
        GroundingChunk,
        WebSource,
    ))
)]
struct ApiDoc;

/// Builds the proxy router with CORS and Swagger UI attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/search", post(search))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer())
        .with_state(state)
}

/// CORS for browser clients: mirrors the request origin, allows
/// `Content-Type`, answers `OPTIONS` preflights with 200 and no body.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "mrisafe REST API is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/api/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Structured safety finding with citations", body = SearchResult),
        (status = 400, description = "Missing or invalid implantName"),
        (status = 500, description = "AI service failure or unparsable response")
    )
)]
/// Looks up one implant's MRI safety information
///
/// Validates the implant name, runs the search pipeline, and returns the
/// atomic `SearchResult`.
///
/// # Errors
/// Returns `400 Bad Request` as plain text if `implantName` is missing,
/// blank, or the wrong type. Returns `500 Internal Server Error` as plain
/// text if the AI service answers with empty text, the response cannot be
/// reduced to JSON, or any other upstream failure occurs; the offending
/// response text is logged, not returned.
#[axum::debug_handler]
async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResult>, (StatusCode, String)> {
    let Ok(Json(req)) = payload else {
        return Err((StatusCode::BAD_REQUEST, "implantName is required".into()));
    };
    let name = ImplantName::new(&req.implant_name)
        .map_err(|_| (StatusCode::BAD_REQUEST, "implantName is required".to_string()))?;

    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, implant = %name, "search request");

    match state.service.search(&name).await {
        Ok(result) => Ok(Json(result)),
        Err(SearchError::EmptyResponse) => {
            tracing::error!(%request_id, "empty response from the AI service");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Empty response from the AI service".into(),
            ))
        }
        Err(SearchError::Extraction(err)) => {
            let raw = match &err {
                ExtractError::NoJsonObject { raw } | ExtractError::Parse { raw, .. } => raw,
            };
            tracing::error!(%request_id, error = %err, raw_text = %raw, "failed to parse AI response");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to parse JSON from the AI response".into(),
            ))
        }
        Err(err) => {
            tracing::error!(%request_id, error = %err, "search failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    enum FakeMode {
        Succeed(SearchResult),
        EmptyResponse,
        Garbled(String),
    }

    struct FakeSearch {
        mode: FakeMode,
    }

    #[async_trait]
    impl SafetySearch for FakeSearch {
        async fn search(&self, _name: &ImplantName) -> Result<SearchResult, SearchError> {
            match &self.mode {
                FakeMode::Succeed(result) => Ok(result.clone()),
                FakeMode::EmptyResponse => Err(SearchError::EmptyResponse),
                FakeMode::Garbled(raw) => {
                    Err(SearchError::Extraction(ExtractError::NoJsonObject {
                        raw: raw.clone(),
                    }))
                }
            }
        }
    }

    fn sample_result() -> SearchResult {
        SearchResult {
            data: StructuredSafetyInfo {
                device_name: "Test Clip".into(),
                manufacturer: "Acme".into(),
                safety_classification: SafetyClassification::MrSafe,
                summary: "Safe at all field strengths.".into(),
                conditional_guidelines: None,
                risks_and_artifacts: "Minor artifact.".into(),
                waiting_period: "None".into(),
                disclaimer: None,
            },
            sources: vec![GroundingChunk {
                web: Some(WebSource {
                    uri: Some("https://example.org/clip".into()),
                    title: Some("Clip safety".into()),
                }),
            }],
        }
    }

    fn test_router(mode: FakeMode) -> Router {
        router(AppState {
            service: Arc::new(FakeSearch { mode }),
        })
    }

    fn search_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/search")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_search_returns_result_json() {
        let app = test_router(FakeMode::Succeed(sample_result()));
        let response = app
            .oneshot(search_request(r#"{"implantName": "Test Clip"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        let result: SearchResult = serde_json::from_str(&body).unwrap();
        assert_eq!(result, sample_result());
    }

    #[tokio::test]
    async fn test_missing_implant_name_is_bad_request() {
        let app = test_router(FakeMode::Succeed(sample_result()));
        let response = app.oneshot(search_request(r#"{}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(response).await, "implantName is required");
    }

    #[tokio::test]
    async fn test_wrong_type_implant_name_is_bad_request() {
        let app = test_router(FakeMode::Succeed(sample_result()));
        let response = app
            .oneshot(search_request(r#"{"implantName": 42}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_blank_implant_name_is_bad_request() {
        let app = test_router(FakeMode::Succeed(sample_result()));
        let response = app
            .oneshot(search_request(r#"{"implantName": "   "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_upstream_response_is_internal_error() {
        let app = test_router(FakeMode::EmptyResponse);
        let response = app
            .oneshot(search_request(r#"{"implantName": "Stent"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_string(response).await,
            "Empty response from the AI service"
        );
    }

    #[tokio::test]
    async fn test_garbled_upstream_response_is_internal_error() {
        let app = test_router(FakeMode::Garbled("no json here".into()));
        let response = app
            .oneshot(search_request(r#"{"implantName": "Stent"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_string(response).await,
            "Failed to parse JSON from the AI response"
        );
    }

    #[tokio::test]
    async fn test_preflight_mirrors_origin() {
        let app = test_router(FakeMode::Succeed(sample_result()));
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/search")
            .header(header::ORIGIN, "https://app.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("https://app.example")
        );
        assert!(body_string(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_health_is_alive() {
        let app = test_router(FakeMode::Succeed(sample_result()));
        let request = Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthRes = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(health.ok);
    }
}
