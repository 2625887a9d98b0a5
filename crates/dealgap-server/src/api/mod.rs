mod extract;
mod search;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use dealgap_naver::{NaverError, NaverShopClient};
use dealgap_scraper::{ExtractError, ProductPageClient};
use serde::Serialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<ProductPageClient>,
    /// Present only when provider credentials are configured; the search
    /// route reports a configuration error when absent.
    pub naver: Option<Arc<NaverShopClient>>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    provider: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "bad_request" | "validation_error" | "unsupported_domain" => StatusCode::BAD_REQUEST,
            "unauthorized" => StatusCode::UNAUTHORIZED,
            "unparseable_content" => StatusCode::UNPROCESSABLE_ENTITY,
            "upstream_unreachable" | "upstream_rejected" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn map_extract_error(request_id: String, error: &ExtractError) -> ApiError {
    match error {
        ExtractError::InvalidUrl { reason, .. } => ApiError::new(
            request_id,
            "validation_error",
            format!("invalid url parameter: {reason}"),
        ),
        ExtractError::UnsupportedDomain { .. } => ApiError::new(
            request_id,
            "unsupported_domain",
            "only coupang.com product URLs are supported",
        ),
        ExtractError::PageUnavailable { status, .. } => {
            tracing::warn!(status, "product page fetch rejected");
            ApiError::new(
                request_id,
                "upstream_rejected",
                format!("product page returned HTTP {status}"),
            )
        }
        ExtractError::Unparseable { .. } => ApiError::new(
            request_id,
            "unparseable_content",
            "could not extract product details from the page",
        ),
        ExtractError::Http(e) => {
            tracing::error!(error = %e, "product page fetch failed");
            ApiError::new(
                request_id,
                "upstream_unreachable",
                "could not reach the product page",
            )
        }
    }
}

fn map_search_error(request_id: String, error: &NaverError) -> ApiError {
    match error {
        NaverError::Unauthorized => ApiError::new(
            request_id,
            "unauthorized",
            "search provider rejected the configured credentials",
        ),
        NaverError::UnexpectedStatus { status } => {
            tracing::warn!(status, "search provider rejected the request");
            ApiError::new(
                request_id,
                "upstream_rejected",
                format!("search provider returned HTTP {status}"),
            )
        }
        NaverError::Deserialize { .. } => {
            tracing::error!(error = %error, "search provider sent an unexpected body");
            ApiError::new(
                request_id,
                "upstream_rejected",
                "search provider sent an unexpected response",
            )
        }
        NaverError::Http(e) => {
            tracing::error!(error = %e, "search provider unreachable");
            ApiError::new(
                request_id,
                "upstream_unreachable",
                "could not reach the search provider",
            )
        }
        NaverError::InvalidBaseUrl(_) => ApiError::new(
            request_id,
            "configuration_error",
            "search provider misconfigured",
        ),
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/extract", get(extract::extract_product_page))
        .route("/api/v1/search", get(search::search_listings))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let meta = ResponseMeta::new(req_id.0);
    let provider = if state.naver.is_some() {
        "configured"
    } else {
        "unconfigured"
    };

    (
        StatusCode::OK,
        Json(ApiResponse {
            data: HealthData {
                status: "ok",
                provider,
            },
            meta,
        }),
    )
}
