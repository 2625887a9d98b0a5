use axum::extract::{Query, State};
use axum::{Extension, Json};
use dealgap_scraper::ExtractedProduct;
use serde::Deserialize;

use super::{map_extract_error, ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct ExtractQuery {
    url: Option<String>,
}

/// GET /api/v1/extract?url=...
///
/// Fetches a Coupang product page and returns the extracted name, price
/// and image. The price and image may be null when the page does not
/// expose them; a page without a recognisable name is an error.
pub(super) async fn extract_product_page(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<ExtractQuery>,
) -> Result<Json<ApiResponse<ExtractedProduct>>, ApiError> {
    let url = params.url.as_deref().map(str::trim).unwrap_or_default();
    if url.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "url parameter is required",
        ));
    }

    let product = state
        .extractor
        .fetch_product(url)
        .await
        .map_err(|e| map_extract_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: product,
        meta: ResponseMeta::new(req_id.0),
    }))
}
