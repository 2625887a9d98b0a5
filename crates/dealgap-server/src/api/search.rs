use axum::extract::{Query, State};
use axum::{Extension, Json};
use dealgap_naver::{Listing, RankedResults, SearchQuery};
use serde::{Deserialize, Serialize};

use super::{map_search_error, ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SearchParams {
    query: Option<String>,
    reference_price: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SearchData {
    total: i64,
    catalog_count: usize,
    results: Vec<Listing>,
}

impl From<RankedResults> for SearchData {
    fn from(ranked: RankedResults) -> Self {
        Self {
            total: ranked.total,
            catalog_count: ranked.catalog_count,
            results: ranked.listings,
        }
    }
}

/// GET /api/v1/search?query=...&referencePrice=...
///
/// Queries the shopping search provider, drops Coupang's own listings,
/// applies the reference price band when one is given and returns catalog
/// entries ahead of individual listings, each group cheapest first.
pub(super) async fn search_listings(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<SearchData>>, ApiError> {
    let text = params.query.as_deref().map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "query parameter is required",
        ));
    }

    let Some(naver) = &state.naver else {
        return Err(ApiError::new(
            req_id.0,
            "configuration_error",
            "search provider credentials are not configured",
        ));
    };

    let query = SearchQuery {
        text: text.to_owned(),
        reference_price: params.reference_price,
    };
    let ranked = naver
        .search_ranked(&query)
        .await
        .map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: SearchData::from(ranked),
        meta: ResponseMeta::new(req_id.0),
    }))
}
