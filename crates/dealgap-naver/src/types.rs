//! Naver shopping search API response types and the normalized listing model.
//!
//! ## Observed wire shape (live `/v1/search/shop.json` responses)
//!
//! - `lprice`/`hprice` are decimal **strings**, not numbers. `hprice` is the
//!   empty string (not `null`, not absent) when the listing has a single
//!   price.
//! - `productType` is a numeric string code. `"1"` marks a catalog-matched
//!   listing (the provider verified it as the same product across sellers);
//!   other codes are individual-seller listings with lower match confidence.
//! - `title` carries emphasis markup around query matches, e.g.
//!   `<b>무선</b> 이어폰`.
//! - `brand`, `maker`, and `category1..4` may each be the empty string.

use serde::Deserialize;
use serde::Serialize;

/// Top-level response from `GET /v1/search/shop.json`.
#[derive(Debug, Deserialize)]
pub struct ShopSearchResponse {
    /// RFC 1123 timestamp of the index build, e.g.
    /// `"Mon, 26 Sep 2023 10:18:44 +0900"`.
    #[serde(rename = "lastBuildDate", default)]
    pub last_build_date: String,

    /// Total number of matches in the index, not the page size.
    pub total: i64,

    /// 1-based offset of the first returned item.
    pub start: i32,

    /// Number of items in this page.
    pub display: i32,

    pub items: Vec<ShopItem>,
}

/// A single raw listing from the shopping search index.
#[derive(Debug, Clone, Deserialize)]
pub struct ShopItem {
    /// Listing title with emphasis markup around query matches.
    #[serde(default)]
    pub title: String,

    /// Seller or price-comparison page URL.
    #[serde(default)]
    pub link: String,

    /// Thumbnail URL.
    #[serde(default)]
    pub image: String,

    /// Lowest price in KRW as a decimal string.
    #[serde(default)]
    pub lprice: String,

    /// Highest price in KRW as a decimal string; empty when the listing has
    /// a single price.
    #[serde(default)]
    pub hprice: String,

    #[serde(rename = "mallName", default)]
    pub mall_name: String,

    #[serde(rename = "productId", default)]
    pub product_id: String,

    /// Numeric string code; `"1"` is a catalog-matched listing.
    #[serde(rename = "productType", default)]
    pub product_type: String,

    #[serde(default)]
    pub brand: String,

    #[serde(default)]
    pub maker: String,

    #[serde(default)]
    pub category1: String,
    #[serde(default)]
    pub category2: String,
    #[serde(default)]
    pub category3: String,
    #[serde(default)]
    pub category4: String,
}

/// A shopping search request: free-text query plus an optional reference
/// price that anchors the plausibility band.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub text: String,
    pub reference_price: Option<i64>,
}

/// A normalized listing: markup stripped, price numeric, categories joined.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub title: String,
    pub link: String,
    pub image: String,

    /// Lowest price in KRW. `0` when the provider sent an unparseable price.
    pub price: i64,

    pub mall_name: String,
    pub product_id: String,

    /// Whether the provider verified this listing as the same product
    /// (`productType == "1"`).
    pub is_catalog_match: bool,

    pub brand: String,
    pub maker: String,

    /// Category path joined with `" > "`, empty segments dropped.
    pub category: String,
}

/// Final ranked search results: catalog-matched listings first, then
/// individual sellers, each group price-ascending.
#[derive(Debug)]
pub struct RankedResults {
    /// Provider-reported total matches, before any local filtering.
    pub total: i64,

    /// Number of catalog-matched listings that survived filtering.
    pub catalog_count: usize,

    pub listings: Vec<Listing>,
}
