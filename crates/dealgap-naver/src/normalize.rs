//! Normalization from raw provider listings to [`Listing`].
//!
//! Ranking and filtering are delegated to [`crate::rank`]; this module
//! focuses on structural conversion from the provider wire shape.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Listing, ShopItem};

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Product type code the provider assigns to catalog-matched listings.
const CATALOG_PRODUCT_TYPE: &str = "1";

/// Removes markup tags from a listing title.
///
/// Titles arrive with emphasis tags around query matches
/// (`<b>무선</b> 이어폰`). Tags are deleted outright with no replacement, so
/// text separated only by a tag boundary stays joined.
#[must_use]
pub fn strip_tags(title: &str) -> String {
    TAG_RE.replace_all(title, "").into_owned()
}

/// Converts a raw [`ShopItem`] into a normalized [`Listing`].
///
/// An unparseable `lprice` becomes `0` rather than an error: a single
/// malformed listing must not fail the whole result page, and a zero price
/// naturally falls outside any plausibility band.
#[must_use]
pub fn normalize_listing(item: ShopItem) -> Listing {
    let title = strip_tags(&item.title);
    let price = item.lprice.parse::<i64>().unwrap_or(0);
    let category = [
        item.category1,
        item.category2,
        item.category3,
        item.category4,
    ]
    .into_iter()
    .filter(|c| !c.is_empty())
    .collect::<Vec<_>>()
    .join(" > ");

    Listing {
        title,
        link: item.link,
        image: item.image,
        price,
        mall_name: item.mall_name,
        product_id: item.product_id,
        is_catalog_match: item.product_type == CATALOG_PRODUCT_TYPE,
        brand: item.brand,
        maker: item.maker,
        category,
    }
}
