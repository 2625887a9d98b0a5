//! Filtering and ordering of normalized listings.
//!
//! The pipeline is: normalize each raw item, drop reference-marketplace
//! listings, apply the plausibility band when a reference price is known,
//! then order catalog-matched listings ahead of individual sellers with each
//! group price-ascending.

use crate::normalize::normalize_listing;
use crate::types::{Listing, RankedResults, ShopSearchResponse};

/// Band bounds as factors of the reference price.
const PRICE_BAND_LOW_FACTOR: f64 = 0.3;
const PRICE_BAND_HIGH_FACTOR: f64 = 1.2;

/// Substrings identifying reference-marketplace listings. Checked against
/// the lowercased link and mall name.
const REFERENCE_MARKERS: [&str; 2] = ["coupang", "쿠팡"];

/// Inclusive plausibility band around a reference price: prices below
/// `floor(0.3p)` are treated as likely different or counterfeit products,
/// prices above `floor(1.2p)` as not competitive.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)] // KRW prices are far below 2^53
#[must_use]
pub fn price_band(reference_price: i64) -> (i64, i64) {
    let reference = reference_price as f64;
    let low = (reference * PRICE_BAND_LOW_FACTOR).floor() as i64;
    let high = (reference * PRICE_BAND_HIGH_FACTOR).floor() as i64;
    (low, high)
}

/// Normalizes, filters, and orders a raw provider response.
///
/// Reference-marketplace listings are always dropped; the whole point is to
/// compare against that marketplace, so its own listings are never answers.
/// When `reference_price` is present only listings inside the inclusive
/// band survive. Catalog-matched listings precede individual sellers; both
/// groups are sorted ascending by price with a stable sort, so equal prices
/// keep the provider's candidate order.
#[must_use]
pub fn rank_listings(
    response: ShopSearchResponse,
    reference_price: Option<i64>,
) -> RankedResults {
    let total = response.total;

    let mut listings: Vec<Listing> = response
        .items
        .into_iter()
        .map(normalize_listing)
        .filter(|listing| !is_reference_listing(listing))
        .collect();

    if let Some(reference) = reference_price {
        let (low, high) = price_band(reference);
        listings.retain(|listing| (low..=high).contains(&listing.price));
    }

    let (mut catalog, mut individual): (Vec<Listing>, Vec<Listing>) = listings
        .into_iter()
        .partition(|listing| listing.is_catalog_match);

    catalog.sort_by_key(|listing| listing.price);
    individual.sort_by_key(|listing| listing.price);

    let catalog_count = catalog.len();
    let mut listings = catalog;
    listings.append(&mut individual);

    RankedResults {
        total,
        catalog_count,
        listings,
    }
}

fn is_reference_listing(listing: &Listing) -> bool {
    let link = listing.link.to_ascii_lowercase();
    let mall_name = listing.mall_name.to_ascii_lowercase();
    REFERENCE_MARKERS
        .iter()
        .any(|marker| link.contains(marker) || mall_name.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShopItem;

    fn make_item(title: &str, lprice: &str, product_type: &str, mall_name: &str) -> ShopItem {
        ShopItem {
            title: title.to_owned(),
            link: format!("https://smartstore.naver.com/{mall_name}/{lprice}"),
            image: "https://shopping-phinf.pstatic.net/item.jpg".to_owned(),
            lprice: lprice.to_owned(),
            hprice: String::new(),
            mall_name: mall_name.to_owned(),
            product_id: format!("pid-{lprice}"),
            product_type: product_type.to_owned(),
            brand: String::new(),
            maker: String::new(),
            category1: "디지털/가전".to_owned(),
            category2: String::new(),
            category3: String::new(),
            category4: String::new(),
        }
    }

    fn make_response(items: Vec<ShopItem>) -> ShopSearchResponse {
        ShopSearchResponse {
            last_build_date: "Mon, 26 Sep 2023 10:18:44 +0900".to_owned(),
            total: i64::try_from(items.len()).expect("test fixtures are small"),
            start: 1,
            display: i32::try_from(items.len()).expect("test fixtures are small"),
            items,
        }
    }

    // -----------------------------------------------------------------------
    // price_band
    // -----------------------------------------------------------------------

    #[test]
    fn price_band_bounds_are_floored_factors() {
        assert_eq!(price_band(100_000), (30_000, 120_000));
    }

    #[test]
    fn price_band_floors_fractional_bounds() {
        // 99999 * 0.3 = 29999.7, 99999 * 1.2 = 119998.8
        assert_eq!(price_band(99_999), (29_999, 119_998));
    }

    // -----------------------------------------------------------------------
    // rank_listings
    // -----------------------------------------------------------------------

    #[test]
    fn ranks_catalog_before_individual_each_price_ascending() {
        let response = make_response(vec![
            make_item("무선 이어폰", "50000", "1", "브랜드몰"),
            make_item("무선 이어폰", "40000", "2", "개인셀러"),
            make_item("무선 이어폰", "30000", "1", "가전마트"),
            make_item("무선 이어폰", "20000", "2", "쿠팡"),
        ]);

        let ranked = rank_listings(response, None);

        let prices: Vec<i64> = ranked.listings.iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![30_000, 50_000, 40_000]);
        assert_eq!(ranked.catalog_count, 2);
        assert!(ranked.listings[0].is_catalog_match);
        assert!(ranked.listings[1].is_catalog_match);
        assert!(!ranked.listings[2].is_catalog_match);
    }

    #[test]
    fn band_is_inclusive_at_both_bounds() {
        let response = make_response(vec![
            make_item("상품", "29000", "2", "몰A"),
            make_item("상품", "30000", "2", "몰B"),
            make_item("상품", "120000", "2", "몰C"),
            make_item("상품", "121000", "2", "몰D"),
        ]);

        let ranked = rank_listings(response, Some(100_000));

        let prices: Vec<i64> = ranked.listings.iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![30_000, 120_000]);
    }

    #[test]
    fn no_reference_price_means_no_band_filter() {
        let response = make_response(vec![
            make_item("상품", "1", "2", "몰A"),
            make_item("상품", "99999999", "2", "몰B"),
        ]);

        let ranked = rank_listings(response, None);
        assert_eq!(ranked.listings.len(), 2);
    }

    #[test]
    fn excludes_reference_marketplace_by_mall_name() {
        let mut item = make_item("상품", "10000", "1", "쿠팡");
        // Neutral link so only the mall name can trigger the exclusion.
        item.link = "https://search.shopping.naver.com/catalog/1".to_owned();
        let response = make_response(vec![item, make_item("상품", "20000", "1", "몰A")]);

        let ranked = rank_listings(response, None);
        assert_eq!(ranked.listings.len(), 1);
        assert_eq!(ranked.listings[0].mall_name, "몰A");
    }

    #[test]
    fn excludes_reference_marketplace_by_link() {
        let mut item = make_item("상품", "10000", "1", "몰A");
        item.link = "https://www.COUPANG.com/vp/products/1".to_owned();
        let response = make_response(vec![item, make_item("상품", "20000", "1", "몰B")]);

        let ranked = rank_listings(response, None);
        assert_eq!(ranked.listings.len(), 1);
        assert_eq!(ranked.listings[0].mall_name, "몰B");
    }

    #[test]
    fn reference_marketplace_excluded_even_inside_band() {
        let response = make_response(vec![
            make_item("상품", "90000", "1", "쿠팡"),
            make_item("상품", "95000", "1", "몰A"),
        ]);

        let ranked = rank_listings(response, Some(100_000));
        assert_eq!(ranked.listings.len(), 1);
        assert_eq!(ranked.listings[0].price, 95_000);
    }

    #[test]
    fn equal_prices_keep_provider_order() {
        let response = make_response(vec![
            make_item("상품", "30000", "2", "첫째몰"),
            make_item("상품", "30000", "2", "둘째몰"),
            make_item("상품", "30000", "2", "셋째몰"),
        ]);

        let ranked = rank_listings(response, None);
        let malls: Vec<&str> = ranked
            .listings
            .iter()
            .map(|l| l.mall_name.as_str())
            .collect();
        assert_eq!(malls, vec!["첫째몰", "둘째몰", "셋째몰"]);
    }

    #[test]
    fn total_reports_provider_total_before_filtering() {
        let mut response = make_response(vec![
            make_item("상품", "10000", "2", "쿠팡"),
            make_item("상품", "20000", "2", "몰A"),
        ]);
        response.total = 4321;

        let ranked = rank_listings(response, None);
        assert_eq!(ranked.total, 4321);
        assert_eq!(ranked.listings.len(), 1);
    }

    #[test]
    fn catalog_count_reflects_surviving_catalog_listings() {
        let response = make_response(vec![
            make_item("상품", "500", "1", "몰A"),
            make_item("상품", "90000", "1", "몰B"),
            make_item("상품", "95000", "2", "몰C"),
        ]);

        // 500 falls below floor(0.3 * 100000) = 30000 and is dropped.
        let ranked = rank_listings(response, Some(100_000));
        assert_eq!(ranked.catalog_count, 1);
        assert_eq!(ranked.listings.len(), 2);
    }

    #[test]
    fn zero_price_listing_survives_without_band_but_not_with_band() {
        let unpriced = {
            let mut item = make_item("상품", "가격문의", "2", "몰A");
            item.link = "https://smartstore.naver.com/a/1".to_owned();
            item
        };

        let without_band = rank_listings(make_response(vec![unpriced.clone()]), None);
        assert_eq!(without_band.listings.len(), 1);
        assert_eq!(without_band.listings[0].price, 0);

        let with_band = rank_listings(make_response(vec![unpriced]), Some(100_000));
        assert!(with_band.listings.is_empty());
    }
}
