//! Regex-based extraction of product details from Coupang product page HTML.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::ExtractedProduct;

static META_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("valid regex"));
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title>([^<]+)</title>").expect("valid regex"));
static TOTAL_PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<span\s+class="total-price"[^>]*>\s*<strong>([0-9,]+)</strong>"#)
        .expect("valid total-price regex")
});
static SALE_PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)class="prod-sale-price"[^>]*>.*?([0-9,]+)원"#)
        .expect("valid sale-price regex")
});
static JSON_PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""salePrice"\s*:\s*([0-9]+)"#).expect("valid json-price regex"));

/// Suffix Coupang appends to the `<title>` element but not to `og:title`.
const TITLE_SUFFIX: &str = " | 쿠팡";

/// Price sources in priority order. Each returns a positive KRW amount or
/// `None`; a source whose captured text is zero or unparseable yields to the
/// next one rather than ending the scan.
const PRICE_MATCHERS: [fn(&str) -> Option<i64>; 4] = [
    total_price_widget,
    price_amount_meta,
    sale_price_block,
    embedded_json_price,
];

/// Extracts product details from Coupang product page HTML.
///
/// Returns `None` when no product name can be found; a page without a name
/// is considered unparseable. Price and image are best-effort and may be
/// absent in an otherwise successful extraction.
#[must_use]
pub fn extract_product(html: &str, url: &str) -> Option<ExtractedProduct> {
    let product_name = extract_name(html)?;
    let price = PRICE_MATCHERS.iter().find_map(|matcher| matcher(html));
    let image = find_meta_content(html, "property", "og:image").filter(|src| !src.is_empty());

    Some(ExtractedProduct {
        product_name,
        price,
        image,
        url: url.to_string(),
    })
}

/// Product name from `og:title`, falling back to the `<title>` element with
/// the marketplace suffix removed. First non-empty match wins.
fn extract_name(html: &str) -> Option<String> {
    find_meta_content(html, "property", "og:title")
        .filter(|name| !name.is_empty())
        .or_else(|| {
            TITLE_RE.captures(html).and_then(|c| {
                let name = c.get(1)?.as_str().replacen(TITLE_SUFFIX, "", 1);
                let name = name.trim();
                (!name.is_empty()).then(|| name.to_string())
            })
        })
}

fn total_price_widget(html: &str) -> Option<i64> {
    TOTAL_PRICE_RE
        .captures(html)
        .and_then(|c| parse_price(c.get(1)?.as_str()))
}

fn price_amount_meta(html: &str) -> Option<i64> {
    find_meta_content(html, "property", "product:price:amount")
        .as_deref()
        .and_then(parse_price)
}

fn sale_price_block(html: &str) -> Option<i64> {
    SALE_PRICE_RE
        .captures(html)
        .and_then(|c| parse_price(c.get(1)?.as_str()))
}

fn embedded_json_price(html: &str) -> Option<i64> {
    JSON_PRICE_RE
        .captures(html)
        .and_then(|c| parse_price(c.get(1)?.as_str()))
}

/// Parses a captured price string like `"1,299,000"` into KRW.
///
/// Zero and negative amounts are rejected so placeholder values in one page
/// location do not mask a real price in a later one.
fn parse_price(raw: &str) -> Option<i64> {
    raw.replace(',', "")
        .parse::<i64>()
        .ok()
        .filter(|&price| price > 0)
}

fn find_meta_content(html: &str, key_attr: &str, key_value: &str) -> Option<String> {
    META_TAG_RE.find_iter(html).find_map(|m| {
        let tag = m.as_str();
        let key = extract_attr(tag, key_attr)?;
        if key.eq_ignore_ascii_case(key_value) {
            extract_attr(tag, "content")
        } else {
            None
        }
    })
}

fn extract_attr(tag: &str, attr: &str) -> Option<String> {
    let pattern = format!(r#"(?is)\b{}\s*=\s*["']([^"']+)["']"#, regex::escape(attr));
    let re = Regex::new(&pattern).expect("valid attr regex");
    re.captures(tag)
        .and_then(|c| c.get(1).map(|m| m.as_str().trim().to_string()))
}
