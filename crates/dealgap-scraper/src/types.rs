//! Product details extracted from a Coupang product page.
//!
//! ## Observed page shapes (live coupang.com product pages)
//!
//! Coupang serves several page templates depending on the product and on
//! whether the request looks like a browser. The fields below reflect what
//! each template reliably exposes:
//!
//! - `og:title` is present on every observed template and already excludes
//!   the `" | 쿠팡"` suffix that the `<title>` element carries.
//! - The sale price appears in one of four places depending on template:
//!   a `total-price` widget, a `product:price:amount` meta tag, a
//!   `prod-sale-price` block, or a `"salePrice"` key inside embedded JSON
//!   state. No single location is guaranteed, so extraction tries each in
//!   that order.
//! - `og:image` is usually present but may be absent on restricted listings.

use serde::Serialize;

/// Product details extracted from a single product page.
///
/// `name` is the only mandatory field: a page that yields no name is treated
/// as unparseable rather than producing an empty record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedProduct {
    /// Product display name.
    pub product_name: String,

    /// Sale price in KRW. `None` when no positive price was found in any
    /// known page location.
    pub price: Option<i64>,

    /// Primary product image URL, when the page exposes one.
    pub image: Option<String>,

    /// The product page URL the details were extracted from.
    pub url: String,
}
