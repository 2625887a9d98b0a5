pub mod client;
pub mod error;
pub mod normalize;
pub mod rank;
pub mod types;

pub use client::{NaverCredentials, NaverShopClient};
pub use error::NaverError;
pub use normalize::normalize_listing;
pub use rank::rank_listings;
pub use types::{Listing, RankedResults, SearchQuery, ShopItem, ShopSearchResponse};
