pub mod client;
pub mod error;
pub mod extract;
pub mod types;

pub use client::ProductPageClient;
pub use error::ExtractError;
pub use extract::extract_product;
pub use types::ExtractedProduct;
