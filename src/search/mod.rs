/// Image search module
///
/// This module handles:
/// - Building the request URL from the query and config (query.rs)
/// - Fetching result pages and raw image bytes (fetch.rs)
/// - Decoding and downscaling thumbnails (thumbnail.rs)

pub mod query;
pub mod fetch;
pub mod thumbnail;

pub use fetch::{build_client, fetch_image, fetch_page};
pub use query::build_url;
