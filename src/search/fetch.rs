/// Network access for search pages and image bytes
///
/// Each function performs exactly one GET. Nothing here retries:
/// a failure is reported to the caller and that action is over.
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

use crate::error::SearchError;
use crate::state::data::{ApiItem, ApiResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the shared HTTP client
pub fn build_client() -> Result<Client, SearchError> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| SearchError::Transport(e.to_string()))
}

/// Fetch one page of search results
///
/// # Returns
/// * `Ok(items)` - the displayable items of the `items` array, in API order
/// * `Err(SearchError::Request)` - non-200 status
/// * `Err(SearchError::Transport)` - no response at all
/// * `Err(SearchError::MalformedResponse)` - body is not a valid result page
pub async fn fetch_page(client: Client, url: Url) -> Result<Vec<ApiItem>, SearchError> {
    tracing::debug!(endpoint = %url.host_str().unwrap_or_default(), "fetching search page");

    let response = client.get(url).send().await?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(SearchError::Request {
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    parse_items(&body)
}

/// Extract the `items` array from a search response body.
///
/// Items without a full-size link or thumbnail link are dropped
/// since they cannot be shown in the grid or lightbox.
pub fn parse_items(body: &str) -> Result<Vec<ApiItem>, SearchError> {
    let response: ApiResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::MalformedResponse(e.to_string()))?;

    let items = response
        .items
        .ok_or_else(|| SearchError::MalformedResponse("missing `items` array".to_string()))?;

    let total = items.len();
    let displayable: Vec<ApiItem> = items.into_iter().filter(ApiItem::is_displayable).collect();

    if displayable.len() < total {
        tracing::warn!(
            skipped = total - displayable.len(),
            "dropped search results without image links"
        );
    }

    Ok(displayable)
}

/// Download the raw bytes of an image (thumbnail or full size)
pub async fn fetch_image(client: Client, url: String) -> Result<Vec<u8>, SearchError> {
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| SearchError::Image(format!("{}: {}", url, e)))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(SearchError::Request {
            status: status.as_u16(),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| SearchError::Image(format!("{}: {}", url, e)))?;

    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PAGE: &str = r#"{
        "kind": "customsearch#search",
        "items": [
            {
                "title": "Cat on a mat",
                "link": "https://example.com/1.jpg",
                "image": { "thumbnailLink": "https://example.com/1_t.jpg", "width": 1024 }
            },
            {
                "title": "Broken entry",
                "link": "https://example.com/2.jpg"
            },
            {
                "title": "Cat in a hat",
                "link": "https://example.com/3.jpg",
                "image": { "thumbnailLink": "https://example.com/3_t.jpg" }
            }
        ]
    }"#;

    #[test]
    fn test_parse_items_keeps_order_and_skips_undisplayable() {
        let items = parse_items(SAMPLE_PAGE).unwrap();

        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Cat on a mat", "Cat in a hat"]);
    }

    #[test]
    fn test_missing_items_is_malformed() {
        let result = parse_items(r#"{"kind": "customsearch#search"}"#);
        assert!(matches!(result, Err(SearchError::MalformedResponse(_))));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let result = parse_items("<html>rate limited</html>");
        assert!(matches!(result, Err(SearchError::MalformedResponse(_))));
    }

    #[test]
    fn test_empty_items_array_is_ok() {
        assert_eq!(parse_items(r#"{"items": []}"#).unwrap(), Vec::new());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client = build_client().unwrap();
        // Port 9 (discard) on localhost is refused on any sane test host
        let url = Url::parse("http://127.0.0.1:9/customsearch/v1?q=x").unwrap();

        let result = fetch_page(client, url).await;
        assert!(matches!(result, Err(SearchError::Transport(_))));
    }
}
