/// Request URL construction for the image search API
use url::Url;

use crate::config::SearchConfig;
use crate::error::SearchError;

/// Build the fully encoded search URL for `query`.
///
/// Parameters are always appended in the same order (`key`, `cx`, `q`,
/// `searchType`, `imgSize`, `num`, `safe`) so the output is deterministic.
/// The query is sent as typed; it is only checked for content.
///
/// # Returns
/// * `Err(SearchError::EmptyQuery)` - if the query is empty or only whitespace
pub fn build_url(config: &SearchConfig, query: &str) -> Result<Url, SearchError> {
    if query.trim().is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    let num = config.page_size.to_string();
    let params = [
        ("key", config.api_key.as_str()),
        ("cx", config.engine_id.as_str()),
        ("q", query),
        ("searchType", config.search_type.as_str()),
        ("imgSize", config.image_size.as_str()),
        ("num", num.as_str()),
        ("safe", config.safe.as_str()),
    ];

    Url::parse_with_params(&config.endpoint, &params)
        .map_err(|e| SearchError::Transport(format!("invalid endpoint {}: {}", config.endpoint, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SearchConfig {
        SearchConfig {
            api_key: "test-key".to_string(),
            engine_id: "0108:hpyt".to_string(),
            ..SearchConfig::default()
        }
    }

    fn param(url: &Url, name: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn test_empty_query_is_rejected() {
        assert_eq!(build_url(&config(), ""), Err(SearchError::EmptyQuery));
        assert_eq!(build_url(&config(), "  \t\n "), Err(SearchError::EmptyQuery));
    }

    #[test]
    fn test_parameter_order_is_fixed() {
        let url = build_url(&config(), "cats").unwrap();

        let names: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(names, vec!["key", "cx", "q", "searchType", "imgSize", "num", "safe"]);
        assert_eq!(param(&url, "num").as_deref(), Some("9"));
        assert_eq!(param(&url, "safe").as_deref(), Some("high"));
        assert!(url.as_str().starts_with("https://www.googleapis.com/customsearch/v1?key=test-key&"));
    }

    #[test]
    fn test_query_round_trips_through_encoding() {
        let queries = [
            "cats",
            " leading and trailing ",
            "rock & roll = 100%",
            "a+b/c?d#e",
            "café 東京 🐱",
        ];

        for query in queries {
            let url = build_url(&config(), query).unwrap();

            // Reserved characters never appear raw in the query string
            let raw_q = url.query().unwrap().split('&').nth(2).unwrap();
            assert!(
                !raw_q[2..].contains(|c: char| matches!(c, '&' | '#' | '=' | ' ')),
                "unencoded: {}",
                raw_q
            );

            assert_eq!(param(&url, "q").as_deref(), Some(query));
        }
    }

    #[test]
    fn test_engine_id_is_encoded() {
        let url = build_url(&config(), "dogs").unwrap();

        assert!(url.as_str().contains("cx=0108%3Ahpyt"));
        assert_eq!(param(&url, "cx").as_deref(), Some("0108:hpyt"));
    }

    #[test]
    fn test_invalid_endpoint_is_reported() {
        let config = SearchConfig {
            endpoint: "not a url".to_string(),
            ..config()
        };

        assert!(matches!(build_url(&config, "cats"), Err(SearchError::Transport(_))));
    }
}
