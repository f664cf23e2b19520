/// Shared data structures for the application state
/// 
/// These structs represent the data model that flows between
/// the search API layer and the UI layer.

use serde::Deserialize;

/// One entry of the `items` array returned by the search API
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ApiItem {
    /// Display title (not used by navigation logic)
    pub title: String,
    /// Full-resolution image URL shown in the lightbox
    pub link: Option<String>,
    /// Image metadata block (carries the thumbnail URL)
    pub image: Option<ApiImage>,
}

/// The nested `image` object of an API item
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiImage {
    /// Grid thumbnail URL
    pub thumbnail_link: Option<String>,
}

/// The top-level search response body
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ApiResponse {
    /// `None` when the API returned no `items` key at all
    pub items: Option<Vec<ApiItem>>,
}

/// Represents a single fetched result in the gallery
///
/// The index is assigned once at ingestion and is the stable handle
/// a grid cell uses to find its way back to the data.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Position within the result set (0-based, never reassigned)
    pub index: usize,
    /// Display title from the API
    pub title: String,
    /// Full-resolution image URL
    pub link: String,
    /// Thumbnail URL for the grid cell
    pub thumbnail_link: String,
}

impl ApiItem {
    /// Build an item the way the API would return it
    pub fn new(title: &str, link: &str, thumbnail_link: &str) -> Self {
        Self {
            title: title.to_string(),
            link: Some(link.to_string()),
            image: Some(ApiImage {
                thumbnail_link: Some(thumbnail_link.to_string()),
            }),
        }
    }

    /// Thumbnail URL, if the item carries one
    pub fn thumbnail_link(&self) -> Option<&str> {
        self.image.as_ref()?.thumbnail_link.as_deref()
    }

    /// True when both URLs needed for display are present
    pub fn is_displayable(&self) -> bool {
        self.link.is_some() && self.thumbnail_link().is_some()
    }
}

/// Navigation direction inside the lightbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Apply the direction to an index. `None` when stepping below zero.
    pub fn apply(self, index: usize) -> Option<usize> {
        match self {
            Direction::Previous => index.checked_sub(1),
            Direction::Next => index.checked_add(1),
        }
    }
}
