/// State management module
/// 
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The result set and lightbox position (gallery.rs)
/// - The session that ties them to the query and loading flag (this file)

pub mod data;
pub mod gallery;

use gallery::Gallery;

/// Everything the input dispatcher is allowed to mutate.
///
/// Owned by the application and passed by reference to handlers.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Fetched results and lightbox position
    pub gallery: Gallery,
    /// Text currently in the query field
    pub query: String,
    /// True while a search request is in flight
    pub loading: bool,
    /// User-facing validation message, if one is showing
    pub notice: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new search may start only when idle and nothing has been loaded yet
    pub fn can_search(&self) -> bool {
        !self.loading && self.gallery.is_empty()
    }
}
