use super::data::{ApiItem, Direction, SearchResult};

/// Whether the lightbox is showing, and which result it shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(usize),
}

/// The Gallery owns the fetched results and the lightbox position.
///
/// Results are append-only: each ingested item gets the next index and
/// keeps it for the lifetime of the gallery. The lightbox index, when
/// open, always points at an existing result.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    results: Vec<SearchResult>,
    lightbox: Lightbox,
}

impl Gallery {
    /// Create an empty gallery with the lightbox closed
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page of API items, numbering them after the existing results.
    ///
    /// Returns the newly created records so the caller can render them.
    /// Items are expected to be displayable (see [`ApiItem::is_displayable`]);
    /// missing URLs become empty strings.
    pub fn ingest_page(&mut self, items: Vec<ApiItem>) -> Vec<SearchResult> {
        let start = self.results.len();

        let added: Vec<SearchResult> = items
            .into_iter()
            .enumerate()
            .map(|(offset, item)| {
                let thumbnail_link = item.thumbnail_link().unwrap_or_default().to_string();
                SearchResult {
                    index: start + offset,
                    title: item.title,
                    link: item.link.unwrap_or_default(),
                    thumbnail_link,
                }
            })
            .collect();

        self.results.extend(added.iter().cloned());
        added
    }

    /// Open the lightbox at `index`. Out-of-range indices are ignored.
    pub fn open_at(&mut self, index: usize) -> Option<&SearchResult> {
        if index >= self.results.len() {
            return None;
        }

        self.lightbox = Lightbox::Open(index);
        self.results.get(index)
    }

    /// Move the lightbox one result in `direction`.
    ///
    /// Does nothing while closed, and clamps at both ends of the result set.
    pub fn step(&mut self, direction: Direction) -> Option<&SearchResult> {
        let Lightbox::Open(current) = self.lightbox else {
            return None;
        };

        let candidate = direction.apply(current)?;
        if candidate >= self.results.len() {
            return None;
        }

        self.lightbox = Lightbox::Open(candidate);
        self.results.get(candidate)
    }

    /// Close the lightbox (idempotent)
    pub fn close(&mut self) {
        self.lightbox = Lightbox::Closed;
    }

    /// Current lightbox state
    pub fn lightbox(&self) -> Lightbox {
        self.lightbox
    }

    /// The result currently shown in the lightbox, if open
    pub fn current(&self) -> Option<&SearchResult> {
        match self.lightbox {
            Lightbox::Open(index) => self.results.get(index),
            Lightbox::Closed => None,
        }
    }

    pub fn get(&self, index: usize) -> Option<&SearchResult> {
        self.results.get(index)
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
